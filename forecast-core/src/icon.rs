//! WMO weather code classification.
//!
//! The forecast API reports one WMO synoptic code per day. The display layer
//! only distinguishes a handful of sky conditions, so the codes are grouped
//! into icon classes by a fixed table.

/// Daily WMO weather code as reported by the forecast API (0–99).
pub type WeatherCode = u8;

/// Display class for a day's weather, one per disjoint group of WMO codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconClass {
    ClearSky,
    MainlyClear,
    PartlyCloudy,
    Overcast,
    Fog,
    Drizzle,
    Rain,
    Snow,
    Thunderstorm,
    HeavyThunderstorm,
    /// Code outside every known group. Surfaced explicitly, never defaulted
    /// to a valid-looking condition.
    Unrecognized,
}

/// Code groups in lookup order. The groups are disjoint, so the first match
/// is the only match.
const ICON_TABLE: &[(&[WeatherCode], IconClass)] = &[
    (&[0], IconClass::ClearSky),
    (&[1], IconClass::MainlyClear),
    (&[2], IconClass::PartlyCloudy),
    (&[3], IconClass::Overcast),
    (&[45, 48], IconClass::Fog),
    (&[51, 56, 61, 66, 80], IconClass::Drizzle),
    (&[53, 55, 57, 63, 65, 67, 81, 82], IconClass::Rain),
    (&[71, 73, 75, 77, 85, 86], IconClass::Snow),
    (&[95], IconClass::Thunderstorm),
    (&[96, 99], IconClass::HeavyThunderstorm),
];

impl IconClass {
    /// Classify a WMO code into its icon class.
    ///
    /// Pure lookup over the static table; unknown codes yield
    /// [`IconClass::Unrecognized`].
    pub fn classify(code: WeatherCode) -> Self {
        ICON_TABLE
            .iter()
            .find(|(codes, _)| codes.contains(&code))
            .map_or(IconClass::Unrecognized, |(_, class)| *class)
    }

    /// Emoji glyph for display. `Unrecognized` keeps a visible sentinel so a
    /// gap in the table cannot pass for a clear day.
    pub fn glyph(&self) -> &'static str {
        match self {
            IconClass::ClearSky => "☀️",
            IconClass::MainlyClear => "🌤",
            IconClass::PartlyCloudy => "⛅️",
            IconClass::Overcast => "☁️",
            IconClass::Fog => "🌫",
            IconClass::Drizzle => "🌦",
            IconClass::Rain => "🌧",
            IconClass::Snow => "🌨",
            IconClass::Thunderstorm => "🌩",
            IconClass::HeavyThunderstorm => "⛈",
            IconClass::Unrecognized => "NOT FOUND",
        }
    }
}
