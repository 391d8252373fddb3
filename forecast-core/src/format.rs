//! Display formatting helpers: country flag emoji, day labels, rounded
//! temperatures.

use chrono::NaiveDate;

use crate::error::ForecastError;

/// Offset from an uppercase ASCII letter to its Unicode regional indicator
/// symbol. Two adjacent regional indicators render as a national flag.
const REGIONAL_INDICATOR_OFFSET: u32 = 127_397;

/// Convert a two-letter ISO country code into its flag emoji.
///
/// Case-insensitive. Anything other than exactly two ASCII letters is
/// rejected rather than producing garbage code points.
pub fn country_flag(country_code: &str) -> Result<String, ForecastError> {
    let invalid = || ForecastError::InvalidCountryCode(country_code.to_owned());

    if country_code.chars().count() != 2
        || !country_code.chars().all(|c| c.is_ascii_alphabetic())
    {
        return Err(invalid());
    }

    let mut flag = String::with_capacity(8);
    for letter in country_code.chars() {
        let cp = letter.to_ascii_uppercase() as u32 + REGIONAL_INDICATOR_OFFSET;
        flag.push(char::from_u32(cp).ok_or_else(invalid)?);
    }

    Ok(flag)
}

/// Label for a forecast day: a fixed "Today" for the first day, otherwise the
/// abbreviated English weekday name ("Mon", "Tue", ...).
pub fn day_label(date: NaiveDate, is_first: bool) -> String {
    if is_first {
        "Today".to_owned()
    } else {
        // chrono's %a is locale-independent English, which is the fixed
        // locale we want.
        date.format("%a").to_string()
    }
}

/// Minimum temperature rounded down to a whole degree for display.
pub fn display_min(temp_c: f64) -> i32 {
    temp_c.floor() as i32
}

/// Maximum temperature rounded up to a whole degree for display.
pub fn display_max(temp_c: f64) -> i32 {
    temp_c.ceil() as i32
}
