use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ForecastError;
use crate::format::{country_flag, day_label, display_max, display_min};
use crate::icon::{IconClass, WeatherCode};

/// A resolved geocoding candidate: everything the forecast request and the
/// display header need.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoPlace {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// IANA timezone identifier, e.g. "Europe/Paris".
    pub timezone: String,
    /// Two-letter ISO country code, e.g. "FR".
    pub country_code: String,
}

/// One day of the raw forecast, in API response order (day 0 = today).
///
/// `min_temp <= max_temp` is assumed from upstream data and not validated
/// here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub min_temp: f64,
    pub max_temp: f64,
    pub code: WeatherCode,
}

/// A forecast day shaped for presentation: label, glyph, whole-degree
/// temperatures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCard {
    pub label: String,
    pub icon: IconClass,
    pub min_temp: i32,
    pub max_temp: i32,
}

impl DayCard {
    pub fn from_day(day: &ForecastDay, is_first: bool) -> Self {
        Self {
            label: day_label(day.date, is_first),
            icon: IconClass::classify(day.code),
            min_temp: display_min(day.min_temp),
            max_temp: display_max(day.max_temp),
        }
    }
}

/// The resolved location as shown in the report header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLocation {
    pub name: String,
    pub flag: String,
}

/// A complete, self-contained lookup result.
///
/// Built wholesale by the retrieval flow and handed to the presenting
/// surface as one value, so a failed flow can never leave half-updated
/// state behind.
#[derive(Debug, Clone)]
pub struct ForecastReport {
    pub location: DisplayLocation,
    pub days: Vec<DayCard>,
}

impl ForecastReport {
    pub fn build(place: &GeoPlace, days: &[ForecastDay]) -> Result<Self, ForecastError> {
        let location = DisplayLocation {
            name: place.name.clone(),
            flag: country_flag(&place.country_code)?,
        };

        let cards = days
            .iter()
            .enumerate()
            .map(|(i, day)| DayCard::from_day(day, i == 0))
            .collect();

        Ok(Self { location, days: cards })
    }
}
