use async_trait::async_trait;
use std::fmt::Debug;

use crate::error::ForecastError;
use crate::model::{ForecastDay, GeoPlace};

pub mod open_meteo;

/// Backend for the two network lookups a forecast flow performs.
///
/// The production implementation is [`open_meteo::OpenMeteoProvider`]; tests
/// substitute a stub to exercise the flow without the network.
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    /// Resolve a free-text place name to zero or more candidates.
    async fn geocode(&self, name: &str) -> Result<Vec<GeoPlace>, ForecastError>;

    /// Fetch the daily forecast for a resolved place, in response order
    /// (day 0 = today).
    async fn daily_forecast(&self, place: &GeoPlace) -> Result<Vec<ForecastDay>, ForecastError>;
}
