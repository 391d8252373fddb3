//! Core library for the `forecast` CLI.
//!
//! This crate defines:
//! - Configuration (API base URLs, forecast horizon)
//! - The WMO weather-code → icon classification and display formatters
//! - The Open-Meteo geocoding/forecast client behind a provider trait
//! - The retrieval flow that turns a place name into a complete report
//!
//! It is used by `forecast-cli`, but can also be reused by other binaries or
//! services.

pub mod config;
pub mod error;
pub mod flow;
pub mod format;
pub mod icon;
pub mod model;
pub mod provider;

pub use config::Config;
pub use error::ForecastError;
pub use flow::fetch_report;
pub use icon::{IconClass, WeatherCode};
pub use model::{DayCard, DisplayLocation, ForecastDay, ForecastReport, GeoPlace};
pub use provider::{ForecastProvider, open_meteo::OpenMeteoProvider};
