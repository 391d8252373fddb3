//! Open-Meteo client: geocoding search plus daily forecast.
//!
//! Both endpoints are free and keyless. Base URLs come from [`Config`] so
//! integration tests can point the client at a local mock server.

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::config::Config;
use crate::error::ForecastError;
use crate::model::{ForecastDay, GeoPlace};

use super::ForecastProvider;

const REQUEST_TIMEOUT_SECS: u64 = 10;
const USER_AGENT: &str = concat!("classy-forecast/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    http: Client,
    geocoding_base: String,
    forecast_base: String,
    forecast_days: Option<u8>,
}

impl OpenMeteoProvider {
    pub fn new(config: &Config) -> Result<Self, ForecastError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            geocoding_base: config.geocoding_base_url.clone(),
            forecast_base: config.forecast_base_url.clone(),
            forecast_days: config.forecast_days,
        })
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(&self, url: &str) -> Result<T, ForecastError> {
        let res = self.http.get(url).send().await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(ForecastError::Api {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| ForecastError::Malformed(e.to_string()))
    }
}

#[async_trait]
impl ForecastProvider for OpenMeteoProvider {
    async fn geocode(&self, name: &str) -> Result<Vec<GeoPlace>, ForecastError> {
        let url = format!(
            "{}/v1/search?name={}&count=5&language=en&format=json",
            self.geocoding_base,
            urlencoding::encode(name)
        );

        tracing::debug!(%name, "geocoding place name");
        let parsed: GeocodingResponse = self.get_json(&url).await?;

        let places = parsed
            .results
            .unwrap_or_default()
            .into_iter()
            .map(|r| GeoPlace {
                name: r.name,
                latitude: r.latitude,
                longitude: r.longitude,
                timezone: r.timezone,
                country_code: r.country_code,
            })
            .collect();

        Ok(places)
    }

    async fn daily_forecast(&self, place: &GeoPlace) -> Result<Vec<ForecastDay>, ForecastError> {
        let mut url = format!(
            "{}/v1/forecast?latitude={}&longitude={}&timezone={}&daily=weathercode,temperature_2m_max,temperature_2m_min",
            self.forecast_base,
            place.latitude,
            place.longitude,
            urlencoding::encode(&place.timezone)
        );
        if let Some(days) = self.forecast_days {
            url.push_str(&format!("&forecast_days={days}"));
        }

        tracing::debug!(place = %place.name, lat = place.latitude, lng = place.longitude, "fetching daily forecast");
        let parsed: ForecastResponse = self.get_json(&url).await?;
        parsed.daily.into_days()
    }
}

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    /// Absent entirely when the search matched nothing.
    results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    name: String,
    latitude: f64,
    longitude: f64,
    timezone: String,
    country_code: String,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    daily: DailyData,
}

/// The daily block is three parallel arrays aligned by index.
#[derive(Debug, Deserialize)]
struct DailyData {
    time: Vec<NaiveDate>,
    #[serde(rename = "weathercode")]
    weather_code: Vec<u8>,
    #[serde(rename = "temperature_2m_max")]
    temperature_max: Vec<f64>,
    #[serde(rename = "temperature_2m_min")]
    temperature_min: Vec<f64>,
}

impl DailyData {
    fn into_days(self) -> Result<Vec<ForecastDay>, ForecastError> {
        let len = self.time.len();
        if self.weather_code.len() != len
            || self.temperature_max.len() != len
            || self.temperature_min.len() != len
        {
            return Err(ForecastError::Malformed(format!(
                "daily series lengths disagree: {} dates, {} codes, {} max, {} min",
                len,
                self.weather_code.len(),
                self.temperature_max.len(),
                self.temperature_min.len(),
            )));
        }

        let days = self
            .time
            .into_iter()
            .zip(self.weather_code)
            .zip(self.temperature_min.into_iter().zip(self.temperature_max))
            .map(|((date, code), (min_temp, max_temp))| ForecastDay {
                date,
                min_temp,
                max_temp,
                code,
            })
            .collect();

        Ok(days)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_owned()
    }
}
