//! The forecast retrieval flow: geocode, fetch, classify, format.
//!
//! One invocation is one flow; the two network calls are strictly
//! sequential and any failure aborts the flow with nothing rendered.

use crate::error::ForecastError;
use crate::model::ForecastReport;
use crate::provider::ForecastProvider;

/// Resolve a free-text place name and produce a complete forecast report.
///
/// An empty geocoding result aborts before any forecast request is issued.
pub async fn fetch_report<P>(provider: &P, place_name: &str) -> Result<ForecastReport, ForecastError>
where
    P: ForecastProvider + ?Sized,
{
    let candidates = provider.geocode(place_name).await?;

    let Some(place) = candidates.first() else {
        tracing::info!(%place_name, "geocoding returned no results");
        return Err(ForecastError::LocationNotFound(place_name.to_owned()));
    };

    tracing::info!(
        resolved = %place.name,
        lat = place.latitude,
        lng = place.longitude,
        timezone = %place.timezone,
        "resolved place, fetching forecast"
    );

    let days = provider.daily_forecast(place).await?;

    ForecastReport::build(place, &days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::IconClass;
    use crate::model::{ForecastDay, GeoPlace};
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Stub provider with canned responses and a forecast call counter.
    #[derive(Debug)]
    struct StubProvider {
        places: Vec<GeoPlace>,
        days: Vec<ForecastDay>,
        forecast_calls: AtomicUsize,
    }

    #[async_trait]
    impl ForecastProvider for StubProvider {
        async fn geocode(&self, _name: &str) -> Result<Vec<GeoPlace>, ForecastError> {
            Ok(self.places.clone())
        }

        async fn daily_forecast(
            &self,
            _place: &GeoPlace,
        ) -> Result<Vec<ForecastDay>, ForecastError> {
            self.forecast_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.days.clone())
        }
    }

    fn paris() -> GeoPlace {
        GeoPlace {
            name: "Paris".to_owned(),
            latitude: 48.85,
            longitude: 2.35,
            timezone: "Europe/Paris".to_owned(),
            country_code: "FR".to_owned(),
        }
    }

    fn three_days_from(start: NaiveDate) -> Vec<ForecastDay> {
        let codes = [0u8, 61, 95];
        let mins = [10.0, 8.0, 5.0];
        let maxs = [20.0, 15.0, 12.0];
        (0..3)
            .map(|i| ForecastDay {
                date: start + chrono::Days::new(i as u64),
                min_temp: mins[i],
                max_temp: maxs[i],
                code: codes[i],
            })
            .collect()
    }

    #[tokio::test]
    async fn empty_geocoding_aborts_before_forecast() {
        let provider = StubProvider {
            places: vec![],
            days: vec![],
            forecast_calls: AtomicUsize::new(0),
        };

        let err = fetch_report(&provider, "nowhereville").await.unwrap_err();
        assert!(matches!(err, ForecastError::LocationNotFound(_)));
        assert_eq!(provider.forecast_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn paris_three_day_report() {
        let start = NaiveDate::from_ymd_opt(2024, 7, 1).expect("valid date");
        let provider = StubProvider {
            places: vec![paris()],
            days: three_days_from(start),
            forecast_calls: AtomicUsize::new(0),
        };

        let report = fetch_report(&provider, "Paris").await.expect("flow succeeds");

        assert_eq!(report.location.name, "Paris");
        assert_eq!(report.location.flag, "🇫🇷");
        assert_eq!(report.days.len(), 3);

        assert_eq!(report.days[0].label, "Today");
        assert_eq!(report.days[0].icon, IconClass::ClearSky);
        assert_eq!(report.days[0].min_temp, 10);
        assert_eq!(report.days[0].max_temp, 20);

        assert_eq!(report.days[1].icon, IconClass::Drizzle);
        assert_eq!(report.days[1].min_temp, 8);
        assert_eq!(report.days[1].max_temp, 15);

        assert_eq!(report.days[2].icon, IconClass::Thunderstorm);
        assert_eq!(report.days[2].min_temp, 5);
        assert_eq!(report.days[2].max_temp, 12);

        assert_eq!(provider.forecast_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn first_candidate_wins() {
        let mut second = paris();
        second.name = "Paris, Texas".to_owned();
        second.country_code = "US".to_owned();

        let provider = StubProvider {
            places: vec![paris(), second],
            days: vec![],
            forecast_calls: AtomicUsize::new(0),
        };

        let report = fetch_report(&provider, "Paris").await.expect("flow succeeds");
        assert_eq!(report.location.name, "Paris");
        assert_eq!(report.location.flag, "🇫🇷");
    }
}
