use thiserror::Error;

/// Failure taxonomy for a forecast lookup flow.
///
/// Every variant is terminal for the current flow: there is no retry and no
/// partially built report. `LocationNotFound` is the only user-facing case;
/// the rest are logged and surfaced as a generic failure.
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("no geocoding results for '{0}'")]
    LocationNotFound(String),

    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API request failed with status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("malformed API response: {0}")]
    Malformed(String),

    #[error("invalid country code '{0}': expected exactly two ASCII letters")]
    InvalidCountryCode(String),
}

impl ForecastError {
    /// Whether this error should be shown to the user verbatim rather than
    /// as a generic failure message.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, ForecastError::LocationNotFound(_))
    }
}
