//! Weather client error types.

use std::time::Duration;

/// Errors from fetching live weather.
///
/// These never reach route computation: [`super::WeatherService`] recovers
/// from all of them by falling back to mock weather.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WeatherError {
    /// Request failed (connection refused, DNS, TLS, ...)
    #[error("HTTP error: {0}")]
    Http(String),

    /// Service answered with a non-success status.
    #[error("weather API error {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body did not have the expected shape.
    #[error("JSON parse error: {message}{}", body_suffix(.body))]
    Json {
        message: String,
        body: Option<String>,
    },

    /// No answer within the configured time budget.
    #[error("weather request timed out after {0:?}")]
    Timeout(Duration),

    /// Live weather is not available (e.g. no API key).
    #[error("not configured: {0}")]
    NotConfigured(String),
}

fn body_suffix(body: &Option<String>) -> String {
    match body {
        Some(body) => format!(" (body: {body})"),
        None => String::new(),
    }
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        WeatherError::Http(err.to_string())
    }
}
