//! Error types for weather provider operations.

use thiserror::Error;

/// Errors that can occur while fetching current weather conditions.
///
/// No retry or fallback logic lives here; the caller decides whether a
/// failed fetch aborts the operation (it does for diary creation, since
/// no other weather source exists).
#[derive(Error, Debug)]
pub enum WeatherError {
    /// The provider could not be reached or answered with a non-success
    /// status. Covers network failures and timeouts.
    #[error("Weather provider unavailable: {message}")]
    Unavailable { message: String },

    /// The provider rejected the configured API key.
    #[error("Weather provider rejected the API key")]
    Unauthorized,

    /// The response body could not be decoded into the expected shape.
    #[error("Failed to decode weather response: {message}")]
    Parse { message: String },
}
