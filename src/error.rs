//! Typed errors for storage, weather lookups, flight status and notice edits.

use thiserror::Error;

/// Errors raised by a [`crate::db::Repository`] implementation.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Failure modes of a weather lookup.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection refused, DNS failure or timeout.
    #[error("weather service unreachable: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("weather service returned status {0}")]
    Status(u16),

    /// The body was not JSON, or lacked a usable weather description.
    #[error("invalid weather data: {0}")]
    InvalidPayload(String),
}

impl WeatherError {
    /// Short reason used in batch error entries.
    pub fn batch_reason(&self) -> &'static str {
        match self {
            WeatherError::Transport(_) | WeatherError::Status(_) => "Webhook failed",
            WeatherError::InvalidPayload(_) => "Invalid or missing weather data",
        }
    }
}

#[derive(Debug, Error)]
pub enum StatusError {
    #[error("unknown flight status id {0}, expected 1, 2, 3 or 4")]
    UnknownStatus(i64),

    #[error("no flight ids given")]
    NoFlights,

    #[error(transparent)]
    Repo(#[from] RepoError),
}

/// Failures of notice edit and delete.
#[derive(Debug, Error)]
pub enum NoticeError {
    #[error("message is required")]
    EmptyMessage,

    #[error("message must not exceed {max} characters")]
    MessageTooLong { max: usize },

    #[error("NOTAM {0} not found")]
    NotFound(i64),

    #[error(transparent)]
    Repo(#[from] RepoError),
}
