use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored NOTAM.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Notice {
    pub id: i64,
    pub airport_code: String,
    pub city: String,
    pub message: String,
    /// Joined from `airports`; absent when the code is not a known airport.
    pub airport_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewNotice {
    pub airport_code: String,
    pub city: String,
    pub message: String,
}

/// Longest message accepted by a notice edit, in characters.
pub const MAX_MESSAGE_CHARS: usize = 1000;
