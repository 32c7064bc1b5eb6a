//! Request and response bodies that are not domain models.

use serde::{Deserialize, Serialize};

use crate::models::airport::AirportDescriptor;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateBatchRequest {
    #[serde(default)]
    pub airports: Vec<AirportDescriptor>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateFlightStatusRequest {
    pub flight_ids: Vec<i64>,
    /// Raw code; validated against the known statuses by the service.
    pub status_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateNoticeRequest {
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherQuery {
    #[serde(default)]
    pub city: String,
}

/// `{success, message}` acknowledgement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionResponse {
    pub success: bool,
    pub message: String,
}

impl ActionResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
