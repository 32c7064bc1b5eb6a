use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use super::status::FlightStatus;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Flight {
    pub id: i64,
    pub flight_number: String,
    pub airline_code: String,
    pub origin_code: String,
    pub destination_code: String,
    pub aircraft_icao_code: Option<String>,
    pub scheduled_departure_time: Option<DateTime<Utc>>,
    pub scheduled_arrival_time: Option<DateTime<Utc>>,
    pub status_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Row of the `flight_status` lookup table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct FlightStatusRecord {
    pub id: i32,
    pub status_code: String,
    pub status_name: String,
    pub description: Option<String>,
    pub id_status_code: Option<i32>,
}

/// Denormalized status notice for a single flight, keyed by `flight_id`,
/// so consumers can read route and status text without a join.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct FlightAnnouncement {
    pub flight_id: i64,
    pub flight_number: String,
    pub airline_code: String,
    pub origin_code: String,
    pub destination_code: String,
    pub status_id: i32,
    pub status_text: String,
    pub updated_at: DateTime<Utc>,
}

impl FlightAnnouncement {
    pub fn for_flight(flight: &Flight, status: FlightStatus, at: DateTime<Utc>) -> Self {
        Self {
            flight_id: flight.id,
            flight_number: flight.flight_number.clone(),
            airline_code: flight.airline_code.clone(),
            origin_code: flight.origin_code.clone(),
            destination_code: flight.destination_code.clone(),
            status_id: status.code(),
            status_text: status.text().to_string(),
            updated_at: at,
        }
    }
}
