use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::StatusError;

/// Operational status a flight can be moved to.
///
/// The wire form is the integer code stored in `flights.status_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i32")]
pub enum FlightStatus {
    Scheduled,
    Delayed,
    ReRoute,
    ClearForLanding,
}

impl FlightStatus {
    pub fn code(self) -> i32 {
        match self {
            FlightStatus::Scheduled => 1,
            FlightStatus::Delayed => 2,
            FlightStatus::ReRoute => 3,
            FlightStatus::ClearForLanding => 4,
        }
    }

    /// Human-readable text stored on announcements.
    pub fn text(self) -> &'static str {
        match self {
            FlightStatus::Scheduled => "Scheduled",
            FlightStatus::Delayed => "Delayed",
            FlightStatus::ReRoute => "Re-route",
            FlightStatus::ClearForLanding => "Clear for Landing",
        }
    }
}

impl TryFrom<i64> for FlightStatus {
    type Error = StatusError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(FlightStatus::Scheduled),
            2 => Ok(FlightStatus::Delayed),
            3 => Ok(FlightStatus::ReRoute),
            4 => Ok(FlightStatus::ClearForLanding),
            other => Err(StatusError::UnknownStatus(other)),
        }
    }
}

impl From<FlightStatus> for i32 {
    fn from(status: FlightStatus) -> Self {
        status.code()
    }
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
