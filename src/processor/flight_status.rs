use tracing::{error, info};

use crate::db::Repository;
use crate::error::StatusError;
use crate::models::flight::FlightAnnouncement;
use crate::models::status::FlightStatus;

/// Moves every listed flight to `status_id` in one transaction and refreshes
/// their announcements.
///
/// The status code is validated before anything touches the database.
pub async fn update_status(
    repo: &dyn Repository,
    flight_ids: &[i64],
    status_id: i64,
) -> Result<Vec<FlightAnnouncement>, StatusError> {
    let status = FlightStatus::try_from(status_id)?;
    if flight_ids.is_empty() {
        return Err(StatusError::NoFlights);
    }

    let announcements = repo
        .set_flight_status(flight_ids, status)
        .await
        .map_err(|e| {
            error!("Status update to {} rolled back: {}", status, e);
            e
        })?;

    info!(
        "Set {} of {} requested flight(s) to {}",
        announcements.len(),
        flight_ids.len(),
        status
    );
    Ok(announcements)
}
