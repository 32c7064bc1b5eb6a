//! In-memory [`Repository`] used by unit and router tests.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use super::Repository;
use crate::error::RepoError;
use crate::models::airport::Airport;
use crate::models::flight::{Flight, FlightAnnouncement, FlightStatusRecord};
use crate::models::notice::{NewNotice, Notice};
use crate::models::status::FlightStatus;

#[derive(Default)]
struct State {
    airports: Vec<Airport>,
    flights: BTreeMap<i64, Flight>,
    announcements: BTreeMap<i64, FlightAnnouncement>,
    notices: BTreeMap<i64, Notice>,
    next_notice_id: i64,
}

#[derive(Default)]
pub struct MemoryRepository {
    state: Mutex<State>,
    fail_writes: AtomicBool,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_airport(self, iata_code: &str, airport_name: &str, city: &str) -> Self {
        self.state.lock().unwrap().airports.push(Airport {
            iata_code: iata_code.to_string(),
            airport_name: airport_name.to_string(),
            city: city.to_string(),
            country: None,
            airport_status: Some("Operational".to_string()),
            timezone: None,
        });
        self
    }

    pub fn with_flight(self, id: i64, flight_number: &str, origin: &str, destination: &str) -> Self {
        let now = Utc::now();
        self.state.lock().unwrap().flights.insert(
            id,
            Flight {
                id,
                flight_number: flight_number.to_string(),
                airline_code: flight_number.chars().take(2).collect(),
                origin_code: origin.to_string(),
                destination_code: destination.to_string(),
                aircraft_icao_code: Some("A320".to_string()),
                scheduled_departure_time: Some(now + Duration::hours(id)),
                scheduled_arrival_time: Some(now + Duration::hours(id + 2)),
                status_id: FlightStatus::Scheduled.code(),
                created_at: now,
                updated_at: now,
            },
        );
        self
    }

    /// Makes every subsequent write fail with a database error.
    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    pub fn flight(&self, id: i64) -> Option<Flight> {
        self.state.lock().unwrap().flights.get(&id).cloned()
    }

    pub fn announcements(&self) -> Vec<FlightAnnouncement> {
        self.state.lock().unwrap().announcements.values().cloned().collect()
    }

    pub fn notice_count(&self) -> usize {
        self.state.lock().unwrap().notices.len()
    }

    fn check_writable(&self) -> Result<(), RepoError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(RepoError::Database(sqlx::Error::Protocol(
                "simulated write failure".to_string(),
            )));
        }
        Ok(())
    }
}

fn airport_name(state: &State, code: &str) -> Option<String> {
    state
        .airports
        .iter()
        .find(|a| a.iata_code == code)
        .map(|a| a.airport_name.clone())
}

#[async_trait]
impl Repository for MemoryRepository {
    async fn ping(&self) -> Result<(), RepoError> {
        Ok(())
    }

    async fn list_airports(&self) -> Result<Vec<Airport>, RepoError> {
        Ok(self.state.lock().unwrap().airports.clone())
    }

    async fn list_flights(&self) -> Result<Vec<Flight>, RepoError> {
        Ok(self.state.lock().unwrap().flights.values().cloned().collect())
    }

    async fn list_flight_statuses(&self) -> Result<Vec<FlightStatusRecord>, RepoError> {
        let statuses = [
            FlightStatus::Scheduled,
            FlightStatus::Delayed,
            FlightStatus::ReRoute,
            FlightStatus::ClearForLanding,
        ];
        Ok(statuses
            .into_iter()
            .map(|s| FlightStatusRecord {
                id: s.code(),
                status_code: s.text().to_uppercase(),
                status_name: s.text().to_string(),
                description: None,
                id_status_code: Some(s.code()),
            })
            .collect())
    }

    async fn list_notices(&self) -> Result<Vec<Notice>, RepoError> {
        let state = self.state.lock().unwrap();
        Ok(state.notices.values().rev().cloned().collect())
    }

    async fn find_notice(&self, id: i64) -> Result<Option<Notice>, RepoError> {
        Ok(self.state.lock().unwrap().notices.get(&id).cloned())
    }

    async fn insert_notice(&self, notice: &NewNotice) -> Result<Option<Notice>, RepoError> {
        self.check_writable()?;
        let mut state = self.state.lock().unwrap();
        let duplicate = state
            .notices
            .values()
            .any(|n| n.airport_code == notice.airport_code && n.message == notice.message);
        if duplicate {
            return Ok(None);
        }
        state.next_notice_id += 1;
        let now = Utc::now();
        let stored = Notice {
            id: state.next_notice_id,
            airport_code: notice.airport_code.clone(),
            city: notice.city.clone(),
            message: notice.message.clone(),
            airport_name: airport_name(&state, &notice.airport_code),
            created_at: now,
            updated_at: now,
        };
        state.notices.insert(stored.id, stored.clone());
        Ok(Some(stored))
    }

    async fn update_notice_message(&self, id: i64, message: &str) -> Result<Option<Notice>, RepoError> {
        self.check_writable()?;
        let mut state = self.state.lock().unwrap();
        Ok(state.notices.get_mut(&id).map(|n| {
            n.message = message.to_string();
            n.updated_at = Utc::now();
            n.clone()
        }))
    }

    async fn delete_notice(&self, id: i64) -> Result<Option<Notice>, RepoError> {
        self.check_writable()?;
        Ok(self.state.lock().unwrap().notices.remove(&id))
    }

    async fn set_flight_status(
        &self,
        flight_ids: &[i64],
        status: FlightStatus,
    ) -> Result<Vec<FlightAnnouncement>, RepoError> {
        self.check_writable()?;
        let mut state = self.state.lock().unwrap();
        let now = Utc::now();
        let mut announcements = Vec::new();
        let ids: BTreeSet<i64> = flight_ids.iter().copied().collect();
        for id in ids {
            let Some(flight) = state.flights.get_mut(&id) else {
                continue;
            };
            flight.status_id = status.code();
            flight.updated_at = now;
            announcements.push(FlightAnnouncement::for_flight(flight, status, now));
        }
        for announcement in &announcements {
            state
                .announcements
                .insert(announcement.flight_id, announcement.clone());
        }
        Ok(announcements)
    }
}
