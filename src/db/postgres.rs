use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

use super::{queries, DbPool, Repository};
use crate::error::RepoError;
use crate::models::airport::Airport;
use crate::models::flight::{Flight, FlightAnnouncement, FlightStatusRecord};
use crate::models::notice::{NewNotice, Notice};
use crate::models::status::FlightStatus;

/// [`Repository`] backed by the PostgreSQL pool.
#[derive(Clone)]
pub struct PgRepository {
    pool: DbPool,
}

impl PgRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository for PgRepository {
    async fn ping(&self) -> Result<(), RepoError> {
        sqlx::query(queries::PING).execute(&self.pool).await?;
        Ok(())
    }

    async fn list_airports(&self) -> Result<Vec<Airport>, RepoError> {
        let rows = sqlx::query_as::<_, Airport>(queries::SELECT_AIRPORTS)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn list_flights(&self) -> Result<Vec<Flight>, RepoError> {
        let rows = sqlx::query_as::<_, Flight>(queries::SELECT_FLIGHTS)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn list_flight_statuses(&self) -> Result<Vec<FlightStatusRecord>, RepoError> {
        let rows = sqlx::query_as::<_, FlightStatusRecord>(queries::SELECT_FLIGHT_STATUSES)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn list_notices(&self) -> Result<Vec<Notice>, RepoError> {
        let rows = sqlx::query_as::<_, Notice>(queries::SELECT_NOTICES)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_notice(&self, id: i64) -> Result<Option<Notice>, RepoError> {
        let row = sqlx::query_as::<_, Notice>(queries::SELECT_NOTICE_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert_notice(&self, notice: &NewNotice) -> Result<Option<Notice>, RepoError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(queries::LOCK_NOTICE_AIRPORT)
            .bind(&notice.airport_code)
            .execute(&mut *tx)
            .await?;

        let exists: bool = sqlx::query_scalar(queries::NOTICE_EXISTS)
            .bind(&notice.airport_code)
            .bind(&notice.message)
            .fetch_one(&mut *tx)
            .await?;
        if exists {
            return Ok(None);
        }

        let row = sqlx::query_as::<_, Notice>(queries::INSERT_NOTICE)
            .bind(&notice.airport_code)
            .bind(&notice.city)
            .bind(&notice.message)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(row))
    }

    async fn update_notice_message(&self, id: i64, message: &str) -> Result<Option<Notice>, RepoError> {
        let row = sqlx::query_as::<_, Notice>(queries::UPDATE_NOTICE_MESSAGE)
            .bind(id)
            .bind(message)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete_notice(&self, id: i64) -> Result<Option<Notice>, RepoError> {
        let row = sqlx::query_as::<_, Notice>(queries::DELETE_NOTICE)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn set_flight_status(
        &self,
        flight_ids: &[i64],
        status: FlightStatus,
    ) -> Result<Vec<FlightAnnouncement>, RepoError> {
        // Dropping `tx` on an early `?` return rolls everything back.
        let mut tx = self.pool.begin().await?;

        let flights = sqlx::query_as::<_, Flight>(queries::UPDATE_FLIGHT_STATUS)
            .bind(status.code())
            .bind(flight_ids)
            .fetch_all(&mut *tx)
            .await?;

        let now = Utc::now();
        let mut announcements = Vec::with_capacity(flights.len());
        for flight in &flights {
            let announcement = FlightAnnouncement::for_flight(flight, status, now);
            sqlx::query(queries::UPSERT_FLIGHT_ANNOUNCEMENT)
                .bind(announcement.flight_id)
                .bind(&announcement.flight_number)
                .bind(&announcement.airline_code)
                .bind(&announcement.origin_code)
                .bind(&announcement.destination_code)
                .bind(announcement.status_id)
                .bind(&announcement.status_text)
                .bind(announcement.updated_at)
                .execute(&mut *tx)
                .await?;
            announcements.push(announcement);
        }

        tx.commit().await?;
        debug!("Committed status {} for {} flight(s)", status, announcements.len());

        Ok(announcements)
    }
}
