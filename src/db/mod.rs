use anyhow::Result;
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};

use crate::error::RepoError;
use crate::models::airport::Airport;
use crate::models::flight::{Flight, FlightAnnouncement, FlightStatusRecord};
use crate::models::notice::{NewNotice, Notice};
use crate::models::status::FlightStatus;

#[cfg(test)]
pub mod memory;
pub mod postgres;
pub mod queries;

pub type DbPool = Pool<Postgres>;

pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Applies the bundled schema migrations.
pub async fn migrate(pool: &DbPool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

/// Persistence operations used by the services and HTTP handlers.
#[async_trait]
pub trait Repository: Send + Sync {
    async fn ping(&self) -> Result<(), RepoError>;

    async fn list_airports(&self) -> Result<Vec<Airport>, RepoError>;

    async fn list_flights(&self) -> Result<Vec<Flight>, RepoError>;

    async fn list_flight_statuses(&self) -> Result<Vec<FlightStatusRecord>, RepoError>;

    /// Newest first.
    async fn list_notices(&self) -> Result<Vec<Notice>, RepoError>;

    async fn find_notice(&self, id: i64) -> Result<Option<Notice>, RepoError>;

    /// Stores the notice unless one with the same airport code and exact
    /// message text already exists, in which case `None` is returned. The
    /// check and the insert are atomic with respect to concurrent callers.
    async fn insert_notice(&self, notice: &NewNotice) -> Result<Option<Notice>, RepoError>;

    async fn update_notice_message(&self, id: i64, message: &str) -> Result<Option<Notice>, RepoError>;

    async fn delete_notice(&self, id: i64) -> Result<Option<Notice>, RepoError>;

    /// Sets `status` on every listed flight and upserts its announcement,
    /// all or nothing. Ids with no matching flight are ignored.
    async fn set_flight_status(
        &self,
        flight_ids: &[i64],
        status: FlightStatus,
    ) -> Result<Vec<FlightAnnouncement>, RepoError>;
}
