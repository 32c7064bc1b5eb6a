use chrono::Utc;
use futures::future::join_all;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

use super::notam::{format_notice, NoticeStamp};
use crate::db::Repository;
use crate::error::WeatherError;
use crate::models::airport::AirportDescriptor;
use crate::models::notice::NewNotice;
use crate::models::weather::WeatherSnapshot;
use crate::notifier::{NoticeAction, NoticeSync};
use crate::weather::WeatherLookup;

/// Most airports handled per batch; extra entries are dropped.
pub const MAX_BATCH: usize = 10;

const STORE_FAILED: &str = "Failed to store NOTAM";
const DUPLICATE: &str = "Duplicate NOTAM skipped";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BatchResult {
    pub success: bool,
    pub generated: usize,
    pub failed: usize,
    /// Duplicates; listed in `errors` but not counted as failed.
    pub skipped: usize,
    pub errors: Vec<String>,
    pub message: String,
}

enum Outcome {
    Generated,
    Skipped(&'static str),
    Failed(&'static str),
}

/// Turns weather lookups into stored NOTAMs, one airport at a time.
pub struct NoticeGenerator {
    repo: Arc<dyn Repository>,
    weather: Arc<dyn WeatherLookup>,
    sync: NoticeSync,
    fixed_stamp: Option<NoticeStamp>,
}

impl NoticeGenerator {
    pub fn new(repo: Arc<dyn Repository>, weather: Arc<dyn WeatherLookup>, sync: NoticeSync) -> Self {
        Self {
            repo,
            weather,
            sync,
            fixed_stamp: None,
        }
    }

    /// Pins notice number and issue time so repeated runs render identical text.
    #[cfg(test)]
    pub fn with_fixed_stamp(mut self, stamp: NoticeStamp) -> Self {
        self.fixed_stamp = Some(stamp);
        self
    }

    fn next_stamp(&self) -> NoticeStamp {
        self.fixed_stamp
            .unwrap_or_else(|| NoticeStamp::random(Utc::now()))
    }

    pub async fn generate_batch(&self, airports: &[AirportDescriptor]) -> BatchResult {
        let batch_id = Uuid::new_v4();
        let airports = if airports.len() > MAX_BATCH {
            warn!(
                "Batch {} has {} airports, only the first {} are processed",
                batch_id,
                airports.len(),
                MAX_BATCH
            );
            &airports[..MAX_BATCH]
        } else {
            airports
        };
        info!("Generating NOTAM batch {} for {} airport(s)", batch_id, airports.len());

        // Lookups are independent so they run concurrently; storage below stays
        // in input order so duplicates inside one batch are still caught.
        let lookups = join_all(airports.iter().map(|airport| {
            let query = airport.weather_query();
            async move { self.weather.fetch(&query).await }
        }))
        .await;

        let mut generated = 0;
        let mut failed = 0;
        let mut skipped = 0;
        let mut errors = Vec::new();

        for (airport, lookup) in airports.iter().zip(lookups) {
            match self.process_airport(airport, lookup).await {
                Outcome::Generated => generated += 1,
                Outcome::Skipped(reason) => {
                    skipped += 1;
                    errors.push(format!("{} – {}", airport.iata_code, reason));
                }
                Outcome::Failed(reason) => {
                    failed += 1;
                    errors.push(format!("{} – {}", airport.iata_code, reason));
                }
            }
        }

        info!(
            "Batch {} done: {} generated, {} failed, {} skipped",
            batch_id, generated, failed, skipped
        );

        BatchResult {
            success: generated > 0,
            generated,
            failed,
            skipped,
            errors,
            message: format!("{} NOTAM(s) generated, {} failed.", generated, failed),
        }
    }

    async fn process_airport(
        &self,
        airport: &AirportDescriptor,
        lookup: Result<Value, WeatherError>,
    ) -> Outcome {
        let iata = airport.iata_code.as_str();

        let weather = match lookup.and_then(|payload| WeatherSnapshot::from_payload(&payload)) {
            Ok(w) => w,
            Err(e) => {
                warn!("Weather lookup for {} failed: {}", iata, e);
                return Outcome::Failed(e.batch_reason());
            }
        };

        let message = format_notice(iata, &weather, &self.next_stamp());

        let new_notice = NewNotice {
            airport_code: airport.iata_code.clone(),
            city: airport.city.clone(),
            message,
        };
        match self.repo.insert_notice(&new_notice).await {
            Ok(Some(notice)) => {
                info!("Stored NOTAM {} for {}", notice.id, iata);
                self.sync.dispatch(NoticeAction::Created, &notice);
                Outcome::Generated
            }
            Ok(None) => {
                info!("Duplicate NOTAM for {} skipped", iata);
                Outcome::Skipped(DUPLICATE)
            }
            Err(e) => {
                error!("Failed to store NOTAM for {}: {}", iata, e);
                Outcome::Failed(STORE_FAILED)
            }
        }
    }
}
