use std::sync::Arc;

use crate::db::Repository;
use crate::notifier::NoticeSync;
use crate::processor::notice_generator::NoticeGenerator;
use crate::weather::WeatherLookup;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn Repository>,
    pub weather: Arc<dyn WeatherLookup>,
    pub generator: Arc<NoticeGenerator>,
    pub sync: NoticeSync,
}

impl AppState {
    pub fn new(repository: Arc<dyn Repository>, weather: Arc<dyn WeatherLookup>, sync: NoticeSync) -> Self {
        let generator = Arc::new(NoticeGenerator::new(
            repository.clone(),
            weather.clone(),
            sync.clone(),
        ));
        Self {
            repository,
            weather,
            generator,
            sync,
        }
    }
}
