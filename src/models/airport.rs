use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Airport {
    pub iata_code: String,
    pub airport_name: String,
    pub city: String,
    pub country: Option<String>,
    pub airport_status: Option<String>,
    pub timezone: Option<String>,
}

/// One entry of a batch-generation request.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AirportDescriptor {
    pub iata_code: String,
    pub city: String,
    #[serde(default)]
    pub country_code: Option<String>,
}

impl AirportDescriptor {
    /// City key sent to the weather service: `city` or `city,CC`.
    pub fn weather_query(&self) -> String {
        match self.country_code.as_deref().map(str::trim) {
            Some(cc) if !cc.is_empty() => format!("{},{}", self.city, cc),
            _ => self.city.clone(),
        }
    }
}
