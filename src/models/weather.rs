use serde::Deserialize;
use serde_json::Value;

use crate::error::WeatherError;

/// The fields of a weather-service answer that notice generation relies on.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    pub description: String,
    pub wind_speed_mps: f64,
}

#[derive(Debug, Deserialize)]
struct WeatherPayload {
    #[serde(default)]
    weather: Vec<Condition>,
    #[serde(default)]
    wind: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct Condition {
    #[serde(default)]
    description: Option<String>,
}

impl WeatherSnapshot {
    /// Extracts `weather[0].description` and `wind.speed` (default 0).
    pub fn from_payload(payload: &Value) -> Result<Self, WeatherError> {
        if !payload.is_object() {
            return Err(WeatherError::InvalidPayload("expected a JSON object".to_string()));
        }

        let parsed = WeatherPayload::deserialize(payload)
            .map_err(|e| WeatherError::InvalidPayload(e.to_string()))?;

        let description = parsed
            .weather
            .into_iter()
            .next()
            .and_then(|c| c.description)
            .filter(|d| !d.is_empty())
            .ok_or_else(|| WeatherError::InvalidPayload("missing weather description".to_string()))?;

        let wind_speed_mps = parsed
            .wind
            .as_ref()
            .and_then(|w| w.get("speed"))
            .and_then(lenient_f64)
            .unwrap_or(0.0);

        Ok(Self {
            description,
            wind_speed_mps,
        })
    }
}

/// Accepts finite numbers or numeric strings; anything else counts as absent.
fn lenient_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|f| f.is_finite())
}
