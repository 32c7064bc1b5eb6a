//! Shared test doubles.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::WeatherError;
use crate::weather::WeatherLookup;

#[derive(Clone)]
pub enum Reply {
    Payload(Value),
    Status(u16),
    Unreachable,
}

/// Weather lookup answering from a fixed table keyed by city query.
/// Unknown cities answer 404.
#[derive(Default)]
pub struct StubWeather {
    replies: HashMap<String, Reply>,
    calls: Mutex<Vec<String>>,
}

impl StubWeather {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, city: &str, reply: Reply) -> Self {
        self.replies.insert(city.to_string(), reply);
        self
    }

    pub fn weather(self, city: &str, description: &str, wind_speed: f64) -> Self {
        self.reply(
            city,
            Reply::Payload(json!({
                "weather": [{"main": "Clouds", "description": description}],
                "wind": {"speed": wind_speed},
                "name": city,
            })),
        )
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl WeatherLookup for StubWeather {
    async fn fetch(&self, city: &str) -> Result<Value, WeatherError> {
        self.calls.lock().unwrap().push(city.to_string());
        match self.replies.get(city) {
            Some(Reply::Payload(body)) => Ok(body.clone()),
            Some(Reply::Status(code)) => Err(WeatherError::Status(*code)),
            Some(Reply::Unreachable) => Err(WeatherError::Transport("connection refused".to_string())),
            None => Err(WeatherError::Status(404)),
        }
    }
}
