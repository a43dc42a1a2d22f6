//! Weather lookup against an external HTTP endpoint

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod client;

pub use client::WeatherClient;

/// Current conditions for a city
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    pub temperature: f64,
    pub humidity: f64,
    pub conditions: String,
}

/// A source of current weather conditions.
///
/// Lookups never fail: any network or decoding problem yields `None`.
#[async_trait]
pub trait WeatherProvider {
    async fn current(&self, city: &str) -> Option<WeatherReport>;
}
