//! Utilikit - A Rust-based command-line toolkit for everyday data utilities
//!
//! This library provides a set of independent, stateless data utilities:
//! sequence generation, user record filtering, weather lookup, CSV
//! ingestion, password validation, and JSON-to-XML conversion.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod utils;
pub mod weather;

// Re-export core operations and types for easier use
pub use crate::core::{
    password::{PasswordReport, validate_password},
    records::{UserRecord, filter_active_users, validate_user},
    sequence::fibonacci,
    tabular::read_csv,
    xml::json_to_xml,
};
pub use utils::error::{AppError, AppResult};
pub use weather::{WeatherClient, WeatherProvider, WeatherReport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Main library interface for external usage
pub struct Utilikit {
    config: config::Config,
}

impl Utilikit {
    /// Create a new Utilikit instance with the given configuration
    pub fn new(config: config::Config) -> Self {
        Self { config }
    }

    /// Get the active configuration
    pub fn config(&self) -> &config::Config {
        &self.config
    }

    /// Build a weather client from the configured (or default) section
    pub fn weather_client(&self) -> AppResult<WeatherClient> {
        let weather_config = self.config.weather.clone().unwrap_or_default();
        WeatherClient::new(weather_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facade_exposes_config_and_weather_client() {
        let toolkit = Utilikit::new(config::Config::default());
        assert_eq!(toolkit.config().general.batch_size, 100);
        assert!(toolkit.weather_client().is_ok());
    }
}
