use super::{WeatherProvider, WeatherReport};
use crate::config::WeatherConfig;
use crate::utils::error::{AppError, AppResult};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub struct WeatherClient {
    client: Client,
    config: WeatherConfig,
}

impl WeatherClient {
    pub fn new(config: WeatherConfig) -> AppResult<Self> {
        Ok(Self {
            client: Client::builder()
                .user_agent("utilikit/0.1.0")
                .timeout(Duration::from_secs(config.timeout_secs))
                .build()
                .map_err(|e| AppError::Network(format!("Failed to create HTTP client: {}", e)))?,
            config,
        })
    }

    async fn request_current(&self, city: &str) -> AppResult<WeatherReport> {
        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&[("city", city)])
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Failed to reach weather endpoint: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Network(format!(
                "Weather endpoint returned {}",
                response.status()
            )));
        }

        let report: WeatherReport = response
            .json()
            .await
            .map_err(|e| AppError::Network(format!("Failed to parse weather response: {}", e)))?;

        Ok(report)
    }
}

#[async_trait]
impl WeatherProvider for WeatherClient {
    /// Every failure mode (connect, timeout, non-2xx, malformed body) is
    /// swallowed; the configured retry count re-issues the request
    /// before giving up with `None`.
    async fn current(&self, city: &str) -> Option<WeatherReport> {
        let attempts = self.config.retries.saturating_add(1);
        for _ in 0..attempts {
            if let Ok(report) = self.request_current(city).await {
                return Some(report);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_config(retries: u32) -> WeatherConfig {
        WeatherConfig {
            // Port 1 is never listening; connections are refused immediately.
            endpoint: "http://127.0.0.1:1/current".to_string(),
            timeout_secs: 1,
            retries,
        }
    }

    #[tokio::test]
    async fn unreachable_endpoint_yields_none() {
        let client = WeatherClient::new(unreachable_config(0)).unwrap();
        assert!(client.current("Oslo").await.is_none());
    }

    #[tokio::test]
    async fn retries_still_swallow_the_failure() {
        let client = WeatherClient::new(unreachable_config(2)).unwrap();
        assert!(client.current("Oslo").await.is_none());
    }

    #[test]
    fn client_builds_from_default_config() {
        assert!(WeatherClient::new(WeatherConfig::default()).is_ok());
    }

    #[test]
    fn report_decodes_expected_fields() {
        let report: WeatherReport = serde_json::from_str(
            r#"{"temperature": 21.5, "humidity": 40.0, "conditions": "clear", "extra": 1}"#,
        )
        .unwrap();
        assert_eq!(report.temperature, 21.5);
        assert_eq!(report.humidity, 40.0);
        assert_eq!(report.conditions, "clear");
    }
}
