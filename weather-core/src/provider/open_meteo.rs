use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::model::CurrentConditions;

use super::WeatherProvider;

const OPEN_METEO_BASE_URL: &str = "https://api.open-meteo.com";

/// Open-Meteo forecast client. Free, no API key required.
#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    base_url: String,
    http: Client,
}

impl Default for OpenMeteoProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenMeteoProvider {
    pub fn new() -> Self {
        Self::with_base_url(OPEN_METEO_BASE_URL)
    }

    /// Point the client at a different base URL, e.g. a mock server in tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: Client::new(),
        }
    }

    async fn fetch_current(&self, latitude: f64, longitude: f64) -> Result<CurrentConditions> {
        let url = format!("{}/v1/forecast", self.base_url);
        let latitude = latitude.to_string();
        let longitude = longitude.to_string();

        let res = self
            .http
            .get(&url)
            .query(&[
                ("latitude", latitude.as_str()),
                ("longitude", longitude.as_str()),
                ("current", "temperature_2m"),
                ("current", "weather_code"),
                ("current", "wind_speed_10m"),
                ("current", "relative_humidity_2m"),
                ("temperature_unit", "celsius"),
            ])
            .send()
            .await
            .context("Failed to send request to Open-Meteo (current conditions)")?;

        let status = res.status();
        let body = res
            .text()
            .await
            .context("Failed to read Open-Meteo response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "Open-Meteo request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        let parsed: OmForecastResponse =
            serde_json::from_str(&body).context("Failed to parse Open-Meteo JSON")?;

        Ok(CurrentConditions {
            temperature_c: parsed.current.temperature_2m,
            wind_speed_kmh: parsed.current.wind_speed_10m,
            relative_humidity_pct: parsed.current.relative_humidity_2m,
            weather_code: parsed.current.weather_code,
        })
    }
}

#[derive(Debug, Deserialize)]
struct OmCurrent {
    temperature_2m: f64,
    weather_code: u16,
    wind_speed_10m: f64,
    relative_humidity_2m: u8,
}

#[derive(Debug, Deserialize)]
struct OmForecastResponse {
    current: OmCurrent,
}

#[async_trait]
impl WeatherProvider for OpenMeteoProvider {
    async fn current(&self, latitude: f64, longitude: f64) -> Result<CurrentConditions> {
        self.fetch_current(latitude, longitude).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}
