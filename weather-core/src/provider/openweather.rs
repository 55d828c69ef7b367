use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::{
    config::DEFAULT_BASE_URL,
    error::FetchError,
    model::{CurrentWeather, Units, WeatherQuery, WeatherReading},
};

use super::WeatherProvider;

const CURRENT_WEATHER_PATH: &str = "/data/2.5/weather";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    units: Units,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String, units: Units) -> Self {
        Self {
            api_key,
            units,
            base_url: DEFAULT_BASE_URL.to_string(),
            http: Client::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), CURRENT_WEATHER_PATH)
    }

    /// One GET against the current-weather endpoint. No retries.
    pub async fn fetch_current(&self, query: &WeatherQuery) -> Result<CurrentWeather, FetchError> {
        info!("Fetching weather data for city: {:?}", query.city);

        let res = self
            .http
            .get(self.endpoint())
            .query(&[
                ("q", query.city.as_str()),
                ("units", self.units.as_str()),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                let err = FetchError::network(e);
                warn!("OpenWeather request did not complete: {err}");
                err
            })?;

        let status = res.status();
        let body = res.text().await.map_err(FetchError::network)?;

        if status == StatusCode::NOT_FOUND {
            warn!("OpenWeather has no city matching {:?}", query.city);
            return Err(FetchError::NotFound);
        }

        if !status.is_success() {
            warn!(
                "OpenWeather request failed with status {}: {}",
                status,
                truncate_body(&body)
            );
            return Err(FetchError::RequestFailed {
                status,
                reason: failure_reason(status, &body),
            });
        }

        let parsed: CurrentWeather = serde_json::from_str(&body).map_err(|e| {
            warn!("Failed to parse OpenWeather JSON: {e}");
            FetchError::MalformedResponse(e.to_string())
        })?;

        debug!("Weather data fetched successfully: {:?}", parsed);
        Ok(parsed)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn fetch_weather(&self, query: &WeatherQuery) -> Result<WeatherReading, FetchError> {
        let payload = self.fetch_current(query).await?;
        WeatherReading::from_payload(payload, self.units)
    }
}

/// OpenWeather error bodies look like `{"cod":"401","message":"Invalid API key. ..."}`.
#[derive(Debug, Deserialize)]
struct OwErrorBody {
    message: Option<String>,
}

fn failure_reason(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<OwErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .or_else(|| status.canonical_reason().map(str::to_string))
        .unwrap_or_else(|| status.as_str().to_string())
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
