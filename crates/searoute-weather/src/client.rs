//! OpenWeather API HTTP client.

use reqwest::Client;
use searoute_core::weather::WeatherReading;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("no OpenWeather API credential configured")]
    MissingCredential,
    #[error("weather request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("malformed weather response: {0}")]
    Malformed(String),
}

/// HTTP client for the OpenWeather current-conditions endpoint.
///
/// The API key is injected at construction; there is no ambient
/// environment lookup inside the fetch path.
pub struct OpenWeatherClient {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct CurrentWeatherResponse {
    wind: WindSection,
    clouds: CloudsSection,
    #[serde(default)]
    rain: Option<RainSection>,
}

#[derive(Debug, Deserialize)]
struct WindSection {
    /// Wind speed in m/s (metric units).
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct CloudsSection {
    /// Cloud cover percentage.
    all: f64,
}

#[derive(Debug, Deserialize)]
struct RainSection {
    #[serde(rename = "1h")]
    one_hour: Option<f64>,
    #[serde(rename = "3h")]
    three_hours: Option<f64>,
}

fn ms_to_kmh(ms: f64) -> f64 {
    ms * 3.6
}

impl OpenWeatherClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self, WeatherError> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a client against a non-default endpoint (tests, proxies).
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, WeatherError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(WeatherError::MissingCredential);
        }
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key,
        })
    }

    /// Fetch current conditions at a coordinate, converted to the units
    /// the hazard model expects (wind in km/h).
    pub async fn current(&self, lat: f64, lon: f64) -> Result<WeatherReading, WeatherError> {
        let url = format!(
            "{}/weather?lat={}&lon={}&appid={}&units=metric",
            self.base_url, lat, lon, self.api_key
        );
        let response = self.client.get(&url).send().await?;
        let response = response.error_for_status()?;
        let body: CurrentWeatherResponse = response
            .json()
            .await
            .map_err(|err| WeatherError::Malformed(err.to_string()))?;

        let rain_mm = body
            .rain
            .and_then(|rain| rain.one_hour.or(rain.three_hours));

        Ok(WeatherReading {
            wind_speed_kmh: ms_to_kmh(body.wind.speed),
            rain_mm,
            cloud_cover_pct: body.clouds.all,
        })
    }
}
