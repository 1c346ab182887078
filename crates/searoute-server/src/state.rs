//! Shared application state.

use crate::config::Config;
use searoute_core::models::{reference_ports, Port};
use searoute_weather::OpenWeatherClient;

/// State injected into every route handler. The port reference set is
/// read-only after initialization; planning itself is stateless.
pub struct AppState {
    pub ports: Vec<Port>,
    pub weather: Option<OpenWeatherClient>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let weather = config.openweather_api_key.as_ref().and_then(|key| {
            match OpenWeatherClient::with_base_url(key.as_str(), config.openweather_url.as_str()) {
                Ok(client) => Some(client),
                Err(err) => {
                    tracing::error!(error = %err, "failed to build weather client");
                    None
                }
            }
        });
        if weather.is_none() {
            tracing::warn!("no weather credential configured; planning with zero known hazards");
        }
        Self {
            ports: reference_ports(),
            weather,
        }
    }
}
