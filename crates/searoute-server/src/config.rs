//! Server configuration from environment.

use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    /// OpenWeather credential. Planning still works without one; the
    /// weather layer degrades to zero known hazards.
    pub openweather_api_key: Option<String>,
    pub openweather_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SEAROUTE_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3000),
            openweather_api_key: env::var("OPENWEATHER_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            openweather_url: env::var("OPENWEATHER_URL")
                .unwrap_or_else(|_| "https://api.openweathermap.org/data/2.5".to_string()),
        }
    }
}
