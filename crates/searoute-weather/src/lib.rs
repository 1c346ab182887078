//! Weather retrieval and hazard aggregation for searoute.

pub mod aggregator;
pub mod client;

pub use aggregator::{fetch_hazard_zones, sample_points, zones_from_readings, SAMPLE_STEP_DEG};
pub use client::{OpenWeatherClient, WeatherError};
