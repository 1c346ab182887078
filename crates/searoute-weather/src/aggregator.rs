//! Sampling a bounding region for weather and consolidating the results
//! into hazard zones.

use crate::client::{OpenWeatherClient, WeatherError};
use futures::stream::{self, StreamExt};
use searoute_core::models::{Bounds, GeoPoint, HazardZone};
use searoute_core::weather::{merge_zones, observe, WeatherReading};

/// Spacing between weather samples, in degrees.
pub const SAMPLE_STEP_DEG: f64 = 2.0;

/// How many provider requests may be in flight at once.
const FETCH_CONCURRENCY: usize = 8;

/// Sample points for a region: south to north rows, west to east within
/// each row. The merge pass is order-dependent, so this scan order is
/// part of the observable behavior.
///
/// Non-finite bounds yield no samples: an infinite or NaN edge would
/// otherwise keep the scan from ever reaching its stop condition.
pub fn sample_points(bounds: &Bounds) -> Vec<GeoPoint> {
    let finite = [bounds.north, bounds.south, bounds.east, bounds.west]
        .iter()
        .all(|v| v.is_finite());
    if !finite {
        return Vec::new();
    }
    let mut points = Vec::new();
    let mut lat = bounds.south;
    while lat <= bounds.north {
        let mut lon = bounds.west;
        while lon <= bounds.east {
            points.push(GeoPoint::new(lat, lon));
            lon += SAMPLE_STEP_DEG;
        }
        lat += SAMPLE_STEP_DEG;
    }
    points
}

/// Build hazard zones from per-point readings, in sample order.
pub fn zones_from_readings(samples: &[(GeoPoint, WeatherReading)]) -> Vec<HazardZone> {
    let observations = samples
        .iter()
        .filter_map(|(point, reading)| observe(*point, *reading))
        .collect();
    merge_zones(observations)
}

/// Fetch weather across `bounds` and return merged hazard zones.
///
/// Requests fan out with bounded concurrency; `buffered` yields results
/// in submission order, so the merge pass sees observations in the same
/// row-major order a sequential scan would produce. A failed sample is
/// logged and skipped rather than failing the whole region.
pub async fn fetch_hazard_zones(
    client: &OpenWeatherClient,
    bounds: &Bounds,
) -> Result<Vec<HazardZone>, WeatherError> {
    let points = sample_points(bounds);
    let readings: Vec<(GeoPoint, WeatherReading)> = stream::iter(points)
        .map(|point| async move {
            match client.current(point.lat, point.lon).await {
                Ok(reading) => Some((point, reading)),
                Err(err) => {
                    tracing::warn!(
                        lat = point.lat,
                        lon = point.lon,
                        error = %err,
                        "skipping weather sample"
                    );
                    None
                }
            }
        })
        .buffered(FETCH_CONCURRENCY)
        .filter_map(|reading| async move { reading })
        .collect()
        .await;

    Ok(zones_from_readings(&readings))
}
