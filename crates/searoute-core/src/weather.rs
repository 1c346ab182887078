//! Deriving hazard observations from raw meteorological readings and
//! merging nearby observations into consolidated zones.

use crate::geo::haversine_distance_km;
use crate::models::{GeoPoint, HazardClass, HazardZone, Visibility};
use serde::{Deserialize, Serialize};

/// Intensity at or below this is not considered a hazard.
pub const HAZARD_INTENSITY_THRESHOLD: f64 = 0.2;

/// Extra distance (km) beyond the sum of two radii within which zones
/// still merge.
const MERGE_BUFFER_KM: f64 = 100.0;

/// Raw meteorological reading for one sampled point.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WeatherReading {
    pub wind_speed_kmh: f64,
    /// Precipitation over the last reporting window, mm. Absent reads as 0.
    pub rain_mm: Option<f64>,
    /// Cloud cover percentage, 0-100.
    pub cloud_cover_pct: f64,
}

fn classify(wind_speed_kmh: f64, rain_mm: f64, cloud_cover_pct: f64) -> HazardClass {
    if wind_speed_kmh > 15.0 {
        HazardClass::Storm
    } else if rain_mm > 5.0 {
        HazardClass::HighWaves
    } else if cloud_cover_pct > 80.0 {
        HazardClass::Fog
    } else {
        HazardClass::Normal
    }
}

fn visibility(cloud_cover_pct: f64, rain_mm: f64) -> Visibility {
    if cloud_cover_pct > 80.0 || rain_mm > 10.0 {
        Visibility::Low
    } else if cloud_cover_pct > 50.0 || rain_mm > 5.0 {
        Visibility::Moderate
    } else {
        Visibility::High
    }
}

fn intensity(wind_speed_kmh: f64, rain_mm: f64, cloud_cover_pct: f64) -> f64 {
    let wind_term = (wind_speed_kmh / 30.0).min(0.4);
    let rain_term = (rain_mm / 25.0).min(0.4);
    let cloud_term = (cloud_cover_pct / 100.0) * 0.2;
    (wind_term + rain_term + cloud_term).clamp(0.0, 1.0)
}

/// Zone radius (km) for a given intensity.
fn radius_km(intensity: f64) -> f64 {
    50.0 + intensity * 150.0
}

/// Turn a raw reading at `position` into a hazard observation, or `None`
/// when the conditions are below the hazard threshold.
pub fn observe(position: GeoPoint, reading: WeatherReading) -> Option<HazardZone> {
    let rain = reading.rain_mm.unwrap_or(0.0);
    let intensity = intensity(reading.wind_speed_kmh, rain, reading.cloud_cover_pct);
    if intensity <= HAZARD_INTENSITY_THRESHOLD {
        return None;
    }
    let wave_height_m = (reading.wind_speed_kmh / 10.0 + rain / 5.0).min(10.0);
    Some(HazardZone {
        position,
        radius_km: radius_km(intensity),
        class: classify(reading.wind_speed_kmh, rain, reading.cloud_cover_pct),
        wind_speed_kmh: reading.wind_speed_kmh,
        wave_height_m,
        visibility: visibility(reading.cloud_cover_pct, rain),
        intensity,
    })
}

/// Merge spatially overlapping observations into consolidated zones.
///
/// Single forward sweep: each not-yet-absorbed observation seeds a group
/// and absorbs every later observation whose center lies within
/// `r_seed + r_other + 100` km of the seed's original center. Membership
/// is decided against the seed only, not mutually across the group, and
/// the result depends on input order. This is a deliberate
/// simplification, not a clustering algorithm; re-running the sweep on
/// its own output yields the same list.
///
/// Accumulation: position is the unweighted mean of merged centers, wind
/// and wave are means, intensity is the max, radius is the max radius
/// scaled by sqrt of the group size. Class and visibility stay those of
/// the seed rather than being recomputed from the aggregate.
pub fn merge_zones(zones: Vec<HazardZone>) -> Vec<HazardZone> {
    if zones.len() <= 1 {
        return zones;
    }

    let mut merged: Vec<HazardZone> = Vec::new();
    let mut used = vec![false; zones.len()];

    for i in 0..zones.len() {
        if used[i] {
            continue;
        }
        let seed = &zones[i];
        let mut count = 1usize;
        let mut total_wind = seed.wind_speed_kmh;
        let mut total_wave = seed.wave_height_m;
        let mut max_intensity = seed.intensity;
        let mut lat_sum = seed.position.lat;
        let mut lon_sum = seed.position.lon;
        let mut max_radius = seed.radius_km;

        for j in (i + 1)..zones.len() {
            if used[j] {
                continue;
            }
            let other = &zones[j];
            let distance = haversine_distance_km(seed.position, other.position);
            if distance < seed.radius_km + other.radius_km + MERGE_BUFFER_KM {
                used[j] = true;
                count += 1;
                total_wind += other.wind_speed_kmh;
                total_wave += other.wave_height_m;
                max_intensity = max_intensity.max(other.intensity);
                lat_sum += other.position.lat;
                lon_sum += other.position.lon;
                max_radius = max_radius.max(other.radius_km);
            }
        }

        if count > 1 {
            merged.push(HazardZone {
                position: GeoPoint::new(lat_sum / count as f64, lon_sum / count as f64),
                radius_km: max_radius * (count as f64).sqrt(),
                class: seed.class,
                wind_speed_kmh: total_wind / count as f64,
                wave_height_m: total_wave / count as f64,
                visibility: seed.visibility,
                intensity: max_intensity,
            });
        } else {
            merged.push(seed.clone());
        }
    }

    merged
}
