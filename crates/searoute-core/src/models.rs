//! Core data models for maritime route planning.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeoError {
    #[error("latitude is not a finite number")]
    NonFiniteLatitude,
    #[error("longitude is not a finite number")]
    NonFiniteLongitude,
    #[error("bounds contain a non-finite value")]
    NonFiniteBounds,
    #[error("south bound exceeds north bound")]
    InvertedBounds,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Construct a point, rejecting non-finite coordinates.
    ///
    /// Core algorithms are total over finite floats; this is the single
    /// validation gate callers use at the API boundary.
    pub fn validated(lat: f64, lon: f64) -> Result<Self, GeoError> {
        if !lat.is_finite() {
            return Err(GeoError::NonFiniteLatitude);
        }
        if !lon.is_finite() {
            return Err(GeoError::NonFiniteLongitude);
        }
        Ok(Self { lat, lon })
    }
}

/// An ordered sequence of waypoints. First point is the start, last is
/// the goal; always at least 2 points after planning.
pub type Route = Vec<GeoPoint>;

/// A rectangular geographic region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl Bounds {
    /// Construct a region, rejecting non-finite or inverted bounds.
    ///
    /// The weather sampler steps from `south` to `north` and `west` to
    /// `east`; an infinite bound would never terminate that scan, so the
    /// check happens here at the boundary.
    pub fn validated(north: f64, south: f64, east: f64, west: f64) -> Result<Self, GeoError> {
        if ![north, south, east, west].iter().all(|v| v.is_finite()) {
            return Err(GeoError::NonFiniteBounds);
        }
        if south > north {
            return Err(GeoError::InvertedBounds);
        }
        Ok(Self {
            north,
            south,
            east,
            west,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VesselType {
    Cargo,
    Tanker,
    Passenger,
    Fishing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VesselCondition {
    Excellent,
    Good,
    Fair,
    Bad,
    Critical,
}

/// A vessel as supplied by the caller.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Vessel {
    pub vessel_type: VesselType,
    pub condition: VesselCondition,
}

impl Vessel {
    pub fn new(vessel_type: VesselType, condition: VesselCondition) -> Self {
        Self {
            vessel_type,
            condition,
        }
    }
}

/// Hazard classification for a weather observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HazardClass {
    Storm,
    HighWaves,
    Fog,
    Normal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Low,
    Moderate,
    High,
}

/// A hazardous-weather region. A zone may represent a single observation
/// or several spatially merged ones; in the merged case `position` is the
/// centroid and `radius_km` is scaled by sqrt of the merged count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HazardZone {
    pub position: GeoPoint,
    pub radius_km: f64,
    pub class: HazardClass,
    pub wind_speed_kmh: f64,
    pub wave_height_m: f64,
    pub visibility: Visibility,
    /// Severity on a 0-1 scale.
    pub intensity: f64,
}

/// A named harbor position from the static reference set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Port {
    pub name: String,
    pub position: GeoPoint,
}

/// Static reference ports used for the nearest-port fallback.
pub fn reference_ports() -> Vec<Port> {
    vec![
        Port {
            name: "Key West".to_string(),
            position: GeoPoint::new(24.5, -81.8),
        },
        Port {
            name: "Miami".to_string(),
            position: GeoPoint::new(25.8, -80.2),
        },
        Port {
            name: "Savannah".to_string(),
            position: GeoPoint::new(32.1, -80.7),
        },
        Port {
            name: "Norfolk".to_string(),
            position: GeoPoint::new(36.9, -76.3),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validated_rejects_non_finite_coordinates() {
        assert_eq!(
            GeoPoint::validated(f64::NAN, 0.0),
            Err(GeoError::NonFiniteLatitude)
        );
        assert_eq!(
            GeoPoint::validated(0.0, f64::INFINITY),
            Err(GeoError::NonFiniteLongitude)
        );
        assert!(GeoPoint::validated(25.0, -80.0).is_ok());
    }

    #[test]
    fn validated_bounds_reject_non_finite_and_inverted_input() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(
                Bounds::validated(24.0, bad, -76.0, -80.0),
                Err(GeoError::NonFiniteBounds)
            );
            assert_eq!(
                Bounds::validated(bad, 20.0, -76.0, -80.0),
                Err(GeoError::NonFiniteBounds)
            );
        }
        assert_eq!(
            Bounds::validated(20.0, 24.0, -76.0, -80.0),
            Err(GeoError::InvertedBounds)
        );
        assert!(Bounds::validated(24.0, 20.0, -76.0, -80.0).is_ok());
    }

    #[test]
    fn vessel_type_serializes_lowercase() {
        let json = serde_json::to_string(&VesselType::Cargo).unwrap();
        assert_eq!(json, "\"cargo\"");
        let back: VesselType = serde_json::from_str("\"fishing\"").unwrap();
        assert_eq!(back, VesselType::Fishing);
    }

    #[test]
    fn reference_ports_are_four_named_harbors() {
        let ports = reference_ports();
        assert_eq!(ports.len(), 4);
        assert_eq!(ports[0].name, "Key West");
        assert_eq!(ports[3].name, "Norfolk");
    }
}
