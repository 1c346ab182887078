//! Planning pipeline: baseline search, vessel safety, hazard avoidance.

use chrono::{DateTime, Utc};
use searoute_core::avoidance::{
    adjust_route_for_obstacles, adjust_route_for_weather, nearest_port, requires_port_diversion,
    Obstacle,
};
use searoute_core::models::{GeoError, GeoPoint, HazardZone, Port, Route, Vessel};
use searoute_core::pathfinding::find_path;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("invalid start coordinate: {0}")]
    InvalidStart(#[source] GeoError),
    #[error("invalid end coordinate: {0}")]
    InvalidEnd(#[source] GeoError),
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlanRequest {
    pub start: GeoPoint,
    pub end: GeoPoint,
    #[serde(flatten)]
    pub vessel: Vessel,
}

impl PlanRequest {
    /// Check the raw coordinates, returning the validated endpoints.
    ///
    /// Handlers call this before doing anything with the request; in
    /// particular the weather fetch derives its sampling bounds from
    /// these coordinates and must never see a non-finite value.
    pub fn endpoints(&self) -> Result<(GeoPoint, GeoPoint), PlanError> {
        let start =
            GeoPoint::validated(self.start.lat, self.start.lon).map_err(PlanError::InvalidStart)?;
        let end =
            GeoPoint::validated(self.end.lat, self.end.lon).map_err(PlanError::InvalidEnd)?;
        Ok((start, end))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanResponse {
    /// Raw grid route before any weather adjustment.
    pub baseline: Route,
    /// Route after coarse and geometric avoidance passes.
    pub adjusted: Route,
    /// Actual destination, possibly overridden to a reference port.
    pub destination: GeoPoint,
    /// Name of the diversion port when the vessel condition forced one.
    pub diverted_to: Option<String>,
    pub safety_factor: f64,
    pub max_safe_wind_speed_kmh: f64,
    pub max_safe_wave_height_m: f64,
    pub planned_at: DateTime<Utc>,
}

/// Plan a route from `start` toward `end` for the given vessel, steering
/// around the supplied hazard zones.
///
/// A vessel in bad or critical condition is sent to the nearest reference
/// port instead of its requested destination.
pub fn plan_route(
    request: &PlanRequest,
    zones: &[HazardZone],
    ports: &[Port],
) -> Result<PlanResponse, PlanError> {
    let (start, requested_end) = request.endpoints()?;

    let (destination, diverted_to) = if requires_port_diversion(&request.vessel) {
        match nearest_port(start, ports) {
            Some(port) => (port.position, Some(port.name.clone())),
            None => (requested_end, None),
        }
    } else {
        (requested_end, None)
    };

    let baseline = find_path(start, destination);
    let safety_factor = request.vessel.safety_factor();

    let coarse = adjust_route_for_weather(baseline.clone(), zones, safety_factor);
    let obstacles: Vec<Obstacle> = zones.iter().map(Obstacle::from).collect();
    let adjusted = adjust_route_for_obstacles(coarse, &obstacles);

    Ok(PlanResponse {
        baseline,
        adjusted,
        destination,
        diverted_to,
        safety_factor,
        max_safe_wind_speed_kmh: request.vessel.max_safe_wind_speed(),
        max_safe_wave_height_m: request.vessel.max_safe_wave_height(),
        planned_at: Utc::now(),
    })
}
