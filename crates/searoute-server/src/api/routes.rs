//! REST API routes.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::planner::{plan_route, PlanRequest};
use crate::state::AppState;
use searoute_core::models::{Bounds, HazardZone, Vessel, VesselCondition, VesselType};
use searoute_weather::fetch_hazard_zones;

/// Create the API router.
pub fn create_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/v1/routes/plan", post(plan))
        .route("/v1/weather/hazards", get(hazards))
        .route("/v1/vessels/safety", get(vessel_safety))
        .route("/v1/ports", get(list_ports))
}

async fn plan(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PlanRequest>,
) -> impl IntoResponse {
    // Coordinates are checked before the weather fetch: the sampling
    // bounds come straight from them and the sampler requires finite
    // edges.
    if let Err(err) = request.endpoints() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": err.to_string() })),
        );
    }
    let bounds = planning_bounds(&request);
    let zones = load_hazards(&state, &bounds).await;

    match plan_route(&request, &zones, &state.ports) {
        Ok(response) => (StatusCode::OK, Json(json!(response))),
        Err(err) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": err.to_string() })),
        ),
    }
}

/// Weather is sampled over the route's bounding box, padded by one sample
/// step so hazards just outside the corridor still register.
fn planning_bounds(request: &PlanRequest) -> Bounds {
    let pad = searoute_weather::SAMPLE_STEP_DEG;
    Bounds {
        north: request.start.lat.max(request.end.lat) + pad,
        south: request.start.lat.min(request.end.lat) - pad,
        east: request.start.lon.max(request.end.lon) + pad,
        west: request.start.lon.min(request.end.lon) - pad,
    }
}

/// Provider failure or a missing credential degrades to zero known
/// hazards; planning proceeds rather than erroring.
async fn load_hazards(state: &AppState, bounds: &Bounds) -> Vec<HazardZone> {
    let Some(client) = &state.weather else {
        return Vec::new();
    };
    match fetch_hazard_zones(client, bounds).await {
        Ok(zones) => zones,
        Err(err) => {
            tracing::error!(error = %err, "weather fetch failed; planning with zero hazards");
            Vec::new()
        }
    }
}

#[derive(Debug, Deserialize)]
struct HazardQuery {
    north: f64,
    south: f64,
    east: f64,
    west: f64,
}

async fn hazards(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HazardQuery>,
) -> impl IntoResponse {
    // Query floats accept "inf" and "nan"; reject them here so the
    // sampler only ever sees a finite, well-ordered region.
    let bounds = match Bounds::validated(query.north, query.south, query.east, query.west) {
        Ok(bounds) => bounds,
        Err(err) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": err.to_string() })),
            );
        }
    };
    let zones = load_hazards(&state, &bounds).await;
    (StatusCode::OK, Json(json!(zones)))
}

#[derive(Debug, Deserialize)]
struct SafetyQuery {
    vessel_type: VesselType,
    condition: VesselCondition,
}

async fn vessel_safety(Query(query): Query<SafetyQuery>) -> impl IntoResponse {
    let vessel = Vessel::new(query.vessel_type, query.condition);
    Json(json!({
        "vessel_type": vessel.vessel_type,
        "condition": vessel.condition,
        "safety_factor": vessel.safety_factor(),
        "max_safe_wind_speed_kmh": vessel.max_safe_wind_speed(),
        "max_safe_wave_height_m": vessel.max_safe_wave_height(),
    }))
}

async fn list_ports(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.ports.clone())
}
