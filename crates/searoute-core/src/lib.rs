//! Core logic for maritime route planning: grid pathfinding, weather
//! hazard aggregation, vessel safety, and hazard avoidance.

pub mod avoidance;
pub mod geo;
pub mod grid;
pub mod models;
pub mod pathfinding;
pub mod vessel;
pub mod weather;

pub use avoidance::{
    adjust_route_for_obstacles, adjust_route_for_weather, nearest_port, requires_port_diversion,
    Obstacle,
};
pub use geo::{haversine_distance_km, KM_PER_DEG};
pub use grid::{GridCell, GRID_RESOLUTION};
pub use models::{
    reference_ports, Bounds, GeoError, GeoPoint, HazardClass, HazardZone, Port, Route, Vessel,
    VesselCondition, VesselType, Visibility,
};
pub use pathfinding::find_path;
pub use weather::{merge_zones, observe, WeatherReading, HAZARD_INTENSITY_THRESHOLD};
