//! Post-processing a baseline route against hazard zones.
//!
//! Two passes exist because they solve different sub-problems: the
//! segment-circle pass geometrically reroutes around any zone a segment
//! actually crosses; the coarse safety pass adds an extra offset waypoint
//! for severe weather when the vessel itself is fragile, without checking
//! geometry. Both reproduce the original frontend planner's behavior.

use crate::geo::{haversine_distance_km, segment_intersects_circle, KM_PER_DEG};
use crate::models::{GeoPoint, HazardZone, Port, Route, Vessel, VesselCondition};

/// Margin applied to an avoidance offset beyond the hazard radius.
const AVOIDANCE_MARGIN: f64 = 1.5;

/// Wind (km/h) above which a zone counts as severe for the coarse pass.
const SEVERE_WIND_KMH: f64 = 60.0;
/// Wave height (m) above which a zone counts as severe for the coarse pass.
const SEVERE_WAVE_M: f64 = 4.0;
/// Safety factor below which the coarse pass engages.
const COARSE_SAFETY_THRESHOLD: f64 = 0.7;

/// A circular region the route should stay clear of.
#[derive(Debug, Clone, Copy)]
pub struct Obstacle {
    pub center: GeoPoint,
    pub radius_km: f64,
}

impl From<&HazardZone> for Obstacle {
    fn from(zone: &HazardZone) -> Self {
        Self {
            center: zone.position,
            radius_km: zone.radius_km,
        }
    }
}

/// Insert avoidance waypoints around obstacles the route crosses.
///
/// For each obstacle the current route's segments are walked once; a
/// segment that passes within the obstacle's radius gets an avoidance
/// point spliced in at its midpoint, pushed perpendicular away from the
/// obstacle center. The freshly split segments are not re-tested against
/// the same obstacle in the same pass. The route is rebuilt as a new
/// sequence instead of spliced in place while iterating.
pub fn adjust_route_for_obstacles(route: Route, obstacles: &[Obstacle]) -> Route {
    let mut adjusted = route;
    for obstacle in obstacles {
        if adjusted.len() < 2 {
            break;
        }
        let mut rebuilt: Vec<GeoPoint> = Vec::with_capacity(adjusted.len() + 2);
        rebuilt.push(adjusted[0]);
        for segment in adjusted.windows(2) {
            let (from, to) = (segment[0], segment[1]);
            // A zero-length segment has no perpendicular to push along;
            // leave it in place.
            if from != to && segment_hits_obstacle(from, to, obstacle) {
                rebuilt.push(avoidance_point(from, to, obstacle));
            }
            rebuilt.push(to);
        }
        adjusted = rebuilt;
    }
    adjusted
}

fn segment_hits_obstacle(from: GeoPoint, to: GeoPoint, obstacle: &Obstacle) -> bool {
    segment_intersects_circle(from, to, obstacle.center, obstacle.radius_km / KM_PER_DEG)
}

/// Midpoint of the segment pushed perpendicular to the segment direction,
/// on the side away from the obstacle center, by the obstacle radius plus
/// a 50% margin.
fn avoidance_point(from: GeoPoint, to: GeoPoint, obstacle: &Obstacle) -> GeoPoint {
    let dx = to.lat - from.lat;
    let dy = to.lon - from.lon;
    let length = (dx * dx + dy * dy).sqrt();
    let (ndx, ndy) = (dx / length, dy / length);
    let (perp_x, perp_y) = (-ndy, ndx);

    let offset_deg = obstacle.radius_km / KM_PER_DEG * AVOIDANCE_MARGIN;
    let mid = GeoPoint::new((from.lat + to.lat) / 2.0, (from.lon + to.lon) / 2.0);

    let to_mid_x = mid.lat - obstacle.center.lat;
    let to_mid_y = mid.lon - obstacle.center.lon;
    let side = if to_mid_x * perp_x + to_mid_y * perp_y >= 0.0 {
        1.0
    } else {
        -1.0
    };

    GeoPoint::new(
        mid.lat + side * perp_x * offset_deg,
        mid.lon + side * perp_y * offset_deg,
    )
}

/// Coarse safety-triggered pass: for every severe zone, a vessel with a
/// safety factor under 0.7 gets a waypoint 2 degrees north of the zone,
/// inserted at the middle of the route sequence. The insertion is
/// index-based and never geometrically validated; this mirrors the
/// original frontend planner rather than hardening it.
pub fn adjust_route_for_weather(route: Route, zones: &[HazardZone], safety_factor: f64) -> Route {
    let mut adjusted = route;
    for zone in zones {
        let severe = zone.wind_speed_kmh > SEVERE_WIND_KMH || zone.wave_height_m > SEVERE_WAVE_M;
        if severe && safety_factor < COARSE_SAFETY_THRESHOLD {
            let avoidance = GeoPoint::new(zone.position.lat + 2.0, zone.position.lon);
            let insert_at = adjusted.len() / 2;
            adjusted.insert(insert_at, avoidance);
        }
    }
    adjusted
}

/// Nearest reference port by great-circle distance; the first minimal
/// entry wins on ties.
pub fn nearest_port(from: GeoPoint, ports: &[Port]) -> Option<&Port> {
    let mut nearest: Option<&Port> = None;
    let mut min_distance = f64::INFINITY;
    for port in ports {
        let distance = haversine_distance_km(from, port.position);
        if distance < min_distance {
            min_distance = distance;
            nearest = Some(port);
        }
    }
    nearest
}

/// Whether the vessel's condition forces a diversion to the nearest port.
pub fn requires_port_diversion(vessel: &Vessel) -> bool {
    matches!(
        vessel.condition,
        VesselCondition::Bad | VesselCondition::Critical
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{reference_ports, HazardClass, Visibility};

    fn zone(lat: f64, lon: f64, wind: f64, wave: f64) -> HazardZone {
        HazardZone {
            position: GeoPoint::new(lat, lon),
            radius_km: 100.0,
            class: HazardClass::Storm,
            wind_speed_kmh: wind,
            wave_height_m: wave,
            visibility: Visibility::Moderate,
            intensity: 0.6,
        }
    }

    #[test]
    fn midpoint_hazard_inserts_offset_waypoint() {
        let route = vec![GeoPoint::new(0.0, -2.0), GeoPoint::new(0.0, 2.0)];
        let obstacle = Obstacle {
            center: GeoPoint::new(0.0, 0.0),
            radius_km: 111.0,
        };
        let adjusted = adjust_route_for_obstacles(route, &[obstacle]);
        assert_eq!(adjusted.len(), 3);
        let inserted = adjusted[1];
        // Offset perpendicular to the east-west segment, radius * 1.5 away.
        assert!((inserted.lat.abs() - 1.5).abs() < 1e-9);
        assert!(inserted.lon.abs() < 1e-9);
        // Not colinear with the two endpoints.
        assert!(inserted.lat.abs() > 1e-6);
    }

    #[test]
    fn avoidance_point_lands_on_the_far_side() {
        let route = vec![GeoPoint::new(0.0, -2.0), GeoPoint::new(0.0, 2.0)];
        // Hazard center just south of the segment midpoint.
        let obstacle = Obstacle {
            center: GeoPoint::new(-0.3, 0.0),
            radius_km: 111.0,
        };
        let adjusted = adjust_route_for_obstacles(route, &[obstacle]);
        assert_eq!(adjusted.len(), 3);
        assert!(adjusted[1].lat > 0.0, "expected a northward dodge");
    }

    #[test]
    fn degenerate_segment_stays_finite_inside_a_hazard() {
        // A same-cell plan yields two identical waypoints; an obstacle
        // covering them must not splice in a NaN dodge.
        let point = GeoPoint::new(25.1, -80.1);
        let route = vec![point, point];
        let obstacle = Obstacle {
            center: point,
            radius_km: 120.0,
        };
        let adjusted = adjust_route_for_obstacles(route.clone(), &[obstacle]);
        assert_eq!(adjusted, route);
        assert!(adjusted
            .iter()
            .all(|w| w.lat.is_finite() && w.lon.is_finite()));
    }

    #[test]
    fn clear_route_is_untouched() {
        let route = vec![GeoPoint::new(0.0, -2.0), GeoPoint::new(0.0, 2.0)];
        let obstacle = Obstacle {
            center: GeoPoint::new(5.0, 0.0),
            radius_km: 50.0,
        };
        let adjusted = adjust_route_for_obstacles(route.clone(), &[obstacle]);
        assert_eq!(adjusted, route);
    }

    #[test]
    fn fresh_segments_are_not_retested_within_a_pass() {
        // A hazard wide enough that the split segments still graze it;
        // a single pass inserts exactly one point per original hit.
        let route = vec![GeoPoint::new(0.0, -1.0), GeoPoint::new(0.0, 1.0)];
        let obstacle = Obstacle {
            center: GeoPoint::new(0.0, 0.0),
            radius_km: 160.0,
        };
        let adjusted = adjust_route_for_obstacles(route, &[obstacle]);
        assert_eq!(adjusted.len(), 3);
    }

    #[test]
    fn coarse_pass_triggers_for_fragile_vessel_in_severe_weather() {
        let route = vec![
            GeoPoint::new(25.0, -80.0),
            GeoPoint::new(30.0, -72.0),
            GeoPoint::new(35.0, -65.0),
        ];
        let zones = [zone(30.0, -72.0, 75.0, 3.0)];
        let adjusted = adjust_route_for_weather(route.clone(), &zones, 0.32);
        assert_eq!(adjusted.len(), 4);
        let inserted = adjusted[1];
        assert!((inserted.lat - 32.0).abs() < 1e-9);
        assert!((inserted.lon - -72.0).abs() < 1e-9);

        // Sturdy vessel: untouched.
        let untouched = adjust_route_for_weather(route.clone(), &zones, 0.72);
        assert_eq!(untouched, route);

        // Mild weather: untouched regardless of safety.
        let mild = [zone(30.0, -72.0, 40.0, 2.0)];
        let untouched = adjust_route_for_weather(route.clone(), &mild, 0.32);
        assert_eq!(untouched, route);
    }

    #[test]
    fn nearest_port_from_miami_start() {
        let ports = reference_ports();
        let port = nearest_port(GeoPoint::new(25.0, -80.0), &ports).unwrap();
        assert_eq!(port.name, "Miami");
    }

    #[test]
    fn nearest_port_ties_break_by_iteration_order() {
        let ports = vec![
            Port {
                name: "First".to_string(),
                position: GeoPoint::new(10.0, 10.0),
            },
            Port {
                name: "Twin".to_string(),
                position: GeoPoint::new(10.0, 10.0),
            },
        ];
        let port = nearest_port(GeoPoint::new(0.0, 0.0), &ports).unwrap();
        assert_eq!(port.name, "First");
    }

    #[test]
    fn diversion_applies_to_bad_and_critical_condition() {
        use crate::models::{VesselCondition, VesselType};
        for (condition, expected) in [
            (VesselCondition::Excellent, false),
            (VesselCondition::Good, false),
            (VesselCondition::Fair, false),
            (VesselCondition::Bad, true),
            (VesselCondition::Critical, true),
        ] {
            let vessel = Vessel::new(VesselType::Cargo, condition);
            assert_eq!(requires_port_diversion(&vessel), expected);
        }
    }
}
