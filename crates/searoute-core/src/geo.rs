//! Spatial math shared by the pathfinder, the weather merge pass, and the
//! route adjuster.

use crate::models::GeoPoint;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Rough conversion between kilometers and degrees of arc. The route
/// adjuster works in degree space and uses this to compare hazard radii
/// (given in km) against segment distances.
pub const KM_PER_DEG: f64 = 111.0;

/// Great-circle distance between two points in kilometers.
pub fn haversine_distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let dphi = (b.lat - a.lat).to_radians();
    let dlambda = (b.lon - a.lon).to_radians();
    let h = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Euclidean distance in raw degree space.
///
/// The avoidance geometry treats lat/lon as a flat plane, matching the
/// radius-over-111 approximation it pairs with.
pub fn planar_distance_deg(a: GeoPoint, b: GeoPoint) -> f64 {
    let dx = b.lat - a.lat;
    let dy = b.lon - a.lon;
    (dx * dx + dy * dy).sqrt()
}

/// Closest point on the segment `a`-`b` to `p`, via clamped projection in
/// degree space. Degenerate (point) segments return `a`.
pub fn closest_point_on_segment(a: GeoPoint, b: GeoPoint, p: GeoPoint) -> GeoPoint {
    let dx = b.lat - a.lat;
    let dy = b.lon - a.lon;
    let length_sq = dx * dx + dy * dy;
    if length_sq == 0.0 {
        return a;
    }
    let t = (((p.lat - a.lat) * dx + (p.lon - a.lon) * dy) / length_sq).clamp(0.0, 1.0);
    GeoPoint::new(a.lat + t * dx, a.lon + t * dy)
}

/// Whether the segment `a`-`b` passes within `radius_deg` of `center`.
pub fn segment_intersects_circle(
    a: GeoPoint,
    b: GeoPoint,
    center: GeoPoint,
    radius_deg: f64,
) -> bool {
    let closest = closest_point_on_segment(a, b, center);
    planar_distance_deg(closest, center) < radius_deg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn haversine_one_degree_of_latitude() {
        let d = haversine_distance_km(GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 0.0));
        assert!((d - 111.19).abs() < 0.5, "got {d}");
    }

    #[test]
    fn haversine_same_point_is_zero() {
        let p = GeoPoint::new(25.8, -80.2);
        assert!(haversine_distance_km(p, p) < 1e-9);
    }

    #[test]
    fn closest_point_clamps_to_endpoints() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 10.0);
        // Beyond the b end of the segment.
        let p = GeoPoint::new(0.0, 15.0);
        let c = closest_point_on_segment(a, b, p);
        assert_eq!((c.lat, c.lon), (0.0, 10.0));
        // Beyond the a end.
        let p = GeoPoint::new(3.0, -5.0);
        let c = closest_point_on_segment(a, b, p);
        assert_eq!((c.lat, c.lon), (0.0, 0.0));
    }

    #[test]
    fn closest_point_projects_onto_interior() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 10.0);
        let p = GeoPoint::new(2.0, 4.0);
        let c = closest_point_on_segment(a, b, p);
        assert!((c.lat - 0.0).abs() < 1e-12);
        assert!((c.lon - 4.0).abs() < 1e-12);
    }

    #[test]
    fn segment_circle_intersection() {
        let a = GeoPoint::new(0.0, -5.0);
        let b = GeoPoint::new(0.0, 5.0);
        let center = GeoPoint::new(1.0, 0.0);
        assert!(segment_intersects_circle(a, b, center, 1.5));
        assert!(!segment_intersects_circle(a, b, center, 0.5));
    }
}
