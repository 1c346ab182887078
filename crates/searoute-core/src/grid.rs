//! Mapping between continuous coordinates and discrete search cells.

use crate::models::GeoPoint;
use serde::{Deserialize, Serialize};

/// Angular size of one search cell, in degrees.
pub const GRID_RESOLUTION: f64 = 0.5;

/// A discrete cell on the search grid. Many points share a cell; the
/// mapping back out always yields the cell's geometric center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCell {
    pub x: i64,
    pub y: i64,
}

impl GridCell {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The cell containing `point`, by floor division at the grid
    /// resolution.
    pub fn containing(point: GeoPoint) -> Self {
        Self {
            x: (point.lat / GRID_RESOLUTION).floor() as i64,
            y: (point.lon / GRID_RESOLUTION).floor() as i64,
        }
    }

    /// The geometric center of this cell.
    pub fn center(self) -> GeoPoint {
        GeoPoint::new(
            (self.x as f64 + 0.5) * GRID_RESOLUTION,
            (self.y as f64 + 0.5) * GRID_RESOLUTION,
        )
    }
}
