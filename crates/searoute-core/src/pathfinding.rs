//! A* search over an implicit, unbounded, 8-connected grid.
//!
//! The grid has no blocked cells and uniform step costs, so the search is
//! guaranteed to terminate with a path. Hazard avoidance is deliberately
//! not part of the cost model; it runs as a post-process over the
//! returned route (see `avoidance`).

use crate::grid::GridCell;
use crate::models::{GeoPoint, Route};
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};

const ORTHOGONAL_COST: f64 = 1.0;
const DIAGONAL_COST: f64 = 1.4;

/// Total-order wrapper so f-scores can live in a BinaryHeap.
#[derive(Debug, Clone, Copy)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OpenNode {
    cell: GridCell,
    f_score: FloatOrd,
}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Ordered by f-score only; ties break arbitrarily via heap order,
        // an accepted property of the planner.
        self.f_score
            .cmp(&other.f_score)
            .then_with(|| self.cell.x.cmp(&other.cell.x))
            .then_with(|| self.cell.y.cmp(&other.cell.y))
    }
}

/// Euclidean distance between two cells, in cell units. Admissible and
/// consistent for the 1.0/1.4 step-cost model.
fn heuristic(a: GridCell, b: GridCell) -> f64 {
    let dx = (b.x - a.x) as f64;
    let dy = (b.y - a.y) as f64;
    (dx * dx + dy * dy).sqrt()
}

fn neighbors(cell: GridCell) -> [(GridCell, f64); 8] {
    let GridCell { x, y } = cell;
    [
        (GridCell::new(x + 1, y), ORTHOGONAL_COST),
        (GridCell::new(x - 1, y), ORTHOGONAL_COST),
        (GridCell::new(x, y + 1), ORTHOGONAL_COST),
        (GridCell::new(x, y - 1), ORTHOGONAL_COST),
        (GridCell::new(x + 1, y + 1), DIAGONAL_COST),
        (GridCell::new(x + 1, y - 1), DIAGONAL_COST),
        (GridCell::new(x - 1, y + 1), DIAGONAL_COST),
        (GridCell::new(x - 1, y - 1), DIAGONAL_COST),
    ]
}

/// Find a baseline route between two coordinates.
///
/// The returned route is the chain of traversed cell centers; endpoints
/// are not snapped back to the caller's exact coordinates. When start and
/// goal share a cell the route degenerates to `[start, end]` using the
/// raw coordinates, keeping the length >= 2 contract.
pub fn find_path(start: GeoPoint, end: GeoPoint) -> Route {
    let start_cell = GridCell::containing(start);
    let goal_cell = GridCell::containing(end);

    if start_cell == goal_cell {
        return vec![start, end];
    }

    let mut open_set: BinaryHeap<Reverse<OpenNode>> = BinaryHeap::new();
    let mut came_from: HashMap<GridCell, GridCell> = HashMap::new();
    let mut g_score: HashMap<GridCell, f64> = HashMap::new();
    let mut closed_set: HashSet<GridCell> = HashSet::new();

    g_score.insert(start_cell, 0.0);
    open_set.push(Reverse(OpenNode {
        cell: start_cell,
        f_score: FloatOrd(heuristic(start_cell, goal_cell)),
    }));

    while let Some(Reverse(current)) = open_set.pop() {
        let cell = current.cell;
        if cell == goal_cell {
            return reconstruct_path(&came_from, cell);
        }
        if !closed_set.insert(cell) {
            continue;
        }

        let current_g = g_score.get(&cell).copied().unwrap_or(f64::INFINITY);
        for (neighbor, step_cost) in neighbors(cell) {
            if closed_set.contains(&neighbor) {
                continue;
            }
            let tentative_g = current_g + step_cost;
            if tentative_g < g_score.get(&neighbor).copied().unwrap_or(f64::INFINITY) {
                came_from.insert(neighbor, cell);
                g_score.insert(neighbor, tentative_g);
                open_set.push(Reverse(OpenNode {
                    cell: neighbor,
                    f_score: FloatOrd(tentative_g + heuristic(neighbor, goal_cell)),
                }));
            }
        }
    }

    // Unreachable on the current unbounded uniform-cost grid; kept so a
    // future bounded grid or impassable cells degrade to a straight line
    // instead of an error.
    vec![start, end]
}

fn reconstruct_path(came_from: &HashMap<GridCell, GridCell>, goal: GridCell) -> Route {
    let mut cells = vec![goal];
    let mut current = goal;
    while let Some(&prev) = came_from.get(&current) {
        cells.push(prev);
        current = prev;
    }
    cells.reverse();
    cells.into_iter().map(GridCell::center).collect()
}
