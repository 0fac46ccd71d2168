use grid_2d::Coord;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Estimate of the remaining cost from a cell to the goal.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heuristic {
    /// `|dx| + |dy|`. Admissible and consistent for cardinal movement.
    /// With diagonals enabled it may overestimate, so paths are not
    /// guaranteed to be optimal.
    Manhattan,
    /// Cardinal steps cost 1 and ordinal steps cost the configured
    /// diagonal cost. Admissible when diagonals are enabled.
    Octile,
}

impl Default for Heuristic {
    fn default() -> Self {
        Heuristic::Manhattan
    }
}

impl Heuristic {
    pub fn estimate(self, a: Coord, b: Coord, diagonal_cost: f64) -> f64 {
        match self {
            Heuristic::Manhattan => manhattan_distance(a, b) as f64,
            Heuristic::Octile => octile_distance(a, b, diagonal_cost),
        }
    }
}

pub fn manhattan_distance(a: Coord, b: Coord) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

pub fn octile_distance(a: Coord, b: Coord, diagonal_cost: f64) -> f64 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    let (cardinal, ordinal) = if dx < dy {
        (dy - dx, dx)
    } else {
        (dx - dy, dy)
    };
    cardinal as f64 + ordinal as f64 * diagonal_cost
}
