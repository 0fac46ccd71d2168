use crate::heuristic::Heuristic;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Approximation of `sqrt(2)` used for ordinal steps.
pub const DEFAULT_DIAGONAL_COST: f64 = 1.4;

#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    pub width: u32,
    pub height: u32,
    /// World-space edge length of one cell. Only stored; mapping between
    /// world positions and coordinates is left to the caller.
    pub cell_size: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            cell_size: 1.0,
        }
    }
}

#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    pub allow_diagonals: bool,
    pub diagonal_cost: f64,
    pub heuristic: Heuristic,
}

impl SearchConfig {
    pub fn cardinal() -> Self {
        Default::default()
    }

    pub fn with_diagonals() -> Self {
        Self {
            allow_diagonals: true,
            ..Default::default()
        }
    }

    pub fn heuristic(self, heuristic: Heuristic) -> Self {
        Self { heuristic, ..self }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            allow_diagonals: false,
            diagonal_cost: DEFAULT_DIAGONAL_COST,
            heuristic: Heuristic::Manhattan,
        }
    }
}
