#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SearchMetadata {
    /// Number of cells selected from the open set, goal included.
    pub num_nodes_visited: usize,
    /// `g` cost of the goal.
    pub cost: f64,
    /// Number of cells in the path, start and goal included.
    pub length: usize,
}
