//! A* shortest-path search over rectangular grids whose cells can be
//! toggled between walkable and blocked at runtime.
//!
//! A [`Grid`] is a passive walkability map. Searches run through a
//! [`SearchContext`], which owns all per-cell cost and parent bookkeeping
//! and resets it at the start of every query, so repeated queries against
//! an unchanged grid return identical paths.

mod config;
mod error;
mod grid;
mod heuristic;
mod metadata;
mod neighbour;
mod path;
mod search;
mod visual;

pub use config::*;
pub use error::*;
pub use grid::*;
pub use heuristic::*;
pub use metadata::*;
pub use neighbour::*;
pub use path::{is_contiguous, num_steps, path_cost};
pub use search::{find_path, SearchContext, COST_EPSILON};
pub use visual::*;

pub use direction::Direction;
pub use grid_2d::{Coord, Size};

#[cfg(test)]
mod tests;
