#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Reasons a search produced no path. None of these indicate a fault.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    StartOutsideGrid,
    GoalOutsideGrid,
    NoPath,
}
