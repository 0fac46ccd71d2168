use grid_2d::Coord;
use std::collections::HashSet;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Records which cells a search touched, for drawing.
///
/// `opened` accumulates every cell ever added to the open set, including
/// those later closed. `closed` holds every cell that was expanded.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchVisual {
    pub opened: HashSet<Coord>,
    pub closed: HashSet<Coord>,
}

impl SearchVisual {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn clear(&mut self) {
        self.opened.clear();
        self.closed.clear();
    }

    /// Opened cells that were never expanded: the frontier at termination.
    pub fn frontier(&self) -> impl Iterator<Item = Coord> + '_ {
        self.opened
            .iter()
            .filter(move |coord| !self.closed.contains(coord))
            .cloned()
    }

    pub(crate) fn open(&mut self, coord: Coord) {
        self.opened.insert(coord);
    }

    pub(crate) fn close(&mut self, coord: Coord) {
        self.closed.insert(coord);
    }
}
