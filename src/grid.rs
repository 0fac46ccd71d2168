use crate::config::GridConfig;
use crate::neighbour::NeighbourCoords;
use grid_2d::{Coord, Grid as CoordGrid, Size};
use std::hash::{Hash, Hasher};

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Anything that can answer whether a coordinate may be stepped on.
///
/// Returns `None` for coordinates outside the grid.
pub trait WalkableGrid {
    fn size(&self) -> Size;
    fn is_walkable(&self, coord: Coord) -> Option<bool>;
    fn is_walkable_and_inside(&self, coord: Coord) -> bool {
        self.is_walkable(coord).unwrap_or(false)
    }
}

/// One addressable position. Identity is its coordinate.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct Cell {
    coord: Coord,
    walkable: bool,
}

impl Cell {
    fn new(coord: Coord) -> Self {
        Self {
            coord,
            walkable: true,
        }
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    pub fn x(&self) -> i32 {
        self.coord.x
    }

    pub fn y(&self) -> i32 {
        self.coord.y
    }

    pub fn is_walkable(&self) -> bool {
        self.walkable
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coord.hash(state);
    }
}

/// Rectangular walkability map. The shape is fixed at construction; only
/// the walkable flag of each cell may change afterwards.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct Grid {
    cells: CoordGrid<Cell>,
    cell_size: f32,
}

impl Grid {
    pub fn new(size: Size) -> Self {
        Self::from_config(&GridConfig {
            width: size.width(),
            height: size.height(),
            ..Default::default()
        })
    }

    pub fn from_config(config: &GridConfig) -> Self {
        let size = Size::new(config.width, config.height);
        Self {
            cells: CoordGrid::new_fn(size, Cell::new),
            cell_size: config.cell_size,
        }
    }

    pub fn width(&self) -> u32 {
        self.cells.width()
    }

    pub fn height(&self) -> u32 {
        self.cells.height()
    }

    pub fn size(&self) -> Size {
        self.cells.size()
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn within_bounds(&self, coord: Coord) -> bool {
        coord.is_valid(self.size())
    }

    /// Out-of-range coordinates are an ordinary query and yield `None`.
    pub fn get(&self, coord: Coord) -> Option<&Cell> {
        if self.within_bounds(coord) {
            self.cells.get(coord)
        } else {
            None
        }
    }

    pub fn set_walkable(&mut self, coord: Coord, walkable: bool) {
        if let Some(cell) = self.get_mut(coord) {
            cell.walkable = walkable;
        }
    }

    /// Flips the walkable flag of a cell, returning its new value.
    pub fn toggle_walkable(&mut self, coord: Coord) -> Option<bool> {
        let cell = self.get_mut(coord)?;
        cell.walkable = !cell.walkable;
        Some(cell.walkable)
    }

    /// Cells adjacent to `coord`: `+x`, `-x`, `+y`, `-y`, then (if
    /// `allow_diagonals`) `(+x,+y)`, `(-x,+y)`, `(+x,-y)`, `(-x,-y)`.
    /// Cells outside the grid are skipped, and a centre outside the grid
    /// has no neighbours.
    pub fn neighbours(&self, coord: Coord, allow_diagonals: bool) -> Neighbours {
        Neighbours {
            grid: self,
            coords: NeighbourCoords::new(coord, self.size(), allow_diagonals),
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    fn get_mut(&mut self, coord: Coord) -> Option<&mut Cell> {
        if self.within_bounds(coord) {
            self.cells.get_mut(coord)
        } else {
            None
        }
    }
}

impl WalkableGrid for Grid {
    fn size(&self) -> Size {
        self.cells.size()
    }

    fn is_walkable(&self, coord: Coord) -> Option<bool> {
        self.get(coord).map(Cell::is_walkable)
    }
}

#[derive(Clone)]
pub struct Neighbours<'a> {
    grid: &'a Grid,
    coords: NeighbourCoords,
}

impl<'a> Iterator for Neighbours<'a> {
    type Item = &'a Cell;
    fn next(&mut self) -> Option<Self::Item> {
        let (coord, _) = self.coords.next()?;
        self.grid.get(coord)
    }
}
