use direction::Direction;
use grid_2d::{Coord, Size};
use std::slice;

/// Cardinal expansion order: `+x`, `-x`, `+y`, `-y`.
pub static CARDINAL_ORDER: [Direction; 4] = [
    Direction::East,
    Direction::West,
    Direction::South,
    Direction::North,
];

/// Ordinal expansion order, visited after the cardinals.
pub static ORDINAL_ORDER: [Direction; 4] = [
    Direction::SouthEast,
    Direction::SouthWest,
    Direction::NorthEast,
    Direction::NorthWest,
];

/// In-bounds coordinates adjacent to a centre, paired with the direction
/// taken to reach them. Always yields at most eight items, and none at all
/// when the centre itself lies outside the grid.
#[derive(Debug, Clone)]
pub struct NeighbourCoords {
    centre: Coord,
    size: Size,
    cardinals: slice::Iter<'static, Direction>,
    ordinals: slice::Iter<'static, Direction>,
}

impl NeighbourCoords {
    pub fn new(centre: Coord, size: Size, allow_diagonals: bool) -> Self {
        let (cardinals, ordinals): (&'static [Direction], &'static [Direction]) =
            if !centre.is_valid(size) {
                (&[], &[])
            } else if allow_diagonals {
                (&CARDINAL_ORDER, &ORDINAL_ORDER)
            } else {
                (&CARDINAL_ORDER, &[])
            };
        Self {
            centre,
            size,
            cardinals: cardinals.iter(),
            ordinals: ordinals.iter(),
        }
    }

    fn step(&self, direction: Direction) -> Option<Coord> {
        let offset = direction.coord();
        let coord = Coord::new(
            self.centre.x.checked_add(offset.x)?,
            self.centre.y.checked_add(offset.y)?,
        );
        if coord.is_valid(self.size) {
            Some(coord)
        } else {
            None
        }
    }
}

impl Iterator for NeighbourCoords {
    type Item = (Coord, Direction);
    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&direction) = self.cardinals.next().or_else(|| self.ordinals.next()) {
            if let Some(coord) = self.step(direction) {
                return Some((coord, direction));
            }
        }
        None
    }
}
