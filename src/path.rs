use crate::search::SearchNode;
use grid_2d::{Coord, Grid};

/// Walks parent links back from `goal` to `start` and writes the cells into
/// `path` in start-to-goal order.
///
/// Panics if the chain ends or loops before reaching `start`; either means
/// the search bookkeeping is corrupt.
pub(crate) fn make_path(
    node_grid: &Grid<SearchNode>,
    start: Coord,
    goal: Coord,
    path: &mut Vec<Coord>,
) {
    path.clear();
    let max_len = (node_grid.width() * node_grid.height()) as usize;
    let mut coord = goal;
    loop {
        path.push(coord);
        if coord == start {
            break;
        }
        assert!(
            path.len() <= max_len,
            "parent chain from {:?} loops without reaching {:?}",
            goal,
            start
        );
        coord = match node_grid.get(coord).and_then(|node| node.parent) {
            Some(parent) => parent,
            None => panic!(
                "parent chain from {:?} broken at {:?} before reaching {:?}",
                goal, coord, start
            ),
        };
    }
    path.reverse();
}

/// Number of moves in a path.
pub fn num_steps(path: &[Coord]) -> usize {
    path.len().saturating_sub(1)
}

/// True if each consecutive pair of cells is one cardinal step apart, or
/// one ordinal step apart when `allow_diagonals` is set.
pub fn is_contiguous(path: &[Coord], allow_diagonals: bool) -> bool {
    path.windows(2).all(|pair| {
        let dx = (pair[1].x - pair[0].x).abs();
        let dy = (pair[1].y - pair[0].y).abs();
        match (dx, dy) {
            (1, 0) | (0, 1) => true,
            (1, 1) => allow_diagonals,
            _ => false,
        }
    })
}

/// Sum of step costs along a path: 1 per cardinal step, `diagonal_cost` per
/// ordinal step.
pub fn path_cost(path: &[Coord], diagonal_cost: f64) -> f64 {
    path.windows(2)
        .map(|pair| {
            if pair[0].x != pair[1].x && pair[0].y != pair[1].y {
                diagonal_cost
            } else {
                1.0
            }
        })
        .sum()
}
