use crate::grid::Grid;
use grid_2d::{Coord, Size};


/// Builds a grid from rows of characters:
/// `.` walkable, `#` blocked, `s` start, `g` goal, `B` start and goal,
/// `S` blocked start, `G` blocked goal.
pub(crate) fn grid_from_strings(strings: &[&str]) -> (Grid, Option<Coord>, Option<Coord>) {
    let width = strings[0].len() as u32;
    let height = strings.len() as u32;
    let mut grid = Grid::new(Size::new(width, height));
    let mut start = None;
    let mut goal = None;
    for (i, line) in strings.iter().enumerate() {
        for (j, ch) in line.chars().enumerate() {
            let coord = Coord::new(j as i32, i as i32);
            match ch {
                '.' => (),
                '#' => grid.set_walkable(coord, false),
                's' => start = Some(coord),
                'g' => goal = Some(coord),
                'B' => {
                    start = Some(coord);
                    goal = Some(coord);
                }
                'S' => {
                    start = Some(coord);
                    grid.set_walkable(coord, false);
                }
                'G' => {
                    goal = Some(coord);
                    grid.set_walkable(coord, false);
                }
                _ => panic!("unexpected map character {:?}", ch),
            }
        }
    }
    (grid, start, goal)
}
