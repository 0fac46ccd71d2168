use crate::config::SearchConfig;
use crate::error::Error;
use crate::grid::WalkableGrid;
use crate::metadata::SearchMetadata;
use crate::neighbour::NeighbourCoords;
use crate::path;
use crate::visual::SearchVisual;
use best::BestMap;
use grid_2d::{Coord, Grid, Size};
use log::{debug, trace};
use std::cmp::Ordering;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Two `f` costs closer than this are treated as equal when choosing the
/// next cell to expand, and the `h` cost decides instead.
pub const COST_EPSILON: f64 = 1e-6;

#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NodeState {
    Unvisited,
    Open,
    Closed,
}

#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy)]
pub(crate) struct SearchNode {
    pub(crate) coord: Coord,
    pub(crate) g_cost: f64,
    pub(crate) h_cost: f64,
    pub(crate) parent: Option<Coord>,
    pub(crate) state: NodeState,
}

impl SearchNode {
    fn new(coord: Coord) -> Self {
        Self {
            coord,
            g_cost: f64::INFINITY,
            h_cost: 0.0,
            parent: None,
            state: NodeState::Unvisited,
        }
    }

    fn reset(&mut self) {
        *self = Self::new(self.coord);
    }

    fn f_cost(&self) -> f64 {
        self.g_cost + self.h_cost
    }
}

/// Ordering key of an open cell: lowest `f`, then lowest `h`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Priority {
    pub(crate) f_cost: f64,
    pub(crate) h_cost: f64,
}

impl Priority {
    fn of(node: &SearchNode) -> Self {
        Self {
            f_cost: node.f_cost(),
            h_cost: node.h_cost,
        }
    }
}

impl PartialEq for Priority {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if (self.f_cost - other.f_cost).abs() < COST_EPSILON {
            self.h_cost.partial_cmp(&other.h_cost)
        } else {
            self.f_cost.partial_cmp(&other.f_cost)
        }
    }
}

/// Scratch state for A* searches.
///
/// Holds the per-cell `g`, `h` and parent bookkeeping so the grid itself
/// stays a passive walkability map. Every search resets all of it before
/// starting, so a context can be reused for any number of queries without
/// earlier results leaking into later ones. Give each concurrent search its
/// own context.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct SearchContext {
    node_grid: Grid<SearchNode>,
    open: Vec<Coord>,
}

impl SearchContext {
    pub fn new(size: Size) -> Self {
        Self {
            node_grid: Grid::new_fn(size, SearchNode::new),
            open: Vec::new(),
        }
    }

    pub fn size(&self) -> Size {
        self.node_grid.size()
    }

    /// Sets every cell to `g = inf`, `h = 0`, no parent, and empties the
    /// open set. The context is resized first if `size` differs from its
    /// own. Idempotent.
    pub fn reset_search_fields(&mut self, size: Size) {
        if self.node_grid.size() == size {
            for node in self.node_grid.iter_mut() {
                node.reset();
            }
        } else {
            self.node_grid = Grid::new_fn(size, SearchNode::new);
        }
        self.open.clear();
    }

    /// Finds a minimum-cost path from `start` to `goal` and writes it into
    /// `path`, start and goal included.
    ///
    /// The walkability of `start` and `goal` is not checked; an unwalkable
    /// goal is simply never reached. Cells outside the grid produce
    /// `StartOutsideGrid` or `GoalOutsideGrid`, and an exhausted open set
    /// produces `NoPath`. On any error `path` is left empty.
    pub fn find_path<G>(
        &mut self,
        grid: &G,
        start: Coord,
        goal: Coord,
        config: SearchConfig,
        path: &mut Vec<Coord>,
        mut visual: Option<&mut SearchVisual>,
    ) -> Result<SearchMetadata, Error>
    where
        G: WalkableGrid,
    {
        let size = grid.size();
        path.clear();
        self.reset_search_fields(size);

        if !start.is_valid(size) || grid.is_walkable(start).is_none() {
            debug!("start {:?} is outside the grid", start);
            return Err(Error::StartOutsideGrid);
        }
        if !goal.is_valid(size) || grid.is_walkable(goal).is_none() {
            debug!("goal {:?} is outside the grid", goal);
            return Err(Error::GoalOutsideGrid);
        }

        let heuristic =
            |coord: Coord| config.heuristic.estimate(coord, goal, config.diagonal_cost);

        {
            let node = self.node_mut(start);
            node.g_cost = 0.0;
            node.h_cost = heuristic(start);
            node.state = NodeState::Open;
        }
        self.open.push(start);
        if let Some(visual) = visual.as_mut() {
            visual.open(start);
        }

        let mut num_nodes_visited = 0;

        while let Some(position) = self.lowest_open_position() {
            let current_coord = self.open.remove(position);
            num_nodes_visited += 1;

            if current_coord == goal {
                path::make_path(&self.node_grid, start, goal, path);
                let cost = self.node(goal).g_cost;
                debug!(
                    "path {:?} -> {:?}: cost {}, length {}, {} nodes visited",
                    start,
                    goal,
                    cost,
                    path.len(),
                    num_nodes_visited
                );
                return Ok(SearchMetadata {
                    num_nodes_visited,
                    cost,
                    length: path.len(),
                });
            }

            let current_cost = {
                let node = self.node_mut(current_coord);
                node.state = NodeState::Closed;
                node.g_cost
            };
            if let Some(visual) = visual.as_mut() {
                visual.close(current_coord);
            }
            trace!("expanding {:?} at cost {}", current_coord, current_cost);

            let neighbours =
                NeighbourCoords::new(current_coord, grid.size(), config.allow_diagonals);
            for (neighbour_coord, direction) in neighbours {
                if !grid.is_walkable_and_inside(neighbour_coord) {
                    continue;
                }

                let step_cost = if direction.is_ordinal() {
                    config.diagonal_cost
                } else {
                    1.0
                };
                let tentative_cost = current_cost + step_cost;

                let node = self.node_mut(neighbour_coord);
                if node.state == NodeState::Closed || tentative_cost >= node.g_cost {
                    continue;
                }

                node.parent = Some(current_coord);
                node.g_cost = tentative_cost;
                node.h_cost = heuristic(neighbour_coord);

                if node.state == NodeState::Unvisited {
                    node.state = NodeState::Open;
                    self.open.push(neighbour_coord);
                    if let Some(visual) = visual.as_mut() {
                        visual.open(neighbour_coord);
                    }
                }
            }
        }

        debug!(
            "no path {:?} -> {:?}, {} nodes visited",
            start, goal, num_nodes_visited
        );
        Err(Error::NoPath)
    }

    /// `g` cost recorded by the most recent search, `None` outside the grid.
    pub fn g_cost(&self, coord: Coord) -> Option<f64> {
        self.node_grid.get(coord).map(|node| node.g_cost)
    }

    pub fn h_cost(&self, coord: Coord) -> Option<f64> {
        self.node_grid.get(coord).map(|node| node.h_cost)
    }

    pub fn f_cost(&self, coord: Coord) -> Option<f64> {
        self.node_grid.get(coord).map(SearchNode::f_cost)
    }

    pub fn parent(&self, coord: Coord) -> Option<Coord> {
        self.node_grid.get(coord).and_then(|node| node.parent)
    }

    /// Cells still in the open set when the most recent search ended.
    pub fn open_coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.coords_in_state(NodeState::Open)
    }

    /// Cells expanded by the most recent search.
    pub fn closed_coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.coords_in_state(NodeState::Closed)
    }

    fn coords_in_state(&self, state: NodeState) -> impl Iterator<Item = Coord> + '_ {
        self.node_grid
            .iter()
            .filter(move |node| node.state == state)
            .map(|node| node.coord)
    }

    /// Position in the open list of the cell to expand next. Among equal
    /// priorities the earliest inserted wins.
    fn lowest_open_position(&self) -> Option<usize> {
        let mut best_map = BestMap::new();
        for (position, &coord) in self.open.iter().enumerate() {
            best_map.insert_lt(Priority::of(self.node(coord)), position);
        }
        best_map.into_value()
    }

    fn node(&self, coord: Coord) -> &SearchNode {
        self.node_grid
            .get(coord)
            .expect("SearchContext too small for grid")
    }

    fn node_mut(&mut self, coord: Coord) -> &mut SearchNode {
        self.node_grid
            .get_mut(coord)
            .expect("SearchContext too small for grid")
    }
}

/// Runs a single search with a fresh context, folding every non-path
/// outcome into `None`.
pub fn find_path<G>(
    grid: &G,
    start: Coord,
    goal: Coord,
    config: SearchConfig,
) -> Option<Vec<Coord>>
where
    G: WalkableGrid,
{
    let mut ctx = SearchContext::new(grid.size());
    let mut path = Vec::new();
    ctx.find_path(grid, start, goal, config, &mut path, None)
        .ok()
        .map(|_| path)
}
