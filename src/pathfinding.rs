use crate::direction::Direction;
use crate::discovery::Discovery;
use crate::grid::{Cell, Grid};
use crate::obstacle::ObstacleSet;
use std::collections::VecDeque;

/// Planned route, stored back to front: the immediate next step is on top.
///
/// The source cell is not part of the path; the destination is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathStack {
    cells: Vec<Cell>,
}

impl PathStack {
    /// Build from cells in travel order (first step first)
    pub fn from_route(route: &[Cell]) -> Self {
        PathStack {
            cells: route.iter().rev().copied().collect(),
        }
    }

    /// Next cell to move to
    pub fn peek(&self) -> Option<Cell> {
        self.cells.last().copied()
    }

    pub fn pop(&mut self) -> Option<Cell> {
        self.cells.pop()
    }

    /// Number of moves left on the path
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Remaining cells in travel order
    pub fn route(&self) -> Vec<Cell> {
        self.cells.iter().rev().copied().collect()
    }
}

/// Breadth-first shortest path from `from` to `to` that never crosses a
/// known obstacle.
///
/// Returns `None` when `to` is unreachable. Each call owns a fresh discovery
/// set, so repeated calls with the same obstacles give the same answer.
pub fn shortest_path(
    grid: &Grid,
    from: Cell,
    to: Cell,
    obstacles: &ObstacleSet,
) -> Option<PathStack> {
    if !grid.contains(from) || !grid.contains(to) {
        return None;
    }
    if from == to {
        return Some(PathStack::default());
    }

    let mut discovery = Discovery::new(grid.cell_count());
    let mut parent: Vec<Option<Cell>> = vec![None; grid.cell_count()];
    let mut queue = VecDeque::new();

    discovery.discover(from);
    queue.push_back(from);

    let mut reached = false;
    while let Some(cell) = queue.pop_front() {
        if cell == to {
            reached = true;
            break;
        }

        for (_, neighbor) in grid.neighbors(cell, &Direction::CANDIDATES) {
            if discovery.is_discovered(neighbor) || obstacles.blocks(cell, neighbor) {
                continue;
            }

            parent[neighbor] = Some(cell);
            discovery.discover(neighbor);
            queue.push_back(neighbor);
        }
    }

    if !reached {
        return None;
    }

    // Walk parents back to the source; the source itself is excluded
    let mut cells = Vec::new();
    let mut cell = to;
    while cell != from {
        cells.push(cell);
        cell = parent[cell]?;
    }

    Some(PathStack { cells })
}

/// Format a route for display
pub fn format_route(route: &[Cell]) -> String {
    if route.is_empty() {
        return "No path".to_string();
    }

    route
        .iter()
        .map(|cell| cell.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}
