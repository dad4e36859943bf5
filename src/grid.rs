use crate::direction::Direction;
use serde::{Deserialize, Serialize};

/// Row-major cell index. Row 0 is the start row.
pub type Cell = usize;

/// Default maze width
pub const WIDTH: usize = 5;
/// Default maze height
pub const HEIGHT: usize = 5;

/// Topology of a rectangular maze.
///
/// Only dimensions live here; which edges are open is never known up front
/// and is learned through a [`Sensor`](crate::sensing::Sensor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub cols: usize,
    pub rows: usize,
}

impl Default for Grid {
    fn default() -> Self {
        Grid::new(WIDTH, HEIGHT)
    }
}

impl Grid {
    pub fn new(cols: usize, rows: usize) -> Self {
        assert!(cols > 0 && rows > 0, "grid must have at least one cell");
        Grid { cols, rows }
    }

    pub fn cell_count(&self) -> usize {
        self.cols * self.rows
    }

    /// The agent always starts in the first cell
    pub fn start(&self) -> Cell {
        0
    }

    /// The exit is the last cell
    pub fn exit(&self) -> Cell {
        self.cell_count() - 1
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell < self.cell_count()
    }

    /// Convert cell index to (x, y) coordinates
    pub fn get_coords(&self, cell: Cell) -> (usize, usize) {
        (cell % self.cols, cell / self.cols)
    }

    /// Convert (x, y) coordinates to cell index
    pub fn get_id(&self, x: usize, y: usize) -> Cell {
        x + y * self.cols
    }

    /// Neighbor of `cell` in `direction`, or `None` past the boundary.
    pub fn neighbor(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        if !self.contains(cell) {
            return None;
        }

        match direction {
            Direction::Right => {
                let next = cell + 1;
                (next % self.cols != 0).then_some(next)
            }
            Direction::Up => {
                let next = cell + self.cols;
                (next < self.cell_count()).then_some(next)
            }
            Direction::Left => (cell % self.cols != 0).then(|| cell - 1),
            Direction::Down => (cell >= self.cols).then(|| cell - self.cols),
            Direction::Invalid => None,
        }
    }

    /// Direction that leads from `from` to `to`, or `Invalid` if the cells
    /// are not adjacent.
    pub fn direction_between(&self, from: Cell, to: Cell) -> Direction {
        if !self.contains(from) || !self.contains(to) {
            return Direction::Invalid;
        }

        let same_row = from / self.cols == to / self.cols;
        if to == from + self.cols {
            Direction::Up
        } else if from == to + self.cols {
            Direction::Down
        } else if to == from + 1 && same_row {
            Direction::Right
        } else if from == to + 1 && same_row {
            Direction::Left
        } else {
            Direction::Invalid
        }
    }

    /// Same as [`Grid::direction_between`], with a missing target mapping to `Invalid`.
    pub fn direction_to(&self, from: Cell, to: Option<Cell>) -> Direction {
        match to {
            Some(to) => self.direction_between(from, to),
            None => Direction::Invalid,
        }
    }

    pub fn is_adjacent(&self, a: Cell, b: Cell) -> bool {
        self.direction_between(a, b).is_valid()
    }

    /// In-grid neighbors of `cell` in the given enumeration order
    pub fn neighbors<'a>(
        &'a self,
        cell: Cell,
        order: &'a [Direction],
    ) -> impl Iterator<Item = (Direction, Cell)> + 'a {
        order
            .iter()
            .filter_map(move |&direction| self.neighbor(cell, direction).map(|n| (direction, n)))
    }
}
