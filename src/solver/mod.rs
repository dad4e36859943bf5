//! Maze-solving engine.
//!
//! A [`Solver`] owns the agent's position and drives a [`Sensor`] with one of
//! two strategies:
//!
//! - [`Strategy::Backtracking`]: depth-first exploration that physically
//!   retraces its steps when the next candidate is not reachable in one move.
//! - [`Strategy::ShortestPathCorrection`]: follows the breadth-first shortest
//!   path over the grid minus known obstacles, replanning whenever a probe
//!   reveals that the next planned edge is closed.

mod backtracking;
mod correction;

use crate::direction::Direction;
use crate::discovery::Discovery;
use crate::grid::{Cell, Grid};
use crate::obstacle::ObstacleSet;
use crate::pathfinding::{self, PathStack};
use crate::sensing::{FnSensor, Sensor};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{info, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    #[default]
    Backtracking,
    ShortestPathCorrection,
}

impl Strategy {
    pub fn toggled(self) -> Strategy {
        match self {
            Strategy::Backtracking => Strategy::ShortestPathCorrection,
            Strategy::ShortestPathCorrection => Strategy::Backtracking,
        }
    }

    /// Parse a command-line name (`backtracking`, `shortest-path`, ...)
    pub fn from_name(name: &str) -> Option<Strategy> {
        match name.to_ascii_lowercase().replace('-', "_").as_str() {
            "backtracking" | "dfs" => Some(Strategy::Backtracking),
            "shortest_path_correction" | "shortest_path" | "correction" | "bfs" => {
                Some(Strategy::ShortestPathCorrection)
            }
            _ => None,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Backtracking => f.write_str("backtracking"),
            Strategy::ShortestPathCorrection => f.write_str("shortest path correction"),
        }
    }
}

/// Counters for one solve call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveStats {
    pub moves: usize,
    pub probes: usize,
    /// Shortest paths planned (correction strategy only)
    pub replans: usize,
    /// Obstacles recorded (correction strategy only)
    pub obstacles: usize,
}

pub struct Solver<S> {
    grid: Grid,
    sensor: S,
    current: Cell,
    discovered: Discovery,
    stats: SolveStats,
}

impl<S: Sensor> Solver<S> {
    /// Solver for the default 5x5 maze
    pub fn new(sensor: S) -> Self {
        Self::with_grid(Grid::default(), sensor)
    }

    pub fn with_grid(grid: Grid, sensor: S) -> Self {
        Solver {
            grid,
            sensor,
            current: grid.start(),
            discovered: Discovery::new(grid.cell_count()),
            stats: SolveStats::default(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The agent's live position
    pub fn current(&self) -> Cell {
        self.current
    }

    /// Counters of the most recent solve call
    pub fn stats(&self) -> SolveStats {
        self.stats
    }

    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    pub fn into_sensor(self) -> S {
        self.sensor
    }

    /// Drive the agent towards the exit.
    ///
    /// Returns true once the exit is reached, false when the exit is proven
    /// unreachable from what the probes revealed.
    pub fn solve(&mut self, strategy: Strategy) -> bool {
        self.stats = SolveStats::default();
        info!(%strategy, start = self.current, exit = self.grid.exit(), "solve started");

        let solved = match strategy {
            Strategy::Backtracking => self.solve_backtracking(),
            Strategy::ShortestPathCorrection => self.solve_correction(),
        };

        info!(
            %strategy,
            solved,
            moves = self.stats.moves,
            probes = self.stats.probes,
            replans = self.stats.replans,
            "solve finished"
        );
        solved
    }

    /// Shortest path from `from` to the exit avoiding `obstacles`
    pub fn shortest_path(&self, from: Cell, obstacles: &ObstacleSet) -> Option<PathStack> {
        pathfinding::shortest_path(&self.grid, from, self.grid.exit(), obstacles)
    }

    /// Probe the edge towards `cell`. Non-adjacent cells are never probed.
    fn is_accessible(&mut self, cell: Cell) -> bool {
        let direction = self.grid.direction_between(self.current, cell);
        if !direction.is_valid() {
            return false;
        }
        self.probe(direction)
    }

    fn probe(&mut self, direction: Direction) -> bool {
        self.stats.probes += 1;
        let open = self.sensor.probe(direction);
        trace!(cell = self.current, ?direction, open, "probe");
        open
    }

    /// Move to an adjacent cell. Moving anywhere else is a logic error.
    fn commit_move(&mut self, cell: Cell) {
        let direction = self.grid.direction_between(self.current, cell);
        assert!(
            direction.is_valid(),
            "cannot move from {} to non-adjacent cell {}",
            self.current,
            cell
        );

        trace!(from = self.current, to = cell, ?direction, "move");
        self.current = cell;
        self.stats.moves += 1;
        self.sensor.step(direction);
    }
}

impl<P, M> Solver<FnSensor<P, M>>
where
    P: FnMut(Direction) -> bool,
    M: FnMut(Direction),
{
    /// Solver for the default maze driven by two callbacks
    pub fn from_fns(probe_fn: P, step_fn: M) -> Self {
        Solver::new(FnSensor::new(probe_fn, step_fn))
    }
}
