use crate::direction::Direction;
use crate::grid::{Cell, Grid};
use crate::move_log::{Event, MoveLog};
use crate::obstacle::ObstacleSet;
use crate::sensing::Sensor;

/// A maze whose walls are known to the simulation but not to the solver.
///
/// Tracks the agent's position from the `step` calls it receives and records
/// every probe and move.
pub struct SimulatedMaze {
    grid: Grid,
    walls: ObstacleSet,
    position: Cell,
    log: MoveLog,
}

impl SimulatedMaze {
    pub fn new(grid: Grid, walls: ObstacleSet) -> Self {
        SimulatedMaze {
            grid,
            walls,
            position: grid.start(),
            log: MoveLog::new(),
        }
    }

    /// Open maze of the default size
    pub fn open() -> Self {
        Self::new(Grid::default(), ObstacleSet::new())
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn walls(&self) -> &ObstacleSet {
        &self.walls
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    pub fn log(&self) -> &MoveLog {
        &self.log
    }

    pub fn into_log(self) -> MoveLog {
        self.log
    }

    fn is_open(&self, direction: Direction) -> bool {
        match self.grid.neighbor(self.position, direction) {
            Some(neighbor) => !self.walls.blocks(self.position, neighbor),
            None => false,
        }
    }
}

impl Sensor for SimulatedMaze {
    fn probe(&mut self, direction: Direction) -> bool {
        assert!(direction.is_valid(), "probed with an invalid direction");

        let open = self.is_open(direction);
        self.log.record(Event::Probe {
            from: self.position,
            direction,
            open,
        });
        open
    }

    fn step(&mut self, direction: Direction) {
        assert!(
            self.is_open(direction),
            "agent walked through a wall from {} going {}",
            self.position,
            direction
        );

        let from = self.position;
        let to = self.grid.neighbor(from, direction).unwrap_or(from);
        self.position = to;
        self.log.record(Event::Move { from, to, direction });
    }
}
