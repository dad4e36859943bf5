use crate::grid::{Cell, Grid};
use crate::move_log::{Event, LoggedEvent};
use crate::obstacle::{Obstacle, ObstacleSet};

/// Steps through a recorded solve one move at a time.
///
/// Probes between two moves are applied together with the move that follows
/// them, so each step shows what the agent knew when it moved.
pub struct Replay {
    grid: Grid,
    events: Vec<Event>,
    cursor: usize,
    position: Cell,
    known: ObstacleSet,
    trail: Vec<Cell>,
}

impl Replay {
    pub fn new(grid: Grid, events: &[LoggedEvent]) -> Self {
        Replay {
            grid,
            events: events.iter().map(|e| e.event.clone()).collect(),
            cursor: 0,
            position: grid.start(),
            known: ObstacleSet::new(),
            trail: vec![grid.start()],
        }
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    /// Closed edges discovered so far
    pub fn known_obstacles(&self) -> &ObstacleSet {
        &self.known
    }

    /// Cells visited so far, in order
    pub fn trail(&self) -> &[Cell] {
        &self.trail
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.events.len()
    }

    /// Apply events up to and including the next move.
    /// Returns false once the log is exhausted.
    pub fn advance(&mut self) -> bool {
        while let Some(event) = self.events.get(self.cursor) {
            self.cursor += 1;
            match *event {
                Event::Probe { from, direction, open } => {
                    if open {
                        continue;
                    }
                    if let Some(neighbor) = self.grid.neighbor(from, direction) {
                        self.known.insert(Obstacle::new(from, neighbor));
                    }
                }
                Event::Move { to, .. } => {
                    self.position = to;
                    self.trail.push(to);
                    return true;
                }
            }
        }
        false
    }

    /// Jump to the end of the log
    pub fn finish(&mut self) {
        while self.advance() {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::SimulatedMaze;
    use crate::solver::{Solver, Strategy};

    #[test]
    fn replays_moves_and_discovered_walls() {
        let grid = Grid::default();
        let walls: ObstacleSet = [Obstacle::new(0, 1)].into_iter().collect();
        let mut solver = Solver::with_grid(grid, SimulatedMaze::new(grid, walls));
        assert!(solver.solve(Strategy::ShortestPathCorrection));

        let log = solver.into_sensor().into_log();
        let mut replay = Replay::new(grid, log.events());
        replay.finish();

        assert!(replay.is_finished());
        assert_eq!(replay.position(), grid.exit());
        assert!(replay.known_obstacles().blocks(0, 1));
        assert_eq!(replay.trail(), log.trail().as_slice());
    }
}
