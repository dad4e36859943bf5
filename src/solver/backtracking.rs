use super::Solver;
use crate::direction::Direction;
use crate::grid::Cell;
use crate::sensing::Sensor;
use tracing::debug;

impl<S: Sensor> Solver<S> {
    /// Depth-first exploration with physical backtracking.
    ///
    /// `memory` holds cells still worth trying; `retrace` holds the cells the
    /// agent came through, so it can walk back to an earlier branch.
    pub(super) fn solve_backtracking(&mut self) -> bool {
        let exit = self.grid.exit();
        if self.current == exit {
            return true;
        }

        self.discovered.clear();
        let mut memory: Vec<Cell> = vec![self.current];
        let mut retrace: Vec<Cell> = Vec::new();

        while let Some(target) = memory.pop() {
            if target != self.current {
                if !self.is_accessible(target) {
                    self.backtrack_towards(target, &mut retrace);
                }

                retrace.push(self.current);
                self.commit_move(target);

                if target == exit {
                    return true;
                }
            }

            self.discovered.discover(target);

            // Pushed Down..Right so that Right is tried first
            for direction in Direction::REVERSED {
                let Some(neighbor) = self.grid.neighbor(self.current, direction) else {
                    continue;
                };
                if self.discovered.is_discovered(neighbor) || memory.contains(&neighbor) {
                    continue;
                }
                if self.probe(direction) {
                    memory.push(neighbor);
                }
            }
        }

        debug!(discovered = self.discovered.count(), "work-list exhausted");
        false
    }

    /// Walk back along `retrace` until `target` is one open edge away.
    fn backtrack_towards(&mut self, target: Cell, retrace: &mut Vec<Cell>) {
        debug!(from = self.current, target, depth = retrace.len(), "backtracking");

        while let Some(parent) = retrace.pop() {
            self.commit_move(parent);
            if self.is_accessible(target) {
                return;
            }
        }

        // Every candidate was pushed from a cell that is still on the retrace stack
        panic!(
            "backtracking exhausted the retrace stack without reaching cell {}",
            target
        );
    }
}
