use super::Solver;
use crate::direction::Direction;
use crate::obstacle::{Obstacle, ObstacleSet};
use crate::sensing::Sensor;
use tracing::debug;

impl<S: Sensor> Solver<S> {
    /// Follow the shortest known path, replanning when it turns out blocked.
    ///
    /// Before every step all unexplored edges around the agent are probed, so
    /// each replan is triggered by at least one newly recorded obstacle.
    pub(super) fn solve_correction(&mut self) -> bool {
        let exit = self.grid.exit();
        let mut obstacles = ObstacleSet::new();
        let mut previous = self.current;

        while let Some(mut path) = self.shortest_path(self.current, &obstacles) {
            self.stats.replans += 1;
            debug!(
                from = self.current,
                length = path.len(),
                known_obstacles = obstacles.len(),
                "planned path"
            );

            loop {
                if self.current == exit {
                    return true;
                }

                let next = path.peek();
                let mut blocked = false;

                for direction in Direction::CANDIDATES {
                    let Some(neighbor) = self.grid.neighbor(self.current, direction) else {
                        continue;
                    };
                    if neighbor == previous || obstacles.blocks(self.current, neighbor) {
                        continue;
                    }

                    if !self.probe(direction) {
                        obstacles.insert(Obstacle::new(self.current, neighbor));
                        self.stats.obstacles = obstacles.len();

                        if Some(neighbor) == next {
                            blocked = true;
                        }
                    }
                }

                if blocked {
                    debug!(at = self.current, next = ?next, "planned step is blocked");
                    path.pop();
                    break;
                }

                let Some(step) = path.pop() else {
                    break;
                };
                previous = self.current;
                self.commit_move(step);
            }
        }

        false
    }
}
