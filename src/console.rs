use crate::direction::Direction;
use crate::render::{render_maze, rendered_height};
use crate::sensing::Sensor;
use crate::simulation::SimulatedMaze;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;
use tracing::warn;

/// Sensor that redraws a simulated maze in place after each move.
///
/// Each frame after the first moves the cursor back over the previous one.
pub struct ConsoleMaze<W = io::Stdout> {
    maze: SimulatedMaze,
    delay: Duration,
    out: W,
}

impl ConsoleMaze {
    /// Draw to stdout, pausing `delay` before each new frame
    pub fn new(maze: SimulatedMaze, delay: Duration) -> Self {
        Self::with_writer(maze, delay, io::stdout())
    }
}

impl<W: Write> ConsoleMaze<W> {
    pub fn with_writer(maze: SimulatedMaze, delay: Duration, out: W) -> Self {
        ConsoleMaze { maze, delay, out }
    }

    pub fn maze(&self) -> &SimulatedMaze {
        &self.maze
    }

    pub fn into_maze(self) -> SimulatedMaze {
        self.maze
    }

    pub fn into_writer(self) -> W {
        self.out
    }

    /// Print the current frame below whatever is on screen
    pub fn draw(&mut self) {
        self.write_frame(false);
    }

    fn write_frame(&mut self, rewind: bool) {
        let mut frame = String::new();
        if rewind {
            frame.push_str(&format!("\x1b[{}A", rendered_height(self.maze.grid())));
        }
        frame.push_str(&render_maze(
            self.maze.grid(),
            self.maze.walls(),
            &[self.maze.position()],
        ));

        let written = self
            .out
            .write_all(frame.as_bytes())
            .and_then(|()| self.out.flush());
        if let Err(e) = written {
            warn!(error = %e, "failed to draw maze");
        }
    }
}

impl<W: Write> Sensor for ConsoleMaze<W> {
    fn probe(&mut self, direction: Direction) -> bool {
        self.maze.probe(direction)
    }

    fn step(&mut self, direction: Direction) {
        self.maze.step(direction);

        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        self.write_frame(true);
    }
}
