pub mod config;
pub mod console;
pub mod direction;
pub mod discovery;
pub mod error;
pub mod grid;
pub mod layout;
pub mod move_log;
pub mod obstacle;
pub mod pathfinding;
pub mod render;
pub mod replay;
pub mod sensing;
pub mod simulation;
pub mod solver;

pub use direction::Direction;
pub use error::{Error, LayoutError, Result};
pub use grid::{Cell, Grid, HEIGHT, WIDTH};
pub use obstacle::{Obstacle, ObstacleSet};
pub use pathfinding::{shortest_path, PathStack};
pub use sensing::{FnSensor, Sensor};
pub use simulation::SimulatedMaze;
pub use solver::{SolveStats, Solver, Strategy};
