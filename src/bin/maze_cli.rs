//! Console runner for the maze solver
//!
//! Solves the configured layout in the terminal, redrawing the maze in place
//! after every move. With `--interactive` the obstacles are read from stdin
//! as whitespace-separated cell pairs, ending with `-1`.

use maze_runner::config::Config;
use maze_runner::console::ConsoleMaze;
use maze_runner::layout;
use maze_runner::{Grid, ObstacleSet, SimulatedMaze, Solver, Strategy};
use std::io::{self, BufRead};
use std::process;
use std::time::Duration;

/// Read obstacles from stdin until `-1` or end of input.
///
/// Input is a token stream, so a pair may span lines.
fn read_obstacles(grid: &Grid) -> ObstacleSet {
    println!("Enter the obstacles (two numbers separated by a space)");
    println!("To stop listing the obstacles, write -1");
    println!();
    println!("Obstacles:");

    let tokens = io::stdin()
        .lock()
        .lines()
        .map_while(Result::ok)
        .flat_map(|line| {
            line.split_whitespace()
                .map(str::to_string)
                .collect::<Vec<_>>()
        });

    let mut walls = ObstacleSet::new();
    for entry in layout::obstacle_entries(grid, tokens) {
        match entry {
            Ok(obstacle) => {
                if !walls.insert(obstacle) {
                    println!("Repeating obstacle.");
                }
            }
            Err(e) => println!("{}", e),
        }
    }
    println!();
    walls
}

fn main() {
    let config = Config::load();
    config.logging.init_tracing();

    let mut strategy = config.solver.strategy;
    let mut layout_path = config.maze.layout_path.clone();
    let mut interactive = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--strategy" => match args.next().as_deref().and_then(Strategy::from_name) {
                Some(s) => strategy = s,
                None => {
                    eprintln!("--strategy expects backtracking or shortest-path");
                    process::exit(2);
                }
            },
            "--layout" => match args.next() {
                Some(path) => layout_path = path,
                None => {
                    eprintln!("--layout expects a path");
                    process::exit(2);
                }
            },
            "--interactive" => interactive = true,
            other => {
                eprintln!("Usage: maze_cli [--strategy NAME] [--layout PATH] [--interactive]");
                eprintln!("Unknown argument: {}", other);
                process::exit(2);
            }
        }
    }

    let grid = config.maze.grid();
    let walls = if interactive {
        read_obstacles(&grid)
    } else {
        match layout::load_walls(&grid, &layout_path) {
            Ok(walls) => walls,
            Err(e) => {
                eprintln!("Failed to load {}: {}", layout_path, e);
                process::exit(1);
            }
        }
    };

    let mut sensor = ConsoleMaze::new(
        SimulatedMaze::new(grid, walls),
        Duration::from_millis(config.visual.step_delay_ms),
    );
    sensor.draw();

    let mut solver = Solver::with_grid(grid, sensor);
    let solved = solver.solve(strategy);
    let stats = solver.stats();

    println!(
        "The maze {} solved.",
        if solved { "is" } else { "cannot be" }
    );
    println!(
        "Strategy: {}, moves: {}, probes: {}, replans: {}",
        strategy, stats.moves, stats.probes, stats.replans
    );

    let log = solver.into_sensor().into_maze().into_log();
    if config.logging.enable_move_log {
        match log.save_to_file(&config.logging.move_log_path) {
            Ok(()) => println!("Move log written to {}", config.logging.move_log_path),
            Err(e) => eprintln!("Failed to write move log: {}", e),
        }
    }
    println!("{}", log.summary());
}
