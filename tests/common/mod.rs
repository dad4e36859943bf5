#![allow(dead_code)]

use maze_runner::{Cell, Grid, Obstacle, ObstacleSet, SimulatedMaze, SolveStats, Solver, Strategy};
use std::collections::VecDeque;

/// Build a wall set from cell index pairs
pub fn walls_from(pairs: &[(Cell, Cell)]) -> ObstacleSet {
    pairs.iter().map(|&(a, b)| Obstacle::new(a, b)).collect()
}

/// Every edge of the grid
pub fn all_edges(grid: &Grid) -> Vec<Obstacle> {
    let mut edges = Vec::new();
    for y in 0..grid.rows {
        for x in 0..grid.cols {
            let cell = grid.get_id(x, y);
            if x + 1 < grid.cols {
                edges.push(Obstacle::new(cell, cell + 1));
            }
            if y + 1 < grid.rows {
                edges.push(Obstacle::new(cell, cell + grid.cols));
            }
        }
    }
    edges
}

/// Reference distance from start to exit, computed on (x, y) coordinates
/// without the crate's topology helpers
pub fn reference_distance(grid: &Grid, walls: &ObstacleSet) -> Option<usize> {
    let start = (0usize, 0usize);
    let exit = (grid.cols - 1, grid.rows - 1);
    let id = |(x, y): (usize, usize)| x + y * grid.cols;

    let mut distance = vec![None; grid.cell_count()];
    let mut queue = VecDeque::new();
    distance[id(start)] = Some(0);
    queue.push_back(start);

    while let Some((x, y)) = queue.pop_front() {
        let d = distance[id((x, y))].unwrap();
        if (x, y) == exit {
            return Some(d);
        }

        let mut next = Vec::new();
        if x + 1 < grid.cols {
            next.push((x + 1, y));
        }
        if x > 0 {
            next.push((x - 1, y));
        }
        if y + 1 < grid.rows {
            next.push((x, y + 1));
        }
        if y > 0 {
            next.push((x, y - 1));
        }

        for n in next {
            if distance[id(n)].is_some() || walls.contains(&Obstacle::new(id((x, y)), id(n))) {
                continue;
            }
            distance[id(n)] = Some(d + 1);
            queue.push_back(n);
        }
    }

    None
}

/// Solve a simulated maze and return (solved, stats, final position)
pub fn run(grid: Grid, walls: &ObstacleSet, strategy: Strategy) -> (bool, SolveStats, Cell) {
    let maze = SimulatedMaze::new(grid, walls.clone());
    let mut solver = Solver::with_grid(grid, maze);
    let solved = solver.solve(strategy);
    let maze = solver.sensor();
    assert_eq!(maze.position(), solver.current(), "sensor and solver disagree on position");
    (solved, solver.stats(), solver.current())
}
