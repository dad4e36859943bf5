mod common;

use common::{all_edges, reference_distance, walls_from};
use maze_runner::pathfinding::format_route;
use maze_runner::{shortest_path, Grid, ObstacleSet, PathStack};

#[test]
fn test_open_grid_path() {
    let grid = Grid::default();
    let mut path = shortest_path(&grid, 0, 24, &ObstacleSet::new()).unwrap();

    assert_eq!(path.len(), 8);
    let route = path.route();
    assert_eq!(*route.last().unwrap(), 24);
    assert!(!route.contains(&0), "source must not be part of the path");

    // Consumed next step first, each step adjacent to the last
    let mut at = 0;
    while let Some(next) = path.pop() {
        assert!(grid.is_adjacent(at, next), "{} -> {}", at, next);
        at = next;
    }
    assert_eq!(at, 24);
}

#[test]
fn test_path_from_exit_is_empty() {
    let grid = Grid::default();
    let path = shortest_path(&grid, 24, 24, &ObstacleSet::new()).unwrap();
    assert!(path.is_empty());
    assert_eq!(path.peek(), None);
}

#[test]
fn test_out_of_range_endpoints() {
    let grid = Grid::default();
    assert_eq!(shortest_path(&grid, 25, 24, &ObstacleSet::new()), None);
    assert_eq!(shortest_path(&grid, 0, 99, &ObstacleSet::new()), None);
}

#[test]
fn test_length_matches_graph_distance() {
    let grid = Grid::default();
    let edges = all_edges(&grid);

    for (i, first) in edges.iter().enumerate() {
        for second in &edges[i + 1..] {
            let walls: ObstacleSet = [*first, *second].into_iter().collect();
            let planned = shortest_path(&grid, 0, 24, &walls).map(|p| p.len());
            assert_eq!(planned, reference_distance(&grid, &walls), "walls {:?}", walls.sorted());
        }
    }
}

#[test]
fn test_path_never_crosses_obstacles() {
    let grid = Grid::default();
    let walls = walls_from(&[(1, 2), (6, 7), (11, 12), (16, 17), (3, 8), (8, 13)]);

    let path = shortest_path(&grid, 0, 24, &walls).unwrap();
    let mut route = vec![0];
    route.extend(path.route());
    for step in route.windows(2) {
        assert!(!walls.blocks(step[0], step[1]), "crossed {:?}", step);
    }
}

#[test]
fn test_planning_is_idempotent() {
    let grid = Grid::default();
    let reachable = walls_from(&[(0, 1), (5, 10), (6, 11)]);
    assert_eq!(
        shortest_path(&grid, 0, 24, &reachable),
        shortest_path(&grid, 0, 24, &reachable)
    );

    let unreachable = walls_from(&[(23, 24), (19, 24)]);
    for _ in 0..3 {
        assert_eq!(shortest_path(&grid, 0, 24, &unreachable), None);
    }
}

#[test]
fn test_path_stack_order() {
    let mut path = PathStack::from_route(&[1, 2, 7]);
    assert_eq!(path.peek(), Some(1));
    assert_eq!(path.route(), vec![1, 2, 7]);
    assert_eq!(path.pop(), Some(1));
    assert_eq!(path.len(), 2);
    assert_eq!(format_route(&path.route()), "2 -> 7");
    assert_eq!(format_route(&[]), "No path");
}
