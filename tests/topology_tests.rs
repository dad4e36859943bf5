use maze_runner::{Direction, Grid};

#[test]
fn test_neighbor_is_reversible() {
    let grid = Grid::default();

    for cell in 0..grid.cell_count() {
        for direction in Direction::CANDIDATES {
            if let Some(neighbor) = grid.neighbor(cell, direction) {
                assert_eq!(
                    grid.neighbor(neighbor, direction.opposite()),
                    Some(cell),
                    "cell {} {:?} -> {}",
                    cell,
                    direction,
                    neighbor
                );
            }
        }
    }
}

#[test]
fn test_boundaries_have_no_neighbors() {
    let grid = Grid::default();

    for cell in 0..grid.cell_count() {
        let (x, y) = grid.get_coords(cell);
        assert_eq!(grid.neighbor(cell, Direction::Left).is_none(), x == 0, "left of {}", cell);
        assert_eq!(grid.neighbor(cell, Direction::Right).is_none(), x == grid.cols - 1, "right of {}", cell);
        assert_eq!(grid.neighbor(cell, Direction::Down).is_none(), y == 0, "down of {}", cell);
        assert_eq!(grid.neighbor(cell, Direction::Up).is_none(), y == grid.rows - 1, "up of {}", cell);
        assert_eq!(grid.neighbor(cell, Direction::Invalid), None);
    }
}

#[test]
fn test_neighbor_values() {
    let grid = Grid::default();

    assert_eq!(grid.neighbor(0, Direction::Right), Some(1));
    assert_eq!(grid.neighbor(0, Direction::Up), Some(5));
    assert_eq!(grid.neighbor(4, Direction::Right), None);
    assert_eq!(grid.neighbor(12, Direction::Down), Some(7));
    assert_eq!(grid.neighbor(12, Direction::Left), Some(11));
    assert_eq!(grid.neighbor(24, Direction::Up), None);
    assert_eq!(grid.neighbor(25, Direction::Left), None);
}

#[test]
fn test_direction_between_inverts_neighbor() {
    let grid = Grid::default();

    for cell in 0..grid.cell_count() {
        for direction in Direction::CANDIDATES {
            if let Some(neighbor) = grid.neighbor(cell, direction) {
                assert_eq!(grid.direction_between(cell, neighbor), direction);
            }
        }
    }
}

#[test]
fn test_direction_between_rejects_row_wraps() {
    let grid = Grid::default();

    // 4 and 5 differ by one but sit on different rows
    assert_eq!(grid.direction_between(4, 5), Direction::Invalid);
    assert_eq!(grid.direction_between(5, 4), Direction::Invalid);
    assert_eq!(grid.direction_between(9, 10), Direction::Invalid);

    assert_eq!(grid.direction_between(3, 4), Direction::Right);
    assert_eq!(grid.direction_between(4, 3), Direction::Left);
    assert_eq!(grid.direction_between(4, 9), Direction::Up);
    assert_eq!(grid.direction_between(9, 4), Direction::Down);
}

#[test]
fn test_direction_between_non_adjacent() {
    let grid = Grid::default();

    assert_eq!(grid.direction_between(0, 0), Direction::Invalid);
    assert_eq!(grid.direction_between(0, 2), Direction::Invalid);
    assert_eq!(grid.direction_between(0, 6), Direction::Invalid);
    assert_eq!(grid.direction_between(20, 25), Direction::Invalid);
    assert_eq!(grid.direction_to(0, None), Direction::Invalid);
    assert_eq!(grid.direction_to(0, Some(1)), Direction::Right);
}

#[test]
fn test_non_square_grid() {
    let grid = Grid::new(3, 2);

    assert_eq!(grid.exit(), 5);
    assert_eq!(grid.neighbor(2, Direction::Right), None);
    assert_eq!(grid.neighbor(2, Direction::Up), Some(5));
    assert_eq!(grid.neighbor(3, Direction::Up), None);
    assert_eq!(grid.direction_between(2, 3), Direction::Invalid);
    assert_eq!(grid.get_coords(4), (1, 1));
    assert_eq!(grid.get_id(1, 1), 4);
}

#[test]
fn test_enumeration_orders() {
    assert_eq!(
        Direction::CANDIDATES,
        [Direction::Right, Direction::Up, Direction::Left, Direction::Down]
    );
    let mut reversed = Direction::CANDIDATES;
    reversed.reverse();
    assert_eq!(Direction::REVERSED, reversed);
    assert!(Direction::CANDIDATES.iter().all(|d| d.is_valid()));
    assert!(!Direction::Invalid.is_valid());
}
