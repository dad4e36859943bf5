use crate::grid::{Cell, Grid};
use crate::obstacle::ObstacleSet;

/// Draw the maze as text.
///
/// Row 0 is printed at the bottom. Marked cells are drawn as `O`, all other
/// cells as `*`; closed edges are `|` between columns and `-` between rows.
pub fn render_maze(grid: &Grid, walls: &ObstacleSet, marked: &[Cell]) -> String {
    let border = format!("{}\n", "-".repeat(grid.cols * 2 + 1));
    let mut screen = border.clone();

    for y in (0..grid.rows).rev() {
        screen.push('|');
        for x in 0..grid.cols {
            let cell = grid.get_id(x, y);
            screen.push(if marked.contains(&cell) { 'O' } else { '*' });

            if x + 1 != grid.cols {
                screen.push(if walls.blocks(cell, cell + 1) { '|' } else { ' ' });
            }
        }
        screen.push_str("|\n");

        if y != 0 {
            screen.push('|');
            for x in 0..grid.cols {
                let cell = grid.get_id(x, y);
                screen.push(if walls.blocks(cell, cell - grid.cols) { '-' } else { ' ' });
                if x + 1 != grid.cols {
                    screen.push(' ');
                }
            }
            screen.push_str("|\n");
        }
    }

    screen.push_str(&border);
    screen
}

/// Number of text lines produced by [`render_maze`]
pub fn rendered_height(grid: &Grid) -> usize {
    grid.rows * 2 + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::obstacle::Obstacle;

    #[test]
    fn draws_walls_between_cells() {
        let grid = Grid::new(2, 2);
        let walls: ObstacleSet = [Obstacle::new(0, 1), Obstacle::new(1, 3)].into_iter().collect();
        let screen = render_maze(&grid, &walls, &[0]);

        let expected = "-----\n\
                        |* *|\n\
                        |  -|\n\
                        |O|*|\n\
                        -----\n";
        assert_eq!(screen, expected);
        assert_eq!(screen.lines().count(), rendered_height(&grid));
    }
}
