use crate::error::{LayoutError, Result};
use crate::grid::{Cell, Grid};
use crate::obstacle::{Obstacle, ObstacleSet};
use serde::{Deserialize, Serialize};
use std::fs;
use tracing::{info, warn};

/// Wall layout of a maze, as stored on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub cols: usize,
    pub rows: usize,
    /// Closed edges, as cell index pairs
    pub obstacles: Vec<Obstacle>,
}

impl Layout {
    pub fn new(grid: &Grid, walls: &ObstacleSet) -> Self {
        Layout {
            cols: grid.cols,
            rows: grid.rows,
            obstacles: walls.sorted(),
        }
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.cols, self.rows)
    }

    /// Validated wall set. Duplicate entries collapse into one.
    pub fn walls(&self) -> std::result::Result<ObstacleSet, LayoutError> {
        if self.cols == 0 || self.rows == 0 {
            return Err(LayoutError::EmptyGrid {
                cols: self.cols,
                rows: self.rows,
            });
        }
        if self.cols.checked_mul(self.rows).is_none() {
            return Err(LayoutError::TooLarge {
                cols: self.cols,
                rows: self.rows,
            });
        }

        let grid = self.grid();
        let mut walls = ObstacleSet::new();
        for (i, obstacle) in self.obstacles.iter().enumerate() {
            let obstacle = validate(&grid, i + 1, obstacle.first, obstacle.second)?;
            walls.insert(obstacle);
        }
        Ok(walls)
    }

    /// Save to JSON file
    pub fn save_to_file(&self, path: &str) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load from JSON file
    pub fn load_from_file(path: &str) -> Result<Self> {
        let layout = Self::read_unchecked(path)?;
        layout.walls()?;
        Ok(layout)
    }

    fn read_unchecked(path: &str) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

/// Check a single obstacle entry against the grid.
///
/// `line` is only used for error reporting.
pub fn validate(
    grid: &Grid,
    line: usize,
    a: Cell,
    b: Cell,
) -> std::result::Result<Obstacle, LayoutError> {
    if a == b {
        return Err(LayoutError::SamePoint { line, cell: a });
    }

    for cell in [a, b] {
        if !grid.contains(cell) {
            return Err(LayoutError::OutOfRange {
                line,
                cell,
                cols: grid.cols,
                rows: grid.rows,
            });
        }
    }

    if !grid.is_adjacent(a, b) {
        return Err(LayoutError::NotAdjacent { line, a, b });
    }

    Ok(Obstacle::new(a, b))
}

/// Parse the text obstacle format.
///
/// One obstacle per line as two cell indices separated by whitespace.
/// Blank lines and `#` comments are ignored; a line holding `-1` ends the
/// list early. Repeated obstacles are reported and skipped.
pub fn parse_obstacles(grid: &Grid, text: &str) -> std::result::Result<ObstacleSet, LayoutError> {
    let mut walls = ObstacleSet::new();

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let content = raw.split('#').next().unwrap_or("").trim();
        if content.is_empty() {
            continue;
        }

        let fields: Vec<&str> = content.split_whitespace().collect();
        if fields.first() == Some(&"-1") {
            break;
        }

        let parse_error = || LayoutError::Parse {
            line,
            content: content.to_string(),
        };
        if fields.len() != 2 {
            return Err(parse_error());
        }
        let a: Cell = fields[0].parse().map_err(|_| parse_error())?;
        let b: Cell = fields[1].parse().map_err(|_| parse_error())?;

        let obstacle = validate(grid, line, a, b)?;
        if !walls.insert(obstacle) {
            warn!(line, first = obstacle.first, second = obstacle.second, "repeating obstacle skipped");
        }
    }

    Ok(walls)
}

/// Obstacle entries read from a whitespace-separated token stream.
///
/// Built by [`obstacle_entries`]. Each entry is two consecutive tokens,
/// regardless of line breaks; `-1` in either position ends the stream.
pub struct ObstacleEntries<'g, I> {
    grid: &'g Grid,
    tokens: I,
    entry: usize,
    done: bool,
}

/// Read obstacles the way they are typed at the interactive prompt.
///
/// Invalid entries are yielded as errors and reading continues with the
/// next pair. Errors carry the entry number in place of a line number.
pub fn obstacle_entries<I, S>(grid: &Grid, tokens: I) -> ObstacleEntries<'_, I::IntoIter>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ObstacleEntries {
        grid,
        tokens: tokens.into_iter(),
        entry: 0,
        done: false,
    }
}

impl<I, S> ObstacleEntries<'_, I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    fn next_token(&mut self) -> Option<S> {
        match self.tokens.next() {
            Some(token) if token.as_ref() != "-1" => Some(token),
            _ => {
                self.done = true;
                None
            }
        }
    }
}

impl<I, S> Iterator for ObstacleEntries<'_, I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = std::result::Result<Obstacle, LayoutError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        // Second token is read only after the first did not end input
        let first = self.next_token()?;
        let second = self.next_token()?;
        self.entry += 1;

        let (a, b) = (first.as_ref(), second.as_ref());
        let parsed = match (a.parse::<Cell>(), b.parse::<Cell>()) {
            (Ok(a), Ok(b)) => validate(self.grid, self.entry, a, b),
            _ => Err(LayoutError::Parse {
                line: self.entry,
                content: format!("{} {}", a, b),
            }),
        };
        Some(parsed)
    }
}

/// Load walls from a file, picking the format by extension (`.json` or text).
///
/// A missing file yields an open maze.
pub fn load_walls(grid: &Grid, path: &str) -> Result<ObstacleSet> {
    if path.ends_with(".json") {
        let layout = Layout::read_unchecked(path)?;
        if (layout.cols, layout.rows) != (grid.cols, grid.rows) {
            return Err(LayoutError::DimensionMismatch {
                cols: grid.cols,
                rows: grid.rows,
                found_cols: layout.cols,
                found_rows: layout.rows,
            }
            .into());
        }
        return Ok(layout.walls()?);
    }

    match fs::read_to_string(path) {
        Ok(text) => {
            let walls = parse_obstacles(grid, &text)?;
            info!(path, obstacles = walls.len(), "loaded maze layout");
            Ok(walls)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            info!(path, "no layout file found, using an open maze");
            Ok(ObstacleSet::new())
        }
        Err(e) => Err(e.into()),
    }
}

/// Serialize walls back into the text format
pub fn format_obstacles(walls: &ObstacleSet) -> String {
    walls
        .sorted()
        .iter()
        .map(|o| format!("{} {}\n", o.first, o.second))
        .collect()
}
