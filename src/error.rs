use crate::grid::Cell;
use thiserror::Error;

/// Rejected obstacle entry in a layout
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("line {line}: invalid obstacle ({cell} and {cell} are the same point)")]
    SamePoint { line: usize, cell: Cell },

    #[error("line {line}: invalid obstacle (point {cell} does not exist in a {cols}x{rows} maze)")]
    OutOfRange {
        line: usize,
        cell: Cell,
        cols: usize,
        rows: usize,
    },

    #[error("line {line}: invalid obstacle ({a} and {b} are not adjacent)")]
    NotAdjacent { line: usize, a: Cell, b: Cell },

    #[error("line {line}: expected two cell indices, found {content:?}")]
    Parse { line: usize, content: String },

    #[error("layout has no cells ({cols}x{rows})")]
    EmptyGrid { cols: usize, rows: usize },

    #[error("layout of {cols}x{rows} cells is too large")]
    TooLarge { cols: usize, rows: usize },

    #[error("layout is for a {found_cols}x{found_rows} maze, expected {cols}x{rows}")]
    DimensionMismatch {
        cols: usize,
        rows: usize,
        found_cols: usize,
        found_rows: usize,
    },
}

/// Errors from the I/O surface around the solver
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Layout(#[from] LayoutError),
}

pub type Result<T> = std::result::Result<T, Error>;
