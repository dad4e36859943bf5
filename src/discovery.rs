use crate::grid::Cell;

/// Per-pass record of visited cells, indexed directly by cell.
#[derive(Debug, Clone)]
pub struct Discovery {
    visited: Vec<bool>,
}

impl Discovery {
    pub fn new(cell_count: usize) -> Self {
        Discovery {
            visited: vec![false; cell_count],
        }
    }

    pub fn clear(&mut self) {
        self.visited.fill(false);
    }

    /// Mark a cell visited. Returns false if it already was.
    pub fn discover(&mut self, cell: Cell) -> bool {
        !std::mem::replace(&mut self.visited[cell], true)
    }

    pub fn is_discovered(&self, cell: Cell) -> bool {
        self.visited.get(cell).copied().unwrap_or(false)
    }

    pub fn count(&self) -> usize {
        self.visited.iter().filter(|&&v| v).count()
    }
}
