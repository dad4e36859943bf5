use crate::grid::Cell;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A known-closed edge between two adjacent cells.
///
/// Always stored in canonical form (`first <= second`), so equality is
/// unordered-pair equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(Cell, Cell)", into = "(Cell, Cell)")]
pub struct Obstacle {
    pub first: Cell,
    pub second: Cell,
}

impl Obstacle {
    pub fn new(a: Cell, b: Cell) -> Self {
        if a <= b {
            Obstacle { first: a, second: b }
        } else {
            Obstacle { first: b, second: a }
        }
    }
}

impl From<(Cell, Cell)> for Obstacle {
    fn from((a, b): (Cell, Cell)) -> Self {
        Obstacle::new(a, b)
    }
}

impl From<Obstacle> for (Cell, Cell) {
    fn from(obstacle: Obstacle) -> Self {
        (obstacle.first, obstacle.second)
    }
}

/// Set of known-closed edges. Obstacles are never removed once observed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObstacleSet {
    edges: HashSet<Obstacle>,
}

impl ObstacleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an obstacle. Returns false if it was already known.
    pub fn insert(&mut self, obstacle: Obstacle) -> bool {
        self.edges.insert(obstacle)
    }

    pub fn contains(&self, obstacle: &Obstacle) -> bool {
        self.edges.contains(obstacle)
    }

    /// Whether the edge between `a` and `b` is known to be closed
    pub fn blocks(&self, a: Cell, b: Cell) -> bool {
        self.edges.contains(&Obstacle::new(a, b))
    }

    /// Remove an obstacle. Only layout editing uses this; solvers never forget an edge.
    pub fn remove(&mut self, obstacle: &Obstacle) -> bool {
        self.edges.remove(obstacle)
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.edges.iter()
    }

    /// Obstacles ordered by (first, second), for stable output
    pub fn sorted(&self) -> Vec<Obstacle> {
        let mut obstacles: Vec<Obstacle> = self.edges.iter().copied().collect();
        obstacles.sort_by_key(|o| (o.first, o.second));
        obstacles
    }
}

impl FromIterator<Obstacle> for ObstacleSet {
    fn from_iter<I: IntoIterator<Item = Obstacle>>(iter: I) -> Self {
        ObstacleSet {
            edges: iter.into_iter().collect(),
        }
    }
}

impl Extend<Obstacle> for ObstacleSet {
    fn extend<I: IntoIterator<Item = Obstacle>>(&mut self, iter: I) {
        self.edges.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_form_orders_the_pair() {
        let a = Obstacle::new(7, 3);
        let b = Obstacle::new(3, 7);
        assert_eq!(a, b);
        assert_eq!((a.first, a.second), (3, 7));
    }

    #[test]
    fn set_deduplicates_reversed_pairs() {
        let mut set = ObstacleSet::new();
        assert!(set.insert(Obstacle::new(0, 1)));
        assert!(!set.insert(Obstacle::new(1, 0)));
        assert_eq!(set.len(), 1);
        assert!(set.blocks(1, 0));
        assert!(!set.blocks(0, 5));
    }

    #[test]
    fn serializes_as_a_pair() {
        let json = serde_json::to_string(&Obstacle::new(9, 4)).unwrap();
        assert_eq!(json, "[4,9]");
        let back: Obstacle = serde_json::from_str("[9,4]").unwrap();
        assert_eq!(back, Obstacle::new(4, 9));
    }
}
