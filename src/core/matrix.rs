//! Vector-backed cost matrix with 1-based node ids.

/// Sentinel weight meaning "no direct edge between the two nodes".
pub const NO_EDGE: u32 = u32::MAX;

/// N×N adjacency matrix of edge weights.
///
/// Sized exactly to the built node count; every cell starts at [`NO_EDGE`].
/// Node ids are 1-based, matching the input format. Accessors are
/// bounds-checked: callers validate ids at the operation boundary, and an
/// out-of-range id here is a programming error, not a recoverable one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostMatrix {
    size: usize,
    cells: Vec<u32>,
}

impl CostMatrix {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![NO_EDGE; size * size],
        }
    }

    /// Number of nodes the matrix was sized for.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `id` is a valid 1-based node id for this matrix.
    pub fn contains(&self, id: usize) -> bool {
        (1..=self.size).contains(&id)
    }

    pub fn cost(&self, from: usize, to: usize) -> u32 {
        self.cells[self.index(from, to)]
    }

    pub fn set(&mut self, from: usize, to: usize, weight: u32) {
        let i = self.index(from, to);
        self.cells[i] = weight;
    }

    pub fn clear(&mut self, from: usize, to: usize) {
        self.set(from, to, NO_EDGE);
    }

    fn index(&self, from: usize, to: usize) -> usize {
        debug_assert!(self.contains(from) && self.contains(to));
        (from - 1) * self.size + (to - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_matrix_has_no_edges() {
        let m = CostMatrix::new(3);
        for from in 1..=3 {
            for to in 1..=3 {
                assert_eq!(m.cost(from, to), NO_EDGE);
            }
        }
    }

    #[test]
    fn test_set_and_clear() {
        let mut m = CostMatrix::new(3);
        m.set(1, 2, 5);
        assert_eq!(m.cost(1, 2), 5);
        // Directed: the reverse cell is untouched.
        assert_eq!(m.cost(2, 1), NO_EDGE);

        m.clear(1, 2);
        assert_eq!(m.cost(1, 2), NO_EDGE);
    }

    #[test]
    fn test_contains() {
        let m = CostMatrix::new(3);
        assert!(!m.contains(0));
        assert!(m.contains(1));
        assert!(m.contains(3));
        assert!(!m.contains(4));
    }
}
