//! Per-source shortest path result table.

/// Sentinel distance meaning "no path exists from the source".
pub const UNREACHABLE: u32 = u32::MAX;

/// Solver state for one `(source, target)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathEntry {
    /// Finalized by the relaxation run for this entry's source.
    pub visited: bool,
    /// Shortest distance from the source known so far.
    pub dist: u32,
    /// Previous node on the current shortest path, if any.
    pub prev: Option<usize>,
}

impl Default for PathEntry {
    fn default() -> Self {
        Self {
            visited: false,
            dist: UNREACHABLE,
            prev: None,
        }
    }
}

/// N×N table of [`PathEntry`] values, one full row set per source node.
///
/// Recomputed in bulk by every solve; never patched incrementally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTable {
    size: usize,
    entries: Vec<PathEntry>,
}

impl PathTable {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            entries: vec![PathEntry::default(); size * size],
        }
    }

    /// Discard all prior results. Correctness of re-solving depends on
    /// this running before every relaxation pass.
    pub fn reset(&mut self) {
        self.entries.fill(PathEntry::default());
    }

    pub fn entry(&self, source: usize, to: usize) -> &PathEntry {
        &self.entries[self.index(source, to)]
    }

    pub fn entry_mut(&mut self, source: usize, to: usize) -> &mut PathEntry {
        let i = self.index(source, to);
        &mut self.entries[i]
    }

    /// Finite distance from `source` to `to`, or `None` if unreachable.
    pub fn distance(&self, source: usize, to: usize) -> Option<u32> {
        let d = self.entry(source, to).dist;
        (d != UNREACHABLE).then_some(d)
    }

    fn index(&self, source: usize, to: usize) -> usize {
        debug_assert!((1..=self.size).contains(&source) && (1..=self.size).contains(&to));
        (source - 1) * self.size + (to - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_entry_is_unreachable() {
        let t = PathTable::new(2);
        let e = t.entry(1, 2);
        assert!(!e.visited);
        assert_eq!(e.dist, UNREACHABLE);
        assert_eq!(e.prev, None);
        assert_eq!(t.distance(1, 2), None);
    }

    #[test]
    fn test_reset_clears_entries() {
        let mut t = PathTable::new(2);
        {
            let e = t.entry_mut(1, 2);
            e.visited = true;
            e.dist = 7;
            e.prev = Some(1);
        }
        t.reset();
        assert_eq!(*t.entry(1, 2), PathEntry::default());
    }

    #[test]
    fn test_distance_finite() {
        let mut t = PathTable::new(2);
        t.entry_mut(1, 2).dist = 7;
        assert_eq!(t.distance(1, 2), Some(7));
    }
}
