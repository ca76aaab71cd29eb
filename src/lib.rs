//! # Gridpath Library
//!
//! All-pairs shortest paths over small, dense, directed weighted graphs,
//! with incremental edge insertion/removal by full recomputation and
//! path/label reconstruction between any two nodes.
//!
//! The main type is [`DenseGraph`]: build it from the text input format,
//! solve, then query distances, paths, and formatted reports. Edge
//! mutations validate first, then mutate and re-solve, so a rejected
//! mutation leaves the graph untouched.
//!
//! A secondary component, [`ListGraph`], consumes the same input shape
//! into per-node adjacency lists and answers depth-first traversal
//! queries.
//!
//! ## Basic Usage
//!
//! ```rust
//! use std::io::Cursor;
//!
//! fn main() -> gridpath::Result<()> {
//!     let data = "3\nAurora\nBasalt\nCedar\n1 2 5\n2 3 3\n1 3 100\n0 0 0\n";
//!     let graph = gridpath::solve_from(&mut Cursor::new(data))?;
//!
//!     assert_eq!(graph.distance(1, 3)?, Some(8));
//!     assert_eq!(graph.path_ids(1, 3)?, vec![1, 2, 3]);
//!     println!("{}", graph.report_all());
//!     Ok(())
//! }
//! ```
//!
//! ## Incremental updates
//!
//! ```rust
//! use std::io::Cursor;
//!
//! fn main() -> gridpath::Result<()> {
//!     let data = "3\nAurora\nBasalt\nCedar\n1 2 5\n2 3 3\n1 3 100\n0 0 0\n";
//!     let mut graph = gridpath::solve_from(&mut Cursor::new(data))?;
//!
//!     graph.remove_edge(2, 3)?;
//!     assert_eq!(graph.distance(1, 3)?, Some(100));
//!
//!     graph.insert_edge(1, 3, 2)?;
//!     assert_eq!(graph.distance(1, 3)?, Some(2));
//!     Ok(())
//! }
//! ```

use std::io::BufRead;

// Re-export core types that users might need
pub use crate::core::{
    CostMatrix, DenseGraph, Error, ListGraph, PairReport, PathEntry, PathTable, Result, NO_EDGE,
    UNREACHABLE,
};

// Internal modules
mod core;

/// Build a matrix graph from a reader and solve it.
///
/// Convenience wrapper over [`DenseGraph::build`] followed by
/// [`DenseGraph::solve`].
pub fn solve_from(reader: &mut impl BufRead) -> Result<DenseGraph> {
    let mut graph = DenseGraph::new();
    graph.build(reader)?;
    graph.solve();
    Ok(graph)
}

/// Build an adjacency-list graph from a reader.
pub fn traverse_from(reader: &mut impl BufRead) -> Result<ListGraph> {
    let mut graph = ListGraph::new();
    graph.build(reader)?;
    Ok(graph)
}
