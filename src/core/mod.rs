//! Core library modules for gridpath.
//!
//! This module contains the internal implementation details of the
//! gridpath library.

pub mod error;
pub mod graph;
pub mod matrix;
pub mod parse;
pub mod table;
pub mod traversal;

// Re-export main types for internal use
pub use error::{Error, Result};
pub use graph::{DenseGraph, PairReport};
pub use matrix::{CostMatrix, NO_EDGE};
pub use table::{PathEntry, PathTable, UNREACHABLE};
pub use traversal::ListGraph;
