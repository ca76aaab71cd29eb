//! Error types for the gridpath engine.
//!
//! Typed errors live here at the library level; the CLI binary wraps them
//! with `anyhow` context at the application boundary.

use thiserror::Error;

/// Main error type for gridpath operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A node id argument falls outside `[1, N]` for the built graph.
    #[error("node {node} is out of range for a graph of {size} nodes")]
    OutOfRange { node: usize, size: usize },

    /// Negative insert weight, a nonzero self-loop weight, or a weight
    /// too large to store below the "no edge" sentinel.
    #[error("invalid edge weight {0}")]
    InvalidEdgeWeight(i64),

    /// The input stream violated the build-time format contract.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// Underlying I/O failure while reading the input stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for gridpath operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = Error::OutOfRange { node: 9, size: 4 };
        assert_eq!(
            e.to_string(),
            "node 9 is out of range for a graph of 4 nodes"
        );

        let e = Error::InvalidEdgeWeight(-3);
        assert_eq!(e.to_string(), "invalid edge weight -3");
    }
}
