//! The errors that can occur while building a graph or computing its spanning tree.

use thiserror::Error;

/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// All failures are caused by the caller: a bad vertex or index, or an input
/// graph that has no spanning tree. None of them are worth retrying.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// An edge referenced a vertex that is not part of the graph.
    #[error("vertex {0} not found in graph")]
    InvalidVertex(String),
    /// A vertex collection contained the same identifier twice.
    #[error("vertex {0} occurs more than once")]
    DuplicateVertex(String),
    /// A disjoint-set operation was given an index outside of its range.
    #[error("index {index} out of range for disjoint set of length {len}")]
    IndexOutOfRange {
        index: usize,
        len: usize,
    },
    /// An injected union-find structure does not cover the vertices of the graph.
    #[error("union-find has {found} elements but the graph has {expected} vertices")]
    SizeMismatch {
        expected: usize,
        found: usize,
    },
    /// A round found no edge between two components.
    #[error("graph is disconnected, {components} components can not be joined")]
    DisconnectedGraph {
        components: usize,
    },
}
