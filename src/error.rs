use thiserror::Error;

use crate::graphs::digraph::Vertex;

/// Precondition failures reported by the fallible graph entry points.
///
/// The panicking counterparts (`add_edge`, `data`, ...) treat these as fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("vertex not owned by this graph: {0}")]
    VertexNotOwned(Vertex),
}

/// Failures of order-derived algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OrderError {
    /// The graph built from the order contains a cycle, so no topological
    /// order exists. This is how an order that is not antisymmetric or not
    /// transitive shows up.
    #[error("no topological order exists for these {total} elements")]
    Cyclic { total: usize },
}
