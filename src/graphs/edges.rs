use std::fmt;

use crate::graphs::digraph::Vertex;

/// A directed edge, read off a graph's adjacency.
///
/// Edges are not stored on their own and carry no identity beyond their
/// endpoints: a graph holds at most one edge per ordered vertex pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub source: Vertex,
    pub target: Vertex,
}

impl Edge {
    pub fn new(source: Vertex, target: Vertex) -> Self {
        Self { source, target }
    }

    /// The same pair with its direction flipped.
    pub fn reversed(self) -> Self {
        Self {
            source: self.target,
            target: self.source,
        }
    }

    pub fn is_loop(&self) -> bool {
        self.source == self.target
    }
}

impl From<(Vertex, Vertex)> for Edge {
    fn from((source, target): (Vertex, Vertex)) -> Self {
        Self::new(source, target)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}
