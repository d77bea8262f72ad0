//! # ordgraph
//!
//! A directed-graph traversal engine and the partial-order layer built on it.
//!
//! The [`graphs`] tree provides an arena-backed directed graph ([`DiGraph`])
//! and a single work-list traversal ([`Traversal::traverse_with`]) which,
//! depending on the [`Frontier`] handed to it, behaves as depth-first,
//! breadth-first or greedy best-first search. Kahn's topological sort is
//! built on the same frontier abstraction.
//!
//! The [`orders`] tree provides four-valued partial orders ([`PartialOrder`],
//! [`Comparison`]) and their factories, DAG construction from a partial order,
//! greedy chain decomposition and live poset views.
//!
//! ```
//! use ordgraph::prelude::*;
//!
//! let (dag, _) = build_dag(&[3, 1, 2], &natural_order());
//! let order: Vec<i32> = dag
//!     .topo_sort()
//!     .unwrap()
//!     .into_iter()
//!     .map(|v| *dag.data(v))
//!     .collect();
//! assert_eq!(order, vec![1, 2, 3]);
//! ```

pub mod error;
pub mod graphs;
pub mod orders;

pub use error::{GraphError, OrderError};
pub use graphs::digraph::{DiGraph, Vertex};
pub use graphs::edges::Edge;
pub use graphs::frontier::{Frontier, PriorityFrontier, QueueFrontier, StackFrontier};
pub use graphs::graph::{Graph, MutableGraph};
pub use graphs::traversal::Traversal;
pub use graphs::visited::Visited;
pub use orders::partial_order::{Comparison, PartialOrder};
pub use orders::set::Set;

pub mod prelude {
    pub use crate::error::{GraphError, OrderError};
    pub use crate::graphs::bfs::Layers;
    pub use crate::graphs::digraph::{DiGraph, Vertex};
    pub use crate::graphs::edges::Edge;
    pub use crate::graphs::frontier::{
        Frontier, LayeredFrontier, PriorityFrontier, QueueFrontier, StackFrontier,
    };
    pub use crate::graphs::graph::{Graph, MutableGraph};
    pub use crate::graphs::traversal::Traversal;
    pub use crate::graphs::visited::Visited;
    pub use crate::orders::chains::chain_decomposition;
    pub use crate::orders::dag::build_dag;
    pub use crate::orders::factories::{
        lattice_order_2, lattice_order_n, natural_order, partial_ord_order,
        string_containment_order, string_prefix_order, subset_inclusion_order, total_order,
    };
    pub use crate::orders::partial_order::{Comparison, PartialOrder, Reversed};
    pub use crate::orders::poset::{MutablePoset, Poset, PosetView};
    pub use crate::orders::set::Set;
}
