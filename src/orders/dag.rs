use tracing::debug;

use crate::{
    graphs::{
        digraph::{DiGraph, Vertex},
        graph::{Graph, MutableGraph},
    },
    orders::partial_order::{Comparison, PartialOrder},
};

/// Builds the graph of strict relations between `elements`.
///
/// Vertex `i` carries `elements[i]`, and the returned handles are in the same
/// order as `elements`. For every ordered pair `(i, j)` with `i != j` an edge
/// `i -> j` is added exactly when `order.compare(i, j)` is `Less`; equal and
/// incomparable pairs stay unconnected.
///
/// All `n * (n - 1)` pairs are compared and transitively implied edges are
/// kept, so the result is sufficient for topological sorting but not a
/// Hasse diagram. A consistent order always yields an acyclic graph; an
/// order that is not antisymmetric or not transitive may yield cycles.
pub fn build_dag<T, O>(elements: &[T], order: &O) -> (DiGraph<T>, Vec<Vertex>)
where
    T: Clone,
    O: PartialOrder<T> + ?Sized,
{
    let mut graph = DiGraph::with_capacity(elements.len());
    let vertices: Vec<Vertex> = elements
        .iter()
        .map(|element| graph.add_vertex(element.clone()))
        .collect();

    for (i, a) in elements.iter().enumerate() {
        for (j, b) in elements.iter().enumerate() {
            if i != j && order.compare(a, b) == Comparison::Less {
                graph.add_edge(vertices[i], vertices[j]);
            }
        }
    }

    debug!(
        elements = elements.len(),
        edges = graph.edge_count(),
        "built graph from partial order"
    );
    (graph, vertices)
}
