use crate::graphs::{digraph::Vertex, edges::Edge};

/// Read access to a finite directed graph whose vertices wrap a payload.
///
/// Vertices are identified by [`Vertex`] handles issued by the graph itself.
/// Every method taking a handle requires it to be owned by this graph, that
/// is, created by this graph and not removed since. Passing any other handle
/// is a precondition violation and panics, except for [`Graph::contains`]
/// which is the way to ask.
///
/// Algorithms such as traversal and topological sorting are provided on top
/// of this trait by [`crate::graphs::traversal::Traversal`].
pub trait Graph {
    /// Data carried by each vertex.
    type Payload;

    /// Iterator over all vertices in storage order.
    ///
    /// Storage order is stable for a given graph instance unless the graph
    /// is mutated.
    type Vertices<'a>: Iterator<Item = Vertex>
    where
        Self: 'a;

    /// Returns an iterator over all vertices in storage order.
    fn vertices(&self) -> Self::Vertices<'_>;

    /// Returns the number of vertices.
    fn vertex_count(&self) -> usize {
        self.vertices().count()
    }

    /// Returns true when `vertex` is currently a member of this graph.
    fn contains(&self, vertex: Vertex) -> bool;

    /// Payload of a member vertex.
    fn data(&self, vertex: Vertex) -> &Self::Payload;

    /// Outgoing neighbors of `vertex`, in storage order.
    fn neighbors(&self, vertex: Vertex) -> Vec<Vertex>;

    /// Returns true when the single edge `source -> target` exists.
    ///
    /// This does not look at longer paths, see
    /// [`crate::graphs::traversal::Traversal::has_path`] for reachability.
    fn has_edge(&self, source: Vertex, target: Vertex) -> bool;

    /// Incoming neighbors of `vertex`, in storage order.
    ///
    /// No reverse index is kept, so this scans the adjacency of every vertex.
    fn incoming_neighbors(&self, vertex: Vertex) -> Vec<Vertex> {
        assert!(self.contains(vertex), "vertex not owned by this graph: {vertex}");
        self.vertices()
            .filter(|&source| self.has_edge(source, vertex))
            .collect()
    }

    fn out_degree(&self, vertex: Vertex) -> usize {
        self.neighbors(vertex).len()
    }

    fn in_degree(&self, vertex: Vertex) -> usize {
        self.incoming_neighbors(vertex).len()
    }

    /// Vertices without incoming edges.
    fn sources(&self) -> Vec<Vertex> {
        self.vertices()
            .filter(|&vertex| self.in_degree(vertex) == 0)
            .collect()
    }

    /// Vertices without outgoing edges.
    fn sinks(&self) -> Vec<Vertex> {
        self.vertices()
            .filter(|&vertex| self.out_degree(vertex) == 0)
            .collect()
    }

    /// All edges, grouped by source in storage order.
    fn edges(&self) -> Vec<Edge> {
        self.vertices()
            .flat_map(|source| {
                self.neighbors(source)
                    .into_iter()
                    .map(move |target| Edge::new(source, target))
            })
            .collect()
    }

    /// Returns the number of edges.
    fn edge_count(&self) -> usize {
        self.vertices().map(|vertex| self.out_degree(vertex)).sum()
    }

    /// Returns true when the graph has no vertices.
    fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }
}

/// A graph that supports adding and removing vertices and edges.
pub trait MutableGraph: Graph {
    /// Adds a vertex carrying `data` and returns its fresh handle.
    ///
    /// Equal payloads still yield distinct vertices.
    fn add_vertex(&mut self, data: Self::Payload) -> Vertex;

    /// Removes `vertex` together with every edge touching it.
    ///
    /// Returns false, and does nothing, when `vertex` is not a member.
    fn remove_vertex(&mut self, vertex: Vertex) -> bool;

    /// Inserts the edge `source -> target`.
    ///
    /// Returns false when the edge was already present.
    fn add_edge(&mut self, source: Vertex, target: Vertex) -> bool;

    /// Removes the edge `source -> target`.
    ///
    /// Returns false when there was no such edge.
    fn remove_edge(&mut self, source: Vertex, target: Vertex) -> bool;
}
