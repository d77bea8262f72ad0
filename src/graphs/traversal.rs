//! Work-list traversal over any [`Graph`].
//!
//! Everything here is one algorithm, [`Traversal::traverse_with`], run with
//! different frontiers and visited-set scopes:
//!
//! | frontier             | result                          |
//! |----------------------|---------------------------------|
//! | [`StackFrontier`]    | depth-first search              |
//! | [`QueueFrontier`]    | breadth-first search            |
//! | [`PriorityFrontier`] | greedy best-first search        |
//!
//! Best-first search uses static priorities and never relaxes a queued
//! vertex, so it is a heuristic walk and not a shortest-path algorithm.
//!
//! Topological sorting is Kahn's algorithm, with the frontier holding the
//! vertices whose remaining in-degree is zero.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{
    graphs::{
        bfs::Layers,
        digraph::Vertex,
        frontier::{Frontier, PriorityFrontier, QueueFrontier, StackFrontier},
        graph::Graph,
        visited::Visited,
    },
    orders::set::Set,
};

pub trait Traversal: Graph {
    /// Runs the generic work-list traversal from `start`.
    ///
    /// `start` is added to `frontier` and `visited`. Then, until the
    /// frontier is empty, the next vertex is removed and handed to
    /// `callback`; if the callback returns true the traversal stops and this
    /// returns true. Otherwise every outgoing neighbor not yet in `visited`
    /// is marked and queued. Returns false once the frontier runs dry.
    ///
    /// `visited` may carry marks from earlier calls, which is how
    /// whole-graph traversals cover every vertex exactly once.
    ///
    /// # Panics
    ///
    /// Panics when `start` is not owned by this graph.
    fn traverse_with<F, V, C>(
        &self,
        start: Vertex,
        frontier: &mut F,
        visited: &mut V,
        mut callback: C,
    ) -> bool
    where
        F: Frontier<Vertex>,
        V: Visited<Vertex>,
        C: FnMut(Vertex) -> bool,
    {
        assert!(self.contains(start), "vertex not owned by this graph: {start}");

        visited.visit(start);
        frontier.add(start);

        while let Some(current) = frontier.pop() {
            if callback(current) {
                return true;
            }

            for next in self.neighbors(current) {
                if visited.visit(next) {
                    frontier.add(next);
                }
            }
        }

        false
    }

    /// Vertices reachable from `start`, in depth-first order.
    fn dfs_from(&self, start: Vertex) -> Vec<Vertex> {
        collect_from(self, start, &mut StackFrontier::new())
    }

    /// Vertices reachable from `start`, in breadth-first order.
    fn bfs_from(&self, start: Vertex) -> Vec<Vertex> {
        collect_from(self, start, &mut QueueFrontier::new())
    }

    /// Vertices reachable from `start`, always expanding the queued vertex
    /// whose payload has the greatest priority.
    ///
    /// Priorities are computed once per vertex when it is queued.
    fn best_first_from<P, K>(&self, start: Vertex, mut priority: P) -> Vec<Vertex>
    where
        P: FnMut(&Self::Payload) -> K,
        K: Ord,
    {
        let mut frontier = PriorityFrontier::new(|vertex: &Vertex| priority(self.data(*vertex)));
        collect_from(self, start, &mut frontier)
    }

    /// Every vertex exactly once, depth-first, with roots taken in storage
    /// order.
    fn dfs(&self) -> Vec<Vertex> {
        collect_all(self, &mut StackFrontier::new())
    }

    /// Every vertex exactly once, breadth-first, with roots taken in storage
    /// order.
    fn bfs(&self) -> Vec<Vertex> {
        collect_all(self, &mut QueueFrontier::new())
    }

    /// Returns true when a path leads from `from` to `to`.
    ///
    /// Every vertex reaches itself. Returns false when either endpoint is not
    /// a member of this graph.
    fn has_path(&self, from: Vertex, to: Vertex) -> bool {
        if !self.contains(from) || !self.contains(to) {
            return false;
        }

        self.traverse_with(
            from,
            &mut StackFrontier::new(),
            &mut Set::default(),
            |current| current == to,
        )
    }

    /// First vertex reachable from `start`, in the order given by
    /// `frontier`, that satisfies `predicate`.
    fn find_from<F, P>(&self, start: Vertex, mut frontier: F, mut predicate: P) -> Option<Vertex>
    where
        F: Frontier<Vertex>,
        P: FnMut(Vertex, &Self::Payload) -> bool,
    {
        let mut found = None;
        self.traverse_with(start, &mut frontier, &mut Set::default(), |current| {
            if predicate(current, self.data(current)) {
                found = Some(current);
                true
            } else {
                false
            }
        });
        found
    }

    /// The set of vertices reachable from `start`, `start` included.
    fn reachable_from(&self, start: Vertex) -> Set<Vertex> {
        let mut visited = Set::default();
        self.traverse_with(start, &mut QueueFrontier::new(), &mut visited, |_| false);
        visited
    }

    /// Breadth-first layers from `initials`: every vertex appears in the
    /// layer matching its edge distance from the nearest initial.
    fn layers<I>(&self, initials: I) -> Layers<'_, Self, Set<Vertex>>
    where
        Self: Sized,
        I: IntoIterator<Item = Vertex>,
    {
        Layers::new(self, initials)
    }

    /// Topological order computed with Kahn's algorithm.
    ///
    /// `frontier` holds the vertices whose in-degree has dropped to zero,
    /// so it only decides how ties between ready vertices are broken.
    /// Returns `None` when the graph has a cycle. The graph is not modified.
    fn topo_sort_with<F>(&self, mut frontier: F) -> Option<Vec<Vertex>>
    where
        F: Frontier<Vertex>,
    {
        let total = self.vertex_count();

        let mut in_degree: FxHashMap<Vertex, usize> = FxHashMap::default();
        in_degree.reserve(total);
        for vertex in self.vertices() {
            in_degree.entry(vertex).or_insert(0);
            for next in self.neighbors(vertex) {
                *in_degree.entry(next).or_insert(0) += 1;
            }
        }

        for vertex in self.vertices() {
            if in_degree.get(&vertex) == Some(&0) {
                frontier.add(vertex);
            }
        }

        let mut order = Vec::with_capacity(total);
        while let Some(current) = frontier.pop() {
            order.push(current);
            for next in self.neighbors(current) {
                if let Some(degree) = in_degree.get_mut(&next) {
                    *degree -= 1;
                    if *degree == 0 {
                        frontier.add(next);
                    }
                }
            }
        }

        if order.len() < total {
            debug!(ordered = order.len(), total, "cycle detected, no topological order");
            return None;
        }

        Some(order)
    }

    /// Topological order with ready vertices taken first come, first served.
    fn topo_sort(&self) -> Option<Vec<Vertex>> {
        self.topo_sort_with(QueueFrontier::new())
    }

    /// Returns true when the graph has no directed cycle, self-loops
    /// included.
    fn is_acyclic(&self) -> bool {
        self.topo_sort().is_some()
    }
}

impl<G: Graph + ?Sized> Traversal for G {}

fn collect_from<G, F>(graph: &G, start: Vertex, frontier: &mut F) -> Vec<Vertex>
where
    G: Graph + ?Sized,
    F: Frontier<Vertex>,
{
    let mut out = Vec::new();
    graph.traverse_with(start, frontier, &mut Set::default(), |current| {
        out.push(current);
        false
    });
    out
}

fn collect_all<G, F>(graph: &G, frontier: &mut F) -> Vec<Vertex>
where
    G: Graph + ?Sized,
    F: Frontier<Vertex>,
{
    let mut visited: Set<Vertex> = Set::default();
    let mut out = Vec::with_capacity(graph.vertex_count());
    for root in graph.vertices() {
        if visited.is_visited(&root) {
            continue;
        }
        graph.traverse_with(root, frontier, &mut visited, |current| {
            out.push(current);
            false
        });
    }
    out
}
