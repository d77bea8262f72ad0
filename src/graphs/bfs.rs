use crate::graphs::{
    digraph::Vertex, frontier::LayeredFrontier, graph::Graph, visited::Visited,
};

/// Breadth-first search that yields whole distance layers.
///
/// The first item is the deduplicated set of initial vertices, the `k`-th
/// item holds every vertex first reached after `k` edges. Vertex order
/// inside a layer follows the order in which they were discovered.
pub struct Layers<'g, G, V>
where
    G: Graph,
    V: Visited<Vertex>,
{
    graph: &'g G,
    visited: V,
    frontier: LayeredFrontier<Vertex>,
}

impl<'g, G, V> Layers<'g, G, V>
where
    G: Graph,
    V: Visited<Vertex>,
{
    /// # Panics
    ///
    /// Panics when an initial vertex is not owned by `graph`.
    pub fn new(graph: &'g G, initials: impl IntoIterator<Item = Vertex>) -> Self {
        let mut visited = V::default();
        let mut initial_layer = Vec::new();

        for vertex in initials {
            assert!(graph.contains(vertex), "vertex not owned by this graph: {vertex}");
            if visited.visit(vertex) {
                initial_layer.push(vertex);
            }
        }

        Self {
            graph,
            visited,
            frontier: LayeredFrontier::new(initial_layer),
        }
    }

    /// Consumes the search and returns everything it has marked so far.
    #[inline]
    pub fn into_visited(self) -> V {
        self.visited
    }

    /// Runs the search to exhaustion and returns the visited set.
    pub fn exhaust(mut self) -> V {
        while self.next().is_some() {}
        self.into_visited()
    }
}

impl<G, V> Iterator for Layers<'_, G, V>
where
    G: Graph,
    V: Visited<Vertex>,
{
    type Item = Vec<Vertex>;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        let visited = &mut self.visited;

        self.frontier.step(|current, next| {
            for &from in current {
                for to in graph.neighbors(from) {
                    if visited.visit(to) {
                        next.push(to);
                    }
                }
            }

            debug_assert!(next.iter().all(|v| visited.is_visited(v)));
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use bit_vec::BitVec;

    use crate::{
        graphs::{digraph::DiGraph, graph::MutableGraph},
        orders::set::Set,
    };

    fn line(n: usize) -> (DiGraph<usize>, Vec<Vertex>) {
        let mut g = DiGraph::new();
        let vs: Vec<Vertex> = (0..n).map(|i| g.add_vertex(i)).collect();
        for pair in vs.windows(2) {
            g.add_edge(pair[0], pair[1]);
        }
        (g, vs)
    }

    #[test]
    fn no_initials_no_layers() {
        let (g, _) = line(3);
        let mut layers: Layers<DiGraph<usize>, Set<Vertex>> = Layers::new(&g, std::iter::empty());
        assert!(layers.next().is_none());
        assert!(layers.into_visited().is_empty());
    }

    #[test]
    fn line_graph_one_vertex_per_layer() {
        let (g, vs) = line(4);
        let layers: Vec<Vec<Vertex>> = Layers::<_, Set<Vertex>>::new(&g, [vs[0]]).collect();
        assert_eq!(layers, vec![vec![vs[0]], vec![vs[1]], vec![vs[2]], vec![vs[3]]]);
    }

    #[test]
    fn duplicate_initials_are_collapsed() {
        let (g, vs) = line(3);
        let mut layers: Layers<DiGraph<usize>, Set<Vertex>> =
            Layers::new(&g, [vs[1], vs[1], vs[0]]);
        assert_eq!(layers.next(), Some(vec![vs[1], vs[0]]));
        assert_eq!(layers.next(), Some(vec![vs[2]]));
        assert_eq!(layers.next(), None);
    }

    #[test]
    fn cycle_terminates_and_reaches_all() {
        let (mut g, vs) = line(3);
        g.add_edge(vs[2], vs[1]);

        let visited: Set<Vertex> = Layers::<_, Set<Vertex>>::new(&g, [vs[0]]).exhaust();
        let expected: Set<Vertex> = vs.iter().copied().collect();
        assert_eq!(visited, expected);
    }

    #[test]
    fn bitvec_and_set_visited_agree() {
        let (mut g, vs) = line(6);
        g.add_edge(vs[5], vs[2]);

        let set: Set<Vertex> = Layers::<_, Set<Vertex>>::new(&g, [vs[2]]).exhaust();
        let bits: BitVec = Layers::<_, BitVec>::new(&g, [vs[2]]).exhaust();

        for &v in &vs {
            assert_eq!(set.is_visited(&v), bits.is_visited(&v));
        }
        assert!(!set.is_visited(&vs[0]));
    }
}
