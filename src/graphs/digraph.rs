//! Arena-backed directed graph.
//!
//! Vertices live in one growable slot array owned by the graph, and
//! adjacency is stored as sets of slot indices. A [`Vertex`] handle is the
//! slot index together with the tag of the graph that issued it and the
//! generation of the slot at the time of issue, so checking ownership is a
//! pair of integer comparisons rather than a membership scan.
//!
//! Freed slots are reused. Reuse bumps the slot generation, so handles to a
//! removed vertex stay invalid even after their slot is occupied again.

use std::{
    fmt,
    iter::Enumerate,
    slice,
    sync::atomic::{AtomicU64, Ordering},
};

use tracing::trace;

use crate::{
    error::GraphError,
    graphs::graph::{Graph, MutableGraph},
    orders::set::Set,
};

static NEXT_GRAPH_TAG: AtomicU64 = AtomicU64::new(0);

fn next_graph_tag() -> u64 {
    let next = NEXT_GRAPH_TAG.fetch_update(Ordering::Relaxed, Ordering::Relaxed, |tag| {
        tag.checked_add(1)
    });
    match next {
        Ok(tag) => tag,
        Err(_) => panic!("graph tags exhausted"),
    }
}

/// Opaque handle to a vertex of a [`DiGraph`].
///
/// Handles are small and `Copy`. Two handles are equal only when they refer
/// to the same creation of a vertex in the same graph, regardless of the
/// payloads involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vertex {
    graph: u64,
    index: u32,
    generation: u32,
}

impl Vertex {
    /// Slot index of this vertex inside its graph.
    ///
    /// Indices are dense and start at zero, which makes them suitable for
    /// keying side tables such as a [`bit_vec::BitVec`] visited set.
    #[inline]
    pub fn index(&self) -> usize {
        self.index as usize
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}#{}@g{}", self.index, self.generation, self.graph)
    }
}

#[derive(Debug, Clone)]
struct Entry<T> {
    data: T,
    successors: Set<usize>,
}

#[derive(Debug, Clone)]
struct Slot<T> {
    generation: u32,
    entry: Option<Entry<T>>,
    next_free: Option<u32>,
}

/// Directed graph with payload `T` on every vertex and at most one edge per
/// ordered vertex pair. Self-loops are allowed.
///
/// A clone is a new graph with its own tag: handles of the original are
/// foreign to it. Slot indices are preserved, so [`DiGraph::vertex_at`]
/// with [`Vertex::index`] finds the copy of a vertex.
#[derive(Debug)]
pub struct DiGraph<T> {
    tag: u64,
    slots: Vec<Slot<T>>,
    free_head: Option<u32>,
    live: usize,
    edges: usize,
}

impl<T> DiGraph<T> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty graph with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tag: next_graph_tag(),
            slots: Vec::with_capacity(capacity),
            free_head: None,
            live: 0,
            edges: 0,
        }
    }

    #[inline]
    fn handle(&self, index: usize) -> Vertex {
        Vertex {
            graph: self.tag,
            index: index as u32,
            generation: self.slots[index].generation,
        }
    }

    #[inline]
    fn entry(&self, vertex: Vertex) -> Result<&Entry<T>, GraphError> {
        if vertex.graph != self.tag {
            return Err(GraphError::VertexNotOwned(vertex));
        }
        match self.slots.get(vertex.index()) {
            Some(Slot {
                generation,
                entry: Some(entry),
                ..
            }) if *generation == vertex.generation => Ok(entry),
            _ => Err(GraphError::VertexNotOwned(vertex)),
        }
    }

    #[inline]
    fn entry_mut(&mut self, vertex: Vertex) -> Result<&mut Entry<T>, GraphError> {
        if vertex.graph != self.tag {
            return Err(GraphError::VertexNotOwned(vertex));
        }
        match self.slots.get_mut(vertex.index()) {
            Some(Slot {
                generation,
                entry: Some(entry),
                ..
            }) if *generation == vertex.generation => Ok(entry),
            _ => Err(GraphError::VertexNotOwned(vertex)),
        }
    }

    #[inline]
    fn owned(&self, vertex: Vertex) -> &Entry<T> {
        match self.entry(vertex) {
            Ok(entry) => entry,
            Err(err) => panic!("{err}"),
        }
    }

    /// Payload of `vertex`, or an error when the handle is not owned.
    pub fn try_data(&self, vertex: Vertex) -> Result<&T, GraphError> {
        self.entry(vertex).map(|entry| &entry.data)
    }

    /// Mutable payload of `vertex`.
    ///
    /// # Panics
    ///
    /// Panics when `vertex` is not owned by this graph.
    pub fn data_mut(&mut self, vertex: Vertex) -> &mut T {
        match self.entry_mut(vertex) {
            Ok(entry) => &mut entry.data,
            Err(err) => panic!("{err}"),
        }
    }

    /// Inserts `source -> target`, reporting foreign handles as an error.
    pub fn try_add_edge(&mut self, source: Vertex, target: Vertex) -> Result<bool, GraphError> {
        self.entry(target)?;
        let inserted = self.entry_mut(source)?.successors.insert(target.index());
        if inserted {
            self.edges += 1;
            trace!(%source, %target, "edge added");
        }
        Ok(inserted)
    }

    /// Removes `source -> target`, reporting foreign handles as an error.
    pub fn try_remove_edge(&mut self, source: Vertex, target: Vertex) -> Result<bool, GraphError> {
        self.entry(target)?;
        let removed = self.entry_mut(source)?.successors.remove(&target.index());
        if removed {
            self.edges -= 1;
            trace!(%source, %target, "edge removed");
        }
        Ok(removed)
    }

    /// Handle for the vertex at slot `index`, if that slot is live.
    pub fn vertex_at(&self, index: usize) -> Option<Vertex> {
        match self.slots.get(index) {
            Some(Slot { entry: Some(_), .. }) => Some(self.handle(index)),
            _ => None,
        }
    }
}

impl<T: Clone> Clone for DiGraph<T> {
    fn clone(&self) -> Self {
        Self {
            tag: next_graph_tag(),
            slots: self.slots.clone(),
            free_head: self.free_head,
            live: self.live,
            edges: self.edges,
        }
    }
}

impl<T> Default for DiGraph<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the live vertices of a [`DiGraph`] in slot order.
pub struct VertexIter<'a, T> {
    tag: u64,
    slots: Enumerate<slice::Iter<'a, Slot<T>>>,
}

impl<T> Iterator for VertexIter<'_, T> {
    type Item = Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        for (index, slot) in self.slots.by_ref() {
            if slot.entry.is_some() {
                return Some(Vertex {
                    graph: self.tag,
                    index: index as u32,
                    generation: slot.generation,
                });
            }
        }
        None
    }
}

impl<T> Graph for DiGraph<T> {
    type Payload = T;

    type Vertices<'a>
        = VertexIter<'a, T>
    where
        Self: 'a;

    fn vertices(&self) -> Self::Vertices<'_> {
        VertexIter {
            tag: self.tag,
            slots: self.slots.iter().enumerate(),
        }
    }

    #[inline]
    fn vertex_count(&self) -> usize {
        self.live
    }

    #[inline]
    fn contains(&self, vertex: Vertex) -> bool {
        self.entry(vertex).is_ok()
    }

    fn data(&self, vertex: Vertex) -> &T {
        &self.owned(vertex).data
    }

    fn neighbors(&self, vertex: Vertex) -> Vec<Vertex> {
        let mut indices: Vec<usize> = self.owned(vertex).successors.iter().copied().collect();
        indices.sort_unstable();
        indices.into_iter().map(|index| self.handle(index)).collect()
    }

    fn has_edge(&self, source: Vertex, target: Vertex) -> bool {
        let successors = &self.owned(source).successors;
        self.owned(target);
        successors.contains(&target.index())
    }

    fn incoming_neighbors(&self, vertex: Vertex) -> Vec<Vertex> {
        self.owned(vertex);
        let index = vertex.index();
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(source, slot)| match &slot.entry {
                Some(entry) if entry.successors.contains(&index) => Some(self.handle(source)),
                _ => None,
            })
            .collect()
    }

    #[inline]
    fn out_degree(&self, vertex: Vertex) -> usize {
        self.owned(vertex).successors.len()
    }

    fn in_degree(&self, vertex: Vertex) -> usize {
        self.owned(vertex);
        let index = vertex.index();
        self.slots
            .iter()
            .filter_map(|slot| slot.entry.as_ref())
            .filter(|entry| entry.successors.contains(&index))
            .count()
    }

    #[inline]
    fn edge_count(&self) -> usize {
        self.edges
    }
}

impl<T> MutableGraph for DiGraph<T> {
    fn add_vertex(&mut self, data: T) -> Vertex {
        let entry = Entry {
            data,
            successors: Set::new(),
        };

        let index = match self.free_head {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                debug_assert!(slot.entry.is_none(), "free slot should be empty");
                self.free_head = slot.next_free.take();
                slot.entry = Some(entry);
                index as usize
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    entry: Some(entry),
                    next_free: None,
                });
                self.slots.len() - 1
            }
        };

        self.live += 1;
        let vertex = self.handle(index);
        trace!(%vertex, "vertex added");
        vertex
    }

    fn remove_vertex(&mut self, vertex: Vertex) -> bool {
        if !self.contains(vertex) {
            return false;
        }

        let index = vertex.index();
        let slot = &mut self.slots[index];
        let removed = match slot.entry.take() {
            Some(entry) => entry,
            None => return false,
        };
        // A slot whose generation is spent is retired instead of reused, so
        // no old handle can ever match it again.
        if let Some(generation) = slot.generation.checked_add(1) {
            slot.generation = generation;
            slot.next_free = self.free_head;
            self.free_head = Some(index as u32);
        }

        let mut dropped = removed.successors.len();
        for slot in &mut self.slots {
            if let Some(entry) = slot.entry.as_mut() {
                if entry.successors.remove(&index) {
                    dropped += 1;
                }
            }
        }

        // A self-loop was counted once as outgoing and never as incoming,
        // since the slot was emptied before the scan.
        self.edges -= dropped;
        self.live -= 1;
        trace!(%vertex, edges = dropped, "vertex removed");
        true
    }

    fn add_edge(&mut self, source: Vertex, target: Vertex) -> bool {
        match self.try_add_edge(source, target) {
            Ok(changed) => changed,
            Err(err) => panic!("{err}"),
        }
    }

    fn remove_edge(&mut self, source: Vertex, target: Vertex) -> bool {
        match self.try_remove_edge(source, target) {
            Ok(changed) => changed,
            Err(err) => panic!("{err}"),
        }
    }
}
