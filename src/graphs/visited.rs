use bit_vec::BitVec;
use std::hash::Hash;

use crate::{graphs::digraph::Vertex, orders::set::Set};

/// Record of the elements a traversal has already reached.
pub trait Visited<V>: Default {
    /// Marks `value` as visited. Returns true only on the first visit.
    fn visit(&mut self, value: V) -> bool;

    fn is_visited(&self, value: &V) -> bool;
}

impl<V> Visited<V> for Set<V>
where
    V: Eq + Hash + Copy,
{
    #[inline]
    fn visit(&mut self, value: V) -> bool {
        self.insert(value)
    }

    #[inline]
    fn is_visited(&self, value: &V) -> bool {
        self.contains(value)
    }
}

#[inline]
fn visit_bit(bits: &mut BitVec, index: usize) -> bool {
    let len = bits.len();
    if index >= len {
        bits.grow(index + 1 - len, false);
    }

    if bits[index] {
        false
    } else {
        bits.set(index, true);
        true
    }
}

impl Visited<usize> for BitVec {
    #[inline]
    fn visit(&mut self, value: usize) -> bool {
        visit_bit(self, value)
    }

    #[inline]
    fn is_visited(&self, value: &usize) -> bool {
        self.get(*value).unwrap_or(false)
    }
}

/// Dense visited set keyed by slot index.
///
/// Only meaningful for vertices of a single graph, and only while no vertex
/// is removed and its slot reused during the traversal.
impl Visited<Vertex> for BitVec {
    #[inline]
    fn visit(&mut self, value: Vertex) -> bool {
        visit_bit(self, value.index())
    }

    #[inline]
    fn is_visited(&self, value: &Vertex) -> bool {
        self.get(value.index()).unwrap_or(false)
    }
}
