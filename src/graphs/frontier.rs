use std::{
    cmp::Ordering,
    collections::{BinaryHeap, VecDeque},
    mem,
};

/// Pending-work container whose removal order defines a traversal strategy.
pub trait Frontier<T> {
    /// Queues an element.
    fn add(&mut self, value: T);

    /// Removes the next element according to the strategy, or `None` when
    /// the frontier is empty.
    fn pop(&mut self) -> Option<T>;

    /// Number of pending elements.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes the next element according to the strategy.
    ///
    /// # Panics
    ///
    /// Panics when the frontier is empty. Callers must check
    /// [`Frontier::is_empty`] first, or use [`Frontier::pop`].
    fn remove_next(&mut self) -> T {
        match self.pop() {
            Some(value) => value,
            None => panic!("remove_next called on an empty frontier"),
        }
    }
}

/// Last in, first out. Drives depth-first search.
#[derive(Debug, Clone)]
pub struct StackFrontier<T>(Vec<T>);

impl<T> StackFrontier<T> {
    pub fn new() -> Self {
        Self(Vec::new())
    }
}

impl<T> Default for StackFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for StackFrontier<T> {
    #[inline]
    fn add(&mut self, value: T) {
        self.0.push(value);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.0.pop()
    }

    #[inline]
    fn len(&self) -> usize {
        self.0.len()
    }
}

/// First in, first out. Drives breadth-first search.
#[derive(Debug, Clone)]
pub struct QueueFrontier<T>(VecDeque<T>);

impl<T> QueueFrontier<T> {
    pub fn new() -> Self {
        Self(VecDeque::new())
    }
}

impl<T> Default for QueueFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for QueueFrontier<T> {
    #[inline]
    fn add(&mut self, value: T) {
        self.0.push_back(value);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.0.pop_front()
    }

    #[inline]
    fn len(&self) -> usize {
        self.0.len()
    }
}

struct Prioritized<K, T> {
    key: K,
    seq: u64,
    value: T,
}

impl<K: Ord, T> PartialEq for Prioritized<K, T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K: Ord, T> Eq for Prioritized<K, T> {}

impl<K: Ord, T> PartialOrd for Prioritized<K, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord, T> Ord for Prioritized<K, T> {
    // Max-heap on key; among equal keys the earlier insertion wins.
    fn cmp(&self, other: &Self) -> Ordering {
        self.key
            .cmp(&other.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Removes the element with the greatest priority first.
///
/// Priorities are computed once, when an element is added, by the caller's
/// priority function. Already queued elements are never re-prioritized, so
/// this drives a greedy best-first traversal and not a shortest-path search.
/// Wrap the key in [`std::cmp::Reverse`] to remove the smallest first.
pub struct PriorityFrontier<T, F, K>
where
    F: FnMut(&T) -> K,
    K: Ord,
{
    heap: BinaryHeap<Prioritized<K, T>>,
    priority: F,
    seq: u64,
}

impl<T, F, K> PriorityFrontier<T, F, K>
where
    F: FnMut(&T) -> K,
    K: Ord,
{
    pub fn new(priority: F) -> Self {
        Self {
            heap: BinaryHeap::new(),
            priority,
            seq: 0,
        }
    }

    /// Peeks at the element that the next removal would yield.
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek().map(|entry| &entry.value)
    }
}

impl<T, F, K> Frontier<T> for PriorityFrontier<T, F, K>
where
    F: FnMut(&T) -> K,
    K: Ord,
{
    fn add(&mut self, value: T) {
        let key = (self.priority)(&value);
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Prioritized { key, seq, value });
    }

    fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|entry| entry.value)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

/// Layer-at-a-time frontier used by [`crate::graphs::bfs::Layers`].
///
/// Each [`LayeredFrontier::step`] hands the whole current layer to the
/// expansion closure and swaps in whatever it produced as the next layer.
#[derive(Default)]
pub struct LayeredFrontier<T> {
    frontier: Vec<T>,
    next: Vec<T>,
}

impl<T> LayeredFrontier<T> {
    pub fn new<I: IntoIterator<Item = T>>(initial: I) -> Self {
        let mut frontier = Vec::new();
        frontier.extend(initial);
        Self {
            frontier,
            next: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.frontier.is_empty()
    }

    pub fn layer(&self) -> &[T] {
        &self.frontier
    }

    pub fn len(&self) -> usize {
        self.frontier.len()
    }

    /// Returns the current layer after computing the next one, or `None`
    /// once the frontier is exhausted.
    pub fn step<F>(&mut self, mut expand: F) -> Option<Vec<T>>
    where
        F: FnMut(&[T], &mut Vec<T>),
    {
        if self.frontier.is_empty() {
            return None;
        }

        let current = mem::take(&mut self.frontier);
        self.next.clear();

        expand(&current, &mut self.next);

        self.frontier = mem::take(&mut self.next);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;
    use std::cmp::Reverse;

    fn drain<T, F: Frontier<T>>(frontier: &mut F) -> Vec<T> {
        let mut out = Vec::new();
        while !frontier.is_empty() {
            out.push(frontier.remove_next());
        }
        out
    }

    #[test]
    fn stack_is_lifo() {
        let mut stack = StackFrontier::new();
        for v in [1, 2, 3] {
            stack.add(v);
        }
        assert_eq!(stack.len(), 3);
        assert_eq!(drain(&mut stack), vec![3, 2, 1]);
    }

    #[test]
    fn queue_is_fifo() {
        let mut queue = QueueFrontier::new();
        for v in [1, 2, 3] {
            queue.add(v);
        }
        assert_eq!(drain(&mut queue), vec![1, 2, 3]);
    }

    #[test]
    fn priority_yields_greatest_first() {
        let mut frontier = PriorityFrontier::new(|v: &i32| *v);
        for v in [5, 1, 9, 3] {
            frontier.add(v);
        }
        assert_eq!(frontier.peek(), Some(&9));
        assert_eq!(drain(&mut frontier), vec![9, 5, 3, 1]);
    }

    #[test]
    fn priority_reverse_key_yields_smallest_first() {
        let mut frontier = PriorityFrontier::new(|v: &i32| Reverse(*v));
        for v in [5, 1, 9, 3] {
            frontier.add(v);
        }
        assert_eq!(drain(&mut frontier), vec![1, 3, 5, 9]);
    }

    #[test]
    fn priority_ties_keep_insertion_order() {
        let mut frontier = PriorityFrontier::new(|(key, _): &(u8, char)| *key);
        for entry in [(1, 'a'), (2, 'b'), (1, 'c'), (2, 'd')] {
            frontier.add(entry);
        }
        let order: Vec<char> = drain(&mut frontier).into_iter().map(|(_, c)| c).collect();
        assert_eq!(order, vec!['b', 'd', 'a', 'c']);
    }

    #[test]
    fn pop_on_empty_is_none() {
        let mut stack: StackFrontier<u8> = StackFrontier::default();
        let mut queue: QueueFrontier<u8> = QueueFrontier::default();
        assert_eq!(stack.pop(), None);
        assert_eq!(queue.pop(), None);
    }

    #[test]
    #[should_panic(expected = "empty frontier")]
    fn remove_next_on_empty_panics() {
        let mut queue: QueueFrontier<u8> = QueueFrontier::new();
        queue.remove_next();
    }

    #[test]
    fn layered_frontier_steps_layer_by_layer() {
        let mut frontier = LayeredFrontier::new([1u32]);
        let mut layers = Vec::new();
        while let Some(layer) = frontier.step(|current, next| {
            for &v in current {
                if v < 8 {
                    next.push(v * 2);
                }
            }
        }) {
            layers.push(layer);
        }
        assert_eq!(layers, vec![vec![1], vec![2], vec![4], vec![8]]);
        assert!(frontier.is_empty());
    }

    proptest! {
        #[test]
        fn prop_priority_drains_in_sorted_order(values in prop::collection::vec(any::<i16>(), 0..64)) {
            let mut frontier = PriorityFrontier::new(|v: &i16| *v);
            for &v in &values {
                frontier.add(v);
            }
            prop_assert_eq!(frontier.len(), values.len());

            let drained = drain(&mut frontier);
            let mut expected = values.clone();
            expected.sort_unstable_by(|a, b| b.cmp(a));
            prop_assert_eq!(drained, expected);
        }
    }
}
