//! Sets viewed through a partial order.
//!
//! A poset borrows its backing [`Set`] instead of copying it, and nothing is
//! cached: every query filters the set as it is at the moment of the call.

use std::hash::Hash;

use crate::{
    error::OrderError,
    graphs::{graph::Graph, traversal::Traversal},
    orders::{
        chains::chain_decomposition,
        dag::build_dag,
        partial_order::{Comparison, PartialOrder},
        set::Set,
    },
};

/// Read-only queries shared by [`Poset`] and [`MutablePoset`].
///
/// Every view walks the whole backing set, `maximal` and `minimal` compare
/// every pair. Results come in the set's iteration order.
pub trait PosetView<T: Eq + Hash> {
    type Order: PartialOrder<T>;

    fn elements(&self) -> &Set<T>;

    fn order(&self) -> &Self::Order;

    fn len(&self) -> usize {
        self.elements().len()
    }

    fn is_empty(&self) -> bool {
        self.elements().is_empty()
    }

    /// Elements strictly below `x`.
    fn lower(&self, x: &T) -> Vec<&T> {
        select(self.elements(), |e| self.order().less(e, x))
    }

    /// Elements strictly above `x`.
    fn upper(&self, x: &T) -> Vec<&T> {
        select(self.elements(), |e| self.order().greater(e, x))
    }

    /// Elements below or equal to `x`.
    fn lower_eq(&self, x: &T) -> Vec<&T> {
        select(self.elements(), |e| self.order().less_equal(e, x))
    }

    /// Elements above or equal to `x`.
    fn upper_eq(&self, x: &T) -> Vec<&T> {
        select(self.elements(), |e| self.order().greater_equal(e, x))
    }

    /// Elements comparable with `x`, `x` itself included when present.
    fn comparable(&self, x: &T) -> Vec<&T> {
        select(self.elements(), |e| self.order().is_comparable(e, x))
    }

    /// Elements incomparable with `x`.
    fn incomparable(&self, x: &T) -> Vec<&T> {
        select(self.elements(), |e| {
            self.order().compare(e, x) == Comparison::Incomparable
        })
    }

    /// Elements with nothing strictly above them.
    fn maximal(&self) -> Vec<&T> {
        let elements = self.elements();
        select(elements, |e| !elements.iter().any(|f| self.order().less(e, f)))
    }

    /// Elements with nothing strictly below them.
    fn minimal(&self) -> Vec<&T> {
        let elements = self.elements();
        select(elements, |e| !elements.iter().any(|f| self.order().less(f, e)))
    }

    /// All elements, arranged so that every element comes after everything
    /// strictly below it.
    fn linear_extension(&self) -> Result<Vec<&T>, OrderError> {
        let refs: Vec<&T> = self.elements().iter().collect();
        let order = |a: &&T, b: &&T| self.order().compare(*a, *b);
        let (dag, _) = build_dag(&refs, &order);
        let sorted = dag
            .topo_sort()
            .ok_or(OrderError::Cyclic { total: refs.len() })?;
        Ok(sorted.into_iter().map(|v| *dag.data(v)).collect())
    }

    /// A greedy partition of the elements into chains, see
    /// [`chain_decomposition`].
    fn chains(&self) -> Result<Vec<Vec<&T>>, OrderError> {
        let refs: Vec<&T> = self.elements().iter().collect();
        let order = |a: &&T, b: &&T| self.order().compare(*a, *b);
        chain_decomposition(&refs, &order)
    }
}

fn select<T, P>(elements: &Set<T>, mut keep: P) -> Vec<&T>
where
    T: Eq + Hash,
    P: FnMut(&T) -> bool,
{
    elements.iter().filter(|e| keep(e)).collect()
}

/// A shared, read-only poset view over a borrowed set.
pub struct Poset<'s, T: Eq + Hash, O> {
    elements: &'s Set<T>,
    order: O,
}

impl<'s, T: Eq + Hash, O: PartialOrder<T>> Poset<'s, T, O> {
    pub fn new(elements: &'s Set<T>, order: O) -> Self {
        Self { elements, order }
    }
}

impl<T: Eq + Hash, O: PartialOrder<T>> PosetView<T> for Poset<'_, T, O> {
    type Order = O;

    fn elements(&self) -> &Set<T> {
        self.elements
    }

    fn order(&self) -> &O {
        &self.order
    }
}

/// A poset view that can also change its backing set.
pub struct MutablePoset<'s, T: Eq + Hash, O> {
    elements: &'s mut Set<T>,
    order: O,
}

impl<'s, T: Eq + Hash, O: PartialOrder<T>> MutablePoset<'s, T, O> {
    pub fn new(elements: &'s mut Set<T>, order: O) -> Self {
        Self { elements, order }
    }

    /// Adds `value` to the backing set. Returns false when already present.
    pub fn insert(&mut self, value: T) -> bool {
        self.elements.insert(value)
    }

    /// Removes `value` from the backing set. Returns false when absent.
    pub fn remove(&mut self, value: &T) -> bool {
        self.elements.remove(value)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.elements.contains(value)
    }

    /// Drops every element not satisfying `keep`.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, keep: F) {
        self.elements.retain(keep)
    }
}

impl<T: Eq + Hash, O: PartialOrder<T>> PosetView<T> for MutablePoset<'_, T, O> {
    type Order = O;

    fn elements(&self) -> &Set<T> {
        &*self.elements
    }

    fn order(&self) -> &O {
        &self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    use crate::orders::{
        factories::{natural_order, string_prefix_order},
        testing::divisibility,
    };

    fn sorted(mut values: Vec<&u32>) -> Vec<u32> {
        values.sort();
        values.into_iter().copied().collect()
    }

    fn divisors_of_12() -> Set<u32> {
        Set::from([1, 2, 3, 4, 6, 12])
    }

    #[test]
    fn derived_views() {
        let set = divisors_of_12();
        let poset = Poset::new(&set, divisibility);

        assert_eq!(poset.len(), 6);
        assert_eq!(sorted(poset.lower(&6)), vec![1, 2, 3]);
        assert_eq!(sorted(poset.lower_eq(&6)), vec![1, 2, 3, 6]);
        assert_eq!(sorted(poset.upper(&2)), vec![4, 6, 12]);
        assert_eq!(sorted(poset.upper_eq(&2)), vec![2, 4, 6, 12]);
        assert_eq!(sorted(poset.comparable(&4)), vec![1, 2, 4, 12]);
        assert_eq!(sorted(poset.incomparable(&4)), vec![3, 6]);
        assert_eq!(sorted(poset.maximal()), vec![12]);
        assert_eq!(sorted(poset.minimal()), vec![1]);
    }

    #[test]
    fn views_of_absent_elements() {
        let set = divisors_of_12();
        let poset = Poset::new(&set, divisibility);
        assert_eq!(sorted(poset.lower(&24)), vec![1, 2, 3, 4, 6, 12]);
        assert!(poset.upper(&24).is_empty());
        assert_eq!(sorted(poset.comparable(&5)), vec![1]);
        assert_eq!(sorted(poset.incomparable(&5)), vec![2, 3, 4, 6, 12]);
    }

    #[test]
    fn empty_poset_has_no_extremes() {
        let set: Set<u32> = Set::new();
        let poset = Poset::new(&set, divisibility);
        assert!(poset.is_empty());
        assert!(poset.maximal().is_empty());
        assert!(poset.minimal().is_empty());
        assert_eq!(poset.linear_extension(), Ok(Vec::new()));
    }

    #[test]
    fn mutations_are_visible_to_later_queries() {
        let mut set = divisors_of_12();
        {
            let mut poset = MutablePoset::new(&mut set, divisibility);
            assert!(poset.insert(5));
            assert!(!poset.insert(5));
            assert_eq!(sorted(poset.maximal()), vec![5, 12]);

            assert!(poset.remove(&1));
            assert_eq!(sorted(poset.minimal()), vec![2, 3, 5]);
            assert!(poset.contains(&5));

            poset.retain(|v| *v != 12);
            assert_eq!(sorted(poset.maximal()), vec![4, 5, 6]);
        }

        set.insert(60);
        let poset = Poset::new(&set, divisibility);
        assert_eq!(sorted(poset.maximal()), vec![60]);
    }

    #[test]
    fn linear_extension_respects_order() {
        let set = divisors_of_12();
        let poset = Poset::new(&set, divisibility);
        let extension = poset.linear_extension().unwrap();
        assert_eq!(extension.len(), 6);
        for (i, a) in extension.iter().enumerate() {
            for b in &extension[..i] {
                assert_ne!(divisibility(a, b), Comparison::Less);
            }
        }
    }

    #[test]
    fn chains_cover_the_poset() {
        let set = divisors_of_12();
        let poset = Poset::new(&set, divisibility);
        let chains = poset.chains().unwrap();
        let mut covered: Vec<u32> = chains.iter().flatten().map(|v| **v).collect();
        covered.sort_unstable();
        assert_eq!(covered, vec![1, 2, 3, 4, 6, 12]);
        for chain in &chains {
            for pair in chain.windows(2) {
                assert!(divisibility(pair[0], pair[1]) == Comparison::Less);
            }
        }
    }

    #[test]
    fn inconsistent_order_fails_linear_extension() {
        let set: Set<u8> = Set::from([0, 1, 2]);
        let cyclic = |a: &u8, b: &u8| {
            if a == b {
                Comparison::Equal
            } else if (a + 1) % 3 == *b {
                Comparison::Less
            } else {
                Comparison::Greater
            }
        };
        let poset = Poset::new(&set, cyclic);
        assert_eq!(poset.linear_extension(), Err(OrderError::Cyclic { total: 3 }));
        assert_eq!(poset.chains(), Err(OrderError::Cyclic { total: 3 }));
    }

    #[test]
    fn prefix_poset() {
        let words: Set<String> = ["a", "ab", "abc", "b", "ba"]
            .into_iter()
            .map(String::from)
            .collect();
        let poset = Poset::new(&words, string_prefix_order());

        let mut maximal: Vec<&str> = poset.maximal().into_iter().map(String::as_str).collect();
        maximal.sort_unstable();
        assert_eq!(maximal, vec!["abc", "ba"]);

        let mut minimal: Vec<&str> = poset.minimal().into_iter().map(String::as_str).collect();
        minimal.sort_unstable();
        assert_eq!(minimal, vec!["a", "b"]);

        let extension = poset.linear_extension().unwrap();
        let position = |w: &str| extension.iter().position(|e| e.as_str() == w).unwrap();
        assert!(position("a") < position("ab"));
        assert!(position("ab") < position("abc"));
        assert!(position("b") < position("ba"));
    }

    proptest! {
        #[test]
        fn prop_total_order_has_single_extremes(values in prop::collection::vec(any::<i32>(), 1..20)) {
            let set: Set<i32> = values.iter().copied().collect();
            let poset = Poset::new(&set, natural_order());
            let max = *values.iter().max().unwrap();
            let min = *values.iter().min().unwrap();
            prop_assert_eq!(poset.maximal(), vec![&max]);
            prop_assert_eq!(poset.minimal(), vec![&min]);
            prop_assert_eq!(poset.lower(&min).len(), 0);
            prop_assert_eq!(poset.lower_eq(&max).len(), set.len());
        }

        #[test]
        fn prop_views_partition_around_element(values in prop::collection::vec(1u32..50, 1..16), x in 1u32..50) {
            let set: Set<u32> = values.into_iter().collect();
            let poset = Poset::new(&set, divisibility);
            let below = poset.lower(&x).len();
            let above = poset.upper(&x).len();
            let equal = usize::from(set.contains(&x));
            let unrelated = poset.incomparable(&x).len();
            prop_assert_eq!(below + above + equal + unrelated, set.len());
            prop_assert_eq!(poset.comparable(&x).len(), below + above + equal);
        }
    }
}
