use std::cmp::Ordering;

/// Outcome of comparing two elements under a partial order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    Less,
    Equal,
    Greater,
    Incomparable,
}

impl Comparison {
    /// The result of the same comparison with its operands swapped.
    #[inline]
    pub fn reverse(self) -> Self {
        match self {
            Comparison::Less => Comparison::Greater,
            Comparison::Greater => Comparison::Less,
            other => other,
        }
    }

    /// `None` exactly when the operands are incomparable.
    #[inline]
    pub fn to_ordering(self) -> Option<Ordering> {
        match self {
            Comparison::Less => Some(Ordering::Less),
            Comparison::Equal => Some(Ordering::Equal),
            Comparison::Greater => Some(Ordering::Greater),
            Comparison::Incomparable => None,
        }
    }

    #[inline]
    pub fn is_le(self) -> bool {
        matches!(self, Comparison::Less | Comparison::Equal)
    }

    #[inline]
    pub fn is_ge(self) -> bool {
        matches!(self, Comparison::Greater | Comparison::Equal)
    }
}

impl From<Ordering> for Comparison {
    #[inline]
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Comparison::Less,
            Ordering::Equal => Comparison::Equal,
            Ordering::Greater => Comparison::Greater,
        }
    }
}

impl From<Option<Ordering>> for Comparison {
    #[inline]
    fn from(ordering: Option<Ordering>) -> Self {
        ordering.map_or(Comparison::Incomparable, Comparison::from)
    }
}

/// A partial order on `T`, given by a four-valued comparator.
///
/// In mathematics, a partial order `⊑` on a set `X` satisfies:
///
/// * **Reflexivity**:    `x ⊑ x`
/// * **Antisymmetry**:   if `x ⊑ y` and `y ⊑ x` then `x == y`
/// * **Transitivity**:   if `x ⊑ y` and `y ⊑ z` then `x ⊑ z`
///
/// Here [`PartialOrder::compare`] is the only required method. Implementors
/// must keep it antisymmetric in the sense that `compare(a, b) == Less`
/// exactly when `compare(b, a) == Greater`, while `Equal` and
/// `Incomparable` are symmetric. Transitivity is relied upon by
/// [`crate::orders::dag::build_dag`] and the algorithms built on it but is
/// never checked; a violation shows up as a cycle.
///
/// Orders are stateless comparators and may be shared freely. Any closure
/// `Fn(&T, &T) -> Comparison` is a partial order.
pub trait PartialOrder<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Comparison;

    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Comparison::Less
    }

    #[inline]
    fn greater(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Comparison::Greater
    }

    #[inline]
    fn less_equal(&self, a: &T, b: &T) -> bool {
        self.compare(a, b).is_le()
    }

    #[inline]
    fn greater_equal(&self, a: &T, b: &T) -> bool {
        self.compare(a, b).is_ge()
    }

    #[inline]
    fn is_equal(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Comparison::Equal
    }

    #[inline]
    fn is_comparable(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) != Comparison::Incomparable
    }

    /// The dual order: `Less` and `Greater` swap, the rest is unchanged.
    fn reverse(self) -> Reversed<Self>
    where
        Self: Sized,
    {
        Reversed(self)
    }
}

impl<T, F> PartialOrder<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Comparison,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Comparison {
        self(a, b)
    }
}

/// The dual of an order, see [`PartialOrder::reverse`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Reversed<O>(pub O);

impl<O> Reversed<O> {
    pub fn into_inner(self) -> O {
        self.0
    }
}

impl<T, O> PartialOrder<T> for Reversed<O>
where
    T: ?Sized,
    O: PartialOrder<T>,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Comparison {
        self.0.compare(a, b).reverse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    use crate::orders::testing::divisibility;

    #[test]
    fn comparison_reverse_swaps_only_strict_outcomes() {
        assert_eq!(Comparison::Less.reverse(), Comparison::Greater);
        assert_eq!(Comparison::Greater.reverse(), Comparison::Less);
        assert_eq!(Comparison::Equal.reverse(), Comparison::Equal);
        assert_eq!(Comparison::Incomparable.reverse(), Comparison::Incomparable);
    }

    #[test]
    fn comparison_converts_from_orderings() {
        assert_eq!(Comparison::from(Ordering::Less), Comparison::Less);
        assert_eq!(Comparison::from(Some(Ordering::Greater)), Comparison::Greater);
        assert_eq!(Comparison::from(None::<Ordering>), Comparison::Incomparable);
        assert_eq!(Comparison::Equal.to_ordering(), Some(Ordering::Equal));
        assert_eq!(Comparison::Incomparable.to_ordering(), None);
    }

    #[test]
    fn derived_predicates_follow_compare() {
        let order = divisibility;
        assert!(order.less(&2, &4));
        assert!(order.less_equal(&2, &4));
        assert!(order.less_equal(&4, &4));
        assert!(!order.less(&4, &4));
        assert!(order.greater(&12, &3));
        assert!(order.greater_equal(&12, &12));
        assert!(order.is_equal(&5, &5));
        assert!(!order.is_comparable(&2, &3));
        assert!(!order.less_equal(&2, &3));
        assert!(!order.greater_equal(&2, &3));
    }

    #[test]
    fn reverse_flips_strict_results() {
        let dual = PartialOrder::<u32>::reverse(divisibility);
        assert_eq!(dual.compare(&2, &4), Comparison::Greater);
        assert_eq!(dual.compare(&4, &2), Comparison::Less);
        assert_eq!(dual.compare(&3, &3), Comparison::Equal);
        assert_eq!(dual.compare(&2, &3), Comparison::Incomparable);
        assert!(dual.less(&12, &6));

        let original = dual.into_inner();
        assert_eq!(original.compare(&2, &4), Comparison::Less);
    }

    proptest! {
        #[test]
        fn prop_reverse_twice_is_identity(a in 0u32..64, b in 0u32..64) {
            let twice = Reversed(Reversed(divisibility));
            prop_assert_eq!(twice.compare(&a, &b), divisibility(&a, &b));
        }

        #[test]
        fn prop_divisibility_is_antisymmetric(a in 0u32..64, b in 0u32..64) {
            prop_assert_eq!(divisibility(&a, &b).reverse(), divisibility(&b, &a));
        }
    }
}
