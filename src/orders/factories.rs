//! Ready-made partial orders.
//!
//! Each factory returns a small comparator value. The element type is part
//! of the comparator's type, so it is usually inferred from the call that
//! consumes the order.

use std::{cmp::Ordering, hash::Hash, marker::PhantomData};

use crate::orders::{
    partial_order::{Comparison, PartialOrder},
    set::Set,
};

/// A total order lifted into a partial order. Never yields `Incomparable`.
pub struct TotalOrder<T: ?Sized, C> {
    cmp: C,
    _element: PhantomData<fn(&T)>,
}

impl<T, C> PartialOrder<T> for TotalOrder<T, C>
where
    T: ?Sized,
    C: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Comparison {
        (self.cmp)(a, b).into()
    }
}

/// Lifts a total comparator.
pub fn total_order<T, C>(cmp: C) -> TotalOrder<T, C>
where
    T: ?Sized,
    C: Fn(&T, &T) -> Ordering,
{
    TotalOrder {
        cmp,
        _element: PhantomData,
    }
}

/// The order given by `T`'s [`Ord`] implementation.
pub fn natural_order<T: Ord + ?Sized>() -> TotalOrder<T, fn(&T, &T) -> Ordering> {
    let cmp: fn(&T, &T) -> Ordering = <T as Ord>::cmp;
    total_order(cmp)
}

/// The order given by `T`'s [`PartialOrd`] implementation, with `None`
/// read as `Incomparable`.
pub struct PartialOrdOrder<T: ?Sized>(PhantomData<fn(&T)>);

impl<T: PartialOrd + ?Sized> PartialOrder<T> for PartialOrdOrder<T> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Comparison {
        a.partial_cmp(b).into()
    }
}

pub fn partial_ord_order<T: PartialOrd + ?Sized>() -> PartialOrdOrder<T> {
    PartialOrdOrder(PhantomData)
}

/// Sets ordered by inclusion.
pub struct SubsetInclusion<T>(PhantomData<fn(&T)>);

impl<T: Eq + Hash> PartialOrder<Set<T>> for SubsetInclusion<T> {
    fn compare(&self, a: &Set<T>, b: &Set<T>) -> Comparison {
        // Sizes decide which direction is even possible before the
        // membership scan.
        match a.len().cmp(&b.len()) {
            Ordering::Less if a.is_subset(b) => Comparison::Less,
            Ordering::Greater if b.is_subset(a) => Comparison::Greater,
            Ordering::Equal if a == b => Comparison::Equal,
            _ => Comparison::Incomparable,
        }
    }
}

/// `{1} < {1, 2}`, while `{1, 2}` and `{1, 3}` are incomparable.
pub fn subset_inclusion_order<T: Eq + Hash>() -> SubsetInclusion<T> {
    SubsetInclusion(PhantomData)
}

/// Strings ordered by substring containment.
pub struct StringContainment<S: ?Sized>(PhantomData<fn(&S)>);

impl<S: AsRef<str> + ?Sized> PartialOrder<S> for StringContainment<S> {
    fn compare(&self, a: &S, b: &S) -> Comparison {
        let (a, b) = (a.as_ref(), b.as_ref());
        match a.len().cmp(&b.len()) {
            Ordering::Less if b.contains(a) => Comparison::Less,
            Ordering::Greater if a.contains(b) => Comparison::Greater,
            Ordering::Equal if a == b => Comparison::Equal,
            _ => Comparison::Incomparable,
        }
    }
}

/// `"ell" < "hello"`; distinct strings of equal length are incomparable.
pub fn string_containment_order<S: AsRef<str> + ?Sized>() -> StringContainment<S> {
    StringContainment(PhantomData)
}

/// Strings ordered by the prefix relation.
pub struct StringPrefix<S: ?Sized>(PhantomData<fn(&S)>);

impl<S: AsRef<str> + ?Sized> PartialOrder<S> for StringPrefix<S> {
    fn compare(&self, a: &S, b: &S) -> Comparison {
        let (a, b) = (a.as_ref(), b.as_ref());
        match a.len().cmp(&b.len()) {
            Ordering::Less if b.starts_with(a) => Comparison::Less,
            Ordering::Greater if a.starts_with(b) => Comparison::Greater,
            Ordering::Equal if a == b => Comparison::Equal,
            _ => Comparison::Incomparable,
        }
    }
}

/// `"he" < "hello"`; `"he"` and `"hi"` are incomparable.
pub fn string_prefix_order<S: AsRef<str> + ?Sized>() -> StringPrefix<S> {
    StringPrefix(PhantomData)
}

/// Pairs compared component by component.
pub struct LatticeOrder2<A, C> {
    cmp: C,
    _element: PhantomData<fn(&A)>,
}

impl<A, C> PartialOrder<(A, A)> for LatticeOrder2<A, C>
where
    C: Fn(&A, &A) -> Ordering,
{
    fn compare(&self, a: &(A, A), b: &(A, A)) -> Comparison {
        match ((self.cmp)(&a.0, &b.0), (self.cmp)(&a.1, &b.1)) {
            (Ordering::Less, Ordering::Less) => Comparison::Less,
            (Ordering::Greater, Ordering::Greater) => Comparison::Greater,
            (Ordering::Equal, Ordering::Equal) => Comparison::Equal,
            _ => Comparison::Incomparable,
        }
    }
}

/// Pairs are `Less` only when both components are strictly less, and
/// `Greater` only when both are strictly greater. Any mix, including one
/// equal component, is `Incomparable`.
pub fn lattice_order_2<A, C>(cmp: C) -> LatticeOrder2<A, C>
where
    C: Fn(&A, &A) -> Ordering,
{
    LatticeOrder2 {
        cmp,
        _element: PhantomData,
    }
}

/// Sequences compared over their shared prefix.
pub struct LatticeOrderN<S: ?Sized, A, C> {
    cmp: C,
    _element: PhantomData<(fn(&S), fn(&A))>,
}

impl<S, A, C> PartialOrder<S> for LatticeOrderN<S, A, C>
where
    S: AsRef<[A]> + ?Sized,
    C: Fn(&A, &A) -> Ordering,
{
    fn compare(&self, a: &S, b: &S) -> Comparison {
        let (a, b) = (a.as_ref(), b.as_ref());
        for (x, y) in a.iter().zip(b) {
            match (self.cmp)(x, y) {
                Ordering::Equal => continue,
                decided => return decided.into(),
            }
        }
        a.len().cmp(&b.len()).into()
    }
}

/// The first differing position of the shared prefix decides. When the
/// shared prefix is entirely equal the shorter sequence is `Less`, and
/// sequences of equal length are `Equal`.
///
/// So `[1, 2] < [1, 2, 3]` and `[1, 3] > [1, 2, 3]`.
pub fn lattice_order_n<S, A, C>(cmp: C) -> LatticeOrderN<S, A, C>
where
    S: AsRef<[A]> + ?Sized,
    C: Fn(&A, &A) -> Ordering,
{
    LatticeOrderN {
        cmp,
        _element: PhantomData,
    }
}
