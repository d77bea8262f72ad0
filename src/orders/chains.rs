use tracing::debug;

use crate::{
    error::OrderError,
    graphs::{graph::Graph, traversal::Traversal},
    orders::{dag::build_dag, partial_order::PartialOrder},
};

/// Partitions `elements` into chains, each totally ordered under `order`.
///
/// Elements are visited in a topological order of [`build_dag`]'s graph and
/// appended to the first chain whose last element is less than or equal to
/// them; when no chain qualifies a new one is started. Chains are returned
/// in creation order and each chain lists its elements from least to
/// greatest.
///
/// The partition is valid but greedy: it may use more chains than the
/// width of the order.
///
/// Fails with [`OrderError::Cyclic`] when the order induces a cycle, which
/// only happens for orders that are not antisymmetric or not transitive.
pub fn chain_decomposition<T, O>(elements: &[T], order: &O) -> Result<Vec<Vec<T>>, OrderError>
where
    T: Clone,
    O: PartialOrder<T> + ?Sized,
{
    let (dag, _) = build_dag(elements, order);
    let sorted = dag.topo_sort().ok_or(OrderError::Cyclic {
        total: elements.len(),
    })?;

    let mut chains: Vec<Vec<T>> = Vec::new();
    for vertex in sorted {
        let element = dag.data(vertex);
        let fits = chains.iter_mut().find(|chain| match chain.last() {
            Some(last) => order.less_equal(last, element),
            None => false,
        });

        match fits {
            Some(chain) => chain.push(element.clone()),
            None => chains.push(vec![element.clone()]),
        }
    }

    debug!(
        elements = elements.len(),
        chains = chains.len(),
        "decomposed into chains"
    );
    Ok(chains)
}
