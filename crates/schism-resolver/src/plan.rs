//! Final eviction decision.
//!
//! A pure function of the selection, the snapshot size, and the validation
//! verdict. No retry, backoff, or partial-eviction state lives here; when
//! the selection cannot be confirmed safe this round, the plan is empty and
//! the caller re-invokes resolution on its next detection cycle.

use schism_graph::BitIndexSet;

/// Plan which indices to evict.
///
/// Every index absent from `selected` is planned for removal iff the
/// selection passed validation *and* is a strict subset of the snapshot.
/// Otherwise the plan is empty: either the cluster is already whole, or no
/// destructive action is taken this round.
pub fn plan_evictions(
    selected: &BitIndexSet,
    node_count: usize,
    fully_connected: bool,
) -> BitIndexSet {
    let mut doomed = BitIndexSet::new(node_count);

    if !fully_connected || selected.count() >= node_count {
        return doomed;
    }

    for index in 0..node_count {
        if !selected.contains(index) {
            doomed.insert(index);
        }
    }

    doomed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_of(capacity: usize, indices: &[usize]) -> BitIndexSet {
        let mut set = BitIndexSet::new(capacity);
        for &idx in indices {
            set.insert(idx);
        }
        set
    }

    #[test]
    fn evicts_complement_of_confirmed_strict_subset() {
        let selected = set_of(5, &[0, 1, 2]);
        let doomed = plan_evictions(&selected, 5, true);

        let victims: Vec<usize> = doomed.iter().collect();
        assert_eq!(victims, vec![3, 4]);
    }

    #[test]
    fn unconfirmed_selection_evicts_nothing() {
        let selected = set_of(5, &[0, 1, 2]);
        let doomed = plan_evictions(&selected, 5, false);

        assert!(doomed.is_empty());
    }

    #[test]
    fn whole_cluster_evicts_nothing() {
        let selected = set_of(3, &[0, 1, 2]);
        let doomed = plan_evictions(&selected, 3, true);

        assert!(doomed.is_empty());
    }

    #[test]
    fn plan_is_disjoint_from_selection() {
        let selected = set_of(6, &[1, 4]);
        let doomed = plan_evictions(&selected, 6, true);

        for idx in doomed.iter() {
            assert!(!selected.contains(idx));
        }
        assert_eq!(doomed.count() + selected.count(), 6);
    }
}
