//! The single-pass resolution pipeline.
//!
//! Discover → Select → Validate → Plan, invoked anew each time the failure
//! detector reports a communication problem. Every structure is built from
//! the immutable snapshot inside one call and discarded on return; nothing
//! persists across passes, so re-running on an unchanged snapshot and oracle
//! yields the same decision.

use schism_graph::{find_components, BitIndexSet};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::member::{ClusterMember, EvictionSink, ReachabilityOracle};
use crate::plan::plan_evictions;
use crate::select::pick_largest;
use crate::validate::is_fully_connected;

/// Outcome report of one resolution pass.
#[derive(Debug, Clone)]
pub struct Resolution {
    /// Indices of the component chosen to survive.
    pub selected: BitIndexSet,
    /// Whether the selected component passed the pairwise confirmation.
    pub fully_connected: bool,
    /// Indices dispatched for eviction. Empty when the cluster is already
    /// whole or the selection could not be confirmed safe this round.
    pub evicted: BitIndexSet,
}

impl Resolution {
    /// Whether this pass took any destructive action.
    pub fn evicted_any(&self) -> bool {
        !self.evicted.is_empty()
    }
}

/// Resolve a detected communication problem over one topology snapshot.
///
/// Partitions the snapshot into connected components under the symmetrized
/// reachability relation, selects the component with the most server
/// members (ties to earliest-discovered), confirms the selection is fully
/// inter-reachable, and - only then, and only if the selection is a strict
/// subset - hands every remaining member to `sink` once.
///
/// The caller must keep the snapshot and the oracle's answers stable for
/// the duration of the call. Oracle queries may block; the resolver takes
/// no locks, performs no I/O of its own, and implements no timeout.
///
/// # Errors
///
/// Returns [`Error::EmptyTopology`] when `nodes` is empty.
pub fn resolve<N, O, S>(nodes: &[N], oracle: &O, sink: &mut S) -> Result<Resolution>
where
    N: ClusterMember,
    O: ReachabilityOracle<N>,
    S: EvictionSink<N>,
{
    if nodes.is_empty() {
        return Err(Error::EmptyTopology);
    }

    let components = find_components(
        nodes.len(),
        |i| nodes[i].is_client(),
        |a, b| oracle.reachable(&nodes[a], &nodes[b]),
    );
    debug!(
        nodes = nodes.len(),
        components = components.len(),
        "partitioned topology snapshot"
    );

    let Some(selected) = pick_largest(&components) else {
        return Err(Error::EmptyTopology);
    };

    let fully_connected = is_fully_connected(selected.members(), nodes, oracle);
    debug!(
        survivors = selected.node_count(),
        servers = selected.server_count(),
        fully_connected,
        "selected surviving cluster candidate"
    );

    let evicted = plan_evictions(selected.members(), nodes.len(), fully_connected);

    if evicted.is_empty() {
        debug!("no eviction this pass");
    } else {
        warn!(
            evicting = evicted.count(),
            surviving = selected.node_count(),
            "evicting members outside the surviving cluster"
        );
        for index in evicted.iter() {
            sink.evict(&nodes[index]);
        }
    }

    Ok(Resolution {
        selected: selected.members().clone(),
        fully_connected,
        evicted,
    })
}
