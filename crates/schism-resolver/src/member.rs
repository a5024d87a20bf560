//! Collaborator interfaces: member attributes, reachability probing,
//! eviction dispatch.
//!
//! The resolver is generic over the member type. How a snapshot is obtained,
//! how reachability is actually probed, and how an eviction is carried out
//! all live behind these traits; the core only makes the decision.

/// Attribute surface the resolver needs from a cluster member.
pub trait ClusterMember {
    /// Whether this member is a client. Clients stay grouped with their
    /// component but carry no weight when ranking candidate clusters.
    fn is_client(&self) -> bool;
}

/// Directional, point-in-time reachability judgment between two members.
///
/// Answers are not assumed symmetric, and not assumed stable across
/// resolution passes - only within one pass, which the caller guarantees.
/// A probe that fails outright must be reported as unreachable by the
/// implementation; the resolver has no notion of a probe error.
///
/// Queries may block (network probes); that latency is the implementation's
/// contract, not bounded here.
pub trait ReachabilityOracle<N> {
    /// Whether `from` can currently reach `to`.
    fn reachable(&self, from: &N, to: &N) -> bool;
}

impl<N, F> ReachabilityOracle<N> for F
where
    F: Fn(&N, &N) -> bool,
{
    fn reachable(&self, from: &N, to: &N) -> bool {
        self(from, to)
    }
}

/// Receives the members planned for removal, once each.
///
/// Eviction is fire-and-forget from the resolver's perspective: it must be
/// idempotent and safe even when the member is already gone.
pub trait EvictionSink<N> {
    /// Remove `node` from the active cluster.
    fn evict(&mut self, node: &N);
}

/// Collects victims instead of acting on them. Convenient for embedding the
/// decision into a larger failure-management loop, and for tests.
impl<N: Clone> EvictionSink<N> for Vec<N> {
    fn evict(&mut self, node: &N) {
        self.push(node.clone());
    }
}
