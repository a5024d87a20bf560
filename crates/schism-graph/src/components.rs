//! Connected component discovery over a pairwise reachability relation.
//!
//! The relation is directional and not assumed symmetric. For grouping, an
//! edge between two indices exists whenever *either* direction reports
//! reachable: a one-way open link is enough evidence to keep two members in
//! the same component. The stricter directional confirmation happens after
//! selection, not here.
//!
//! Traversal uses an explicit work-list instead of recursion, so the call
//! stack stays flat regardless of component size. Component membership does
//! not depend on the push/pop order; the outer scan over starting indices is
//! ascending, which fixes the discovery order downstream tie-breaks rely on.

use crate::bitset::BitIndexSet;

/// A maximal group of node indices connected under the symmetrized relation.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Component {
    members: BitIndexSet,
    node_count: usize,
    server_count: usize,
}

impl Component {
    fn new(capacity: usize) -> Self {
        Self {
            members: BitIndexSet::new(capacity),
            node_count: 0,
            server_count: 0,
        }
    }

    /// The member indices as a bitset.
    pub fn members(&self) -> &BitIndexSet {
        &self.members
    }

    /// Total members in this component.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Server (non-client) members in this component.
    pub fn server_count(&self) -> usize {
        self.server_count
    }

    /// Whether the given index belongs to this component.
    pub fn contains(&self, index: usize) -> bool {
        self.members.contains(index)
    }

    fn absorb(&mut self, index: usize, is_server: bool) {
        self.members.insert(index);
        self.node_count += 1;
        if is_server {
            self.server_count += 1;
        }
    }
}

/// Marker set ensuring each index is assigned to exactly one component
/// during a single discovery pass. Constructed fresh per pass and threaded
/// explicitly through the traversal.
#[derive(Debug)]
struct VisitedSet(BitIndexSet);

impl VisitedSet {
    fn new(capacity: usize) -> Self {
        Self(BitIndexSet::new(capacity))
    }

    fn mark(&mut self, index: usize) {
        self.0.insert(index);
    }

    fn is_marked(&self, index: usize) -> bool {
        self.0.contains(index)
    }
}

/// Partition the index space `0..node_count` into maximal connected
/// components under the symmetrized reachability relation.
///
/// `is_client(i)` reports whether the member at index `i` is a client;
/// `reach(a, b)` is the directional reachability judgment. The relation is
/// queried at most once per ordered pair per traversal step, O(n²) overall.
///
/// Components are returned in discovery order: the component containing the
/// lowest unvisited index comes first. Every index lands in exactly one
/// component; an isolated node yields a singleton.
///
/// An empty index space yields no components; callers treat a non-empty
/// snapshot as a precondition and enforce it at their boundary.
pub fn find_components<C, R>(node_count: usize, mut is_client: C, mut reach: R) -> Vec<Component>
where
    C: FnMut(usize) -> bool,
    R: FnMut(usize, usize) -> bool,
{
    let mut visited = VisitedSet::new(node_count);
    let mut components = Vec::new();

    for start in 0..node_count {
        if visited.is_marked(start) {
            continue;
        }

        let mut component = Component::new(node_count);
        grow(
            &mut component,
            &mut visited,
            start,
            node_count,
            &mut is_client,
            &mut reach,
        );
        components.push(component);
    }

    components
}

/// Grow one component from `start` using an explicit work-list.
///
/// Indices are marked visited when pushed, so each enters the list once.
fn grow<C, R>(
    component: &mut Component,
    visited: &mut VisitedSet,
    start: usize,
    node_count: usize,
    is_client: &mut C,
    reach: &mut R,
) where
    C: FnMut(usize) -> bool,
    R: FnMut(usize, usize) -> bool,
{
    let mut pending = vec![start];
    visited.mark(start);

    while let Some(index) = pending.pop() {
        component.absorb(index, !is_client(index));

        for other in 0..node_count {
            if visited.is_marked(other) {
                continue;
            }
            // Either direction merges the pair for grouping purposes.
            if reach(index, other) || reach(other, index) {
                visited.mark(other);
                pending.push(other);
            }
        }
    }
}
