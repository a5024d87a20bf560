//! Surviving-cluster selection among discovered components.

use schism_graph::Component;

/// Pick the component with the most server members.
///
/// Ties resolve to the component discovered first - equivalently, the one
/// containing the lowest starting index, since discovery scans starting
/// indices in ascending order. The strictly-greater comparison preserves that: a later
/// component only displaces the champion by beating it outright.
///
/// Returns `None` only for an empty component list, which a non-empty
/// snapshot can never produce.
pub fn pick_largest(components: &[Component]) -> Option<&Component> {
    let mut best: Option<&Component> = None;

    for candidate in components {
        let displaces = match best {
            Some(current) => candidate.server_count() > current.server_count(),
            None => true,
        };
        if displaces {
            best = Some(candidate);
        }
    }

    best
}
