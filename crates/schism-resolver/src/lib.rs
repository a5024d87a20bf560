//! Schism Split-Brain Resolver
//!
//! Decides, during a detected communication problem, which subset of cluster
//! members remains active and which members are evicted.
//!
//! # Pipeline
//!
//! One [`resolve`] call runs a single pass over one immutable snapshot:
//!
//! 1. **Discover** - partition members into maximal connected components
//!    under the symmetrized reachability relation ([`schism_graph`])
//! 2. **Select** - pick the component with the most server members, ties to
//!    the earliest-discovered
//! 3. **Validate** - re-check the selection under the stricter directional
//!    test between every pair of its members
//! 4. **Plan** - evict the complement, only when validation passed and the
//!    selection is a strict subset of the snapshot
//!
//! When the selection cannot be confirmed safe, nothing is evicted and the
//! caller re-invokes resolution on its next detection cycle. There is no
//! retry, re-probing, or persistent state inside the resolver.
//!
//! # Collaborators
//!
//! Snapshot acquisition, reachability probing, and the mechanics of removing
//! a member all live behind the [`ClusterMember`], [`ReachabilityOracle`],
//! and [`EvictionSink`] traits. The resolver is single-threaded and
//! synchronous: one call in, one decision out.
//!
//! # Example
//!
//! ```
//! use schism_resolver::{resolve, ClusterMember};
//!
//! #[derive(Clone)]
//! struct Member { client: bool, zone: u8 }
//!
//! impl ClusterMember for Member {
//!     fn is_client(&self) -> bool { self.client }
//! }
//!
//! let nodes = vec![
//!     Member { client: false, zone: 0 },
//!     Member { client: false, zone: 0 },
//!     Member { client: true, zone: 1 },
//! ];
//!
//! // Members reach each other only within their zone.
//! let oracle = |a: &Member, b: &Member| a.zone == b.zone;
//!
//! let mut victims: Vec<Member> = Vec::new();
//! let resolution = resolve(&nodes, &oracle, &mut victims)?;
//!
//! assert!(resolution.fully_connected);
//! assert_eq!(victims.len(), 1);
//! # Ok::<(), schism_resolver::Error>(())
//! ```

mod error;
mod member;
mod plan;
mod resolve;
mod select;
mod validate;

pub use error::{Error, Result};
pub use member::{ClusterMember, EvictionSink, ReachabilityOracle};
pub use plan::plan_evictions;
pub use resolve::{resolve, Resolution};
pub use select::pick_largest;
pub use validate::is_fully_connected;

// The graph layer is part of the public decision surface.
pub use schism_graph::{find_components, BitIndexSet, Component};
