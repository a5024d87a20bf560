//! Error types for schism-resolver.

use thiserror::Error;

/// Result type for resolver operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during a resolution pass.
///
/// The core defines no recoverable error states of its own; the one failure
/// it can report is a violated caller precondition. A pass either returns a
/// complete decision or has not run at all - no partial state survives an
/// error.
#[derive(Debug, Error)]
pub enum Error {
    /// The topology snapshot contained no members.
    #[error("topology snapshot is empty")]
    EmptyTopology,
}
