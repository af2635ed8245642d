//! Error types for merge operations.

use graft_value::ValueKind;

/// Errors that can occur during merge operations.
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    /// The dispatcher was asked to combine two values of differing kind
    /// (for example a record into a sequence), at any recursion depth.
    #[error("incompatible merge: cannot merge {src} into {dest}")]
    Incompatible { dest: ValueKind, src: ValueKind },

    /// Neither operand of a dispatched pairwise merge is a container.
    /// Scalar conflicts are resolved inside record merges by overwriting,
    /// never through the dispatcher.
    #[error("unsupported merge between {kind} values")]
    Unsupported { kind: ValueKind },
}

/// Convenience alias for merge results.
pub type MergeResult<T> = Result<T, MergeError>;
