//! Merge engine for Graft.
//!
//! Deep, pairwise merging of records and sequences, plus a shallow
//! extension helper for flat overlays. Records combine key-wise and
//! sequences combine positionally; scalar conflicts inside records resolve
//! by overwrite, and scalar appends to sequences are de-duplicated.
//!
//! # Key Operations
//!
//! - [`merge`] -- fold any number of source values into a destination
//! - [`merge_value`] -- pairwise dispatch over one destination/source pair
//! - [`merge_records`] -- key-wise deep combination of two records
//! - [`merge_sequences`] -- positional combination of two sequences
//! - [`extend()`] -- shallow, infallible overlay of record entries

pub mod error;
pub mod extend;
pub mod record_merge;
pub mod sequence_merge;
pub mod value_merge;

pub use error::{MergeError, MergeResult};
pub use extend::extend;
pub use record_merge::merge_records;
pub use sequence_merge::merge_sequences;
pub use value_merge::{merge, merge_value};
