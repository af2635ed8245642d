//! Key selection for Graft.
//!
//! This crate sits next to the merge engine and answers the other half of
//! the parameter-handling problem: once records exist, which keys may pass
//! through? It offers reusable include/exclude projections and a wrapper
//! over one mutable record for required-key checks and allow-list slicing.
//!
//! # Modules
//!
//! - [`error`] -- Error types for key-selection operations
//! - [`keys`] -- The [`KeyList`] accepted by every operation
//! - [`select`] -- Reusable [`include`]/[`exclude`] projections
//! - [`mod@params`] -- The [`Params`] wrapper: only/except/require/permit/slice

pub mod error;
pub mod keys;
pub mod params;
pub mod select;

pub use error::{ParamsError, Result};
pub use keys::KeyList;
pub use params::{params, Params};
pub use select::{exclude, include, Exclude, Include};
