//! Foundation types for Graft.
//!
//! This crate provides the value vocabulary used throughout the Graft
//! workspace: the [`ValueKind`] classification over JSON-like values and the
//! [`Record`] / [`Sequence`] container aliases. Every other Graft crate
//! depends on `graft-value`.
//!
//! # Key Types
//!
//! - [`ValueKind`] -- Tagged classification of a value as record, sequence, or scalar
//! - [`Record`] -- Key-value mapping (`serde_json::Map<String, Value>`)
//! - [`Sequence`] -- Ordered, index-addressable list (`Vec<Value>`)

pub mod kind;

pub use kind::{Record, Sequence, ValueKind};
