//! The [`Params`] wrapper: projections, required keys, and allow-list
//! slicing over one mutable record.
//!
//! [`Params::only`] and [`Params::except`] are read-only projections.
//! [`Params::require`] asserts key presence. [`Params::permit`] accumulates
//! an allow-list that [`Params::slice`] finally applies by deleting every
//! non-permitted key from the wrapped record in place.

use std::collections::BTreeSet;

use serde_json::Value;
use tracing::debug;

use graft_value::Record;

use crate::error::{ParamsError, Result};
use crate::keys::KeyList;

/// A borrow of one record plus the allow-list accumulated against it.
///
/// Projections and requirement checks only read the record; the single
/// mutation is [`Params::slice`], which consumes the wrapper.
#[derive(Debug)]
pub struct Params<'a> {
    record: &'a mut Record,
    allowed: BTreeSet<String>,
}

/// Wrap a record for key selection.
///
/// # Examples
///
/// ```
/// use graft_params::params;
/// use serde_json::json;
///
/// let mut account = json!({"name": "ada", "role": "admin", "token": "s3cr3t"})
///     .as_object()
///     .cloned()
///     .unwrap();
///
/// params(&mut account).permit("name").permit("role").slice();
/// assert_eq!(serde_json::Value::Object(account), json!({"name": "ada", "role": "admin"}));
/// ```
pub fn params(record: &mut Record) -> Params<'_> {
    Params::new(record)
}

impl<'a> Params<'a> {
    /// Wrap `record` with an empty allow-list.
    pub fn new(record: &'a mut Record) -> Self {
        Self {
            record,
            allowed: BTreeSet::new(),
        }
    }

    // ---------------------------------------------------------------
    // Projections
    // ---------------------------------------------------------------

    /// A fresh record holding only the named keys.
    ///
    /// Keys absent from the wrapped record are silently skipped. The
    /// wrapped record is not modified.
    pub fn only(&self, keys: impl Into<KeyList>) -> Record {
        let keys = keys.into();
        let mut result = Record::new();
        for key in &keys {
            if let Some(value) = self.record.get(key) {
                result.insert(key.clone(), value.clone());
            }
        }
        result
    }

    /// A fresh record holding everything but the named keys.
    ///
    /// The wrapped record is not modified.
    pub fn except(&self, keys: impl Into<KeyList>) -> Record {
        let keys = keys.into();
        let mut result = Record::new();
        for (key, value) in self.record.iter() {
            if !keys.contains(key) {
                result.insert(key.clone(), value.clone());
            }
        }
        result
    }

    /// Assert that every named key is present in the wrapped record.
    ///
    /// Returns the record on success so call sites can keep reading it.
    ///
    /// # Errors
    ///
    /// [`ParamsError::MissingKey`] naming the first absent key.
    pub fn require(&self, keys: impl Into<KeyList>) -> Result<&Record> {
        let keys = keys.into();
        for key in &keys {
            if !self.record.contains_key(key) {
                return Err(ParamsError::MissingKey {
                    key: key.clone(),
                    record: Value::Object(self.record.clone()).to_string(),
                });
            }
        }
        Ok(self.record)
    }

    // ---------------------------------------------------------------
    // Allow-list
    // ---------------------------------------------------------------

    /// Add the named keys to the allow-list.
    ///
    /// Chainable; the list only takes effect at [`Params::slice`].
    pub fn permit(mut self, keys: impl Into<KeyList>) -> Self {
        let keys = keys.into();
        self.allowed.extend(keys);
        self
    }

    /// Delete every key not on the allow-list from the wrapped record.
    ///
    /// One in-place filter pass; with an empty allow-list this clears the
    /// record entirely.
    pub fn slice(self) {
        let Self { record, allowed } = self;
        let before = record.len();
        record.retain(|key, _| allowed.contains(key));
        debug!(
            kept = record.len(),
            removed = before - record.len(),
            "sliced record to allow-list"
        );
    }
}
