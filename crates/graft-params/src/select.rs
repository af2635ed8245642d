//! Reusable include/exclude projections over records.
//!
//! A projection is configured once with a key list and then applied to any
//! number of source records, producing a fresh record each time. Sources
//! are read in order, so later sources win on shared keys, and they are
//! never modified.

use std::collections::BTreeSet;

use graft_value::Record;

use crate::keys::KeyList;

/// A projection that keeps only the configured keys.
///
/// Built by [`include`].
#[derive(Clone, Debug)]
pub struct Include {
    keys: Vec<String>,
}

/// A projection that drops the configured keys and keeps everything else.
///
/// Built by [`exclude`].
#[derive(Clone, Debug)]
pub struct Exclude {
    keys: BTreeSet<String>,
}

/// Build a projection that selects only `keys` from its sources.
///
/// # Examples
///
/// ```
/// use graft_params::include;
/// use serde_json::json;
///
/// let public = include(["name", "role"]);
/// let account = json!({"name": "ada", "role": "admin", "token": "s3cr3t"});
///
/// let picked = public.apply([account.as_object().unwrap()]);
/// assert_eq!(picked.get("name"), Some(&json!("ada")));
/// assert_eq!(picked.get("role"), Some(&json!("admin")));
/// assert!(picked.get("token").is_none());
/// ```
pub fn include(keys: impl Into<KeyList>) -> Include {
    Include {
        keys: keys.into().into_vec(),
    }
}

/// Build a projection that drops `keys` from its sources.
pub fn exclude(keys: impl Into<KeyList>) -> Exclude {
    Exclude {
        keys: keys.into().into_iter().collect(),
    }
}

impl Include {
    /// Project `sources` down to the configured keys.
    ///
    /// Keys absent from every source are simply absent from the result;
    /// keys present in several sources take the last source's value.
    pub fn apply<'a, I>(&self, sources: I) -> Record
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let mut result = Record::new();
        for source in sources {
            for key in &self.keys {
                if let Some(value) = source.get(key) {
                    result.insert(key.clone(), value.clone());
                }
            }
        }
        result
    }
}

impl Exclude {
    /// Copy `sources` into a fresh record, skipping the configured keys.
    ///
    /// Keys present in several sources take the last source's value.
    pub fn apply<'a, I>(&self, sources: I) -> Record
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let mut result = Record::new();
        for source in sources {
            for (key, value) in source {
                if !self.keys.contains(key) {
                    result.insert(key.clone(), value.clone());
                }
            }
        }
        result
    }
}
