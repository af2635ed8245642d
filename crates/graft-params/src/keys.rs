//! Key lists accepted by every selection operation.
//!
//! Call sites name keys in whatever shape is at hand: a single literal, an
//! array of literals, a slice, or an owned `Vec`. [`KeyList`] normalizes
//! them all to one ordered, duplicate-preserving list so that selection
//! code never branches on input shape.

/// An ordered list of record keys.
///
/// Order and duplicates are preserved exactly as given; selection
/// operations decide what either means.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyList(Vec<String>);

impl KeyList {
    /// Number of keys in the list.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list names no keys at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `key` appears anywhere in the list.
    pub fn contains(&self, key: &str) -> bool {
        self.0.iter().any(|k| k == key)
    }

    /// Iterate over the keys in order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    /// Consume the list, yielding the underlying keys.
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<&str> for KeyList {
    fn from(key: &str) -> Self {
        Self(vec![key.to_string()])
    }
}

impl From<String> for KeyList {
    fn from(key: String) -> Self {
        Self(vec![key])
    }
}

impl<const N: usize> From<[&str; N]> for KeyList {
    fn from(keys: [&str; N]) -> Self {
        Self(keys.iter().map(|key| key.to_string()).collect())
    }
}

impl From<&[&str]> for KeyList {
    fn from(keys: &[&str]) -> Self {
        Self(keys.iter().map(|key| key.to_string()).collect())
    }
}

impl From<Vec<String>> for KeyList {
    fn from(keys: Vec<String>) -> Self {
        Self(keys)
    }
}

impl From<Vec<&str>> for KeyList {
    fn from(keys: Vec<&str>) -> Self {
        Self(keys.iter().map(|key| key.to_string()).collect())
    }
}

impl FromIterator<String> for KeyList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for KeyList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a KeyList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
