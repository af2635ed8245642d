//! Value kind classification.
//!
//! Every merge and selection decision in Graft branches on one question: is
//! this value a record, a sequence, or a scalar? [`ValueKind`] answers it in
//! a single place so kind checks are never scattered ad hoc.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A key-value record: string keys mapping to values of any kind.
///
/// Key order is not semantically significant anywhere in Graft.
pub type Record = Map<String, Value>;

/// An ordered sequence of values of any kind, possibly mixed across positions.
pub type Sequence = Vec<Value>;

/// The three structural kinds a value can have.
///
/// Classification is total and deterministic: the same value always
/// classifies the same way, and a sequence is never classified as a record
/// even though both support keyed-style access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    /// A key-value mapping (`Value::Object`).
    Record,
    /// An ordered list (`Value::Array`).
    Sequence,
    /// Anything else: null, booleans, numbers, strings. Atomic for merge
    /// purposes.
    Scalar,
}

impl ValueKind {
    /// Classify a value.
    ///
    /// # Examples
    ///
    /// ```
    /// use graft_value::ValueKind;
    /// use serde_json::json;
    ///
    /// assert_eq!(ValueKind::of(&json!({"a": 1})), ValueKind::Record);
    /// assert_eq!(ValueKind::of(&json!([1, 2])), ValueKind::Sequence);
    /// assert_eq!(ValueKind::of(&json!("text")), ValueKind::Scalar);
    /// ```
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => Self::Record,
            Value::Array(_) => Self::Sequence,
            _ => Self::Scalar,
        }
    }

    /// Returns `true` if the kind is [`ValueKind::Scalar`].
    pub fn is_scalar(self) -> bool {
        self == Self::Scalar
    }

    /// Returns `true` if the kind is a container (record or sequence).
    pub fn is_container(self) -> bool {
        !self.is_scalar()
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Record => write!(f, "record"),
            Self::Sequence => write!(f, "sequence"),
            Self::Scalar => write!(f, "scalar"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn records_classify_as_record() {
        assert_eq!(ValueKind::of(&json!({})), ValueKind::Record);
        assert_eq!(ValueKind::of(&json!({"a": [1, 2]})), ValueKind::Record);
    }

    #[test]
    fn sequences_classify_as_sequence() {
        assert_eq!(ValueKind::of(&json!([])), ValueKind::Sequence);
        assert_eq!(ValueKind::of(&json!([{"a": 1}])), ValueKind::Sequence);
    }

    #[test]
    fn everything_else_classifies_as_scalar() {
        assert_eq!(ValueKind::of(&json!(null)), ValueKind::Scalar);
        assert_eq!(ValueKind::of(&json!(true)), ValueKind::Scalar);
        assert_eq!(ValueKind::of(&json!(42)), ValueKind::Scalar);
        assert_eq!(ValueKind::of(&json!(1.5)), ValueKind::Scalar);
        assert_eq!(ValueKind::of(&json!("text")), ValueKind::Scalar);
    }

    #[test]
    fn classification_is_consistent() {
        let value = json!({"nested": [1, {"deep": null}]});
        assert_eq!(ValueKind::of(&value), ValueKind::of(&value));
    }

    #[test]
    fn sequence_is_never_a_record() {
        let sequence = json!(["a", "b"]);
        assert_ne!(ValueKind::of(&sequence), ValueKind::Record);
    }

    #[test]
    fn scalar_and_container_predicates() {
        assert!(ValueKind::Scalar.is_scalar());
        assert!(!ValueKind::Record.is_scalar());
        assert!(ValueKind::Record.is_container());
        assert!(ValueKind::Sequence.is_container());
        assert!(!ValueKind::Scalar.is_container());
    }

    #[test]
    fn kind_display() {
        assert_eq!(format!("{}", ValueKind::Record), "record");
        assert_eq!(format!("{}", ValueKind::Sequence), "sequence");
        assert_eq!(format!("{}", ValueKind::Scalar), "scalar");
    }

    #[test]
    fn serde_roundtrip() {
        let kind = ValueKind::Sequence;
        let json = serde_json::to_string(&kind).unwrap();
        let parsed: ValueKind = serde_json::from_str(&json).unwrap();
        assert_eq!(kind, parsed);
    }
}
