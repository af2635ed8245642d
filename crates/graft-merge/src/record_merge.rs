//! Key-wise deep combination of two records.

use graft_value::{Record, ValueKind};

use crate::error::MergeResult;
use crate::value_merge::merge_value;

/// Merge every entry of `source` into `dest`.
///
/// Scalar source values always replace whatever the destination holds under
/// the same key, containers included. Container source values merge
/// recursively with a matching destination container, or land as deep
/// copies when the key is absent.
///
/// # Errors
///
/// Fails when a source container meets a destination value of a different
/// kind under the same key, or when recursion fails further down.
pub fn merge_records(dest: &mut Record, source: &Record) -> MergeResult<()> {
    for (key, value) in source {
        if ValueKind::of(value).is_scalar() {
            // source wins on scalars
            dest.insert(key.clone(), value.clone());
            continue;
        }

        match dest.get_mut(key) {
            Some(existing) => merge_value(existing, value)?,
            None => {
                // clone, never alias
                dest.insert(key.clone(), value.clone());
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MergeError;
    use serde_json::json;

    fn record(value: serde_json::Value) -> Record {
        match value {
            serde_json::Value::Object(entries) => entries,
            other => panic!("expected a record, got {other}"),
        }
    }

    #[test]
    fn combines_nested_records_deeply() {
        let mut dest = record(json!({"a": {"x": 1, "shared": {"old": true}}}));
        let source = record(json!({"a": {"y": 2, "shared": {"new": false}}}));

        merge_records(&mut dest, &source).unwrap();
        assert_eq!(
            serde_json::Value::Object(dest),
            json!({"a": {"x": 1, "y": 2, "shared": {"old": true, "new": false}}})
        );
    }

    #[test]
    fn scalar_replaces_container() {
        let mut dest = record(json!({"k": {"nested": true}}));
        let source = record(json!({"k": "flat"}));

        merge_records(&mut dest, &source).unwrap();
        assert_eq!(dest["k"], json!("flat"));
    }

    #[test]
    fn container_under_scalar_key_conflicts() {
        let mut dest = record(json!({"k": "flat"}));
        let source = record(json!({"k": {"nested": true}}));

        let err = merge_records(&mut dest, &source).unwrap_err();
        assert!(matches!(
            err,
            MergeError::Incompatible {
                dest: ValueKind::Scalar,
                src: ValueKind::Record,
            }
        ));
    }

    #[test]
    fn absent_keys_land_as_deep_copies() {
        let mut dest = record(json!({}));
        let source = record(json!({"cfg": {"retries": 3}}));

        merge_records(&mut dest, &source).unwrap();
        dest.get_mut("cfg").unwrap()["retries"] = json!(5);

        assert_eq!(source["cfg"]["retries"], json!(3));
    }

    #[test]
    fn destination_only_keys_survive() {
        let mut dest = record(json!({"keep": 1, "shared": {"a": true}}));
        let source = record(json!({"shared": {"b": false}}));

        merge_records(&mut dest, &source).unwrap();
        assert_eq!(dest["keep"], json!(1));
        assert_eq!(dest["shared"], json!({"a": true, "b": false}));
    }

    #[test]
    fn empty_source_is_a_noop() {
        let mut dest = record(json!({"k": [1, {"x": 2}]}));
        let snapshot = dest.clone();

        merge_records(&mut dest, &Record::new()).unwrap();
        assert_eq!(dest, snapshot);
    }
}
