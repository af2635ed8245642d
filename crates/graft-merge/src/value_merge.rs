//! Pairwise merge dispatch and the multi-source fold.
//!
//! [`merge_value`] combines exactly two values of matching kind, delegating
//! to the record or sequence merger; those recurse back through the
//! dispatcher for nested containers. [`merge`] folds any number of sources
//! into one destination, left to right.
//!
//! # Invariants
//!
//! - After a successful merge, every key/index present in the source is
//!   reflected in the destination; destination-only entries survive
//!   unchanged.
//! - Sources are only ever read; containers are introduced into the
//!   destination as deep copies, never as aliases.
//! - Errors propagate immediately. Destination portions already merged stay
//!   merged; there is no rollback.

use serde_json::Value;
use tracing::debug;

use graft_value::ValueKind;

use crate::error::{MergeError, MergeResult};
use crate::record_merge::merge_records;
use crate::sequence_merge::merge_sequences;

/// Deep-merge `source` into `dest`.
///
/// Both operands must classify as the same container kind: two records or
/// two sequences. A scalar never merges with anything at this level; scalar
/// source values only win over destination values inside a record merge.
///
/// # Errors
///
/// - [`MergeError::Incompatible`] when the operands classify differently.
/// - [`MergeError::Unsupported`] when both operands are scalar.
pub fn merge_value(dest: &mut Value, source: &Value) -> MergeResult<()> {
    let dest_kind = ValueKind::of(dest);
    let source_kind = ValueKind::of(source);
    if dest_kind != source_kind {
        return Err(MergeError::Incompatible {
            dest: dest_kind,
            src: source_kind,
        });
    }

    match (dest, source) {
        (Value::Object(dest), Value::Object(source)) => merge_records(dest, source),
        (Value::Array(dest), Value::Array(source)) => merge_sequences(dest, source),
        _ => Err(MergeError::Unsupported { kind: dest_kind }),
    }
}

/// Fold `sources` into `dest` left to right via pairwise merges.
///
/// Later sources win wherever values collide. The first failure aborts the
/// fold; sources already folded stay merged.
///
/// # Examples
///
/// ```
/// use graft_merge::merge;
/// use serde_json::json;
///
/// let mut dest = json!({"foo": "bar", "baz": {"bing": "beep"}});
/// let source = json!({"foo": "zoo", "baz": {"you": "too"}});
/// merge(&mut dest, [&source]).unwrap();
/// assert_eq!(dest, json!({"foo": "zoo", "baz": {"bing": "beep", "you": "too"}}));
/// ```
///
/// # Errors
///
/// Propagates the first [`MergeError`] produced by a pairwise merge.
pub fn merge<'a, I>(dest: &mut Value, sources: I) -> MergeResult<()>
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut folded = 0usize;
    for source in sources {
        merge_value(dest, source)?;
        folded += 1;
    }
    debug!(sources = folded, "merged sources into destination");
    Ok(())
}
