//! Positional combination of two sequences with de-duplicated appends.
//!
//! Source elements pair with destination elements at the same index.
//! Containers of matching kind merge in place; everything else -- scalars,
//! kind mismatches, indexes past the destination's length -- is appended
//! after the walk. Scalars only append when the destination does not
//! already contain an equal element.

use serde_json::Value;

use graft_value::{Sequence, ValueKind};

use crate::error::MergeResult;
use crate::value_merge::merge_value;

/// Merge every element of `source` into `dest`.
///
/// # Errors
///
/// Fails when an in-place positional merge fails deeper in the tree.
/// Pending appends gathered before the failure are discarded; in-place
/// merges already applied are kept.
pub fn merge_sequences(dest: &mut Sequence, source: &Sequence) -> MergeResult<()> {
    let mut pending: Vec<Value> = Vec::new();

    for (index, value) in source.iter().enumerate() {
        if ValueKind::of(value).is_scalar() {
            // structural equality, not identity
            if !dest.contains(value) {
                pending.push(value.clone());
            }
            continue;
        }

        match dest.get_mut(index) {
            Some(existing) if ValueKind::of(existing) == ValueKind::of(value) => {
                merge_value(existing, value)?;
            }
            _ => pending.push(value.clone()),
        }
    }

    dest.append(&mut pending);
    Ok(())
}
