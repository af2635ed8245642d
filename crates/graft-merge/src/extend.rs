//! Shallow record extension.

use graft_value::Record;

/// Copy every top-level entry of every source into `dest`, left to right.
///
/// No recursion and no kind checks: a source value lands as a clone under
/// its key, replacing whatever was there. Later sources win over earlier
/// ones. Total -- extending never fails.
pub fn extend<'a, I>(dest: &mut Record, sources: I)
where
    I: IntoIterator<Item = &'a Record>,
{
    for source in sources {
        for (key, value) in source {
            dest.insert(key.clone(), value.clone());
        }
    }
}
