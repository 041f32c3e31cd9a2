//! Release decision primitives: label policy and version selection.

/// Release-intent label vocabulary and validation.
pub mod label;

/// Tag selection and version increment rules.
pub mod version;

use crate::error::{MergetagError, Result};

/// Select the single element of a collection, classifying empty and
/// over-full collections as distinct errors.
pub(crate) fn single<T>(
    mut items: Vec<T>,
    on_empty: impl FnOnce() -> MergetagError,
    on_ambiguous: impl FnOnce(usize) -> MergetagError,
) -> Result<T> {
    match items.len() {
        1 => Ok(items.remove(0)),
        0 => Err(on_empty()),
        n => Err(on_ambiguous(n)),
    }
}
