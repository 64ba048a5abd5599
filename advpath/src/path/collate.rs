//! Locale-aware ordering of path strings.
//!
//! Sorting uses the ICU root collation so that accented and non-latin
//! fragments land where a reader expects rather than at the end of the byte
//! range. Strings the collator considers equal fall back to code-point order,
//! which keeps the ordering consistent with exact string equality.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};

thread_local! {
    static COLLATOR: Option<Collator> =
        match Collator::try_new(&Default::default(), CollatorOptions::new()) {
            Ok(collator) => Some(collator),
            Err(err) => {
                log::warn!("collation data unavailable, using code-point order: {err}");
                None
            }
        };
}

/// Compare two path strings for display order.
///
/// Returns [`Ordering::Equal`] only when the strings are identical.
///
/// # Examples
///
/// ```
/// use advpath::path::compare_paths;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare_paths("/a/b", "/a/b"), Ordering::Equal);
/// assert_eq!(compare_paths("/a/é", "/a/f"), Ordering::Less);
/// assert_eq!(compare_paths("/a/Z", "/a/b"), Ordering::Greater);
/// ```
#[must_use]
pub fn compare_paths(a: &str, b: &str) -> Ordering {
    COLLATOR
        .with(|collator| match collator {
            Some(collator) => collator.compare(a, b),
            None => a.cmp(b),
        })
        .then_with(|| a.cmp(b))
}
