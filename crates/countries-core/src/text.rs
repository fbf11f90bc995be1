// crates/countries-core/src/text.rs
//! Case folding used by every name and region comparison.

/// Folded form of `s` used for comparisons.
///
/// Full Unicode lowercasing, so `"ÅLAND"` folds to `"åland"`. Accents are
/// kept: a search for `"aland"` does not match `"Åland Islands"`.
///
/// ```rust
/// use countries_core::text::fold_key;
/// assert_eq!(fold_key("Côte d'Ivoire"), "côte d'ivoire");
/// ```
#[inline]
pub fn fold_key(s: &str) -> String {
    s.to_lowercase()
}

/// Case-insensitive equality.
#[inline]
pub fn equals_folded(a: &str, b: &str) -> bool {
    a == b || fold_key(a) == fold_key(b)
}

/// Case-insensitive substring test. An empty needle matches everything.
#[inline]
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || fold_key(haystack).contains(&fold_key(needle))
}

/// Joins display names with `", "`, or `None` when there is nothing to join.
pub fn join_names<'a, I>(names: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let joined = names
        .into_iter()
        .filter(|n| !n.is_empty())
        .collect::<Vec<_>>()
        .join(", ");
    (!joined.is_empty()).then_some(joined)
}
