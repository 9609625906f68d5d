//! Case-insensitive text matching for lead list refinement.
//!
//! List filtering happens in-process on the caller's full lead set rather
//! than in SQL, which keeps one indexed query per request and lets the text
//! search span several columns without a trigram index.

/// True when `needle` occurs in `haystack`, ignoring ASCII and Unicode case.
///
/// An empty or whitespace-only needle matches everything; callers should
/// trim before deciding whether a filter is present at all.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// True when `needle` occurs in any of the given optional fields.
///
/// Absent fields are skipped, so a lead with no company can still match on
/// name or email.
pub fn any_contains_ci<'a>(
    fields: impl IntoIterator<Item = Option<&'a str>>,
    needle: &str,
) -> bool {
    fields
        .into_iter()
        .flatten()
        .any(|field| contains_ci(field, needle))
}
