//! In-process filter predicates for content listings.
//!
//! Listing filters are applied over the full fetched result set rather than
//! pushed down into SQL, so the matching rules live here where both the
//! manager and any future tooling can use them.

/// Case-insensitive substring match on a content title.
pub fn title_contains(title: &str, needle: &str) -> bool {
    title.to_lowercase().contains(&needle.to_lowercase())
}

/// Case-insensitive exact match against any genre in the list.
///
/// Exact, not substring: `"Act"` does not match `"Action"`.
pub fn has_genre(genres: &[String], wanted: &str) -> bool {
    genres.iter().any(|genre| genre.eq_ignore_ascii_case(wanted))
}
