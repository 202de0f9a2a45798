//! Genre mutation rules for content records.
//!
//! Both operations are pure list transforms; the caller is responsible for
//! fetching the current list and persisting the result as a full update.

/// An add-genres request named a genre that is already on the record.
///
/// Carries the offending genre for logging; the `Display` message is the
/// stable client-facing error string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Genre already exists")]
pub struct DuplicateGenre {
    /// The first candidate that was already in the list.
    pub genre: String,
}

/// Append `additions` to `existing`, rejecting duplicates.
///
/// Candidates are scanned in order; the first one already present in
/// `existing` (case-sensitive exact match) aborts the whole operation, so
/// either every addition is applied or none are. Candidates after the
/// conflicting one are never evaluated. On success the result is `existing`
/// followed by all additions in input order.
///
/// Duplicates are only checked against `existing`, not against earlier
/// additions in the same request.
pub fn merge_genres(
    existing: &[String],
    additions: &[String],
) -> Result<Vec<String>, DuplicateGenre> {
    let mut merged = existing.to_vec();
    for genre in additions {
        if existing.contains(genre) {
            return Err(DuplicateGenre {
                genre: genre.clone(),
            });
        }
        merged.push(genre.clone());
    }
    Ok(merged)
}

/// Remove every genre of `existing` whose value appears in `removals`
/// (case-sensitive exact match), preserving the order of the survivors.
///
/// Genres named in `removals` but not present are ignored, so removal is
/// idempotent.
pub fn remove_genres(existing: &[String], removals: &[String]) -> Vec<String> {
    existing
        .iter()
        .filter(|genre| !removals.contains(*genre))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn genres(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn merge_appends_in_input_order() {
        let result = merge_genres(&genres(&["Action"]), &genres(&["Drama", "Comedy"])).unwrap();
        assert_eq!(result, genres(&["Action", "Drama", "Comedy"]));
    }

    #[test]
    fn merge_into_empty_list() {
        let result = merge_genres(&[], &genres(&["Drama"])).unwrap();
        assert_eq!(result, genres(&["Drama"]));
    }

    #[test]
    fn merge_rejects_first_duplicate() {
        let err = merge_genres(
            &genres(&["Action", "Drama"]),
            &genres(&["Comedy", "Drama", "Horror"]),
        )
        .unwrap_err();
        assert_eq!(err.genre, "Drama");
    }

    #[test]
    fn merge_is_all_or_nothing() {
        // A conflict anywhere in the input means nothing is staged.
        let existing = genres(&["Action"]);
        let result = merge_genres(&existing, &genres(&["Drama", "Action"]));
        assert!(result.is_err());
        assert_eq!(existing, genres(&["Action"]));
    }

    #[test]
    fn merge_duplicate_match_is_case_sensitive() {
        let result = merge_genres(&genres(&["Action"]), &genres(&["action"])).unwrap();
        assert_eq!(result, genres(&["Action", "action"]));
    }

    #[test]
    fn merge_checks_only_the_existing_list() {
        // Repeats within one request are not rejected.
        let result = merge_genres(&[], &genres(&["Drama", "Drama"])).unwrap();
        assert_eq!(result, genres(&["Drama", "Drama"]));
    }

    #[test]
    fn remove_drops_named_genres() {
        let result = remove_genres(&genres(&["Action", "Drama", "Comedy"]), &genres(&["Drama"]));
        assert_eq!(result, genres(&["Action", "Comedy"]));
    }

    #[test]
    fn remove_missing_genre_is_a_noop() {
        let result = remove_genres(&genres(&["Action"]), &genres(&["Horror"]));
        assert_eq!(result, genres(&["Action"]));
    }

    #[test]
    fn remove_is_idempotent() {
        let once = remove_genres(&genres(&["Action", "Drama"]), &genres(&["Action"]));
        let twice = remove_genres(&once, &genres(&["Action"]));
        assert_eq!(once, twice);
    }

    #[test]
    fn remove_is_case_sensitive() {
        let result = remove_genres(&genres(&["Action"]), &genres(&["action"]));
        assert_eq!(result, genres(&["Action"]));
    }
}
