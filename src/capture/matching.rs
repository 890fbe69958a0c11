//! Title matching for window lookup
//!
//! One-shot, first-match resolution of a [`TitleQuery`] against enumerated
//! window titles. Two strategies, matching the query variants:
//!
//! 1. **Substring** - case-insensitive substring search on the title
//! 2. **Pattern** - regex match on the title
//!
//! Enumeration order decides ties; there is no scoring, no fuzzy matching,
//! and no retry.

use crate::model::{TitleQuery, WindowRef};

/// Returns whether a single window title satisfies the query
pub fn title_matches(query: &TitleQuery, title: &str) -> bool {
    match query {
        TitleQuery::Substring(needle) => {
            title.to_lowercase().contains(&needle.to_lowercase())
        }
        TitleQuery::Pattern(pattern) => pattern.is_match(title),
    }
}

/// Finds the first window whose title matches the query
///
/// `windows` is the provider's enumeration snapshot, in enumeration order.
///
/// # Returns
///
/// - `Some(WindowRef)` - first matching window
/// - `None` - no match
pub fn find_first(query: &TitleQuery, windows: &[(WindowRef, String)]) -> Option<WindowRef> {
    for (window, title) in windows {
        if title_matches(query, title) {
            tracing::debug!("Title query '{}' matched window {} (title: {})", query, window, title);
            return Some(*window);
        }
    }

    tracing::debug!("Title query '{}' matched no window out of {}", query, windows.len());
    None
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    use super::*;

    fn sample_windows() -> Vec<(WindowRef, String)> {
        vec![
            (WindowRef::from_raw(0x10), "Mozilla Firefox".to_string()),
            (WindowRef::from_raw(0x20), "Untitled - Notepad".to_string()),
            (WindowRef::from_raw(0x30), "Calculator".to_string()),
        ]
    }

    #[test]
    fn test_substring_match() {
        let windows = sample_windows();
        let result = find_first(&"Notepad".into(), &windows);
        assert_eq!(result, Some(WindowRef::from_raw(0x20)));
    }

    #[test]
    fn test_substring_match_case_insensitive() {
        let windows = sample_windows();
        let result = find_first(&"FIREFOX".into(), &windows);
        assert_eq!(result, Some(WindowRef::from_raw(0x10)));
    }

    #[test]
    fn test_substring_match_first_wins() {
        let mut windows = sample_windows();
        windows.push((WindowRef::from_raw(0x40), "Notepad++".to_string()));

        let result = find_first(&"Notepad".into(), &windows);
        assert_eq!(result, Some(WindowRef::from_raw(0x20)));
    }

    #[test]
    fn test_substring_no_match() {
        let windows = sample_windows();
        assert_eq!(find_first(&"Chrome".into(), &windows), None);
    }

    #[test]
    fn test_pattern_match() {
        let windows = sample_windows();
        let query = TitleQuery::Pattern(Regex::new("Untitled - .*").unwrap());
        assert_eq!(find_first(&query, &windows), Some(WindowRef::from_raw(0x20)));
    }

    #[test]
    fn test_pattern_is_case_sensitive_unless_flagged() {
        let windows = sample_windows();

        let strict = TitleQuery::Pattern(Regex::new("firefox").unwrap());
        assert_eq!(find_first(&strict, &windows), None);

        let relaxed = TitleQuery::Pattern(Regex::new("(?i)firefox").unwrap());
        assert_eq!(find_first(&relaxed, &windows), Some(WindowRef::from_raw(0x10)));
    }

    #[test]
    fn test_empty_window_list() {
        let windows: Vec<(WindowRef, String)> = vec![];
        assert_eq!(find_first(&"anything".into(), &windows), None);
    }
}
