//! Title filtering against configured ignore words

/// Check whether a title is exempt from reminders
///
/// Matching is case-insensitive substring, not whole-word: "WIP-123"
/// matches the ignore word "wip". An empty ignore list allows everything.
pub fn is_title_allowed(title: &str, ignore_words: &[String]) -> bool {
    let title = title.to_lowercase();
    !ignore_words
        .iter()
        .any(|word| title.contains(&word.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_empty_ignore_list_allows_everything() {
        assert!(is_title_allowed("WIP: anything at all", &[]));
    }

    #[test]
    fn test_case_insensitive_match() {
        assert!(!is_title_allowed("WIP: fix bug", &words(&["wip"])));
        assert!(!is_title_allowed("wip: fix bug", &words(&["WIP"])));
    }

    #[test]
    fn test_substring_not_whole_word() {
        assert!(!is_title_allowed("WIP-123 refactor parser", &words(&["wip"])));
    }

    #[test]
    fn test_any_ignore_word_rejects() {
        let ignore = words(&["draft", "wip"]);
        assert!(!is_title_allowed("DRAFT: new api", &ignore));
        assert!(is_title_allowed("Add feature", &ignore));
    }
}
