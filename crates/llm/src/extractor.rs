//! Hot take extraction from raw completion text
//!
//! The prompt asks for a numbered list, but the model may not comply.
//! Extraction is a best-effort line scan: lines that do not look like
//! numbered-list items are silently dropped.

/// Split raw completion text into individual hot takes.
///
/// A line counts as a hot take when, after trimming, it starts with one
/// or more ASCII digits followed by a period. The numeric prefix and any
/// whitespace after it are stripped. Order follows the source text, not
/// the numeric labels. Never fails; text with no numbered lines yields
/// an empty vector.
pub fn extract_hot_takes(raw: &str) -> Vec<String> {
    raw.lines()
        .filter_map(|line| strip_list_prefix(line.trim()))
        .map(|take| take.trim().to_string())
        .filter(|take| !take.is_empty())
        .collect()
}

/// Strip a leading "<digits>." prefix, or None when the line has no such
/// prefix.
fn strip_list_prefix(line: &str) -> Option<&str> {
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    line[digits..].strip_prefix('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_numbered_lines_and_drops_prose() {
        let raw = "1. Foo\n2. Bar\n\nNotes: ignore me";
        assert_eq!(extract_hot_takes(raw), vec!["Foo", "Bar"]);
    }

    #[test]
    fn test_no_numbered_lines_yields_empty() {
        assert_eq!(extract_hot_takes("just prose"), Vec::<String>::new());
    }

    #[test]
    fn test_empty_input_yields_empty() {
        assert_eq!(extract_hot_takes(""), Vec::<String>::new());
    }

    #[test]
    fn test_order_follows_text_not_labels() {
        let raw = "2. Second\n1. First";
        assert_eq!(extract_hot_takes(raw), vec!["Second", "First"]);
    }

    #[test]
    fn test_leading_whitespace_and_multi_digit_labels() {
        let raw = "  10. Indented take\n3.Tight take";
        assert_eq!(extract_hot_takes(raw), vec!["Indented take", "Tight take"]);
    }

    #[test]
    fn test_numbered_but_empty_lines_are_dropped() {
        let raw = "1. \n2. Real take\n3.";
        assert_eq!(extract_hot_takes(raw), vec!["Real take"]);
    }

    #[test]
    fn test_period_without_digits_is_not_a_take() {
        assert_eq!(extract_hot_takes(". Foo"), Vec::<String>::new());
    }
}
