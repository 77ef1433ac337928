//! Text sequence transforms
//!
//! Functions accept any slice of string-like values (`&[&str]`, `&[String]`).

use crate::constants::{DOLLAR_PREFIX, EXCLAIM_MARK, QUESTION_MARK, RGB_COLORS, SHORT_WORD_LIMIT};
use crate::domain::parse::parse_int_or_sentinel;

/// Parse each string as a base-10 integer, substituting 0 when unparsable
pub fn strings_to_integers<S: AsRef<str>>(numbers: &[S]) -> Vec<i64> {
    numbers
        .iter()
        .map(|s| parse_int_or_sentinel(s.as_ref()))
        .collect()
}

/// Parse dollar amounts, stripping at most one leading `$`
///
/// Unparsable amounts become 0. `"$$5"` is unparsable since only the first
/// `$` is removed.
pub fn remove_dollars<S: AsRef<str>>(amounts: &[S]) -> Vec<i64> {
    amounts
        .iter()
        .map(|amount| {
            let amount: &str = amount.as_ref();
            let value = amount.strip_prefix(DOLLAR_PREFIX).unwrap_or(amount);
            parse_int_or_sentinel(value)
        })
        .collect()
}

/// Drop questions and uppercase exclamations
///
/// Messages ending in `?` are removed. Messages ending in `!` are uppercased
/// in full. Everything else is kept as is, in order.
pub fn shout_if_exclaiming<S: AsRef<str>>(messages: &[S]) -> Vec<String> {
    messages
        .iter()
        .filter_map(|msg| {
            let msg: &str = msg.as_ref();
            if msg.ends_with(QUESTION_MARK) {
                None
            } else if msg.ends_with(EXCLAIM_MARK) {
                Some(msg.to_uppercase())
            } else {
                Some(msg.to_string())
            }
        })
        .collect()
}

/// Count words shorter than four characters
pub fn count_short_words<S: AsRef<str>>(words: &[S]) -> usize {
    words
        .iter()
        .filter(|word| {
            let word: &str = word.as_ref();
            word.chars().count() < SHORT_WORD_LIMIT
        })
        .count()
}

/// True when every color is exactly `red`, `blue` or `green`
///
/// Comparison is case-sensitive. An empty list is all RGB.
pub fn all_rgb<S: AsRef<str>>(colors: &[S]) -> bool {
    colors.iter().all(|color| {
        let color: &str = color.as_ref();
        RGB_COLORS.contains(&color)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_TEXT: [&str; 0] = [];

    #[test]
    fn test_strings_to_integers() {
        assert_eq!(strings_to_integers(&["12", "abc", "-4"]), vec![12, 0, -4]);
        assert_eq!(strings_to_integers(&[" 3rd", "", "0x10"]), vec![3, 0, 0]);
        assert!(strings_to_integers(&NO_TEXT).is_empty());
    }

    #[test]
    fn test_strings_to_integers_owned() {
        let owned = vec!["8".to_string(), "nine".to_string()];
        assert_eq!(strings_to_integers(&owned), vec![8, 0]);
    }

    #[test]
    fn test_remove_dollars() {
        assert_eq!(remove_dollars(&["$12", "7", "$abc"]), vec![12, 7, 0]);
    }

    #[test]
    fn test_remove_dollars_strips_only_one() {
        assert_eq!(
            remove_dollars(&["$$5", "5$", "$-3", "$"]),
            vec![0, 5, -3, 0]
        );
    }

    #[test]
    fn test_shout_if_exclaiming() {
        assert_eq!(
            shout_if_exclaiming(&["hi!", "what?", "ok"]),
            vec!["HI!".to_string(), "ok".to_string()]
        );
    }

    #[test]
    fn test_shout_keeps_empty_and_interior_marks() {
        assert_eq!(
            shout_if_exclaiming(&["", "wow! really", "why? no"]),
            vec!["", "wow! really", "why? no"]
        );
    }

    #[test]
    fn test_shout_unicode_uppercase() {
        assert_eq!(shout_if_exclaiming(&["straße!"]), vec!["STRASSE!"]);
    }

    #[test]
    fn test_shout_mixed_terminal_marks() {
        assert_eq!(shout_if_exclaiming(&["what?!", "really!?"]), vec!["WHAT?!"]);
    }

    #[test]
    fn test_count_short_words() {
        assert_eq!(count_short_words(&["a", "bee", "tree", "four"]), 2);
        assert_eq!(count_short_words(&NO_TEXT), 0);
    }

    #[test]
    fn test_count_short_words_counts_chars() {
        // Three characters, more than three bytes
        assert_eq!(count_short_words(&["été", "日本語"]), 2);
        assert_eq!(count_short_words(&[""]), 1);
    }

    #[test]
    fn test_all_rgb() {
        assert!(all_rgb(&NO_TEXT));
        assert!(all_rgb(&["red", "blue"]));
        assert!(all_rgb(&["green", "green", "red"]));
        assert!(!all_rgb(&["red", "yellow"]));
    }

    #[test]
    fn test_all_rgb_case_sensitive() {
        assert!(!all_rgb(&["Red"]));
        assert!(!all_rgb(&["blue "]));
    }
}
