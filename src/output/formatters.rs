//! Formatting utilities for terminal output

use crate::core::word_length;
use crate::validator::Rejection;

/// Accepted word with its length badge, e.g. `(5) lines`
#[must_use]
pub fn word_badge(word: &str) -> String {
    format!("({}) {word}", word_length(word))
}

#[must_use]
pub fn score_line(score: usize) -> String {
    format!("Score: {score}")
}

/// One-line alert for a rejection; `None` for rejections shown silently
#[must_use]
pub fn alert_line(rejection: Rejection) -> Option<String> {
    if rejection.is_silent() {
        return None;
    }
    Some(format!("{}: {}", rejection.title(), rejection.message()))
}

/// Root word as shown in titles: spaced capitals, e.g. `S I L E N T`
#[must_use]
pub fn root_title(root: &str) -> String {
    root.to_uppercase()
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_badge_shows_length() {
        assert_eq!(word_badge("lines"), "(5) lines");
        assert_eq!(word_badge("listen"), "(6) listen");
    }

    #[test]
    fn score_line_format() {
        assert_eq!(score_line(0), "Score: 0");
        assert_eq!(score_line(42), "Score: 42");
    }

    #[test]
    fn too_short_has_no_alert() {
        assert_eq!(alert_line(Rejection::TooShort), None);
    }

    #[test]
    fn visible_rejections_have_alerts() {
        assert_eq!(
            alert_line(Rejection::NotOriginal).as_deref(),
            Some("Word used already: Be more original.")
        );
        assert!(alert_line(Rejection::NotReal).is_some());
        assert!(alert_line(Rejection::NotPossible).is_some());
    }

    #[test]
    fn root_title_spaces_letters() {
        assert_eq!(root_title("silent"), "S I L E N T");
        assert_eq!(root_title(""), "");
    }
}
