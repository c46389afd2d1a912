//! Greedy word wrapping against a fixed character budget.
//!
//! Card text zones are narrow enough that a character budget (tuned to the
//! card width) is a good stand-in for real text measurement. Words are never
//! broken: an over-long word gets a line of its own, intact. Callers that
//! need a height cap truncate the returned lines themselves.

pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        // The candidate keeps a trailing space, matching the budget the zones
        // were tuned with.
        if current.chars().count() + word.chars().count() + 1 <= max_chars {
            current.push_str(word);
            current.push(' ');
        } else {
            if !current.is_empty() {
                lines.push(current.trim_end().to_string());
            }
            current.clear();
            current.push_str(word);
            current.push(' ');
        }
    }

    if !current.is_empty() {
        lines.push(current.trim_end().to_string());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_one_line() {
        assert_eq!(wrap_text("draw a card", 15), vec!["draw a card"]);
    }

    #[test]
    fn lines_respect_the_budget() {
        let lines = wrap_text("when this card is played draw two cards and discard one", 15);
        assert!(lines.len() >= 3);
        for line in &lines {
            assert!(line.chars().count() <= 15, "line too long: {line:?}");
        }
    }

    #[test]
    fn overlong_words_are_kept_intact() {
        let lines = wrap_text("use antidisestablishmentarianism now", 10);
        assert!(lines.contains(&"antidisestablishmentarianism".to_string()));
        for line in &lines {
            assert!(!line.contains(' ') || line.chars().count() <= 10);
        }
    }

    #[test]
    fn whitespace_runs_collapse() {
        assert_eq!(wrap_text("a   b\t c", 15), vec!["a b c"]);
    }

    #[test]
    fn empty_text_yields_no_lines() {
        assert!(wrap_text("", 15).is_empty());
        assert!(wrap_text("   ", 15).is_empty());
    }

    #[test]
    fn flushed_lines_are_right_trimmed() {
        for line in wrap_text("alpha beta gamma delta epsilon", 12) {
            assert_eq!(line, line.trim_end());
        }
    }
}
