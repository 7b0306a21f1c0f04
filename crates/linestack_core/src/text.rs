//! Line tokenization helpers.

/// Split `text` into lines, each keeping its trailing `\n`.
///
/// The final line is kept even when it has no terminator. Only `\n` separates
/// lines, so a `\r\n` ending stays attached to its line.
///
/// # Returns
/// Borrowed line slices whose concatenation equals `text`. Empty input yields
/// an empty list.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split_inclusive('\n').collect()
}

#[cfg(test)]
mod tests {
    use super::split_lines;

    #[test]
    fn split_lines_keeps_terminators() {
        assert_eq!(split_lines("a\nb\nc\n"), vec!["a\n", "b\n", "c\n"]);
        assert_eq!(split_lines("a\nb"), vec!["a\n", "b"]);
        assert_eq!(split_lines("\n\n"), vec!["\n", "\n"]);
    }

    #[test]
    fn split_lines_handles_empty_and_crlf() {
        assert!(split_lines("").is_empty());
        assert_eq!(split_lines("x\r\ny\r\n"), vec!["x\r\n", "y\r\n"]);
    }

    #[test]
    fn split_lines_concatenation_round_trips() {
        for text in ["", "a", "a\n", "\na\n\nb", "x\r\ny", "only\n\n\n"] {
            assert_eq!(split_lines(text).concat(), text, "text: {:?}", text);
        }
    }
}
