//! Line ordering
//!
//! Lines are split on `\n` only, so a trailing newline sorts as an empty line.

use super::types::Output;
use super::Result;

/// Sort lines lexicographically by code point.
pub fn alphabetical(text: &str) -> Result<Output> {
    let mut lines: Vec<&str> = text.split('\n').collect();
    lines.sort_unstable();
    Ok(Output::Text(lines.join("\n")))
}

/// Sort lines by character count; equal lengths keep their input order.
pub fn by_length(text: &str) -> Result<Output> {
    let mut lines: Vec<&str> = text.split('\n').collect();
    lines.sort_by_key(|line| line.chars().count());
    Ok(Output::Text(lines.join("\n")))
}

/// Reverse the line order.
pub fn reverse_lines(text: &str) -> Result<Output> {
    let lines: Vec<&str> = text.split('\n').rev().collect();
    Ok(Output::Text(lines.join("\n")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(result: Result<Output>) -> String {
        result.unwrap().into_text()
    }

    #[test]
    fn test_alphabetical() {
        assert_eq!(text(alphabetical("banana\napple\ncherry")), "apple\nbanana\ncherry");
    }

    #[test]
    fn test_alphabetical_uppercase_first() {
        assert_eq!(text(alphabetical("b\nB\na")), "B\na\nb");
    }

    #[test]
    fn test_alphabetical_trailing_newline() {
        assert_eq!(text(alphabetical("b\na\n")), "\na\nb");
    }

    #[test]
    fn test_by_length_is_stable() {
        assert_eq!(text(by_length("ccc\nbb\naa\nd")), "d\nbb\naa\nccc");
    }

    #[test]
    fn test_by_length_counts_chars() {
        assert_eq!(text(by_length("ééé\nab")), "ab\nééé");
    }

    #[test]
    fn test_reverse_lines() {
        assert_eq!(text(reverse_lines("1\n2\n3")), "3\n2\n1");
        assert_eq!(text(reverse_lines("")), "");
    }
}
