//! Helpers for writing Nutrimatic queries
//!
//! In Nutrimatic syntax `A` matches any letter, `*` repeats the previous item,
//! `?` makes it optional and `A{n}` matches exactly `n` letters.

use once_cell::sync::Lazy;
use regex::Regex;

use super::types::Output;
use super::Result;

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

/// Lowercase an answerized pattern and turn each unknown `?` into a letter wildcard.
pub fn from_answerize(text: &str) -> Result<Output> {
    Ok(Output::Text(text.to_lowercase().replace('?', "A")))
}

/// Allow any run of letters before, between and after the input's characters.
pub fn add_any_between(text: &str) -> Result<Output> {
    let inner = text.chars().map(String::from).collect::<Vec<_>>().join("A*");
    Ok(Output::Text(format!("A*{}A*", inner)))
}

/// Make every character optional.
pub fn add_optional(text: &str) -> Result<Output> {
    let mut query = String::with_capacity(text.len() * 2);
    for c in text.chars() {
        query.push(c);
        query.push('?');
    }
    Ok(Output::Text(query))
}

/// Turn an enumeration like `(5, 3)` into `A{5} A{3}`.
pub fn from_enumeration(text: &str) -> Result<Output> {
    let query = DIGIT_RUN
        .find_iter(text)
        .map(|m| format!("A{{{}}}", m.as_str()))
        .collect::<Vec<_>>()
        .join(" ");
    Ok(Output::Text(query))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(result: Result<Output>) -> String {
        result.unwrap().into_text()
    }

    #[test]
    fn test_from_answerize() {
        assert_eq!(text(from_answerize("C??SS")), "cAAss");
        assert_eq!(text(from_answerize("NO WILDCARDS")), "no wildcards");
    }

    #[test]
    fn test_add_any_between() {
        assert_eq!(text(add_any_between("abc")), "A*aA*bA*cA*");
        assert_eq!(text(add_any_between("")), "A*A*");
    }

    #[test]
    fn test_add_optional() {
        assert_eq!(text(add_optional("abc")), "a?b?c?");
        assert_eq!(text(add_optional("")), "");
    }

    #[test]
    fn test_from_enumeration() {
        assert_eq!(text(from_enumeration("(5, 3)")), "A{5} A{3}");
        assert_eq!(text(from_enumeration("4-2,10")), "A{4} A{2} A{10}");
        assert_eq!(text(from_enumeration("no digits")), "");
    }
}
