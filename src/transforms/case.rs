//! Case conversions
//!
//! The word-joining styles (kebab, snake, camel, pascal) all cut the input at
//! the same places: every whitespace run, and every ASCII uppercase letter that
//! directly follows a word character ("helloWorld" is cut before the `W`).

use once_cell::sync::Lazy;
use regex::Regex;

use super::types::Output;
use super::Result;

static WORD_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+|\B[A-Z]").unwrap());

/// Split text into segments at whitespace runs (which are dropped) and before
/// inner uppercase letters (which start the next segment).
///
/// Leading or trailing whitespace produces empty segments, so joining with a
/// separator puts one separator where each whitespace run was.
pub(crate) fn segments(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;

    for m in WORD_BOUNDARY.find_iter(text) {
        parts.push(&text[start..m.start()]);
        start = if m.as_str().starts_with(char::is_whitespace) { m.end() } else { m.start() };
    }
    parts.push(&text[start..]);
    parts
}

fn join_lowercase(text: &str, separator: &str) -> String {
    segments(text).join(separator).to_lowercase()
}

fn upper_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn lower_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Concatenate segments, capitalizing each one after the first.
fn join_capitalized(text: &str) -> String {
    let parts = segments(text);
    let mut joined = String::with_capacity(text.len());
    for (i, part) in parts.iter().enumerate() {
        if i == 0 {
            joined.push_str(part);
        } else {
            joined.push_str(&upper_first(part));
        }
    }
    joined
}

fn title_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

pub fn lowercase(text: &str) -> Result<Output> {
    Ok(Output::Text(text.to_lowercase()))
}

pub fn uppercase(text: &str) -> Result<Output> {
    Ok(Output::Text(text.to_uppercase()))
}

/// Capitalize every whitespace-separated word, keeping the whitespace as is.
pub fn titlecase(text: &str) -> Result<Output> {
    let mut result = String::with_capacity(text.len());
    let mut word_start = None;

    for (i, c) in text.char_indices() {
        if c.is_whitespace() {
            if let Some(start) = word_start.take() {
                result.push_str(&title_word(&text[start..i]));
            }
            result.push(c);
        } else if word_start.is_none() {
            word_start = Some(i);
        }
    }
    if let Some(start) = word_start {
        result.push_str(&title_word(&text[start..]));
    }
    Ok(Output::Text(result))
}

pub fn kebabcase(text: &str) -> Result<Output> {
    Ok(Output::Text(join_lowercase(text, "-")))
}

pub fn snakecase(text: &str) -> Result<Output> {
    Ok(Output::Text(join_lowercase(text, "_")))
}

pub fn camelcase(text: &str) -> Result<Output> {
    Ok(Output::Text(lower_first(&join_capitalized(text))))
}

pub fn pascalcase(text: &str) -> Result<Output> {
    Ok(Output::Text(upper_first(&join_capitalized(text))))
}

pub fn nocase(text: &str) -> Result<Output> {
    Ok(Output::Text(text.to_string()))
}
