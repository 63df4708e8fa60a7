//! Top-level transforms that are not grouped into a category

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use super::types::Output;
use super::Result;
use crate::grid;

static NON_ANSWER_CHAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Z0-9]").unwrap());

pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// The lowercase Latin alphabet, whatever the input.
pub fn alphabet(_text: &str) -> Result<Output> {
    Ok(Output::Text(ALPHABET.to_string()))
}

/// Uppercase and keep only `A`-`Z` and `0`-`9`, the way answers are entered.
pub fn answerize(text: &str) -> Result<Output> {
    let upper = text.to_uppercase();
    Ok(Output::Text(NON_ANSWER_CHAR.replace_all(&upper, "").into_owned()))
}

/// Number of characters, whitespace included.
pub fn length(text: &str) -> Result<Output> {
    Ok(Output::Count(text.chars().count()))
}

pub fn reverse(text: &str) -> Result<Output> {
    Ok(Output::Text(text.chars().rev().collect()))
}

pub fn rotate(text: &str) -> Result<Output> {
    Ok(Output::Text(grid::make_grid_transform(grid::rotate).apply(text)))
}

pub fn transpose(text: &str) -> Result<Output> {
    Ok(Output::Text(grid::make_grid_transform(grid::transpose).apply(text)))
}

/// Each distinct character once.
///
/// The order of the output is unspecified and may differ between calls;
/// callers must not rely on it.
pub fn unique(text: &str) -> Result<Output> {
    let distinct: HashSet<char> = text.chars().collect();
    Ok(Output::Text(distinct.into_iter().collect()))
}
