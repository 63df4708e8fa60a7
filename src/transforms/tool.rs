//! URL rewriting and small clipboard tools
//!
//! The URL rewrites substitute every match found anywhere in the input and leave
//! everything else untouched, so text that is not a matching URL passes through.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use super::types::{Output, TransformError};
use super::Result;

static GITHUB_REPO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https://github\.com/([^/]+)/([^/]+)(?:/.*)?").unwrap());

static GITHUB_BLOB: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https://github\.com/([^/]+)/([^/]+)/blob/([^/]+)/(.+)").unwrap());

static LOBEHUB_ASSISTANT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https://lobehub\.com/assistants/(.*)").unwrap());

fn rewrite(pattern: &Regex, text: &str, replacement: &str) -> Result<Output> {
    Ok(Output::Text(pattern.replace_all(text, replacement).into_owned()))
}

/// Repository URL to its commits Atom feed.
pub fn github_commits_atom(text: &str) -> Result<Output> {
    rewrite(&GITHUB_REPO, text, "https://github.com/${1}/${2}/commits.atom")
}

/// Repository URL to its releases Atom feed.
pub fn github_releases_atom(text: &str) -> Result<Output> {
    rewrite(&GITHUB_REPO, text, "https://github.com/${1}/${2}/releases.atom")
}

/// Blob URL to the raw file URL.
pub fn github_raw_url(text: &str) -> Result<Output> {
    rewrite(
        &GITHUB_BLOB,
        text,
        "https://raw.githubusercontent.com/${1}/${2}/refs/heads/${3}/${4}",
    )
}

/// Repository URL to the `owner/repo` form `gh` accepts.
pub fn github_cli_url(text: &str) -> Result<Output> {
    rewrite(&GITHUB_REPO, text, "${1}/${2}")
}

pub fn to_unix_path(text: &str) -> Result<Output> {
    Ok(Output::Text(text.replace('\\', "/")))
}

/// Collapse escaped (doubled) backslashes to forward slashes.
pub fn escaped_to_unix_path(text: &str) -> Result<Output> {
    Ok(Output::Text(text.replace("\\\\", "/")))
}

pub fn to_windows_path(text: &str) -> Result<Output> {
    Ok(Output::Text(text.replace('/', "\\")))
}

/// Escape backslashes by doubling them.
pub fn to_escaped_windows_path(text: &str) -> Result<Output> {
    Ok(Output::Text(text.replace('\\', "\\\\")))
}

pub fn lobechat_assistant(text: &str) -> Result<Output> {
    rewrite(&LOBEHUB_ASSISTANT, text, "https://lobechat.com/discover/assistant/${1}")
}

/// Whitespace-separated integers to a sorted, deduplicated, comma-separated list.
///
/// Deduplication is textual, so `01` and `1` are both kept; tokens that compare
/// equal numerically keep their first-seen order.
pub fn linebreak_to_comma(text: &str) -> Result<Output> {
    let mut seen = HashSet::new();
    let mut numbers = Vec::new();

    for token in text.split_whitespace() {
        if !seen.insert(token) {
            continue;
        }
        let value = token.parse::<i128>().map_err(|_| TransformError::InvalidNumber {
            transform: "linebreak 2comma",
            token: token.to_string(),
        })?;
        numbers.push((value, token));
    }

    numbers.sort_by_key(|(value, _)| *value);
    let joined = numbers.iter().map(|(_, token)| *token).collect::<Vec<_>>().join(",");
    Ok(Output::Text(joined))
}

/// Two lines, a label and a URL, to a Markdown link.
pub fn markdown_link(text: &str) -> Result<Output> {
    let lines: Vec<&str> = text.lines().collect();
    match lines.as_slice() {
        [label, url] => Ok(Output::Text(format!("[{}]({})", label.trim(), url.trim()))),
        _ => Err(TransformError::LineCount {
            transform: "markdown link",
            expected: 2,
            found: lines.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(result: Result<Output>) -> String {
        result.unwrap().into_text()
    }

    #[test]
    fn test_github_commits_atom() {
        assert_eq!(
            text(github_commits_atom("https://github.com/rust-lang/regex/tree/master/src")),
            "https://github.com/rust-lang/regex/commits.atom"
        );
        assert_eq!(
            text(github_releases_atom("https://github.com/rust-lang/regex")),
            "https://github.com/rust-lang/regex/releases.atom"
        );
    }

    #[test]
    fn test_github_rewrites_pass_through_other_text() {
        assert_eq!(text(github_commits_atom("not a url")), "not a url");
        assert_eq!(text(github_raw_url("https://gitlab.com/o/r")), "https://gitlab.com/o/r");
    }

    #[test]
    fn test_github_raw_url() {
        assert_eq!(
            text(github_raw_url("https://github.com/o/r/blob/main/path/file.txt")),
            "https://raw.githubusercontent.com/o/r/refs/heads/main/path/file.txt"
        );
    }

    #[test]
    fn test_github_cli_url() {
        assert_eq!(text(github_cli_url("https://github.com/owner/repo/issues/1")), "owner/repo");
    }

    #[test]
    fn test_github_rewrite_inside_text() {
        assert_eq!(text(github_cli_url("see https://github.com/o/r")), "see o/r");
    }

    #[test]
    fn test_path_separators() {
        assert_eq!(text(to_unix_path(r"C:\Users\me")), "C:/Users/me");
        assert_eq!(text(escaped_to_unix_path(r"C:\\Users\\me")), "C:/Users/me");
        assert_eq!(text(to_windows_path("a/b/c")), r"a\b\c");
        assert_eq!(text(to_escaped_windows_path(r"a\b")), r"a\\b");
    }

    #[test]
    fn test_lobechat_assistant() {
        assert_eq!(
            text(lobechat_assistant("https://lobehub.com/assistants/code-reviewer")),
            "https://lobechat.com/discover/assistant/code-reviewer"
        );
    }

    #[test]
    fn test_linebreak_to_comma() {
        assert_eq!(text(linebreak_to_comma("3 1 2 1")), "1,2,3");
        assert_eq!(text(linebreak_to_comma("10\n9\n-1\n")), "-1,9,10");
        assert_eq!(text(linebreak_to_comma("")), "");
    }

    #[test]
    fn test_linebreak_to_comma_rejects_words() {
        let err = linebreak_to_comma("1 two 3").unwrap_err();
        assert_eq!(
            err,
            TransformError::InvalidNumber { transform: "linebreak 2comma", token: "two".to_string() }
        );
    }

    #[test]
    fn test_markdown_link() {
        assert_eq!(
            text(markdown_link("  Rust  \n https://www.rust-lang.org \n")),
            "[Rust](https://www.rust-lang.org)"
        );
        assert_eq!(text(markdown_link("a\r\nb")), "[a](b)");
    }

    #[test]
    fn test_markdown_link_wrong_line_count() {
        assert!(matches!(
            markdown_link("only one line"),
            Err(TransformError::LineCount { expected: 2, found: 1, .. })
        ));
        assert!(matches!(
            markdown_link("a\nb\nc"),
            Err(TransformError::LineCount { found: 3, .. })
        ));
    }
}
