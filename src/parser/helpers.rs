//! Segment splitting helpers for the command parser.

use regex::Regex;
use std::sync::LazyLock;

static BY_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\s)/by(?:\s|$)").expect("Invalid /by separator regex"));

static FROM_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|\s)/from(?:\s|$)").expect("Invalid /from separator regex")
});

static TO_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\s)/to(?:\s|$)").expect("Invalid /to separator regex"));

/// Why a segmented argument string could not be split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum SplitError {
    /// A required separator token is absent.
    Missing(&'static str),
    /// `/to` only appears before `/from`.
    OutOfOrder,
}

/// Split `rest` at the first `/by` token into `(head, when)`.
///
/// Both halves are trimmed but may be empty; emptiness is the caller's
/// concern since the error message depends on the command.
pub(super) fn split_by(rest: &str) -> Result<(&str, &str), SplitError> {
    split_once(rest, &BY_SEPARATOR).ok_or(SplitError::Missing("/by"))
}

/// Split `rest` into `(head, from, to)` at `/from` then the first `/to`
/// that follows it.
pub(super) fn split_from_to(rest: &str) -> Result<(&str, &str, &str), SplitError> {
    let (head, window) = match split_once(rest, &FROM_SEPARATOR) {
        Some(parts) => parts,
        None => return Err(SplitError::Missing("/from")),
    };

    match split_once(window, &TO_SEPARATOR) {
        Some((from, to)) => Ok((head, from, to)),
        None if TO_SEPARATOR.is_match(head) => Err(SplitError::OutOfOrder),
        None => Err(SplitError::Missing("/to")),
    }
}

/// True if `rest` contains a whole-token `/by`.
pub(super) fn has_by(rest: &str) -> bool {
    BY_SEPARATOR.is_match(rest)
}

/// True if `rest` contains a whole-token `/from`.
pub(super) fn has_from(rest: &str) -> bool {
    FROM_SEPARATOR.is_match(rest)
}

fn split_once<'a>(text: &'a str, separator: &Regex) -> Option<(&'a str, &'a str)> {
    separator
        .find(text)
        .map(|m| (text[..m.start()].trim(), text[m.end()..].trim()))
}

/// Split a line into its lowercased verb and the trimmed remainder.
pub(super) fn split_verb(line: &str) -> (String, &str) {
    let line = line.trim();
    match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb.to_lowercase(), rest.trim()),
        None => (line.to_lowercase(), ""),
    }
}
