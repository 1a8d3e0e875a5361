//! Command parsing for jotter.
//!
//! Turns one raw input line into a [`Command`], or a usage error describing
//! the correct syntax. The verb (first word) is case-insensitive; everything
//! after it is kept as typed, trimmed at each segment boundary.
//!
//! # Grammar
//!
//! ```text
//! bye
//! list
//! todo <description>
//! deadline <description> /by <when>
//! event <description> /from <start> /to <end>
//! mark <n> | unmark <n> | delete <n>
//! find <keyword>
//! snooze <n> /by <when>
//! snooze <n> /from <start> /to <end>
//! ```
//!
//! Separators must stand alone as whitespace-delimited tokens and the first
//! occurrence wins. A description that itself contains ` /by ` is split at
//! that token; there is no escaping.

mod helpers;


use crate::error::{JotterError, Result};
use helpers::{SplitError, has_by, has_from, split_by, split_from_to, split_verb};

pub const USAGE_TODO: &str = "Usage: todo <description>";
pub const USAGE_DEADLINE: &str = "Usage: deadline <description> /by <when>";
pub const USAGE_EVENT: &str = "Usage: event <description> /from <start> /to <end>";
pub const USAGE_FIND: &str = "Usage: find <keyword>";
pub const USAGE_SNOOZE: &str =
    "Usage: snooze <task-number> /by <when>  or  snooze <task-number> /from <start> /to <end>";

/// A parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Bye,
    List,
    Todo {
        description: String,
    },
    Deadline {
        description: String,
        by: String,
    },
    Event {
        description: String,
        from: String,
        to: String,
    },
    Mark(usize),
    Unmark(usize),
    Delete(usize),
    Find {
        keyword: String,
    },
    /// Move the due date of a deadline.
    SnoozeDeadline {
        index: usize,
        by: String,
    },
    /// Move both ends of an event.
    SnoozeEvent {
        index: usize,
        from: String,
        to: String,
    },
}

/// Parse one line of user input.
pub fn parse(line: &str) -> Result<Command> {
    let (verb, rest) = split_verb(line);

    match verb.as_str() {
        "" => Err(JotterError::usage("Please type a command.")),
        "bye" => no_arguments(Command::Bye, "bye", rest),
        "list" => no_arguments(Command::List, "list", rest),
        "mark" => parse_index("mark", rest).map(Command::Mark),
        "unmark" => parse_index("unmark", rest).map(Command::Unmark),
        "delete" => parse_index("delete", rest).map(Command::Delete),
        "todo" => parse_todo(rest),
        "deadline" => parse_deadline(rest),
        "event" => parse_event(rest),
        "find" => parse_find(rest),
        "snooze" => parse_snooze(rest),
        other => Err(JotterError::UnknownCommand(other.to_string())),
    }
}

fn no_arguments(command: Command, verb: &str, rest: &str) -> Result<Command> {
    if !rest.is_empty() {
        return Err(JotterError::usage(format!(
            "Usage: {} (it takes no arguments)",
            verb
        )));
    }
    Ok(command)
}

fn parse_index(verb: &str, rest: &str) -> Result<usize> {
    rest.parse::<usize>()
        .map_err(|_| JotterError::usage(format!("Usage: {} <task-number>", verb)))
}

fn parse_todo(rest: &str) -> Result<Command> {
    if rest.is_empty() {
        return Err(JotterError::usage(USAGE_TODO));
    }
    Ok(Command::Todo {
        description: rest.to_string(),
    })
}

fn parse_deadline(rest: &str) -> Result<Command> {
    let (description, by) = split_by(rest).map_err(|e| split_error(e, USAGE_DEADLINE))?;
    if description.is_empty() || by.is_empty() {
        return Err(JotterError::usage(USAGE_DEADLINE));
    }
    Ok(Command::Deadline {
        description: description.to_string(),
        by: by.to_string(),
    })
}

fn parse_event(rest: &str) -> Result<Command> {
    let (description, from, to) = split_from_to(rest).map_err(|e| split_error(e, USAGE_EVENT))?;
    if description.is_empty() || from.is_empty() || to.is_empty() {
        return Err(JotterError::usage(USAGE_EVENT));
    }
    Ok(Command::Event {
        description: description.to_string(),
        from: from.to_string(),
        to: to.to_string(),
    })
}

fn parse_find(rest: &str) -> Result<Command> {
    if rest.is_empty() {
        return Err(JotterError::usage(USAGE_FIND));
    }
    Ok(Command::Find {
        keyword: rest.to_string(),
    })
}

fn parse_snooze(rest: &str) -> Result<Command> {
    let (index_token, tail) = match rest.split_once(char::is_whitespace) {
        Some((index, tail)) => (index, tail.trim()),
        None => return Err(JotterError::usage(USAGE_SNOOZE)),
    };
    let index = index_token.parse::<usize>().map_err(|_| {
        JotterError::usage("The task number for 'snooze' must be a whole number.")
    })?;

    if has_by(tail) {
        let (head, by) = split_by(tail).map_err(|e| split_error(e, USAGE_SNOOZE))?;
        if !head.is_empty() || by.is_empty() {
            return Err(JotterError::usage(USAGE_SNOOZE));
        }
        return Ok(Command::SnoozeDeadline {
            index,
            by: by.to_string(),
        });
    }

    if has_from(tail) {
        let (head, from, to) = split_from_to(tail).map_err(|e| split_error(e, USAGE_SNOOZE))?;
        if !head.is_empty() || from.is_empty() || to.is_empty() {
            return Err(JotterError::usage(USAGE_SNOOZE));
        }
        return Ok(Command::SnoozeEvent {
            index,
            from: from.to_string(),
            to: to.to_string(),
        });
    }

    Err(JotterError::usage(USAGE_SNOOZE))
}

fn split_error(err: SplitError, usage: &str) -> JotterError {
    match err {
        SplitError::Missing(separator) => {
            JotterError::usage(format!("Missing '{}'. {}", separator, usage))
        }
        SplitError::OutOfOrder => {
            JotterError::usage(format!("'/to' must come after '/from'. {}", usage))
        }
    }
}
