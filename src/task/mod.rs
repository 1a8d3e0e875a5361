//! Task model for jotter.
//!
//! A task is a description, a done flag, and a [`TaskKind`] carrying the
//! kind-specific dates. The kind is a closed enum; display and storage
//! dispatch on it with `match`.
//!
//! # Display Format
//!
//! ```text
//! [T][ ] read book
//! [D][X] return book (by: Dec 2 2019)
//! [E][ ] project meeting (from: Aug 6 2019, 2:00 PM to: Aug 6 2019, 4:00 PM)
//! ```

use crate::dates::When;
use crate::error::{JotterError, Result};
use std::fmt;


/// Which of the three task variants a task is, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindTag {
    Todo,
    Deadline,
    Event,
}

impl KindTag {
    /// Single-letter marker shown in the first bracket of the display string.
    pub fn symbol(self) -> char {
        match self {
            KindTag::Todo => 'T',
            KindTag::Deadline => 'D',
            KindTag::Event => 'E',
        }
    }

    /// Parse a kind from its symbol.
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "T" => Some(KindTag::Todo),
            "D" => Some(KindTag::Deadline),
            "E" => Some(KindTag::Event),
            _ => None,
        }
    }

    /// Name with its article, for messages ("a deadline", "an event").
    pub fn with_article(self) -> &'static str {
        match self {
            KindTag::Todo => "a todo",
            KindTag::Deadline => "a deadline",
            KindTag::Event => "an event",
        }
    }
}

/// Kind-specific payload of a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    Todo,
    Deadline { by: When },
    Event { from: When, to: When },
}

impl TaskKind {
    pub fn tag(&self) -> KindTag {
        match self {
            TaskKind::Todo => KindTag::Todo,
            TaskKind::Deadline { .. } => KindTag::Deadline,
            TaskKind::Event { .. } => KindTag::Event,
        }
    }
}

/// A single tracked task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    description: String,
    done: bool,
    kind: TaskKind,
}

impl Task {
    pub fn todo(description: impl Into<String>) -> Self {
        Self::new(description, TaskKind::Todo)
    }

    pub fn deadline(description: impl Into<String>, by: When) -> Self {
        Self::new(description, TaskKind::Deadline { by })
    }

    pub fn event(description: impl Into<String>, from: When, to: When) -> Self {
        Self::new(description, TaskKind::Event { from, to })
    }

    fn new(description: impl Into<String>, kind: TaskKind) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    pub fn tag(&self) -> KindTag {
        self.kind.tag()
    }

    /// `X` when done, a blank otherwise.
    pub fn status_icon(&self) -> char {
        if self.done { 'X' } else { ' ' }
    }

    // =========================================================================
    // Mutation helpers
    // =========================================================================

    /// Mark the task as done. Returns false if it already was.
    pub fn mark_done(&mut self) -> bool {
        let changed = !self.done;
        self.done = true;
        changed
    }

    /// Mark the task as not done. Returns false if it already was pending.
    pub fn mark_not_done(&mut self) -> bool {
        let changed = self.done;
        self.done = false;
        changed
    }

    /// Replace the `by` date of a deadline.
    ///
    /// Returns false, leaving the task untouched, if this is not a deadline.
    pub fn set_by(&mut self, by: When) -> bool {
        match &mut self.kind {
            TaskKind::Deadline { by: current } => {
                *current = by;
                true
            }
            _ => false,
        }
    }

    /// Replace both ends of an event.
    ///
    /// Returns false, leaving the task untouched, if this is not an event.
    pub fn set_schedule(&mut self, from: When, to: When) -> bool {
        match &mut self.kind {
            TaskKind::Event {
                from: cur_from,
                to: cur_to,
            } => {
                *cur_from = from;
                *cur_to = to;
                true
            }
            _ => false,
        }
    }
}

/// Reject an event window whose end precedes its start.
///
/// Incomparable ends (free text, or a date against a date-time) pass.
pub fn check_schedule(from: &When, to: &When) -> Result<()> {
    if to.precedes(from) {
        return Err(JotterError::InvalidSchedule(format!(
            "An event cannot end ({}) before it starts ({}).",
            to, from
        )));
    }
    Ok(())
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}][{}] {}",
            self.tag().symbol(),
            self.status_icon(),
            self.description
        )?;
        match &self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline { by } => write!(f, " (by: {})", by),
            TaskKind::Event { from, to } => write!(f, " (from: {} to: {})", from, to),
        }
    }
}
