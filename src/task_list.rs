//! Ordered, mutable collection of tasks.
//!
//! Insertion order is display order is persisted order. Every index taken
//! by this module is 1-based, as typed by the user, and is validated before
//! any mutation so that a rejected command leaves the list untouched.

use crate::dates::When;
use crate::error::{JotterError, Result};
use crate::task::{KindTag, Task, check_schedule};

/// The in-memory task list owned by a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// Read-only snapshot handed to the store for saving.
    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    /// Look up a task by its 1-based number.
    #[cfg(test)]
    pub fn get(&self, index: usize) -> Result<&Task> {
        let pos = self.position(index)?;
        Ok(&self.tasks[pos])
    }

    // =========================================================================
    // Adding
    // =========================================================================

    pub fn add_todo(&mut self, description: &str) -> Result<&Task> {
        let description = require_description(description)?;
        Ok(self.push(Task::todo(description)))
    }

    pub fn add_deadline(&mut self, description: &str, by: &str) -> Result<&Task> {
        let description = require_description(description)?;
        let by = require_when(by, "/by")?;
        Ok(self.push(Task::deadline(description, by)))
    }

    /// Append an event. An end that precedes the start is rejected.
    pub fn add_event(&mut self, description: &str, from: &str, to: &str) -> Result<&Task> {
        let description = require_description(description)?;
        let from = require_when(from, "/from")?;
        let to = require_when(to, "/to")?;
        check_schedule(&from, &to)?;
        Ok(self.push(Task::event(description, from, to)))
    }

    fn push(&mut self, task: Task) -> &Task {
        self.tasks.push(task);
        &self.tasks[self.tasks.len() - 1]
    }

    // =========================================================================
    // Status changes
    // =========================================================================

    /// Mark task `index` as done.
    ///
    /// Returns whether the status changed alongside the task; marking an
    /// already-done task is a no-op.
    pub fn mark(&mut self, index: usize) -> Result<(bool, &Task)> {
        let pos = self.position(index)?;
        let changed = self.tasks[pos].mark_done();
        Ok((changed, &self.tasks[pos]))
    }

    /// Mark task `index` as not done. Symmetric to [`TaskList::mark`].
    pub fn unmark(&mut self, index: usize) -> Result<(bool, &Task)> {
        let pos = self.position(index)?;
        let changed = self.tasks[pos].mark_not_done();
        Ok((changed, &self.tasks[pos]))
    }

    /// Remove and return task `index`. Later tasks move up by one.
    pub fn delete(&mut self, index: usize) -> Result<Task> {
        let pos = self.position(index)?;
        Ok(self.tasks.remove(pos))
    }

    // =========================================================================
    // Rescheduling
    // =========================================================================

    /// Move the `by` date of the deadline at `index`.
    pub fn reschedule_deadline(&mut self, index: usize, by: &str) -> Result<&Task> {
        let pos = self.position(index)?;
        let by = require_when(by, "/by")?;
        if !self.tasks[pos].set_by(by) {
            return Err(JotterError::WrongKind {
                index,
                expected: KindTag::Deadline.with_article(),
            });
        }
        Ok(&self.tasks[pos])
    }

    /// Move both ends of the event at `index`.
    pub fn reschedule_event(&mut self, index: usize, from: &str, to: &str) -> Result<&Task> {
        let pos = self.position(index)?;
        if self.tasks[pos].tag() != KindTag::Event {
            return Err(JotterError::WrongKind {
                index,
                expected: KindTag::Event.with_article(),
            });
        }
        let from = require_when(from, "/from")?;
        let to = require_when(to, "/to")?;
        check_schedule(&from, &to)?;
        self.tasks[pos].set_schedule(from, to);
        Ok(&self.tasks[pos])
    }

    // =========================================================================
    // Search
    // =========================================================================

    /// Tasks whose display string contains `keyword`, ignoring case.
    ///
    /// The display string includes the kind marker, the status icon and the
    /// rendered dates, so `find Dec` finds deadlines due in December. Each
    /// match is paired with its 1-based number in the full list. An empty
    /// keyword matches nothing.
    pub fn find(&self, keyword: &str) -> Vec<(usize, &Task)> {
        let keyword = keyword.trim().to_lowercase();
        if keyword.is_empty() {
            return Vec::new();
        }

        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.to_string().to_lowercase().contains(&keyword))
            .map(|(i, task)| (i + 1, task))
            .collect()
    }

    /// Convert a 1-based task number to a vector position.
    fn position(&self, index: usize) -> Result<usize> {
        if index == 0 || index > self.tasks.len() {
            return Err(JotterError::IndexOutOfRange {
                index,
                len: self.tasks.len(),
            });
        }
        Ok(index - 1)
    }
}

impl From<Vec<Task>> for TaskList {
    fn from(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}

fn require_description(description: &str) -> Result<&str> {
    let description = description.trim();
    if description.is_empty() {
        return Err(JotterError::usage(
            "The description of a task cannot be empty.",
        ));
    }
    Ok(description)
}

fn require_when(text: &str, separator: &str) -> Result<When> {
    let text = text.trim();
    if text.is_empty() {
        return Err(JotterError::usage(format!(
            "The {} part of a task cannot be empty.",
            separator
        )));
    }
    Ok(When::parse(text))
}
