//! The interpreter: one line in, one response out.
//!
//! A [`Session`] owns the task list for its lifetime. Each call to
//! [`Session::handle`] parses the line, applies it to the list, saves the
//! list if it changed, and returns the rendered response. Nothing the user
//! types can end the session except `bye`; errors become messages.
//!
//! ```text
//! Running --bye--> Terminated
//! Running --end of input--> Terminated   (no farewell)
//! ```

use crate::error::{JotterError, Result};
use crate::parser::{self, Command};
use crate::render::Renderer;
use crate::storage::Storage;
use crate::task_list::TaskList;
use log::{debug, error, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

/// What a front-end gets back for one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Rendered text to show the user.
    pub text: String,
    /// True once the session has terminated.
    pub exit: bool,
    /// The error behind an "Oops!" response, if any.
    pub error: Option<JotterError>,
    /// Set when the command changed the list but the store rejected the write.
    pub save_error: Option<JotterError>,
}

pub struct Session {
    tasks: TaskList,
    storage: Storage,
    renderer: Renderer,
    state: SessionState,
    load_failed: bool,
}

impl Session {
    /// Start a session from whatever the store holds.
    ///
    /// A store that cannot be read is not fatal: the session starts with an
    /// empty list and the greeting says so.
    pub fn open(storage: Storage, renderer: Renderer) -> Self {
        let (tasks, load_failed) = match storage.load() {
            Ok(report) => {
                if !report.skipped.is_empty() {
                    warn!(
                        "skipped {} unreadable record(s) in {}",
                        report.skipped.len(),
                        storage.path().display()
                    );
                }
                (TaskList::from(report.tasks), false)
            }
            Err(e) => {
                error!("load failed, starting empty: {}", e);
                (TaskList::new(), true)
            }
        };

        Self {
            tasks,
            storage,
            renderer,
            state: SessionState::Running,
            load_failed,
        }
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    #[cfg(test)]
    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    /// Welcome text shown before the first command.
    pub fn greeting(&self) -> String {
        let mut lines = self.renderer.welcome();
        if self.load_failed {
            lines.push(format!(
                "(I couldn't read {}, so we're starting with an empty list.)",
                self.storage.path().display()
            ));
        }
        self.renderer.frame(&lines)
    }

    /// Input ran out. Terminates without a farewell.
    pub fn end_of_input(&mut self) {
        debug!("end of input");
        self.state = SessionState::Terminated;
    }

    /// Interpret one line of user input.
    pub fn handle(&mut self, line: &str) -> Response {
        if !self.is_running() {
            return Response {
                text: String::new(),
                exit: true,
                error: None,
                save_error: None,
            };
        }

        let mut save_error = None;
        let (lines, err) = match parser::parse(line).and_then(|command| self.execute(command)) {
            Ok((mut lines, dirty)) => {
                if dirty && let Err(e) = self.storage.save(self.tasks.as_slice()) {
                    error!("save failed: {}", e);
                    lines.push(self.renderer.save_failed(&e));
                    save_error = Some(e);
                }
                (lines, None)
            }
            Err(e) => {
                debug!("rejected {:?}: {}", line, e);
                (self.renderer.error(&e), Some(e))
            }
        };

        Response {
            text: self.renderer.frame(&lines),
            exit: !self.is_running(),
            error: err,
            save_error,
        }
    }

    /// Apply `command`, returning the response lines and whether the list changed.
    fn execute(&mut self, command: Command) -> Result<(Vec<String>, bool)> {
        debug!("executing {:?}", command);

        let outcome = match command {
            Command::Bye => {
                self.state = SessionState::Terminated;
                (self.renderer.goodbye(), false)
            }
            Command::List => (self.renderer.list(&self.tasks), false),
            Command::Todo { description } => {
                let task = self.tasks.add_todo(&description)?.clone();
                (self.renderer.added(&task, self.tasks.len()), true)
            }
            Command::Deadline { description, by } => {
                let task = self.tasks.add_deadline(&description, &by)?.clone();
                (self.renderer.added(&task, self.tasks.len()), true)
            }
            Command::Event {
                description,
                from,
                to,
            } => {
                let task = self.tasks.add_event(&description, &from, &to)?.clone();
                (self.renderer.added(&task, self.tasks.len()), true)
            }
            Command::Mark(index) => {
                let (changed, task) = self.tasks.mark(index)?;
                (self.renderer.marked(task, changed), changed)
            }
            Command::Unmark(index) => {
                let (changed, task) = self.tasks.unmark(index)?;
                (self.renderer.unmarked(task, changed), changed)
            }
            Command::Delete(index) => {
                let removed = self.tasks.delete(index)?;
                (self.renderer.removed(&removed, self.tasks.len()), true)
            }
            Command::Find { keyword } => {
                let matches = self.tasks.find(&keyword);
                (self.renderer.matches(&matches), false)
            }
            Command::SnoozeDeadline { index, by } => {
                let task = self.tasks.reschedule_deadline(index, &by)?;
                (self.renderer.rescheduled(task), true)
            }
            Command::SnoozeEvent { index, from, to } => {
                let task = self.tasks.reschedule_event(index, &from, &to)?;
                (self.renderer.rescheduled(task), true)
            }
        };

        Ok(outcome)
    }
}
