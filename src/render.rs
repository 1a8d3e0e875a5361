//! Response text for every outcome of a command.
//!
//! Producers return the body lines of a response; [`Renderer::frame`] turns
//! them into the final text, optionally between two separator lines. Front
//! ends treat the result as opaque text. One that draws its own chrome can
//! call [`strip_border`] to drop the decoration.

use crate::config::Config;
use crate::error::JotterError;
use crate::task::Task;
use crate::task_list::TaskList;

/// Decorative separator framing each response.
pub const SEPARATOR: &str = "____________________________________________________________";

/// Builds response text in the assistant's voice.
#[derive(Debug, Clone)]
pub struct Renderer {
    bot_name: String,
    show_border: bool,
}

impl Renderer {
    pub fn new(bot_name: impl Into<String>, show_border: bool) -> Self {
        Self {
            bot_name: bot_name.into(),
            show_border,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.bot_name.clone(), config.show_border)
    }

    /// Join body lines into a response, each indented by one space.
    pub fn frame(&self, lines: &[String]) -> String {
        let mut out = String::new();
        if self.show_border {
            out.push_str(SEPARATOR);
            out.push('\n');
        }
        for line in lines {
            out.push(' ');
            out.push_str(line);
            out.push('\n');
        }
        if self.show_border {
            out.push_str(SEPARATOR);
        } else if out.ends_with('\n') {
            out.pop();
        }
        out
    }

    pub fn welcome(&self) -> Vec<String> {
        vec![
            format!("Hello! I'm {}", self.bot_name),
            "What can I do for you?".to_string(),
        ]
    }

    pub fn goodbye(&self) -> Vec<String> {
        vec!["Bye. Hope to see you again soon!".to_string()]
    }

    pub fn error(&self, err: &JotterError) -> Vec<String> {
        vec![format!("Oops! {}", err)]
    }

    pub fn added(&self, task: &Task, count: usize) -> Vec<String> {
        vec![
            "Got it. I've added this task:".to_string(),
            format!("  {}", task),
            count_line(count),
        ]
    }

    pub fn removed(&self, task: &Task, count: usize) -> Vec<String> {
        vec![
            "Noted. I've removed this task:".to_string(),
            format!("  {}", task),
            count_line(count),
        ]
    }

    pub fn marked(&self, task: &Task, changed: bool) -> Vec<String> {
        let heading = if changed {
            "Nice! I've marked this task as done:"
        } else {
            "This task was already done:"
        };
        vec![heading.to_string(), format!("  {}", task)]
    }

    pub fn unmarked(&self, task: &Task, changed: bool) -> Vec<String> {
        let heading = if changed {
            "OK, I've marked this task as not done yet:"
        } else {
            "This task was not done yet:"
        };
        vec![heading.to_string(), format!("  {}", task)]
    }

    pub fn rescheduled(&self, task: &Task) -> Vec<String> {
        vec!["Rescheduled this task:".to_string(), format!("  {}", task)]
    }

    pub fn list(&self, tasks: &TaskList) -> Vec<String> {
        if tasks.is_empty() {
            return vec!["(no tasks yet)".to_string()];
        }
        let mut lines = vec!["Here are the tasks in your list:".to_string()];
        lines.extend(
            tasks
                .iter()
                .enumerate()
                .map(|(i, task)| format!("{}.{}", i + 1, task)),
        );
        lines
    }

    /// Matches keep their number from the full list so they can be passed
    /// straight to `mark` or `delete`.
    pub fn matches(&self, matches: &[(usize, &Task)]) -> Vec<String> {
        if matches.is_empty() {
            return vec!["No matching tasks found.".to_string()];
        }
        let mut lines = vec!["Here are the matching tasks in your list:".to_string()];
        lines.extend(
            matches
                .iter()
                .map(|(index, task)| format!("{}.{}", index, task)),
        );
        lines
    }

    pub fn save_failed(&self, err: &JotterError) -> String {
        format!(
            "Warning: your changes are kept for this session but were not saved ({})",
            err
        )
    }
}

fn count_line(count: usize) -> String {
    let noun = if count == 1 { "task" } else { "tasks" };
    format!("Now you have {} {} in the list.", count, noun)
}

/// Remove separator lines and the one-space indent from a framed response.
pub fn strip_border(text: &str) -> String {
    text.lines()
        .filter(|line| *line != SEPARATOR)
        .map(|line| line.strip_prefix(' ').unwrap_or(line))
        .collect::<Vec<_>>()
        .join("\n")
}
