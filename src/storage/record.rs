//! One task per line: the on-disk record format.
//!
//! ```text
//! {"type":"D","done":true,"desc_b64":"cmV0dXJuIGJvb2s=","by_b64":"MjAxOS0xMi0wMg=="}
//! ```
//!
//! Free-text fields are standard base64 so that no user text ever needs
//! JSON escaping or can break the one-record-per-line framing. Dates are
//! stored as typed, not in their display form.

use crate::dates::When;
use crate::task::{KindTag, Task, TaskKind};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Serialized shape of a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Kind symbol: `T`, `D` or `E`.
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub done: bool,

    pub desc_b64: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub by_b64: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_b64: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_b64: Option<String>,
}

/// Why a single line could not be turned back into a task.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("not a valid record: {0}")]
    Json(String),

    #[error("field '{0}' is not valid base64 UTF-8 text")]
    Encoding(&'static str),

    #[error("unknown task type '{0}'")]
    UnknownKind(String),

    #[error("missing field '{0}'")]
    MissingField(&'static str),

    #[error("empty description")]
    EmptyDescription,
}

impl TaskRecord {
    pub fn from_task(task: &Task) -> Self {
        let mut record = TaskRecord {
            kind: task.tag().symbol().to_string(),
            done: task.is_done(),
            desc_b64: encode(task.description()),
            by_b64: None,
            from_b64: None,
            to_b64: None,
        };

        match task.kind() {
            TaskKind::Todo => {}
            TaskKind::Deadline { by } => record.by_b64 = Some(encode(by.raw())),
            TaskKind::Event { from, to } => {
                record.from_b64 = Some(encode(from.raw()));
                record.to_b64 = Some(encode(to.raw()));
            }
        }

        record
    }

    pub fn into_task(self) -> Result<Task, RecordError> {
        let tag = KindTag::from_symbol(&self.kind).ok_or(RecordError::UnknownKind(self.kind))?;

        let description = decode(&self.desc_b64, "desc_b64")?;
        if description.trim().is_empty() {
            return Err(RecordError::EmptyDescription);
        }

        let mut task = match tag {
            KindTag::Todo => Task::todo(description),
            KindTag::Deadline => {
                let by = required(self.by_b64.as_deref(), "by_b64")?;
                Task::deadline(description, When::parse(by))
            }
            KindTag::Event => {
                let from = required(self.from_b64.as_deref(), "from_b64")?;
                let to = required(self.to_b64.as_deref(), "to_b64")?;
                Task::event(description, When::parse(from), When::parse(to))
            }
        };

        if self.done {
            task.mark_done();
        }
        Ok(task)
    }
}

/// Render a task as one JSON line (without the trailing newline).
pub fn encode_line(task: &Task) -> Result<String, serde_json::Error> {
    serde_json::to_string(&TaskRecord::from_task(task))
}

/// Parse one JSON line back into a task.
pub fn decode_line(line: &str) -> Result<Task, RecordError> {
    let record: TaskRecord =
        serde_json::from_str(line).map_err(|e| RecordError::Json(e.to_string()))?;
    record.into_task()
}

fn encode(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

fn decode(encoded: &str, field: &'static str) -> Result<String, RecordError> {
    let bytes = STANDARD
        .decode(encoded)
        .map_err(|_| RecordError::Encoding(field))?;
    String::from_utf8(bytes).map_err(|_| RecordError::Encoding(field))
}

fn required(encoded: Option<&str>, field: &'static str) -> Result<String, RecordError> {
    let text = decode(encoded.ok_or(RecordError::MissingField(field))?, field)?;
    if text.trim().is_empty() {
        return Err(RecordError::MissingField(field));
    }
    Ok(text)
}
