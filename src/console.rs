//! Line-based console front-end.
//!
//! Reads one command per line, prints each response, and stops after `bye`
//! or when input runs out.

use crate::session::Session;
use log::warn;
use std::io::{self, BufRead, Write};

/// Drive `session` from `input` until it terminates.
///
/// Only failures to write to `output` are errors. An unreadable input line
/// is treated like end of input.
pub fn run<R: BufRead, W: Write>(session: &mut Session, input: R, mut output: W) -> io::Result<()> {
    writeln!(output, "{}", session.greeting())?;
    output.flush()?;

    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("stopped reading input: {}", e);
                break;
            }
        };

        let response = session.handle(&line);
        writeln!(output, "{}", response.text)?;
        output.flush()?;

        if response.exit {
            return Ok(());
        }
    }

    session.end_of_input();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Renderer;
    use crate::session::SessionState;
    use crate::storage::Storage;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run_script(temp_dir: &TempDir, script: &str) -> (Session, String) {
        let storage = Storage::new(temp_dir.path().join("tasks.jsonl"));
        let mut session = Session::open(storage, Renderer::new("Jotter", false));
        let mut output = Vec::new();
        run(&mut session, Cursor::new(script), &mut output).unwrap();
        (session, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_stops_at_bye() {
        let temp_dir = TempDir::new().unwrap();
        let (session, output) = run_script(&temp_dir, "todo read book\nbye\ntodo ignored\n");

        assert_eq!(session.state(), SessionState::Terminated);
        assert_eq!(session.tasks().len(), 1);
        let greeting = " Hello! I'm Jotter\n What can I do for you?\n";
        assert!(output.starts_with(greeting));
        assert!(output.ends_with(" Bye. Hope to see you again soon!\n"));
    }

    #[test]
    fn test_end_of_input_has_no_farewell() {
        let temp_dir = TempDir::new().unwrap();
        let (session, output) = run_script(&temp_dir, "todo read book\nlist");

        assert_eq!(session.state(), SessionState::Terminated);
        assert!(output.ends_with(" 1.[T][ ] read book\n"));
        assert!(!output.contains("Bye."));
    }
}
