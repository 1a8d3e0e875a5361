//! Tests for loading and saving the task file.

use super::*;
use crate::dates::When;
use crate::task::KindTag;
use crate::task_list::TaskList;
use crate::test_support::scratch_store;
use std::fs;
use tempfile::TempDir;

fn sample_tasks() -> Vec<Task> {
    let mut list = TaskList::new();
    list.add_todo("read book").unwrap();
    list.add_deadline("return book", "2019-12-02").unwrap();
    list.add_event("meet boss", "2019-12-02 1400", "2019-12-02 1500")
        .unwrap();
    list.add_deadline("essay", "next week").unwrap();
    list.mark(2).unwrap();
    list.as_slice().to_vec()
}

#[test]
fn test_save_then_load_round_trip() {
    let (_temp_dir, storage) = scratch_store();
    let tasks = sample_tasks();

    storage.save(&tasks).unwrap();
    let report = storage.load().unwrap();

    assert!(report.skipped.is_empty());
    assert_eq!(report.tasks, tasks);

    let kinds: Vec<KindTag> = report.tasks.iter().map(|t| t.tag()).collect();
    assert_eq!(
        kinds,
        vec![KindTag::Todo, KindTag::Deadline, KindTag::Event, KindTag::Deadline]
    );
    assert!(report.tasks[1].is_done());
    match report.tasks[2].kind() {
        TaskKind::Event { from, to } => {
            assert_eq!(from.raw(), "2019-12-02 1400");
            assert_eq!(to.raw(), "2019-12-02 1500");
        }
        other => panic!("expected an event, got {:?}", other),
    }
    assert_eq!(report.tasks[3].to_string(), "[D][ ] essay (by: next week)");
}

#[test]
fn test_save_writes_one_line_per_task() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("tasks.jsonl");
    let storage = Storage::new(&path);

    storage.save(&sample_tasks()).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 4);
    assert!(content.ends_with('\n'));
}

#[test]
fn test_save_truncates_previous_content() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("tasks.jsonl");
    let storage = Storage::new(&path);

    storage.save(&sample_tasks()).unwrap();
    storage.save(&[Task::todo("only one")]).unwrap();

    let report = storage.load().unwrap();
    assert_eq!(report.tasks, vec![Task::todo("only one")]);
}

#[test]
fn test_missing_file_is_created_empty() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("fresh").join("tasks.jsonl");
    let storage = Storage::new(&path);

    let report = storage.load().unwrap();

    assert!(report.tasks.is_empty());
    assert!(report.skipped.is_empty());
    assert!(path.exists());
}

#[test]
fn test_corrupted_lines_are_isolated() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("tasks.jsonl");
    let content = [
        "// written by hand",
        r#"{"type":"T","done":false,"desc_b64":"cmVhZCBib29r"}"#,
        "",
        "{ this is not json",
        r#"{"type":"Z","done":false,"desc_b64":"eA=="}"#,
        r#"{"type":"D","done":true,"desc_b64":"cmV0dXJuIGJvb2s=","by_b64":"MjAxOS0xMi0wMg=="}"#,
        r#"{"type":"D","done":true,"desc_b64":"eA=="}"#,
    ]
    .join("\n");
    fs::write(&path, content).unwrap();

    let report = Storage::new(&path).load().unwrap();

    assert_eq!(report.tasks.len(), 2);
    assert_eq!(report.tasks[0].to_string(), "[T][ ] read book");
    assert_eq!(
        report.tasks[1].to_string(),
        "[D][X] return book (by: Dec 2 2019)"
    );

    let skipped_lines: Vec<usize> = report.skipped.iter().map(|s| s.line).collect();
    assert_eq!(skipped_lines, vec![4, 5, 7]);
}

#[test]
fn test_invalid_utf8_line_is_skipped() {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"\xff\xfe garbage\n");
    bytes.extend_from_slice(br#"{"type":"T","desc_b64":"eA=="}"#);

    let report = parse_lines(&bytes);

    assert_eq!(report.tasks, vec![Task::todo("x")]);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].line, 1);
}

#[test]
fn test_inverted_event_on_disk_is_kept() {
    let task = Task::event("camp", When::parse("2019-12-05"), When::parse("2019-12-01"));
    let line = record::encode_line(&task).unwrap();

    let report = parse_lines(line.as_bytes());

    assert_eq!(report.tasks, vec![task]);
}

#[test]
fn test_unreadable_path_is_a_storage_error() {
    let temp_dir = TempDir::new().unwrap();
    // A directory where the data file should be.
    let path = temp_dir.path().join("tasks.jsonl");
    fs::create_dir(&path).unwrap();

    let err = Storage::new(&path).load().unwrap_err();
    assert!(matches!(err, JotterError::Storage(_)));

    let err = Storage::new(&path).save(&sample_tasks()).unwrap_err();
    assert!(matches!(err, JotterError::Storage(_)));
}
