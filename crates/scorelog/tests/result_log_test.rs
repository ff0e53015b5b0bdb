use scorelog::{LocalStorage, LogError, RecordedInputs, ResultLog};
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

fn open(temp_dir: &TempDir) -> ResultLog {
    let storage = Arc::new(LocalStorage::new(temp_dir.path()));
    ResultLog::open(storage, "data/log.json").expect("Failed to open log")
}

#[test]
fn test_file_is_not_created_until_first_write() {
    let temp_dir = TempDir::new().unwrap();
    let log = open(&temp_dir);

    assert!(log.is_empty());
    assert!(!temp_dir.path().join("data").exists());
}

#[test]
fn test_write_log_on_disk() {
    let temp_dir = TempDir::new().unwrap();
    let mut log = open(&temp_dir);

    log.write(6, RecordedInputs::new(2_i64, 1.5, "2.5")).unwrap();

    let content = std::fs::read_to_string(temp_dir.path().join("data/log.json")).unwrap();
    let document: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(document, serde_json::json!({"6": [2, 1.5, "2.5"]}));
}

#[test]
fn test_duplicate_write_leaves_file_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("data/log.json");
    let mut log = open(&temp_dir);

    log.write(6, RecordedInputs::new(2_i64, 1.5, "2.5")).unwrap();
    let before = std::fs::read_to_string(&path).unwrap();

    assert!(!log.write(6, RecordedInputs::new(1_i64, 2.0, "x_3")).unwrap());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn test_existing_document_is_loaded() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::create_dir_all(temp_dir.path().join("data")).unwrap();
    std::fs::write(
        temp_dir.path().join("data/log.json"),
        r#"{"10": [3, 4.6, "Number_3"]}"#,
    )
    .unwrap();

    let mut log = open(&temp_dir);
    assert_eq!(log.len(), 1);
    assert_eq!(
        log.get(10),
        Some(&RecordedInputs::new(3_i64, 4.6, "Number_3"))
    );

    log.write(58, RecordedInputs::new(4_i64, 51.1, "Number_2")).unwrap();
    let reopened = open(&temp_dir);
    assert_eq!(reopened.len(), 2);
    assert_eq!(reopened.path(), Path::new("data/log.json"));
}

#[test]
fn test_malformed_document_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::create_dir_all(temp_dir.path().join("data")).unwrap();
    std::fs::write(temp_dir.path().join("data/log.json"), "").unwrap();

    let storage = Arc::new(LocalStorage::new(temp_dir.path()));
    let result = ResultLog::open(storage, "data/log.json");
    assert!(matches!(result, Err(LogError::Malformed { .. })));
}

#[test]
fn test_independent_logs_overwrite_each_other() {
    // Known limitation: each log rewrites the whole document from its own view.
    let temp_dir = TempDir::new().unwrap();
    let mut first = open(&temp_dir);
    let mut second = open(&temp_dir);

    first.write(1, RecordedInputs::new(1_i64, 0.0, "a_0")).unwrap();
    second.write(2, RecordedInputs::new(2_i64, 0.0, "a_0")).unwrap();

    let reopened = open(&temp_dir);
    assert!(!reopened.contains(1));
    assert!(reopened.contains(2));
}
