//! Process-level contract of the feedgen binary

use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn feedgen() -> Command {
    Command::new(env!("CARGO_BIN_EXE_feedgen"))
}

#[test]
fn non_numeric_count_is_rejected_with_usage() {
    let output = feedgen().arg("abc").output().expect("run feedgen");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid value"), "stderr: {stderr}");
    assert!(stderr.contains("Usage"), "stderr: {stderr}");
}

#[test]
fn negative_count_is_rejected_with_usage() {
    let output = feedgen().arg("-5").output().expect("run feedgen");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "stderr: {stderr}");
}

#[test]
fn zero_count_exits_clean_with_a_header_only_file() {
    let dir = TempDir::new().expect("temp dir");
    let output = feedgen()
        .arg("0")
        .arg("--out-dir")
        .arg(dir.path())
        .output()
        .expect("run feedgen");
    assert!(output.status.success(), "status {:?}", output.status);
    let dataset =
        fs::read_to_string(dir.path().join("large_dataset_0k.csv")).expect("dataset file");
    assert_eq!(dataset, "# ts_ns,MsgType,Side,OrderId,Price,Qty\n");
}
