//! End-to-end tests for the `wordmap` binary.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn wordmap(args: &[&str], stdin: Option<&str>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_wordmap"))
        .args(args)
        .env_remove("WORDMAP_FORMAT")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn wordmap");

    {
        let mut pipe = child.stdin.take().unwrap();
        if let Some(input) = stdin {
            pipe.write_all(input.as_bytes()).unwrap();
        }
    }

    child.wait_with_output().unwrap()
}

#[test]
fn prints_sample_mapping_by_default() {
    let output = wordmap(&[], None);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with(
        "[['I', 'Title: I am exploiting my employer and I have never been happier'], ['am', "
    ));
    assert!(stdout.ends_with("['[deleted]', 'Description: [deleted]']]\n"));
}

#[test]
fn reads_lines_from_stdin() {
    let output = wordmap(&["--stdin", "--format", "json"], Some("Title: a  b\r\nnoise\nDescription:\n"));
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "[[\"a\",\"Title: a  b\"],[\"b\",\"Title: a  b\"]]\n");
}

#[test]
fn format_env_sets_default() {
    let output = Command::new(env!("CARGO_BIN_EXE_wordmap"))
        .env("WORDMAP_FORMAT", "json")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout).unwrap().starts_with("[[\"I\","));
}

#[test]
fn invalid_format_env_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_wordmap"))
        .env("WORDMAP_FORMAT", "xml")
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr).unwrap().contains("unknown output format"));
}

#[test]
fn stdin_keeps_carriage_returns_inside_the_line() {
    let output = wordmap(&["--stdin", "--format", "json"], Some("Title: x\r\r\nTitle: y\r"));
    assert!(output.status.success());

    let pairs: Vec<(String, String)> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        pairs,
        [
            ("x".to_string(), "Title: x\r".to_string()),
            ("y".to_string(), "Title: y\r".to_string()),
        ]
    );
}
