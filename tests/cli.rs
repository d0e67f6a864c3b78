use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn term_finder(args: &[&str], stdin: Option<&str>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_term-finder"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("binary should start");
    {
        let mut pipe = child.stdin.take().unwrap();
        if let Some(text) = stdin {
            pipe.write_all(text.as_bytes()).unwrap();
        }
    }
    child.wait_with_output().unwrap()
}

#[test]
fn test_reads_stdin_without_files() {
    let out = term_finder(&["--terms", "we, you"], Some("We will handle your concerns"));
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "We, your\n");
}

#[test]
fn test_prints_files_in_argument_order() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    fs::write(&a, "Our team our goals").unwrap();
    fs::write(&b, "that is ours").unwrap();

    let out = term_finder(
        &["-t", "our", b.to_str().unwrap(), a.to_str().unwrap()],
        None,
    );
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        format!("{}: ours\n{}: Our, our\n", b.display(), a.display())
    );
}

#[test]
fn test_unreadable_file_exits_with_one() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.txt");

    let out = term_finder(&["-t", "we", missing.to_str().unwrap()], None);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Failed to read"));
}

#[test]
fn test_strict_rejects_invalid_pattern() {
    let out = term_finder(&["-t", "we, (here", "--strict"], Some("we met"));
    assert_eq!(out.status.code(), Some(1));

    let out = term_finder(&["-t", "we, (here"], Some("we met"));
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "we\n");
}
