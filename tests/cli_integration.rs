//! CLI integration tests
//!
//! Tests the command-line interface end-to-end.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Get path to the classicrypt binary
fn classicrypt_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_classicrypt"))
}

/// Run classicrypt with `stdin` piped in
fn run_classicrypt(args: &[&str], stdin: &str) -> Result<Output, std::io::Error> {
    let mut child = Command::new(classicrypt_bin())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    {
        let pipe = child.stdin.as_mut().expect("failed to open stdin");
        // Ignore BrokenPipe errors - the command may exit before reading stdin
        let _ = pipe.write_all(stdin.as_bytes());
    }
    // Close stdin so commands reading it see end of input.
    drop(child.stdin.take());

    child.wait_with_output()
}

fn stdout_of(output: &Output) -> String {
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_caesar_positional_text() {
    let result = run_classicrypt(&["caesar", "-s", "3", "hello world"], "").unwrap();
    assert_eq!(stdout_of(&result), "khoor zruog\n");

    let result = run_classicrypt(&["caesar", "-s", "3", "-d", "khoor zruog"], "").unwrap();
    assert_eq!(stdout_of(&result), "hello world\n");
}

#[test]
fn test_caesar_negative_shift() {
    let result = run_classicrypt(&["caesar", "--shift", "-3", "abc"], "").unwrap();
    assert_eq!(stdout_of(&result), "xyz\n");
}

#[test]
fn test_vigenere_file_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let plain = temp_dir.path().join("plain.txt");
    let encoded = temp_dir.path().join("encoded.txt");
    let decoded = temp_dir.path().join("decoded.txt");
    fs::write(&plain, "Attack at dawn!\n").unwrap();

    let result = run_classicrypt(
        &[
            "vigenere",
            "-k",
            "lemon",
            "-i",
            plain.to_str().unwrap(),
            "-o",
            encoded.to_str().unwrap(),
        ],
        "",
    )
    .unwrap();
    stdout_of(&result);
    assert_eq!(fs::read_to_string(&encoded).unwrap(), "lxfopv ef rnhr!\n");

    let result = run_classicrypt(
        &[
            "vigenere",
            "-k",
            "lemon",
            "-d",
            "-i",
            encoded.to_str().unwrap(),
            "-o",
            decoded.to_str().unwrap(),
        ],
        "",
    )
    .unwrap();
    stdout_of(&result);
    assert_eq!(fs::read_to_string(&decoded).unwrap(), "attack at dawn!\n");
}

#[test]
fn test_vigenere_without_keyword_needs_terminal() {
    let result = run_classicrypt(&["vigenere", "hello"], "").unwrap();
    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(
        stderr.contains("not a terminal"),
        "Expected terminal error, got: {}",
        stderr
    );
}

#[test]
fn test_playfair_roundtrip() {
    let result = run_classicrypt(&["playfair", "-k", "keyword", "hello world"], "").unwrap();
    let encoded = stdout_of(&result);
    assert_eq!(encoded, "gyffkokcgc\n");

    let result = run_classicrypt(&["playfair", "-k", "keyword", "-d", encoded.trim()], "").unwrap();
    assert_eq!(stdout_of(&result), "helloworld\n");
}

#[test]
fn test_rail_fence_from_stdin() {
    let result = run_classicrypt(
        &["rail-fence", "-r", "3"],
        "defendtheeastwallofthecastle",
    )
    .unwrap();
    assert_eq!(stdout_of(&result), "dnetlhseedheswloteateftaafcl\n");
}

#[test]
fn test_rail_fence_pipe_roundtrip() {
    let result = run_classicrypt(&["rail-fence", "-r", "3"], "defend the east wall\n").unwrap();
    let encoded = stdout_of(&result);
    assert_eq!(encoded, "dnhaweedtees alf  tl\n");

    let result = run_classicrypt(&["rail-fence", "-r", "3", "-d"], &encoded).unwrap();
    assert_eq!(stdout_of(&result), "defend the east wall\n");
}

#[test]
fn test_stdin_crlf_stripped_once() {
    let result = run_classicrypt(&["atbash"], "abc\r\n").unwrap();
    assert_eq!(stdout_of(&result), "zyx\n");

    let result = run_classicrypt(&["caesar", "-s", "1"], "abc\n\n").unwrap();
    assert_eq!(stdout_of(&result), "bcd\n\n");
}

#[test]
fn test_rail_fence_zero_rails_fails() {
    let result = run_classicrypt(&["rail-fence", "-r", "0", "hello"], "").unwrap();
    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("rails"), "unexpected stderr: {}", stderr);
}

#[test]
fn test_atbash() {
    let result = run_classicrypt(&["atbash", "abcdefghijklmnopqrstuvwxyz"], "").unwrap();
    assert_eq!(stdout_of(&result), "zyxwvutsrqponmlkjihgfedcba\n");
}

#[test]
fn test_brute_force_top() {
    let result = run_classicrypt(&["brute-force", "-t", "1", "wkh hqg ri wkh urdg"], "").unwrap();
    assert_eq!(stdout_of(&result), "Offset 3: the end of the road (Score: 3)\n");

    let result = run_classicrypt(&["brute-force", "-t", "0", "khoor"], "").unwrap();
    let report = stdout_of(&result);
    assert_eq!(report.lines().count(), 26);
    assert!(report.ends_with(")\n") && !report.ends_with("\n\n"));
}

#[test]
fn test_keygen() {
    let result = run_classicrypt(&["keygen", "--kind", "playfair", "--length", "10"], "").unwrap();
    let key = stdout_of(&result);
    let key = key.trim();
    assert_eq!(key.len(), 25);
    assert!(!key.contains('j'));

    let result = run_classicrypt(&["keygen", "--kind", "vigenere", "--length", "12"], "").unwrap();
    assert_eq!(stdout_of(&result).trim().len(), 12);

    let result = run_classicrypt(&["keygen", "--kind", "playfair", "--length", "26"], "").unwrap();
    assert!(!result.status.success());
}

#[test]
fn test_missing_input_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let nonexistent = temp_dir.path().join("nonexistent.txt");
    let output = temp_dir.path().join("output.txt");

    let result = run_classicrypt(
        &[
            "atbash",
            "-i",
            nonexistent.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ],
        "",
    )
    .unwrap();

    assert!(!result.status.success());
    assert!(!output.exists());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(
        stderr.starts_with("Error: could not load message from"),
        "got: {}",
        stderr
    );
    assert!(stderr.contains("caused by: failed to read from"), "got: {}", stderr);
}

#[test]
fn test_menu_session() {
    let result = run_classicrypt(&["menu"], "1\nhello world\n3\n16\n").unwrap();
    let out = stdout_of(&result);
    assert!(out.contains("Encoded message: khoor zruog\n"));
    assert!(out.ends_with("Goodbye!\n"));
}

#[test]
fn test_menu_is_default() {
    let result = run_classicrypt(&[], "9\nabc\n").unwrap();
    let out = stdout_of(&result);
    assert!(out.contains("Encoded/Decoded message: zyx\n"));
}
