//! End-to-end tests for the autopgp binary
//!
//! These run the compiled executable the way an operator would and check
//! exit status, log output and the files left behind.

mod common;

use common::{armored_public_key, decrypt, generate_cert};
use sequoia_openpgp::types::SymmetricAlgorithm;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_autopgp"))
        .args(args)
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to run autopgp")
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("Non UTF-8 temp path")
}

#[test]
fn test_modern_encryption_succeeds() {
    let temp_dir = TempDir::new().unwrap();
    let cert = generate_cert("cli@example.org");
    let key = temp_dir.path().join("key.asc");
    let input = temp_dir.path().join("ten.bin");
    let output = temp_dir.path().join("ten.bin.gpg");
    fs::write(&key, armored_public_key(&cert)).unwrap();
    fs::write(&input, b"0123456789").unwrap();

    let result = run(&[
        "-key",
        path_str(&key),
        "-input",
        path_str(&input),
        "-output",
        path_str(&output),
    ]);

    assert!(result.status.success());
    let logs = String::from_utf8_lossy(&result.stderr);
    assert!(logs.contains(&cert.fingerprint().to_hex()));
    assert!(logs.contains("AES256"));
    assert!(logs.contains("SHA512"));
    assert!(logs.contains("Wrote ciphertext file"));

    let decrypted = decrypt(&cert, &fs::read(&output).unwrap());
    assert_eq!(decrypted.plaintext, b"0123456789");
    assert_eq!(decrypted.cipher, SymmetricAlgorithm::AES256);
}

#[test]
fn test_compat_encryption_logs_legacy_algorithms() {
    let temp_dir = TempDir::new().unwrap();
    let cert = generate_cert("legacy@example.org");
    let key = temp_dir.path().join("key.asc");
    let input = temp_dir.path().join("notes.txt");
    let output = temp_dir.path().join("notes.txt.gpg");
    fs::write(&key, armored_public_key(&cert)).unwrap();
    fs::write(&input, b"old school").unwrap();

    let result = run(&[
        "-compat",
        "-key",
        path_str(&key),
        "-input",
        path_str(&input),
        "-output",
        path_str(&output),
    ]);

    assert!(result.status.success());
    let logs = String::from_utf8_lossy(&result.stderr);
    assert!(logs.contains("3DES"));
    assert!(logs.contains("SHA1"));

    let decrypted = decrypt(&cert, &fs::read(&output).unwrap());
    assert_eq!(decrypted.plaintext, b"old school");
    assert_eq!(decrypted.cipher, SymmetricAlgorithm::TripleDES);
}

#[test]
fn test_missing_key_file_fails_without_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("plain.txt");
    let output = temp_dir.path().join("plain.txt.gpg");
    fs::write(&input, b"data").unwrap();

    let result = run(&[
        "-key",
        path_str(&temp_dir.path().join("missing.asc")),
        "-input",
        path_str(&input),
        "-output",
        path_str(&output),
    ]);

    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("missing.asc"));
    assert!(!output.exists());
}

#[test]
fn test_missing_flag_fails_fast() {
    let result = run(&["-input", "plain.txt", "-output", "plain.txt.gpg"]);

    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("-key is required"));
}

#[test]
fn test_help_prints_usage() {
    let result = run(&["-help"]);

    assert!(result.status.success());
    assert!(String::from_utf8_lossy(&result.stdout).contains("Usage: autopgp"));
}
