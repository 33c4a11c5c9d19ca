//! Integration tests for the `bencode` CLI binary.
//!
//! Exercises the decode, encode, and stats subcommands through the actual
//! binary: stdin/stdout piping, file I/O, charset handling, error exits,
//! and a JSON round trip over the fixtures.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the sample.torrent fixture.
fn sample_torrent_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/sample.torrent")
}

/// Helper: path to the sample.json fixture.
fn sample_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/sample.json")
}

fn bencode() -> Command {
    Command::cargo_bin("bencode").unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Decode subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn decode_stdin_to_stdout() {
    bencode()
        .arg("decode")
        .write_stdin(&b"d3:cow3:moo4:spam4:eggse"[..])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"cow\": \"moo\""))
        .stdout(predicate::str::contains("\"spam\": \"eggs\""));
}

#[test]
fn decode_file_to_stdout() {
    bencode()
        .args(["decode", "-i", sample_torrent_path()])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"announce\""))
        .stdout(predicate::str::contains("\"creation date\": 1414070124"));
}

#[test]
fn decode_to_file() {
    let out = std::env::temp_dir().join("bencode_cli_decode_out.json");
    bencode()
        .args(["decode", "-i", sample_torrent_path(), "-o"])
        .arg(&out)
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(
        json["info"]["name"],
        serde_json::json!("example-1.0.iso")
    );
    std::fs::remove_file(&out).unwrap();
}

#[test]
fn decode_renders_text_under_requested_charset() {
    bencode()
        .args(["decode", "--charset", "windows-1252"])
        .write_stdin(&b"d4:name4:caf\xe9e"[..])
        .assert()
        .success()
        .stdout(predicate::str::contains("caf\u{e9}"));
}

#[test]
fn decode_malformed_input_fails() {
    bencode()
        .arg("decode")
        .write_stdin(&b"d3:key"[..])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to decode"));
}

#[test]
fn unknown_charset_label_fails() {
    bencode()
        .args(["decode", "--charset", "klingon-8"])
        .write_stdin(&b"de"[..])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown charset label"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Encode subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn encode_stdin_to_stdout() {
    bencode()
        .arg("encode")
        .write_stdin(r#"{"a": 1, "b": ["x"]}"#)
        .assert()
        .success()
        .stdout(predicate::eq(&b"d1:ai1e1:bl1:xee"[..]));
}

#[test]
fn encode_output_is_canonical_regardless_of_json_key_order() {
    bencode()
        .arg("encode")
        .write_stdin(r#"{"end": 47, "start": 42, "anupper": -12}"#)
        .assert()
        .success()
        .stdout(predicate::eq(&b"d7:anupperi-12e3:endi47e5:starti42ee"[..]));
}

#[test]
fn encode_rejects_non_representable_json() {
    bencode()
        .arg("encode")
        .write_stdin(r#"{"x": 1.5}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not representable"));
}

#[test]
fn encode_rejects_invalid_json() {
    bencode()
        .arg("encode")
        .write_stdin("{not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse JSON"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Stats subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn stats_reports_sizes_and_counts() {
    bencode()
        .args(["stats", "-i", sample_torrent_path()])
        .assert()
        .success()
        .stdout(predicate::str::contains("size:         330 bytes"))
        .stdout(predicate::str::contains("integers:     3"))
        .stdout(predicate::str::contains("dictionaries: 2"))
        .stdout(predicate::str::contains("max depth:    4"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Round trip across subcommands
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn json_survives_encode_then_decode() {
    let encoded = std::env::temp_dir().join("bencode_cli_roundtrip.bencode");
    bencode()
        .args(["encode", "-i", sample_json_path(), "-o"])
        .arg(&encoded)
        .assert()
        .success();

    let output = bencode()
        .args(["decode", "-i"])
        .arg(&encoded)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let original: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(sample_json_path()).unwrap()).unwrap();
    let roundtripped: serde_json::Value =
        serde_json::from_slice(&output).unwrap();
    assert_eq!(original, roundtripped);
    std::fs::remove_file(&encoded).unwrap();
}
