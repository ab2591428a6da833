use std::io::{self, Cursor};

use crate::interact::{interact, line_interact_on};
use crate::lines::{read_lines, write_lines};
use crate::tests::support::{BrokenPipe, LineFeed, SharedWriter};

#[test]
fn line_interact_identity_copies_line_for_line() {
    let input = "one\n\nthree\n";
    let mut out = Vec::new();

    line_interact_on(Cursor::new(input), &mut out, |lines| lines).unwrap();

    assert_eq!(out, input.as_bytes());
}

#[test]
fn line_interact_filter_keeps_matching_lines() {
    let mut written = Vec::new();
    write_lines(&mut written, ["1 apple", "2 pear", "3 kiwi"]).unwrap();

    let mut out = Vec::new();
    line_interact_on(Cursor::new(&written), &mut out, |lines| {
        lines.filter(|l| l.starts_with('1'))
    })
    .unwrap();

    let result: Vec<String> = read_lines(Cursor::new(&out))
        .collect::<io::Result<_>>()
        .unwrap();
    assert_eq!(result, vec!["1 apple"]);
}

#[test]
fn line_interact_can_reorder_whole_input() {
    let mut out = Vec::new();
    line_interact_on(Cursor::new("b\nc\na\n"), &mut out, |lines| {
        let mut all: Vec<String> = lines.collect();
        all.sort();
        all
    })
    .unwrap();

    assert_eq!(out, b"a\nb\nc\n");
}

#[test]
fn line_interact_on_empty_input_writes_nothing() {
    let mut out = Vec::new();
    line_interact_on(Cursor::new(""), &mut out, |lines| lines).unwrap();
    assert!(out.is_empty());
}

#[test]
fn line_interact_terminates_final_line() {
    let mut out = Vec::new();
    line_interact_on(Cursor::new("no newline"), &mut out, |lines| lines).unwrap();
    assert_eq!(out, b"no newline\n");
}

#[test]
fn line_interact_pulls_only_what_the_function_consumes() {
    // The second line is not valid UTF-8; reading it would fail the call.
    let input = &b"head\n\xff\xfe\n"[..];
    let mut out = Vec::new();

    line_interact_on(Cursor::new(input), &mut out, |lines| lines.take(1)).unwrap();

    assert_eq!(out, b"head\n");
}

#[test]
fn line_interact_reports_read_error_after_writing_earlier_lines() {
    let input = &b"a\nb\n\xff\nc\n"[..];
    let mut out = Vec::new();

    let err = line_interact_on(Cursor::new(input), &mut out, |lines| lines).unwrap_err();

    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    assert_eq!(out, b"a\nb\n");
}

#[test]
fn line_interact_propagates_write_error() {
    let err = line_interact_on(Cursor::new("x\n"), &mut BrokenPipe, |lines| lines).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
}

#[test]
fn interact_applies_function_to_whole_input() {
    let mut out = Vec::new();
    interact(Cursor::new("abc\ndef"), &mut out, |s| s.chars().rev().collect()).unwrap();
    assert_eq!(out, b"fed\ncba");
}

// A block transform must target the handle it was given, never the process
// stdout. Output captured in `out` proves the supplied handle was used.
#[test]
fn interact_writes_to_supplied_output_handle() {
    let mut out = Vec::new();
    interact(Cursor::new("shout"), &mut out, |s| s.to_uppercase()).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "SHOUT");
}

#[test]
fn interact_adds_no_newline() {
    let mut out = Vec::new();
    interact(Cursor::new(""), &mut out, |_| "x".to_string()).unwrap();
    assert_eq!(out, b"x");
}

#[test]
fn interact_propagates_invalid_utf8() {
    let mut out = Vec::new();
    let err = interact(Cursor::new(&b"\xff"[..]), &mut out, |s| s).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    assert!(out.is_empty());
}

#[test]
fn line_interact_writes_each_line_before_reading_the_next() {
    let out = SharedWriter::default();
    let input = LineFeed::new(["a\n", "b\n", "c\n"], &out);
    let seen = input.seen.clone();

    line_interact_on(input, &mut out.clone(), |lines| lines).unwrap();

    // Output length observed as each input line was pulled.
    assert_eq!(*seen.borrow(), vec![0, 2, 4]);
    assert_eq!(*out.0.borrow(), b"a\nb\nc\n");
}
