use std::fs;
use std::path::Path;

use graphql_fixtures::constants::{LINE_TABULATION, NOT_WHITESPACE, ZERO_WIDTH_NO_BREAK_SPACE};
use graphql_fixtures::error::Error;
use graphql_fixtures::fixture::{read_fixture, render, FixtureWriter};
use itertools::Itertools;
use tempfile::TempDir;

static TWO_ENTRIES: [u32; 2] = [ZERO_WIDTH_NO_BREAK_SPACE, LINE_TABULATION];

fn generated(dir: &TempDir) -> (FixtureWriter, Vec<u8>) {
    let writer = FixtureWriter::for_source(dir.path().join("not_whitespace.rs")).unwrap();
    assert_eq!(writer.generate().unwrap(), NOT_WHITESPACE.len());
    let bytes = fs::read(writer.output_path()).unwrap();
    (writer, bytes)
}

#[test]
fn list_has_no_duplicates() {
    assert!(NOT_WHITESPACE.iter().all_unique());
}

#[test]
fn two_entry_scenario() {
    let dir = TempDir::new().unwrap();
    let writer = FixtureWriter::with_codes(dir.path().join("gen.rs"), &TWO_ENTRIES).unwrap();
    assert_eq!(writer.generate().unwrap(), 2);

    let bytes = fs::read(dir.path().join("gen.graphql")).unwrap();
    assert_eq!(bytes, "\u{FEFF}# U+FEFF\n\u{000B}# U+000B\n".as_bytes());
}

#[test]
fn output_is_sibling_of_source() {
    let dir = TempDir::new().unwrap();
    let (writer, _) = generated(&dir);
    assert_eq!(writer.output_path(), dir.path().join("not_whitespace.graphql"));
    assert!(!dir.path().join("not_whitespace.rs").exists());
}

#[test]
fn repeated_runs_are_byte_identical() {
    let first_dir = TempDir::new().unwrap();
    let second_dir = TempDir::new().unwrap();
    let (_, first) = generated(&first_dir);
    let (_, second) = generated(&second_dir);
    assert_eq!(first, second);
    assert_eq!(first, render(&NOT_WHITESPACE).unwrap());
}

#[test]
fn rerun_overwrites_instead_of_appending() {
    let dir = TempDir::new().unwrap();
    let (writer, once) = generated(&dir);
    writer.generate().unwrap();
    assert_eq!(fs::read(writer.output_path()).unwrap(), once);

    fs::write(writer.output_path(), vec![b'x'; once.len() * 3]).unwrap();
    writer.generate().unwrap();
    assert_eq!(fs::read(writer.output_path()).unwrap(), once);
}

#[test]
fn every_line_is_a_record() {
    let dir = TempDir::new().unwrap();
    let (_, bytes) = generated(&dir);
    let text = String::from_utf8(bytes).unwrap();
    assert!(text.ends_with('\n'));

    let lines = text.trim_end_matches('\n').split('\n').collect::<Vec<_>>();
    assert_eq!(lines.len(), NOT_WHITESPACE.len());
    for (line, code) in lines.iter().zip(NOT_WHITESPACE.iter()) {
        let mut chars = line.chars();
        assert_eq!(chars.next().map(|c| c as u32), Some(*code));
        assert_eq!(chars.as_str(), format!("# U+{:04X}", code));
    }
}

#[test]
fn read_back_reproduces_list() {
    let dir = TempDir::new().unwrap();
    let (writer, _) = generated(&dir);
    assert_eq!(read_fixture(writer.output_path()).unwrap(), NOT_WHITESPACE.to_vec());
}

#[test]
fn missing_directory_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let writer = FixtureWriter::for_source(dir.path().join("absent").join("gen.rs")).unwrap();
    match writer.generate() {
        Err(Error::Io { path, .. }) => assert_eq!(path, dir.path().join("absent").join("gen.graphql")),
        other => panic!("expected io error, got {:?}", other),
    }
}

#[test]
fn reading_a_missing_fixture_fails() {
    let dir = TempDir::new().unwrap();
    match read_fixture(dir.path().join("nothing.graphql")) {
        Err(Error::Io { .. }) => {}
        other => panic!("expected io error, got {:?}", other),
    }
}

#[test]
fn committed_fixture_is_current() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("test_data/lexer/err/not_whitespace.graphql");
    assert_eq!(fs::read(&path).unwrap(), render(&NOT_WHITESPACE).unwrap());
}
