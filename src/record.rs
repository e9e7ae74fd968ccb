//! One fixture line per code point: the raw character, then a GraphQL comment
//! naming it.
//!
//! ```text
//! <c># U+FEFF
//! ```

use crate::constants::COMMENT_MARKER;
use crate::error::{Error, Result};

/// The annotation that follows the character `code` on its line.
fn annotation(code: u32) -> String {
    format!("{marker} U+{code:04X}", marker = COMMENT_MARKER, code = code)
}

/// Build the record for `code`, newline included.
pub fn format_record(code: u32) -> Result<String> {
    let c = std::char::from_u32(code).ok_or(Error::Encoding(code))?;
    Ok(format!("{c}{annotation}\n", c = c, annotation = annotation(code)))
}

/// Recover the code point from one record, given without its newline.
/// `line` is the 1-based line number reported on failure.
pub fn parse_record(line: usize, text: &str) -> Result<u32> {
    let malformed = || Error::MalformedRecord {
        line,
        text: text.to_string(),
    };

    let mut chars = text.chars();
    let code = chars.next().ok_or_else(malformed)? as u32;
    if chars.as_str() != annotation(code) {
        return Err(malformed());
    }
    Ok(code)
}

#[test]
fn byte_order_mark_record() {
    let record = format_record(0xFEFF).unwrap();
    assert_eq!(record, "\u{FEFF}# U+FEFF\n");
    assert_eq!(
        record.as_bytes(),
        b"\xEF\xBB\xBF# U+FEFF\n",
        "the mark is written raw, not stripped"
    );
}

#[test]
fn small_code_points_are_zero_padded() {
    assert_eq!(format_record(0x000B).unwrap(), "\u{000B}# U+000B\n");
    assert_eq!(format_record(0x0085).unwrap(), "\u{0085}# U+0085\n");
}

#[test]
fn surrogates_do_not_encode() {
    match format_record(0xD800) {
        Err(Error::Encoding(0xD800)) => {}
        other => panic!("expected encoding error, got {:?}", other),
    }
}

#[test]
fn parse_accepts_formatted_record() {
    let record = format_record(0x2029).unwrap();
    assert_eq!(parse_record(1, record.trim_end_matches('\n')).unwrap(), 0x2029);
}

#[test]
fn parse_rejects_mismatched_annotation() {
    match parse_record(3, "\u{2028}# U+2029") {
        Err(Error::MalformedRecord { line: 3, .. }) => {}
        other => panic!("expected malformed record, got {:?}", other),
    }
    assert!(parse_record(4, "").is_err());
    assert!(parse_record(5, "\u{00A0}# U+a0").is_err());
}
