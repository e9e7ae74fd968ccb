//! Classification of code points as GraphQL insignificant white space, and as
//! white space in the looser Unicode sense.
//!
//! The two disagree on purpose.  The fixture list in
//! [`NOT_WHITESPACE`](crate::constants::NOT_WHITESPACE) is exactly the
//! disagreement a lexer must not paper over, and it is checked here rather
//! than computed here.

use crate::code_point_table::CodePointTable;
use crate::constants::{LINE_TERMINATOR, WHITE_SPACE};
use crate::types::CodePointSet;

/// General categories whose members commonly render as blank or invisible.
const SPACE_LIKE_CATEGORIES: [&str; 5] = ["Zs", "Zl", "Zp", "Cc", "Cf"];

/// Compute the set of all code points that match the GraphQL `WhiteSpace` or
/// `LineTerminator` productions.
pub fn compute_insignificant_whitespace() -> CodePointSet {
    WHITE_SPACE
        .iter()
        .chain(LINE_TERMINATOR.iter())
        .copied()
        .collect()
}

pub fn is_insignificant_whitespace(code: u32) -> bool {
    WHITE_SPACE.contains(&code) || LINE_TERMINATOR.contains(&code)
}

/// Whether Unicode classifies `code` as a separator, control or format
/// character.  Code points unknown to `table` are never space-like.
pub fn is_unicode_space_like(table: &CodePointTable, code: u32) -> bool {
    table
        .category(code)
        .map_or(false, |category| SPACE_LIKE_CATEGORIES.contains(&category))
}

/// Return the members of `codes` that GraphQL does treat as insignificant
/// white space, in list order.  An empty result means every code point in
/// `codes` is lexically significant.
pub fn check_not_whitespace(codes: &[u32]) -> Vec<u32> {
    codes
        .iter()
        .copied()
        .filter(|&code| is_insignificant_whitespace(code))
        .collect()
}

#[cfg(test)]
use crate::code_point_table::generate_code_point_table;
#[cfg(test)]
use crate::constants::{
    CARRIAGE_RETURN, CHARACTER_TABULATION, LINE_FEED, LINE_SEPARATOR, LINE_TABULATION,
    NOT_WHITESPACE, NO_BREAK_SPACE, SPACE, ZERO_WIDTH_NO_BREAK_SPACE,
};

#[test]
fn insignificant_whitespace_contains() {
    let set = compute_insignificant_whitespace();
    assert_eq!(set.len(), 4);
    assert!(set.contains(&CHARACTER_TABULATION));
    assert!(set.contains(&SPACE));
    assert!(set.contains(&LINE_FEED));
    assert!(set.contains(&CARRIAGE_RETURN));
}

#[test]
fn fixture_list_is_not_insignificant() {
    assert!(check_not_whitespace(&NOT_WHITESPACE).is_empty());
    for code in NOT_WHITESPACE.iter() {
        assert!(!is_insignificant_whitespace(*code), "U+{:04X}", code);
    }
}

#[test]
fn fixture_list_is_space_like() {
    let table = generate_code_point_table();
    for code in NOT_WHITESPACE.iter() {
        assert!(
            is_unicode_space_like(&table, *code),
            "{} should look like white space",
            table.full_name(*code)
        );
    }
}

#[test]
fn classifications_diverge() {
    let table = generate_code_point_table();
    let insignificant = compute_insignificant_whitespace();
    for code in [LINE_TABULATION, NO_BREAK_SPACE, LINE_SEPARATOR, ZERO_WIDTH_NO_BREAK_SPACE].iter() {
        assert!(is_unicode_space_like(&table, *code));
        assert!(!insignificant.contains(code));
    }
    // Every table entry the grammar skips is also space-like to Unicode.
    for (code, _) in table.iter() {
        if insignificant.contains(code) {
            assert!(is_unicode_space_like(&table, *code));
        }
    }
}

#[test]
fn check_reports_offenders_in_order() {
    let offenders = check_not_whitespace(&[LINE_TABULATION, SPACE, NO_BREAK_SPACE, LINE_FEED]);
    assert_eq!(offenders, vec![SPACE, LINE_FEED]);
}
