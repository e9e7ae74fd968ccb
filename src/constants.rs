/// The extension GraphQL source files, and so lexer fixtures, carry.
pub const GRAPHQL_EXTENSION: &str = "graphql";

/// The marker that starts a GraphQL line comment.  Everything a fixture record
/// places after the leading code point sits inside a comment.
pub const COMMENT_MARKER: char = '#';

pub const CHARACTER_TABULATION: u32 = 0x0009;
pub const LINE_FEED: u32 = 0x000A;
pub const LINE_TABULATION: u32 = 0x000B;
pub const FORM_FEED: u32 = 0x000C;
pub const CARRIAGE_RETURN: u32 = 0x000D;
pub const SPACE: u32 = 0x0020;
pub const NEXT_LINE: u32 = 0x0085;
pub const NO_BREAK_SPACE: u32 = 0x00A0;
pub const LEFT_TO_RIGHT_MARK: u32 = 0x200E;
pub const RIGHT_TO_LEFT_MARK: u32 = 0x200F;
pub const LINE_SEPARATOR: u32 = 0x2028;
pub const PARAGRAPH_SEPARATOR: u32 = 0x2029;
pub const ZERO_WIDTH_NO_BREAK_SPACE: u32 = 0xFEFF;

/// Code points matching the GraphQL `WhiteSpace` production.
///
/// See <https://spec.graphql.org/October2021/#WhiteSpace> for details.
pub static WHITE_SPACE: [u32; 2] = [
    CHARACTER_TABULATION, // CHARACTER TABULATION
    SPACE,                // SPACE
];

/// Code points matching the GraphQL `LineTerminator` production.
///
/// See <https://spec.graphql.org/October2021/#LineTerminator> for details.
pub static LINE_TERMINATOR: [u32; 2] = [
    LINE_FEED,       // LINE FEED
    CARRIAGE_RETURN, // CARRIAGE RETURN
];

/// Code points that Unicode treats as spacing, separators or invisible
/// formatting, none of which a GraphQL lexer may skip.
///
/// Order is significant: the fixture lists them in exactly this order.  This
/// list is maintained by hand and deliberately not computed from Unicode
/// properties.
pub static NOT_WHITESPACE: [u32; 9] = [
    ZERO_WIDTH_NO_BREAK_SPACE, // ZERO WIDTH NO-BREAK SPACE (also byte order mark)
    LINE_TABULATION,           // LINE TABULATION
    FORM_FEED,                 // FORM FEED
    NEXT_LINE,                 // NEXT LINE (NEL)
    NO_BREAK_SPACE,            // NO-BREAK SPACE
    LEFT_TO_RIGHT_MARK,        // LEFT-TO-RIGHT MARK
    RIGHT_TO_LEFT_MARK,        // RIGHT-TO-LEFT MARK
    LINE_SEPARATOR,            // LINE SEPARATOR
    PARAGRAPH_SEPARATOR,       // PARAGRAPH SEPARATOR
];
