//! A crate that writes GraphQL lexer fixtures made of code points that look
//! like white space but are not white space in the GraphQL grammar.

pub mod code_point_table;
pub mod constants;
pub mod error;
pub mod fixture;
pub mod record;
pub mod types;
pub mod whitespace;
