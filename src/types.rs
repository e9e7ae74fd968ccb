//! Common types used across this crate, with meaning not defined within a
//! specific module.

use std::collections::HashSet;

/// A set of code point values.
pub type CodePointSet = HashSet<u32>;
