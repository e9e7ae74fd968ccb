//! Writing a lexer fixture next to the program that generates it, and reading
//! one back.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use itertools::Itertools;
use tracing::{debug, info, warn};

use crate::code_point_table;
use crate::constants::{GRAPHQL_EXTENSION, NOT_WHITESPACE};
use crate::error::{Error, Result};
use crate::record::{format_record, parse_record};
use crate::whitespace::check_not_whitespace;

/// Writes a fixed list of code points, one record each, to the `.graphql`
/// sibling of a generator source file.
#[derive(Clone, Debug)]
pub struct FixtureWriter {
    output_path: PathBuf,
    codes: &'static [u32],
}

impl FixtureWriter {
    /// A writer for the not-whitespace list whose output sits beside
    /// `source`, with the same base name and a `.graphql` extension.
    pub fn for_source(source: impl AsRef<Path>) -> Result<FixtureWriter> {
        FixtureWriter::with_codes(source, &NOT_WHITESPACE)
    }

    /// As [`for_source`](FixtureWriter::for_source), writing `codes` instead.
    pub fn with_codes(source: impl AsRef<Path>, codes: &'static [u32]) -> Result<FixtureWriter> {
        let source = source.as_ref();
        if source.file_name().is_none() {
            return Err(Error::SourcePath(source.to_path_buf()));
        }
        Ok(FixtureWriter {
            output_path: source.with_extension(GRAPHQL_EXTENSION),
            codes,
        })
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn codes(&self) -> &[u32] {
        self.codes
    }

    /// Create or truncate the output file and write every record to it.
    /// Returns the number of records written.
    pub fn generate(&self) -> Result<usize> {
        let path = &self.output_path;
        let skippable = check_not_whitespace(self.codes);
        if !skippable.is_empty() {
            warn!(code_points = %describe(&skippable), "fixture includes insignificant white space");
        }

        let file = File::create(path).map_err(|e| Error::io(path, e))?;
        let mut writer = BufWriter::new(file);

        let count = write_records(&mut writer, self.codes).map_err(|e| match e {
            Error::Write(source) => Error::io(path, source),
            e => e,
        })?;
        writer.flush().map_err(|e| Error::io(path, e))?;

        info!(path = %path.display(), records = count, "wrote fixture");
        Ok(count)
    }
}

/// Stream the record for each of `codes`, in order, as raw UTF-8 bytes.
///
/// Nothing is written for a code point that fails to encode, but records
/// before it have already been written.
pub fn write_records<W: Write>(writer: &mut W, codes: &[u32]) -> Result<usize> {
    let table = code_point_table::generate_code_point_table();
    for code in codes.iter() {
        let record = format_record(*code)?;
        debug!(code_point = %table.full_name(*code), "record");
        writer.write_all(record.as_bytes()).map_err(Error::Write)?;
    }
    Ok(codes.len())
}

/// The exact bytes a fixture of `codes` consists of.
pub fn render(codes: &[u32]) -> Result<Vec<u8>> {
    let mut bytes: Vec<u8> = vec![];
    write_records(&mut bytes, codes)?;
    Ok(bytes)
}

/// Recover the code point list from fixture text.  Every line, the last
/// included, must be a record terminated by `\n`.
pub fn parse_fixture(text: &str) -> Result<Vec<u32>> {
    if text.is_empty() {
        return Ok(vec![]);
    }
    let body = match text.strip_suffix('\n') {
        Some(body) => body,
        None => {
            let line = text.split('\n').count();
            let last = text.rsplit('\n').next().unwrap_or_default();
            return Err(Error::MalformedRecord {
                line,
                text: last.to_string(),
            });
        }
    };
    body.split('\n')
        .enumerate()
        .map(|(i, line)| parse_record(i + 1, line))
        .collect()
}

/// Read a fixture from disk and recover its code point list.
pub fn read_fixture(path: impl AsRef<Path>) -> Result<Vec<u32>> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    let text = String::from_utf8(bytes).map_err(|e| {
        Error::io(
            path,
            std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        )
    })?;
    parse_fixture(&text)
}

/// The names of `codes`, comma separated, for diagnostics.
pub fn describe(codes: &[u32]) -> String {
    let table = code_point_table::generate_code_point_table();
    codes.iter().map(|code| table.full_name(*code)).join(", ")
}
