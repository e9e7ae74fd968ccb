//! Regenerates `not_whitespace.graphql` beside this file: code points that
//! look like white space but that a GraphQL lexer must reject.

extern crate graphql_fixtures;

use std::path::Path;

use graphql_fixtures::error::{Error, Result};
use graphql_fixtures::fixture::{describe, FixtureWriter};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_logging() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::new("info"))
        .with(fmt::layer().with_target(false))
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))
}

fn main() -> Result<()> {
    init_logging()?;
    let source = Path::new(env!("CARGO_MANIFEST_DIR")).join(file!());
    let writer = FixtureWriter::for_source(source)?;
    tracing::debug!(code_points = %describe(writer.codes()), "generating");
    writer.generate()?;
    Ok(())
}
