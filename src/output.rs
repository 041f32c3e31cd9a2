//! Named output emission for the hosting environment.
use log::*;
use std::{fs::OpenOptions, io::Write, path::Path};

use crate::error::Result;

/// Name of the output value carrying the published tag.
pub const TAG_OUTPUT: &str = "tag";

/// Record the published tag as a named output value.
///
/// When the hosting environment provides an output file the value is
/// appended in `key=value` form; the path is resolved by the caller so
/// this stays a function of its inputs.
pub fn emit_tag(output_file: Option<&Path>, tag: &str) -> Result<()> {
    if let Some(path) = output_file {
        let mut file =
            OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{TAG_OUTPUT}={tag}")?;
    }

    info!("published tag: {tag}");

    Ok(())
}
