//! Reader for the binary model interchange format (`.mcm`).
//!
//! The format is positional and untagged: a mesh section, a material section
//! and a node section in fixed order, with no magic number, no version field
//! and no whole-file length prefix.
//!
//! All multi-byte scalars are little-endian; ints and floats are 4 bytes,
//! vertex indices 2 bytes unsigned. Strings are a 4-byte signed byte length
//! followed by that many raw bytes, without a stored terminator.

mod convert;
mod cursor;

use std::{fs, io, path::PathBuf};

use log::info;
use mc_format::model::Model;

use crate::settings::Settings;

use self::convert::ModelReader;

#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error("Could not open model source `{}`: {}", path.display(), source)]
    SourceUnavailable { path: PathBuf, source: io::Error },
    #[error("Unexpected end of stream at offset {offset}, needed {needed} more bytes")]
    UnexpectedEof { offset: usize, needed: usize },
    #[error("Count field `{field}` is negative: {value}")]
    MalformedCount { field: &'static str, value: i32 },
}

/// Reads the model source named by `settings` and decodes it.
///
/// The source handle is acquired and released inside this call; the decode
/// itself runs over the in-memory bytes. The result is either a complete,
/// fully-linked model or the first error hit, never a partial model.
pub fn load_and_convert(settings: &Settings) -> Result<Model, ReadError> {
    info!("Loading model: {}", settings.in_file.display());

    let data = fs::read(&settings.in_file).map_err(|source| ReadError::SourceUnavailable {
        path: settings.in_file.clone(),
        source,
    })?;

    convert(&data)
}

/// Decodes a model from an in-memory byte buffer.
pub fn convert(data: &[u8]) -> Result<Model, ReadError> {
    ModelReader::new(data).convert()
}
