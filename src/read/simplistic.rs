//! This module provides a "simplistic" API for reading files.
//!
//! It trades off precise control for ease of use.

use crate::parser::parse;
use crate::parser::types::{EntryKind, Variant};
use crate::Error;

/// Get the payload of the first entry of the given kind out of `data`.
///
/// This parses the entire descriptor table for each call, so it's not very efficient.
pub fn extract_entry(kind: EntryKind, variant: Variant, data: &[u8]) -> Result<&[u8], Error> {
    let ar = parse(data, variant)?;
    return match ar.payload(kind) {
        Some(payload) => Ok(payload),
        None => Err(Error::MissingEntry(kind)),
    };
}
