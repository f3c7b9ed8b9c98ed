//! This module contains a "high-level" interface to
//! the "low-level" types in `types`.

mod apple_file;
pub use apple_file::*;

use super::parsers;
use super::types::*;
use crate::Error;

use nom::number::complete::be_u32;

/// The entry point into the `parser` module.
/// Takes a byte slice and the variant it should be, returns the parsed file therein.
///
/// Nothing is copied: every entry borrows its payload from `input`.
pub fn parse(input: &[u8], variant: Variant) -> Result<AppleFile<'_>, Error> {
    let (header, entries) = match parsers::apple_file(input, variant) {
        Ok((_, res)) => res,
        Err(e) => return Err(Error::from_nom(e, input)),
    };
    log::debug!(
        "parsed {} version {:#010x} with {} entries",
        variant,
        header.version,
        entries.len()
    );
    return Ok(AppleFile::new(header, entries, input));
}

/// Check whether `input` starts like an AppleSingle or AppleDouble file.
///
/// Only the magic number is looked at, the rest may still be garbage.
pub fn classify(input: &[u8]) -> Option<Variant> {
    if input.len() < HEADER_SIZE_BYTES {
        return None;
    }
    let (_, magic) = be_u32::<_, nom::error::Error<&[u8]>>(input).ok()?;
    return Variant::from_magic(magic);
}
