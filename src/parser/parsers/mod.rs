//! Custom nom parsers for the AppleSingle/AppleDouble format.
//!
//! All multi-byte integers are big-endian on the wire.

mod entry;
pub use entry::*;
mod finder_info;
pub use finder_info::*;
mod header;
pub use header::*;

use super::err::*;
use super::types::*;

use alloc::vec::*;

use nom::bytes::complete::take;
use nom::error::context;
use nom::multi::count;
use nom::number::complete::{be_i16, be_u16, be_u32};

/// Error type that all parsers return.
pub type AppleFileResult<'a, T> = nom::IResult<&'a [u8], T, AppleFileParserError<&'a [u8]>>;

/// Abort parsing with the given error kind. Nothing here is worth backtracking for.
fn fail<'a, T>(kind: AppleFileParserErrorKind<&'a [u8]>) -> AppleFileResult<'a, T> {
    return Err(nom::Err::Failure(AppleFileParserError::new(kind)));
}

/// Parse a complete container: header, descriptor table and a view of every payload.
///
/// `input` must be the entire file, since entry offsets are relative to its start.
pub fn apple_file(input: &[u8], variant: Variant) -> AppleFileResult<(Header, Vec<Entry>)> {
    let container = input;
    let (input, hdr) = context("apple_file header", |x| header(x, variant))(input)?;
    let (input, entries) = context("apple_file entry_table", |x| {
        entry_table(x, container, hdr.num_entries)
    })(input)?;
    return Ok((input, (hdr, entries)));
}
