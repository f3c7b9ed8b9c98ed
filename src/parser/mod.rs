//! This module parses the binary layout of AppleSingle and AppleDouble files.

#[macro_use]
mod convert;
pub mod err;
mod interface;
pub mod parsers;
pub mod types;

pub use err::{AppleFileParserError, AppleFileParserErrorKind};
pub use interface::*;
