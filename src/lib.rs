#![forbid(unsafe_code)]
//! A crate for reading and writing AppleSingle and AppleDouble files.
//!
//! `parse` validates a file and hands out views of its entries without copying,
//! `write::build` lays streams out into a new AppleSingle file.

#![no_std]
#![allow(clippy::needless_return)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod err;
mod parser;
pub mod read;
#[cfg(feature = "std")]
pub mod tools;
pub mod write;

pub use err::Error;
pub use parser::types;
pub use parser::{classify, parse, AppleFile, AppleFileParserError, AppleFileParserErrorKind};
