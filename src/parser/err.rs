use super::types::Variant;

use alloc::vec::Vec;
use core::convert::TryFrom;
use nom::error::*;

/// The types of errors that may be returned by the parser.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AppleFileParserErrorKind<I> {
    Nom(I, nom::error::ErrorKind),
    /// The input ends before a structure or payload does.
    Truncated { needed: u64, available: usize },
    // NotThisFormat(expected, found magic)
    NotThisFormat(Variant, u32),
    // UnsupportedVersion(variant, found version)
    UnsupportedVersion(Variant, u32),
    ToUsizeConversionFailure(<usize as TryFrom<u32>>::Error),
}

/// The error type returned by all parsers.
#[derive(Debug, Clone)]
pub struct AppleFileParserError<I> {
    /// What kind of error this is
    pub kind: AppleFileParserErrorKind<I>,
    /// All the context we have accumulated from previous errors.
    pub ctx: Vec<(I, &'static str)>,
}

impl<I> ParseError<I> for AppleFileParserError<I> {
    fn from_error_kind(input: I, kind: ErrorKind) -> Self {
        return AppleFileParserError::new(AppleFileParserErrorKind::Nom(input, kind));
    }

    fn append(_: I, _: ErrorKind, other: Self) -> Self {
        other
    }
}

impl<I> AppleFileParserError<I> {
    /// Creates a new error.
    pub fn new(kind: AppleFileParserErrorKind<I>) -> Self {
        return AppleFileParserError {
            kind,
            ctx: Vec::new(),
        };
    }
}

impl<I> ContextError<I> for AppleFileParserError<I> {
    fn add_context(input: I, ctx: &'static str, mut other: Self) -> Self {
        other.ctx.push((input, ctx));
        return other;
    }
}
