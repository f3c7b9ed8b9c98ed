//! This module provides the top-level error type for this crate.

use crate::parser::types::{EntryKind, Variant};
use crate::parser::{AppleFileParserError, AppleFileParserErrorKind};

use core::fmt;

/// The top-level error type for this crate.
///
/// Unlike the parser's own error, it doesn't borrow from the input,
/// so it can outlive the buffer that failed to parse.
#[derive(Debug)]
pub enum Error {
    /// The input is shorter than the header, the descriptor table or an entry's payload requires.
    Truncated { needed: u64, available: usize },
    /// The magic number isn't the one of the requested variant.
    NotThisFormat { expected: Variant, found: u32 },
    UnsupportedVersion { variant: Variant, found: u32 },
    /// The parser tripped over something it didn't expect at the given offset.
    Malformed { position: usize },
    /// An entry of a known kind has an unusable length.
    ///
    /// This is advisory: it never aborts a parse, consumers log it and ignore the entry.
    InvalidEntry { kind: EntryKind, length: u32 },
    MissingEntry(EntryKind),
    /// A stream is too long for the 32 bit offsets and lengths of the format.
    TooLarge { kind: EntryKind, length: usize },
    /// More entries than the 16 bit count in the header can hold.
    TooManyEntries { count: usize },
    /// The input already is a container of the given variant.
    #[cfg(feature = "std")]
    AlreadyContainer(Variant),
    /// The file has neither Finder info nor a resource fork worth wrapping.
    #[cfg(feature = "std")]
    NotExtended,
    #[cfg(feature = "std")]
    ReadFailed(std::io::Error),
    #[cfg(feature = "std")]
    WriteFailed(std::io::Error),
    #[cfg(feature = "std")]
    AttributeFailed {
        name: &'static str,
        source: std::io::Error,
    },
}

impl Error {
    /// Converts a failed top-level parse of `input` into an `Error`.
    pub(crate) fn from_nom(e: nom::Err<AppleFileParserError<&[u8]>>, input: &[u8]) -> Error {
        let e = match e {
            nom::Err::Incomplete(needed) => {
                let more = match needed {
                    nom::Needed::Size(n) => n.get() as u64,
                    nom::Needed::Unknown => 1,
                };
                return Error::Truncated {
                    needed: input.len() as u64 + more,
                    available: input.len(),
                };
            }
            nom::Err::Error(e) => e,
            nom::Err::Failure(e) => e,
        };

        for (_, ctx) in e.ctx.iter() {
            log::trace!("while parsing {}", ctx);
        }

        use AppleFileParserErrorKind::*;
        return match e.kind {
            Truncated { needed, available } => Error::Truncated { needed, available },
            NotThisFormat(expected, found) => Error::NotThisFormat { expected, found },
            UnsupportedVersion(variant, found) => Error::UnsupportedVersion { variant, found },
            Nom(rest, _) => Error::Malformed {
                position: input.len().saturating_sub(rest.len()),
            },
            ToUsizeConversionFailure(_) => Error::Malformed { position: 0 },
        };
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Truncated { needed, available } => write!(
                f,
                "file is truncated: needed {} bytes, got {}",
                needed, available
            ),
            Error::NotThisFormat { expected, found } => {
                write!(f, "not an {} file (magic {:#010x})", expected, found)
            }
            Error::UnsupportedVersion { variant, found } => {
                write!(f, "unsupported {} version {:#010x}", variant, found)
            }
            Error::Malformed { position } => write!(f, "file is damaged at offset {}", position),
            Error::InvalidEntry { kind, length } => {
                write!(f, "invalid {} size ({} bytes)", kind, length)
            }
            Error::MissingEntry(kind) => write!(f, "no {} entry", kind),
            Error::TooLarge { kind, length } => {
                write!(f, "{} is too large ({} bytes)", kind, length)
            }
            Error::TooManyEntries { count } => write!(f, "too many entries ({})", count),
            #[cfg(feature = "std")]
            Error::AlreadyContainer(variant) => write!(f, "file is {} format", variant),
            #[cfg(feature = "std")]
            Error::NotExtended => f.write_str("file is not extended"),
            #[cfg(feature = "std")]
            Error::ReadFailed(e) => write!(f, "read failed: {}", e),
            #[cfg(feature = "std")]
            Error::WriteFailed(e) => write!(f, "write failed: {}", e),
            #[cfg(feature = "std")]
            Error::AttributeFailed { name, source } => write!(f, "{}: {}", name, source),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::ReadFailed(e) | Error::WriteFailed(e) => Some(e),
            Error::AttributeFailed { source, .. } => Some(source),
            _ => None,
        }
    }
}
