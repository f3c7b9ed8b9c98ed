//! This module implements an interface for recovering the streams stored in a file.

mod simplistic;

pub use simplistic::*;

use crate::parser::types::*;
use crate::parser::{parse, AppleFile};
use crate::Error;

use core::convert::TryFrom;
use log::{debug, warn};

/// The streams the file conversion tools care about.
///
/// Each one is taken from the first non-empty entry of its kind and borrows from the parsed buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Forks<'a> {
    pub name: Option<&'a [u8]>,
    pub finder_info: Option<&'a [u8; FINDER_INFO_SIZE_BYTES]>,
    pub data: Option<&'a [u8]>,
    pub resource: Option<&'a [u8]>,
}

impl<'a> Forks<'a> {
    /// Pick the forks out of an already parsed file.
    ///
    /// Empty entries never count, so they can't hide a later entry of the same kind.
    /// A Finder info entry shorter than 32 bytes is logged and left out,
    /// entries of other kinds are skipped.
    pub fn from_apple_file(ar: &AppleFile<'a>) -> Forks<'a> {
        let finder_info = match first_non_empty(ar, EntryKind::FinderInfo) {
            Some(entry) => match <&[u8; FINDER_INFO_SIZE_BYTES]>::try_from(
                entry.data.get(..FINDER_INFO_SIZE_BYTES).unwrap_or(&[]),
            ) {
                Ok(info) => Some(info),
                Err(_) => {
                    let e = Error::InvalidEntry {
                        kind: EntryKind::FinderInfo,
                        length: entry.descriptor.length,
                    };
                    warn!("ignoring entry: {}", e);
                    None
                }
            },
            None => None,
        };

        for entry in ar.entries() {
            match entry.kind() {
                Some(EntryKind::RealName)
                | Some(EntryKind::FinderInfo)
                | Some(EntryKind::DataFork)
                | Some(EntryKind::ResourceFork) => {}
                Some(kind) => debug!("skipping {} entry ({} bytes)", kind, entry.data.len()),
                None => debug!(
                    "skipping entry with ID {} ({} bytes)",
                    entry.descriptor.id,
                    entry.data.len()
                ),
            }
        }

        return Forks {
            name: first_non_empty(ar, EntryKind::RealName).map(|e| e.data),
            finder_info,
            data: first_non_empty(ar, EntryKind::DataFork).map(|e| e.data),
            resource: first_non_empty(ar, EntryKind::ResourceFork).map(|e| e.data),
        };
    }
}

/// The first entry of `kind` that has a payload.
pub(crate) fn first_non_empty<'b, 'a>(
    ar: &'b AppleFile<'a>,
    kind: EntryKind,
) -> Option<&'b Entry<'a>> {
    return ar
        .entries()
        .iter()
        .find(|e| e.kind() == Some(kind) && !e.data.is_empty());
}

/// Parse `input` as the given variant and pick out its forks.
pub fn unpack(input: &[u8], variant: Variant) -> Result<Forks<'_>, Error> {
    let ar = parse(input, variant)?;
    return Ok(Forks::from_apple_file(&ar));
}
