use crate::parser::types::*;
use crate::Error;

use alloc::vec::Vec;
use core::convert::TryFrom;

/// Where every entry of a file to be written goes.
///
/// The header and descriptor table precede all payloads, so every offset
/// has to be known before the first byte is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub header: Header,
    pub descriptors: Vec<EntryDescriptor>,
}

impl Layout {
    /// Lay `parts` out back to back, in the given order, right after the descriptor table.
    pub fn plan(variant: Variant, parts: &[(EntryKind, &[u8])]) -> Result<Layout, Error> {
        let num_entries = u16::try_from(parts.len()).map_err(|_| Error::TooManyEntries {
            count: parts.len(),
        })?;
        let header = Header::new(variant, num_entries);

        let mut offset = header.table_end();
        let mut descriptors = Vec::with_capacity(parts.len());
        for (kind, data) in parts {
            let too_large = || Error::TooLarge {
                kind: *kind,
                length: data.len(),
            };
            let entry_offset = u32::try_from(offset).map_err(|_| too_large())?;
            let length = u32::try_from(data.len()).map_err(|_| too_large())?;
            descriptors.push(EntryDescriptor::new(*kind, entry_offset, length));
            offset += u64::from(length);
        }

        log::debug!(
            "{} layout: {} entries, {} bytes",
            variant,
            descriptors.len(),
            offset
        );
        return Ok(Layout {
            header,
            descriptors,
        });
    }

    /// Size of the complete file.
    pub fn total_len(&self) -> u64 {
        return match self.descriptors.last() {
            Some(last) => last.end(),
            None => self.header.table_end(),
        };
    }
}
