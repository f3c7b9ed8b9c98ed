use super::EntryKind;

use core::convert::TryFrom;

/// One entry descriptor, exactly as found in the table following the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryDescriptor {
    /// Raw entry ID. Kept as-is so that unknown and application-defined IDs survive parsing.
    pub id: u32,
    pub offset: u32,
    pub length: u32,
}

impl EntryDescriptor {
    pub fn new(kind: EntryKind, offset: u32, length: u32) -> EntryDescriptor {
        return EntryDescriptor {
            id: kind.id(),
            offset,
            length,
        };
    }

    /// `None` for ID 0 and for IDs Apple never assigned.
    pub fn kind(&self) -> Option<EntryKind> {
        return EntryKind::try_from(self.id).ok();
    }

    /// End of the payload. Computed in 64 bits so that it can't wrap.
    pub fn end(&self) -> u64 {
        return u64::from(self.offset) + u64::from(self.length);
    }

    /// Whether the payload lies inside a container of `container_len` bytes.
    ///
    /// Empty entries carry no data, so their offset is never checked.
    pub fn fits_within(&self, container_len: usize) -> bool {
        if self.length == 0 {
            return true;
        }
        let container_len = container_len as u64;
        return u64::from(self.offset) <= container_len && self.end() <= container_len;
    }
}

/// A validated entry, borrowing its payload from the parsed buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
    pub descriptor: EntryDescriptor,
    pub data: &'a [u8],
}

impl<'a> Entry<'a> {
    pub fn kind(&self) -> Option<EntryKind> {
        return self.descriptor.kind();
    }
}
