use super::*;

use alloc::vec::Vec;

/// A parsed AppleSingle or AppleDouble file.
///
/// Entries appear in the order of the descriptor table and borrow their payloads
/// from the parsed buffer, which must therefore outlive this struct.
///
/// When several entries share a kind, the lookups by kind only ever see the first one.
#[derive(Debug, Clone)]
pub struct AppleFile<'a> {
    pub header: Header,
    entries: Vec<Entry<'a>>,
    raw: &'a [u8],
}

impl<'a> AppleFile<'a> {
    pub(crate) fn new(header: Header, entries: Vec<Entry<'a>>, raw: &'a [u8]) -> AppleFile<'a> {
        return AppleFile {
            header,
            entries,
            raw,
        };
    }

    pub fn variant(&self) -> Variant {
        return self.header.variant;
    }

    /// All entries, including ones of unknown kind and ID 0.
    pub fn entries(&self) -> &[Entry<'a>] {
        return &self.entries;
    }

    /// The first entry of the given kind.
    pub fn entry(&self, kind: EntryKind) -> Option<&Entry<'a>> {
        return self.entries.iter().find(|e| e.kind() == Some(kind));
    }

    /// Payload of the first entry of the given kind.
    pub fn payload(&self, kind: EntryKind) -> Option<&'a [u8]> {
        return self.entry(kind).map(|e| e.data);
    }

    /// Decode the Finder info entry, if there is one.
    ///
    /// An entry shorter than 32 bytes yields `Error::InvalidEntry`;
    /// that doesn't make the rest of the file unusable.
    pub fn finder_info(&self) -> Option<Result<FinderInfo, Error>> {
        let entry = self.entry(EntryKind::FinderInfo)?;
        let invalid = Error::InvalidEntry {
            kind: EntryKind::FinderInfo,
            length: entry.descriptor.length,
        };
        if entry.data.len() < FINDER_INFO_SIZE_BYTES {
            return Some(Err(invalid));
        }
        return match parsers::finder_info(entry.data) {
            Ok((_, info)) => Some(Ok(info)),
            Err(_) => Some(Err(invalid)),
        };
    }

    /// The whole underlying file.
    pub fn raw(&self) -> &'a [u8] {
        return self.raw;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const README: &[u8] = include_bytes!("../../../testdata/readme.txt.applesingle");
    const SIDECAR: &[u8] = include_bytes!("../../../testdata/sidecar.appledouble");

    #[test]
    fn finder_info() {
        let ar = parse(README, Variant::Single).unwrap();
        let info = ar.finder_info().unwrap().unwrap();
        assert_eq!(&info.file_type, b"TEXT");
        assert_eq!(&info.creator, b"ttxt");
        assert_eq!(info.flags, FLAG_BEEN_INITED);
        assert_eq!(info.location, Point { v: 10, h: 20 });
        assert!(!info.is_invisible());

        let ar = parse(SIDECAR, Variant::Double).unwrap();
        let info = ar.finder_info().unwrap().unwrap();
        assert_eq!(&info.file_type, b"APPL");
        assert!(info.has_bundle());
        assert!(info.has_custom_icon());
        assert_eq!(info.location.v, -1);
    }

    #[test]
    fn short_finder_info_is_advisory() {
        // Shrink the Finder info entry of the fixture to 16 bytes.
        let mut input = README.to_vec();
        let length_field = HEADER_SIZE_BYTES + ENTRY_DESCRIPTOR_SIZE_BYTES + 8;
        input[length_field..length_field + 4].copy_from_slice(&16u32.to_be_bytes());

        let ar = parse(&input, Variant::Single).unwrap();
        assert!(matches!(
            ar.finder_info(),
            Some(Err(Error::InvalidEntry {
                kind: EntryKind::FinderInfo,
                length: 16
            }))
        ));
        assert_eq!(ar.payload(EntryKind::DataFork), Some(&b"hi"[..]));
    }

    #[test]
    fn missing_kinds() {
        let input = README.to_vec();
        let ar = parse(&input[..], Variant::Single).unwrap();
        assert!(ar.entry(EntryKind::ResourceFork).is_none());
        assert_eq!(ar.raw().len(), 106);
    }
}
