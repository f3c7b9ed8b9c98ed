use core::fmt;

/// Size of the fixed header preceding the entry descriptors.
pub const HEADER_SIZE_BYTES: usize = 4 + 4 + FILLER_SIZE_BYTES + 2;
pub const FILLER_SIZE_BYTES: usize = 16;
pub const ENTRY_DESCRIPTOR_SIZE_BYTES: usize = 4 + 4 + 4;

pub const APPLESINGLE_MAGIC: u32 = 0x0005_1600;
pub const APPLEDOUBLE_MAGIC: u32 = 0x0005_1607;

/// Only understood by AppleDouble readers.
pub const VERSION_1: u32 = 0x0001_0000;
pub const VERSION_2: u32 = 0x0002_0000;

/// The two flavours of the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Forks and metadata all live in one stream.
    Single,
    /// Metadata and resource fork live in a sidecar next to the plain data file.
    Double,
}

impl Variant {
    pub fn magic(self) -> u32 {
        return match self {
            Variant::Single => APPLESINGLE_MAGIC,
            Variant::Double => APPLEDOUBLE_MAGIC,
        };
    }

    pub fn from_magic(magic: u32) -> Option<Variant> {
        return match magic {
            APPLESINGLE_MAGIC => Some(Variant::Single),
            APPLEDOUBLE_MAGIC => Some(Variant::Double),
            _ => None,
        };
    }

    /// AppleSingle only exists as version 2, AppleDouble readers also take version 1.
    pub fn accepts_version(self, version: u32) -> bool {
        return match self {
            Variant::Single => version == VERSION_2,
            Variant::Double => version == VERSION_1 || version == VERSION_2,
        };
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Single => f.write_str("AppleSingle"),
            Variant::Double => f.write_str("AppleDouble"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub variant: Variant,
    pub version: u32,
    pub filler: [u8; FILLER_SIZE_BYTES],
    pub num_entries: u16,
}

impl Header {
    /// A version 2 header with zeroed filler, as every writer should produce.
    pub fn new(variant: Variant, num_entries: u16) -> Header {
        return Header {
            variant,
            version: VERSION_2,
            filler: [0; FILLER_SIZE_BYTES],
            num_entries,
        };
    }

    /// Offset of the first byte past the entry descriptor table.
    pub fn table_end(&self) -> u64 {
        return HEADER_SIZE_BYTES as u64
            + u64::from(self.num_entries) * ENTRY_DESCRIPTOR_SIZE_BYTES as u64;
    }

    /// Version 1 files carry the name of their home file system
    /// (e.g. "Macintosh", "ProDOS") in the filler, padded with spaces.
    pub fn home_file_system(&self) -> Option<&str> {
        if self.version != VERSION_1 {
            return None;
        }
        let name = core::str::from_utf8(&self.filler).ok()?;
        let name = name.trim_end_matches(|c: char| c == ' ' || c == '\0');
        if name.is_empty() {
            return None;
        }
        return Some(name);
    }
}
