pub const FINDER_INFO_SIZE_BYTES: usize = 32;

/// Finder flag bits (`fdFlags`).
pub const FLAG_ON_DESK: u16 = 0x0001;
pub const FLAG_COLOR_MASK: u16 = 0x000E;
pub const FLAG_SHARED: u16 = 0x0040;
pub const FLAG_NO_INITS: u16 = 0x0080;
pub const FLAG_BEEN_INITED: u16 = 0x0100;
pub const FLAG_CUSTOM_ICON: u16 = 0x0400;
pub const FLAG_STATIONERY: u16 = 0x0800;
pub const FLAG_NAME_LOCKED: u16 = 0x1000;
pub const FLAG_HAS_BUNDLE: u16 = 0x2000;
pub const FLAG_INVISIBLE: u16 = 0x4000;
pub const FLAG_ALIAS: u16 = 0x8000;

/// QuickDraw point, vertical coordinate first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub v: i16,
    pub h: i16,
}

/// The 32 byte Finder info block: `FInfo` followed by `FXInfo`.
///
/// The extended half (icon ID, script code, comment ID, put-away directory)
/// is kept as raw bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinderInfo {
    pub file_type: [u8; 4],
    pub creator: [u8; 4],
    pub flags: u16,
    pub location: Point,
    pub folder: u16,
    pub extended: [u8; 16],
}

impl FinderInfo {
    pub fn has_flag(&self, flag: u16) -> bool {
        return self.flags & flag != 0;
    }

    pub fn is_invisible(&self) -> bool {
        return self.has_flag(FLAG_INVISIBLE);
    }

    pub fn is_alias(&self) -> bool {
        return self.has_flag(FLAG_ALIAS);
    }

    pub fn has_custom_icon(&self) -> bool {
        return self.has_flag(FLAG_CUSTOM_ICON);
    }

    pub fn has_bundle(&self) -> bool {
        return self.has_flag(FLAG_HAS_BUNDLE);
    }

    /// Label color, 0 through 7.
    pub fn color(&self) -> u8 {
        return ((self.flags & FLAG_COLOR_MASK) >> 1) as u8;
    }
}
