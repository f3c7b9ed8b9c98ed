use core::convert::TryFrom;
use core::fmt;

/// Entry IDs defined by Apple. 0 is invalid and 7 was never assigned.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EntryKind {
    DataFork = 1,
    ResourceFork = 2,
    RealName = 3,
    Comment = 4,
    IconBW = 5,
    IconColor = 6,
    FileDates = 8,
    FinderInfo = 9,
    MacInfo = 10,
    ProDOSInfo = 11,
    MSDOSInfo = 12,
    AFPShortName = 13,
    AFPInfo = 14,
    AFPDirectoryID = 15,
}

impl EntryKind {
    pub fn id(self) -> u32 {
        return self as u32;
    }
}

impl TryFrom<u32> for EntryKind {
    type Error = ();
    fn try_from(id: u32) -> Result<Self, Self::Error> {
        use EntryKind::*;
        match id {
            1 => Ok(DataFork),
            2 => Ok(ResourceFork),
            3 => Ok(RealName),
            4 => Ok(Comment),
            5 => Ok(IconBW),
            6 => Ok(IconColor),
            8 => Ok(FileDates),
            9 => Ok(FinderInfo),
            10 => Ok(MacInfo),
            11 => Ok(ProDOSInfo),
            12 => Ok(MSDOSInfo),
            13 => Ok(AFPShortName),
            14 => Ok(AFPInfo),
            15 => Ok(AFPDirectoryID),
            _ => Err(()),
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use EntryKind::*;
        let name = match self {
            DataFork => "data fork",
            ResourceFork => "resource fork",
            RealName => "real name",
            Comment => "comment",
            IconBW => "black and white icon",
            IconColor => "color icon",
            FileDates => "file dates",
            FinderInfo => "Finder info",
            MacInfo => "Macintosh file info",
            ProDOSInfo => "ProDOS file info",
            MSDOSInfo => "MS-DOS file info",
            AFPShortName => "AFP short name",
            AFPInfo => "AFP file info",
            AFPDirectoryID => "AFP directory ID",
        };
        f.write_str(name)
    }
}
