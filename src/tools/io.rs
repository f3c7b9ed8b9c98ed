use alloc::vec::Vec;
use std::fs;
use std::io;
use std::path::Path;

/// Logical name of the Finder info attribute.
pub const FINDER_INFO_ATTRIBUTE: &str = "com.apple.FinderInfo";
/// Logical name of the resource fork attribute.
pub const RESOURCE_FORK_ATTRIBUTE: &str = "com.apple.ResourceFork";

/// Reads whole files into memory.
pub trait ByteSource {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// Replaces whole files.
pub trait ByteSink {
    fn write(&mut self, path: &Path, bytes: &[u8]) -> io::Result<()>;
}

/// Named metadata attached to a file.
///
/// Names are the logical ones above; mapping them to extended attributes,
/// alternate data streams or resource fork APIs is up to the implementation.
pub trait AttributeStore {
    /// `Ok(None)` if the file has no such attribute.
    fn get_attribute(&self, path: &Path, name: &str) -> io::Result<Option<Vec<u8>>>;
    fn set_attribute(&mut self, path: &Path, name: &str, bytes: &[u8]) -> io::Result<()>;
    /// Removing an attribute that doesn't exist is not an error.
    fn remove_attribute(&mut self, path: &Path, name: &str) -> io::Result<()>;
}

/// The local file system, through `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSystem;

impl ByteSource for FileSystem {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        return fs::read(path);
    }
}

impl ByteSink for FileSystem {
    fn write(&mut self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        return fs::write(path, bytes);
    }
}
