use super::{AttributeStore, ByteSink, ByteSource};

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use std::io;
use std::path::{Path, PathBuf};

/// Files kept in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryFiles {
    files: BTreeMap<PathBuf, Vec<u8>>,
}

impl MemoryFiles {
    pub fn new() -> MemoryFiles {
        return MemoryFiles::default();
    }

    pub fn insert<P: Into<PathBuf>>(&mut self, path: P, bytes: &[u8]) {
        self.files.insert(path.into(), bytes.to_vec());
    }

    pub fn get(&self, path: &Path) -> Option<&[u8]> {
        return self.files.get(path).map(|f| f.as_slice());
    }
}

impl ByteSource for MemoryFiles {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        return match self.files.get(path) {
            Some(bytes) => Ok(bytes.clone()),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                "no such file in memory store",
            )),
        };
    }
}

impl ByteSink for MemoryFiles {
    fn write(&mut self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        self.insert(path, bytes);
        return Ok(());
    }
}

/// Attributes kept in memory, keyed by file and logical name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryAttributes {
    attributes: BTreeMap<(PathBuf, String), Vec<u8>>,
}

impl MemoryAttributes {
    pub fn new() -> MemoryAttributes {
        return MemoryAttributes::default();
    }

    pub fn get(&self, path: &Path, name: &str) -> Option<&[u8]> {
        return self
            .attributes
            .get(&(path.to_path_buf(), String::from(name)))
            .map(|a| a.as_slice());
    }

    pub fn is_empty(&self) -> bool {
        return self.attributes.is_empty();
    }
}

impl AttributeStore for MemoryAttributes {
    fn get_attribute(&self, path: &Path, name: &str) -> io::Result<Option<Vec<u8>>> {
        return Ok(self.get(path, name).map(|a| a.to_vec()));
    }

    fn set_attribute(&mut self, path: &Path, name: &str, bytes: &[u8]) -> io::Result<()> {
        self.attributes
            .insert((path.to_path_buf(), String::from(name)), bytes.to_vec());
        return Ok(());
    }

    fn remove_attribute(&mut self, path: &Path, name: &str) -> io::Result<()> {
        self.attributes
            .remove(&(path.to_path_buf(), String::from(name)));
        return Ok(());
    }
}
