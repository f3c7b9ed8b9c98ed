//! This module implements writing AppleSingle files and AppleDouble sidecars.
//!
//! Writing happens in two passes: `Layout::plan` assigns every offset,
//! then header, descriptors and payloads are emitted in that same order.

mod layout;
mod serialize;
pub use layout::*;
pub use serialize::*;

use crate::parser::types::*;
use crate::Error;

use alloc::vec;
use alloc::vec::Vec;
use core::convert::Infallible;

/// The streams that make up an AppleSingle file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Streams<'a> {
    /// The file's name on its home file system.
    pub name: &'a [u8],
    pub finder_info: Option<&'a [u8; FINDER_INFO_SIZE_BYTES]>,
    pub data: &'a [u8],
    /// Left out of the file when empty.
    pub resource: Option<&'a [u8]>,
}

impl<'a> Streams<'a> {
    /// The entries to write, in the order they're laid out:
    /// real name, Finder info, data fork, resource fork.
    pub fn parts(&self) -> Vec<(EntryKind, &'a [u8])> {
        let mut parts = vec![(EntryKind::RealName, self.name)];
        if let Some(finder_info) = self.finder_info {
            parts.push((EntryKind::FinderInfo, &finder_info[..]));
        }
        parts.push((EntryKind::DataFork, self.data));
        if let Some(resource) = self.resource.filter(|r| !r.is_empty()) {
            parts.push((EntryKind::ResourceFork, resource));
        }
        return parts;
    }
}

/// Feed the complete file described by `layout` to `sink`, one chunk at a time.
///
/// `parts` must be the slice the layout was planned from.
fn emit<E, F>(layout: &Layout, parts: &[(EntryKind, &[u8])], mut sink: F) -> Result<(), E>
where
    F: FnMut(&[u8]) -> Result<(), E>,
{
    sink(&header_bytes(&layout.header))?;
    for descriptor in layout.descriptors.iter() {
        sink(&entry_descriptor_bytes(descriptor))?;
    }
    for (_, data) in parts {
        sink(*data)?;
    }
    return Ok(());
}

fn build_variant(variant: Variant, parts: &[(EntryKind, &[u8])]) -> Result<Vec<u8>, Error> {
    let layout = Layout::plan(variant, parts)?;
    let mut out = Vec::with_capacity(layout.total_len() as usize);
    let res = emit(&layout, parts, |chunk| {
        out.extend_from_slice(chunk);
        return Ok::<(), Infallible>(());
    });
    match res {
        Ok(()) => {}
        Err(never) => match never {},
    }
    return Ok(out);
}

/// Build an AppleSingle (version 2) file holding `streams`.
///
/// Fails only if a stream doesn't fit the format's 32 bit offsets.
pub fn build(streams: &Streams) -> Result<Vec<u8>, Error> {
    return build_variant(Variant::Single, &streams.parts());
}

/// Write an AppleSingle file holding `streams` to `sink`.
///
/// Returns the number of bytes written. Nothing is cleaned up if the sink fails halfway.
#[cfg(feature = "std")]
pub fn write_to<W: std::io::Write + ?Sized>(streams: &Streams, sink: &mut W) -> Result<u64, Error> {
    let parts = streams.parts();
    let layout = Layout::plan(Variant::Single, &parts)?;
    emit(&layout, &parts, |chunk| sink.write_all(chunk)).map_err(Error::WriteFailed)?;
    return Ok(layout.total_len());
}

/// Build an AppleDouble (version 2) sidecar holding Finder info and, if not empty, a resource fork.
pub fn build_sidecar(
    finder_info: &[u8; FINDER_INFO_SIZE_BYTES],
    resource: Option<&[u8]>,
) -> Result<Vec<u8>, Error> {
    let mut parts = vec![(EntryKind::FinderInfo, &finder_info[..])];
    if let Some(resource) = resource.filter(|r| !r.is_empty()) {
        parts.push((EntryKind::ResourceFork, resource));
    }
    return build_variant(Variant::Double, &parts);
}
