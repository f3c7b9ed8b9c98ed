use super::*;
use crate::parser::classify;
use crate::parser::types::{EntryKind, FINDER_INFO_SIZE_BYTES};
use crate::write::{build, Streams};
use crate::Error;

use alloc::vec::Vec;
use core::convert::TryFrom;
use log::warn;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Options for `wrap_file`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WrapOptions {
    /// Where to write the AppleSingle file. Defaults to the input path plus `.applesingle`.
    pub output: Option<PathBuf>,
}

/// `<input>.applesingle`
pub fn default_applesingle_path(input: &Path) -> PathBuf {
    let mut path = OsString::from(input.as_os_str());
    path.push(".applesingle");
    return PathBuf::from(path);
}

/// Pack a file, its Finder info and its resource fork into an AppleSingle file.
///
/// Refuses files that already are AppleSingle/AppleDouble and files that have
/// neither Finder info nor a resource fork. Returns the path written to.
pub fn wrap_file<F, A>(
    files: &mut F,
    attributes: &A,
    input: &Path,
    options: &WrapOptions,
) -> Result<PathBuf, Error>
where
    F: ByteSource + ByteSink + ?Sized,
    A: AttributeStore + ?Sized,
{
    let data = files.read(input).map_err(Error::ReadFailed)?;
    if let Some(variant) = classify(&data) {
        return Err(Error::AlreadyContainer(variant));
    }

    let raw_finder_info = get(attributes, input, FINDER_INFO_ATTRIBUTE)?;
    let finder_info = match raw_finder_info.as_deref() {
        Some(raw) => match <&[u8; FINDER_INFO_SIZE_BYTES]>::try_from(raw) {
            Ok(info) => Some(info),
            Err(_) => {
                let e = Error::InvalidEntry {
                    kind: EntryKind::FinderInfo,
                    length: u32::try_from(raw.len()).unwrap_or(u32::MAX),
                };
                warn!("{}: ignoring attribute: {}", input.display(), e);
                None
            }
        },
        None => None,
    };

    let resource = get(attributes, input, RESOURCE_FORK_ATTRIBUTE)?;
    let resource = resource.as_deref().filter(|r| !r.is_empty());
    if finder_info.is_none() && resource.is_none() {
        return Err(Error::NotExtended);
    }

    // Only the last component, the directories it came from mean nothing elsewhere.
    let name = match input.file_name() {
        Some(name) => name.to_string_lossy().into_owned().into_bytes(),
        None => Vec::new(),
    };
    let streams = Streams {
        name: &name,
        finder_info,
        data: &data,
        resource,
    };
    let out = build(&streams)?;

    let output = match &options.output {
        Some(output) => output.clone(),
        None => default_applesingle_path(input),
    };
    files.write(&output, &out).map_err(Error::WriteFailed)?;
    return Ok(output);
}

fn get<A: AttributeStore + ?Sized>(
    attributes: &A,
    path: &Path,
    name: &'static str,
) -> Result<Option<Vec<u8>>, Error> {
    return attributes
        .get_attribute(path, name)
        .map_err(|source| Error::AttributeFailed { name, source });
}
