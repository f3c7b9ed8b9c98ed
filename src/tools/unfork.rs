use super::*;
use crate::parser::parse;
use crate::parser::types::{EntryKind, Variant, FINDER_INFO_SIZE_BYTES};
use crate::read::{first_non_empty, Forks};
use crate::Error;

use alloc::string::String;
use log::warn;
use std::path::{Path, PathBuf};

/// Options for `unfork_file`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnforkOptions {
    /// Where to write the data fork. Defaults to the real name stored in the file,
    /// placed next to the input.
    pub output: Option<PathBuf>,
}

/// Unpack an AppleSingle file: the data fork becomes a plain file,
/// the resource fork and Finder info become attributes of it.
///
/// Only a Finder info entry of exactly 32 bytes is stored, anything else is
/// logged and left out.
///
/// Returns the path of the data fork.
pub fn unfork_file<F, A>(
    files: &mut F,
    attributes: &mut A,
    input: &Path,
    options: &UnforkOptions,
) -> Result<PathBuf, Error>
where
    F: ByteSource + ByteSink + ?Sized,
    A: AttributeStore + ?Sized,
{
    let raw = files.read(input).map_err(Error::ReadFailed)?;
    let ar = parse(&raw, Variant::Single)?;
    let forks = Forks::from_apple_file(&ar);

    let output = match &options.output {
        Some(output) => output.clone(),
        None => output_from_name(input, forks.name)?,
    };

    files
        .write(&output, forks.data.unwrap_or(&[]))
        .map_err(Error::WriteFailed)?;

    if let Some(resource) = forks.resource.filter(|r| !r.is_empty()) {
        attributes
            .set_attribute(&output, RESOURCE_FORK_ATTRIBUTE, resource)
            .map_err(|source| Error::AttributeFailed {
                name: RESOURCE_FORK_ATTRIBUTE,
                source,
            })?;
    }
    let finder_info = match (forks.finder_info, first_non_empty(&ar, EntryKind::FinderInfo)) {
        (Some(finder_info), Some(entry)) if entry.data.len() == FINDER_INFO_SIZE_BYTES => {
            Some(finder_info)
        }
        (Some(_), Some(entry)) => {
            let e = Error::InvalidEntry {
                kind: EntryKind::FinderInfo,
                length: entry.descriptor.length,
            };
            warn!("{}: ignoring entry: {}", input.display(), e);
            None
        }
        _ => None,
    };
    if let Some(finder_info) = finder_info {
        attributes
            .set_attribute(&output, FINDER_INFO_ATTRIBUTE, finder_info)
            .map_err(|source| Error::AttributeFailed {
                name: FINDER_INFO_ATTRIBUTE,
                source,
            })?;
    }

    return Ok(output);
}

/// The stored real name, stripped of any directories, next to `input`.
fn output_from_name(input: &Path, name: Option<&[u8]>) -> Result<PathBuf, Error> {
    let name = String::from_utf8_lossy(name.unwrap_or(&[])).into_owned();
    return match Path::new(&name).file_name() {
        Some(name) => Ok(input.with_file_name(name)),
        None => Err(Error::MissingEntry(EntryKind::RealName)),
    };
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::parser::types::{ENTRY_DESCRIPTOR_SIZE_BYTES, HEADER_SIZE_BYTES};
    use crate::write::{build, Streams};

    const README: &[u8] = include_bytes!("../../testdata/readme.txt.applesingle");

    #[test]
    fn unfork_fixture() {
        let mut files = MemoryFiles::new();
        let mut attributes = MemoryAttributes::new();
        files.insert("in/readme.txt.applesingle", README);

        let output = unfork_file(
            &mut files,
            &mut attributes,
            Path::new("in/readme.txt.applesingle"),
            &UnforkOptions::default(),
        )
        .unwrap();

        assert_eq!(output, Path::new("in/readme.txt"));
        assert_eq!(files.get(&output), Some(&b"hi"[..]));
        assert_eq!(
            attributes.get(&output, FINDER_INFO_ATTRIBUTE),
            Some(&README[72..104])
        );
        assert_eq!(attributes.get(&output, RESOURCE_FORK_ATTRIBUTE), None);
    }

    #[test]
    fn name_cannot_escape_directory() {
        let out = build(&Streams {
            name: b"../../etc/passwd",
            finder_info: None,
            data: b"x",
            resource: Some(b"r"),
        })
        .unwrap();
        let mut files = MemoryFiles::new();
        let mut attributes = MemoryAttributes::new();
        files.insert("in/evil", &out);

        let output = unfork_file(
            &mut files,
            &mut attributes,
            Path::new("in/evil"),
            &UnforkOptions::default(),
        )
        .unwrap();
        assert_eq!(output, Path::new("in/passwd"));
        assert_eq!(attributes.get(&output, RESOURCE_FORK_ATTRIBUTE), Some(&b"r"[..]));
    }

    #[test]
    fn nameless_file_needs_output() {
        let out = build(&Streams {
            name: b"",
            finder_info: None,
            data: b"x",
            resource: None,
        })
        .unwrap();
        let mut files = MemoryFiles::new();
        let mut attributes = MemoryAttributes::new();
        files.insert("nameless", &out);

        let res = unfork_file(
            &mut files,
            &mut attributes,
            Path::new("nameless"),
            &UnforkOptions::default(),
        );
        assert!(matches!(
            res,
            Err(Error::MissingEntry(EntryKind::RealName))
        ));

        let options = UnforkOptions {
            output: Some(PathBuf::from("named")),
        };
        let output = unfork_file(&mut files, &mut attributes, Path::new("nameless"), &options)
            .unwrap();
        assert_eq!(files.get(&output), Some(&b"x"[..]));
        assert!(attributes.is_empty());
    }

    #[test]
    fn oversized_finder_info_is_not_stored() {
        // Grow the Finder info entry over the data fork.
        let mut input = README.to_vec();
        let length_field = HEADER_SIZE_BYTES + ENTRY_DESCRIPTOR_SIZE_BYTES + 8;
        input[length_field..length_field + 4].copy_from_slice(&34u32.to_be_bytes());
        let mut files = MemoryFiles::new();
        let mut attributes = MemoryAttributes::new();
        files.insert("readme.txt.applesingle", &input);

        let output = unfork_file(
            &mut files,
            &mut attributes,
            Path::new("readme.txt.applesingle"),
            &UnforkOptions::default(),
        )
        .unwrap();
        assert_eq!(files.get(&output), Some(&b"hi"[..]));
        assert_eq!(attributes.get(&output, FINDER_INFO_ATTRIBUTE), None);
        assert!(attributes.is_empty());
    }

    #[test]
    fn appledouble_is_rejected() {
        let mut files = MemoryFiles::new();
        let mut attributes = MemoryAttributes::new();
        files.insert(
            "._x",
            include_bytes!("../../testdata/sidecar.appledouble"),
        );
        let res = unfork_file(
            &mut files,
            &mut attributes,
            Path::new("._x"),
            &UnforkOptions::default(),
        );
        assert!(matches!(res, Err(Error::NotThisFormat { .. })));
    }
}
