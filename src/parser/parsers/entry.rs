use super::*;

pub fn entry_descriptor(input: &[u8]) -> AppleFileResult<EntryDescriptor> {
    let (input, id) = context("entry_descriptor id", be_u32)(input)?;
    let (input, offset) = context("entry_descriptor offset", be_u32)(input)?;
    let (input, length) = context("entry_descriptor length", be_u32)(input)?;
    return Ok((input, EntryDescriptor { id, offset, length }));
}

/// Resolve a descriptor to its payload inside `container`.
///
/// Empty entries resolve to an empty slice no matter where they point.
pub fn entry_payload(container: &[u8], descriptor: EntryDescriptor) -> AppleFileResult<&[u8]> {
    if descriptor.length == 0 {
        return Ok((container, &container[..0]));
    }
    if !descriptor.fits_within(container.len()) {
        return fail(AppleFileParserErrorKind::Truncated {
            needed: descriptor.end(),
            available: container.len(),
        });
    }

    let offset = to_usize_or_err!(descriptor.offset);
    let length = to_usize_or_err!(descriptor.length);
    let (input, payload) = context("entry_payload payload", take(length))(&container[offset..])?;
    return Ok((input, payload));
}

/// Parse `num_entries` descriptors and check each one against the bounds of `container`.
///
/// Either every entry is valid or the whole table is rejected.
pub fn entry_table<'a>(
    input: &'a [u8],
    container: &'a [u8],
    num_entries: u16,
) -> AppleFileResult<'a, Vec<Entry<'a>>> {
    let needed = HEADER_SIZE_BYTES as u64
        + u64::from(num_entries) * ENTRY_DESCRIPTOR_SIZE_BYTES as u64;
    if needed > container.len() as u64 {
        return fail(AppleFileParserErrorKind::Truncated {
            needed,
            available: container.len(),
        });
    }

    let (input, descriptors) = context(
        "entry_table descriptors",
        count(entry_descriptor, usize::from(num_entries)),
    )(input)?;

    let mut entries = Vec::with_capacity(descriptors.len());
    for descriptor in descriptors {
        let (_, data) = context("entry_table entry_payload", |x| entry_payload(x, descriptor))(
            container,
        )?;
        entries.push(Entry { descriptor, data });
    }

    return Ok((input, entries));
}
