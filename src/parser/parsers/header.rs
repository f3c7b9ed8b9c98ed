use super::*;

pub fn magic(input: &[u8], variant: Variant) -> AppleFileResult<u32> {
    let (input, magic) = context("magic", be_u32)(input)?;
    if magic != variant.magic() {
        return fail(AppleFileParserErrorKind::NotThisFormat(variant, magic));
    }
    return Ok((input, magic));
}

pub fn version(input: &[u8], variant: Variant) -> AppleFileResult<u32> {
    let (input, version) = context("version", be_u32)(input)?;
    if !variant.accepts_version(version) {
        return fail(AppleFileParserErrorKind::UnsupportedVersion(variant, version));
    }
    return Ok((input, version));
}

pub fn header(input: &[u8], variant: Variant) -> AppleFileResult<Header> {
    if input.len() < HEADER_SIZE_BYTES {
        return fail(AppleFileParserErrorKind::Truncated {
            needed: HEADER_SIZE_BYTES as u64,
            available: input.len(),
        });
    }

    let (input, _) = context("header magic", |x| magic(x, variant))(input)?;
    let (input, version_num) = context("header version", |x| version(x, variant))(input)?;
    // Zero in version 2, the home file system's name in version 1. Never validated.
    let (input, raw_filler) = context("header filler", take(FILLER_SIZE_BYTES))(input)?;
    let (input, num_entries) = context("header num_entries", be_u16)(input)?;

    let mut filler = [0u8; FILLER_SIZE_BYTES];
    filler.copy_from_slice(raw_filler);

    return Ok((
        input,
        Header {
            variant,
            version: version_num,
            filler,
            num_entries,
        },
    ));
}
