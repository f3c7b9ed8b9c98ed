use super::*;

/// Decode a Finder info block. Anything past the first 32 bytes is ignored.
pub fn finder_info(input: &[u8]) -> AppleFileResult<FinderInfo> {
    let (input, file_type) = context("finder_info file_type", take(4usize))(input)?;
    let (input, creator) = context("finder_info creator", take(4usize))(input)?;
    let (input, flags) = context("finder_info flags", be_u16)(input)?;
    let (input, v) = context("finder_info location v", be_i16)(input)?;
    let (input, h) = context("finder_info location h", be_i16)(input)?;
    let (input, folder) = context("finder_info folder", be_u16)(input)?;
    let (input, extended) = context("finder_info extended", take(16usize))(input)?;

    let mut info = FinderInfo {
        file_type: [0; 4],
        creator: [0; 4],
        flags,
        location: Point { v, h },
        folder,
        extended: [0; 16],
    };
    info.file_type.copy_from_slice(file_type);
    info.creator.copy_from_slice(creator);
    info.extended.copy_from_slice(extended);

    return Ok((input, info));
}
