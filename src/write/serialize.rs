//! Wire encoding of the fixed size structures.

use crate::parser::types::*;

pub fn header_bytes(header: &Header) -> [u8; HEADER_SIZE_BYTES] {
    let mut out = [0u8; HEADER_SIZE_BYTES];
    out[0..4].copy_from_slice(&header.variant.magic().to_be_bytes());
    out[4..8].copy_from_slice(&header.version.to_be_bytes());
    out[8..8 + FILLER_SIZE_BYTES].copy_from_slice(&header.filler);
    out[8 + FILLER_SIZE_BYTES..].copy_from_slice(&header.num_entries.to_be_bytes());
    return out;
}

pub fn entry_descriptor_bytes(descriptor: &EntryDescriptor) -> [u8; ENTRY_DESCRIPTOR_SIZE_BYTES] {
    let mut out = [0u8; ENTRY_DESCRIPTOR_SIZE_BYTES];
    out[0..4].copy_from_slice(&descriptor.id.to_be_bytes());
    out[4..8].copy_from_slice(&descriptor.offset.to_be_bytes());
    out[8..12].copy_from_slice(&descriptor.length.to_be_bytes());
    return out;
}
