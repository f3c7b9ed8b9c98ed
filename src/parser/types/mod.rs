//! Structures that make up AppleSingle and AppleDouble files.
//! These are "low-level", meaning that they're meant to
//! reflect how data is stored in the file, not provide a friendly interface to it.

mod entry;
mod entry_kind;
mod finder_info;
mod header;
pub use entry::*;
pub use entry_kind::*;
pub use finder_info::*;
pub use header::*;
