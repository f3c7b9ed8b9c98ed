//! File conversion tooling built on the codec.
//!
//! All I/O goes through the collaborator traits in `io`, so the same
//! operations work against the real file system, native extended attributes
//! (supplied by the caller) or the in-memory stores used by tests.

mod batch;
mod io;
mod memory;
mod unfork;
mod wrap;
pub use batch::*;
pub use io::*;
pub use memory::*;
pub use unfork::*;
pub use wrap::*;
