//! hookline-sink — append-only destinations for structured events.
//!
//! Each sink implements [`hookline_core::EventSink`]. [`FileSink`] is the
//! production JSON-lines log; [`MemorySink`] keeps events in memory for
//! tests and dry runs.

pub mod file;
pub mod memory;

pub use file::FileSink;
pub use memory::MemorySink;
