//! Formatting post-processors.

mod plain;
mod rustfmt;

pub use plain::PlainFormatter;
pub use rustfmt::RustfmtFormatter;
