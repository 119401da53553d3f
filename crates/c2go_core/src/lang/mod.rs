//! c2go vocabulary tables.
//!
//! ## Notes
//! - Tables are plain `const` data; lookups are linear scans, which is fine for their size.
//! - Parsing of the builtin table lives in [`crate::prototype`]; seeding lives in the translator's registry.

pub mod builtins;
pub mod shims;
pub mod skipped;
