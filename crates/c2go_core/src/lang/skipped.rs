//! Functions that are never translated.
//!
//! These low-level predicates come from system headers and do not survive translation (their bodies
//! rely on macros, bit tricks or compiler intrinsics with no Go counterpart). Declarations with these
//! names are dropped even when a body is present.
//!
//! ## Examples
//! ```rust
//! use c2go_core::lang::skipped;
//!
//! assert!(skipped::is_skipped("__sputc"));
//! assert!(!skipped::is_skipped("main"));
//! ```

/// Names of functions whose declarations are skipped.
pub const SKIPPED_FUNCTIONS: &[&str] = &[
    "__istype",
    "__isctype",
    "__wcwidth",
    "__sputc",
    "__inline_signbitf",
    "__inline_signbitd",
    "__inline_signbitl",
];

/// Check whether a function declaration with this name is skipped. Matching is case-sensitive.
pub fn is_skipped(name: &str) -> bool {
    SKIPPED_FUNCTIONS.contains(&name)
}
