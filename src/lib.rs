#![forbid(unsafe_code)]
//! c2go: C to Go translation
//!
//! This crate translates clang-typed C syntax trees into Go. It covers the function layer of the
//! translation: prototype registration, call rewriting with Go substitutes for the C standard library,
//! argument and return casts, and the entry-point conventions Go imposes on `main`.
//!
//! - `frontend` - the C syntax tree consumed by the translator
//! - `transpiler` - function, call and return translation
//! - `backend` - the Go syntax tree and its printer
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a translator bug (such as a malformed line in the compiled-in builtin
//!   table), panic with an `INVARIANT: reason` message.

pub mod backend;
pub mod cli;
pub mod config;
pub mod frontend;
pub mod transpiler;

pub use frontend::ast;

pub use backend::{GoFile, print_file};
pub use config::TranspilerConfig;
pub use transpiler::{FunctionRegistry, TranspileError, Transpiler};
