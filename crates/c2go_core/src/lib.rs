//! Provide the pure, dependency-free vocabulary of the c2go translator.
//!
//! This crate holds everything about C function prototypes that does not depend on the translator's
//! AST types: the compact prototype grammar, the compiled-in table of builtin prototypes, the set of
//! functions that are never translated, and the platform shim namespaces.
//!
//! ## Notes
//!
//! - No IO, no global state, no logging. The translator crate owns the registry that these tables seed.
//!
//! ## Examples
//! ```rust
//! use c2go_core::prototype::parse_declaration;
//!
//! let pow = parse_declaration("double pow(double, double) -> math.Pow", "example.com/shim").unwrap();
//! assert_eq!(pow.name, "pow");
//! assert_eq!(pow.argument_types, ["double", "double"]);
//! ```

pub mod lang;
pub mod prototype;

pub use prototype::{FunctionPrototype, PrototypeError, PrototypeErrorKind, Substitution, parse_declaration};
