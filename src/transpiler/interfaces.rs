//! Collaborator boundaries of the translator
//!
//! Type resolution and explicit-cast generation are separate engines in a full translator. The
//! function-semantics core only needs the two operations below; [`super::types`] provides the
//! default implementations used when nothing else is plugged in.

use super::errors::TypeError;
use crate::backend::goast::GoExpr;

/// Map a C type string to the Go type used in declarations and conversions.
///
/// An empty result means "no value" (C `void`).
pub trait TypeResolver {
    fn resolve_type(&self, c_type: &str) -> Result<String, TypeError>;
}

/// Build the Go expression that converts `expr` from C type `from` to C type `to`.
///
/// Implementations return `expr` unchanged when no conversion is needed.
pub trait CastBuilder {
    fn cast(&self, types: &dyn TypeResolver, expr: GoExpr, from: &str, to: &str) -> Result<GoExpr, TypeError>;
}
