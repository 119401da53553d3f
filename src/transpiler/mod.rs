//! C to Go translation of function semantics.
//!
//! This module converts a typed C syntax tree into Go declarations. The interesting work is in how
//! C functions map to Go:
//!
//! 1. Prototypes are collected in a [`FunctionRegistry`], seeded with builtin library functions
//! 2. Calls are resolved against the registry, rewritten to Go substitutes and their arguments cast
//!    to the declared parameter types
//! 3. Function definitions are emitted with Go parameter/result lists; the entry point takes
//!    nothing and returns nothing
//! 4. Returns are cast to the declared return type; in the entry point they become exit codes
//!
//! # Architecture
//!
//! - `errors` - Error types (`TranspileError`, `TypeError`)
//! - `interfaces` - Collaborator traits (`TypeResolver`, `CastBuilder`)
//! - `types` - Default collaborators
//! - `registry` - Prototype registry
//! - `functions` - Function declaration translation
//! - `calls` - Call expression translation
//! - `returns` - Return statement translation
//! - `stmt`, `expr` - Statement and expression translation feeding the above
//!
//! # Usage
//!
//! ```rust,ignore
//! use c2go::transpiler::Transpiler;
//!
//! let file = Transpiler::new().transpile(&unit)?;
//! println!("{}", c2go::backend::print_file(&file));
//! ```

mod calls;
mod errors;
mod expr;
mod functions;
mod interfaces;
mod registry;
mod returns;
mod stmt;
#[cfg(test)]
mod testing;
mod types;

pub use errors::{TranspileError, TypeError};
pub use interfaces::{CastBuilder, TypeResolver};
pub use registry::FunctionRegistry;
pub use types::{CTypeResolver, ConversionCasts};

use crate::backend::goast::{GoExpr, GoFile};
use crate::config::TranspilerConfig;
use crate::frontend::ast;

/// A translated expression paired with the C type it has in the source program.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedExpr {
    pub expr: GoExpr,
    pub c_type: String,
}

impl TypedExpr {
    pub fn new(expr: GoExpr, c_type: impl Into<String>) -> Self {
        Self {
            expr,
            c_type: c_type.into(),
        }
    }
}

/// The function whose body is being translated.
///
/// Created by the declaration translator and passed down to every statement of the body, so return
/// statements can find the declared return type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionContext {
    name: String,
    is_entry_point: bool,
}

impl FunctionContext {
    pub fn new(name: impl Into<String>, is_entry_point: bool) -> Self {
        Self {
            name: name.into(),
            is_entry_point,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_entry_point(&self) -> bool {
        self.is_entry_point
    }
}

/// Translation state for one C file.
///
/// Owns the prototype registry, the collaborators and the Go file being built.
pub struct Transpiler {
    config: TranspilerConfig,
    registry: FunctionRegistry,
    types: Box<dyn TypeResolver>,
    casts: Box<dyn CastBuilder>,
    file: GoFile,
}

impl Transpiler {
    /// Create a translator with the default configuration and collaborators.
    pub fn new() -> Self {
        Self::with_config(TranspilerConfig::default())
    }

    pub fn with_config(config: TranspilerConfig) -> Self {
        let registry = FunctionRegistry::new(config.module_root.clone());
        let file = GoFile::new(config.package_name.clone());
        Self {
            config,
            registry,
            types: Box::new(CTypeResolver),
            casts: Box::new(ConversionCasts),
            file,
        }
    }

    /// Replace the prototype registry (for example, one seeded from a custom table).
    pub fn with_registry(mut self, registry: FunctionRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_type_resolver(mut self, types: impl TypeResolver + 'static) -> Self {
        self.types = Box::new(types);
        self
    }

    pub fn with_cast_builder(mut self, casts: impl CastBuilder + 'static) -> Self {
        self.casts = Box::new(casts);
        self
    }

    pub fn registry(&mut self) -> &mut FunctionRegistry {
        &mut self.registry
    }

    /// The Go file built so far.
    pub fn file(&self) -> &GoFile {
        &self.file
    }

    pub fn into_file(self) -> GoFile {
        self.file
    }

    /// Translate a whole translation unit and return the finished Go file.
    pub fn transpile(mut self, unit: &ast::TranslationUnit) -> Result<GoFile, TranspileError> {
        self.transpile_translation_unit(unit)?;
        Ok(self.into_file())
    }

    /// Translate every declaration of `unit` in file order into the current Go file.
    ///
    /// # Errors
    ///
    /// Stops at the first error; declarations emitted before it stay in the file.
    #[tracing::instrument(skip_all, fields(decl_count = unit.declarations.len()))]
    pub fn transpile_translation_unit(&mut self, unit: &ast::TranslationUnit) -> Result<(), TranspileError> {
        for decl in &unit.declarations {
            match decl {
                ast::Declaration::Function(f) => self.transpile_function_decl(f)?,
                ast::Declaration::Other(kind) => {
                    tracing::trace!(kind = kind.as_str(), "skipping declaration outside function scope");
                }
            }
        }
        Ok(())
    }

    /// Convert `expr` from C type `from` to C type `to` through the cast collaborator.
    pub(crate) fn cast(&self, expr: GoExpr, from: &str, to: &str) -> Result<GoExpr, TranspileError> {
        Ok(self.casts.cast(self.types.as_ref(), expr, from, to)?)
    }

    /// Resolve a C type to its Go spelling through the type collaborator.
    pub(crate) fn resolve_type(&self, c_type: &str) -> Result<String, TranspileError> {
        Ok(self.types.resolve_type(c_type)?)
    }
}

impl Default for Transpiler {
    fn default() -> Self {
        Self::new()
    }
}
