//! Error types for C → Go translation.
//!
//! Translation is fail-fast: the first error aborts the current file. Errors raised by the type
//! resolver or cast builder are wrapped without change so the driver sees the collaborator's own
//! message.
//!
//! Malformed builtin prototypes are not represented here. The builtin table is compiled-in data, so
//! a bad line is a defect in the translator and the registry panics while seeding
//! (see [`c2go_core::PrototypeError`]).

use miette::Diagnostic;
use thiserror::Error;

/// Error during translation of one file.
#[derive(Debug, Error, Diagnostic)]
pub enum TranspileError {
    /// A call names a function with no registered prototype.
    #[error("unknown function: {0}")]
    #[diagnostic(
        code(c2go::unknown_function),
        help("the prototype must be declared, or listed in the builtin table, before the first call")
    )]
    UnknownFunction(String),

    /// A function declaration whose type string has no return type before the parameter list.
    #[error("unable to extract the return type of `{name}` from `{ty}`")]
    #[diagnostic(code(c2go::malformed_function_type))]
    MalformedFunctionType { name: String, ty: String },

    /// A call through anything other than a named function.
    #[error("unsupported call target: only direct calls to named functions can be translated")]
    #[diagnostic(code(c2go::unsupported_callee))]
    UnsupportedCallee,

    #[error(transparent)]
    #[diagnostic(transparent)]
    Type(#[from] TypeError),
}

/// Error from type resolution or cast construction.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum TypeError {
    #[error("cannot resolve an empty C type")]
    #[diagnostic(code(c2go::empty_type))]
    Empty,

    #[error("unsupported C type: `{0}`")]
    #[diagnostic(code(c2go::unsupported_type))]
    Unsupported(String),
}
