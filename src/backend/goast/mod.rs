//! Go syntax tree produced by the translator.
//!
//! This is a deliberately small subset of Go: enough to express translated function declarations,
//! calls, conversions and returns. Nodes are plain data; rendering to text lives in
//! [`crate::backend::printer`].
//!
//! The [`GoFile`] doubles as the module side-channel: translation records every package it needs via
//! [`GoFile::add_import`], and the emission stage turns that set into the import block.

mod decl;
mod expr;
mod stmt;

pub use decl::{GoDecl, GoField, GoFunc};
pub use expr::{BasicLit, GoExpr, LitKind};
pub use stmt::GoStmt;

use std::collections::BTreeSet;

/// One Go source file under construction.
#[derive(Debug, Clone, PartialEq)]
pub struct GoFile {
    pub package: String,
    /// Import paths, deduplicated and kept sorted.
    imports: BTreeSet<String>,
    pub decls: Vec<GoDecl>,
}

impl GoFile {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            imports: BTreeSet::new(),
            decls: Vec::new(),
        }
    }

    /// Record that the file needs `path` imported. Recording the same path twice is a no-op.
    pub fn add_import(&mut self, path: impl Into<String>) {
        self.imports.insert(path.into());
    }

    pub fn has_import(&self, path: &str) -> bool {
        self.imports.contains(path)
    }

    /// Import paths in sorted order.
    pub fn imports(&self) -> impl Iterator<Item = &str> {
        self.imports.iter().map(String::as_str)
    }

    pub fn push_decl(&mut self, decl: GoDecl) {
        self.decls.push(decl);
    }

    /// The emitted function declarations, in emission order.
    pub fn functions(&self) -> impl Iterator<Item = &GoFunc> {
        self.decls.iter().map(|decl| match decl {
            GoDecl::Func(func) => func,
        })
    }
}
