//! Go declaration nodes

use super::GoStmt;

/// A top-level Go declaration
#[derive(Debug, Clone, PartialEq)]
pub enum GoDecl {
    Func(GoFunc),
}

/// A function declaration with its body
#[derive(Debug, Clone, PartialEq)]
pub struct GoFunc {
    pub name: String,
    pub params: Vec<GoField>,
    pub results: Vec<GoField>,
    pub body: Vec<GoStmt>,
}

/// A parameter or result. Results are usually unnamed.
#[derive(Debug, Clone, PartialEq)]
pub struct GoField {
    pub name: Option<String>,
    pub ty: String,
}

impl GoField {
    pub fn named(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ty: ty.into(),
        }
    }

    pub fn unnamed(ty: impl Into<String>) -> Self {
        Self {
            name: None,
            ty: ty.into(),
        }
    }
}
