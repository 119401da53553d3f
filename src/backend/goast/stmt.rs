//! Go statement nodes

use super::GoExpr;

/// A Go statement
#[derive(Debug, Clone, PartialEq)]
pub enum GoStmt {
    /// An expression evaluated for its effect
    Expr(GoExpr),
    /// `return` with zero or more results
    Return(Vec<GoExpr>),
    /// A nested `{ ... }` block
    Block(Vec<GoStmt>),
    /// `var name T = value`
    Var {
        name: String,
        ty: String,
        value: Option<GoExpr>,
    },
}
