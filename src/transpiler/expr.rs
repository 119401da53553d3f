//! Expression translation.
//!
//! Expressions are translated bottom-up into [`TypedExpr`]s so callers can cast the result to
//! whatever type their context needs. Implicit casts clang inserted are honoured through the
//! [`super::CastBuilder`]; calls go through the prototype registry.

use super::errors::TranspileError;
use super::{Transpiler, TypedExpr};
use crate::backend::goast::GoExpr;
use crate::frontend::ast::Expr;

impl Transpiler {
    /// Translate one expression.
    ///
    /// # Errors
    ///
    /// - [`TranspileError::UnsupportedCallee`] for calls through computed function pointers
    /// - Errors from call translation and casts
    pub fn transpile_expr(&mut self, expr: &Expr) -> Result<TypedExpr, TranspileError> {
        match expr {
            Expr::IntegerLiteral { value, ty } => Ok(TypedExpr::new(GoExpr::int_lit(value), ty)),
            Expr::FloatingLiteral { value, ty } => Ok(TypedExpr::new(GoExpr::float_lit(value), ty)),
            Expr::StringLiteral { value, ty } => Ok(TypedExpr::new(GoExpr::string_lit(value), ty)),
            Expr::DeclRef { name, ty } => Ok(TypedExpr::new(GoExpr::ident(name), ty)),
            Expr::ImplicitCast { ty, expr } => {
                let inner = self.transpile_expr(expr)?;
                let cast = self.cast(inner.expr, &inner.c_type, ty)?;
                Ok(TypedExpr::new(cast, ty))
            }
            Expr::Paren(inner) => {
                let inner = self.transpile_expr(inner)?;
                Ok(TypedExpr::new(GoExpr::Paren(Box::new(inner.expr)), inner.c_type))
            }
            Expr::Binary { op, lhs, rhs, ty } => {
                let lhs = self.transpile_expr(lhs)?;
                let rhs = self.transpile_expr(rhs)?;
                let binary = GoExpr::Binary {
                    op: op.as_str(),
                    left: Box::new(lhs.expr),
                    right: Box::new(rhs.expr),
                };
                Ok(TypedExpr::new(binary, ty))
            }
            Expr::Call(call) => {
                let name = call.callee_name().ok_or(TranspileError::UnsupportedCallee)?;
                let args = call
                    .args
                    .iter()
                    .map(|arg| self.transpile_expr(arg))
                    .collect::<Result<Vec<_>, _>>()?;
                self.transpile_call(name, args)
            }
        }
    }
}
