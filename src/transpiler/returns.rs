//! Return statement translation.
//!
//! A returned value is cast to the enclosing function's declared return type. The entry point is
//! special: Go's `main` returns nothing, so `return 0;` becomes a bare `return` and any other value
//! becomes a call to the process-exit function (`os.Exit` by default).

use super::errors::TranspileError;
use super::{FunctionContext, Transpiler};
use crate::backend::goast::{GoExpr, GoStmt};
use crate::frontend::ast;

impl Transpiler {
    /// Translate `return;` (`value` is `None`) or `return value;` inside the function `ctx`.
    ///
    /// # Errors
    ///
    /// - [`TranspileError::UnknownFunction`] if the enclosing function has no registered prototype
    /// - Errors from translating `value` or casting it
    pub fn transpile_return(
        &mut self,
        ctx: &FunctionContext,
        value: Option<&ast::Expr>,
    ) -> Result<GoStmt, TranspileError> {
        let Some(value) = value else {
            return Ok(GoStmt::Return(Vec::new()));
        };

        let value = self.transpile_expr(value)?;
        let return_type = self
            .registry
            .lookup(ctx.name())
            .map(|p| p.return_type.clone())
            .ok_or_else(|| TranspileError::UnknownFunction(ctx.name().to_string()))?;
        let result = self.cast(value.expr, &value.c_type, &return_type)?;

        if !ctx.is_entry_point() {
            return Ok(GoStmt::Return(vec![result]));
        }
        if result.is_int_literal("0") {
            return Ok(GoStmt::Return(Vec::new()));
        }

        let exit = GoExpr::selector(self.config.exit_selector(), &self.config.exit_function);
        self.file.add_import(self.config.exit_package.trim_end_matches('/'));
        Ok(GoStmt::Expr(GoExpr::call(exit, vec![result])))
    }
}
