//! Statement translation for function bodies.

use super::errors::TranspileError;
use super::{FunctionContext, Transpiler};
use crate::backend::goast::GoStmt;
use crate::frontend::ast::{CompoundStmt, Stmt};

impl Transpiler {
    /// Translate the statements of a block, in order.
    pub fn transpile_block(
        &mut self,
        block: &CompoundStmt,
        ctx: &FunctionContext,
    ) -> Result<Vec<GoStmt>, TranspileError> {
        let mut out = Vec::with_capacity(block.stmts.len());
        for stmt in &block.stmts {
            if let Some(stmt) = self.transpile_stmt(stmt, ctx)? {
                out.push(stmt);
            }
        }
        Ok(out)
    }

    /// Translate one statement. Empty statements produce nothing.
    pub fn transpile_stmt(&mut self, stmt: &Stmt, ctx: &FunctionContext) -> Result<Option<GoStmt>, TranspileError> {
        let stmt = match stmt {
            Stmt::Compound(block) => GoStmt::Block(self.transpile_block(block, ctx)?),
            Stmt::Return(value) => self.transpile_return(ctx, value.as_ref())?,
            Stmt::Expr(expr) => GoStmt::Expr(self.transpile_expr(expr)?.expr),
            Stmt::VarDecl(var) => {
                let ty = self.resolve_type(&var.ty)?;
                let value = match &var.init {
                    Some(init) => {
                        let init = self.transpile_expr(init)?;
                        Some(self.cast(init.expr, &init.c_type, &var.ty)?)
                    }
                    None => None,
                };
                GoStmt::Var {
                    name: var.name.clone(),
                    ty,
                    value,
                }
            }
            Stmt::Null => return Ok(None),
        };
        Ok(Some(stmt))
    }
}
