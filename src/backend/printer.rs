//! Go source printer - renders a [`GoFile`] to text
//!
//! The output follows gofmt conventions for the node kinds the translator produces: tab
//! indentation, one blank line between declarations, a single-line import for one package and a
//! parenthesized block otherwise.

use std::fmt::Write;

use super::goast::{GoDecl, GoExpr, GoField, GoFile, GoFunc, GoStmt};

/// Render a whole file.
pub fn print_file(file: &GoFile) -> String {
    let mut printer = GoPrinter::new();
    printer.file(file);
    printer.finish()
}

/// Render a single expression.
pub fn print_expr(expr: &GoExpr) -> String {
    let mut out = String::new();
    write_expr(&mut out, expr);
    out
}

/// A buffer for building Go source with indentation
#[derive(Debug, Default)]
pub struct GoPrinter {
    buffer: String,
    indent_level: usize,
}

impl GoPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the generated code
    pub fn finish(self) -> String {
        self.buffer
    }

    /// Write a line with current indentation
    fn line(&mut self, s: &str) {
        for _ in 0..self.indent_level {
            self.buffer.push('\t');
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
    }

    fn blank_line(&mut self) {
        self.buffer.push('\n');
    }

    /// Write a block with braces
    fn block<F>(&mut self, header: &str, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.line(&format!("{} {{", header));
        self.indent_level += 1;
        f(self);
        self.indent_level -= 1;
        self.line("}");
    }

    pub fn file(&mut self, file: &GoFile) {
        self.line(&format!("package {}", file.package));

        let imports: Vec<&str> = file.imports().collect();
        match imports.as_slice() {
            [] => {}
            [only] => {
                self.blank_line();
                self.line(&format!("import \"{}\"", only));
            }
            many => {
                self.blank_line();
                self.line("import (");
                for path in many {
                    self.line(&format!("\t\"{}\"", path));
                }
                self.line(")");
            }
        }

        for decl in &file.decls {
            self.blank_line();
            match decl {
                GoDecl::Func(func) => self.func(func),
            }
        }
    }

    fn func(&mut self, func: &GoFunc) {
        let params = func.params.iter().map(field).collect::<Vec<_>>().join(", ");
        let results = match func.results.as_slice() {
            [] => String::new(),
            [GoField { name: None, ty }] => format!(" {}", ty),
            many => format!(" ({})", many.iter().map(field).collect::<Vec<_>>().join(", ")),
        };
        let header = format!("func {}({}){}", func.name, params, results);
        self.block(&header, |p| {
            for stmt in &func.body {
                p.stmt(stmt);
            }
        });
    }

    fn stmt(&mut self, stmt: &GoStmt) {
        match stmt {
            GoStmt::Expr(expr) => self.line(&print_expr(expr)),
            GoStmt::Return(results) if results.is_empty() => self.line("return"),
            GoStmt::Return(results) => {
                let results = results.iter().map(print_expr).collect::<Vec<_>>().join(", ");
                self.line(&format!("return {}", results));
            }
            GoStmt::Block(stmts) => {
                self.line("{");
                self.indent_level += 1;
                for stmt in stmts {
                    self.stmt(stmt);
                }
                self.indent_level -= 1;
                self.line("}");
            }
            GoStmt::Var { name, ty, value } => match value {
                Some(value) => self.line(&format!("var {} {} = {}", name, ty, print_expr(value))),
                None => self.line(&format!("var {} {}", name, ty)),
            },
        }
    }
}

fn field(field: &GoField) -> String {
    match &field.name {
        Some(name) => format!("{} {}", name, field.ty),
        None => field.ty.clone(),
    }
}

fn write_expr(out: &mut String, expr: &GoExpr) {
    match expr {
        GoExpr::Ident(name) => out.push_str(name),
        GoExpr::Selector { package, name } => {
            let _ = write!(out, "{}.{}", package, name);
        }
        GoExpr::BasicLit(lit) => out.push_str(&lit.value),
        GoExpr::Call { fun, args } => {
            // Conversions to pointer types need parentheses: (*T)(x)
            match fun.as_ref() {
                GoExpr::Ident(name) if name.starts_with('*') => {
                    let _ = write!(out, "({})", name);
                }
                fun => write_expr(out, fun),
            }
            out.push('(');
            for (i, arg) in args.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_expr(out, arg);
            }
            out.push(')');
        }
        GoExpr::Binary { op, left, right } => {
            write_expr(out, left);
            let _ = write!(out, " {} ", op);
            write_expr(out, right);
        }
        GoExpr::Paren(inner) => {
            out.push('(');
            write_expr(out, inner);
            out.push(')');
        }
    }
}
