//! Function declaration translation.
//!
//! Every C function declaration passes through here, prototypes and definitions alike:
//!
//! - The first declaration of a name registers its prototype. Later declarations of the same name
//!   (a definition following its forward declaration, or a user redeclaration of a builtin) leave the
//!   registered prototype alone.
//! - Functions with a substitution are provided by Go and are never emitted.
//! - Functions on the skip list are never emitted.
//! - Only definitions (declarations with a body) produce a Go `func`.
//! - The entry point is emitted with no parameters and no results; Go's `main` takes neither.

use c2go_core::FunctionPrototype;
use c2go_core::lang::skipped;

use super::errors::TranspileError;
use super::{FunctionContext, Transpiler};
use crate::backend::goast::{GoDecl, GoField, GoFunc};
use crate::frontend::ast;

impl Transpiler {
    /// Translate one function declaration, emitting a Go function for definitions.
    ///
    /// # Errors
    ///
    /// - [`TranspileError::MalformedFunctionType`] if no return type can be read from the declared type
    /// - Any error from translating the body or resolving parameter/result types
    #[tracing::instrument(skip_all, fields(function = %decl.name))]
    pub fn transpile_function_decl(&mut self, decl: &ast::FunctionDecl) -> Result<(), TranspileError> {
        if self.registry.lookup(&decl.name).is_none() {
            let return_type = return_type_of(decl)?;
            let argument_types = decl.params.iter().map(|p| p.ty.clone()).collect();
            self.registry
                .register(FunctionPrototype::new(&decl.name, return_type, argument_types));
        }

        let prototype = self
            .registry
            .lookup(&decl.name)
            .cloned()
            .ok_or_else(|| TranspileError::UnknownFunction(decl.name.clone()))?;

        if prototype.substitution.is_some() {
            tracing::debug!("provided by a Go substitute, not emitted");
            return Ok(());
        }
        if skipped::is_skipped(&decl.name) {
            tracing::debug!("on the skip list, not emitted");
            return Ok(());
        }
        let Some(body) = &decl.body else {
            return Ok(());
        };

        let ctx = FunctionContext::new(&decl.name, self.config.is_entry_point(&decl.name));
        let body = self.transpile_block(body, &ctx)?;

        let (params, results) = if ctx.is_entry_point() {
            (Vec::new(), Vec::new())
        } else {
            let params = decl
                .params
                .iter()
                .map(|p| Ok(GoField::named(&p.name, self.resolve_type(&p.ty)?)))
                .collect::<Result<Vec<_>, TranspileError>>()?;
            let result = self.resolve_type(&prototype.return_type)?;
            let results = if result.is_empty() {
                Vec::new()
            } else {
                vec![GoField::unnamed(result)]
            };
            (params, results)
        };

        self.file.push_decl(GoDecl::Func(GoFunc {
            name: decl.name.clone(),
            params,
            results,
            body,
        }));
        Ok(())
    }
}

/// The return type of a function type string: everything before the parameter list.
///
/// `"int (int, char **)"` → `"int"`, `"const char *(void)"` → `"const char *"`.
fn return_type_of(decl: &ast::FunctionDecl) -> Result<String, TranspileError> {
    let head = decl.ty.split('(').next().unwrap_or_default().trim();
    if head.is_empty() {
        return Err(TranspileError::MalformedFunctionType {
            name: decl.name.clone(),
            ty: decl.ty.clone(),
        });
    }
    Ok(head.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::ast::{Expr, FunctionDecl, Stmt};
    use crate::transpiler::testing::TaggedTypes;

    #[test]
    fn test_return_type_of() {
        let decl = FunctionDecl::new("f", "const char *(void)");
        assert_eq!(return_type_of(&decl).unwrap(), "const char *");
        let decl = FunctionDecl::new("g", "unsigned long (int, char **)");
        assert_eq!(return_type_of(&decl).unwrap(), "unsigned long");
    }

    #[test]
    fn test_return_type_of_malformed() {
        let err = return_type_of(&FunctionDecl::new("f", "(int)")).unwrap_err();
        assert!(matches!(err, TranspileError::MalformedFunctionType { ref name, .. } if name == "f"));
    }

    #[test]
    fn test_prototype_registered_without_emission() {
        let mut t = Transpiler::new();
        let decl = FunctionDecl::new("add", "int (int, long)")
            .with_param("a", "int")
            .with_param("b", "long");
        t.transpile_function_decl(&decl).unwrap();

        assert_eq!(t.file().functions().count(), 0);
        let add = t.registry().lookup("add").unwrap();
        assert_eq!(add.return_type, "int");
        assert_eq!(add.argument_types, vec!["int".to_string(), "long".to_string()]);
    }

    #[test]
    fn test_definition_emits_typed_signature() {
        let mut t = Transpiler::new();
        let decl = FunctionDecl::new("half", "double (int)")
            .with_param("n", "int")
            .with_body(vec![Stmt::Return(Some(Expr::decl_ref("n", "int")))]);
        t.transpile_function_decl(&decl).unwrap();

        let func = t.file().functions().next().unwrap();
        assert_eq!(func.params, vec![GoField::named("n", "int")]);
        assert_eq!(func.results, vec![GoField::unnamed("float64")]);
    }

    #[test]
    fn test_void_function_has_no_results() {
        let mut t = Transpiler::new();
        let decl = FunctionDecl::new("noop", "void (void)").with_body(vec![]);
        t.transpile_function_decl(&decl).unwrap();
        assert!(t.file().functions().next().unwrap().results.is_empty());
    }

    #[test]
    fn test_entry_point_signature_is_empty() {
        let mut t = Transpiler::new();
        let decl = FunctionDecl::new("main", "int (int, char **)")
            .with_param("argc", "int")
            .with_param("argv", "char **")
            .with_body(vec![]);
        t.transpile_function_decl(&decl).unwrap();

        let main = t.file().functions().next().unwrap();
        assert!(main.params.is_empty());
        assert!(main.results.is_empty());
    }

    #[test]
    fn test_redeclaring_builtin_keeps_builtin() {
        let mut t = Transpiler::new();
        let decl = FunctionDecl::new("printf", "int (const char *, ...)")
            .with_param("format", "const char *")
            .with_body(vec![]);
        t.transpile_function_decl(&decl).unwrap();

        assert_eq!(t.file().functions().count(), 0);
        assert!(t.registry().lookup("printf").unwrap().substitution.is_some());
    }

    #[test]
    fn test_signature_resolved_through_type_resolver() {
        let mut t = Transpiler::new().with_type_resolver(TaggedTypes);
        let scale = FunctionDecl::new("scale", "unsigned long (int, char **)")
            .with_param("n", "int")
            .with_param("names", "char **")
            .with_body(vec![]);
        let reset = FunctionDecl::new("reset", "void (short)")
            .with_param("s", "short")
            .with_body(vec![]);
        t.transpile_function_decl(&scale).unwrap();
        t.transpile_function_decl(&reset).unwrap();

        let funcs: Vec<_> = t.file().functions().collect();
        assert_eq!(
            funcs[0].params,
            vec![GoField::named("n", "c_int"), GoField::named("names", "c_char_**")]
        );
        assert_eq!(funcs[0].results, vec![GoField::unnamed("c_unsigned_long")]);
        assert_eq!(funcs[1].params, vec![GoField::named("s", "c_short")]);
        assert!(funcs[1].results.is_empty());
    }
}
