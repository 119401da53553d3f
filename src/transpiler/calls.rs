//! Call expression translation.
//!
//! Every call is resolved against the prototype registry. A prototype with a substitution redirects
//! the call to its Go replacement and records the replacement's package as an import; arguments are
//! cast to the declared parameter types position by position. Arguments beyond the declared list
//! (the variadic tail of `printf` and friends) pass through untouched.

use super::errors::TranspileError;
use super::{Transpiler, TypedExpr};
use crate::backend::goast::GoExpr;

impl Transpiler {
    /// Translate a call to `name` with already-translated `args`.
    ///
    /// The returned expression is typed with the prototype's C return type.
    ///
    /// # Errors
    ///
    /// - [`TranspileError::UnknownFunction`] if `name` has no prototype
    /// - Cast errors from the [`super::CastBuilder`]
    pub fn transpile_call(&mut self, name: &str, args: Vec<TypedExpr>) -> Result<TypedExpr, TranspileError> {
        let prototype = self
            .registry
            .lookup(name)
            .cloned()
            .ok_or_else(|| TranspileError::UnknownFunction(name.to_string()))?;

        let fun = match &prototype.substitution {
            Some(substitution) => {
                if let Some(path) = substitution.import_path() {
                    self.file.add_import(path);
                }
                tracing::debug!(function = name, substitute = substitution.symbol(), "substituting call");
                match substitution.package() {
                    Some(package) => GoExpr::selector(package, substitution.member()),
                    None => GoExpr::ident(substitution.member()),
                }
            }
            None => GoExpr::ident(name),
        };

        let mut go_args = Vec::with_capacity(args.len());
        for (i, arg) in args.into_iter().enumerate() {
            let arg = match prototype.argument_types.get(i) {
                Some(param_type) => self.cast(arg.expr, &arg.c_type, param_type)?,
                None => arg.expr,
            };
            go_args.push(arg);
        }

        Ok(TypedExpr::new(GoExpr::call(fun, go_args), prototype.return_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::print_expr;
    use crate::transpiler::FunctionRegistry;
    use crate::transpiler::testing::{RecordingCasts, pairs};
    use c2go_core::FunctionPrototype;

    fn call(t: &mut Transpiler, name: &str, args: Vec<TypedExpr>) -> String {
        print_expr(&t.transpile_call(name, args).unwrap().expr)
    }

    #[test]
    fn test_substituted_call_uses_go_symbol_and_import() {
        let mut t = Transpiler::new();
        let args = vec![
            TypedExpr::new(GoExpr::string_lit("%d %d\n"), "const char *"),
            TypedExpr::new(GoExpr::ident("a"), "int"),
            TypedExpr::new(GoExpr::ident("b"), "int"),
        ];
        assert_eq!(call(&mut t, "printf", args), r#"fmt.Printf("%d %d\n", a, b)"#);
        assert!(t.file().has_import("fmt"));
    }

    #[test]
    fn test_shim_substitution_imports_full_path() {
        let mut t = Transpiler::new();
        let args = vec![TypedExpr::new(GoExpr::ident("x"), "double")];
        assert_eq!(call(&mut t, "__builtin_fabs", args), "darwin.Fabs(x)");
        assert!(t.file().has_import("github.com/elliotchance/c2go/darwin"));
    }

    #[test]
    fn test_arguments_cast_to_parameter_types() {
        let mut t = Transpiler::new();
        let args = vec![
            TypedExpr::new(GoExpr::ident("n"), "int"),
            TypedExpr::new(GoExpr::ident("e"), "int"),
        ];
        assert_eq!(call(&mut t, "pow", args), "math.Pow(float64(n), float64(e))");
    }

    #[test]
    fn test_call_without_substitution_keeps_name() {
        let mut t = Transpiler::new();
        t.registry()
            .register(FunctionPrototype::new("add", "int", vec!["int".into(), "int".into()]));
        let args = vec![
            TypedExpr::new(GoExpr::ident("x"), "long"),
            TypedExpr::new(GoExpr::int_lit("1"), "int"),
        ];
        let result = t.transpile_call("add", args).unwrap();
        assert_eq!(print_expr(&result.expr), "add(int(x), 1)");
        assert_eq!(result.c_type, "int");
        assert_eq!(t.file().imports().count(), 0);
    }

    #[test]
    fn test_return_type_comes_from_prototype() {
        let mut t = Transpiler::new();
        let args = vec![TypedExpr::new(GoExpr::ident("x"), "double")];
        assert_eq!(t.transpile_call("sqrt", args).unwrap().c_type, "double");
    }

    #[test]
    fn test_unknown_function() {
        let err = Transpiler::new().transpile_call("frobnicate", vec![]).unwrap_err();
        assert!(matches!(err, TranspileError::UnknownFunction(ref name) if name == "frobnicate"));
        assert_eq!(err.to_string(), "unknown function: frobnicate");
    }

    fn ints(names: &[&str]) -> Vec<TypedExpr> {
        names.iter().map(|n| TypedExpr::new(GoExpr::ident(*n), "int")).collect()
    }

    #[test]
    fn test_no_casts_requested_beyond_declared_arity() {
        let casts = RecordingCasts::default();
        let mut t = Transpiler::new().with_cast_builder(casts.clone());
        t.transpile_call("printf", ints(&["a", "b", "c"])).unwrap();
        assert!(casts.requests().is_empty());
    }

    #[test]
    fn test_casts_requested_per_declared_position() {
        let casts = RecordingCasts::default();
        let mut t = Transpiler::new().with_cast_builder(casts.clone());

        // sqrt declares one parameter; the two extra arguments pass through
        let call = t.transpile_call("sqrt", ints(&["a", "b", "c"])).unwrap();
        assert_eq!(casts.requests(), pairs(&[("int", "double")]));
        assert_eq!(print_expr(&call.expr), "math.Sqrt(a, b, c)");

        t.transpile_call("pow", ints(&["x", "y"])).unwrap();
        assert_eq!(
            casts.requests(),
            pairs(&[("int", "double"), ("int", "double"), ("int", "double")])
        );
    }

    #[test]
    fn test_injected_registry_replaces_builtins() {
        static TABLE: &[&str] = &["long clamp(long, long, long) -> noarch.Clamp"];
        let casts = RecordingCasts::default();
        let mut t = Transpiler::new()
            .with_registry(FunctionRegistry::with_table(TABLE, "example.com/rt"))
            .with_cast_builder(casts.clone());

        let call = t.transpile_call("clamp", ints(&["v", "lo", "hi"])).unwrap();
        assert_eq!(print_expr(&call.expr), "noarch.Clamp(v, lo, hi)");
        assert_eq!(call.c_type, "long");
        assert_eq!(casts.requests(), pairs(&[("int", "long"), ("int", "long"), ("int", "long")]));
        assert!(t.file().has_import("example.com/rt/noarch"));

        let err = t.transpile_call("printf", vec![]).unwrap_err();
        assert!(matches!(err, TranspileError::UnknownFunction(_)));
    }
}
