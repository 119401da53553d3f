//! Golden snapshot tests for emitted Go
//!
//! These tests translate small C programs (as clang-typed trees) and compare the printed Go source
//! against inline snapshots. This ensures output changes are reviewed and intentional.
//!
//! Run with: `cargo test --test transpile_snapshot_tests`
//! Review changes: `cargo insta review`

use c2go::ast::{BinaryOp, Declaration, Expr, FunctionDecl, Stmt, TranslationUnit};
use c2go::{Transpiler, TranspilerConfig, print_file};

/// Translate the declarations and print the resulting Go file
fn generate_go(declarations: Vec<FunctionDecl>) -> String {
    let unit = TranslationUnit::new(declarations.into_iter().map(Declaration::Function).collect());
    let file = Transpiler::new().transpile(&unit).expect("translation failed");
    print_file(&file)
}

#[test]
fn test_hello_world() {
    // int main() { printf("Hello, %s\n", "world"); return 0; }
    let main = FunctionDecl::new("main", "int ()").with_body(vec![
        Stmt::Expr(Expr::call(
            "printf",
            vec![
                Expr::implicit_cast("const char *", Expr::string("Hello, %s\n")),
                Expr::implicit_cast("char *", Expr::string("world")),
            ],
        )),
        Stmt::Return(Some(Expr::int(0))),
    ]);

    insta::assert_snapshot!(generate_go(vec![main]), @r#"
    package main

    import "fmt"

    func main() {
    	fmt.Printf("Hello, %s\n", "world")
    	return
    }
    "#);
}

#[test]
fn test_math_with_exit_status() {
    // double hypot2(double a, double b);
    // double hypot2(double a, double b) { return sqrt(a * a + b * b); }
    // int main(int argc, char **argv) { printf("%f\n", hypot2(argc, 4)); return argc - 1; }
    let prototype = FunctionDecl::new("hypot2", "double (double, double)")
        .with_param("a", "double")
        .with_param("b", "double");
    let sum = Expr::binary(
        BinaryOp::Add,
        Expr::binary(BinaryOp::Mul, Expr::decl_ref("a", "double"), Expr::decl_ref("a", "double"), "double"),
        Expr::binary(BinaryOp::Mul, Expr::decl_ref("b", "double"), Expr::decl_ref("b", "double"), "double"),
        "double",
    );
    let definition = prototype
        .clone()
        .with_body(vec![Stmt::Return(Some(Expr::call("sqrt", vec![sum])))]);
    let main = FunctionDecl::new("main", "int (int, char **)")
        .with_param("argc", "int")
        .with_param("argv", "char **")
        .with_body(vec![
            Stmt::Expr(Expr::call(
                "printf",
                vec![
                    Expr::implicit_cast("const char *", Expr::string("%f\n")),
                    Expr::call("hypot2", vec![Expr::decl_ref("argc", "int"), Expr::int(4)]),
                ],
            )),
            Stmt::Return(Some(Expr::binary(
                BinaryOp::Sub,
                Expr::decl_ref("argc", "int"),
                Expr::int(1),
                "int",
            ))),
        ]);

    insta::assert_snapshot!(generate_go(vec![prototype, definition, main]), @r#"
    package main

    import (
    	"fmt"
    	"math"
    	"os"
    )

    func hypot2(a float64, b float64) float64 {
    	return math.Sqrt(a * a + b * b)
    }

    func main() {
    	fmt.Printf("%f\n", hypot2(float64(argc), 4))
    	os.Exit(argc - 1)
    }
    "#);
}

#[test]
fn test_shims_rooted_under_configured_module() {
    // int main() { return toupper('a'); }
    let main = FunctionDecl::new("main", "int ()").with_body(vec![Stmt::Return(Some(Expr::call(
        "toupper",
        vec![Expr::int(97)],
    )))]);
    let unit = TranslationUnit::new(vec![Declaration::Function(main)]);
    let config = TranspilerConfig::default()
        .with_module_root("example.com/goc")
        .with_package_name("prog");
    let file = Transpiler::with_config(config).transpile(&unit).expect("translation failed");

    insta::assert_snapshot!(print_file(&file), @r#"
    package prog

    import (
    	"example.com/goc/linux"
    	"os"
    )

    func main() {
    	os.Exit(linux.ToUpper(97))
    }
    "#);
}

#[test]
fn test_skipped_and_substituted_functions_vanish() {
    let sputc = FunctionDecl::new("__sputc", "int (int, FILE *)")
        .with_param("_c", "int")
        .with_param("_p", "FILE *")
        .with_body(vec![Stmt::Return(Some(Expr::decl_ref("_c", "int")))]);
    let tolower = FunctionDecl::new("tolower", "int (int)")
        .with_param("c", "int")
        .with_body(vec![Stmt::Return(Some(Expr::decl_ref("c", "int")))]);
    let main = FunctionDecl::new("main", "int ()").with_body(vec![Stmt::Null, Stmt::Return(Some(Expr::int(0)))]);

    insta::assert_snapshot!(generate_go(vec![sputc, tolower, main]), @r#"
    package main

    func main() {
    	return
    }
    "#);
}
