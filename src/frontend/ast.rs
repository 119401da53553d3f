//! C syntax tree consumed by the translator.
//!
//! The tree is produced by an external parser (typically from clang's AST dump) and arrives fully
//! typed: every expression node carries the C type clang inferred for it, as a type string such as
//! `"int"`, `"const char *"` or `"char [6]"`.
//!
//! Only the node kinds the function-semantics core needs are modelled here. Declarations the
//! translator does not handle (records, typedefs, globals) are carried as [`Declaration::Other`].

/// A translation unit: one C source file after preprocessing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TranslationUnit {
    pub declarations: Vec<Declaration>,
}

impl TranslationUnit {
    pub fn new(declarations: Vec<Declaration>) -> Self {
        Self { declarations }
    }
}

/// Top-level declarations
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    Function(FunctionDecl),
    /// A declaration kind outside the scope of this translator, identified by its clang node kind.
    Other(String),
}

/// A function prototype or definition.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub name: String,
    /// The full function type as clang prints it, e.g. `"int (int, char **)"`.
    pub ty: String,
    pub params: Vec<ParmVarDecl>,
    /// `None` for a forward declaration.
    pub body: Option<CompoundStmt>,
}

impl FunctionDecl {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            params: Vec::new(),
            body: None,
        }
    }

    pub fn with_param(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.params.push(ParmVarDecl {
            name: name.into(),
            ty: ty.into(),
        });
        self
    }

    pub fn with_body(mut self, stmts: Vec<Stmt>) -> Self {
        self.body = Some(CompoundStmt { stmts });
        self
    }
}

/// A function parameter
#[derive(Debug, Clone, PartialEq)]
pub struct ParmVarDecl {
    pub name: String,
    pub ty: String,
}

/// A brace-delimited block
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompoundStmt {
    pub stmts: Vec<Stmt>,
}

/// Statements
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Compound(CompoundStmt),
    /// `return;` or `return expr;`
    Return(Option<Expr>),
    Expr(Expr),
    /// A local variable declaration, `int x = 1;`
    VarDecl(VarDecl),
    /// The empty statement `;`
    Null,
}

/// A local variable declaration
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub name: String,
    pub ty: String,
    pub init: Option<Expr>,
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Lt,
    Gt,
    Le,
    Ge,
    Eq,
    Ne,
}

impl BinaryOp {
    /// The operator's spelling, shared by C and Go.
    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::Le => "<=",
            BinaryOp::Ge => ">=",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
        }
    }
}

/// Expressions
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    IntegerLiteral { value: String, ty: String },
    FloatingLiteral { value: String, ty: String },
    /// A string literal; `value` holds the unescaped contents and `ty` is a char array like `char [6]`.
    StringLiteral { value: String, ty: String },
    /// A reference to a variable, parameter or function.
    DeclRef { name: String, ty: String },
    /// A conversion clang inserted implicitly (integral promotion, array decay, ...).
    ImplicitCast { ty: String, expr: Box<Expr> },
    Paren(Box<Expr>),
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
        ty: String,
    },
    Call(CallExpr),
}

/// A call: the callee expression followed by the arguments
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub args: Vec<Expr>,
}

impl Expr {
    /// An `int` literal.
    pub fn int(value: i64) -> Self {
        Expr::IntegerLiteral {
            value: value.to_string(),
            ty: "int".to_string(),
        }
    }

    /// A `double` literal.
    pub fn double(value: impl Into<String>) -> Self {
        Expr::FloatingLiteral {
            value: value.into(),
            ty: "double".to_string(),
        }
    }

    /// A string literal typed as a `char` array sized for its terminator, as clang types it.
    pub fn string(value: impl Into<String>) -> Self {
        let value = value.into();
        let ty = format!("char [{}]", value.len() + 1);
        Expr::StringLiteral { value, ty }
    }

    pub fn decl_ref(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Expr::DeclRef {
            name: name.into(),
            ty: ty.into(),
        }
    }

    pub fn implicit_cast(ty: impl Into<String>, expr: Expr) -> Self {
        Expr::ImplicitCast {
            ty: ty.into(),
            expr: Box::new(expr),
        }
    }

    pub fn binary(op: BinaryOp, lhs: Expr, rhs: Expr, ty: impl Into<String>) -> Self {
        Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
            ty: ty.into(),
        }
    }

    /// A direct call to a named function, shaped the way clang shapes it: the callee is a
    /// function-to-pointer decay around a reference to the function.
    pub fn call(name: impl Into<String>, args: Vec<Expr>) -> Self {
        let callee = Expr::implicit_cast("int (*)()", Expr::decl_ref(name, "int ()"));
        Expr::Call(CallExpr {
            callee: Box::new(callee),
            args,
        })
    }
}

impl CallExpr {
    /// The name of the called function when the callee is a direct reference, looking through
    /// implicit casts and parentheses. Computed callees yield `None`.
    pub fn callee_name(&self) -> Option<&str> {
        let mut callee = self.callee.as_ref();
        loop {
            match callee {
                Expr::DeclRef { name, .. } => return Some(name.as_str()),
                Expr::ImplicitCast { expr, .. } => callee = &**expr,
                Expr::Paren(inner) => callee = &**inner,
                _ => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callee_name_looks_through_decay() {
        let Expr::Call(call) = Expr::call("printf", vec![]) else {
            panic!("expected call");
        };
        assert_eq!(call.callee_name(), Some("printf"));
    }

    #[test]
    fn test_callee_name_rejects_computed_callee() {
        let call = CallExpr {
            callee: Box::new(Expr::Call(CallExpr {
                callee: Box::new(Expr::decl_ref("pick", "int (*(void))(int)")),
                args: vec![],
            })),
            args: vec![Expr::int(1)],
        };
        assert_eq!(call.callee_name(), None);
    }

    #[test]
    fn test_string_literal_is_sized_char_array() {
        let Expr::StringLiteral { ty, .. } = Expr::string("hello") else {
            panic!("expected string literal");
        };
        assert_eq!(ty, "char [6]");
    }
}
