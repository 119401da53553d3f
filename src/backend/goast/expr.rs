//! Go expression nodes

/// Kinds of Go basic literals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LitKind {
    Int,
    Float,
    String,
}

/// A basic literal. `value` is the literal exactly as it appears in source (strings are quoted).
#[derive(Debug, Clone, PartialEq)]
pub struct BasicLit {
    pub kind: LitKind,
    pub value: String,
}

/// A Go expression
#[derive(Debug, Clone, PartialEq)]
pub enum GoExpr {
    Ident(String),
    /// A package-qualified name, `fmt.Printf`
    Selector { package: String, name: String },
    BasicLit(BasicLit),
    /// A call, or a conversion when `fun` names a type
    Call { fun: Box<GoExpr>, args: Vec<GoExpr> },
    Binary {
        op: &'static str,
        left: Box<GoExpr>,
        right: Box<GoExpr>,
    },
    Paren(Box<GoExpr>),
}

impl GoExpr {
    pub fn ident(name: impl Into<String>) -> Self {
        GoExpr::Ident(name.into())
    }

    pub fn selector(package: impl Into<String>, name: impl Into<String>) -> Self {
        GoExpr::Selector {
            package: package.into(),
            name: name.into(),
        }
    }

    pub fn int_lit(value: impl Into<String>) -> Self {
        GoExpr::BasicLit(BasicLit {
            kind: LitKind::Int,
            value: value.into(),
        })
    }

    pub fn float_lit(value: impl Into<String>) -> Self {
        GoExpr::BasicLit(BasicLit {
            kind: LitKind::Float,
            value: value.into(),
        })
    }

    /// A Go string literal holding `contents`, quoted and escaped.
    pub fn string_lit(contents: &str) -> Self {
        GoExpr::BasicLit(BasicLit {
            kind: LitKind::String,
            value: quote(contents),
        })
    }

    pub fn call(fun: GoExpr, args: Vec<GoExpr>) -> Self {
        GoExpr::Call {
            fun: Box::new(fun),
            args,
        }
    }

    /// A type conversion `T(x)`.
    pub fn conversion(go_type: impl Into<String>, expr: GoExpr) -> Self {
        GoExpr::call(GoExpr::Ident(go_type.into()), vec![expr])
    }

    /// Whether this is the integer literal spelled exactly `value`.
    pub fn is_int_literal(&self, value: &str) -> bool {
        matches!(self, GoExpr::BasicLit(BasicLit { kind: LitKind::Int, value: v }) if v == value)
    }
}

fn quote(contents: &str) -> String {
    let mut out = String::with_capacity(contents.len() + 2);
    out.push('"');
    for c in contents.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\0' => out.push_str("\\x00"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
