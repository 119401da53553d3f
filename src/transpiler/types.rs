//! Default type resolution and cast construction.
//!
//! [`CTypeResolver`] covers C scalars, `char` strings, pointers, arrays and named types (typedefs,
//! records). [`ConversionCasts`] emits a Go conversion `T(x)` whenever the resolved Go types differ.

use super::errors::TypeError;
use super::interfaces::{CastBuilder, TypeResolver};
use crate::backend::goast::{BasicLit, GoExpr, LitKind};

/// Resolves C type strings the way clang spells them.
#[derive(Debug, Clone, Copy, Default)]
pub struct CTypeResolver;

impl TypeResolver for CTypeResolver {
    fn resolve_type(&self, c_type: &str) -> Result<String, TypeError> {
        let ty = normalize(c_type);
        if ty.is_empty() {
            return Err(TypeError::Empty);
        }
        // Function types and function pointers
        if ty.contains('(') {
            return Err(TypeError::Unsupported(c_type.trim().to_string()));
        }

        if ty.ends_with(']') {
            if let Some(open) = ty.rfind('[') {
                let element = ty[..open].trim();
                if is_char(element) {
                    return Ok("string".to_string());
                }
                return Ok(format!("[]{}", self.resolve_type(element)?));
            }
        }

        if let Some(pointee) = ty.strip_suffix('*') {
            let pointee = pointee.trim();
            if is_char(pointee) {
                return Ok("string".to_string());
            }
            if pointee == "void" {
                return Ok("interface{}".to_string());
            }
            return Ok(format!("*{}", self.resolve_type(pointee)?));
        }

        if let Some(go) = scalar(&ty) {
            return Ok(go.to_string());
        }

        let named = ["struct ", "union ", "enum "]
            .iter()
            .find_map(|tag| ty.strip_prefix(tag))
            .unwrap_or(ty.as_str());
        if is_identifier(named) {
            Ok(named.to_string())
        } else {
            Err(TypeError::Unsupported(c_type.trim().to_string()))
        }
    }
}

/// Casts through Go conversions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConversionCasts;

impl CastBuilder for ConversionCasts {
    fn cast(&self, types: &dyn TypeResolver, expr: GoExpr, from: &str, to: &str) -> Result<GoExpr, TypeError> {
        if normalize_spacing(from) == normalize_spacing(to) {
            return Ok(expr);
        }

        let target = types.resolve_type(to)?;
        if target.is_empty() {
            return Ok(expr);
        }

        // Untyped constants take on the type of their context
        if let GoExpr::BasicLit(BasicLit { kind, .. }) = &expr {
            let fits = match kind {
                LitKind::Int => is_numeric(&target),
                LitKind::Float => target.starts_with("float"),
                LitKind::String => target == "string",
            };
            if fits {
                return Ok(expr);
            }
        }

        let source = types.resolve_type(from)?;
        if source == target {
            Ok(expr)
        } else {
            Ok(GoExpr::conversion(target, expr))
        }
    }
}

/// Collapse whitespace and drop qualifiers that have no Go counterpart.
fn normalize(c_type: &str) -> String {
    let ty = c_type.replace('*', " * ");
    let tokens: Vec<&str> = ty
        .split_whitespace()
        .filter(|t| !matches!(*t, "const" | "volatile" | "restrict" | "__restrict"))
        .collect();
    // Glue pointer stars back onto the preceding token: "char * *" -> "char **"
    let mut out = String::new();
    for token in tokens {
        if token == "*" {
            if !out.ends_with('*') {
                out.push(' ');
            }
            out.push('*');
        } else {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(token);
        }
    }
    out.trim().to_string()
}

fn normalize_spacing(c_type: &str) -> String {
    c_type.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_char(ty: &str) -> bool {
    matches!(ty, "char" | "signed char" | "unsigned char")
}

fn scalar(ty: &str) -> Option<&'static str> {
    let go = match ty {
        "void" => "",
        "_Bool" | "bool" => "bool",
        "char" | "signed char" => "byte",
        "unsigned char" => "uint8",
        "short" | "short int" | "signed short" | "signed short int" => "int16",
        "unsigned short" | "unsigned short int" => "uint16",
        "int" | "signed" | "signed int" => "int",
        "unsigned" | "unsigned int" => "uint32",
        "long" | "long int" | "signed long" | "signed long int" => "int64",
        "unsigned long" | "unsigned long int" => "uint64",
        "long long" | "long long int" | "signed long long" | "signed long long int" => "int64",
        "unsigned long long" | "unsigned long long int" => "uint64",
        "float" => "float32",
        "double" | "long double" => "float64",
        _ => return None,
    };
    Some(go)
}

fn is_numeric(go_type: &str) -> bool {
    matches!(
        go_type,
        "int" | "int8" | "int16" | "int32" | "int64" | "uint" | "uint8" | "uint16" | "uint32" | "uint64" | "byte"
            | "rune" | "float32" | "float64"
    )
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c == '_' || c.is_ascii_alphabetic())
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}
