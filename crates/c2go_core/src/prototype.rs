//! Function prototypes and the compact declaration grammar used by the builtin table.
//!
//! A prototype is what the translator knows about a C function before (or instead of) translating
//! its body: the return type, the positional parameter types and, optionally, the Go symbol that
//! replaces the function entirely.
//!
//! ## Grammar
//!
//! ```text
//! <return-type> <name>(<arg-type>, <arg-type>, ...) -> <substitution>
//! ```
//!
//! - The parameter list is the final balanced parenthesis group of the declarator, so parameter types
//!   may themselves contain parentheses.
//! - The name is the last whitespace-separated token before that group; everything before it is the
//!   return type, which may span several words (`const unsigned short int**`). Pointer stars glued to
//!   the name (`char *strdup(...)`) belong to the return type.
//! - `()` and `(void)` declare zero parameters. Each parameter type is trimmed; empty parameter slots are rejected.
//! - The `-> <substitution>` clause is optional. Short shim references are rooted under the module
//!   root passed to [`parse_declaration`].

use std::fmt;

use crate::lang::shims;

/// A fully-qualified Go symbol replacing a C function, such as `math.Pow` or
/// `github.com/elliotchance/c2go/darwin.Fabs`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Substitution(String);

impl Substitution {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// The full path as written in the table (after shim qualification).
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The package-qualified symbol as it appears in Go code: the last path segment.
    ///
    /// `github.com/elliotchance/c2go/darwin.Fabs` → `darwin.Fabs`.
    pub fn symbol(&self) -> &str {
        match self.0.rfind('/') {
            Some(slash) => &self.0[slash + 1..],
            None => &self.0,
        }
    }

    /// The import path of the package providing the symbol, or `None` for an unqualified symbol.
    ///
    /// `github.com/elliotchance/c2go/darwin.Fabs` → `github.com/elliotchance/c2go/darwin`.
    pub fn import_path(&self) -> Option<&str> {
        let symbol_start = self.0.len() - self.symbol().len();
        let dot = self.symbol().rfind('.')?;
        Some(&self.0[..symbol_start + dot])
    }

    /// The package selector used at call sites (`darwin` for `darwin.Fabs`).
    pub fn package(&self) -> Option<&str> {
        self.symbol().rsplit_once('.').map(|(package, _)| package)
    }

    /// The bare member name (`Fabs` for `darwin.Fabs`).
    pub fn member(&self) -> &str {
        let symbol = self.symbol();
        symbol.rsplit_once('.').map_or(symbol, |(_, member)| member)
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The prototype of one C function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionPrototype {
    /// The function name, like `"printf"`. Unique within a registry.
    pub name: String,
    /// The C return type, like `"int"`.
    pub return_type: String,
    /// The C parameter types in order. There is no way to represent varargs.
    pub argument_types: Vec<String>,
    /// When set, calls are rewritten to this symbol and the C body is never translated.
    pub substitution: Option<Substitution>,
}

impl FunctionPrototype {
    pub fn new(name: impl Into<String>, return_type: impl Into<String>, argument_types: Vec<String>) -> Self {
        Self {
            name: name.into(),
            return_type: return_type.into(),
            argument_types,
            substitution: None,
        }
    }

    pub fn with_substitution(mut self, substitution: Substitution) -> Self {
        self.substitution = Some(substitution);
        self
    }

    /// Number of declared positional parameters.
    pub fn arity(&self) -> usize {
        self.argument_types.len()
    }
}

impl fmt::Display for FunctionPrototype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}({})", self.return_type, self.name, self.argument_types.join(", "))?;
        if let Some(substitution) = &self.substitution {
            write!(f, " -> {}", substitution)?;
        }
        Ok(())
    }
}

/// What was wrong with a malformed declaration line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrototypeErrorKind {
    /// The declarator does not end with a parameter list.
    MissingParameterList,
    /// The parameter list parentheses do not balance.
    UnbalancedParentheses,
    /// Nothing precedes the function name.
    MissingReturnType,
    /// The function name is not a C identifier.
    InvalidName(String),
    /// A parameter slot (0-based) is empty, as in `f(int, )`.
    EmptyArgument(usize),
    /// `->` is not followed by a symbol.
    MissingSubstitution,
}

impl fmt::Display for PrototypeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrototypeErrorKind::MissingParameterList => write!(f, "expected a parameter list at the end"),
            PrototypeErrorKind::UnbalancedParentheses => write!(f, "unbalanced parentheses"),
            PrototypeErrorKind::MissingReturnType => write!(f, "missing return type"),
            PrototypeErrorKind::InvalidName(name) => write!(f, "`{}` is not a valid function name", name),
            PrototypeErrorKind::EmptyArgument(index) => write!(f, "argument {} is empty", index),
            PrototypeErrorKind::MissingSubstitution => write!(f, "expected a symbol after `->`"),
        }
    }
}

/// A declaration line that does not follow the prototype grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrototypeError {
    pub line: String,
    pub kind: PrototypeErrorKind,
}

impl fmt::Display for PrototypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed builtin entry `{}`: {}", self.line, self.kind)
    }
}

impl std::error::Error for PrototypeError {}

/// Parse one declaration line of the builtin table.
///
/// ## Parameters
/// - `line`: the declaration, e.g. `"double __builtin_fabs(double) -> darwin.Fabs"`.
/// - `module_root`: Go module path under which short shim references are rooted.
///
/// ## Returns
/// - The parsed [`FunctionPrototype`], or a [`PrototypeError`] naming the offending line.
///
/// ## Examples
/// ```rust
/// use c2go_core::prototype::parse_declaration;
///
/// let p = parse_declaration("double __builtin_fabs(double) -> darwin.Fabs", "example.com/c2go").unwrap();
/// assert_eq!(p.return_type, "double");
/// assert_eq!(p.substitution.unwrap().as_str(), "example.com/c2go/darwin.Fabs");
///
/// let p = parse_declaration("double __builtin_inf()", "example.com/c2go").unwrap();
/// assert!(p.argument_types.is_empty());
/// assert!(p.substitution.is_none());
/// ```
pub fn parse_declaration(line: &str, module_root: &str) -> Result<FunctionPrototype, PrototypeError> {
    let fail = |kind| PrototypeError {
        line: line.to_string(),
        kind,
    };
    let trimmed = line.trim();

    let (declarator, substitution) = match trimmed.split_once("->") {
        Some((declarator, symbol)) => {
            let symbol = symbol.trim_start_matches([' ', '-', '>']).trim();
            if symbol.is_empty() || symbol.contains(char::is_whitespace) {
                return Err(fail(PrototypeErrorKind::MissingSubstitution));
            }
            let qualified = shims::qualify_substitution(symbol, module_root);
            (declarator.trim_end(), Some(Substitution::new(qualified)))
        }
        None => (trimmed, None),
    };

    if !declarator.ends_with(')') {
        return Err(fail(PrototypeErrorKind::MissingParameterList));
    }
    let open = parameter_list_start(declarator).ok_or_else(|| fail(PrototypeErrorKind::UnbalancedParentheses))?;
    let head = declarator[..open].trim_end();
    let params = &declarator[open + 1..declarator.len() - 1];

    let (return_type, name) = head
        .rsplit_once(char::is_whitespace)
        .ok_or_else(|| fail(PrototypeErrorKind::MissingReturnType))?;
    let stars = name.len() - name.trim_start_matches('*').len();
    let (pointer, name) = name.split_at(stars);
    let return_type = return_type.trim();
    if return_type.is_empty() {
        return Err(fail(PrototypeErrorKind::MissingReturnType));
    }
    if !is_identifier(name) {
        return Err(fail(PrototypeErrorKind::InvalidName(name.to_string())));
    }
    let return_type = if pointer.is_empty() {
        return_type.to_string()
    } else {
        format!("{} {}", return_type, pointer)
    };

    let argument_types = split_arguments(params).map_err(|index| fail(PrototypeErrorKind::EmptyArgument(index)))?;

    let prototype = FunctionPrototype::new(name, return_type, argument_types);
    Ok(match substitution {
        Some(substitution) => prototype.with_substitution(substitution),
        None => prototype,
    })
}

/// Byte offset of the `(` that opens the final parenthesis group. The declarator ends with `)`.
fn parameter_list_start(declarator: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in declarator.char_indices().rev() {
        match c {
            ')' => depth += 1,
            '(' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Split a parameter list at top-level commas. `Err` carries the index of an empty slot.
///
/// `()` and `(void)` both declare zero parameters.
fn split_arguments(params: &str) -> Result<Vec<String>, usize> {
    if matches!(params.trim(), "" | "void") {
        return Ok(Vec::new());
    }

    let mut args = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in params.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                args.push(params[start..i].trim().to_string());
                start = i + 1;
            }
            _ => {}
        }
    }
    args.push(params[start..].trim().to_string());

    match args.iter().position(String::is_empty) {
        Some(index) => Err(index),
        None => Ok(args),
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c == '_' || c.is_ascii_alphabetic())
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}
