//! Go shim packages shipped with the translator.
//!
//! Some C library routines have no direct Go equivalent, so the project ships small Go packages that
//! emulate them: one per supported operating system (`darwin`, `linux`) plus a cross-platform one
//! (`noarch`). The builtin table refers to them by their short names; emitted imports need the full
//! module path.
//!
//! ## Examples
//! ```rust
//! use c2go_core::lang::shims::{self, DEFAULT_MODULE_ROOT};
//!
//! assert_eq!(
//!     shims::qualify_substitution("darwin.Fabs", DEFAULT_MODULE_ROOT),
//!     "github.com/elliotchance/c2go/darwin.Fabs"
//! );
//! assert_eq!(shims::qualify_substitution("math.Pow", DEFAULT_MODULE_ROOT), "math.Pow");
//! ```

/// Go module path that hosts the shim packages.
pub const DEFAULT_MODULE_ROOT: &str = "github.com/elliotchance/c2go";

/// Short package names of the shim packages.
pub const SHIM_NAMESPACES: &[&str] = &["darwin", "linux", "noarch"];

/// Check whether a substitution refers to one of the shim packages by its short name.
pub fn is_shim_symbol(symbol: &str) -> bool {
    SHIM_NAMESPACES
        .iter()
        .any(|ns| symbol.strip_prefix(ns).is_some_and(|rest| rest.starts_with('.')))
}

/// Root a short shim reference under `module_root`; any other symbol is returned unchanged.
pub fn qualify_substitution(symbol: &str, module_root: &str) -> String {
    if is_shim_symbol(symbol) {
        format!("{}/{}", module_root.trim_end_matches('/'), symbol)
    } else {
        symbol.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shim_prefix_requires_dot() {
        assert!(is_shim_symbol("noarch.Atoi"));
        assert!(!is_shim_symbol("noarchive.Atoi"));
        assert!(!is_shim_symbol("linux"));
    }

    #[test]
    fn test_qualify_tolerates_trailing_slash() {
        assert_eq!(
            qualify_substitution("linux.ToLower", "example.com/rt/"),
            "example.com/rt/linux.ToLower"
        );
    }

    #[test]
    fn test_qualify_leaves_stdlib_symbols() {
        assert_eq!(qualify_substitution("fmt.Printf", DEFAULT_MODULE_ROOT), "fmt.Printf");
    }
}
