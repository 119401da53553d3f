//! c2go backend
//!
//! - `goast/` - Go syntax tree the translator emits into
//! - `printer.rs` - renders a `GoFile` to Go source text

pub mod goast;
pub mod printer;

pub use goast::{GoDecl, GoExpr, GoField, GoFile, GoFunc, GoStmt};
pub use printer::{print_expr, print_file};
