//! Registry of function prototypes.
//!
//! The registry answers "what is the signature of `name`?" for every call site and return
//! statement. It is seeded from the compiled-in builtin table the first time it is touched and then
//! grows as the translator meets user prototypes.
//!
//! ## Notes
//!
//! - One registry is constructed per translation run and owned by the [`super::Transpiler`].
//! - Seeding happens exactly once per registry: the parsed table is installed as a whole, so neither
//!   seeding itself nor later lookups can re-run it and clobber user registrations.
//! - Registration is last-write-wins with no arity check.

use std::collections::HashMap;

use c2go_core::lang::builtins::BUILTIN_PROTOTYPES;
use c2go_core::{FunctionPrototype, parse_declaration};

/// Map from function name to its prototype.
#[derive(Debug, Clone)]
pub struct FunctionRegistry {
    /// Declaration lines to seed from
    table: &'static [&'static str],
    /// Module root for shim substitutions in the table
    module_root: String,
    /// `None` until first access
    entries: Option<HashMap<String, FunctionPrototype>>,
}

impl FunctionRegistry {
    /// A registry seeded from [`BUILTIN_PROTOTYPES`].
    pub fn new(module_root: impl Into<String>) -> Self {
        Self::with_table(BUILTIN_PROTOTYPES, module_root)
    }

    /// A registry seeded from a custom declaration table.
    ///
    /// # Panics
    ///
    /// On first access, if any line of `table` is malformed. Tables are compiled-in data, so this
    /// is a defect in the table rather than a user error.
    pub fn with_table(table: &'static [&'static str], module_root: impl Into<String>) -> Self {
        Self {
            table,
            module_root: module_root.into(),
            entries: None,
        }
    }

    /// Whether the builtin table has been loaded yet.
    pub fn is_seeded(&self) -> bool {
        self.entries.is_some()
    }

    /// Look up a prototype by name.
    pub fn lookup(&mut self, name: &str) -> Option<&FunctionPrototype> {
        self.entries().get(name)
    }

    /// Register a prototype, replacing any existing entry of the same name.
    ///
    /// Returns the replaced entry.
    pub fn register(&mut self, prototype: FunctionPrototype) -> Option<FunctionPrototype> {
        self.entries().insert(prototype.name.clone(), prototype)
    }

    /// All prototypes, sorted by name.
    pub fn prototypes(&mut self) -> Vec<&FunctionPrototype> {
        let mut all: Vec<&FunctionPrototype> = self.entries().values().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all
    }

    fn entries(&mut self) -> &mut HashMap<String, FunctionPrototype> {
        self.entries
            .get_or_insert_with(|| load_table(self.table, &self.module_root))
    }
}

fn load_table(table: &[&str], module_root: &str) -> HashMap<String, FunctionPrototype> {
    let mut entries = HashMap::with_capacity(table.len());
    for line in table {
        let prototype = match parse_declaration(line, module_root) {
            Ok(prototype) => prototype,
            Err(err) => panic!("INVARIANT: builtin prototype table is well-formed: {}", err),
        };
        entries.insert(prototype.name.clone(), prototype);
    }
    tracing::debug!(count = entries.len(), module_root, "seeded function registry");
    entries
}
