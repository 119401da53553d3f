//! Translator configuration

use c2go_core::lang::shims::DEFAULT_MODULE_ROOT;

/// Settings that decide the shape of the emitted Go file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranspilerConfig {
    /// Package clause of the emitted file
    pub package_name: String,
    /// Name of the C function that starts the process
    pub entry_point: String,
    /// Go module hosting the `darwin`/`linux`/`noarch` shim packages
    pub module_root: String,
    /// Package providing the process-termination function
    pub exit_package: String,
    /// Process-termination function, called with the exit status
    pub exit_function: String,
}

impl Default for TranspilerConfig {
    fn default() -> Self {
        Self {
            package_name: "main".to_string(),
            entry_point: "main".to_string(),
            module_root: DEFAULT_MODULE_ROOT.to_string(),
            exit_package: "os".to_string(),
            exit_function: "Exit".to_string(),
        }
    }
}

impl TranspilerConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the package clause
    pub fn with_package_name(mut self, name: impl Into<String>) -> Self {
        self.package_name = name.into();
        self
    }

    /// Set the entry-point function name
    pub fn with_entry_point(mut self, name: impl Into<String>) -> Self {
        self.entry_point = name.into();
        self
    }

    /// Set the module root for shim imports
    pub fn with_module_root(mut self, root: impl Into<String>) -> Self {
        self.module_root = root.into();
        self
    }

    /// Set the process-termination function. `package` is an import path; calls use its last
    /// segment as the selector.
    pub fn with_exit_function(mut self, package: impl Into<String>, function: impl Into<String>) -> Self {
        self.exit_package = package.into();
        self.exit_function = function.into();
        self
    }

    pub fn is_entry_point(&self, name: &str) -> bool {
        self.entry_point == name
    }

    /// The package name the exit function is called through: `rt` for `example.com/rt`.
    pub fn exit_selector(&self) -> &str {
        let path = self.exit_package.trim_end_matches('/');
        path.rsplit_once('/').map_or(path, |(_, name)| name)
    }
}
