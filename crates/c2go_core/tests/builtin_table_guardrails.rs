use std::collections::HashSet;

use c2go_core::lang::builtins::BUILTIN_PROTOTYPES;
use c2go_core::lang::shims::{self, DEFAULT_MODULE_ROOT};
use c2go_core::lang::skipped::{self, SKIPPED_FUNCTIONS};
use c2go_core::parse_declaration;

#[test]
fn every_builtin_line_parses() {
    for line in BUILTIN_PROTOTYPES {
        if let Err(err) = parse_declaration(line, DEFAULT_MODULE_ROOT) {
            panic!("{err}");
        }
    }
}

#[test]
fn builtin_names_are_unique() {
    let mut seen = HashSet::new();
    for line in BUILTIN_PROTOTYPES {
        let prototype = parse_declaration(line, DEFAULT_MODULE_ROOT).unwrap();
        assert!(seen.insert(prototype.name.clone()), "duplicate builtin prototype: {}", prototype.name);
    }
}

#[test]
fn builtin_substitutions_are_importable() {
    for line in BUILTIN_PROTOTYPES {
        let prototype = parse_declaration(line, DEFAULT_MODULE_ROOT).unwrap();
        let substitution = prototype.substitution.expect("every builtin has a substitution");
        assert!(
            substitution.import_path().is_some(),
            "substitution for {} has no package: {}",
            prototype.name,
            substitution
        );
        assert!(
            !shims::is_shim_symbol(substitution.as_str()),
            "shim reference left unqualified: {}",
            substitution
        );
    }
}

#[test]
fn shim_substitutions_are_rooted_under_the_module() {
    let shim_count = BUILTIN_PROTOTYPES
        .iter()
        .map(|line| parse_declaration(line, DEFAULT_MODULE_ROOT).unwrap())
        .filter_map(|p| p.substitution)
        .filter(|s| s.as_str().starts_with(DEFAULT_MODULE_ROOT))
        .inspect(|s| {
            let package = s.package().unwrap();
            assert!(shims::SHIM_NAMESPACES.contains(&package), "unexpected shim package {package}");
        })
        .count();
    assert!(shim_count > 0);
}

#[test]
fn skipped_names_are_unique_and_resolvable() {
    let mut seen = HashSet::new();
    for &name in SKIPPED_FUNCTIONS {
        assert!(skipped::is_skipped(name));
        assert!(seen.insert(name), "duplicate skipped function: {name}");
    }
    assert_eq!(SKIPPED_FUNCTIONS.len(), 7);
}
