//! Collaborators for unit tests that need to observe what the translator asks for.

use std::cell::RefCell;
use std::rc::Rc;

use super::errors::TypeError;
use super::interfaces::{CastBuilder, TypeResolver};
use crate::backend::goast::GoExpr;

/// Records every `(from, to)` pair it is asked to cast and returns the expression unchanged.
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingCasts {
    log: Rc<RefCell<Vec<(String, String)>>>,
}

impl RecordingCasts {
    pub(crate) fn requests(&self) -> Vec<(String, String)> {
        self.log.borrow().clone()
    }
}

impl CastBuilder for RecordingCasts {
    fn cast(&self, _types: &dyn TypeResolver, expr: GoExpr, from: &str, to: &str) -> Result<GoExpr, TypeError> {
        self.log.borrow_mut().push((from.to_string(), to.to_string()));
        Ok(expr)
    }
}

/// Spells every C type as `c_<words>`; `void` is no value.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct TaggedTypes;

impl TypeResolver for TaggedTypes {
    fn resolve_type(&self, c_type: &str) -> Result<String, TypeError> {
        match c_type.trim() {
            "" => Err(TypeError::Empty),
            "void" => Ok(String::new()),
            ty => Ok(format!("c_{}", ty.split_whitespace().collect::<Vec<_>>().join("_"))),
        }
    }
}

/// Expected cast requests, as owned pairs.
pub(crate) fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected.iter().map(|(from, to)| (from.to_string(), to.to_string())).collect()
}
