//! c2go frontend
//!
//! The translator does not parse C itself: it consumes a syntax tree built by an external parser.
//! This module only defines the shape of that tree.

pub mod ast;
