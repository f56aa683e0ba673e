//! Expression nodes.
//!
//! - [`core`] - Expr struct and graph traversal
//! - [`hash_consing`] - Deduplication of structurally identical nodes
//! - [`constructors`] - Validated node factories
//! - [`eval`] - Literal evaluation used by the constant folder
//! - [`tree`] - ASCII tree rendering

pub mod constructors;
pub mod core;
pub mod eval;
pub mod hash_consing;
pub mod tree;

pub use core::Expr;
pub use hash_consing::gc_dead_refs;
