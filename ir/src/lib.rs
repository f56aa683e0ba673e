//! Expression construction and constant folding for the Tessera IR.
//!
//! Frontends combine typed scalar and vector expressions through the
//! operators in [`ops`]. Each operator reconciles operand types, folds
//! literal operands and algebraic identities, and only then allocates a node.
//!
//! # Module Organization
//!
//! - [`types`] - Literal values, operator kinds and intrinsic identifiers
//! - [`op`] - Operation enum, reducers and iteration variables
//! - [`expr`] - Hash-consed expression nodes and their factories
//! - [`ops`] - Promoting, folding operators
//! - [`config`] - Folding configuration
//! - [`error`] - Error types and the diagnostic sink

pub mod config;
pub mod error;
pub mod expr;
pub mod op;
pub mod ops;
pub mod prelude;
pub mod types;

#[cfg(test)]
pub mod test;

pub use config::{FoldConfig, fold_config};
pub use error::{Diagnostics, Error, ErrorCategory, Result};
pub use expr::Expr;
pub use op::{CommReducer, IterVar, Op};
pub use types::{BinaryOp, ConstValue, ConstValueHash, Intrinsic, ReduceOp};

pub use tessera_dtype::DType;
