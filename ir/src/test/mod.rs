//! Crate tests.
//!
//! - `unit` - per-operator behaviour, one file per operator family
//! - `property` - proptest invariants of the folder and promotion

mod property;

use std::sync::Arc;

use crate::expr::Expr;
use crate::types::ConstValue;

/// Literal value of `expr`, panicking if it is not a scalar literal.
pub(crate) fn literal(expr: &Arc<Expr>) -> ConstValue {
    expr.as_const().unwrap_or_else(|| panic!("expected a literal, got {}", expr.tree()))
}
