//! Shared control flow of the constant folder.
//!
//! Operators describe their folding rules as a closure over the literal
//! values of their operands (`None` for a non-literal operand) and get back
//! either a replacement node or `None`, in which case they build the generic
//! node themselves.

use std::sync::Arc;

use tessera_dtype::DType;
use tracing::trace;

use crate::config::fold_config;
use crate::expr::Expr;
use crate::ops::promote::cast;
use crate::types::ConstValue;
use crate::Result;

/// What a folding rule replaces the operator application with.
pub(super) enum Folded {
    /// Literal of the result type.
    Literal(ConstValue),
    /// Scalar bool literal.
    Bool(bool),
    /// The left operand, cast to the result type.
    Lhs,
    /// The right operand, cast to the result type.
    Rhs,
    /// Zero of the result type.
    Zero,
}

pub(super) fn folding_enabled() -> bool {
    fold_config().fold_constants
}

/// Fold an operator whose operands were already promoted to one type.
pub(super) fn fold_arith(
    name: &'static str,
    lhs: &Arc<Expr>,
    rhs: &Arc<Expr>,
    rule: impl FnOnce(Option<ConstValue>, Option<ConstValue>) -> Option<Folded>,
) -> Result<Option<Arc<Expr>>> {
    if !folding_enabled() {
        return Ok(None);
    }
    apply(name, lhs, rhs, rule)
}

/// Fold an operator on its raw operands when both are index types.
///
/// Skips promotion entirely: a successful fold returns a node of the wider
/// operand type.
pub(super) fn fold_index(
    name: &'static str,
    lhs: &Arc<Expr>,
    rhs: &Arc<Expr>,
    rule: impl FnOnce(Option<ConstValue>, Option<ConstValue>) -> Option<Folded>,
) -> Result<Option<Arc<Expr>>> {
    if !folding_enabled() || !lhs.dtype().is_index() || !rhs.dtype().is_index() {
        return Ok(None);
    }
    apply(name, lhs, rhs, rule)
}

fn apply(
    name: &'static str,
    lhs: &Arc<Expr>,
    rhs: &Arc<Expr>,
    rule: impl FnOnce(Option<ConstValue>, Option<ConstValue>) -> Option<Folded>,
) -> Result<Option<Arc<Expr>>> {
    let Some(folded) = rule(lhs.as_const(), rhs.as_const()) else {
        return Ok(None);
    };

    let rtype = DType::wider(lhs.dtype(), rhs.dtype());
    let result = match folded {
        Folded::Literal(value) => Expr::const_(rtype, value),
        Folded::Bool(value) => Expr::const_(DType::Bool, value),
        Folded::Lhs => cast(rtype, lhs)?,
        Folded::Rhs => cast(rtype, rhs)?,
        Folded::Zero => Expr::const_(rtype, ConstValue::zero(&rtype)),
    };
    trace!(op = name, lhs = lhs.id, rhs = rhs.id, result = result.id, "folded");
    Ok(Some(result))
}
