//! Relational operators and logical connectives.

use std::sync::Arc;

use snafu::ensure;
use tracing::trace;

use crate::error::UnsupportedOperandSnafu;
use crate::expr::Expr;
use crate::expr::eval::eval_binary_op;
use crate::ops::fold::{Folded, fold_arith, folding_enabled};
use crate::ops::promote::match_types;
use crate::types::{BinaryOp, ConstValue};
use crate::Result;

fn compare(op: BinaryOp, lhs: &Arc<Expr>, rhs: &Arc<Expr>) -> Result<Arc<Expr>> {
    let (lhs, rhs) = match_types(lhs, rhs)?;
    let rule = |a: Option<ConstValue>, b: Option<ConstValue>| match eval_binary_op(op, a?, b?)? {
        ConstValue::Bool(value) => Some(Folded::Bool(value)),
        _ => None,
    };
    if let Some(folded) = fold_arith(op.name(), &lhs, &rhs, rule)? {
        return Ok(folded);
    }
    Expr::binary_node(op, lhs, rhs)
}

pub fn gt(lhs: &Arc<Expr>, rhs: &Arc<Expr>) -> Result<Arc<Expr>> {
    compare(BinaryOp::Gt, lhs, rhs)
}

pub fn ge(lhs: &Arc<Expr>, rhs: &Arc<Expr>) -> Result<Arc<Expr>> {
    compare(BinaryOp::Ge, lhs, rhs)
}

pub fn lt(lhs: &Arc<Expr>, rhs: &Arc<Expr>) -> Result<Arc<Expr>> {
    compare(BinaryOp::Lt, lhs, rhs)
}

pub fn le(lhs: &Arc<Expr>, rhs: &Arc<Expr>) -> Result<Arc<Expr>> {
    compare(BinaryOp::Le, lhs, rhs)
}

pub fn eq(lhs: &Arc<Expr>, rhs: &Arc<Expr>) -> Result<Arc<Expr>> {
    compare(BinaryOp::Eq, lhs, rhs)
}

pub fn ne(lhs: &Arc<Expr>, rhs: &Arc<Expr>) -> Result<Arc<Expr>> {
    compare(BinaryOp::Ne, lhs, rhs)
}

/// Short-circuit a connective with one boolean literal operand.
///
/// `absorbing` is the literal that decides the result on its own (`false`
/// for and, `true` for or).
fn short_circuit(op: BinaryOp, lhs: &Arc<Expr>, rhs: &Arc<Expr>, absorbing: bool) -> Option<Arc<Expr>> {
    if !folding_enabled() || !lhs.dtype().is_bool() || !rhs.dtype().is_bool() {
        return None;
    }
    let result = match (lhs.as_const(), rhs.as_const()) {
        (Some(ConstValue::Bool(a)), _) => if a == absorbing { lhs } else { rhs },
        (_, Some(ConstValue::Bool(b))) => if b == absorbing { rhs } else { lhs },
        _ => return None,
    };
    trace!(op = op.name(), lhs = lhs.id, rhs = rhs.id, result = result.id, "short-circuited");
    Some(result.clone())
}

/// Logical and of two bool expressions.
pub fn logical_and(lhs: &Arc<Expr>, rhs: &Arc<Expr>) -> Result<Arc<Expr>> {
    if let Some(result) = short_circuit(BinaryOp::And, lhs, rhs, false) {
        return Ok(result);
    }
    Expr::binary_node(BinaryOp::And, lhs.clone(), rhs.clone())
}

/// Logical or of two bool expressions.
pub fn logical_or(lhs: &Arc<Expr>, rhs: &Arc<Expr>) -> Result<Arc<Expr>> {
    if let Some(result) = short_circuit(BinaryOp::Or, lhs, rhs, true) {
        return Ok(result);
    }
    Expr::binary_node(BinaryOp::Or, lhs.clone(), rhs.clone())
}

/// Logical not. A bool literal folds to its negation.
pub fn logical_not(value: &Arc<Expr>) -> Result<Arc<Expr>> {
    let dtype = value.dtype();
    ensure!(dtype.is_bool(), UnsupportedOperandSnafu { operation: "not", dtype });
    if folding_enabled()
        && let Some(ConstValue::Bool(b)) = value.as_const()
    {
        trace!(op = "not", value = value.id, "folded");
        return Ok(Expr::const_(dtype, !b));
    }
    Expr::not_node(value.clone())
}
