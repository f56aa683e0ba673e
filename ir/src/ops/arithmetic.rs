//! Arithmetic operators (add, sub, neg, mul, div, modulo, min, max).
//!
//! Literal folds wrap to the width of the result type. Division and modulo
//! fold only for a non-negative dividend and a positive divisor, the regime
//! in which every backend rounds the same way.

use std::sync::Arc;

use crate::expr::Expr;
use crate::expr::eval::{eval_binary_op, eval_neg};
use crate::ops::control::make_zero;
use crate::ops::fold::{Folded, fold_arith, fold_index, folding_enabled};
use crate::ops::promote::match_types;
use crate::types::{BinaryOp, ConstValue};
use crate::Result;

/// Promote, fold with `rule`, or build the generic node.
fn arith(
    op: BinaryOp,
    lhs: &Arc<Expr>,
    rhs: &Arc<Expr>,
    rule: impl FnOnce(Option<ConstValue>, Option<ConstValue>) -> Option<Folded>,
) -> Result<Arc<Expr>> {
    let (lhs, rhs) = match_types(lhs, rhs)?;
    if let Some(folded) = fold_arith(op.name(), &lhs, &rhs, rule)? {
        return Ok(folded);
    }
    Expr::binary_node(op, lhs, rhs)
}

fn literal(op: BinaryOp, lhs: Option<ConstValue>, rhs: Option<ConstValue>) -> Option<Folded> {
    eval_binary_op(op, lhs?, rhs?).map(Folded::Literal)
}

pub fn add(lhs: &Arc<Expr>, rhs: &Arc<Expr>) -> Result<Arc<Expr>> {
    arith(BinaryOp::Add, lhs, rhs, |a, b| {
        literal(BinaryOp::Add, a, b).or(match (a, b) {
            (Some(a), _) if a.is_zero() => Some(Folded::Rhs),
            (_, Some(b)) if b.is_zero() => Some(Folded::Lhs),
            _ => None,
        })
    })
}

pub fn sub(lhs: &Arc<Expr>, rhs: &Arc<Expr>) -> Result<Arc<Expr>> {
    arith(BinaryOp::Sub, lhs, rhs, |a, b| {
        literal(BinaryOp::Sub, a, b).or(match b {
            Some(b) if b.is_zero() => Some(Folded::Lhs),
            _ => None,
        })
    })
}

/// Negate: a signed or float literal folds, anything else becomes `0 - x`.
pub fn neg(value: &Arc<Expr>) -> Result<Arc<Expr>> {
    if folding_enabled()
        && let Some(negated) = value.as_const().and_then(eval_neg)
    {
        return Ok(Expr::const_(value.dtype(), negated));
    }
    sub(&make_zero(value.dtype()), value)
}

pub fn mul(lhs: &Arc<Expr>, rhs: &Arc<Expr>) -> Result<Arc<Expr>> {
    arith(BinaryOp::Mul, lhs, rhs, |a, b| {
        literal(BinaryOp::Mul, a, b).or(match (a, b) {
            (Some(a), _) if a.is_one() => Some(Folded::Rhs),
            (Some(a), _) if a.is_zero() => Some(Folded::Lhs),
            (_, Some(b)) if b.is_one() => Some(Folded::Lhs),
            (_, Some(b)) if b.is_zero() => Some(Folded::Rhs),
            _ => None,
        })
    })
}

/// Divide.
///
/// # Errors
///
/// `DivideByZero` for a literal zero divisor, whether or not folding is
/// enabled. The check runs before the `0 / x` identity.
pub fn div(lhs: &Arc<Expr>, rhs: &Arc<Expr>) -> Result<Arc<Expr>> {
    let (lhs, rhs) = match_types(lhs, rhs)?;
    Expr::check_division_by_zero(BinaryOp::Div, &rhs)?;
    arith(BinaryOp::Div, &lhs, &rhs, |a, b| {
        literal(BinaryOp::Div, a, b).or(match (a, b) {
            (Some(a), _) if a.is_zero() => Some(Folded::Lhs),
            (_, Some(b)) if b.is_one() => Some(Folded::Lhs),
            _ => None,
        })
    })
}

/// Remainder.
///
/// Folds only when both operands are index types; float remainders always
/// build a node.
///
/// # Errors
///
/// `DivideByZero` for a literal integer zero divisor.
pub fn modulo(lhs: &Arc<Expr>, rhs: &Arc<Expr>) -> Result<Arc<Expr>> {
    if rhs.dtype().is_integral() {
        Expr::check_division_by_zero(BinaryOp::Mod, rhs)?;
    }
    let rule = |a: Option<ConstValue>, b: Option<ConstValue>| {
        literal(BinaryOp::Mod, a, b).or(match (a, b) {
            (Some(a), _) if a.is_zero() => Some(Folded::Lhs),
            (_, Some(b)) if b.is_one() => Some(Folded::Zero),
            _ => None,
        })
    };
    if let Some(folded) = fold_index(BinaryOp::Mod.name(), lhs, rhs, rule)? {
        return Ok(folded);
    }
    let (lhs, rhs) = match_types(lhs, rhs)?;
    Expr::binary_node(BinaryOp::Mod, lhs, rhs)
}

pub fn min(lhs: &Arc<Expr>, rhs: &Arc<Expr>) -> Result<Arc<Expr>> {
    arith(BinaryOp::Min, lhs, rhs, |a, b| literal(BinaryOp::Min, a, b))
}

pub fn max(lhs: &Arc<Expr>, rhs: &Arc<Expr>) -> Result<Arc<Expr>> {
    arith(BinaryOp::Max, lhs, rhs, |a, b| literal(BinaryOp::Max, a, b))
}
