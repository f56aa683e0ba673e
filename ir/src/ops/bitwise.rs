//! Shifts and bitwise operators.
//!
//! All of them are intrinsic calls. Literal operands fold only when both are
//! index types.

use std::sync::Arc;

use snafu::ensure;
use tessera_dtype::DType;
use tracing::trace;

use crate::error::UnsupportedOperandSnafu;
use crate::expr::Expr;
use crate::expr::eval::{eval_bitwise, eval_bitwise_not};
use crate::ops::fold::{Folded, fold_index, folding_enabled};
use crate::ops::promote::match_types;
use crate::types::{ConstValue, Intrinsic};
use crate::Result;

fn check_operand(intrinsic: Intrinsic, dtype: DType, allow_bool: bool) -> Result<()> {
    ensure!(
        dtype.is_integral() || (allow_bool && dtype.is_bool()),
        UnsupportedOperandSnafu { operation: intrinsic.name(), dtype }
    );
    Ok(())
}

fn bitwise(
    intrinsic: Intrinsic,
    lhs: &Arc<Expr>,
    rhs: &Arc<Expr>,
    rule: impl FnOnce(Option<ConstValue>, Option<ConstValue>) -> Option<Folded>,
) -> Result<Arc<Expr>> {
    if let Some(folded) = fold_index(intrinsic.name(), lhs, rhs, rule)? {
        return Ok(folded);
    }
    let (lhs, rhs) = match_types(lhs, rhs)?;
    let dtype = lhs.dtype();
    let is_shift = matches!(intrinsic, Intrinsic::ShiftLeft | Intrinsic::ShiftRight);
    check_operand(intrinsic, dtype, !is_shift)?;
    Ok(Expr::call(intrinsic, dtype, [lhs, rhs]))
}

fn literal(intrinsic: Intrinsic, lhs: Option<ConstValue>, rhs: Option<ConstValue>) -> Option<Folded> {
    eval_bitwise(intrinsic, lhs?, rhs?).map(Folded::Literal)
}

fn shift(intrinsic: Intrinsic, lhs: &Arc<Expr>, rhs: &Arc<Expr>) -> Result<Arc<Expr>> {
    bitwise(intrinsic, lhs, rhs, |a, b| {
        literal(intrinsic, a, b).or(match b {
            Some(b) if b.is_zero() => Some(Folded::Lhs),
            _ => None,
        })
    })
}

pub fn shl(lhs: &Arc<Expr>, rhs: &Arc<Expr>) -> Result<Arc<Expr>> {
    shift(Intrinsic::ShiftLeft, lhs, rhs)
}

/// Shift right: arithmetic for signed operands, logical for unsigned ones.
pub fn shr(lhs: &Arc<Expr>, rhs: &Arc<Expr>) -> Result<Arc<Expr>> {
    shift(Intrinsic::ShiftRight, lhs, rhs)
}

pub fn bitwise_and(lhs: &Arc<Expr>, rhs: &Arc<Expr>) -> Result<Arc<Expr>> {
    bitwise(Intrinsic::BitwiseAnd, lhs, rhs, |a, b| literal(Intrinsic::BitwiseAnd, a, b))
}

pub fn bitwise_or(lhs: &Arc<Expr>, rhs: &Arc<Expr>) -> Result<Arc<Expr>> {
    bitwise(Intrinsic::BitwiseOr, lhs, rhs, |a, b| literal(Intrinsic::BitwiseOr, a, b))
}

pub fn bitwise_xor(lhs: &Arc<Expr>, rhs: &Arc<Expr>) -> Result<Arc<Expr>> {
    bitwise(Intrinsic::BitwiseXor, lhs, rhs, |a, b| literal(Intrinsic::BitwiseXor, a, b))
}

/// Bitwise complement of a signed or unsigned integer.
pub fn bitwise_not(value: &Arc<Expr>) -> Result<Arc<Expr>> {
    let dtype = value.dtype();
    check_operand(Intrinsic::BitwiseNot, dtype, false)?;
    if folding_enabled()
        && dtype.is_index()
        && let Some(complement) = value.as_const().and_then(eval_bitwise_not)
    {
        trace!(op = Intrinsic::BitwiseNot.name(), value = value.id, "folded");
        return Ok(Expr::const_(dtype, complement));
    }
    Ok(Expr::call(Intrinsic::BitwiseNot, dtype, [value.clone()]))
}
