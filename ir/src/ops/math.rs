//! Elementwise math: pow, abs, fmod and rounding.

use std::sync::Arc;

use snafu::ensure;
use tessera_dtype::TypeKind;
use tracing::trace;

use crate::error::UnsupportedOperandSnafu;
use crate::expr::Expr;
use crate::expr::eval::{eval_abs, eval_rounding};
use crate::ops::arithmetic::neg;
use crate::ops::comparison::ge;
use crate::ops::control::make_zero;
use crate::ops::fold::folding_enabled;
use crate::ops::promote::match_types;
use crate::types::Intrinsic;
use crate::Result;

/// Promote and emit a float-only binary intrinsic.
fn float_binary(intrinsic: Intrinsic, lhs: &Arc<Expr>, rhs: &Arc<Expr>) -> Result<Arc<Expr>> {
    let (lhs, rhs) = match_types(lhs, rhs)?;
    let dtype = lhs.dtype();
    ensure!(dtype.is_float(), UnsupportedOperandSnafu { operation: intrinsic.name(), dtype });
    Ok(Expr::call(intrinsic, dtype, [lhs, rhs]))
}

/// `x` raised to `y`. Float only, never folded.
pub fn pow(x: &Arc<Expr>, y: &Arc<Expr>) -> Result<Arc<Expr>> {
    float_binary(Intrinsic::Pow, x, y)
}

/// Float remainder. Never folded.
pub fn fmod(x: &Arc<Expr>, y: &Arc<Expr>) -> Result<Arc<Expr>> {
    float_binary(Intrinsic::Fmod, x, y)
}

/// Absolute value.
///
/// Signed integers lower to `select(x >= 0, x, -x)`, floats to the `fabs`
/// intrinsic, and unsigned values are returned unchanged.
///
/// # Errors
///
/// `UnsupportedOperand` for bool.
pub fn abs(x: &Arc<Expr>) -> Result<Arc<Expr>> {
    let dtype = x.dtype();
    if dtype.is_bool() {
        return UnsupportedOperandSnafu { operation: "abs", dtype }.fail();
    }
    if dtype.is_uint() {
        return Ok(x.clone());
    }

    if folding_enabled()
        && let Some(value) = x.as_const().and_then(eval_abs)
    {
        trace!(op = "abs", value = x.id, "folded");
        return Ok(Expr::const_(dtype, value));
    }

    match dtype.kind() {
        TypeKind::Int => Expr::select(ge(x, &make_zero(dtype))?, x.clone(), neg(x)?),
        _ => Ok(Expr::call(Intrinsic::Fabs, dtype, [x.clone()])),
    }
}

fn rounding(intrinsic: Intrinsic, x: &Arc<Expr>) -> Result<Arc<Expr>> {
    if folding_enabled()
        && let Some(value) = x.as_const().and_then(|v| eval_rounding(intrinsic, v))
    {
        trace!(op = intrinsic.name(), value = x.id, "folded");
        return Ok(Expr::const_(x.dtype(), value));
    }
    Ok(Expr::call(intrinsic, x.dtype(), [x.clone()]))
}

pub fn floor(x: &Arc<Expr>) -> Result<Arc<Expr>> {
    rounding(Intrinsic::Floor, x)
}

pub fn ceil(x: &Arc<Expr>) -> Result<Arc<Expr>> {
    rounding(Intrinsic::Ceil, x)
}

/// Round to nearest, ties to even.
pub fn round(x: &Arc<Expr>) -> Result<Arc<Expr>> {
    rounding(Intrinsic::Round, x)
}

pub fn trunc(x: &Arc<Expr>) -> Result<Arc<Expr>> {
    rounding(Intrinsic::Trunc, x)
}
