//! Conditional expressions and literal helpers.

use std::sync::Arc;

use snafu::ensure;
use tessera_dtype::DType;

use crate::error::ConditionNotBoolSnafu;
use crate::expr::Expr;
use crate::ops::promote::match_types;
use crate::types::{ConstValue, Intrinsic};
use crate::Result;

/// Literal of `dtype`, broadcast across the lanes of a vector type.
pub fn make_const(dtype: DType, value: impl Into<ConstValue>) -> Arc<Expr> {
    Expr::const_(dtype, value)
}

pub fn make_zero(dtype: DType) -> Arc<Expr> {
    Expr::const_(dtype, ConstValue::zero(&dtype))
}

/// Choose between two values on a scalar condition.
///
/// The branches are promoted to one type. A literal condition picks its
/// branch directly; otherwise only the chosen branch is evaluated at run time.
///
/// # Errors
///
/// `ConditionNotBool` unless `condition` is a scalar bool.
pub fn if_then_else(condition: &Arc<Expr>, then_value: &Arc<Expr>, else_value: &Arc<Expr>) -> Result<Arc<Expr>> {
    let (then_value, else_value) = match_types(then_value, else_value)?;
    let actual = condition.dtype();
    ensure!(actual == DType::Bool, ConditionNotBoolSnafu { actual, value: then_value.dtype() });

    if let Some(ConstValue::Bool(taken)) = condition.as_const() {
        return Ok(if taken { then_value } else { else_value });
    }
    let dtype = then_value.dtype();
    Ok(Expr::call(Intrinsic::IfThenElse, dtype, [condition.clone(), then_value, else_value]))
}

/// Mark a condition as likely true. Literals are returned unchanged.
pub fn likely(condition: &Arc<Expr>) -> Arc<Expr> {
    if condition.is_const() {
        return condition.clone();
    }
    Expr::call(Intrinsic::Likely, condition.dtype(), [condition.clone()])
}

/// The shift `s` if `value` is an integer literal equal to `1 << s`.
pub fn is_const_power_of_two_integer(value: &Arc<Expr>) -> Option<u32> {
    let magnitude = match value.as_const()? {
        ConstValue::Int(v) if v > 0 => v as u64,
        ConstValue::UInt(v) if v > 0 => v,
        _ => return None,
    };
    magnitude.is_power_of_two().then(|| magnitude.trailing_zeros())
}
