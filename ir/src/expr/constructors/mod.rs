//! Validated node factories.
//!
//! - [`data`] - Literals, variables, casts and broadcasts
//! - [`compute`] - Operator nodes, selects and intrinsic calls
//! - [`reduce`] - Reducers, iteration variables and reduction nodes
//!
//! Factories check the shape of the node they build and nothing else: type
//! promotion and folding belong to [`crate::ops`].

use std::sync::Arc;

use snafu::ensure;
use tessera_dtype::DType;

use crate::error::{ChildTypeMismatchSnafu, ConditionNotBoolSnafu, DivideByZeroSnafu};
use crate::expr::Expr;
use crate::types::BinaryOp;
use crate::Result;

pub mod compute;
pub mod data;
pub mod reduce;

impl Expr {
    /// Fail with `DivideByZero` when `divisor` is a literal zero.
    ///
    /// Only literal divisors can be checked while building the graph.
    pub(crate) fn check_division_by_zero(op: BinaryOp, divisor: &Arc<Self>) -> Result<()> {
        let is_zero = divisor.as_const().is_some_and(|value| value.is_zero());
        ensure!(!is_zero, DivideByZeroSnafu { op });
        Ok(())
    }

    pub(crate) fn check_same_dtype(op: &'static str, lhs: &Arc<Self>, rhs: &Arc<Self>) -> Result<()> {
        ensure!(lhs.dtype == rhs.dtype, ChildTypeMismatchSnafu { op, lhs: lhs.dtype, rhs: rhs.dtype });
        Ok(())
    }

    /// A condition is bool with either one lane or the lane count of `value`.
    pub(crate) fn check_condition(condition: &Arc<Self>, value: DType) -> Result<()> {
        let actual = condition.dtype;
        ensure!(
            actual.is_bool() && (actual.is_scalar() || actual.lanes() == value.lanes()),
            ConditionNotBoolSnafu { actual, value }
        );
        Ok(())
    }
}
