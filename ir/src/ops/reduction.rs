//! Standard commutative reductions over an iteration domain.

use std::sync::Arc;

use smallvec::smallvec;
use tessera_dtype::DType;

use crate::expr::Expr;
use crate::op::{CommReducer, IterVar};
use crate::ops::arithmetic::{add, max, min, mul};
use crate::ops::control::{make_const, make_zero};
use crate::types::{ConstValue, ReduceOp};
use crate::Result;

impl CommReducer {
    /// Reducer for one of the standard reductions over values of `dtype`.
    ///
    /// The formals are fresh variables, so the combining expression is never
    /// folded.
    pub fn standard(kind: ReduceOp, dtype: DType) -> Result<Arc<Self>> {
        let lhs = Expr::var("x", dtype);
        let rhs = Expr::var("y", dtype);
        let (result, identity) = match kind {
            ReduceOp::Sum => (add(&lhs, &rhs)?, make_zero(dtype)),
            ReduceOp::Min => (min(&lhs, &rhs)?, make_const(dtype, ConstValue::max_of(&dtype))),
            ReduceOp::Max => (max(&lhs, &rhs)?, make_const(dtype, ConstValue::min_of(&dtype))),
            ReduceOp::Prod => (mul(&lhs, &rhs)?, make_const(dtype, ConstValue::one(&dtype))),
        };
        Self::with_kind(Some(kind), lhs, rhs, result, identity)
    }
}

fn reduce(kind: ReduceOp, source: &Arc<Expr>, domain: &[IterVar]) -> Result<Arc<Expr>> {
    let combiner = CommReducer::standard(kind, source.dtype())?;
    Expr::reduce_node(combiner, smallvec![source.clone()], domain.to_vec(), make_const(DType::Bool, true), 0)
}

/// Sum of `source` over `domain`. Identity 0.
pub fn sum(source: &Arc<Expr>, domain: &[IterVar]) -> Result<Arc<Expr>> {
    reduce(ReduceOp::Sum, source, domain)
}

/// Minimum of `source` over `domain`. Identity is the largest value of the type.
pub fn min_reduce(source: &Arc<Expr>, domain: &[IterVar]) -> Result<Arc<Expr>> {
    reduce(ReduceOp::Min, source, domain)
}

/// Maximum of `source` over `domain`. Identity is the smallest value of the type.
pub fn max_reduce(source: &Arc<Expr>, domain: &[IterVar]) -> Result<Arc<Expr>> {
    reduce(ReduceOp::Max, source, domain)
}

/// Product of `source` over `domain`. Identity 1.
pub fn prod(source: &Arc<Expr>, domain: &[IterVar]) -> Result<Arc<Expr>> {
    reduce(ReduceOp::Prod, source, domain)
}
