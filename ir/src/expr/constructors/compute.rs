//! Operator nodes, selects and intrinsic calls.

use std::sync::Arc;

use smallvec::SmallVec;
use snafu::ensure;
use tessera_dtype::DType;

use crate::error::UnsupportedOperandSnafu;
use crate::expr::Expr;
use crate::op::Op;
use crate::types::{BinaryOp, Intrinsic};
use crate::Result;

impl Expr {
    /// Create a binary operator node over operands of one type.
    ///
    /// Comparisons have type bool with the operand lane count. Logical
    /// operators require bool operands.
    pub fn binary_node(op: BinaryOp, lhs: Arc<Self>, rhs: Arc<Self>) -> Result<Arc<Self>> {
        Self::check_same_dtype(op.name(), &lhs, &rhs)?;
        let dtype = lhs.dtype;
        if op.is_logical() {
            ensure!(dtype.is_bool(), UnsupportedOperandSnafu { operation: op.name(), dtype });
        }
        let result = if op.is_comparison() { DType::Bool.with_lanes(dtype.lanes()) } else { dtype };
        Ok(Self::new(Op::Binary(op, lhs, rhs), result))
    }

    /// Create a logical not node.
    pub fn not_node(src: Arc<Self>) -> Result<Arc<Self>> {
        let dtype = src.dtype;
        ensure!(dtype.is_bool(), UnsupportedOperandSnafu { operation: "not", dtype });
        Ok(Self::new(Op::Not(src), dtype))
    }

    /// Create a lane-wise select. Both branches are evaluated.
    pub fn select(condition: Arc<Self>, true_val: Arc<Self>, false_val: Arc<Self>) -> Result<Arc<Self>> {
        Self::check_same_dtype("select", &true_val, &false_val)?;
        let dtype = true_val.dtype;
        Self::check_condition(&condition, dtype)?;
        Ok(Self::new(Op::Select { condition, true_val, false_val }, dtype))
    }

    /// Create an intrinsic call of result type `dtype`.
    ///
    /// Argument types are not checked here; each operator in [`crate::ops`]
    /// validates the signature of the intrinsic it emits.
    pub fn call(intrinsic: Intrinsic, dtype: DType, args: impl IntoIterator<Item = Arc<Self>>) -> Arc<Self> {
        let args: SmallVec<[Arc<Self>; 3]> = args.into_iter().collect();
        Self::new(Op::Call { intrinsic, args }, dtype)
    }
}
