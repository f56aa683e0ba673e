//! Literals, variables and type-changing nodes.

use std::sync::Arc;

use snafu::ensure;
use tessera_dtype::DType;
use tessera_dtype::ext::HasDType;

use crate::error::{BroadcastRequiresScalarSnafu, LaneMismatchSnafu, ZeroLanesSnafu};
use crate::expr::Expr;
use crate::expr::hash_consing::next_var_unique;
use crate::op::Op;
use crate::types::{ConstValue, ConstValueHash};
use crate::Result;

impl Expr {
    // =========================================================================
    // Literals
    // =========================================================================

    /// Create a literal of `dtype`.
    ///
    /// The value is converted to the element type. For a vector `dtype` the
    /// scalar literal is broadcast across the lanes.
    pub fn const_(dtype: DType, value: impl Into<ConstValue>) -> Arc<Self> {
        let element = dtype.element_of();
        let scalar = Self::new(Op::Const(ConstValueHash(value.into().cast(&element))), element);
        if dtype.is_vector() { Self::new(Op::Broadcast { src: scalar, lanes: dtype.lanes() }, dtype) } else { scalar }
    }

    /// Create a literal from a Rust native value, inferring its type.
    pub fn native_const<T: HasDType + Into<ConstValue>>(value: T) -> Arc<Self> {
        Self::const_(T::DTYPE, value)
    }

    // =========================================================================
    // Variables
    // =========================================================================

    /// Create a fresh variable. Two calls never return the same node.
    pub fn var(name: impl Into<String>, dtype: DType) -> Arc<Self> {
        Self::new(Op::Var { name: name.into(), unique: next_var_unique() }, dtype)
    }

    // =========================================================================
    // Type Operations
    // =========================================================================

    /// Create a cast node. Lane counts must agree.
    pub fn cast_node(src: Arc<Self>, dtype: DType) -> Result<Arc<Self>> {
        ensure!(src.dtype.lanes() == dtype.lanes(), LaneMismatchSnafu { from: src.dtype, to: dtype });
        Ok(Self::new(Op::Cast { src, dtype }, dtype))
    }

    /// Replicate a scalar across `lanes` lanes. One lane returns `src`.
    pub fn broadcast(src: Arc<Self>, lanes: u16) -> Result<Arc<Self>> {
        ensure!(src.dtype.is_scalar(), BroadcastRequiresScalarSnafu { dtype: src.dtype });
        ensure!(lanes > 0, ZeroLanesSnafu { dtype: src.dtype });
        if lanes == 1 {
            return Ok(src);
        }
        let dtype = src.dtype.with_lanes(lanes);
        Ok(Self::new(Op::Broadcast { src, lanes }, dtype))
    }
}
