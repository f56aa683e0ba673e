//! Common imports for building expressions.
//!
//! ```rust,ignore
//! use tessera_ir::prelude::*;
//! ```

pub use crate::expr::Expr;
pub use crate::op::{CommReducer, IterVar, Op};
pub use crate::ops;
pub use crate::types::{BinaryOp, ConstValue, Intrinsic, ReduceOp};
pub use crate::{Error, Result};

pub use tessera_dtype::DType;
