//! Type reconciliation, casts and reinterpretation.

use std::sync::Arc;

use snafu::{OptionExt, ensure};
use tessera_dtype::DType;
use tracing::{debug, trace};

use crate::error::{LaneMismatchSnafu, TypeMismatchSnafu};
use crate::expr::Expr;
use crate::ops::fold::folding_enabled;
use crate::types::Intrinsic;
use crate::Result;

/// Bring two operands to one type.
///
/// A scalar facing a vector is broadcast to the vector's lane count. Kinds
/// and widths are then reconciled by [`DType::match_kinds`]: the non-float
/// side of a float pair is cast to the float type, the narrower of two
/// same-signedness integers is widened, and mixed signedness makes both sides
/// signed at the larger width.
///
/// # Errors
///
/// `TypeMismatch` when the lane counts are unequal vectors or the kinds have
/// no common type (for example bool against int, or two float widths).
pub fn match_types(lhs: &Arc<Expr>, rhs: &Arc<Expr>) -> Result<(Arc<Expr>, Arc<Expr>)> {
    let (ltype, rtype) = (lhs.dtype(), rhs.dtype());
    if ltype == rtype {
        return Ok((lhs.clone(), rhs.clone()));
    }

    let (lhs, rhs) = match (ltype.lanes(), rtype.lanes()) {
        (1, lanes) if lanes != 1 => {
            debug!(from = %ltype, lanes, "broadcasting left operand");
            (Expr::broadcast(lhs.clone(), lanes)?, rhs.clone())
        }
        (lanes, 1) if lanes != 1 => {
            debug!(from = %rtype, lanes, "broadcasting right operand");
            (lhs.clone(), Expr::broadcast(rhs.clone(), lanes)?)
        }
        (l, r) => {
            ensure!(l == r, TypeMismatchSnafu { lhs: ltype, rhs: rtype });
            (lhs.clone(), rhs.clone())
        }
    };

    let (ltarget, rtarget) =
        DType::match_kinds(lhs.dtype(), rhs.dtype()).context(TypeMismatchSnafu { lhs: ltype, rhs: rtype })?;
    if ltarget != lhs.dtype() || rtarget != rhs.dtype() {
        debug!(lhs = %lhs.dtype(), rhs = %rhs.dtype(), to_lhs = %ltarget, to_rhs = %rtarget, "promoting operands");
    }
    Ok((cast(ltarget, &lhs)?, cast(rtarget, &rhs)?))
}

/// Convert `value` to `dtype`.
///
/// A scalar literal folds into a literal of the target type with native
/// conversion semantics. A scalar cast to a vector type casts the element
/// and broadcasts it.
///
/// # Errors
///
/// `LaneMismatch` when a vector is cast to a type with another lane count.
pub fn cast(dtype: DType, value: &Arc<Expr>) -> Result<Arc<Expr>> {
    let from = value.dtype();
    if from == dtype {
        return Ok(value.clone());
    }

    if dtype.is_scalar() {
        ensure!(from.is_scalar(), LaneMismatchSnafu { from, to: dtype });
        if folding_enabled()
            && let Some(literal) = value.as_const()
        {
            let folded = Expr::const_(dtype, literal);
            trace!(op = "cast", value = value.id, result = folded.id, "folded");
            return Ok(folded);
        }
        return Expr::cast_node(value.clone(), dtype);
    }

    if from.is_scalar() {
        let element = cast(dtype.element_of(), value)?;
        return Expr::broadcast(element, dtype.lanes());
    }

    ensure!(from.lanes() == dtype.lanes(), LaneMismatchSnafu { from, to: dtype });
    Expr::cast_node(value.clone(), dtype)
}

/// Reinterpret the bits of `value` as `dtype`. Never folded.
pub fn reinterpret(dtype: DType, value: &Arc<Expr>) -> Result<Arc<Expr>> {
    if value.dtype() == dtype {
        return Ok(value.clone());
    }
    Ok(Expr::call(Intrinsic::Reinterpret, dtype, [value.clone()]))
}
