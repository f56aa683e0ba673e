//! Literal evaluation for the constant folder.
//!
//! Every evaluator returns `None` when the operands are outside the regime in
//! which the result is the same on every backend. Integer arithmetic wraps in
//! 64 bits; the caller narrows the result to the node type, which gives the
//! fixed-width wraparound of the target type.

use crate::types::{BinaryOp, ConstValue, Intrinsic};

/// Evaluate a binary operator on two literals of the same type.
///
/// Comparisons produce `ConstValue::Bool`; everything else keeps the operand
/// variant. Logical operators are short-circuited by the caller, never here.
pub fn eval_binary_op(op: BinaryOp, a: ConstValue, b: ConstValue) -> Option<ConstValue> {
    match op {
        BinaryOp::Add => eval_add(a, b),
        BinaryOp::Sub => eval_sub(a, b),
        BinaryOp::Mul => eval_mul(a, b),
        BinaryOp::Div => eval_div(a, b),
        BinaryOp::Mod => eval_mod(a, b),
        BinaryOp::Min => eval_min(a, b),
        BinaryOp::Max => eval_max(a, b),
        BinaryOp::Lt | BinaryOp::Le | BinaryOp::Gt | BinaryOp::Ge | BinaryOp::Eq | BinaryOp::Ne => {
            eval_compare(op, a, b)
        }
        BinaryOp::And | BinaryOp::Or => None,
    }
}

/// Evaluate a two-operand integer intrinsic (shift or bitwise).
pub fn eval_bitwise(intrinsic: Intrinsic, a: ConstValue, b: ConstValue) -> Option<ConstValue> {
    use ConstValue::*;

    match (intrinsic, a, b) {
        (Intrinsic::ShiftLeft, Int(x), Int(y)) if (0..64).contains(&y) => Some(Int(x.wrapping_shl(y as u32))),
        (Intrinsic::ShiftRight, Int(x), Int(y)) if (0..64).contains(&y) => Some(Int(x >> y)),
        (Intrinsic::ShiftLeft, UInt(x), UInt(y)) if y < 64 => Some(UInt(x.wrapping_shl(y as u32))),
        (Intrinsic::ShiftRight, UInt(x), UInt(y)) if y < 64 => Some(UInt(x >> y)),
        (Intrinsic::BitwiseAnd, Int(x), Int(y)) => Some(Int(x & y)),
        (Intrinsic::BitwiseOr, Int(x), Int(y)) => Some(Int(x | y)),
        (Intrinsic::BitwiseXor, Int(x), Int(y)) => Some(Int(x ^ y)),
        (Intrinsic::BitwiseAnd, UInt(x), UInt(y)) => Some(UInt(x & y)),
        (Intrinsic::BitwiseOr, UInt(x), UInt(y)) => Some(UInt(x | y)),
        (Intrinsic::BitwiseXor, UInt(x), UInt(y)) => Some(UInt(x ^ y)),
        _ => None,
    }
}

pub fn eval_bitwise_not(v: ConstValue) -> Option<ConstValue> {
    match v {
        ConstValue::Int(x) => Some(ConstValue::Int(!x)),
        ConstValue::UInt(x) => Some(ConstValue::UInt(!x)),
        _ => None,
    }
}

// ============================================================================
// Unary Operations
// ============================================================================

#[inline]
pub fn eval_neg(v: ConstValue) -> Option<ConstValue> {
    match v {
        ConstValue::Int(x) => Some(ConstValue::Int(x.wrapping_neg())),
        ConstValue::Float(x) => Some(ConstValue::Float(-x)),
        _ => None,
    }
}

#[inline]
pub fn eval_abs(v: ConstValue) -> Option<ConstValue> {
    match v {
        ConstValue::Int(x) => Some(ConstValue::Int(x.wrapping_abs())),
        ConstValue::Float(x) => Some(ConstValue::Float(x.abs())),
        ConstValue::UInt(_) => Some(v),
        ConstValue::Bool(_) => None,
    }
}

/// Floor, ceil, round (half to even) and trunc of a float literal.
pub fn eval_rounding(intrinsic: Intrinsic, v: ConstValue) -> Option<ConstValue> {
    let ConstValue::Float(x) = v else { return None };
    let rounded = match intrinsic {
        Intrinsic::Floor => x.floor(),
        Intrinsic::Ceil => x.ceil(),
        Intrinsic::Round => x.round_ties_even(),
        Intrinsic::Trunc => x.trunc(),
        _ => return None,
    };
    Some(ConstValue::Float(rounded))
}

// ============================================================================
// Binary Operations
// ============================================================================

#[inline]
fn eval_add(a: ConstValue, b: ConstValue) -> Option<ConstValue> {
    match (a, b) {
        (ConstValue::Int(x), ConstValue::Int(y)) => Some(ConstValue::Int(x.wrapping_add(y))),
        (ConstValue::UInt(x), ConstValue::UInt(y)) => Some(ConstValue::UInt(x.wrapping_add(y))),
        (ConstValue::Float(x), ConstValue::Float(y)) => Some(ConstValue::Float(x + y)),
        _ => None,
    }
}

#[inline]
fn eval_sub(a: ConstValue, b: ConstValue) -> Option<ConstValue> {
    match (a, b) {
        (ConstValue::Int(x), ConstValue::Int(y)) => Some(ConstValue::Int(x.wrapping_sub(y))),
        (ConstValue::UInt(x), ConstValue::UInt(y)) => Some(ConstValue::UInt(x.wrapping_sub(y))),
        (ConstValue::Float(x), ConstValue::Float(y)) => Some(ConstValue::Float(x - y)),
        _ => None,
    }
}

#[inline]
fn eval_mul(a: ConstValue, b: ConstValue) -> Option<ConstValue> {
    match (a, b) {
        (ConstValue::Int(x), ConstValue::Int(y)) => Some(ConstValue::Int(x.wrapping_mul(y))),
        (ConstValue::UInt(x), ConstValue::UInt(y)) => Some(ConstValue::UInt(x.wrapping_mul(y))),
        (ConstValue::Float(x), ConstValue::Float(y)) => Some(ConstValue::Float(x * y)),
        _ => None,
    }
}

/// Division folds only for a non-negative dividend and a positive divisor,
/// where truncating and flooring division agree.
#[inline]
fn eval_div(a: ConstValue, b: ConstValue) -> Option<ConstValue> {
    match (a, b) {
        (ConstValue::Int(x), ConstValue::Int(y)) if x >= 0 && y > 0 => Some(ConstValue::Int(x / y)),
        (ConstValue::UInt(x), ConstValue::UInt(y)) if y > 0 => Some(ConstValue::UInt(x / y)),
        (ConstValue::Float(x), ConstValue::Float(y)) if y != 0.0 => Some(ConstValue::Float(x / y)),
        _ => None,
    }
}

/// Same sign regime as division. Float remainders are never folded.
#[inline]
fn eval_mod(a: ConstValue, b: ConstValue) -> Option<ConstValue> {
    match (a, b) {
        (ConstValue::Int(x), ConstValue::Int(y)) if x >= 0 && y > 0 => Some(ConstValue::Int(x % y)),
        (ConstValue::UInt(x), ConstValue::UInt(y)) if y > 0 => Some(ConstValue::UInt(x % y)),
        _ => None,
    }
}

#[inline]
fn eval_min(a: ConstValue, b: ConstValue) -> Option<ConstValue> {
    match (a, b) {
        (ConstValue::Int(x), ConstValue::Int(y)) => Some(ConstValue::Int(x.min(y))),
        (ConstValue::UInt(x), ConstValue::UInt(y)) => Some(ConstValue::UInt(x.min(y))),
        // A NaN operand is only discarded from the right: `min(NaN, y)` is NaN.
        (ConstValue::Float(x), ConstValue::Float(y)) => Some(ConstValue::Float(if y < x { y } else { x })),
        _ => None,
    }
}

#[inline]
fn eval_max(a: ConstValue, b: ConstValue) -> Option<ConstValue> {
    match (a, b) {
        (ConstValue::Int(x), ConstValue::Int(y)) => Some(ConstValue::Int(x.max(y))),
        (ConstValue::UInt(x), ConstValue::UInt(y)) => Some(ConstValue::UInt(x.max(y))),
        (ConstValue::Float(x), ConstValue::Float(y)) => Some(ConstValue::Float(if x < y { y } else { x })),
        _ => None,
    }
}

fn eval_compare(op: BinaryOp, a: ConstValue, b: ConstValue) -> Option<ConstValue> {
    use std::cmp::Ordering;

    let ordering = match (a, b) {
        (ConstValue::Int(x), ConstValue::Int(y)) => Some(x.cmp(&y)),
        (ConstValue::UInt(x), ConstValue::UInt(y)) => Some(x.cmp(&y)),
        // NaN compares unordered: every predicate but `!=` is false.
        (ConstValue::Float(x), ConstValue::Float(y)) => x.partial_cmp(&y),
        _ => return None,
    };

    let result = match (op, ordering) {
        (BinaryOp::Ne, None) => true,
        (_, None) => false,
        (BinaryOp::Lt, Some(ord)) => ord == Ordering::Less,
        (BinaryOp::Le, Some(ord)) => ord != Ordering::Greater,
        (BinaryOp::Gt, Some(ord)) => ord == Ordering::Greater,
        (BinaryOp::Ge, Some(ord)) => ord != Ordering::Less,
        (BinaryOp::Eq, Some(ord)) => ord == Ordering::Equal,
        (BinaryOp::Ne, Some(ord)) => ord != Ordering::Equal,
        _ => return None,
    };
    Some(ConstValue::Bool(result))
}
