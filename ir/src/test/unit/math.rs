//! Elementwise math tests.

use std::sync::Arc;

use test_case::test_case;

use crate::error::Error;
use crate::expr::Expr;
use crate::ops::{abs, ceil, floor, fmod, pow, round, trunc};
use crate::test::literal;
use crate::types::{BinaryOp, ConstValue, Intrinsic};
use crate::{DType, Op, Result};

#[test]
fn test_pow_builds_call() {
    let x = Expr::var("x", DType::Float32);
    let y = Expr::var("y", DType::Float32);
    let result = pow(&x, &y).unwrap();
    match result.op() {
        Op::Call { intrinsic, args } => {
            assert_eq!(intrinsic.name(), "pow");
            assert!(Arc::ptr_eq(&args[0], &x));
            assert!(Arc::ptr_eq(&args[1], &y));
        }
        other => panic!("expected pow call, got {other:?}"),
    }
}

#[test]
fn test_pow_promotes_then_requires_float() {
    let result = pow(&Expr::native_const(2i32), &Expr::var("y", DType::Float32)).unwrap();
    assert_eq!(result.dtype(), DType::Float32);

    let a = Expr::var("a", DType::Int32);
    let err = pow(&a, &a).unwrap_err();
    assert_eq!(err, Error::UnsupportedOperand { operation: "pow", dtype: DType::Int32 });
}

#[test]
fn test_pow_literals_are_not_folded() {
    let result = pow(&Expr::native_const(2.0f64), &Expr::native_const(3.0f64)).unwrap();
    assert!(result.as_const().is_none());
}

#[test]
fn test_fmod() {
    let x = Expr::var("x", DType::Float64);
    let result = fmod(&x, &Expr::native_const(2.0f64)).unwrap();
    assert!(matches!(result.op(), Op::Call { intrinsic: Intrinsic::Fmod, .. }));

    let i = Expr::var("i", DType::Int32);
    assert!(matches!(fmod(&i, &i), Err(Error::UnsupportedOperand { .. })));
}

// =========================================================================
// abs
// =========================================================================

#[test]
fn test_abs_int_literal() {
    assert_eq!(literal(&abs(&Expr::native_const(-5i32)).unwrap()), ConstValue::Int(5));
    assert_eq!(literal(&abs(&Expr::native_const(5i32)).unwrap()), ConstValue::Int(5));
}

#[test]
fn test_abs_int_symbolic_lowers_to_select() {
    let x = Expr::var("x", DType::Int32);
    let result = abs(&x).unwrap();
    assert_eq!(result.dtype(), DType::Int32);

    let Op::Select { condition, true_val, false_val } = result.op() else {
        panic!("expected select, got {}", result.tree());
    };
    assert!(matches!(condition.op(), Op::Binary(BinaryOp::Ge, lhs, zero)
        if Arc::ptr_eq(lhs, &x) && literal(zero) == ConstValue::Int(0)));
    assert!(Arc::ptr_eq(true_val, &x));
    assert!(matches!(false_val.op(), Op::Binary(BinaryOp::Sub, _, operand) if Arc::ptr_eq(operand, &x)));
}

#[test]
fn test_abs_float() {
    assert_eq!(literal(&abs(&Expr::native_const(-2.5f32)).unwrap()), ConstValue::Float(2.5));

    let x = Expr::var("x", DType::Float32);
    let result = abs(&x).unwrap();
    assert!(matches!(result.op(), Op::Call { intrinsic: Intrinsic::Fabs, .. }));
    assert_eq!(Intrinsic::Fabs.name(), "fabs");
}

#[test]
fn test_abs_unsigned_is_identity() {
    let x = Expr::var("x", DType::UInt16);
    assert!(Arc::ptr_eq(&abs(&x).unwrap(), &x));
}

#[test]
fn test_abs_bool_is_unsupported() {
    let b = Expr::var("b", DType::Bool);
    assert_eq!(abs(&b).unwrap_err(), Error::UnsupportedOperand { operation: "abs", dtype: DType::Bool });
}

#[test]
fn test_abs_vector_select() {
    let v = Expr::var("v", DType::Int32.with_lanes(4));
    let result = abs(&v).unwrap();
    let Op::Select { condition, .. } = result.op() else { panic!("expected select") };
    assert_eq!(condition.dtype(), DType::Bool.with_lanes(4));
}

// =========================================================================
// Rounding
// =========================================================================

type Unary = fn(&Arc<Expr>) -> Result<Arc<Expr>>;

#[test_case(floor, 2.7, 2.0; "floor")]
#[test_case(floor, -2.1, -3.0; "floor negative")]
#[test_case(ceil, 2.1, 3.0; "ceil")]
#[test_case(round, 2.5, 2.0; "round half to even down")]
#[test_case(round, 3.5, 4.0; "round half to even up")]
#[test_case(round, -2.5, -2.0; "round negative half")]
#[test_case(round, 2.6, 3.0; "round nearest")]
#[test_case(trunc, -2.7, -2.0; "trunc")]
fn test_rounding_literal(op: Unary, value: f64, expected: f64) {
    let result = op(&Expr::native_const(value)).unwrap();
    assert_eq!(literal(&result), ConstValue::Float(expected));
}

#[test_case(floor, "floor"; "floor")]
#[test_case(ceil, "ceil"; "ceil")]
#[test_case(round, "round"; "round")]
#[test_case(trunc, "trunc"; "trunc")]
fn test_rounding_symbolic(op: Unary, name: &str) {
    let x = Expr::var("x", DType::Float32);
    let result = op(&x).unwrap();
    assert_eq!(result.dtype(), DType::Float32);
    match result.op() {
        Op::Call { intrinsic, .. } => assert_eq!(intrinsic.name(), name),
        other => panic!("expected call, got {other:?}"),
    }
}
