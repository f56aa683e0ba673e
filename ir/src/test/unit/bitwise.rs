//! Shift and bitwise operator tests.

use std::sync::Arc;

use test_case::test_case;

use crate::error::Error;
use crate::expr::Expr;
use crate::ops::{bitwise_and, bitwise_not, bitwise_or, bitwise_xor, shl, shr};
use crate::test::literal;
use crate::types::{ConstValue, Intrinsic};
use crate::{DType, Op, Result};

type Bitwise = fn(&Arc<Expr>, &Arc<Expr>) -> Result<Arc<Expr>>;

#[test_case(shl, 1, 4, 16; "shl")]
#[test_case(shl, 1, 31, i32::MIN; "shl into sign bit")]
#[test_case(shr, -16, 2, -4; "shr is arithmetic")]
#[test_case(bitwise_and, 12, 10, 8; "and")]
#[test_case(bitwise_or, 12, 10, 14; "or")]
#[test_case(bitwise_xor, 12, 10, 6; "xor")]
fn test_index_literals_fold(op: Bitwise, a: i32, b: i32, expected: i32) {
    let result = op(&Expr::native_const(a), &Expr::native_const(b)).unwrap();
    assert_eq!(result.dtype(), DType::Int32);
    assert_eq!(literal(&result), ConstValue::Int(expected as i64));
}

#[test]
fn test_fold_takes_wider_index_type() {
    let result = bitwise_or(&Expr::native_const(1i32), &Expr::native_const(2i64)).unwrap();
    assert_eq!(result.dtype(), DType::Int64);
    assert_eq!(literal(&result), ConstValue::Int(3));
}

#[test]
fn test_non_index_literals_build_call() {
    let result = shl(&Expr::native_const(1i8), &Expr::native_const(2i8)).unwrap();
    assert_eq!(result.dtype(), DType::Int8);
    assert!(matches!(result.op(), Op::Call { intrinsic: Intrinsic::ShiftLeft, .. }));
}

#[test]
fn test_shift_by_zero() {
    let x = Expr::var("x", DType::Int64);
    let zero = Expr::native_const(0i64);
    assert!(Arc::ptr_eq(&shl(&x, &zero).unwrap(), &x));
    assert!(Arc::ptr_eq(&shr(&x, &zero).unwrap(), &x));
}

#[test]
fn test_symbolic_shift_builds_call() {
    let x = Expr::var("x", DType::UInt32);
    let y = Expr::var("y", DType::UInt32);
    let result = shr(&x, &y).unwrap();
    match result.op() {
        Op::Call { intrinsic: Intrinsic::ShiftRight, args } => assert_eq!(args.len(), 2),
        other => panic!("expected shift_right call, got {other:?}"),
    }
}

#[test]
fn test_bitwise_rejects_floats() {
    let x = Expr::var("x", DType::Float32);
    let y = Expr::var("y", DType::Float32);
    assert!(matches!(bitwise_and(&x, &y), Err(Error::UnsupportedOperand { .. })));
    assert!(matches!(shl(&x, &y), Err(Error::UnsupportedOperand { .. })));
}

#[test]
fn test_bitwise_accepts_bool_but_shift_does_not() {
    let a = Expr::var("a", DType::Bool);
    let b = Expr::var("b", DType::Bool);
    assert!(matches!(bitwise_xor(&a, &b).unwrap().op(), Op::Call { intrinsic: Intrinsic::BitwiseXor, .. }));
    assert!(matches!(shl(&a, &b), Err(Error::UnsupportedOperand { .. })));
}

#[test]
fn test_bitwise_not() {
    assert_eq!(literal(&bitwise_not(&Expr::native_const(0i32)).unwrap()), ConstValue::Int(-1));

    let byte = Expr::var("b", DType::UInt8);
    let result = bitwise_not(&byte).unwrap();
    assert_eq!(result.dtype(), DType::UInt8);
    assert!(matches!(result.op(), Op::Call { intrinsic: Intrinsic::BitwiseNot, .. }));

    let non_index = bitwise_not(&Expr::native_const(0u8)).unwrap();
    assert!(non_index.as_const().is_none());
}

#[test_case(DType::Float32; "float")]
#[test_case(DType::Bool; "bool")]
fn test_bitwise_not_requires_integer(dtype: DType) {
    let x = Expr::var("x", dtype);
    assert!(matches!(bitwise_not(&x), Err(Error::UnsupportedOperand { .. })));
}
