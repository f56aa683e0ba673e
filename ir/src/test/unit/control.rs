//! if-then-else, likely and literal helper tests.

use std::sync::Arc;

use test_case::test_case;

use crate::error::Error;
use crate::expr::Expr;
use crate::ops::{if_then_else, is_const_power_of_two_integer, likely, make_const, make_zero};
use crate::test::literal;
use crate::types::{ConstValue, Intrinsic};
use crate::{DType, Op};

#[test]
fn test_if_then_else_literal_condition() {
    let a = Expr::var("a", DType::Int32);
    let b = Expr::var("b", DType::Int32);
    assert!(Arc::ptr_eq(&if_then_else(&Expr::native_const(true), &a, &b).unwrap(), &a));
    assert!(Arc::ptr_eq(&if_then_else(&Expr::native_const(false), &a, &b).unwrap(), &b));
}

#[test]
fn test_if_then_else_symbolic_condition() {
    let cond = Expr::var("c", DType::Bool);
    let result = if_then_else(&cond, &Expr::native_const(1i32), &Expr::var("x", DType::Float32)).unwrap();
    assert_eq!(result.dtype(), DType::Float32);
    match result.op() {
        Op::Call { intrinsic: Intrinsic::IfThenElse, args } => {
            assert!(Arc::ptr_eq(&args[0], &cond));
            assert_eq!(literal(&args[1]), ConstValue::Float(1.0));
        }
        other => panic!("expected if_then_else call, got {other:?}"),
    }
}

#[test_case(DType::Int32; "int condition")]
#[test_case(DType::Bool.with_lanes(4); "vector condition")]
fn test_if_then_else_rejects_condition(dtype: DType) {
    let cond = Expr::var("c", dtype);
    let x = Expr::var("x", DType::Int32);
    assert!(matches!(if_then_else(&cond, &x, &x), Err(Error::ConditionNotBool { .. })));
}

#[test]
fn test_likely() {
    let t = Expr::native_const(true);
    assert!(Arc::ptr_eq(&likely(&t), &t));

    let cond = Expr::var("c", DType::Bool);
    let result = likely(&cond);
    assert_eq!(result.dtype(), DType::Bool);
    assert!(matches!(result.op(), Op::Call { intrinsic: Intrinsic::Likely, .. }));
}

#[test_case(Expr::native_const(8i32), Some(3); "eight")]
#[test_case(Expr::native_const(1i64), Some(0); "one")]
#[test_case(Expr::native_const(1024u32), Some(10); "unsigned")]
#[test_case(Expr::native_const(6i32), None; "not a power")]
#[test_case(Expr::native_const(0i32), None; "zero")]
#[test_case(Expr::native_const(-8i32), None; "negative")]
#[test_case(Expr::native_const(8.0f32), None; "float")]
#[test_case(Expr::var("x", DType::Int32), None; "symbolic")]
fn test_is_const_power_of_two_integer(value: Arc<Expr>, expected: Option<u32>) {
    assert_eq!(is_const_power_of_two_integer(&value), expected);
}

#[test]
fn test_make_const_scalar() {
    assert_eq!(literal(&make_const(DType::Int8, 300)), ConstValue::Int(44));
    assert_eq!(literal(&make_const(DType::Float32, 1)), ConstValue::Float(1.0));
    assert_eq!(literal(&make_zero(DType::UInt16)), ConstValue::UInt(0));
}

#[test]
fn test_make_const_vector_broadcasts() {
    let dtype = DType::Float32.with_lanes(4);
    let result = make_const(dtype, 1.5);
    assert_eq!(result.dtype(), dtype);
    match result.op() {
        Op::Broadcast { src, lanes: 4 } => assert_eq!(literal(src), ConstValue::Float(1.5)),
        other => panic!("expected broadcast, got {other:?}"),
    }
    assert!(make_zero(dtype).as_const().is_none());
}
