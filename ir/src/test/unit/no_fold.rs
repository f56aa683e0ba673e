//! Behaviour with constant folding switched off.

use std::sync::Arc;

use crate::config::FoldConfig;
use crate::error::Error;
use crate::expr::Expr;
use crate::ops::{abs, add, cast, div, logical_and, logical_not, modulo, mul, neg, shl};
use crate::types::{BinaryOp, Intrinsic};
use crate::{DType, Op};

fn without_folding<R>(f: impl FnOnce() -> R) -> R {
    FoldConfig::builder().fold_constants(false).build().scope(f)
}

#[test]
fn test_literals_build_nodes() {
    without_folding(|| {
        let sum = add(&Expr::native_const(2i32), &Expr::native_const(3i32)).unwrap();
        assert!(matches!(sum.op(), Op::Binary(BinaryOp::Add, ..)));

        let shifted = shl(&Expr::native_const(1i32), &Expr::native_const(2i32)).unwrap();
        assert!(matches!(shifted.op(), Op::Call { intrinsic: Intrinsic::ShiftLeft, .. }));

        let rem = modulo(&Expr::native_const(7i32), &Expr::native_const(3i32)).unwrap();
        assert!(matches!(rem.op(), Op::Binary(BinaryOp::Mod, ..)));
    });
}

#[test]
fn test_identities_are_kept() {
    without_folding(|| {
        let x = Expr::var("x", DType::Int32);
        let product = mul(&x, &Expr::native_const(1i32)).unwrap();
        assert!(!Arc::ptr_eq(&product, &x));

        let b = Expr::var("b", DType::Bool);
        let conj = logical_and(&Expr::native_const(true), &b).unwrap();
        assert!(matches!(conj.op(), Op::Binary(BinaryOp::And, ..)));
    });
}

#[test]
fn test_unary_literals_build_nodes() {
    without_folding(|| {
        assert!(matches!(logical_not(&Expr::native_const(true)).unwrap().op(), Op::Not(_)));
        assert!(matches!(neg(&Expr::native_const(4i32)).unwrap().op(), Op::Binary(BinaryOp::Sub, ..)));
        assert!(matches!(abs(&Expr::native_const(-4.0f32)).unwrap().op(), Op::Call { intrinsic: Intrinsic::Fabs, .. }));
        assert!(matches!(cast(DType::Float32, &Expr::native_const(4i32)).unwrap().op(), Op::Cast { .. }));
    });
}

#[test]
fn test_divide_by_zero_still_detected() {
    without_folding(|| {
        let x = Expr::var("x", DType::Int32);
        assert!(matches!(div(&x, &Expr::native_const(0i32)), Err(Error::DivideByZero { .. })));
        assert!(matches!(modulo(&x, &Expr::native_const(0i32)), Err(Error::DivideByZero { .. })));
    });
}

#[test]
fn test_scope_ends_with_closure() {
    without_folding(|| {});
    let sum = add(&Expr::native_const(2i32), &Expr::native_const(3i32)).unwrap();
    assert!(sum.is_const());
}
