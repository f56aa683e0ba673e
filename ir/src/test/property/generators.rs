use std::sync::Arc;

use proptest::prelude::*;
use tessera_dtype::test::proptests::generators::numeric_generator;

use crate::expr::Expr;
use crate::DType;

/// Fresh variable of any numeric scalar type.
pub fn numeric_var() -> impl Strategy<Value = Arc<Expr>> {
    numeric_generator().prop_map(|dtype| Expr::var("x", dtype))
}

/// Fresh variable of a numeric scalar or vector type.
pub fn numeric_vector_var() -> impl Strategy<Value = Arc<Expr>> {
    (numeric_generator(), prop_oneof![Just(1u16), Just(4), Just(8)])
        .prop_map(|(dtype, lanes)| Expr::var("v", dtype.with_lanes(lanes)))
}

/// `int32` literal together with its native value.
pub fn int32_literal() -> impl Strategy<Value = (i32, Arc<Expr>)> {
    any::<i32>().prop_map(|v| (v, Expr::const_(DType::Int32, v)))
}
