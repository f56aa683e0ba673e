//! ConstValue conversion and bound tests.

use test_case::test_case;

use crate::DType;
use crate::types::ConstValue;

#[test_case(ConstValue::Int(300), DType::Int8, ConstValue::Int(44); "int8 truncation")]
#[test_case(ConstValue::Int(-129), DType::Int8, ConstValue::Int(127); "int8 wraps negative")]
#[test_case(ConstValue::Int(-1), DType::UInt32, ConstValue::UInt(u32::MAX as u64); "negative to uint32")]
#[test_case(ConstValue::UInt(u64::MAX), DType::Int64, ConstValue::Int(-1); "uint64 max to int64")]
#[test_case(ConstValue::UInt(200), DType::Int8, ConstValue::Int(-56); "uint to int8")]
#[test_case(ConstValue::Float(-1.5), DType::UInt8, ConstValue::UInt(255); "negative float to uint8")]
#[test_case(ConstValue::Float(1.0e19), DType::UInt64, ConstValue::UInt(10_000_000_000_000_000_000); "large float to uint64")]
#[test_case(ConstValue::Float(0.1), DType::Float32, ConstValue::Float(0.1f32 as f64); "float32 rounding")]
#[test_case(ConstValue::Float(0.0), DType::Bool, ConstValue::Bool(false); "zero to bool")]
#[test_case(ConstValue::Bool(true), DType::Int32, ConstValue::Int(1); "bool to int")]
fn test_cast(value: ConstValue, dtype: DType, expected: ConstValue) {
    assert_eq!(value.cast(&dtype), expected);
}

#[test_case(DType::Int8, ConstValue::Int(-128), ConstValue::Int(127); "int8")]
#[test_case(DType::Int64, ConstValue::Int(i64::MIN), ConstValue::Int(i64::MAX); "int64")]
#[test_case(DType::UInt16, ConstValue::UInt(0), ConstValue::UInt(65535); "uint16")]
#[test_case(DType::UInt64, ConstValue::UInt(0), ConstValue::UInt(u64::MAX); "uint64")]
#[test_case(DType::Float32, ConstValue::Float(-(f32::MAX as f64)), ConstValue::Float(f32::MAX as f64); "float32")]
#[test_case(DType::Bool, ConstValue::Bool(false), ConstValue::Bool(true); "bool")]
fn test_type_bounds(dtype: DType, min: ConstValue, max: ConstValue) {
    assert_eq!(ConstValue::min_of(&dtype), min);
    assert_eq!(ConstValue::max_of(&dtype), max);
}

#[test]
fn test_zero_and_one() {
    assert!(ConstValue::zero(&DType::Float64).is_zero());
    assert!(ConstValue::one(&DType::UInt8).is_one());
    assert!(ConstValue::Float(-0.0).is_zero());
    assert!(!ConstValue::Bool(false).is_zero());
    assert!(!ConstValue::Bool(true).is_one());
}
