//! Type definitions for IR operations.
//!
//! Constant values, operator kinds and the fixed intrinsic identifiers used by
//! call nodes.

use std::hash::{Hash, Hasher};
use std::mem::discriminant;

use tessera_dtype::{DType, TypeKind};

/// Constant value stored in a literal node.
///
/// The variant always agrees with the kind of the literal's type, and integer
/// payloads are kept wrapped to the type's bit width (sign-extended for signed
/// kinds), so folding can work on the 64-bit payload directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConstValue {
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
}

#[inline]
fn wrap_int(v: i64, bits: u8) -> i64 {
    if bits >= 64 {
        return v;
    }
    let shift = 64 - u32::from(bits);
    (v << shift) >> shift
}

#[inline]
fn wrap_uint(v: u64, bits: u8) -> u64 {
    if bits >= 64 { v } else { v & ((1u64 << bits) - 1) }
}

#[inline]
fn round_float(v: f64, bits: u8) -> f64 {
    // Only single precision has a native Rust representation narrower than f64.
    if bits == 32 { v as f32 as f64 } else { v }
}

impl ConstValue {
    /// Convert this value to the element type of `dtype`.
    ///
    /// Follows native `as` semantics: integers truncate to the target width
    /// and sign- or zero-extend back into the payload, floats truncate toward
    /// zero when converted to integers, and a negative float converted to
    /// unsigned goes through `i64` so it wraps like it does in C.
    pub fn cast(self, dtype: &DType) -> Self {
        let bits = dtype.bits();
        match dtype.kind() {
            TypeKind::Bool => Self::Bool(match self {
                Self::Int(v) => v != 0,
                Self::UInt(v) => v != 0,
                Self::Float(v) => v != 0.0,
                Self::Bool(v) => v,
            }),
            TypeKind::Int => Self::Int(wrap_int(
                match self {
                    Self::Int(v) => v,
                    Self::UInt(v) => v as i64,
                    Self::Float(v) => v as i64,
                    Self::Bool(v) => v as i64,
                },
                bits,
            )),
            TypeKind::UInt => Self::UInt(wrap_uint(
                match self {
                    Self::Int(v) => v as u64,
                    Self::UInt(v) => v,
                    Self::Float(v) if v < 0.0 => (v as i64) as u64,
                    Self::Float(v) => v as u64,
                    Self::Bool(v) => v as u64,
                },
                bits,
            )),
            TypeKind::Float => Self::Float(round_float(
                match self {
                    Self::Int(v) => v as f64,
                    Self::UInt(v) => v as f64,
                    Self::Float(v) => v,
                    Self::Bool(v) => v as u8 as f64,
                },
                bits,
            )),
        }
    }

    pub fn zero(dtype: &DType) -> Self {
        Self::Int(0).cast(dtype)
    }

    pub fn one(dtype: &DType) -> Self {
        Self::Int(1).cast(dtype)
    }

    /// Smallest value representable by the element type of `dtype`.
    pub fn min_of(dtype: &DType) -> Self {
        let bits = u32::from(dtype.bits());
        match dtype.kind() {
            TypeKind::Int => Self::Int(if bits >= 64 { i64::MIN } else { -(1i64 << (bits - 1)) }),
            TypeKind::UInt => Self::UInt(0),
            TypeKind::Float => Self::Float(-float_max(bits)),
            TypeKind::Bool => Self::Bool(false),
        }
    }

    /// Largest value representable by the element type of `dtype`.
    pub fn max_of(dtype: &DType) -> Self {
        let bits = u32::from(dtype.bits());
        match dtype.kind() {
            TypeKind::Int => Self::Int(if bits >= 64 { i64::MAX } else { (1i64 << (bits - 1)) - 1 }),
            TypeKind::UInt => Self::UInt(if bits >= 64 { u64::MAX } else { (1u64 << bits) - 1 }),
            TypeKind::Float => Self::Float(float_max(bits)),
            TypeKind::Bool => Self::Bool(true),
        }
    }

    /// Numeric zero. Booleans are never considered zero.
    pub fn is_zero(&self) -> bool {
        match *self {
            Self::Int(v) => v == 0,
            Self::UInt(v) => v == 0,
            Self::Float(v) => v == 0.0,
            Self::Bool(_) => false,
        }
    }

    /// Numeric one. Booleans are never considered one.
    pub fn is_one(&self) -> bool {
        match *self {
            Self::Int(v) => v == 1,
            Self::UInt(v) => v == 1,
            Self::Float(v) => v == 1.0,
            Self::Bool(_) => false,
        }
    }
}

fn float_max(bits: u32) -> f64 {
    match bits {
        16 => 65504.0,
        32 => f32::MAX as f64,
        _ => f64::MAX,
    }
}

macro_rules! impl_from_native {
    ($($ty:ty => $variant:ident as $storage:ty),* $(,)?) => {
        $(impl From<$ty> for ConstValue {
            fn from(v: $ty) -> Self {
                Self::$variant(v as $storage)
            }
        })*
    };
}

impl_from_native! {
    i8 => Int as i64, i16 => Int as i64, i32 => Int as i64, i64 => Int as i64,
    u8 => UInt as u64, u16 => UInt as u64, u32 => UInt as u64, u64 => UInt as u64,
    f32 => Float as f64, f64 => Float as f64,
}

impl From<bool> for ConstValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

/// Wrapper for ConstValue that implements Eq and Hash.
///
/// Floats compare by bit pattern, so identical NaNs are equal and `0.0` and
/// `-0.0` are distinct literals.
#[derive(Debug, Clone, Copy)]
pub struct ConstValueHash(pub ConstValue);

impl PartialEq for ConstValueHash {
    fn eq(&self, other: &Self) -> bool {
        match (self.0, other.0) {
            (ConstValue::Int(a), ConstValue::Int(b)) => a == b,
            (ConstValue::UInt(a), ConstValue::UInt(b)) => a == b,
            (ConstValue::Float(a), ConstValue::Float(b)) => a.to_bits() == b.to_bits(),
            (ConstValue::Bool(a), ConstValue::Bool(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for ConstValueHash {}

impl Hash for ConstValueHash {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (discriminant(&self.0)).hash(state);
        match self.0 {
            ConstValue::Int(v) => v.hash(state),
            ConstValue::UInt(v) => v.hash(state),
            ConstValue::Float(v) => v.to_bits().hash(state),
            ConstValue::Bool(v) => v.hash(state),
        }
    }
}

/// Operators with a dedicated node kind.
///
/// Arithmetic operators keep the operand type. Comparisons produce bool with
/// the operand lane count. Shifts and bitwise operators are not here: they are
/// built as [`Intrinsic`] calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    /// Division. Rounding of negative integer operands is left to the backend.
    Div,
    /// Remainder. Sign of a negative result is left to the backend.
    Mod,
    Min,
    Max,

    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,

    /// Logical and over bool operands.
    And,
    /// Logical or over bool operands.
    Or,
}

impl BinaryOp {
    pub fn is_comparison(self) -> bool {
        matches!(self, Self::Lt | Self::Le | Self::Gt | Self::Ge | Self::Eq | Self::Ne)
    }

    pub fn is_logical(self) -> bool {
        matches!(self, Self::And | Self::Or)
    }

    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// Named operations without a native node kind.
///
/// [`Intrinsic::name`] is the fixed identifier backends dispatch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::IntoStaticStr, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Intrinsic {
    Pow,
    Fmod,
    Floor,
    Ceil,
    Round,
    Trunc,
    Fabs,
    IfThenElse,
    Likely,
    ShiftLeft,
    ShiftRight,
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    BitwiseNot,
    Reinterpret,
}

impl Intrinsic {
    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// The standard commutative reductions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum ReduceOp {
    Sum,
    Min,
    Max,
    Prod,
}
