//! Type descriptors for the Tessera IR.
//!
//! A [`DType`] is a plain `{kind, bits, lanes}` triple. Scalars have one lane,
//! vectors have more. Types are small `Copy` values and compare structurally:
//! two types are equal only when all three fields match.

use std::fmt;

pub mod cast;
pub mod ext;


/// Numeric kind of a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(strum::EnumCount, strum::EnumIter, strum::IntoStaticStr)]
#[cfg_attr(feature = "proptest", derive(proptest_derive::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum TypeKind {
    /// Two's complement signed integer.
    Int,
    /// Unsigned integer.
    UInt,
    /// IEEE 754 binary floating point.
    Float,
    /// Boolean (one bit).
    Bool,
}

/// Data type of an expression: kind, bit width of one lane and lane count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DType {
    kind: TypeKind,
    bits: u8,
    lanes: u16,
}

impl DType {
    // =========================================================================
    // Type Constructors
    // =========================================================================

    /// Create a type from its raw parts.
    ///
    /// # Panics
    ///
    /// Panics if `bits` or `lanes` is zero, or if `bits` exceeds 64.
    pub const fn new(kind: TypeKind, bits: u8, lanes: u16) -> Self {
        assert!(bits > 0 && bits <= 64, "bit width must be in 1..=64");
        assert!(lanes > 0, "lane count must be at least 1");
        Self { kind, bits, lanes }
    }

    pub const fn int(bits: u8) -> Self {
        Self::new(TypeKind::Int, bits, 1)
    }

    pub const fn uint(bits: u8) -> Self {
        Self::new(TypeKind::UInt, bits, 1)
    }

    pub const fn float(bits: u8) -> Self {
        Self::new(TypeKind::Float, bits, 1)
    }

    pub const fn bool_() -> Self {
        Self::new(TypeKind::Bool, 1, 1)
    }

    /// Same kind and width with a different lane count.
    pub const fn with_lanes(self, lanes: u16) -> Self {
        Self::new(self.kind, self.bits, lanes)
    }

    /// Same kind and lane count with a different bit width.
    pub const fn with_bits(self, bits: u8) -> Self {
        Self::new(self.kind, bits, self.lanes)
    }

    /// The scalar type of a single lane.
    pub const fn element_of(self) -> Self {
        self.with_lanes(1)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub const fn kind(&self) -> TypeKind {
        self.kind
    }

    pub const fn bits(&self) -> u8 {
        self.bits
    }

    pub const fn lanes(&self) -> u16 {
        self.lanes
    }

    /// Storage size in bytes, rounding each lane up to whole bytes.
    pub const fn bytes(&self) -> usize {
        self.bits.div_ceil(8) as usize * self.lanes as usize
    }

    // =========================================================================
    // Type Properties
    // =========================================================================

    pub const fn is_int(&self) -> bool {
        matches!(self.kind, TypeKind::Int)
    }

    pub const fn is_uint(&self) -> bool {
        matches!(self.kind, TypeKind::UInt)
    }

    pub const fn is_float(&self) -> bool {
        matches!(self.kind, TypeKind::Float)
    }

    pub const fn is_bool(&self) -> bool {
        matches!(self.kind, TypeKind::Bool)
    }

    /// Signed or unsigned integer.
    pub const fn is_integral(&self) -> bool {
        self.is_int() || self.is_uint()
    }

    pub const fn is_scalar(&self) -> bool {
        self.lanes == 1
    }

    pub const fn is_vector(&self) -> bool {
        self.lanes > 1
    }

    /// Scalar signed integer of 32 or 64 bits.
    ///
    /// Index types carry shape and loop-bound arithmetic and are folded
    /// aggressively, including bitwise, shift and modulo operators.
    pub const fn is_index(&self) -> bool {
        self.is_int() && self.lanes == 1 && (self.bits == 32 || self.bits == 64)
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TypeKind::Bool => f.write_str("bool")?,
            kind => write!(f, "{}{}", <&'static str>::from(kind), self.bits)?,
        }
        if self.lanes > 1 {
            write!(f, "x{}", self.lanes)?;
        }
        Ok(())
    }
}

// Named scalar types.
#[allow(non_upper_case_globals)]
impl DType {
    pub const Bool: Self = Self::bool_();
    pub const Int8: Self = Self::int(8);
    pub const Int16: Self = Self::int(16);
    pub const Int32: Self = Self::int(32);
    pub const Int64: Self = Self::int(64);
    pub const UInt8: Self = Self::uint(8);
    pub const UInt16: Self = Self::uint(16);
    pub const UInt32: Self = Self::uint(32);
    pub const UInt64: Self = Self::uint(64);
    pub const Float16: Self = Self::float(16);
    pub const Float32: Self = Self::float(32);
    pub const Float64: Self = Self::float(64);
}
