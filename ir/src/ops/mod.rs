//! Expression operators.
//!
//! Every binary operator first reconciles its operand types
//! ([`match_types`]), then tries the constant folder, and only then builds a
//! node. Shift, bitwise and modulo operators try an index-only fold on the raw
//! operands before promotion.
//!
//! - `promote`: type reconciliation, casts and reinterpretation
//! - `arithmetic`: add, sub, neg, mul, div, modulo, min, max
//! - `comparison`: relational operators and logical connectives
//! - `bitwise`: shifts and bitwise intrinsics
//! - `math`: pow, abs, fmod and rounding
//! - `control`: if-then-else, likely and literal helpers
//! - `reduction`: sum, min, max and prod reductions

mod fold;

pub mod arithmetic;
pub mod bitwise;
pub mod comparison;
pub mod control;
pub mod math;
pub mod promote;
pub mod reduction;

pub use arithmetic::{add, div, max, min, modulo, mul, neg, sub};
pub use bitwise::{bitwise_and, bitwise_not, bitwise_or, bitwise_xor, shl, shr};
pub use comparison::{eq, ge, gt, le, logical_and, logical_not, logical_or, lt, ne};
pub use control::{if_then_else, is_const_power_of_two_integer, likely, make_const, make_zero};
pub use math::{abs, ceil, floor, fmod, pow, round, trunc};
pub use promote::{cast, match_types, reinterpret};
pub use reduction::{max_reduce, min_reduce, prod, sum};
