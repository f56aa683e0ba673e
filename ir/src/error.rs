use snafu::Snafu;
use tessera_dtype::DType;

use crate::types::BinaryOp;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// Operand types have no common type under the promotion rules.
    #[snafu(display("cannot match types {lhs} and {rhs}"))]
    TypeMismatch { lhs: DType, rhs: DType },

    /// Vector cast between types with different lane counts.
    #[snafu(display("cannot cast {from} to {to}: lane counts differ"))]
    LaneMismatch { from: DType, to: DType },

    /// Literal zero divisor found while folding.
    #[snafu(display("divide by zero in {op:?}"))]
    DivideByZero { op: BinaryOp },

    /// Operator applied to a kind it is not defined for.
    #[snafu(display("{operation} does not support operands of type {dtype}"))]
    UnsupportedOperand { operation: &'static str, dtype: DType },

    // =========================================================================
    // Node factory guards
    // =========================================================================
    /// Children of a node disagree on their type.
    #[snafu(display("{op} requires children of one type, got {lhs} and {rhs}"))]
    ChildTypeMismatch { op: &'static str, lhs: DType, rhs: DType },

    /// Select/if-then-else condition is not boolean or has the wrong lane count.
    #[snafu(display("condition must be bool with matching lanes, got {actual} for {value}"))]
    ConditionNotBool { actual: DType, value: DType },

    /// Broadcast of a value that is already a vector.
    #[snafu(display("broadcast requires a scalar source, got {dtype}"))]
    BroadcastRequiresScalar { dtype: DType },

    /// Broadcast to a lane count of zero.
    #[snafu(display("cannot broadcast {dtype} to zero lanes"))]
    ZeroLanes { dtype: DType },

    /// Reducer formals disagree with the reduced expression.
    #[snafu(display("reducer of type {reducer} cannot reduce values of type {value}"))]
    ReducerTypeMismatch { reducer: DType, value: DType },

    #[snafu(display("value index {value_index} out of range for {count} reduced values"))]
    ValueIndexOutOfRange { value_index: usize, count: usize },
}

/// Coarse classification of [`Error`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ErrorCategory {
    #[display("type mismatch")]
    TypeMismatch,
    #[display("divide by zero")]
    DivideByZero,
    #[display("unsupported operand")]
    UnsupportedOperand,
    #[display("invariant violation")]
    InvariantViolation,
}

impl Error {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TypeMismatch { .. } | Self::LaneMismatch { .. } => ErrorCategory::TypeMismatch,
            Self::DivideByZero { .. } => ErrorCategory::DivideByZero,
            Self::UnsupportedOperand { .. } => ErrorCategory::UnsupportedOperand,
            Self::ChildTypeMismatch { .. }
            | Self::ConditionNotBool { .. }
            | Self::BroadcastRequiresScalar { .. }
            | Self::ZeroLanes { .. }
            | Self::ReducerTypeMismatch { .. }
            | Self::ValueIndexOutOfRange { .. } => ErrorCategory::InvariantViolation,
        }
    }
}

/// Top-level sink for construction errors of one compilation unit.
///
/// Errors are logged when recorded and kept in order. A failed construction
/// never produces a node: [`Diagnostics::check`] returns `None` for it, and the
/// unit is rejected by [`Diagnostics::into_result`].
#[derive(Debug, Default)]
pub struct Diagnostics {
    errors: Vec<Error>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unwrap a construction result, recording the error if there is one.
    pub fn check<T>(&mut self, result: Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.report(error);
                None
            }
        }
    }

    pub fn report(&mut self, error: Error) {
        tracing::error!(category = %error.category(), error = %error, "expression construction failed");
        self.errors.push(error);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Fail with the first recorded error, if any.
    pub fn into_result(self) -> Result<()> {
        match self.errors.into_iter().next() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}
