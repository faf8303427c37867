//! Error type for the checked arithmetic functors.

/// Represents a failed checked arithmetic operation.
///
/// # Examples
///
/// ```rust
/// use fnadapt::function::BinaryFunction;
/// use fnadapt::operators::{checked_divides, ArithmeticError};
///
/// let error = checked_divides::<i32>().apply(1, 0).unwrap_err();
/// assert_eq!(error, ArithmeticError::DivisionByZero { operation: "divides" });
/// assert_eq!(format!("{error}"), "divides: division by zero");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticError {
    /// The result does not fit in the element type.
    Overflow {
        /// The name of the operation that overflowed.
        operation: &'static str,
    },
    /// The divisor of a division or remainder was zero.
    DivisionByZero {
        /// The name of the operation that was attempted.
        operation: &'static str,
    },
}

impl ArithmeticError {
    /// Returns the name of the operation that failed.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::Overflow { operation } | Self::DivisionByZero { operation } => *operation,
        }
    }
}

impl std::fmt::Display for ArithmeticError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overflow { operation } => write!(formatter, "{operation}: arithmetic overflow"),
            Self::DivisionByZero { operation } => {
                write!(formatter, "{operation}: division by zero")
            }
        }
    }
}

impl std::error::Error for ArithmeticError {}
