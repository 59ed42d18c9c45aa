//! The two dividers: one raises, one recovers.

use std::fmt;

use thiserror::Error;
use tracing::warn;

use crate::catalogue::{Categorized, ErrorCategory};

/// Fallback returned by [`divide_or_fallback`] on a zero denominator.
pub const FALLBACK: &str = "try除数不能为0";

/// Raised by the validating divider.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DivideError {
    #[error("除数不能为0")]
    ZeroDenominator,
}

impl Categorized for DivideError {
    fn category(&self) -> ErrorCategory {
        match self {
            DivideError::ZeroDenominator => ErrorCategory::Value,
        }
    }
}

/// Raised by the division primitive itself.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArithmeticError {
    #[error("division by zero")]
    ZeroDivision,
}

impl Categorized for ArithmeticError {
    fn category(&self) -> ErrorCategory {
        match self {
            ArithmeticError::ZeroDivision => ErrorCategory::ZeroDivision,
        }
    }
}

/// True division that refuses a zero denominator instead of yielding
/// infinity or NaN.
pub fn true_divide(a: f64, b: f64) -> Result<f64, ArithmeticError> {
    if b == 0.0 {
        return Err(ArithmeticError::ZeroDivision);
    }
    Ok(a / b)
}

/// Validates the denominator before dividing.
///
/// A zero denominator is the caller's bad argument, so it is reported as
/// [`DivideError::ZeroDenominator`] and left for the caller to handle or
/// propagate with `?`.
pub fn divide_checked(a: f64, b: f64) -> Result<f64, DivideError> {
    if b == 0.0 {
        return Err(DivideError::ZeroDenominator);
    }
    Ok(a / b)
}

/// Result of [`divide_or_fallback`].
#[derive(Debug, Clone, PartialEq)]
pub enum Quotient {
    Value(f64),
    Fallback(&'static str),
}

impl Quotient {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Quotient::Fallback(_))
    }
}

impl fmt::Display for Quotient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Always keep a fractional part, `2.0` rather than `2`.
            Quotient::Value(v) => write!(f, "{:?}", v),
            Quotient::Fallback(s) => f.write_str(s),
        }
    }
}

/// Divides, recovering from division by zero with [`FALLBACK`].
pub fn divide_or_fallback(a: f64, b: f64) -> Quotient {
    match true_divide(a, b) {
        Ok(v) => Quotient::Value(v),
        Err(ArithmeticError::ZeroDivision) => {
            warn!(numerator = a, "division by zero, using fallback");
            Quotient::Fallback(FALLBACK)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divide_checked_nonzero() {
        assert_eq!(divide_checked(1.0, 2.0), Ok(0.5));
        assert_eq!(divide_checked(-9.0, 3.0), Ok(-3.0));
        assert_eq!(divide_checked(0.0, 4.0), Ok(0.0));
        assert_eq!(divide_checked(7.0, 0.1), Ok(7.0 / 0.1));
    }

    #[test]
    fn test_divide_checked_zero() {
        let err = divide_checked(1.0, 0.0).unwrap_err();
        assert_eq!(err, DivideError::ZeroDenominator);
        assert_eq!(err.to_string(), "除数不能为0");
        assert_eq!(err.category(), ErrorCategory::Value);
    }

    #[test]
    fn test_negative_zero_is_zero() {
        assert!(divide_checked(1.0, -0.0).is_err());
        assert!(true_divide(1.0, -0.0).is_err());
    }

    #[test]
    fn test_propagation_with_question_mark() {
        fn halve_then_divide(a: f64, b: f64) -> Result<f64, DivideError> {
            let half = divide_checked(a, 2.0)?;
            let q = divide_checked(half, b)?;
            Ok(q)
        }

        assert_eq!(halve_then_divide(8.0, 2.0), Ok(2.0));
        assert_eq!(halve_then_divide(8.0, 0.0), Err(DivideError::ZeroDenominator));
    }

    #[test]
    fn test_true_divide() {
        assert_eq!(true_divide(1.0, 2.0), Ok(0.5));
        let err = true_divide(1.0, 0.0).unwrap_err();
        assert_eq!(err.to_string(), "division by zero");
        assert!(err.category().is_a(ErrorCategory::Arithmetic));
    }

    #[test]
    fn test_divide_or_fallback() {
        assert_eq!(divide_or_fallback(2.0, 0.0), Quotient::Fallback(FALLBACK));
        assert_eq!(divide_or_fallback(2.0, 0.0).to_string(), "try除数不能为0");
        assert_eq!(divide_or_fallback(3.0, 2.0), Quotient::Value(1.5));
        assert!(!divide_or_fallback(3.0, 2.0).is_fallback());
    }

    #[test]
    fn test_quotient_display() {
        assert_eq!(Quotient::Value(0.5).to_string(), "0.5");
        assert_eq!(Quotient::Value(2.0).to_string(), "2.0");
        assert_eq!(divide_or_fallback(4.0, 2.0).to_string(), "2.0");
    }
}
