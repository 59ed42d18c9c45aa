//! Inline catch-log-continue blocks.

use thiserror::Error;
use tracing::warn;

use crate::catalogue::{Categorized, ErrorCategory};
use crate::divide::{true_divide, ArithmeticError};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SequenceError {
    #[error("list index out of range")]
    IndexOutOfRange { index: usize, len: usize },
}

impl Categorized for SequenceError {
    fn category(&self) -> ErrorCategory {
        match self {
            SequenceError::IndexOutOfRange { .. } => ErrorCategory::Index,
        }
    }
}

/// What a demonstration block did.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A failure was caught and this line printed in its place.
    Printed(String),
    /// Nothing failed, so there was nothing extra to report.
    Silent,
    /// The failure left the block unhandled.
    Propagated,
}

impl Outcome {
    pub fn is_recovery(&self) -> bool {
        matches!(self, Outcome::Printed(_))
    }
}

impl From<Option<String>> for Outcome {
    fn from(line: Option<String>) -> Self {
        line.map_or(Outcome::Silent, Outcome::Printed)
    }
}

impl<T> From<Result<T, String>> for Outcome {
    fn from(result: Result<T, String>) -> Self {
        match result {
            Ok(_) => Outcome::Silent,
            Err(line) => Outcome::Printed(line),
        }
    }
}

/// Bounds-checked read.
pub fn element_at(items: &[i64], index: usize) -> Result<i64, SequenceError> {
    items
        .get(index)
        .copied()
        .ok_or(SequenceError::IndexOutOfRange {
            index,
            len: items.len(),
        })
}

/// Divides `a` by `b`, catching division by zero.
///
/// Returns the line to print, or `None` when the division succeeded and
/// there is nothing to report.
pub fn division_block(a: f64, b: f64) -> Option<String> {
    match true_divide(a, b) {
        Ok(_) => None,
        Err(e @ ArithmeticError::ZeroDivision) => {
            warn!(category = %e.category(), "caught: {}", e);
            Some(format!("Connot divide by zero: {}", e))
        }
    }
}

/// Reads `items[index]`, catching the out-of-range case.
///
/// `Ok` carries the element to print, `Err` the message to print instead.
pub fn index_block(items: &[i64], index: usize) -> Result<i64, String> {
    element_at(items, index).map_err(|e| {
        warn!(category = %e.category(), index, len = items.len(), "caught: {}", e);
        format!("Index error:{}", e)
    })
}
