//! Error types for the calculator module.

use thiserror::Error;

use crate::models::Operation;

/// Errors that can occur when using the calculator API.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculatorError {
    /// The divisor of a division was zero.
    #[error("division by zero: {dividend} / 0")]
    DivisionByZero {
        /// The dividend that was being divided.
        dividend: f64,
    },

    /// The input falls outside the operation's mathematical domain.
    #[error("{operation}: input {value} is outside the domain")]
    Domain {
        /// The operation that rejected the input.
        operation: Operation,
        /// The rejected input.
        value: f64,
    },
}

impl CalculatorError {
    /// Creates a `DivisionByZero` error.
    #[must_use]
    pub fn division_by_zero(dividend: f64) -> Self {
        Self::DivisionByZero { dividend }
    }

    /// Creates a `Domain` error.
    #[must_use]
    pub fn domain(operation: Operation, value: f64) -> Self {
        Self::Domain { operation, value }
    }

    /// Returns the operation that produced this error.
    #[must_use]
    pub fn operation(&self) -> Operation {
        match self {
            Self::DivisionByZero { .. } => Operation::Divide,
            Self::Domain { operation, .. } => *operation,
        }
    }
}
