//! Calculator API trait
//!
//! Contract trait shared by the production calculator and its test doubles.

use crate::error::CalculatorError;

/// Calculator API trait
///
/// Every operation records its result as the calculator's last result;
/// [`Calculator::clear`] resets that state to its initial value.
///
/// The trait is object safe, so consumers may hold either a concrete
/// implementation or a `Box<dyn Calculator>`.
pub trait Calculator: Send {
    /// Return `a + b`.
    fn add(&mut self, a: f64, b: f64) -> f64;

    /// Return `a - b`.
    fn subtract(&mut self, a: f64, b: f64) -> f64;

    /// Return `a * b`.
    fn multiply(&mut self, a: f64, b: f64) -> f64;

    /// Return `a / b`.
    ///
    /// # Errors
    ///
    /// - `DivisionByZero` if `b` is zero and the implementation rejects it.
    ///   Implementations configured for IEEE semantics return infinity or
    ///   NaN instead.
    fn divide(&mut self, a: f64, b: f64) -> Result<f64, CalculatorError>;

    /// Return the principal square root of `a`.
    ///
    /// # Errors
    ///
    /// - `Domain` if `a` is negative and the implementation rejects it.
    ///   Implementations configured for IEEE semantics return NaN instead.
    fn sqrt(&mut self, a: f64) -> Result<f64, CalculatorError>;

    /// Return `a / 100` (e.g. `50` becomes `0.5`).
    fn percentage(&mut self, a: f64) -> f64;

    /// Reset any internal state to its initial value.
    fn clear(&mut self);
}

impl<C: Calculator + ?Sized> Calculator for Box<C> {
    fn add(&mut self, a: f64, b: f64) -> f64 {
        (**self).add(a, b)
    }

    fn subtract(&mut self, a: f64, b: f64) -> f64 {
        (**self).subtract(a, b)
    }

    fn multiply(&mut self, a: f64, b: f64) -> f64 {
        (**self).multiply(a, b)
    }

    fn divide(&mut self, a: f64, b: f64) -> Result<f64, CalculatorError> {
        (**self).divide(a, b)
    }

    fn sqrt(&mut self, a: f64) -> Result<f64, CalculatorError> {
        (**self).sqrt(a)
    }

    fn percentage(&mut self, a: f64) -> f64 {
        (**self).percentage(a)
    }

    fn clear(&mut self) {
        (**self).clear();
    }
}
