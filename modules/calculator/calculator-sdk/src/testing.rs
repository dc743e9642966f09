//! Test doubles for code that consumes a [`Calculator`].
//!
//! - [`FakeCalculator`] - working arithmetic plus a record of every call
//! - [`StubCalculator`] - canned answers, no arithmetic at all
//! - [`DummyCalculator`] - panics when touched
//!
//! Available in this crate's tests and, for other crates, through the
//! `testing` feature (usually enabled from `[dev-dependencies]`).

use std::collections::HashMap;

use crate::api::Calculator;
use crate::error::CalculatorError;
use crate::models::Operation;

/// Fully working calculator that records how it was used.
///
/// Domain violations are rejected the same way the production calculator
/// does under its default policy.
#[derive(Debug, Clone, Default)]
pub struct FakeCalculator {
    last_result: f64,
    calls: Vec<Operation>,
    clears: usize,
}

impl FakeCalculator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The result of the most recent successful operation, `0.0` after `clear`.
    #[must_use]
    pub fn last_result(&self) -> f64 {
        self.last_result
    }

    /// Operations invoked so far, in call order (failed calls included).
    #[must_use]
    pub fn calls(&self) -> &[Operation] {
        &self.calls
    }

    /// How many times `clear` was called.
    #[must_use]
    pub fn clear_count(&self) -> usize {
        self.clears
    }

    fn record(&mut self, op: Operation, value: f64) -> f64 {
        self.calls.push(op);
        self.last_result = value;
        value
    }
}

impl Calculator for FakeCalculator {
    fn add(&mut self, a: f64, b: f64) -> f64 {
        self.record(Operation::Add, a + b)
    }

    fn subtract(&mut self, a: f64, b: f64) -> f64 {
        self.record(Operation::Subtract, a - b)
    }

    fn multiply(&mut self, a: f64, b: f64) -> f64 {
        self.record(Operation::Multiply, a * b)
    }

    fn divide(&mut self, a: f64, b: f64) -> Result<f64, CalculatorError> {
        if b == 0.0 {
            self.calls.push(Operation::Divide);
            return Err(CalculatorError::division_by_zero(a));
        }
        Ok(self.record(Operation::Divide, a / b))
    }

    fn sqrt(&mut self, a: f64) -> Result<f64, CalculatorError> {
        if a < 0.0 {
            self.calls.push(Operation::SquareRoot);
            return Err(CalculatorError::domain(Operation::SquareRoot, a));
        }
        Ok(self.record(Operation::SquareRoot, a.sqrt()))
    }

    fn percentage(&mut self, a: f64) -> f64 {
        self.record(Operation::Percentage, a / 100.0)
    }

    fn clear(&mut self) {
        self.clears += 1;
        self.last_result = 0.0;
    }
}

/// Calculator that ignores its inputs and returns canned answers.
///
/// Operations without a configured answer return `0.0`. `clear` does nothing.
///
/// ```ignore
/// let stub = StubCalculator::new().answer(Operation::Add, 999.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StubCalculator {
    answers: HashMap<Operation, Result<f64, CalculatorError>>,
}

impl StubCalculator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `op` always return `value`.
    #[must_use]
    pub fn answer(mut self, op: Operation, value: f64) -> Self {
        self.answers.insert(op, Ok(value));
        self
    }

    /// Make `op` always fail with `error`.
    ///
    /// # Panics
    ///
    /// If `op` cannot report an error (anything but divide and sqrt).
    #[must_use]
    pub fn fail(mut self, op: Operation, error: CalculatorError) -> Self {
        assert!(
            op.is_fallible(),
            "StubCalculator::fail: {op} cannot return an error"
        );
        self.answers.insert(op, Err(error));
        self
    }

    fn canned(&self, op: Operation) -> Result<f64, CalculatorError> {
        self.answers.get(&op).cloned().unwrap_or(Ok(0.0))
    }

    fn canned_value(&self, op: Operation) -> f64 {
        self.canned(op).unwrap_or(0.0)
    }
}

impl Calculator for StubCalculator {
    fn add(&mut self, _a: f64, _b: f64) -> f64 {
        self.canned_value(Operation::Add)
    }

    fn subtract(&mut self, _a: f64, _b: f64) -> f64 {
        self.canned_value(Operation::Subtract)
    }

    fn multiply(&mut self, _a: f64, _b: f64) -> f64 {
        self.canned_value(Operation::Multiply)
    }

    fn divide(&mut self, _a: f64, _b: f64) -> Result<f64, CalculatorError> {
        self.canned(Operation::Divide)
    }

    fn sqrt(&mut self, _a: f64) -> Result<f64, CalculatorError> {
        self.canned(Operation::SquareRoot)
    }

    fn percentage(&mut self, _a: f64) -> f64 {
        self.canned_value(Operation::Percentage)
    }

    fn clear(&mut self) {}
}

/// Calculator that must never be used.
///
/// Hand it to code under test to prove a path never reaches the calculator.
///
/// # Panics
///
/// Every method panics.
#[derive(Debug, Clone, Copy, Default)]
pub struct DummyCalculator;

impl DummyCalculator {
    fn called(method: &str) -> ! {
        panic!("DummyCalculator::{method} was called")
    }
}

impl Calculator for DummyCalculator {
    fn add(&mut self, _a: f64, _b: f64) -> f64 {
        Self::called("add")
    }

    fn subtract(&mut self, _a: f64, _b: f64) -> f64 {
        Self::called("subtract")
    }

    fn multiply(&mut self, _a: f64, _b: f64) -> f64 {
        Self::called("multiply")
    }

    fn divide(&mut self, _a: f64, _b: f64) -> Result<f64, CalculatorError> {
        Self::called("divide")
    }

    fn sqrt(&mut self, _a: f64) -> Result<f64, CalculatorError> {
        Self::called("sqrt")
    }

    fn percentage(&mut self, _a: f64) -> f64 {
        Self::called("percentage")
    }

    fn clear(&mut self) {
        Self::called("clear")
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_fake_records_calls_and_results() {
        let mut fake = FakeCalculator::new();
        assert_eq!(fake.add(5.0, 7.0), 12.0);
        assert_eq!(fake.divide(10.0, 2.0), Ok(5.0));
        assert_eq!(fake.last_result(), 5.0);
        assert_eq!(fake.calls(), &[Operation::Add, Operation::Divide]);
    }

    #[test]
    fn test_fake_rejects_domain_violations_without_touching_state() {
        let mut fake = FakeCalculator::new();
        fake.multiply(3.0, 4.0);
        assert_eq!(
            fake.divide(5.0, 0.0),
            Err(CalculatorError::division_by_zero(5.0))
        );
        assert_eq!(
            fake.sqrt(-1.0),
            Err(CalculatorError::domain(Operation::SquareRoot, -1.0))
        );
        assert_eq!(fake.last_result(), 12.0);
        assert_eq!(fake.calls().len(), 3);
    }

    #[test]
    fn test_fake_clear_resets_state() {
        let mut fake = FakeCalculator::new();
        fake.percentage(50.0);
        fake.clear();
        assert_eq!(fake.last_result(), 0.0);
        assert_eq!(fake.clear_count(), 1);
    }

    #[test]
    fn test_stub_defaults_to_zero() {
        let mut stub = StubCalculator::new();
        assert_eq!(stub.add(5.0, 7.0), 0.0);
        assert_eq!(stub.sqrt(16.0), Ok(0.0));
    }

    #[test]
    fn test_stub_returns_canned_answers() {
        let mut stub = StubCalculator::new()
            .answer(Operation::Add, 999.0)
            .fail(Operation::Divide, CalculatorError::division_by_zero(1.0));
        assert_eq!(stub.add(5.0, 7.0), 999.0);
        assert_eq!(stub.add(-1.0, 1.0), 999.0);
        assert!(stub.divide(1.0, 2.0).is_err());
        assert_eq!(stub.subtract(9.0, 1.0), 0.0);
    }

    #[test]
    fn test_stub_failures_reach_divide_and_sqrt() {
        let mut stub = StubCalculator::new()
            .fail(Operation::Divide, CalculatorError::division_by_zero(4.0))
            .fail(
                Operation::SquareRoot,
                CalculatorError::domain(Operation::SquareRoot, -4.0),
            );
        assert_eq!(
            stub.divide(4.0, 2.0),
            Err(CalculatorError::division_by_zero(4.0))
        );
        assert_eq!(
            stub.sqrt(4.0),
            Err(CalculatorError::domain(Operation::SquareRoot, -4.0))
        );
    }

    #[test]
    #[should_panic(expected = "StubCalculator::fail: add cannot return an error")]
    fn test_stub_refuses_failure_for_infallible_operation() {
        let _stub =
            StubCalculator::new().fail(Operation::Add, CalculatorError::division_by_zero(1.0));
    }

    #[test]
    #[should_panic(expected = "DummyCalculator::add was called")]
    fn test_dummy_panics_when_used() {
        DummyCalculator.add(1.0, 2.0);
    }

    #[test]
    fn test_doubles_are_object_safe() {
        let mut doubles: Vec<Box<dyn Calculator>> = vec![
            Box::new(FakeCalculator::new()),
            Box::new(StubCalculator::new().answer(Operation::Multiply, 6.0)),
        ];
        let results: Vec<f64> = doubles.iter_mut().map(|c| c.multiply(2.0, 3.0)).collect();
        assert_eq!(results, vec![6.0, 6.0]);
    }
}
