//! Domain service for calculator
//!
//! Contains the production implementation of the calculator contract.

use calculator_sdk::{Calculator, CalculatorError, Operation};
use tracing::{debug, warn};

use crate::config::{CalculatorConfig, DomainPolicy};

/// Production calculator.
///
/// Remembers the result of the last successful operation; [`clear`] resets
/// it to `0.0`. Divide and sqrt follow the configured [`DomainPolicy`].
///
/// [`clear`]: Calculator::clear
#[derive(Debug, Clone, Default)]
pub struct StandardCalculator {
    policy: DomainPolicy,
    last_result: f64,
}

impl StandardCalculator {
    /// Create a calculator with the default (strict) policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator with the given domain policy.
    #[must_use]
    pub fn with_policy(policy: DomainPolicy) -> Self {
        Self {
            policy,
            last_result: 0.0,
        }
    }

    /// Create a calculator from module configuration.
    #[must_use]
    pub fn from_config(config: &CalculatorConfig) -> Self {
        Self::with_policy(config.domain_policy)
    }

    /// The result of the most recent successful operation.
    #[must_use]
    pub fn last_result(&self) -> f64 {
        self.last_result
    }

    #[must_use]
    pub fn policy(&self) -> DomainPolicy {
        self.policy
    }

    fn store(&mut self, value: f64) -> f64 {
        self.last_result = value;
        value
    }

    fn reject(error: CalculatorError) -> Result<f64, CalculatorError> {
        warn!(operation = %error.operation(), error = %error, "calculator input rejected");
        Err(error)
    }
}

impl Calculator for StandardCalculator {
    fn add(&mut self, a: f64, b: f64) -> f64 {
        debug!(a, b, "performing addition");
        self.store(a + b)
    }

    fn subtract(&mut self, a: f64, b: f64) -> f64 {
        debug!(a, b, "performing subtraction");
        self.store(a - b)
    }

    fn multiply(&mut self, a: f64, b: f64) -> f64 {
        debug!(a, b, "performing multiplication");
        self.store(a * b)
    }

    fn divide(&mut self, a: f64, b: f64) -> Result<f64, CalculatorError> {
        debug!(a, b, "performing division");
        if b == 0.0 && self.policy == DomainPolicy::Strict {
            return Self::reject(CalculatorError::division_by_zero(a));
        }
        Ok(self.store(a / b))
    }

    fn sqrt(&mut self, a: f64) -> Result<f64, CalculatorError> {
        debug!(a, "performing square root");
        if a < 0.0 && self.policy == DomainPolicy::Strict {
            return Self::reject(CalculatorError::domain(Operation::SquareRoot, a));
        }
        Ok(self.store(a.sqrt()))
    }

    fn percentage(&mut self, a: f64) -> f64 {
        debug!(a, "performing percentage");
        self.store(a / 100.0)
    }

    fn clear(&mut self) {
        debug!(previous = self.last_result, "calculator state cleared");
        self.last_result = 0.0;
    }
}
