//! Calculator Module
//!
//! Standard implementation of the calculator contract defined in
//! `calculator-sdk`, plus the keypad input session that consumes it.
//!
//! ## Architecture
//!
//! - `config.rs` - Layered configuration (defaults, YAML, environment)
//! - `domain/service.rs` - `StandardCalculator`, the production calculator
//! - `domain/format.rs` - Result rendering for the display
//! - `domain/keypad.rs` - Key-press state machine driving any `Calculator`
//!
//! The public API is defined in `calculator-sdk` and re-exported here.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub use calculator_sdk::{Calculator, CalculatorError, Operation};

pub mod config;
pub mod domain;

pub use config::{CalculatorConfig, ConfigError, DomainPolicy};
pub use domain::{
    Key, Keypad, KeypadState, Operator, ParseKeyError, StandardCalculator, format_result,
};

/// Build the production calculator and a keypad session around it from
/// `config`.
#[must_use]
pub fn keypad_from_config(config: &CalculatorConfig) -> Keypad<StandardCalculator> {
    Keypad::with_config(StandardCalculator::from_config(config), config)
}
