//! Calculator SDK
//!
//! This crate provides the public contract for the `calculator` module:
//!
//! - [`Calculator`] - API trait implemented by every calculator
//! - [`CalculatorError`] - Error types
//! - [`Operation`] - The arithmetic operations the trait exposes
//! - [`testing`] - Fake, stub and dummy implementations for consumer tests
//!   (enabled by the `testing` feature)
//!
//! ## Usage
//!
//! Consumers depend on the trait and receive an implementation by injection:
//!
//! ```ignore
//! use calculator_sdk::{Calculator, CalculatorError};
//!
//! fn average<C: Calculator>(calc: &mut C, a: f64, b: f64) -> Result<f64, CalculatorError> {
//!     let sum = calc.add(a, b);
//!     calc.divide(sum, 2.0)
//! }
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === API TRAIT AND TYPES ===
pub mod api;
pub mod error;
pub mod models;

pub use api::Calculator;
pub use error::CalculatorError;
pub use models::Operation;

// === TEST DOUBLES ===
#[cfg(any(test, feature = "testing"))]
pub mod testing;
