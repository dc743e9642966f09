//! Domain layer for calculator module
//!
//! Contains the standard calculator, result formatting, and the keypad
//! input session that drives any [`Calculator`](calculator_sdk::Calculator).

pub mod format;
pub mod keypad;
pub mod service;

pub use format::format_result;
pub use keypad::{Key, Keypad, KeypadState, Operator, ParseKeyError};
pub use service::StandardCalculator;
