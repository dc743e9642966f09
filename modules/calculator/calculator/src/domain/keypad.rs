//! Keypad input session
//!
//! Turns button presses into calculator calls and keeps the text shown on
//! the display. The session owns an injected [`Calculator`], so it can be
//! exercised with the standard calculator or with any test double.

use std::fmt;
use std::str::FromStr;

use calculator_sdk::{Calculator, CalculatorError, Operation};
use thiserror::Error;
use tracing::debug;

use super::format::format_result;
use crate::config::CalculatorConfig;

/// Text shown when a calculation fails or produces a non-finite value.
pub const ERROR_DISPLAY: &str = "Error";

/// Binary operator keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    #[must_use]
    pub const fn operation(self) -> Operation {
        match self {
            Self::Add => Operation::Add,
            Self::Subtract => Operation::Subtract,
            Self::Multiply => Operation::Multiply,
            Self::Divide => Operation::Divide,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A keypad button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A decimal digit, `0..=9`. Larger values are ignored.
    Digit(u8),
    Decimal,
    Operator(Operator),
    Equals,
    Clear,
    Percent,
    Sqrt,
}

/// Returned when a button label does not name a key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown key: '{0}'")]
pub struct ParseKeyError(String);

impl FromStr for Key {
    type Err = ParseKeyError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let key = match label {
            "." => Self::Decimal,
            "+" => Self::Operator(Operator::Add),
            "-" => Self::Operator(Operator::Subtract),
            "*" => Self::Operator(Operator::Multiply),
            "/" => Self::Operator(Operator::Divide),
            "=" => Self::Equals,
            "C" => Self::Clear,
            "%" => Self::Percent,
            "sqrt" => Self::Sqrt,
            _ => {
                let mut chars = label.chars();
                match (chars.next().and_then(|c| c.to_digit(10)), chars.next()) {
                    (Some(digit), None) => Self::Digit(u8::try_from(digit).unwrap_or(0)),
                    _ => return Err(ParseKeyError(label.to_owned())),
                }
            }
        };
        Ok(key)
    }
}

/// What the user has entered so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeypadState {
    pub first_operand: String,
    pub operator: Option<Operator>,
    pub second_operand: String,
    /// Set when the last calculation failed; cleared by the next key press.
    pub error: bool,
}

impl KeypadState {
    /// The text shown on the display.
    #[must_use]
    pub fn display(&self) -> String {
        if self.error {
            return ERROR_DISPLAY.to_owned();
        }
        match self.operator {
            Some(op) if !self.second_operand.is_empty() => {
                format!("{} {op} {}", self.first_operand, self.second_operand)
            }
            Some(op) => format!("{} {op}", self.first_operand),
            None if !self.first_operand.is_empty() => self.first_operand.clone(),
            None => "0".to_owned(),
        }
    }
}

/// An operand is usable once it holds more than a lone minus sign.
fn is_complete(operand: &str) -> bool {
    !operand.is_empty() && operand != "-"
}

fn parse_operand(operand: &str) -> f64 {
    operand.parse().unwrap_or(0.0)
}

fn push_decimal_point(operand: &mut String) {
    if operand.contains('.') {
        return;
    }
    match operand.as_str() {
        "" | "-" => operand.push_str("0."),
        _ => operand.push('.'),
    }
}

/// Keypad session driving a [`Calculator`].
///
/// ```ignore
/// let mut keypad = Keypad::new(StandardCalculator::new());
/// for label in ["5", "+", "7", "="] {
///     keypad.press_label(label)?;
/// }
/// assert_eq!(keypad.display(), "12");
/// ```
#[derive(Debug)]
pub struct Keypad<C> {
    calculator: C,
    state: KeypadState,
    max_fraction_digits: u8,
}

impl<C: Calculator> Keypad<C> {
    /// Create a session with the default display precision.
    #[must_use]
    pub fn new(calculator: C) -> Self {
        Self::with_config(calculator, &CalculatorConfig::default())
    }

    /// Create a session using the display precision from `config`.
    #[must_use]
    pub fn with_config(calculator: C, config: &CalculatorConfig) -> Self {
        Self {
            calculator,
            state: KeypadState::default(),
            max_fraction_digits: config.max_fraction_digits,
        }
    }

    #[must_use]
    pub fn state(&self) -> &KeypadState {
        &self.state
    }

    #[must_use]
    pub fn display(&self) -> String {
        self.state.display()
    }

    #[must_use]
    pub fn calculator(&self) -> &C {
        &self.calculator
    }

    /// Give back the calculator, ending the session.
    #[must_use]
    pub fn into_calculator(self) -> C {
        self.calculator
    }

    /// Handle a key given by its button label (`"7"`, `"+"`, `"sqrt"`, ...).
    ///
    /// # Errors
    ///
    /// - `ParseKeyError` if `label` does not name a key; the state is untouched
    pub fn press_label(&mut self, label: &str) -> Result<(), ParseKeyError> {
        let key = label.parse()?;
        self.press(key);
        Ok(())
    }

    /// Handle a single key press.
    pub fn press(&mut self, key: Key) {
        if self.state.error {
            self.state = KeypadState::default();
        }
        match key {
            Key::Digit(digit) => self.on_digit(digit),
            Key::Decimal => self.on_decimal(),
            Key::Operator(op) => self.on_operator(op),
            Key::Equals => self.on_equals(),
            Key::Clear => self.on_clear(),
            Key::Percent => self.on_unary(Operation::Percentage),
            Key::Sqrt => self.on_unary(Operation::SquareRoot),
        }
    }

    fn on_digit(&mut self, digit: u8) {
        let Some(c) = char::from_digit(u32::from(digit), 10) else {
            return;
        };
        let state = &mut self.state;
        if state.operator.is_some() {
            state.second_operand.push(c);
        } else if state.first_operand == "0" {
            state.first_operand = c.to_string();
        } else {
            state.first_operand.push(c);
        }
    }

    fn on_decimal(&mut self) {
        let state = &mut self.state;
        if state.operator.is_some() {
            push_decimal_point(&mut state.second_operand);
        } else {
            push_decimal_point(&mut state.first_operand);
        }
    }

    fn on_operator(&mut self, op: Operator) {
        let first_ready = is_complete(&self.state.first_operand);
        let second_ready = is_complete(&self.state.second_operand);

        if first_ready && second_ready {
            // Chained calculation: "1 + 2 -" evaluates "1 + 2" first.
            if let Some(result) = self.evaluate() {
                self.state.first_operand = result;
                self.state.operator = Some(op);
                self.state.second_operand.clear();
            }
        } else if first_ready && self.state.operator.is_none() {
            self.state.operator = Some(op);
        } else if first_ready && self.state.second_operand.is_empty() {
            // "5 +" followed by "-" starts a negative second operand.
            if op == Operator::Subtract {
                self.state.second_operand.push('-');
            }
        } else if op == Operator::Subtract
            && self.state.first_operand.is_empty()
            && self.state.operator.is_none()
        {
            self.state.first_operand.push('-');
        }
    }

    fn on_equals(&mut self) {
        let ready = is_complete(&self.state.first_operand)
            && self.state.operator.is_some()
            && is_complete(&self.state.second_operand);
        if !ready {
            return;
        }
        if let Some(result) = self.evaluate() {
            self.state = KeypadState {
                first_operand: result,
                ..KeypadState::default()
            };
        }
    }

    fn on_clear(&mut self) {
        self.calculator.clear();
        self.state = KeypadState::default();
    }

    fn on_unary(&mut self, operation: Operation) {
        let on_second = is_complete(&self.state.second_operand);
        let on_first = !on_second
            && is_complete(&self.state.first_operand)
            && self.state.operator.is_none();
        if !on_second && !on_first {
            return;
        }

        let operand = if on_second {
            &self.state.second_operand
        } else {
            &self.state.first_operand
        };
        let a = parse_operand(operand);
        let result = if operation == Operation::SquareRoot {
            self.calculator.sqrt(a)
        } else {
            Ok(self.calculator.percentage(a))
        };

        if let Some(text) = self.render(operation, result) {
            if on_second {
                self.state.second_operand = text;
            } else {
                self.state.first_operand = text;
            }
        }
    }

    /// Evaluate `first operator second`; `None` leaves the session in the
    /// error state.
    fn evaluate(&mut self) -> Option<String> {
        let op = self.state.operator?;
        let a = parse_operand(&self.state.first_operand);
        let b = parse_operand(&self.state.second_operand);
        let result = match op {
            Operator::Add => Ok(self.calculator.add(a, b)),
            Operator::Subtract => Ok(self.calculator.subtract(a, b)),
            Operator::Multiply => Ok(self.calculator.multiply(a, b)),
            Operator::Divide => self.calculator.divide(a, b),
        };
        self.render(op.operation(), result)
    }

    fn render(
        &mut self,
        operation: Operation,
        result: Result<f64, CalculatorError>,
    ) -> Option<String> {
        let text = match result {
            Ok(value) => format_result(value, self.max_fraction_digits),
            Err(e) => {
                debug!(%operation, error = %e, "keypad calculation failed");
                None
            }
        };
        if text.is_none() {
            self.state = KeypadState {
                error: true,
                ..KeypadState::default()
            };
        }
        text
    }
}
