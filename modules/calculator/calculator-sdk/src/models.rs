//! Public models for the calculator module.

use std::fmt;

/// An arithmetic operation exposed by [`Calculator`](crate::Calculator).
///
/// `clear` is not an operation: it produces no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    SquareRoot,
    Percentage,
}

impl Operation {
    /// Stable lowercase name, used in logs and error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::SquareRoot => "sqrt",
            Self::Percentage => "percentage",
        }
    }

    /// Whether the operation can reject its input.
    #[must_use]
    pub const fn is_fallible(self) -> bool {
        matches!(self, Self::Divide | Self::SquareRoot)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
