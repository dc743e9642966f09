//! Display formatting for calculator results.

/// Render `value` in fixed-point notation with at most
/// `max_fraction_digits` decimals, dropping trailing zeros (`10.0` -> `"10"`).
///
/// Returns `None` for NaN and infinities, which have no numeric rendering.
#[must_use]
pub fn format_result(value: f64, max_fraction_digits: u8) -> Option<String> {
    if !value.is_finite() {
        return None;
    }

    let mut text = format!("{value:.prec$}", prec = usize::from(max_fraction_digits));
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    // Rounding can leave a sign on zero ("-0.0000001" at 2 digits).
    if text == "-0" {
        text.remove(0);
    }
    Some(text)
}
