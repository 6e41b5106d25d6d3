use log::debug;

use crate::expression::constants::{EPSILON, EQUALS, POWER_ALIAS};
use crate::expression::errors::ExpressionError;
use crate::expression::parser::parse;

/// Strip all whitespace, then rewrite `**` as `^`.
///
/// Whitespace goes first so that `2 * * 3` reads as a power and `6 / / 2`
/// as a floor division; the tokenizer reads `//` directly.
pub fn normalize(text: &str) -> String {
    let stripped: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    stripped.replace(POWER_ALIAS, "^")
}

/// Equal when identical or within `EPSILON`.
///
/// Whole numbers at least 1 apart never fall inside the tolerance, so they
/// still compare exactly. Rounding noise near zero, such as
/// `0.1 + 0.2 - 0.3`, does.
pub fn values_equal(left: f64, right: f64) -> bool {
    left == right || (left - right).abs() < EPSILON
}

fn evaluate_side(side: &str) -> Result<f64, ExpressionError> {
    parse(side)?.evaluate()
}

/// Evaluate both sides of `<left> = <right>` and compare them.
///
/// # Errors
///
/// Returns an error when the text does not contain exactly one `=`, or when
/// either side fails to parse or evaluate.
pub fn evaluate_equation(text: &str) -> Result<bool, ExpressionError> {
    let normalized = normalize(text);
    let mut sides = normalized.split(EQUALS);

    let (Some(left), Some(right), None) = (sides.next(), sides.next(), sides.next()) else {
        return Err(ExpressionError::SeparatorCount(normalized.matches(EQUALS).count()));
    };

    let left_value = evaluate_side(left)?;
    let right_value = evaluate_side(right)?;
    Ok(values_equal(left_value, right_value))
}

/// Whether `text` is a true equation. Any parse or evaluation failure counts
/// as "not a solution".
pub fn is_valid(text: &str) -> bool {
    match evaluate_equation(text) {
        Ok(holds) => holds,
        Err(e) => {
            debug!("Rejecting '{}': {}", text, e);
            false
        }
    }
}
