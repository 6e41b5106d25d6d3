use log::debug;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;

#[inline]
pub(crate) fn is_integer(value: f64) -> bool {
    if value.abs() > 2_f64.powi(52) {
        true
    } else {
        (value - value.round()).abs() < f64::EPSILON
    }
}

#[inline]
fn finite(value: f64) -> Result<f64, ExpressionError> {
    if value.is_finite() {
        Ok(value)
    } else {
        debug!("Non-finite intermediate result: {}", value);
        Err(ExpressionError::Overflow)
    }
}

/// Modulo whose result carries the sign of the divisor
#[inline]
fn floored_rem(left: f64, right: f64) -> f64 {
    let rem = left % right;
    if rem != 0.0 && (rem < 0.0) != (right < 0.0) {
        rem + right
    } else {
        rem
    }
}

/// Floor of the quotient, matching the divmod-based rounding of `floored_rem`
#[inline]
fn floored_div(left: f64, right: f64) -> f64 {
    let rem = left % right;
    let mut quotient = (left - rem) / right;
    if rem != 0.0 && (rem < 0.0) != (right < 0.0) {
        quotient -= 1.0;
    }
    if quotient == 0.0 {
        return (0.0_f64).copysign(left / right);
    }
    let floor = quotient.floor();
    if quotient - floor > 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

impl Expression {
    /// # Errors
    ///
    /// Returns an error when attempting:
    /// - Division, floor division or modulo by zero, including `0 ^ negative`
    /// - Raising a negative base to a fractional exponent (complex result)
    /// - Producing an infinite or NaN value
    pub fn evaluate(&self) -> Result<f64, ExpressionError> {
        let result = match self {
            Expression::Number(n) => Ok(*n),
            Expression::Add(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                finite(left + right)
            }
            Expression::Sub(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                finite(left - right)
            }
            Expression::Mul(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                finite(left * right)
            }
            Expression::Div(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                if right == 0.0 {
                    Err(ExpressionError::DivisionByZero)
                } else {
                    finite(left / right)
                }
            }
            Expression::FloorDiv(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                if right == 0.0 {
                    Err(ExpressionError::DivisionByZero)
                } else {
                    finite(floored_div(left, right))
                }
            }
            Expression::Rem(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                if right == 0.0 {
                    Err(ExpressionError::DivisionByZero)
                } else {
                    finite(floored_rem(left, right))
                }
            }
            Expression::Pow(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                if left == 0.0 && right < 0.0 {
                    Err(ExpressionError::DivisionByZero)
                } else if left < 0.0 && !is_integer(right) {
                    debug!(
                        "Complex result from negative base with fractional exponent: {}^{}",
                        left, right
                    );
                    Err(ExpressionError::ComplexResult)
                } else {
                    finite(left.powf(right))
                }
            }
            Expression::Neg(e) => {
                let val = e.evaluate()?;
                Ok(-val)
            }
        };

        if let Err(e) = &result {
            debug!("Evaluation of {} failed: {}", self, e);
        }

        result
    }
}
