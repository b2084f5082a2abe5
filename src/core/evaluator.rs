use tracing::debug;

use super::operand::{Operand, parse_operand};
use super::operation::Operation;

/// Result of a single computation
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Outcome {
    Value(f64),
    /// NaN or infinite. The cause is intentionally not kept.
    Invalid,
}

impl Outcome {
    pub(crate) fn from_f64(value: f64) -> Self {
        if value.is_finite() {
            Outcome::Value(value)
        } else {
            Outcome::Invalid
        }
    }

    pub(crate) fn value(self) -> Option<f64> {
        match self {
            Outcome::Value(v) => Some(v),
            Outcome::Invalid => None,
        }
    }

    pub(crate) fn is_valid(self) -> bool {
        matches!(self, Outcome::Value(_))
    }
}

/// One evaluated request: both operands as read, the operation if the
/// symbol was recognized, and the outcome.
#[derive(Debug, Clone)]
pub(crate) struct Evaluation {
    pub(crate) left: Operand,
    pub(crate) right: Operand,
    pub(crate) symbol: String,
    pub(crate) operation: Option<Operation>,
    pub(crate) outcome: Outcome,
}

impl Evaluation {
    pub(crate) fn compute(left_text: &str, right_text: &str, symbol: &str) -> Self {
        let raw = evaluate(left_text, right_text, symbol);
        let left = Operand::parse(left_text);
        let right = Operand::parse(right_text);
        let operation = symbol.parse::<Operation>().ok();

        if left.defaulted {
            debug!(text = %left.text, "left operand read as 0");
        }
        if right.defaulted && !operation.is_some_and(Operation::is_unary) {
            debug!(text = %right.text, "right operand read as 0");
        }
        if operation.is_none() {
            debug!(symbol, "unknown operation");
        }

        Evaluation {
            left,
            right,
            symbol: symbol.to_string(),
            operation,
            outcome: Outcome::from_f64(raw),
        }
    }
}

/// Evaluate `left <symbol> right`, returning NaN for unknown symbols and
/// domain errors and infinity on overflow. Never panics.
pub(crate) fn evaluate(left_text: &str, right_text: &str, symbol: &str) -> f64 {
    let left = parse_operand(left_text);
    let right = parse_operand(right_text);
    match symbol.parse::<Operation>() {
        Ok(op) => op.apply(left, right),
        Err(()) => f64::NAN,
    }
}

/// Significant digits written for a result; enough to read back the same
/// double.
const RESULT_DIGITS: usize = 17;

/// Full-precision result text: 17 significant digits with trailing zeros
/// dropped, switching to `E+NN`/`E-NN` notation when the decimal exponent
/// is below -4 or at least 17 ("0.10000000000000001", "1E+17").
pub(crate) fn format_result(value: f64) -> String {
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let scientific = format!("{:.*e}", RESULT_DIGITS - 1, value.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let sign = if value.is_sign_negative() { "-" } else { "" };

    if exponent > -5 && exponent < RESULT_DIGITS as i32 {
        let (int_part, frac_part) = if exponent >= 0 {
            let split = exponent as usize + 1;
            (digits[..split].to_string(), digits[split..].to_string())
        } else {
            let zeros = "0".repeat((-exponent - 1) as usize);
            ("0".to_string(), format!("{zeros}{digits}"))
        };
        let frac_part = frac_part.trim_end_matches('0');
        if frac_part.is_empty() {
            format!("{sign}{int_part}")
        } else {
            format!("{sign}{int_part}.{frac_part}")
        }
    } else {
        let (lead, rest) = digits.split_at(1);
        let rest = rest.trim_end_matches('0');
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        let exp_abs = exponent.unsigned_abs();
        if rest.is_empty() {
            format!("{sign}{lead}E{exp_sign}{exp_abs:02}")
        } else {
            format!("{sign}{lead}.{rest}E{exp_sign}{exp_abs:02}")
        }
    }
}
