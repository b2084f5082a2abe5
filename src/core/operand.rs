/// A user-supplied operand and the number it was read as.
///
/// Reading never fails: text that is not a finite decimal literal becomes
/// `0.0` and `defaulted` is set, so callers can tell "typed 0" apart from
/// "typed garbage" without interrupting the calculation.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Operand {
    pub(crate) text: String,
    pub(crate) value: f64,
    pub(crate) defaulted: bool,
}

impl Operand {
    pub(crate) fn parse(text: &str) -> Self {
        match parse_decimal(text) {
            Some(value) => Operand {
                text: text.to_string(),
                value,
                defaulted: false,
            },
            None => Operand {
                text: text.to_string(),
                value: 0.0,
                defaulted: true,
            },
        }
    }
}

/// Lenient operand reading: unparsable text is zero
pub(crate) fn parse_operand(text: &str) -> f64 {
    Operand::parse(text).value
}

fn parse_decimal(text: &str) -> Option<f64> {
    // A comma is a decimal point here, so "1,000" reads as 1 and never as a
    // grouped thousand.
    let normalized = text.trim().replace(',', ".");
    if let Some(special) = parse_special(&normalized) {
        return Some(special);
    }
    // f64::from_str also takes "inf"; only digit-bearing literals count.
    if !normalized.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    if normalized
        .bytes()
        .any(|b| b.is_ascii_alphabetic() && !matches!(b, b'e' | b'E'))
    {
        return None;
    }
    normalized.parse::<f64>().ok()
}

/// The invariant-culture words for NaN and the infinities. They read as
/// themselves, so any result built from them is invalid.
fn parse_special(text: &str) -> Option<f64> {
    let (negative, word) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    if word.eq_ignore_ascii_case("NaN") {
        Some(f64::NAN)
    } else if word.eq_ignore_ascii_case("Infinity") || word == "\u{221e}" {
        Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_numbers() {
        assert_eq!(parse_operand("42"), 42.0);
        assert_eq!(parse_operand("-3.5"), -3.5);
        assert_eq!(parse_operand("+7"), 7.0);
        assert_eq!(parse_operand(".5"), 0.5);
        assert_eq!(parse_operand("2."), 2.0);
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(parse_operand("  12.25\t"), 12.25);
    }

    #[test]
    fn comma_is_decimal_point() {
        assert_eq!(parse_operand("3,5"), 3.5);
        assert_eq!(parse_operand("1,000"), 1.0);
    }

    #[test]
    fn exponent_notation_is_accepted() {
        assert_eq!(parse_operand("1e3"), 1000.0);
        assert_eq!(parse_operand("2,5E-1"), 0.25);
    }

    #[test]
    fn garbage_defaults_to_zero() {
        let op = Operand::parse("abc");
        assert_eq!(op.value, 0.0);
        assert!(op.defaulted);
        assert_eq!(op.text, "abc");

        assert_eq!(parse_operand(""), 0.0);
        assert_eq!(parse_operand("1.2.3"), 0.0);
        assert_eq!(parse_operand("1,000.5"), 0.0);
        assert_eq!(parse_operand("12abc"), 0.0);
    }

    #[test]
    fn special_words_are_read_not_defaulted() {
        let nan = Operand::parse("NaN");
        assert!(nan.value.is_nan());
        assert!(!nan.defaulted);

        assert_eq!(parse_operand("Infinity"), f64::INFINITY);
        assert_eq!(parse_operand(" -infinity "), f64::NEG_INFINITY);
        assert_eq!(parse_operand("+Infinity"), f64::INFINITY);
        assert_eq!(parse_operand("\u{221e}"), f64::INFINITY);
    }

    #[test]
    fn rust_only_spellings_still_default() {
        assert!(Operand::parse("inf").defaulted);
        assert!(Operand::parse("-inf").defaulted);
        assert!(Operand::parse("NaNa").defaulted);
    }

    #[test]
    fn typed_zero_is_not_defaulted() {
        let op = Operand::parse("0");
        assert_eq!(op.value, 0.0);
        assert!(!op.defaulted);
    }
}
