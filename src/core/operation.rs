use std::str::FromStr;

/// Smallest positive double (the first subnormal). Divisors below it in
/// magnitude are treated as zero.
const MIN_POSITIVE_DIVISOR: f64 = f64::from_bits(1);

/// The closed set of supported operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Modulo,
    Sqrt,
}

impl Operation {
    pub(crate) const ALL: [Operation; 7] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Power,
        Operation::Modulo,
        Operation::Sqrt,
    ];

    pub(crate) fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
            Operation::Power => "^",
            Operation::Modulo => "%",
            Operation::Sqrt => "sqrt",
        }
    }

    /// Only the left operand is meaningful
    pub(crate) fn is_unary(self) -> bool {
        matches!(self, Operation::Sqrt)
    }

    /// Map an interactive menu number ("1".."7") to its operation
    pub(crate) fn from_menu_choice(choice: &str) -> Option<Self> {
        match choice {
            "1" => Some(Operation::Add),
            "2" => Some(Operation::Subtract),
            "3" => Some(Operation::Multiply),
            "4" => Some(Operation::Divide),
            "5" => Some(Operation::Power),
            "6" => Some(Operation::Modulo),
            "7" => Some(Operation::Sqrt),
            _ => None,
        }
    }

    /// Apply the operation. Failures come back as NaN, overflow as infinity.
    pub(crate) fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Operation::Add => left + right,
            Operation::Subtract => left - right,
            Operation::Multiply => left * right,
            Operation::Divide => {
                if right.abs() < MIN_POSITIVE_DIVISOR {
                    return f64::NAN;
                }
                left / right
            }
            Operation::Power => left.powf(right),
            Operation::Modulo => {
                if right.abs() < MIN_POSITIVE_DIVISOR {
                    return f64::NAN;
                }
                left % right
            }
            Operation::Sqrt => {
                if left < 0.0 {
                    return f64::NAN;
                }
                left.sqrt()
            }
        }
    }
}

impl FromStr for Operation {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.symbol() == s)
            .ok_or(())
    }
}
