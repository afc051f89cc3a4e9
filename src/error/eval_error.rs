use crate::{interpreter::stack::Overflow, operator::Operator};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating postfix tokens.
pub enum EvalError {
    /// An operator was reached with fewer than two values on the stack.
    MissingOperand {
        /// The operator that could not be applied.
        operator: Operator,
    },
    /// The right operand of `/` was exactly zero.
    DivisionByZero,
    /// Evaluation finished without exactly one value on the stack.
    MalformedExpression {
        /// How many values were left.
        remaining: usize,
    },
    /// A parenthesis appeared in what should be a postfix sequence.
    UnexpectedParen {
        /// The parenthesis found.
        paren: char,
    },
    /// The operand stack grew past its configured ceiling.
    CapacityExceeded {
        /// Which buffer overflowed.
        buffer: &'static str,
        /// The configured ceiling.
        limit:  usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingOperand { operator } => {
                write!(f, "Error: Missing operand for '{operator}'.")
            },
            Self::DivisionByZero => write!(f, "Error: Division by zero."),
            Self::MalformedExpression { remaining } => write!(f,
                                                              "Error: Malformed expression: expected exactly one result but {remaining} value(s) remained."),
            Self::UnexpectedParen { paren } => {
                write!(f, "Error: Unexpected '{paren}' in postfix sequence.")
            },
            Self::CapacityExceeded { buffer, limit } => write!(f,
                                                               "Error: The {buffer} is full (limit is {limit} entries)."),
        }
    }
}

impl std::error::Error for EvalError {}

impl From<Overflow> for EvalError {
    fn from(overflow: Overflow) -> Self {
        Self::CapacityExceeded { buffer: overflow.buffer,
                                 limit:  overflow.limit, }
    }
}
