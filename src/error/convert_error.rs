#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while converting infix to postfix.
pub enum ConvertError {
    /// A `)` has no matching `(`, or a `(` is never closed.
    UnbalancedParens {
        /// The parenthesis left without a partner.
        paren: char,
    },
    /// A buffer grew past its configured ceiling.
    CapacityExceeded {
        /// Which buffer overflowed.
        buffer: &'static str,
        /// The configured ceiling.
        limit:  usize,
    },
}

impl std::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnbalancedParens { paren: ')' } => {
                write!(f, "Error: Unbalanced parentheses: ')' has no matching '('.")
            },
            Self::UnbalancedParens { paren } => {
                write!(f, "Error: Unbalanced parentheses: '{paren}' is never closed.")
            },
            Self::CapacityExceeded { buffer, limit } => write!(f,
                                                               "Error: The {buffer} is full (limit is {limit} entries)."),
        }
    }
}

impl std::error::Error for ConvertError {}

impl From<crate::interpreter::stack::Overflow> for ConvertError {
    fn from(overflow: crate::interpreter::stack::Overflow) -> Self {
        Self::CapacityExceeded { buffer: overflow.buffer,
                                 limit:  overflow.limit, }
    }
}
