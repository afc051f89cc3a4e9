#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during tokenization.
pub enum LexError {
    /// A character is not a digit, decimal point, operator, parenthesis or
    /// whitespace.
    UnexpectedChar {
        /// The character encountered.
        ch:       char,
        /// 0-based character index into the input.
        position: usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedChar { ch, position } => {
                write!(f,
                       "Error at column {}: Unexpected character '{ch}'.",
                       position + 1)
            },
        }
    }
}

impl std::error::Error for LexError {}
