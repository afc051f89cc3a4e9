use crate::interpreter::lexer::Token;

/// Joins tokens with single spaces, numbers shown with two decimals.
///
/// # Example
/// ```
/// use rpncalc::{interpreter::lexer::tokenize, util::format::format_tokens};
///
/// let tokens = tokenize("(1+2.5)*3").unwrap();
/// assert_eq!(format_tokens(&tokens), "( 1.00 + 2.50 ) * 3.00");
/// ```
#[must_use]
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens.iter()
          .map(ToString::to_string)
          .collect::<Vec<_>>()
          .join(" ")
}
