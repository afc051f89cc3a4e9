use logos::Logos;

use crate::{error::LexError, operator::Operator};

/// Result type returned by the tokenizer.
pub type LexResult<T> = Result<T, LexError>;

/// Represents a lexical token in an arithmetic expression.
///
/// Tokens are produced once by [`tokenize`] and never mutated afterwards. The
/// same type flows through every later stage: the converter reorders tokens
/// into postfix, and the evaluator and emitter walk that postfix sequence.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f\x0B]+")]
pub enum Token {
    /// Numeric literal tokens, such as `3`, `3.14`, `.5`, `2.` or `2.5e-3`.
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    Number(f64),
    /// One of `+`, `-`, `*` or `/`. A `-` is always binary.
    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Sub)]
    #[token("*", |_| Operator::Mul)]
    #[token("/", |_| Operator::Div)]
    Operator(Operator),
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value:.2}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
        }
    }
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the slice is not a valid float, which the regexes above rule
///   out.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Converts an expression into its sequence of infix tokens.
///
/// Whitespace is skipped. The first character that cannot start a token aborts
/// tokenization; no partial sequence is returned in that case.
///
/// # Errors
/// Returns [`LexError::UnexpectedChar`] with the offending character and its
/// 0-based character index.
///
/// # Example
/// ```
/// use rpncalc::{error::LexError, interpreter::lexer::{Token, tokenize}, operator::Operator};
///
/// let tokens = tokenize("(1 + .5)").unwrap();
/// assert_eq!(tokens,
///            vec![Token::LeftParen,
///                 Token::Number(1.0),
///                 Token::Operator(Operator::Add),
///                 Token::Number(0.5),
///                 Token::RightParen]);
///
/// assert!(matches!(tokenize("3 + $"),
///                  Err(LexError::UnexpectedChar { ch: '$', position: 4 })));
/// ```
pub fn tokenize(input: &str) -> LexResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(input);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push(tok);
        } else {
            let start = lexer.span().start;
            let ch = input[start..].chars().next().unwrap_or('\0');
            return Err(LexError::UnexpectedChar { ch,
                                                  position: input[..start].chars().count() });
        }
    }

    log::debug!("tokenized {} token(s) from {:?}", tokens.len(), input);
    Ok(tokens)
}
