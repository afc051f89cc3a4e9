use crate::{interpreter::lexer::Token, operator::Operator, util::num::truncate_to_i64};

/// Line appended after the last instruction of a rendered listing.
pub const END_OF_LISTING: &str = "; end of listing";

/// One instruction of the toy stack machine.
///
/// The machine only ever receives these as text; nothing in the crate executes
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// Push an integer constant.
    Push(i64),
    /// Pop two values, push their sum.
    Add,
    /// Pop two values, push the lower minus the upper.
    Sub,
    /// Pop two values, push their product.
    Mul,
    /// Pop two values, push the lower divided by the upper.
    Div,
}

impl From<Operator> for Instruction {
    fn from(operator: Operator) -> Self {
        match operator {
            Operator::Add => Self::Add,
            Operator::Sub => Self::Sub,
            Operator::Mul => Self::Mul,
            Operator::Div => Self::Div,
        }
    }
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Push(value) => write!(f, "PUSH {value}"),
            Self::Add => write!(f, "ADD"),
            Self::Sub => write!(f, "SUB"),
            Self::Mul => write!(f, "MUL"),
            Self::Div => write!(f, "DIV"),
        }
    }
}

/// Translates a postfix sequence into stack-machine instructions.
///
/// Emission follows the postfix order exactly, one instruction per token.
/// Number operands are truncated toward zero, which is all the target machine
/// can hold. Parentheses never occur in converted postfix and are skipped.
///
/// # Example
/// ```
/// use rpncalc::interpreter::{
///     converter::to_postfix,
///     emitter::{Instruction, emit},
///     lexer::tokenize,
/// };
///
/// let postfix = to_postfix(&tokenize("2.9 * (4 - 1)").unwrap()).unwrap();
/// assert_eq!(emit(&postfix),
///            [Instruction::Push(2),
///             Instruction::Push(4),
///             Instruction::Push(1),
///             Instruction::Sub,
///             Instruction::Mul]);
/// ```
#[must_use]
pub fn emit(postfix: &[Token]) -> Vec<Instruction> {
    postfix.iter()
           .filter_map(|token| match *token {
               Token::Number(value) => Some(Instruction::Push(truncate_to_i64(value))),
               Token::Operator(operator) => Some(Instruction::from(operator)),
               Token::LeftParen | Token::RightParen => None,
           })
           .collect()
}

/// Renders instructions one per line, followed by [`END_OF_LISTING`].
#[must_use]
pub fn render_listing(program: &[Instruction]) -> String {
    program.iter()
           .map(ToString::to_string)
           .chain(std::iter::once(END_OF_LISTING.to_string()))
           .collect::<Vec<_>>()
           .join("\n")
}
