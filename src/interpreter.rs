/// The lexer module tokenizes expression text.
///
/// The lexer reads the raw input and produces the infix token sequence:
/// numbers, the four operators and parentheses. It is the first stage of the
/// pipeline.
///
/// # Responsibilities
/// - Defines the `Token` type shared by every later stage.
/// - Skips whitespace and parses numeric literals as `f64`.
/// - Reports the first unexpected character with its position.
pub mod lexer;
/// The converter module reorders infix tokens into postfix.
///
/// Runs the shunting-yard algorithm over the infix sequence, resolving
/// precedence, left-associativity and parentheses.
///
/// # Responsibilities
/// - Produces postfix sequences free of parentheses.
/// - Detects unbalanced parentheses.
/// - Honors the configured buffer ceilings.
pub mod converter;
/// The evaluator module reduces postfix tokens to a number.
///
/// # Responsibilities
/// - Applies operators to an operand stack.
/// - Reports missing operands, division by zero and leftover values.
pub mod evaluator;
/// The emitter module lowers postfix tokens into stack-machine instructions.
///
/// It walks the same postfix sequence as the evaluator and cannot fail.
pub mod emitter;
/// Bounded LIFO storage shared by the converter and the evaluator.
pub mod stack;
