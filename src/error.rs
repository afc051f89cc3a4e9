/// Tokenizer errors.
///
/// Raised while turning the raw expression text into tokens. The only failure
/// is a character that cannot start any token.
pub mod lex_error;
/// Infix-to-postfix conversion errors.
///
/// Covers unbalanced parentheses and configured buffer ceilings being hit
/// while running the shunting-yard algorithm.
pub mod convert_error;
/// Postfix evaluation errors.
///
/// Contains everything that can go wrong while reducing a postfix sequence to
/// a single number: missing operands, division by zero, leftover values and
/// operand stack overflow.
pub mod eval_error;
/// Whole-pipeline errors.
///
/// Wraps the stage errors so the stages can be chained with `?` and reported
/// from one place.
pub mod pipeline_error;

pub use convert_error::ConvertError;
pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use pipeline_error::PipelineError;
