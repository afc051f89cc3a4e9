//! # rpncalc
//!
//! rpncalc is an arithmetic expression calculator written in Rust.
//! It tokenizes an infix expression, converts it to postfix with the
//! shunting-yard algorithm, evaluates the postfix sequence and lowers it into
//! a listing for a toy stack machine.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

pub use crate::interpreter::{
    converter::to_postfix, emitter::emit, evaluator::evaluate, lexer::tokenize,
};
use crate::{
    config::Limits,
    error::PipelineError,
    interpreter::{
        converter::to_postfix_with,
        emitter::{Instruction, render_listing},
        evaluator::evaluate_with,
        lexer::Token,
    },
    util::format::format_tokens,
};

/// Buffer ceilings for the converter and evaluator.
///
/// Every buffer grows dynamically by default. Limits only exist so that callers
/// can bound memory use on untrusted input.
pub mod config;
/// Provides unified error types for every pipeline stage.
///
/// Each stage has its own error enum; `PipelineError` wraps them so that a
/// failure anywhere aborts the expression and can be reported in one place.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, converter, evaluator).
/// - Attaches positions and offending symbols for context.
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Orchestrates the stages of the pipeline.
///
/// # Responsibilities
/// - Tokenizer, shunting-yard converter, postfix evaluator and assembly
///   emitter.
/// - The bounded stack type they share.
pub mod interpreter;
/// The four arithmetic operators and their precedence.
pub mod operator;
/// Numeric conversion and formatting helpers.
pub mod util;

/// Everything the pipeline produces for one expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Tokens in source order.
    pub infix:   Vec<Token>,
    /// Tokens in postfix order.
    pub postfix: Vec<Token>,
    /// The numeric result.
    pub value:   f64,
    /// Stack-machine instructions for the postfix sequence.
    pub program: Vec<Instruction>,
}

impl std::fmt::Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Infix: {}", format_tokens(&self.infix))?;
        writeln!(f, "Postfix: {}", format_tokens(&self.postfix))?;
        writeln!(f, "Result: {}", self.value)?;
        write!(f, "{}", render_listing(&self.program))
    }
}

/// Runs the full pipeline on a single expression.
///
/// The expression is tokenized, converted to postfix, evaluated, and the
/// postfix sequence is lowered into stack-machine instructions. The first
/// failing stage aborts the run; nothing is carried over between calls.
///
/// # Errors
/// Returns the error of the first stage that fails.
///
/// # Examples
/// ```
/// use rpncalc::{config::Limits, error::PipelineError, evaluate_expression};
///
/// let evaluation = evaluate_expression("(2 + 3) * 4", &Limits::default()).unwrap();
/// assert_eq!(evaluation.value, 20.0);
///
/// // Unary minus is not supported: the leading '-' has no left operand.
/// let res = evaluate_expression("-3 + 4", &Limits::default());
/// assert!(matches!(res, Err(PipelineError::Eval(_))));
/// ```
pub fn evaluate_expression(source: &str, limits: &Limits) -> Result<Evaluation, PipelineError> {
    let infix = tokenize(source)?;
    let postfix = to_postfix_with(&infix, limits)?;
    let value = evaluate_with(&postfix, limits)?;
    let program = emit(&postfix);

    Ok(Evaluation { infix,
                    postfix,
                    value,
                    program })
}

/// Runs the pipeline once per non-blank line of a script.
///
/// Each line is an independent expression: a failure is recorded for its line
/// and evaluation continues with the next one. Blank lines are skipped.
///
/// # Returns
/// `(line number, outcome)` pairs in script order, with 1-based line numbers.
///
/// # Examples
/// ```
/// use rpncalc::{config::Limits, evaluate_lines};
///
/// let outcomes = evaluate_lines("1 + 1\n\n5 / 0\n2 * 3", &Limits::default());
/// let lines: Vec<usize> = outcomes.iter().map(|(line, _)| *line).collect();
/// assert_eq!(lines, [1, 3, 4]);
/// assert!(outcomes[1].1.is_err());
/// assert_eq!(outcomes[2].1.as_ref().unwrap().value, 6.0);
/// ```
#[must_use]
pub fn evaluate_lines(script: &str,
                      limits: &Limits)
                      -> Vec<(usize, Result<Evaluation, PipelineError>)> {
    script.lines()
          .enumerate()
          .filter(|(_, line)| !line.trim().is_empty())
          .map(|(index, line)| {
              log::info!("line {}: {line}", index + 1);
              (index + 1, evaluate_expression(line, limits))
          })
          .collect()
}
