use crate::{
    config::Limits,
    error::EvalError,
    interpreter::{lexer::Token, stack::BoundedStack},
    operator::Operator,
};

/// Result type used by the evaluator.
///
/// Evaluation either produces a value of type `T` or an `EvalError` describing
/// the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates a postfix sequence using an unbounded operand stack.
///
/// See [`evaluate_with`] for the rules.
///
/// # Example
/// ```
/// use rpncalc::{
///     error::EvalError,
///     interpreter::{evaluator::evaluate, lexer::Token},
///     operator::Operator,
/// };
///
/// // 8 3 - 2 -
/// let postfix = [Token::Number(8.0),
///                Token::Number(3.0),
///                Token::Operator(Operator::Sub),
///                Token::Number(2.0),
///                Token::Operator(Operator::Sub)];
/// assert_eq!(evaluate(&postfix).unwrap(), 3.0);
///
/// let postfix = [Token::Number(5.0), Token::Number(0.0), Token::Operator(Operator::Div)];
/// assert_eq!(evaluate(&postfix), Err(EvalError::DivisionByZero));
/// ```
pub fn evaluate(postfix: &[Token]) -> EvalResult<f64> {
    evaluate_with(postfix, &Limits::default())
}

/// Reduces a postfix sequence to a single number.
///
/// Numbers are pushed onto the operand stack. An operator pops its right
/// operand first and its left operand second, applies itself, and pushes the
/// result. Once every token is consumed exactly one value must remain.
///
/// # Parameters
/// - `postfix`: Tokens in postfix order.
/// - `limits`: Optional ceiling for the operand stack.
///
/// # Errors
/// - `MissingOperand` if an operator finds fewer than two values.
/// - `DivisionByZero` if the right operand of `/` is exactly zero.
/// - `UnexpectedParen` if the sequence still contains a parenthesis.
/// - `MalformedExpression` if zero or several values remain at the end.
/// - `CapacityExceeded` if the operand stack exceeds its ceiling.
pub fn evaluate_with(postfix: &[Token], limits: &Limits) -> EvalResult<f64> {
    let mut operands = BoundedStack::new("operand stack", limits.max_stack_depth);

    for &token in postfix {
        match token {
            Token::Number(value) => operands.push(value)?,
            Token::Operator(operator) => {
                let (Some(right), Some(left)) = (operands.pop(), operands.pop()) else {
                    return Err(EvalError::MissingOperand { operator });
                };
                operands.push(apply(operator, left, right)?)?;
            },
            Token::LeftParen => return Err(EvalError::UnexpectedParen { paren: '(' }),
            Token::RightParen => return Err(EvalError::UnexpectedParen { paren: ')' }),
        }
    }

    let remaining = operands.len();
    match operands.pop() {
        Some(value) if remaining == 1 => {
            log::debug!("evaluated {} postfix token(s) to {value}", postfix.len());
            Ok(value)
        },
        _ => Err(EvalError::MalformedExpression { remaining }),
    }
}

/// Applies a single operator to two operands.
///
/// Division checks the divisor for exact equality with zero, so `-0.0` is
/// rejected as well while tiny non-zero divisors are allowed.
#[allow(clippy::float_cmp)]
fn apply(operator: Operator, left: f64, right: f64) -> EvalResult<f64> {
    Ok(match operator {
           Operator::Add => left + right,
           Operator::Sub => left - right,
           Operator::Mul => left * right,
           Operator::Div => {
               if right == 0.0 {
                   return Err(EvalError::DivisionByZero);
               }
               left / right
           },
       })
}
