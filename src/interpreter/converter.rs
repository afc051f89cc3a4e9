use crate::{
    config::Limits,
    error::ConvertError,
    interpreter::{lexer::Token, stack::BoundedStack},
};

/// Result type returned by the infix-to-postfix converter.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Reorders infix tokens into postfix using unbounded buffers.
///
/// See [`to_postfix_with`] for the algorithm and error cases.
///
/// # Example
/// ```
/// use rpncalc::interpreter::{converter::to_postfix, lexer::tokenize};
///
/// let infix = tokenize("2 + 3 * 4").unwrap();
/// let postfix = to_postfix(&infix).unwrap();
/// let rendered: Vec<String> = postfix.iter().map(ToString::to_string).collect();
/// assert_eq!(rendered, ["2.00", "3.00", "4.00", "*", "+"]);
/// ```
pub fn to_postfix(tokens: &[Token]) -> ConvertResult<Vec<Token>> {
    to_postfix_with(tokens, &Limits::default())
}

/// Reorders infix tokens into postfix with the shunting-yard algorithm.
///
/// Numbers go straight to the output. An operator first pops every operator on
/// the stack whose precedence is greater than or equal to its own, which makes
/// all operators left-associative, then pushes itself. A `(` is pushed as a
/// barrier and a `)` unwinds the stack back to it. Whatever is left on the
/// stack at the end is flushed to the output.
///
/// # Parameters
/// - `tokens`: Infix tokens, as produced by the tokenizer.
/// - `limits`: Optional ceilings for the operator stack and the output.
///
/// # Returns
/// Every number and operator of the input in postfix order, without
/// parentheses.
///
/// # Errors
/// - `UnbalancedParens` if a `)` has no matching `(` or a `(` is never closed.
/// - `CapacityExceeded` if the operator stack or output exceeds its ceiling.
pub fn to_postfix_with(tokens: &[Token], limits: &Limits) -> ConvertResult<Vec<Token>> {
    let mut operators = BoundedStack::new("operator stack", limits.max_stack_depth);
    let mut output = BoundedStack::new("postfix output", limits.max_output_len);

    for &token in tokens {
        match token {
            Token::Number(_) => output.push(token)?,
            Token::Operator(op) => {
                while let Some(&Token::Operator(top)) = operators.peek()
                      && top.precedence() >= op.precedence()
                {
                    operators.pop();
                    log::trace!("'{op}' pops '{top}' to output");
                    output.push(Token::Operator(top))?;
                }
                operators.push(token)?;
            },
            Token::LeftParen => operators.push(token)?,
            Token::RightParen => loop {
                match operators.pop() {
                    Some(Token::LeftParen) => break,
                    Some(top) => output.push(top)?,
                    None => return Err(ConvertError::UnbalancedParens { paren: ')' }),
                }
            },
        }
    }

    while let Some(top) = operators.pop() {
        if top == Token::LeftParen {
            return Err(ConvertError::UnbalancedParens { paren: '(' });
        }
        output.push(top)?;
    }

    let postfix = output.into_vec();
    log::debug!("converted {} infix token(s) into {} postfix token(s)",
                tokens.len(),
                postfix.len());
    Ok(postfix)
}
