use rpncalc::{
    config::Limits,
    emit,
    error::{ConvertError, EvalError, LexError},
    evaluate,
    interpreter::{
        converter::to_postfix_with,
        emitter::{Instruction, render_listing},
        evaluator::evaluate_with,
        lexer::Token,
        stack::{BoundedStack, Overflow},
    },
    operator::Operator,
    to_postfix, tokenize,
    util::format::format_tokens,
};

const ADD: Token = Token::Operator(Operator::Add);
const SUB: Token = Token::Operator(Operator::Sub);
const MUL: Token = Token::Operator(Operator::Mul);
const DIV: Token = Token::Operator(Operator::Div);

fn postfix_of(src: &str) -> String {
    let infix = tokenize(src).unwrap_or_else(|e| panic!("{src:?} failed to tokenize: {e}"));
    let postfix = to_postfix(&infix).unwrap_or_else(|e| panic!("{src:?} failed to convert: {e}"));
    format_tokens(&postfix)
}

#[test]
fn tokenizer_recognises_every_token_kind() {
    assert_eq!(tokenize("1+2-3*4/(5)").unwrap(),
               [Token::Number(1.0),
                ADD,
                Token::Number(2.0),
                SUB,
                Token::Number(3.0),
                MUL,
                Token::Number(4.0),
                DIV,
                Token::LeftParen,
                Token::Number(5.0),
                Token::RightParen]);
}

#[test]
fn tokenizer_number_forms() {
    assert_eq!(tokenize("3.25").unwrap(), [Token::Number(3.25)]);
    assert_eq!(tokenize(".5").unwrap(), [Token::Number(0.5)]);
    assert_eq!(tokenize("7.").unwrap(), [Token::Number(7.0)]);
    assert_eq!(tokenize("007").unwrap(), [Token::Number(7.0)]);
    // A second point starts a new literal.
    assert_eq!(tokenize("1.2.5").unwrap(), [Token::Number(1.2), Token::Number(0.5)]);
}

#[test]
fn tokenizer_reads_exponents() {
    assert_eq!(tokenize("1e5").unwrap(), [Token::Number(100_000.0)]);
    assert_eq!(tokenize("3E+2").unwrap(), [Token::Number(300.0)]);
    assert_eq!(tokenize(".5e1").unwrap(), [Token::Number(5.0)]);
    assert_eq!(tokenize("2.e-1").unwrap(), [Token::Number(0.2)]);
    assert_eq!(tokenize("2e3*4").unwrap(), [Token::Number(2000.0), MUL, Token::Number(4.0)]);
}

#[test]
fn tokenizer_skips_whitespace() {
    assert_eq!(tokenize(" \t1 \t+\t 2 ").unwrap(), [Token::Number(1.0), ADD, Token::Number(2.0)]);
    assert_eq!(tokenize("1\u{b}+\u{c}2\r\n").unwrap(), [Token::Number(1.0), ADD, Token::Number(2.0)]);
    assert!(tokenize("   ").unwrap().is_empty());
    assert!(tokenize("").unwrap().is_empty());
}

#[test]
fn tokenizer_does_not_check_adjacency() {
    assert_eq!(tokenize("1 2 + +").unwrap(), [Token::Number(1.0), Token::Number(2.0), ADD, ADD]);
}

#[test]
fn tokenizer_rejects_unknown_characters() {
    assert_eq!(tokenize("3 + $"), Err(LexError::UnexpectedChar { ch: '$', position: 4 }));
    assert_eq!(tokenize("1 . 2"), Err(LexError::UnexpectedChar { ch: '.', position: 2 }));
    // An exponent needs digits.
    assert!(matches!(tokenize("1e+"), Err(LexError::UnexpectedChar { .. })));
    assert_eq!(tokenize("2 ** 3").unwrap(), [Token::Number(2.0), MUL, MUL, Token::Number(3.0)]);
}

#[test]
fn tokenizer_positions_count_characters() {
    assert_eq!(tokenize("é"), Err(LexError::UnexpectedChar { ch: 'é', position: 0 }));
    assert_eq!(tokenize("(1)ü"), Err(LexError::UnexpectedChar { ch: 'ü', position: 3 }));
}

#[test]
fn converter_orders_by_precedence() {
    assert_eq!(postfix_of("2 + 3 * 4"), "2.00 3.00 4.00 * +");
    assert_eq!(postfix_of("2 * 3 + 4"), "2.00 3.00 * 4.00 +");
    assert_eq!(postfix_of("(2 + 3) * 4"), "2.00 3.00 + 4.00 *");
    assert_eq!(postfix_of("3 + 4 * (2 - 1) / 5"), "3.00 4.00 2.00 1.00 - * 5.00 / +");
}

#[test]
fn converter_is_left_associative() {
    assert_eq!(postfix_of("8 - 3 - 2"), "8.00 3.00 - 2.00 -");
    assert_eq!(postfix_of("8 / 4 * 2"), "8.00 4.00 / 2.00 *");
    assert_eq!(postfix_of("1 + 2 - 3 + 4"), "1.00 2.00 + 3.00 - 4.00 +");
}

#[test]
fn converter_keeps_operand_order() {
    for op in ["+", "-", "*", "/"] {
        assert_eq!(postfix_of(&format!("3 {op} 4")), format!("3.00 4.00 {op}"));
    }
}

#[test]
fn converter_drops_parentheses() {
    let postfix = to_postfix(&tokenize("((1) + ((2)))").unwrap()).unwrap();
    assert_eq!(postfix, [Token::Number(1.0), Token::Number(2.0), ADD]);
}

#[test]
fn converter_rejects_unbalanced_parentheses() {
    let unbalanced = |src: &str| to_postfix(&tokenize(src).unwrap()).unwrap_err();

    assert_eq!(unbalanced("(1 + 2"), ConvertError::UnbalancedParens { paren: '(' });
    assert_eq!(unbalanced("1 + 2)"), ConvertError::UnbalancedParens { paren: ')' });
    assert_eq!(unbalanced("((1) + 2"), ConvertError::UnbalancedParens { paren: '(' });
    assert_eq!(unbalanced("(1))"), ConvertError::UnbalancedParens { paren: ')' });
}

#[test]
fn converter_honours_stack_ceiling() {
    let infix = tokenize("((1))").unwrap();

    assert!(to_postfix_with(&infix, &Limits::default().with_stack_depth(2)).is_ok());
    assert_eq!(to_postfix_with(&infix, &Limits::default().with_stack_depth(1)),
               Err(ConvertError::CapacityExceeded { buffer: "operator stack",
                                                    limit:  1, }));
}

#[test]
fn evaluator_pops_right_operand_first() {
    assert_eq!(evaluate(&[Token::Number(10.0), Token::Number(4.0), SUB]).unwrap(), 6.0);
    assert_eq!(evaluate(&[Token::Number(1.0), Token::Number(4.0), DIV]).unwrap(), 0.25);
}

#[test]
fn evaluator_errors() {
    assert_eq!(evaluate(&[Token::Number(1.0), ADD]),
               Err(EvalError::MissingOperand { operator: Operator::Add }));
    assert_eq!(evaluate(&[MUL]), Err(EvalError::MissingOperand { operator: Operator::Mul }));
    assert_eq!(evaluate(&[Token::Number(1.0), Token::Number(-0.0), DIV]),
               Err(EvalError::DivisionByZero));
    assert_eq!(evaluate(&[]), Err(EvalError::MalformedExpression { remaining: 0 }));
    assert_eq!(evaluate(&[Token::Number(1.0), Token::Number(2.0)]),
               Err(EvalError::MalformedExpression { remaining: 2 }));
    assert_eq!(evaluate(&[Token::Number(1.0), Token::LeftParen]),
               Err(EvalError::UnexpectedParen { paren: '(' }));
}

#[test]
fn evaluator_allows_tiny_divisors() {
    let value = evaluate(&[Token::Number(1.0), Token::Number(1e-300), DIV]).unwrap();
    assert!(value > 1e299);
}

#[test]
fn evaluator_honours_stack_ceiling() {
    let postfix = [Token::Number(1.0), Token::Number(2.0), Token::Number(3.0), ADD, ADD];

    assert_eq!(evaluate_with(&postfix, &Limits::default().with_stack_depth(3)).unwrap(), 6.0);
    assert_eq!(evaluate_with(&postfix, &Limits::default().with_stack_depth(2)),
               Err(EvalError::CapacityExceeded { buffer: "operand stack",
                                                 limit:  2, }));
}

#[test]
fn emitter_follows_postfix_order() {
    let postfix = to_postfix(&tokenize("3 + 4 * (2 - 1) / 5").unwrap()).unwrap();
    assert_eq!(emit(&postfix),
               [Instruction::Push(3),
                Instruction::Push(4),
                Instruction::Push(2),
                Instruction::Push(1),
                Instruction::Sub,
                Instruction::Mul,
                Instruction::Push(5),
                Instruction::Div,
                Instruction::Add]);
}

#[test]
fn emitter_truncates_operands() {
    assert_eq!(emit(&[Token::Number(2.99)]), [Instruction::Push(2)]);
    assert_eq!(emit(&[Token::Number(0.5)]), [Instruction::Push(0)]);
    assert_eq!(emit(&[Token::Number(-7.9)]), [Instruction::Push(-7)]);
}

#[test]
fn emitter_does_not_fold_constants() {
    assert_eq!(emit(&[Token::Number(1.0), Token::Number(2.0), ADD]),
               [Instruction::Push(1), Instruction::Push(2), Instruction::Add]);
}

#[test]
fn listing_has_one_instruction_per_line() {
    let listing = render_listing(&[Instruction::Push(6),
                                   Instruction::Push(3),
                                   Instruction::Div,
                                   Instruction::Push(1),
                                   Instruction::Sub]);
    assert_eq!(listing, "PUSH 6\nPUSH 3\nDIV\nPUSH 1\nSUB\n; end of listing");
    assert_eq!(render_listing(&[]), "; end of listing");
}

#[test]
fn bounded_stack_rejects_push_at_ceiling() {
    let mut stack = BoundedStack::new("test stack", Some(2));
    assert!(stack.push(1).is_ok());
    assert!(stack.push(2).is_ok());
    assert_eq!(stack.push(3),
               Err(Overflow { buffer: "test stack",
                              limit:  2, }));
    assert_eq!(stack.len(), 2);
    assert_eq!(stack.peek(), Some(&2));
    assert_eq!(stack.pop(), Some(2));
    assert!(stack.push(4).is_ok());
    assert_eq!(stack.into_vec(), [1, 4]);
}

#[test]
fn bounded_stack_without_ceiling_grows() {
    let mut stack = BoundedStack::new("test stack", None);
    for i in 0..10_000 {
        assert!(stack.push(i).is_ok());
    }
    assert_eq!(stack.len(), 10_000);
    assert!(!stack.is_empty());
}

#[test]
fn error_messages() {
    assert_eq!(LexError::UnexpectedChar { ch: '$', position: 4 }.to_string(),
               "Error at column 5: Unexpected character '$'.");
    assert_eq!(ConvertError::UnbalancedParens { paren: '(' }.to_string(),
               "Error: Unbalanced parentheses: '(' is never closed.");
    assert_eq!(ConvertError::UnbalancedParens { paren: ')' }.to_string(),
               "Error: Unbalanced parentheses: ')' has no matching '('.");
    assert_eq!(EvalError::MissingOperand { operator: Operator::Sub }.to_string(),
               "Error: Missing operand for '-'.");
    assert_eq!(EvalError::DivisionByZero.to_string(), "Error: Division by zero.");
}
