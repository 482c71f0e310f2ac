use std::{iter::Peekable, rc::Rc};

use crate::{
    ast::{BinaryOperator, ComparisonOperator, Expr, LogicalOperator, SetOperator},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses comparison expressions, the loosest-binding level.
///
/// Handles left-associative chains of `<`, `>`, `<=`, `>=`, `==`, and `!=`.
///
/// The rule is: `comparison := additive (("<" | ">" | "<=" | ">=" | "==" |
/// "!=") additive)*`
///
/// # Parameters
/// - `tokens`: Token stream with column information.
///
/// # Returns
/// An `Expr::Comparison` tree representing the parsed expression.
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_additive(tokens)?;

    loop {
        if let Some((token, col)) = tokens.peek()
           && let Some(op) = token_to_comparison_operator(token)
        {
            let col = *col;
            tokens.next();

            let right = parse_additive(tokens)?;
            left = Expr::Comparison { left: Rc::new(left),
                                      op,
                                      right: Rc::new(right),
                                      col };
            continue;
        }
        break;
    }

    Ok(left)
}

/// Parses addition-level expressions.
///
/// Handles left-associative `+` and `-`, as well as the membership operator
/// `in`, which binds at the same level with the candidate element on the
/// left.
///
/// The rule is: `additive := multiplicative (("+" | "-" | "in")
/// multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with column information.
///
/// # Returns
/// A binary expression tree combining multiplication-level nodes.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_multiplicative(tokens)?;

    loop {
        match tokens.peek() {
            Some((Token::Plus, col)) => {
                let col = *col;
                tokens.next();

                let right = parse_multiplicative(tokens)?;
                left = Expr::BinaryOp { left: Rc::new(left),
                                        op: BinaryOperator::Add,
                                        right: Rc::new(right),
                                        col };
            },
            Some((Token::Minus, col)) => {
                let col = *col;
                tokens.next();

                let right = parse_multiplicative(tokens)?;
                left = Expr::BinaryOp { left: Rc::new(left),
                                        op: BinaryOperator::Sub,
                                        right: Rc::new(right),
                                        col };
            },
            Some((Token::In, col)) => {
                let col = *col;
                tokens.next();

                let container = parse_multiplicative(tokens)?;
                left = Expr::In { element: Rc::new(left),
                                  container: Rc::new(container),
                                  col };
            },
            _ => break,
        }
    }

    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative `*` and `/`.
///
/// The rule is: `multiplicative := power (("*" | "/") power)*`
///
/// # Parameters
/// - `tokens`: Token stream with column information.
///
/// # Returns
/// A binary expression tree combining power-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_power(tokens)?;

    loop {
        let (op, col) = match tokens.peek() {
            Some((Token::Star, col)) => (BinaryOperator::Mul, *col),
            Some((Token::Slash, col)) => (BinaryOperator::Div, *col),
            _ => break,
        };
        tokens.next();

        let right = parse_power(tokens)?;
        left = Expr::BinaryOp { left: Rc::new(left),
                                op,
                                right: Rc::new(right),
                                col };
    }

    Ok(left)
}

/// Parses exponentiation and modulo expressions.
///
/// Handles left-associative `^` and `%`, which bind tighter than
/// multiplication.
///
/// The rule is: `power := logical (("^" | "%") logical)*`
///
/// # Parameters
/// - `tokens`: Token stream with column information.
///
/// # Returns
/// A binary expression tree combining logical-level nodes.
pub fn parse_power<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_logical(tokens)?;

    loop {
        let (op, col) = match tokens.peek() {
            Some((Token::Caret, col)) => (BinaryOperator::Pow, *col),
            Some((Token::Percent, col)) => (BinaryOperator::Mod, *col),
            _ => break,
        };
        tokens.next();

        let right = parse_logical(tokens)?;
        left = Expr::BinaryOp { left: Rc::new(left),
                                op,
                                right: Rc::new(right),
                                col };
    }

    Ok(left)
}

/// Parses logical connectives.
///
/// Handles left-associative chains of `and` and `or`.
///
/// Grammar: `logical := set_op (("and" | "or") set_op)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// A binary expression tree using `Expr::Logical` nodes.
pub fn parse_logical<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_set_op(tokens)?;

    loop {
        let (op, col) = match tokens.peek() {
            Some((Token::And, col)) => (LogicalOperator::And, *col),
            Some((Token::Or, col)) => (LogicalOperator::Or, *col),
            _ => break,
        };
        tokens.next();

        let right = parse_set_op(tokens)?;
        left = Expr::Logical { left: Rc::new(left),
                               op,
                               right: Rc::new(right),
                               col };
    }

    Ok(left)
}

/// Parses set-algebra expressions, the tightest-binding binary level.
///
/// Handles left-associative chains of `union` and `intersection`.
///
/// Grammar: `set_op := unary (("union" | "intersection") unary)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// A binary expression tree using `Expr::SetOp` nodes.
pub fn parse_set_op<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_unary(tokens)?;

    loop {
        let (op, col) = match tokens.peek() {
            Some((Token::Union, col)) => (SetOperator::Union, *col),
            Some((Token::Intersection, col)) => (SetOperator::Intersection, *col),
            _ => break,
        };
        tokens.next();

        let right = parse_unary(tokens)?;
        left = Expr::SetOp { left: Rc::new(left),
                             op,
                             right: Rc::new(right),
                             col };
    }

    Ok(left)
}

/// Maps a token to its corresponding comparison operator.
///
/// Returns `None` for all tokens that are not comparisons.
///
/// # Example
/// ```
/// use ami::{
///     ast::ComparisonOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_comparison_operator},
/// };
///
/// assert_eq!(token_to_comparison_operator(&Token::Less),
///            Some(ComparisonOperator::Less));
/// ```
#[must_use]
pub const fn token_to_comparison_operator(token: &Token) -> Option<ComparisonOperator> {
    match token {
        Token::Less => Some(ComparisonOperator::Less),
        Token::Greater => Some(ComparisonOperator::Greater),
        Token::LessEqual => Some(ComparisonOperator::LessEqual),
        Token::GreaterEqual => Some(ComparisonOperator::GreaterEqual),
        Token::EqualEqual => Some(ComparisonOperator::Equal),
        Token::BangEqual => Some(ComparisonOperator::NotEqual),
        _ => None,
    }
}
