use std::{iter::Peekable, rc::Rc};

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_comparison},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole program: a sequence of statements separated by semicolons.
///
/// Empty statements (stray or trailing semicolons) are skipped. Each
/// statement must consume its tokens entirely up to the next semicolon or
/// the end of input; anything left over is a syntax error.
///
/// Grammar: `program := (expression? ";")* expression?`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, col)` pairs.
///
/// # Returns
/// The parsed statements in source order.
///
/// # Errors
/// Returns a `ParseError` if any statement fails to parse or leaves tokens
/// behind.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Rc<Expr>>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statements = Vec::new();

    loop {
        while let Some((Token::Semicolon, _)) = tokens.peek() {
            tokens.next();
        }
        if tokens.peek().is_none() {
            break;
        }

        statements.push(Rc::new(parse_expression(tokens)?));

        match tokens.peek() {
            Some((Token::Semicolon, _)) | None => {},
            Some((token, col)) => {
                return Err(ParseError::UnexpectedTrailingTokens { token: token.describe(),
                                                                  col:   *col, });
            },
        }
    }

    Ok(statements)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the loosest-binding level, comparison, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := comparison`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, col)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_comparison(tokens)
}

/// Parses an `if` expression with a parenthesized condition and optional
/// `else`.
///
/// Syntax:
/// ```text
///     if (<condition>) <then_expr>
///     if (<condition>) <then_expr> else <else_expr>
/// ```
/// A missing `else` branch makes the expression evaluate to `null` when the
/// condition is false.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `if` keyword.
/// - `col`: Byte column of the `if` token.
///
/// # Returns
/// An `Expr::IfExpr` node representing the full conditional expression.
///
/// # Errors
/// - `ExpectedToken` if the parentheses around the condition are missing.
/// - Propagates any errors from sub-expression parsing.
pub fn parse_if<'a, I>(tokens: &mut Peekable<I>, col: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::LParen, _)) => {},
        Some((token, col)) => {
            return Err(ParseError::ExpectedToken { expected: "'(' after 'if'",
                                                   found:    token.describe(),
                                                   col:      *col, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { col }),
    }

    let condition = parse_expression(tokens)?;

    match tokens.next() {
        Some((Token::RParen, _)) => {},
        Some((token, col)) => {
            return Err(ParseError::ExpectedToken { expected: "')' after if condition",
                                                   found:    token.describe(),
                                                   col:      *col, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { col }),
    }

    let then_branch = parse_expression(tokens)?;

    let else_branch = if let Some((Token::Else, _)) = tokens.peek() {
        tokens.next();
        Some(Rc::new(parse_expression(tokens)?))
    } else {
        None
    };

    Ok(Expr::IfExpr { condition: Rc::new(condition),
                      then_branch: Rc::new(then_branch),
                      else_branch,
                      col })
}
