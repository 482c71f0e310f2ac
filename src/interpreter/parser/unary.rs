use std::{iter::Peekable, rc::Rc};

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression, parse_if},
            utils::{parse_comma_separated, parse_parameter},
        },
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`   (numeric negation)
/// - `not` (logical not)
///
/// A unary minus is only legal when the next token can start a negatable
/// factor: a number, boolean, identifier, or parenthesized expression.
/// Anything else (including a second bare `-`) is a syntax error, so an
/// operator with a missing operand is never silently accepted.
///
/// Grammar:
/// ```text
///     unary := ("-" | "not") unary
///            | primary postfix*
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An `Expr::Negate`/`Expr::Not`, or a primary expression possibly followed
/// by postfixes.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Minus, col)) => {
            let col = *col;
            tokens.next();

            match tokens.peek() {
                Some((Token::Number(_) | Token::Bool(_) | Token::Identifier(_) | Token::LParen,
                      _)) => {
                    let expr = parse_unary(tokens)?;
                    Ok(Expr::Negate { expr: Rc::new(expr),
                                      col })
                },
                Some((token, col)) => {
                    Err(ParseError::InvalidUnaryOperand { token: token.describe(),
                                                          col:   *col, })
                },
                None => Err(ParseError::UnexpectedEndOfInput { col }),
            }
        },
        Some((Token::Not, col)) => {
            let col = *col;
            tokens.next();

            let expr = parse_unary(tokens)?;
            Ok(Expr::Not { expr: Rc::new(expr),
                           col })
        },
        _ => {
            let primary = parse_primary(tokens)?;
            parse_postfix(tokens, primary)
        },
    }
}

/// Applies postfix operators to an already-parsed factor.
///
/// Postfix operators are indexing (`expr[index]`) and factorial (`expr!`),
/// both of which may be chained.
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `expr`: The factor the postfixes attach to.
///
/// # Returns
/// The expression with postfix operators applied outermost.
fn parse_postfix<'a, I>(tokens: &mut Peekable<I>, mut expr: Expr) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    loop {
        match tokens.peek() {
            Some((Token::LBracket, col)) => {
                let col = *col;
                tokens.next();

                let index = parse_expression(tokens)?;
                match tokens.next() {
                    Some((Token::RBracket, _)) => {},
                    Some((token, col)) => {
                        return Err(ParseError::ExpectedToken { expected: "']' after index",
                                                               found:    token.describe(),
                                                               col:      *col, });
                    },
                    None => return Err(ParseError::UnexpectedEndOfInput { col }),
                }

                expr = Expr::Index { target: Rc::new(expr),
                                     index: Rc::new(index),
                                     col };
            },
            Some((Token::Bang, col)) => {
                let col = *col;
                tokens.next();

                expr = Expr::Factorial { expr: Rc::new(expr),
                                         col };
            },
            _ => break,
        }
    }

    Ok(expr)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - numeric, boolean, and `null` literals
/// - identifiers, assignments, function calls, and function definitions
/// - parenthesized expressions
/// - set literals (`{ ... }`)
/// - interval and vector literals (`[ ... ]`, `] ... [`)
/// - `if` expressions
///
/// This function does not handle unary operators or postfix operators.
/// It dispatches to specialized parsing functions depending on the leading
/// token.
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// The parsed factor.
///
/// # Errors
/// - `UnexpectedToken` for tokens that cannot start a factor, including
///   characters the lexer did not recognize.
/// - `UnexpectedEndOfInput` if the stream is exhausted.
fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Number(value), col)) => {
            let expr = Expr::Number { value: *value,
                                      col:   *col, };
            tokens.next();
            Ok(expr)
        },
        Some((Token::Bool(value), col)) => {
            let expr = Expr::Bool { value: *value,
                                    col:   *col, };
            tokens.next();
            Ok(expr)
        },
        Some((Token::Null, col)) => {
            let expr = Expr::Null { col: *col };
            tokens.next();
            Ok(expr)
        },
        Some((Token::If, col)) => {
            let col = *col;
            tokens.next();
            parse_if(tokens, col)
        },
        Some((Token::LParen, col)) => {
            let col = *col;
            tokens.next();

            let expr = parse_expression(tokens)?;
            match tokens.next() {
                Some((Token::RParen, _)) => Ok(expr),
                Some((token, col)) => {
                    Err(ParseError::ExpectedToken { expected: "')'",
                                                    found:    token.describe(),
                                                    col:      *col, })
                },
                None => Err(ParseError::UnexpectedEndOfInput { col }),
            }
        },
        Some((Token::LBrace, _)) => parse_set_literal(tokens),
        Some((Token::LBracket | Token::RBracket, _)) => parse_bracket_literal(tokens),
        Some((Token::Identifier(_), _)) => parse_identifier_factor(tokens),
        Some((token, col)) => {
            Err(ParseError::UnexpectedToken { token: token.describe(),
                                              col:   *col, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { col: 0 }),
    }
}

/// Parses a set literal of the form `{ expr1, expr2, ..., exprN }`.
///
/// An empty set `{}` is accepted.
///
/// Grammar: `set := "{" (expression ("," expression)*)? "}"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `{`.
///
/// # Returns
/// An `Expr::SetLiteral` with its list of element expressions.
fn parse_set_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let col = match tokens.next() {
        Some((Token::LBrace, col)) => *col,
        Some((token, col)) => {
            return Err(ParseError::ExpectedToken { expected: "'{'",
                                                   found:    token.describe(),
                                                   col:      *col, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { col: 0 }),
    };

    let elements = parse_comma_separated(tokens, parse_expression, &Token::RBrace)?;

    Ok(Expr::SetLiteral { elements: elements.into_iter().map(Rc::new).collect(),
                          col })
}

/// Parses a bracket literal, which is either an interval or a vector/matrix.
///
/// The opening bracket decides part of the story: `]` always opens an
/// interval that excludes its lower endpoint. After `[`, the first separator
/// disambiguates: a `;` makes it an interval that includes its lower
/// endpoint, while a `,` or an immediate `]` makes it a tensor literal.
/// The closing bracket of an interval records whether the upper endpoint is
/// included: `]` includes it, `[` excludes it.
///
/// Grammar:
/// ```text
///     interval := ("[" | "]") expression ";" expression ("]" | "[")
///     tensor   := "[" (expression ("," expression)*)? "]"
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `[` or `]`.
///
/// # Returns
/// An `Expr::Interval` or `Expr::TensorLiteral`.
fn parse_bracket_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (min_strict, col) = match tokens.next() {
        Some((Token::LBracket, col)) => (false, *col),
        Some((Token::RBracket, col)) => (true, *col),
        Some((token, col)) => {
            return Err(ParseError::ExpectedToken { expected: "'[' or ']'",
                                                   found:    token.describe(),
                                                   col:      *col, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { col: 0 }),
    };

    if !min_strict && let Some((Token::RBracket, _)) = tokens.peek() {
        tokens.next();
        return Ok(Expr::TensorLiteral { elements: Vec::new(),
                                        col });
    }

    let first = parse_expression(tokens)?;

    match tokens.peek() {
        Some((Token::Semicolon, _)) => {
            tokens.next();

            let max = parse_expression(tokens)?;
            let max_strict = parse_interval_closer(tokens, col)?;

            Ok(Expr::Interval { min: Rc::new(first),
                                min_strict,
                                max: Rc::new(max),
                                max_strict,
                                col })
        },
        Some((Token::Comma, _)) if !min_strict => {
            tokens.next();

            let rest = parse_comma_separated(tokens, parse_expression, &Token::RBracket)?;
            let mut elements = vec![Rc::new(first)];
            elements.extend(rest.into_iter().map(Rc::new));

            Ok(Expr::TensorLiteral { elements,
                                     col })
        },
        Some((Token::RBracket, _)) if !min_strict => {
            tokens.next();
            Ok(Expr::TensorLiteral { elements: vec![Rc::new(first)],
                                     col })
        },
        Some((token, col)) => {
            let expected = if min_strict { "';' in interval" } else { "';', ',' or ']'" };
            Err(ParseError::ExpectedToken { expected,
                                            found: token.describe(),
                                            col: *col })
        },
        None => Err(ParseError::UnexpectedEndOfInput { col }),
    }
}

/// Parses the closing bracket of an interval and returns whether the upper
/// endpoint is excluded.
fn parse_interval_closer<'a, I>(tokens: &mut Peekable<I>, col: usize) -> ParseResult<bool>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::RBracket, _)) => Ok(false),
        Some((Token::LBracket, _)) => Ok(true),
        Some((token, col)) => {
            Err(ParseError::ExpectedToken { expected: "']' or '[' to close interval",
                                            found:    token.describe(),
                                            col:      *col, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { col }),
    }
}

/// Parses a factor that begins with an identifier.
///
/// Depending on what follows, this becomes a plain variable reference, an
/// assignment (`x = ...`), a compound assignment (`x += ...`), a function
/// call (`f(args)`), or a function definition (`f(params) -> body`).
///
/// Calls and definitions both start with `name(`, so the parser clones the
/// token cursor, skips to the matching `)` with a depth counter, and checks
/// whether an `->` follows. The clone is dropped afterwards, and the real
/// cursor never moves during the scan.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
///
/// # Returns
/// The parsed identifier factor.
fn parse_identifier_factor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, col) = match tokens.next() {
        Some((Token::Identifier(name), col)) => (name.clone(), *col),
        Some((token, col)) => {
            return Err(ParseError::ExpectedToken { expected: "identifier",
                                                   found:    token.describe(),
                                                   col:      *col, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { col: 0 }),
    };

    match tokens.peek() {
        Some((Token::Equals, _)) => {
            tokens.next();

            let value = parse_expression(tokens)?;
            Ok(Expr::Assignment { name,
                                  value: Rc::new(value),
                                  col })
        },
        Some((Token::LParen, _)) => {
            tokens.next();

            if definition_follows(tokens, col)? {
                parse_function_definition(tokens, name, col)
            } else {
                let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
                Ok(Expr::FunctionCall { name,
                                        arguments: arguments.into_iter().map(Rc::new).collect(),
                                        col })
            }
        },
        Some((token, _)) => {
            if let Some(op) = compound_operator(token) {
                tokens.next();

                let value = parse_expression(tokens)?;
                return Ok(Expr::CompoundAssignment { name,
                                                     op,
                                                     value: Rc::new(value),
                                                     col });
            }
            Ok(Expr::Identifier { name,
                                  col })
        },
        None => Ok(Expr::Identifier { name,
                                      col }),
    }
}

/// Parses the remainder of a function definition, starting at the parameter
/// list. The opening `(` has already been consumed.
///
/// Grammar: `definition := identifier "(" (param ("," param)*)? ")" "->"
/// expression`
fn parse_function_definition<'a, I>(tokens: &mut Peekable<I>,
                                    name: String,
                                    col: usize)
                                    -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let params = parse_comma_separated(tokens, parse_parameter, &Token::RParen)?;

    match tokens.next() {
        Some((Token::Arrow, _)) => {},
        Some((token, col)) => {
            return Err(ParseError::ExpectedToken { expected: "'->' after parameter list",
                                                   found:    token.describe(),
                                                   col:      *col, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { col }),
    }

    let body = parse_expression(tokens)?;

    Ok(Expr::FunctionDef { name,
                           params,
                           body: Rc::new(body),
                           col })
}

/// Looks ahead to determine whether the parenthesized group starting at the
/// current position is followed by `->`, which distinguishes a function
/// definition from a function call.
///
/// The scan runs on a clone of the cursor and stops at the matching `)`;
/// nested parentheses are tracked with a depth counter.
///
/// # Errors
/// - `UnexpectedEndOfInput` if the parenthesis is never closed.
fn definition_follows<'a, I>(tokens: &Peekable<I>, col: usize) -> ParseResult<bool>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut lookahead = tokens.clone();
    let mut depth = 1_usize;

    while depth > 0 {
        match lookahead.next() {
            Some((Token::LParen, _)) => depth += 1,
            Some((Token::RParen, _)) => depth -= 1,
            Some(_) => {},
            None => return Err(ParseError::UnexpectedEndOfInput { col }),
        }
    }

    Ok(matches!(lookahead.next(), Some((Token::Arrow, _))))
}

/// Maps a token to the binary operator of its compound-assignment form.
///
/// Returns `None` for all tokens that are not compound assignments.
#[must_use]
const fn compound_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::PlusAssign => Some(BinaryOperator::Add),
        Token::MinusAssign => Some(BinaryOperator::Sub),
        Token::MulAssign => Some(BinaryOperator::Mul),
        Token::DivAssign => Some(BinaryOperator::Div),
        Token::PowAssign => Some(BinaryOperator::Pow),
        Token::ModAssign => Some(BinaryOperator::Mod),
        _ => None,
    }
}
