use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by set literals, tensor literals, function
/// argument lists, and parameter lists. It repeatedly calls `parse_item` to
/// parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list (e.g., `]` or `)`).
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token)
    -> Result<Vec<T>, ParseError>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut items = Vec::new();
    if let Some((tok, _)) = tokens.peek()
       && tok == closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.peek() {
            Some((Token::Comma, _)) => {
                tokens.next();
            },
            Some((tok, _)) if tok == closing => {
                tokens.next();
                break;
            },
            Some((tok, col)) => {
                return Err(ParseError::ExpectedToken { expected: "',' or a closing delimiter",
                                                       found:    tok.describe(),
                                                       col:      *col, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { col: 0 }),
        }
    }
    Ok(items)
}

/// Parses one function parameter, which must be a plain identifier.
///
/// This function does not check for reserved identifiers; that happens when
/// the definition is evaluated.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at a parameter.
///
/// # Returns
/// A `String` containing the parameter name.
///
/// # Errors
/// Returns a `ParseError::InvalidParameter` if the next token is not an
/// identifier, or `UnexpectedEndOfInput` if the input ends.
pub(in crate::interpreter::parser) fn parse_parameter<'a, I>(tokens: &mut Peekable<I>)
                                                             -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(s), _)) => Ok(s.clone()),
        Some((tok, col)) => {
            Err(ParseError::InvalidParameter { token: tok.describe(),
                                               col:   *col, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { col: 0 }),
    }
}
