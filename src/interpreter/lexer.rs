use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `3.14`, `1'000` or `2.1e-10`.
    /// Single quotes may appear between digits as group separators.
    #[regex(r"[0-9][0-9']*(\.[0-9]+)?([eE][+-]?[0-9]+)?", parse_number)]
    Number(f64),
    /// Boolean literal tokens, such as `true`.
    #[token("true", parse_bool)]
    #[token("false", parse_bool)]
    Bool(bool),
    /// `null`
    #[token("null")]
    Null,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `and`
    #[token("and")]
    And,
    /// `or`
    #[token("or")]
    Or,
    /// `not`
    #[token("not")]
    Not,
    /// `in`
    #[token("in")]
    In,
    /// `union`
    #[token("union")]
    Union,
    /// `intersection`
    #[token("intersection")]
    Intersection,
    /// Identifier tokens; variable or function names such as `x` or `square`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `->`
    #[token("->")]
    Arrow,
    /// `+=`
    #[token("+=")]
    PlusAssign,
    /// `-=`
    #[token("-=")]
    MinusAssign,
    /// `*=`
    #[token("*=")]
    MulAssign,
    /// `/=`
    #[token("/=")]
    DivAssign,
    /// `^=`
    #[token("^=")]
    PowAssign,
    /// `%=`
    #[token("%=")]
    ModAssign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `%`
    #[token("%")]
    Percent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `=`
    #[token("=")]
    Equals,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `!`
    #[token("!")]
    Bang,
    /// Any character no other pattern recognizes. The lexer never fails;
    /// stray characters surface as parse errors instead.
    #[regex(r"[^ \t\r\n\f]", |lex| lex.slice().to_string(), priority = 1)]
    Unknown(String),
    /// Whitespace of any kind, including newlines.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

impl Token {
    /// Returns the source-level spelling of the token, used in error messages.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Bool(b) => b.to_string(),
            Self::Null => "null".to_string(),
            Self::If => "if".to_string(),
            Self::Else => "else".to_string(),
            Self::And => "and".to_string(),
            Self::Or => "or".to_string(),
            Self::Not => "not".to_string(),
            Self::In => "in".to_string(),
            Self::Union => "union".to_string(),
            Self::Intersection => "intersection".to_string(),
            Self::Identifier(name) | Self::Unknown(name) => name.clone(),
            Self::Arrow => "->".to_string(),
            Self::PlusAssign => "+=".to_string(),
            Self::MinusAssign => "-=".to_string(),
            Self::MulAssign => "*=".to_string(),
            Self::DivAssign => "/=".to_string(),
            Self::PowAssign => "^=".to_string(),
            Self::ModAssign => "%=".to_string(),
            Self::Plus => "+".to_string(),
            Self::Minus => "-".to_string(),
            Self::Star => "*".to_string(),
            Self::Slash => "/".to_string(),
            Self::Caret => "^".to_string(),
            Self::Percent => "%".to_string(),
            Self::LParen => "(".to_string(),
            Self::RParen => ")".to_string(),
            Self::Equals => "=".to_string(),
            Self::LBrace => "{".to_string(),
            Self::RBrace => "}".to_string(),
            Self::LBracket => "[".to_string(),
            Self::RBracket => "]".to_string(),
            Self::Comma => ",".to_string(),
            Self::Semicolon => ";".to_string(),
            Self::EqualEqual => "==".to_string(),
            Self::BangEqual => "!=".to_string(),
            Self::LessEqual => "<=".to_string(),
            Self::GreaterEqual => ">=".to_string(),
            Self::Less => "<".to_string(),
            Self::Greater => ">".to_string(),
            Self::Bang => "!".to_string(),
            Self::Ignored => String::new(),
        }
    }
}

/// Tokenizes `source` into `(Token, byte_offset)` pairs.
///
/// Tokenization is infallible: any character the grammar does not recognize
/// becomes a `Token::Unknown`, and a numeric literal whose value cannot be
/// parsed surfaces its slice the same way. The parser turns these into
/// syntax errors with a usable column.
///
/// # Example
/// ```
/// use ami::interpreter::lexer::{tokenize, Token};
///
/// let tokens = tokenize("1 + pi");
///
/// assert_eq!(tokens,
///            vec![(Token::Number(1.0), 0),
///                 (Token::Plus, 2),
///                 (Token::Identifier("pi".to_string()), 4)]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<(Token, usize)> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(item) = lexer.next() {
        let offset = lexer.span().start;
        match item {
            Ok(token) => tokens.push((token, offset)),
            Err(()) => tokens.push((Token::Unknown(lexer.slice().to_string()), offset)),
        }
    }

    tokens
}

/// Parses a numeric literal from the current token slice, stripping any
/// digit group separators first.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().replace('\'', "").parse().ok()
}
/// Parses a boolean literal from the current token slice (`true` or `false`).
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(true)` if the slice is `"true"`.
/// - `Some(false)` if the slice is `"false"`.
/// - `None` otherwise.
fn parse_bool(lex: &logos::Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exponent_marker_needs_digits() {
        let tokens = tokenize("2e");

        assert_eq!(tokens,
                   vec![(Token::Number(2.0), 0),
                        (Token::Identifier("e".to_string()), 1)]);
    }

    #[test]
    fn digit_separators_are_stripped() {
        let tokens = tokenize("1'000'000");

        assert_eq!(tokens, vec![(Token::Number(1_000_000.0), 0)]);
    }

    #[test]
    fn keywords_win_over_identifiers_only_exactly() {
        let tokens = tokenize("in inf intersection interval");

        assert_eq!(tokens,
                   vec![(Token::In, 0),
                        (Token::Identifier("inf".to_string()), 3),
                        (Token::Intersection, 7),
                        (Token::Identifier("interval".to_string()), 20)]);
    }

    #[test]
    fn unknown_characters_become_tokens_not_errors() {
        let tokens = tokenize("2 $ 3");

        assert_eq!(tokens,
                   vec![(Token::Number(2.0), 0),
                        (Token::Unknown("$".to_string()), 2),
                        (Token::Number(3.0), 4)]);
    }
}
