use crate::error::{ParseError, RuntimeError};

/// A fully rendered error report.
///
/// A `Diagnostic` pairs an error's category and message with the file label,
/// the source text, and the byte column where the error occurred. Its
/// `Display` implementation renders the report in the form:
///
/// ```text
/// at "<FILE>" col 'N', NAME:  MESSAGE
/// offending source line
///      ^
/// ```
///
/// The excerpt is the line of the source containing the offending byte, with
/// the caret positioned under it.
#[derive(Debug)]
pub struct Diagnostic {
    /// The diagnostic category (e.g. `SyntaxError`, `TypeError`, `Error`).
    pub name:    &'static str,
    /// The error message.
    pub message: String,
    /// The file label shown in the report.
    pub file:    String,
    /// The full source text the error was raised against.
    pub source:  String,
    /// The byte column of the offending token within `source`.
    pub column:  usize,
}

impl Diagnostic {
    /// Builds a diagnostic from a parse error.
    #[must_use]
    pub fn from_parse(error: &ParseError, file: &str, source: &str) -> Self {
        Self { name:    error.name(),
               message: error.to_string(),
               file:    file.to_string(),
               source:  source.to_string(),
               column:  error.column(), }
    }

    /// Builds a diagnostic from a runtime error.
    #[must_use]
    pub fn from_runtime(error: &RuntimeError, file: &str, source: &str) -> Self {
        Self { name:    error.name(),
               message: error.to_string(),
               file:    file.to_string(),
               source:  source.to_string(),
               column:  error.column(), }
    }

    /// Returns the source line containing `self.column` together with the
    /// caret offset within that line.
    fn excerpt(&self) -> (&str, usize) {
        let col = self.column.min(self.source.len());
        let start = self.source[..col].rfind('\n').map_or(0, |i| i + 1);
        let end = self.source[start..].find('\n')
                                      .map_or(self.source.len(), |i| start + i);

        (&self.source[start..end], col - start)
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (line, offset) = self.excerpt();

        writeln!(f,
                 "at \"<{}>\" col '{}', {}:  {}",
                 self.file, self.column, self.name, self.message)?;
        writeln!(f, "{line}")?;
        write!(f, "{}^", " ".repeat(offset))
    }
}

impl std::error::Error for Diagnostic {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caret_lands_under_offending_column() {
        let error = ParseError::UnexpectedToken { token: "@".to_string(),
                                                  col:   4, };
        let diagnostic = Diagnostic::from_parse(&error, "test", "2 + @");
        let rendered = diagnostic.to_string();

        assert_eq!(rendered,
                   "at \"<test>\" col '4', SyntaxError:  unexpected token '@'\n2 + @\n    ^");
    }

    #[test]
    fn excerpt_is_the_line_containing_the_offset() {
        let error = RuntimeError::UndeclaredIdentifier { name: "y".to_string(),
                                                         col:  11, };
        let diagnostic = Diagnostic::from_runtime(&error, "test", "x = 1;\nx + y");
        let (line, offset) = diagnostic.excerpt();

        assert_eq!(line, "x + y");
        assert_eq!(offset, 4);
    }
}
