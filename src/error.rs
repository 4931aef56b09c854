use std::fmt::{Display, Formatter};

use codespan_reporting::diagnostic::{Diagnostic, Label};

/// A compile-time pattern error. Every variant carries the byte offset of the
/// offending token within the pattern source. Runtime entry points never
/// produce errors; they report failure through their return values instead.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum RegexError {
  IncompleteEscape(usize),   //< pattern ends in a lone backslash
  InvalidModifier(usize),    //< invalid `(?..)` group modifier
  MismatchedBraces(usize),   //< `{` with no closing `}`
  MismatchedBrackets(usize), //< `[` with no closing `]`
  MismatchedParens(usize),   //< `(` with no closing `)`
  TrailingTokens(usize),     //< tokens remain after a complete pattern
  UnexpectedToken(usize),    //< token cannot begin an atom
}

impl RegexError {

  /// The character position at which the error occurred.
  pub fn idx(&self) -> usize {
    *match self {
      | RegexError::IncompleteEscape(loc)
      | RegexError::InvalidModifier(loc)
      | RegexError::MismatchedBraces(loc)
      | RegexError::MismatchedBrackets(loc)
      | RegexError::MismatchedParens(loc)
      | RegexError::TrailingTokens(loc)
      | RegexError::UnexpectedToken(loc)   => loc,
    }
  }


  /// The human-readable description, without the location.
  pub fn message(&self) -> &'static str {
    match self {
      RegexError::IncompleteEscape(_)   => "incomplete escape sequence",
      RegexError::InvalidModifier(_)    => "invalid group modifier",
      RegexError::MismatchedBraces(_)   => "mismatched braces",
      RegexError::MismatchedBrackets(_) => "mismatched brackets",
      RegexError::MismatchedParens(_)   => "mismatched parentheses",
      RegexError::TrailingTokens(_)     => "unexpected tokens after the pattern",
      RegexError::UnexpectedToken(_)    => "unexpected token",
    }
  }


  /// Converts the error to a renderable diagnostic whose primary label covers
  /// the offending token in the pattern source.
  pub fn to_diagnostic<FileId>(&self, file: FileId) -> Diagnostic<FileId> {
    let label = Label::primary(file, self.idx()..self.idx() + 1)
                      .with_message("error occurred here");
    Diagnostic::error().with_message(self.message()).with_labels(vec![label])
  }

}

impl Display for RegexError {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{} at character {}", self.message(), self.idx())
  }
}

impl std::error::Error for RegexError {}
