/*!

  Recursive-descent parsing of the token stream into an `Ast`. Operator precedence, loosest to
  tightest: alternation, concatenation, quantification, atom.

  ```text
  alternation   := concatenation ( '|' concatenation )*
  concatenation := quantifier+
  quantifier    := atom ( '*' | '+' | '?' | '{' n (',' m)? '}' )?
  atom          := LITERAL | '.' | group | class | escape | '^' | '$'
  group         := '(' ( '?' ( ':' | '=' | '!' ) )? alternation ')'
  class         := '[' '^'? class_item* ']'
  ```

  Capturing groups are numbered from 1 in the order their opening parenthesis appears. The
  `(?:...)` form parses its body without a capturing wrapper. The lookahead forms `(?=...)` and
  `(?!...)` are accepted, but their bodies are emitted inline into the surrounding program:
  this engine has no zero-width assertion semantics, so `(?=a)a` requires two `a`s of input.

*/

use crate::ast::Ast;
use crate::classes::{ByteClass, ClassPred, Pred};
use crate::error::RegexError;
use crate::lexer::{Token, TokenKind};
use crate::limits::REPEAT_UNBOUNDED;


pub struct Parser {
  tokens        : Vec<Token>, //< token stream from the lexer
  idx           : usize,      //< cursor into `self.tokens`
  end_offset    : usize,      //< source offset just past the last token
  capture_count : u32,        //< index assigned to the most recent capturing group
}

impl Parser {

  pub fn new(tokens: Vec<Token>) -> Parser {
    let end_offset = tokens.last().map(|t| t.offset + 1).unwrap_or(0);
    Parser{
      tokens,
      idx: 0,
      end_offset,
      capture_count: 0
    }
  }


  /// Parses the whole token stream, returning the tree and the number of capturing groups.
  pub fn parse(mut self) -> Result<(Ast, u32), RegexError> {
    let ast = self.parse_alternation()?;

    if self.idx < self.tokens.len() {
      return Err(RegexError::TrailingTokens(self.peek().offset));
    }

    Ok((ast, self.capture_count))
  }


  // region Cursor Methods

  /// Returns the token at the cursor without consuming it. Past the end of the stream this
  /// returns a synthesized `Unknown` token so that callers need no bounds checks.
  fn peek(&self) -> Token {
    match self.tokens.get(self.idx) {
      Some(token) => *token,
      None        => Token::new(TokenKind::Unknown, 0, self.end_offset),
    }
  }


  /// Same as `peek()` but advances the cursor past the returned token.
  fn bump(&mut self) -> Token {
    let token = self.peek();
    if self.idx < self.tokens.len() {
      self.idx += 1;
    }
    token
  }


  /// Consumes the next token iff it has the given kind.
  fn accept(&mut self, kind: TokenKind) -> bool {
    if self.peek().kind == kind {
      self.idx += 1;
      return true;
    }
    false
  }

  // endregion


  fn parse_alternation(&mut self) -> Result<Ast, RegexError> {
    let mut left = self.parse_concatenation()?;

    while self.accept(TokenKind::Pipe) {
      let right = self.parse_concatenation()?;
      left = Ast::alternate(left, right);
    }

    Ok(left)
  }


  fn parse_concatenation(&mut self) -> Result<Ast, RegexError> {
    let mut left = self.parse_quantifier()?;

    while starts_atom(self.peek().kind) {
      let right = self.parse_quantifier()?;
      left = Ast::concat(left, right);
    }

    Ok(left)
  }


  fn parse_quantifier(&mut self) -> Result<Ast, RegexError> {
    let atom = self.parse_atom()?;
    let token = self.peek();

    match token.kind {

      TokenKind::Star => {
        self.bump();
        Ok(Ast::repeat(atom, 0, REPEAT_UNBOUNDED))
      }

      TokenKind::Plus => {
        self.bump();
        Ok(Ast::repeat(atom, 1, REPEAT_UNBOUNDED))
      }

      TokenKind::Question => {
        self.bump();
        Ok(Ast::repeat(atom, 0, 1))
      }

      TokenKind::LBrace => {
        self.bump();
        let min = self.parse_number();
        let mut max = min;
        if self.accept(TokenKind::Comma) {
          // `{n,}` has no number after the comma and decodes as max = 0, which the compiler
          // collapses to exactly `n` repetitions.
          max = self.parse_number();
        }
        if !self.accept(TokenKind::RBrace) {
          return Err(RegexError::MismatchedBraces(token.offset));
        }
        Ok(Ast::repeat(atom, min, max))
      }

      _ => Ok(atom)
    }
  }


  /// Decodes a decimal number from consecutive literal digit tokens, saturating rather than
  /// wrapping on absurd values.
  fn parse_number(&mut self) -> u32 {
    let mut result: u32 = 0;

    while self.peek().kind == TokenKind::Literal && self.peek().value.is_ascii_digit() {
      let digit = (self.bump().value - b'0') as u32;
      result = result.saturating_mul(10).saturating_add(digit);
    }

    result
  }


  fn parse_atom(&mut self) -> Result<Ast, RegexError> {
    let token = self.bump();

    match token.kind {

      TokenKind::Literal => Ok(Ast::Literal(token.value)),

      // `-` and `,` only have structural meaning inside classes and braces.
      TokenKind::Range => Ok(Ast::Literal(b'-')),
      TokenKind::Comma => Ok(Ast::Literal(b',')),

      TokenKind::Dot => Ok(Ast::Dot),

      TokenKind::Caret  => Ok(Ast::AnchorStart),
      TokenKind::Dollar => Ok(Ast::AnchorEnd),

      TokenKind::LParen   => self.parse_group(token.offset),
      TokenKind::LBracket => self.parse_class(token.offset),
      TokenKind::Escape   => self.parse_escape(token.value),

      _ => Err(RegexError::UnexpectedToken(token.offset))
    }
  }


  /**
  Parses a group whose opening parenthesis, at `open_offset`, has already been consumed.

  A `?` directly after the parenthesis selects a modifier: `:` parses the body without a
  capturing wrapper, while the lookahead modifiers `=` and `!` parse the body and emit it
  inline. Any other modifier is an error at the opening offset. A bare `(` assigns the next
  capture index and wraps the body in a `Group` node.
  */
  fn parse_group(&mut self, open_offset: usize) -> Result<Ast, RegexError> {
    if self.accept(TokenKind::Question) {
      let modifier = self.peek();

      if modifier.kind == TokenKind::Literal &&
         (modifier.value == b':' || modifier.value == b'=' || modifier.value == b'!')
      {
        self.bump();
        let body = self.parse_alternation()?;
        if !self.accept(TokenKind::RParen) {
          return Err(RegexError::MismatchedParens(open_offset));
        }
        return Ok(body);
      }

      return Err(RegexError::InvalidModifier(open_offset));
    }

    self.capture_count += 1;
    let index = self.capture_count;

    let body = self.parse_alternation()?;
    if !self.accept(TokenKind::RParen) {
      return Err(RegexError::MismatchedParens(open_offset));
    }

    Ok(Ast::group(index, body))
  }


  /**
  Parses a character class whose opening bracket, at `open_offset`, has already been
  consumed. An optional leading `^` negates the class. Members are bare bytes, `a-z` ranges
  (inclusive), and escapes; the named escapes `\d`, `\w`, `\s` union their member bytes into
  the bitset, and their negations union the complement within byte values below 128.
  */
  fn parse_class(&mut self, open_offset: usize) -> Result<Ast, RegexError> {
    let negated = self.accept(TokenKind::Caret);
    let mut bits = ByteClass::new();

    loop {
      match self.peek().kind {

        TokenKind::RBracket => break,

        TokenKind::Unknown => {
          return Err(RegexError::MismatchedBrackets(open_offset));
        }

        TokenKind::Escape => {
          let escaped = self.bump().value;
          self.class_escape(escaped, &mut bits);
        }

        _ => {
          let c = self.bump().value;
          if self.peek().kind == TokenKind::Range {
            self.bump();
            // The range end is taken verbatim, whatever it is; an inverted range is empty.
            let end = self.bump().value;
            bits.insert_pair(c, end);
          }
          else {
            bits.insert(c);
          }
        }

      }
    }
    self.bump(); // the `]`

    match negated {
      true  => Ok(Ast::NegClass{ bits, pred: None }),
      false => Ok(Ast::Class{ bits, pred: None }),
    }
  }


  /// Folds one in-class escape into the accumulating bitset.
  fn class_escape(&mut self, escaped: u8, bits: &mut ByteClass) {
    match escaped {
      b'd' => *bits |= Pred::Digit,
      b'w' => *bits |= Pred::Word,
      b's' => *bits |= Pred::Space,

      b'D' => *bits |= complement(Pred::Digit),
      b'W' => *bits |= complement(Pred::Word),
      b'S' => *bits |= complement(Pred::Space),

      b't' => { bits.insert(b'\t'); }
      b'r' => { bits.insert(b'\r'); }
      b'n' => { bits.insert(b'\n'); }
      b'f' => { bits.insert(0x0C); }
      b'v' => { bits.insert(0x0B); }
      b'a' => { bits.insert(0x07); }
      b'e' => { bits.insert(0x1B); }

      b'x' => {
        let value = self.parse_hex_byte();
        bits.insert(value);
      }

      _ => { bits.insert(escaped); }
    }
  }


  /// Parses an escape outside a class, already reduced to its escaped byte.
  fn parse_escape(&mut self, escaped: u8) -> Result<Ast, RegexError> {
    let node = match escaped {
      b'd' => Ast::Class   { bits: ByteClass::new(), pred: Some(ClassPred::Digit) },
      b'D' => Ast::NegClass{ bits: ByteClass::new(), pred: Some(ClassPred::Digit) },
      b'w' => Ast::Class   { bits: ByteClass::new(), pred: Some(ClassPred::Word) },
      b'W' => Ast::NegClass{ bits: ByteClass::new(), pred: Some(ClassPred::Word) },
      b's' => Ast::Class   { bits: ByteClass::new(), pred: Some(ClassPred::Space) },
      b'S' => Ast::NegClass{ bits: ByteClass::new(), pred: Some(ClassPred::Space) },

      // Word boundaries are not implemented; the escape degrades to the literal byte.
      b'b' | b'B' => Ast::Literal(b'b'),

      b't' => Ast::Literal(b'\t'),
      b'r' => Ast::Literal(b'\r'),
      b'n' => Ast::Literal(b'\n'),
      b'f' => Ast::Literal(0x0C),
      b'v' => Ast::Literal(0x0B),
      b'a' => Ast::Literal(0x07),
      b'e' => Ast::Literal(0x1B),

      b'x' => Ast::Literal(self.parse_hex_byte()),

      b'1'..=b'9' => Ast::Backref((escaped - b'0') as u32),

      _ => Ast::Literal(escaped),
    };

    Ok(node)
  }


  /// Decodes up to two hex digits (case-insensitive) following an `\x` escape into one byte.
  fn parse_hex_byte(&mut self) -> u8 {
    let mut value: u8 = 0;

    for _ in 0..2 {
      let token = self.peek();
      if token.kind == TokenKind::Literal && token.value.is_ascii_hexdigit() {
        self.bump();
        value = value.wrapping_mul(16).wrapping_add(hex_digit(token.value));
      }
      else {
        break;
      }
    }

    value
  }

}


/// The complement of a predicate table within byte values below 128.
fn complement(mut class: ByteClass) -> ByteClass {
  class.flip();
  class
}


fn starts_atom(kind: TokenKind) -> bool {
  match kind {
    | TokenKind::Literal
    | TokenKind::Range
    | TokenKind::Comma
    | TokenKind::Dot
    | TokenKind::LParen
    | TokenKind::LBracket
    | TokenKind::Escape
    | TokenKind::Caret
    | TokenKind::Dollar => true,

    _ => false
  }
}


fn hex_digit(c: u8) -> u8 {
  match c {
    b'0'..=b'9' => c - b'0',
    b'a'..=b'f' => c - b'a' + 10,
    b'A'..=b'F' => c - b'A' + 10,
    _           => 0,
  }
}
