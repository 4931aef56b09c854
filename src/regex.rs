/*!

  The compiled-pattern facade. A `Regex` bundles the pattern text, the compiled program, and
  an engine instance, and dispatches matching, searching, enumeration, and replacement through
  the engine. Construction compiles eagerly; a constructed `Regex` is immutable apart from the
  engine's internal scratch state. Cloning yields a deep, independently executable copy, so
  two clones may run on different threads without synchronization.

*/

use std::time::Duration;

use quanta::Clock;

use crate::compiler::Compiler;
use crate::engine::Engine;
use crate::error::RegexError;
use crate::lexer::Lexer;
use crate::matches::MatchResult;
use crate::parser::Parser;
use crate::program::Program;
use crate::replace::expand_template;


#[derive(Clone, Debug)]
pub struct Regex {
  pattern       : String,   //< the pattern source text
  program       : Program,  //< the compiled program
  engine        : Engine,   //< execution state; scratch space reused across calls
  capture_count : u32,      //< number of capturing groups in the pattern
  compile_time  : Duration, //< wall time spent compiling the pattern
}

impl Regex {

  /// Compiles `pattern`. The whole pipeline runs eagerly, and the first error is returned
  /// with the byte offset of the offending token.
  pub fn new(pattern: &str) -> Result<Regex, RegexError> {
    let clock = Clock::new();
    let compile_start = clock.start();

    let tokens = Lexer::new(pattern).tokenize()?;
    let (ast, capture_count) = Parser::new(tokens).parse()?;
    let program = Compiler::compile(&ast);
    let engine = Engine::new(program.clone(), capture_count);

    let compile_time = clock.delta(compile_start, clock.end());

    Ok(Regex{
      pattern: pattern.to_string(),
      program,
      engine,
      capture_count,
      compile_time,
    })
  }


  // region Accessors

  pub fn pattern(&self) -> &str {
    &self.pattern
  }


  pub fn program(&self) -> &Program {
    &self.program
  }


  pub fn capture_count(&self) -> u32 {
    self.capture_count
  }


  pub fn compile_time(&self) -> Duration {
    self.compile_time
  }

  // endregion


  /// True iff the pattern matches anchored at the start of `text`.
  pub fn is_match(&mut self, text: &[u8]) -> bool {
    self.engine.execute_at(text, 0).is_some()
  }


  /// Attempts a match anchored at exactly `start`.
  pub fn match_at(&mut self, text: &[u8], start: usize) -> Option<MatchResult> {
    self.engine.execute_at(text, start)
  }


  /// Finds the leftmost match beginning at any position.
  pub fn search(&mut self, text: &[u8]) -> Option<MatchResult> {
    self.engine.search(text, 0)
  }


  /// Finds the leftmost match beginning at or after `start`.
  pub fn search_at(&mut self, text: &[u8], start: usize) -> Option<MatchResult> {
    self.engine.search(text, start)
  }


  /// Collects every non-overlapping match in left-to-right order.
  pub fn search_all(&mut self, text: &[u8]) -> Vec<MatchResult> {
    self.engine.search_all(text)
  }


  /**
  Replaces matches of the pattern in `text` with the expansion of `template` (see
  `expand_template` for the template syntax), returning the new byte sequence. With `all`
  set, the scan resumes after each splice at the end of the expansion, not at the end of the
  replaced match, until no match remains; otherwise only the first match is replaced.
  */
  pub fn replace(&mut self, text: &[u8], template: &[u8], all: bool) -> Vec<u8> {
    let mut out: Vec<u8> = text.to_vec();

    if all {
      let mut pos = 0;
      while pos < out.len() {
        match self.engine.search(&out, pos) {
          Some(result) => {
            let expansion = expand_template(template, &result);
            pos = result.start + expansion.len();
            out.splice(result.start..result.end, expansion);
          }
          None => break,
        }
      }
    }
    else if let Some(result) = self.engine.search(&out, 0) {
      let expansion = expand_template(template, &result);
      out.splice(result.start..result.end, expansion);
    }

    out
  }

}


// region Factory Helpers

/// One-shot pattern compilation; identical to `Regex::new`.
pub fn compile(pattern: &str) -> Result<Regex, RegexError> {
  Regex::new(pattern)
}


/// Compiles `pattern` and tests it anchored at the start of `text`.
pub fn matches(pattern: &str, text: &[u8]) -> Result<bool, RegexError> {
  let mut regex = Regex::new(pattern)?;
  Ok(regex.is_match(text))
}


/// Compiles `pattern` and collects every non-overlapping match in `text`.
pub fn search_all(pattern: &str, text: &[u8]) -> Result<Vec<MatchResult>, RegexError> {
  let mut regex = Regex::new(pattern)?;
  Ok(regex.search_all(text))
}


/// Compiles `pattern` and replaces every match in `text` with the expanded `template`.
pub fn replace_all(pattern: &str, text: &[u8], template: &[u8]) -> Result<Vec<u8>, RegexError> {
  let mut regex = Regex::new(pattern)?;
  Ok(regex.replace(text, template, true))
}

// endregion
