/*!

  The abstract syntax of a parsed pattern. Nodes exclusively own their children, so dropping
  the root drops the whole tree. Capturing groups carry the 1-based index assigned by the
  parser in the order their opening parenthesis appears.

*/

use crate::classes::{ByteClass, ClassPred};


#[derive(Clone, Debug, PartialEq)]
pub enum Ast {
  /// A single literal byte.
  Literal(u8),

  /// `.`, any one byte.
  Dot,

  /// Two subpatterns in sequence.
  Concat(Box<Ast>, Box<Ast>),

  /// Two alternatives; the left one is preferred.
  Alternate(Box<Ast>, Box<Ast>),

  /// A quantified subpattern. `max == REPEAT_UNBOUNDED` encodes a missing upper bound. The
  /// greedy flag is reserved; quantifiers are always greedy in this version.
  Repeat {
    node   : Box<Ast>,
    min    : u32,
    max    : u32,
    greedy : bool,
  },

  /// A character class. The predicate is set only when the node comes from a single `\d`,
  /// `\w`, or `\s` escape and no bitset was accumulated.
  Class {
    bits : ByteClass,
    pred : Option<ClassPred>,
  },

  /// A negated character class; membership is inverted at match time.
  NegClass {
    bits : ByteClass,
    pred : Option<ClassPred>,
  },

  /// `^`
  AnchorStart,

  /// `$`
  AnchorEnd,

  /// A capturing group wrapping one child.
  Group {
    index : u32,
    node  : Box<Ast>,
  },

  /// A backreference to a capture group.
  Backref(u32),
}

impl Ast {

  pub fn concat(left: Ast, right: Ast) -> Ast {
    Ast::Concat(Box::new(left), Box::new(right))
  }


  pub fn alternate(left: Ast, right: Ast) -> Ast {
    Ast::Alternate(Box::new(left), Box::new(right))
  }


  pub fn repeat(node: Ast, min: u32, max: u32) -> Ast {
    Ast::Repeat{
      node: Box::new(node),
      min,
      max,
      greedy: true
    }
  }


  pub fn group(index: u32, node: Ast) -> Ast {
    Ast::Group{
      index,
      node: Box::new(node)
    }
  }

}
