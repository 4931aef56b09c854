/*!

  A `ByteClass` is a subset of the byte values `0..128`, represented compactly as a bitfield of
  two `u64`'s: byte value n is a member of the class if and only if the nth bit is set in the
  class's bitfield representation. Byte values of 128 and above are never members; a negated
  class therefore always matches them.

  Some subsets are special: the classes produced by the `\d`, `\w`, and `\s` escapes. The
  `ClassPred` enum names these, and the `Pred` module holds their precomputed tables.

*/

use std::fmt::{Display, Formatter};
use std::ops::{BitOr, BitOrAssign};


// region Predicate Character Classes

/// Predicate classes can be selected by table index.
pub static PRED_NAMES: [&str; 3] = [
  "digit", // Digit: 0-9
  "word",  // Word : 0-9, A-Z, a-z, _
  "space", // Space: \t-\r, ' '
];

#[allow(non_snake_case)]
pub mod Pred {
  #![allow(non_upper_case_globals)]
  use super::*;

  pub static Digit: ByteClass = ByteClass{ b: [ 0x03FF000000000000, 0x0000000000000000 ] };
  pub static Word : ByteClass = ByteClass{ b: [ 0x03FF000000000000, 0x07FFFFFE87FFFFFE ] };
  pub static Space: ByteClass = ByteClass{ b: [ 0x0000000100003E00, 0x0000000000000000 ] };
}

/// This array allows us to select a predicate table by `ClassPred as usize`.
pub static PRED_TABLES: [&ByteClass; 3] = [
  &Pred::Digit, // Digit: 0-9
  &Pred::Word,  // Word : 0-9, A-Z, a-z, _
  &Pred::Space, // Space: \t-\r, ' '
];


/// The named classes matched through a predicate rather than an explicit bitset: the classes of
/// the `\d`, `\w`, and `\s` escapes (and, negated, of `\D`, `\W`, and `\S`).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum ClassPred {
  Digit = 0,
  Word  = 1,
  Space = 2,
}

impl ClassPred {

  /// The membership table for this predicate.
  pub fn table(&self) -> &'static ByteClass {
    PRED_TABLES[*self as usize]
  }


  /// Whether `c` satisfies the predicate.
  pub fn matches(&self, c: u8) -> bool {
    self.table().contains(c)
  }


  pub fn name(&self) -> &'static str {
    PRED_NAMES[*self as usize]
  }

}

impl Display for ClassPred {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.name())
  }
}

// endregion


/// Set of byte values below 128
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ByteClass {
  pub b: [u64; 2] //< 128 bits, one per byte value
}


impl ByteClass {

  pub fn new() -> ByteClass {
    ByteClass{
      b: [0; 2]
    }
  }


  pub fn is_empty(&self) -> bool {
    self.b[0] == 0 &&
    self.b[1] == 0
  }


  pub fn contains(&self, c: u8) -> bool {
    if c >= 128 {
      return false;
    }
    (self.b[(c >> 6) as usize] & (1 << (c & 0x3F))) != 0
  }


  pub fn insert(&mut self, c: u8) -> &ByteClass {
    // Byte values above the bitfield are silently dropped; a negated class picks them up by
    // the inversion at match time.
    if c < 128 {
      self.b[(c >> 6) as usize] |= 1 << (c & 0x3F);
    }
    self
  }


  pub fn insert_pair(&mut self, lo: u8, hi: u8) -> &ByteClass {
    for c in lo..=hi {
      self.insert(c);
    }
    self
  }


  /// Computes the complement within `0..128` in-place.
  pub fn flip(&mut self) -> &ByteClass {
    self.b[0] = !self.b[0];
    self.b[1] = !self.b[1];
    self
  }

}


// region Arithmetic for ByteClass

impl BitOrAssign for ByteClass {
  fn bitor_assign(&mut self, c: ByteClass) {
    self.b[0] |= c.b[0];
    self.b[1] |= c.b[1];
  }
}


impl BitOr for ByteClass {
  type Output = ByteClass;

  fn bitor(self, c: ByteClass) -> ByteClass {
    let mut copy = self;
    copy |= c;
    copy
  }
}

// endregion
