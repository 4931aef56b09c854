/*!

  Match results. A successful execution reports the overall matched range plus one entry per
  *outermost* captured group: a group whose range lies strictly inside another group's range
  is suppressed, and the survivors keep their pattern order. Groups that never matched, and
  groups that matched the empty string, are reported as unset entries.

*/

use crate::limits::UNSET_SLOT;


/// The recorded bounds and bytes of one reported capture group.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Capture {
  pub start : usize,   //< absolute start cursor, `UNSET_SLOT` when unset
  pub end   : usize,   //< absolute end cursor, `UNSET_SLOT` when unset
  pub bytes : Vec<u8>, //< the captured bytes, empty when unset
}

impl Capture {

  fn unset() -> Capture {
    Capture{
      start: UNSET_SLOT,
      end: UNSET_SLOT,
      bytes: Vec::new()
    }
  }


  pub fn is_unset(&self) -> bool {
    self.start == UNSET_SLOT
  }

}


/// The outcome of one successful match.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MatchResult {
  pub start    : usize,        //< cursor where the match begins
  pub end      : usize,        //< cursor one past the last matched byte
  pub bytes    : Vec<u8>,      //< the matched bytes
  pub captures : Vec<Capture>, //< outermost captured groups in pattern order
}

impl MatchResult {

  pub fn len(&self) -> usize {
    self.end - self.start
  }


  pub fn is_empty(&self) -> bool {
    self.start == self.end
  }


  /// The bytes of a reported group. Index 0 is the overall match; indices beyond the reported
  /// captures, and unset captures, yield an empty slice.
  pub fn group(&self, index: usize) -> &[u8] {
    if index == 0 {
      return &self.bytes;
    }
    match self.captures.get(index - 1) {
      Some(capture) => &capture.bytes,
      None          => &[],
    }
  }


  /// The absolute start cursor of a reported group, `UNSET_SLOT` when out of range or unset.
  pub fn group_start(&self, index: usize) -> usize {
    if index == 0 {
      return self.start;
    }
    match self.captures.get(index - 1) {
      Some(capture) => capture.start,
      None          => UNSET_SLOT,
    }
  }


  /// The absolute end cursor of a reported group, `UNSET_SLOT` when out of range or unset.
  pub fn group_end(&self, index: usize) -> usize {
    if index == 0 {
      return self.end;
    }
    match self.captures.get(index - 1) {
      Some(capture) => capture.end,
      None          => UNSET_SLOT,
    }
  }

}


/**
Builds a result from a completed slot vector. Slots 0 and 1 hold the overall bounds; slots
`2k` and `2k + 1` hold the bounds of group `k`.

The outermost-group filter is a single pass in group order with a stack of open ranges.
Group indices are assigned at the opening parenthesis, so any group that could contain group
`k` precedes it; a range that neither strictly contains the current range nor equals it is
closed and gets popped. Whatever remains on the stack strictly contains the current group,
which is therefore suppressed.
*/
pub(crate) fn from_slots(text: &[u8], slots: &[usize]) -> MatchResult {
  let start = slots[0];
  let end = slots[1];

  let mut captures: Vec<Capture> = Vec::new();
  let mut open: Vec<(usize, usize)> = Vec::new(); //< surviving enclosing ranges

  for group in 1..slots.len() / 2 {
    let (s, e) = (slots[2 * group], slots[2 * group + 1]);

    if s == UNSET_SLOT || e == UNSET_SLOT {
      captures.push(Capture::unset());
      continue;
    }

    while let Some(&(open_s, open_e)) = open.last() {
      let strictly_contains = open_s <= s && e <= open_e && (open_s < s || e < open_e);
      if strictly_contains {
        break;
      }
      open.pop();
    }

    if !open.is_empty() {
      // Nested inside a reported group: suppressed entirely.
      continue;
    }

    if e > s {
      captures.push(Capture{ start: s, end: e, bytes: text[s..e].to_vec() });
      open.push((s, e));
    }
    else {
      // A zero-width capture reports as unset and can contain nothing.
      captures.push(Capture::unset());
    }
  }

  MatchResult{
    start,
    end,
    bytes: text[start..end].to_vec(),
    captures
  }
}
