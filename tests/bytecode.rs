//! Compiled-program structure as observed through the public facade.

use recoil::{Inst, Regex};

#[test]
fn programs_end_with_match() {
  for pattern in &["abc", r"\d+", "(a|b)*", "[x-z]{2,3}"] {
    let regex = Regex::new(pattern).unwrap();
    let program = regex.program();
    assert!(!program.is_empty());
    assert_eq!(program.get(program.len() - 1), Some(&Inst::Match));
  }
}

#[test]
fn every_branch_operand_is_in_bounds() {
  let patterns = [
    "a|b|c",
    "(a|b)*c",
    r"(\d{2,4}[x-z]?)+",
    "(?:ab|cd)?(ef|gh)*",
    "^a(b(c|d)e)*f$",
  ];

  for pattern in &patterns {
    let regex = Regex::new(pattern).unwrap();
    let program = regex.program();

    for pc in 0..program.len() {
      match program.get(pc) {
        Some(Inst::Jump(target)) => {
          assert!(*target <= program.len(), "{}: JUMP at {} escapes", pattern, pc);
        }
        Some(Inst::Split{ primary, secondary }) => {
          assert!(*primary <= program.len(), "{}: SPLIT at {} escapes", pattern, pc);
          assert!(*secondary <= program.len(), "{}: SPLIT at {} escapes", pattern, pc);
        }
        _ => {}
      }
    }
  }
}

#[test]
fn saves_come_in_pairs() {
  let regex = Regex::new(r"(\d+)-(\d+)").unwrap();
  let program = regex.program();

  let mut save_slots: Vec<usize> = Vec::new();
  for pc in 0..program.len() {
    if let Some(Inst::Save(slot)) = program.get(pc) {
      save_slots.push(*slot);
    }
  }

  // Group k owns slots 2k and 2k + 1; slots 0 and 1 belong to the overall match and are
  // written by the engine rather than by SAVE instructions.
  assert_eq!(save_slots, vec![2, 3, 4, 5]);
}

#[test]
fn listing_covers_every_instruction() {
  let regex = Regex::new("a(b|c)*d").unwrap();
  let program = regex.program();

  let listing = program.to_string();
  assert_eq!(listing.lines().count(), program.len());
  assert!(listing.contains("SPLIT"));
  assert!(listing.contains("SAVE"));
  assert!(listing.contains("MATCH"));
}

#[test]
fn range_matching_through_the_program() {
  let mut regex = Regex::new("[a-z]+").unwrap();
  let result = regex.match_at(b"hello", 0).unwrap();
  assert_eq!(result.bytes, b"hello");

  assert!(regex.match_at(b"HELLO", 0).is_none());
}

#[test]
fn repetition_shapes_execute() {
  let mut exact = Regex::new("a{3}").unwrap();
  assert!(exact.is_match(b"aaa"));
  assert!(!exact.is_match(b"aa"));

  let mut spread = Regex::new("a{1,3}b").unwrap();
  assert!(spread.is_match(b"ab"));
  assert!(spread.is_match(b"aaab"));
  assert!(!spread.is_match(b"b"));
}

#[test]
fn alternation_through_the_program() {
  let mut regex = Regex::new("a|b").unwrap();
  assert!(regex.is_match(b"a"));
  assert!(regex.is_match(b"b"));
  assert!(!regex.is_match(b"c"));
}
