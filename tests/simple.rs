//! End-to-end matching scenarios through the public facade.

use recoil::Regex;

#[test]
fn literal_match() {
  let mut regex = Regex::new("hello").unwrap();
  let result = regex.match_at(b"hello world", 0).unwrap();
  assert_eq!(result.bytes, b"hello");
  assert_eq!(result.start, 0);
}

#[test]
fn digit_match() {
  let mut regex = Regex::new(r"\d+").unwrap();
  let result = regex.match_at(b"12345", 0).unwrap();
  assert_eq!(result.bytes, b"12345");

  assert!(regex.match_at(b"abc", 0).is_none());
}

#[test]
fn word_match() {
  let mut regex = Regex::new(r"\w+").unwrap();
  let result = regex.match_at(b"hello_world", 0).unwrap();
  assert_eq!(result.bytes, b"hello_world");
}

#[test]
fn character_class() {
  let mut regex = Regex::new("[aeiou]+").unwrap();
  let result = regex.match_at(b"aeiou", 0).unwrap();
  assert_eq!(result.bytes, b"aeiou");
}

#[test]
fn negated_class() {
  let mut regex = Regex::new("[^0-9]+").unwrap();
  let result = regex.match_at(b"ABC123def", 0).unwrap();
  assert_eq!(result.bytes, b"ABC");

  assert!(regex.match_at(b"123", 0).is_none());
}

#[test]
fn search_finds_the_leftmost_match() {
  let mut regex = Regex::new(r"\d+").unwrap();
  let result = regex.search(b"hello 123 world").unwrap();
  assert_eq!(result.bytes, b"123");
  assert_eq!(result.start, 6);
}

#[test]
fn search_all_finds_every_occurrence() {
  let mut regex = Regex::new(r"\d+").unwrap();
  let results = regex.search_all(b"a1b2c3d4");

  assert_eq!(results.len(), 4);
  let bytes: Vec<&[u8]> = results.iter().map(|r| r.bytes.as_slice()).collect();
  assert_eq!(bytes, vec![&b"1"[..], &b"2"[..], &b"3"[..], &b"4"[..]]);
  let starts: Vec<usize> = results.iter().map(|r| r.start).collect();
  assert_eq!(starts, vec![1, 3, 5, 7]);
}

#[test]
fn capture_groups() {
  let mut regex = Regex::new(r"(\d+)-(\d+)").unwrap();
  let result = regex.match_at(b"123-456", 0).unwrap();
  assert_eq!(result.group(0), b"123-456");
  assert_eq!(result.group(1), b"123");
  assert_eq!(result.group(2), b"456");
}

#[test]
fn date_captures() {
  let mut regex = Regex::new(r"(\d{4})-(\d{2})-(\d{2})").unwrap();
  let result = regex.match_at(b"2024-01-15", 0).unwrap();
  assert_eq!(result.group(0), b"2024-01-15");
  assert_eq!(result.group(1), b"2024");
  assert_eq!(result.group(2), b"01");
  assert_eq!(result.group(3), b"15");
}

#[test]
fn anchors() {
  let mut start_anchored = Regex::new("^hello").unwrap();
  assert!(start_anchored.is_match(b"hello world"));

  let mut end_anchored = Regex::new("world$").unwrap();
  let result = end_anchored.search(b"hello world").unwrap();
  assert_eq!(result.bytes, b"world");
}

#[test]
fn alternation_prefers_the_left_branch() {
  let mut regex = Regex::new("cat|dog|bird").unwrap();

  let result = regex.search(b"I have a cat").unwrap();
  assert_eq!(result.bytes, b"cat");
  assert_eq!(result.start, 9);

  let result = regex.search(b"I have a dog").unwrap();
  assert_eq!(result.bytes, b"dog");
  assert_eq!(result.start, 9);
}

#[test]
fn replace_all_occurrences() {
  let mut regex = Regex::new(r"\d+").unwrap();
  let replaced = regex.replace(b"abc123def456ghi", b"[#]", true);
  assert_eq!(replaced, b"abc[#]def[#]ghi");
}

#[test]
fn matched_bytes_equal_the_input_range() {
  let text = b"one 22 three 4444";
  let mut regex = Regex::new(r"\d+").unwrap();

  for result in regex.search_all(text) {
    assert_eq!(result.bytes, &text[result.start..result.end]);
    assert_eq!(result.len(), result.end - result.start);
  }
}

#[test]
fn enumeration_is_ordered_and_non_overlapping() {
  let text = b"ab 12 cd 34 ef 56";
  let mut regex = Regex::new(r"\w+").unwrap();

  let results = regex.search_all(text);
  assert!(!results.is_empty());

  for window in results.windows(2) {
    let (prev, next) = (&window[0], &window[1]);
    assert!(next.start >= prev.end);
    if prev.is_empty() {
      assert!(next.start > prev.end);
    }
  }
}

#[test]
fn escaped_metacharacters_are_literals() {
  let mut regex = Regex::new(r"\$\.\*\+\?\|").unwrap();
  assert!(regex.is_match(b"$.*+?|"));
}

#[test]
fn control_escapes_match_their_bytes() {
  assert!(Regex::new(r"\t").unwrap().is_match(b"\t"));
  assert!(Regex::new(r"\n").unwrap().is_match(b"\n"));
  assert!(Regex::new(r"\r").unwrap().is_match(b"\r"));
  assert!(Regex::new(r"\x41").unwrap().is_match(b"A"));
}
