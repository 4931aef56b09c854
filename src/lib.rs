/*!

A compact backtracking regular expression engine. A pattern is compiled through a linear
pipeline (lexer, recursive-descent parser, bytecode compiler) into a flat program of typed
instructions, which a non-recursive virtual machine executes against arbitrary input bytes
with an explicit backtrack stack.

The recognized surface: literals; `.`; character classes `[...]` with negation, ranges, and
in-class escapes; alternation `|`; greedy quantifiers `*`, `+`, `?`, `{n}`, `{n,m}`; grouping
`(...)` and non-capturing `(?:...)`; anchors `^` and `$`; and the usual escapes (`\d`, `\w`,
`\s` and their negations, control escapes, `\xHH`). Matching is backtracking with no
linear-time guarantee, so adversarial patterns should be bounded by the caller.

```
use recoil::Regex;

let mut regex = Regex::new(r"(\d{4})-(\d{2})-(\d{2})").unwrap();
let result = regex.search(b"released 2024-01-15").unwrap();
assert_eq!(result.group(1), b"2024");
```

*/

mod debug;

pub mod ast;
pub mod classes;
pub mod compiler;
pub mod engine;
pub mod error;
pub mod lexer;
pub mod limits;
pub mod matches;
pub mod parser;
pub mod program;
pub mod regex;
pub mod replace;

pub use crate::error::RegexError;
pub use crate::matches::{Capture, MatchResult};
pub use crate::program::{Inst, Program};
pub use crate::regex::{compile, matches, replace_all, search_all, Regex};
