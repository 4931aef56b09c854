/*!

  Command-line demo driver: compiles a pattern, optionally dumps the compiled program, and
  runs one of the engine's operations over a text argument.

*/

use structopt::StructOpt;

use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};

use quanta::Clock;

use recoil::{Regex, RegexError};


#[derive(Debug, StructOpt)]
#[structopt(name = "recoil", about = "A bytecode-compiling regular expression engine.")]
struct Options {

  #[structopt(name = "PATTERN")]
  /// The pattern to compile
  pattern: String,

  #[structopt(name = "TEXT")]
  /// The text to run the pattern against
  text: String,

  #[structopt(short, long)]
  /// Search for the pattern anywhere in the text instead of matching at the start
  search: bool,

  #[structopt(short, long)]
  /// Enumerate every non-overlapping occurrence
  all: bool,

  #[structopt(short, long, value_name = "TEMPLATE")]
  /// Replace every occurrence with TEMPLATE (\1..\9 and $1..$9 substitute captures)
  replace: Option<String>,

  #[structopt(short = "d", long)]
  /// Print the compiled program before running
  dump_program: bool,

  #[structopt(short, long)]
  /// Report compile and run times
  time: bool,
}


fn main() {
  let options = Options::from_args();

  let mut regex = match Regex::new(&options.pattern) {
    Ok(regex) => regex,

    Err(error) => {
      emit_error(&options.pattern, &error);
      std::process::exit(1);
    }
  };

  if options.dump_program {
    println!("{}", regex.program());
  }

  let text = options.text.as_bytes();
  let clock = Clock::new();
  let run_start = clock.start();

  if let Some(template) = &options.replace {
    let replaced = regex.replace(text, template.as_bytes(), true);
    println!("{}", String::from_utf8_lossy(&replaced));
  }
  else if options.all {
    let results = regex.search_all(text);
    println!("{} match(es)", results.len());
    for result in &results {
      print_result(result);
    }
  }
  else if options.search {
    match regex.search(text) {
      Some(result) => print_result(&result),
      None         => println!("no match"),
    }
  }
  else {
    match regex.match_at(text, 0) {
      Some(result) => print_result(&result),
      None         => println!("no match"),
    }
  }

  if options.time {
    let run_time = clock.delta(run_start, clock.end());
    println!("compile: {:?}  run: {:?}", regex.compile_time(), run_time);
  }
}


fn print_result(result: &recoil::MatchResult) {
  println!(
    "match \"{}\" at {}..{}",
    String::from_utf8_lossy(&result.bytes),
    result.start,
    result.end
  );

  for (number, capture) in result.captures.iter().enumerate() {
    if capture.is_unset() {
      println!("  group {}: <unset>", number + 1);
    }
    else {
      println!(
        "  group {}: \"{}\" at {}..{}",
        number + 1,
        String::from_utf8_lossy(&capture.bytes),
        capture.start,
        capture.end
      );
    }
  }
}


/// Renders a compile error as a diagnostic against the pattern source.
fn emit_error(pattern: &str, error: &RegexError) {
  let mut files: SimpleFiles<&str, String> = SimpleFiles::new();
  let file_id = files.add("pattern", pattern.to_string());

  let diagnostic = error.to_diagnostic(file_id);
  let writer = StandardStream::stderr(ColorChoice::Auto);
  let config = term::Config::default();

  if term::emit(&mut writer.lock(), &config, &files, &diagnostic).is_err() {
    eprintln!("error: {}", error);
  }
}
