/*!

  Tracing for the dispatch loop. The macros expand to nothing unless the crate is built with
  the `trace` feature.

*/

#[macro_export]
macro_rules! trace_log {
    ($($args:tt)*) => {{
        #[cfg(feature = "trace")]
        print!($($args)*);
    }}
}

#[macro_export]
macro_rules! trace_logln {
    ($($args:tt)*) => {{
        #[cfg(feature = "trace")]
        println!($($args)*);
    }}
}
