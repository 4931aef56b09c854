/**
  Constants specifying limits.

*/

/// Max number of instructions in a compiled program.
pub const MAX_PROGRAM_LEN: usize = 16_384;

/// Max number of capture slots: 16 groups (counting the overall match), two slots each.
pub const MAX_CAPTURE_SLOTS: usize = 32;

// Sentinel Values

/// Marks a capture slot that has not been written during execution.
pub const UNSET_SLOT: usize = usize::MAX;

/// Marks an unbounded quantifier upper bound, as in `a*`, `a+`.
pub const REPEAT_UNBOUNDED: u32 = u32::MAX;

// Engine Tuning

/// Backtrack stack capacity reserved up front by the engine.
pub const STACK_RESERVE: usize = 256;
