//! Exit codes returned by [`crate::run`].

pub const SUCCESS: i32 = 0;

/// Any failed command, including argument errors.
pub const ERROR: i32 = 2;

/// A simulation stopped before the requested hand count.
pub const INTERRUPTED: i32 = 130;
