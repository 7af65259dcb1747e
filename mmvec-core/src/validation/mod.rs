//! Pure validation and parsing helpers
//!
//! No I/O dependencies; callers layer line and index context on top of
//! the errors raised here.

pub mod parsing;

pub use parsing::*;
