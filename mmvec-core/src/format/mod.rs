//! Format definitions for the text source and the binary target
//!
//! `banner` and `array` describe the Matrix Market side, `vecbin` the
//! binary dense-vector container the converter emits.

pub mod array;
pub mod banner;
pub mod vecbin;

pub use array::*;
pub use banner::*;
pub use vecbin::*;
