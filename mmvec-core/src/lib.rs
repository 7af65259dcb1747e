#![no_std]

//! mmvec-core - Matrix Market and binary dense-vector format definitions
//!
//! This crate provides the pure format layer shared by the converter:
//! banner typecodes, array size headers, the binary vector container
//! layout, and validation helpers. No I/O happens here.

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod error;
pub mod format;
pub mod validation;

pub use error::*;
pub use format::*;
pub use validation::*;
