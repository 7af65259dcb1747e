//! mmvec - Matrix Market array to binary dense-vector conversion
//!
//! The workspace follows a format/implementation separation:
//!
//! - **mmvec-core**: pure format definitions and validation (no I/O)
//! - **mmvec**: streaming reader, vector assembly, container writer, and
//!   the process context used by the `mm2vec` binary
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use mmvec::{read_market_vector_path, write_vector_path, Context, VectorBuilder};
//!
//! fn example() -> mmvec::Result<()> {
//!     let _context = Context::init()?;
//!
//!     let parsed = read_market_vector_path("b.mtx")?;
//!     let mut builder = VectorBuilder::with_len(parsed.rows);
//!     for (index, value) in parsed.values.iter().enumerate() {
//!         builder.set(index, *value)?;
//!     }
//!
//!     write_vector_path(&builder.assemble(), "b.petsc")?;
//!     Ok(())
//! }
//! ```

// Re-export the format layer used at the API surface
pub use mmvec_core::{ArraySize, FormatError, Typecode, VecBinHeader, VEC_FILE_CLASSID};

pub mod context;
pub mod error;
pub mod reader;
pub mod vector;
pub mod writer;

pub use context::Context;
pub use error::{Error, Result};
pub use reader::{read_market_vector, read_market_vector_path, MarketVector};
pub use vector::{Vector, VectorBuilder};
pub use writer::{read_vector, read_vector_path, write_vector, write_vector_path};
