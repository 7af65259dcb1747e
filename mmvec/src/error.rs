//! Error type for the conversion pipeline

use mmvec_core::FormatError;
use thiserror::Error;

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while converting a Matrix Market file
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed text input, located by 1-based source line
    #[error("line {line}: {source}")]
    Parse {
        /// 1-based line number in the input file
        line: usize,
        #[source]
        source: FormatError,
    },

    /// Fewer values were present than the size line declared
    #[error("input ended at element {index}: expected {expected} values")]
    Truncated {
        /// 0-based index of the first missing element
        index: usize,
        /// Element count declared by the size line
        expected: usize,
    },

    /// Malformed binary container input
    #[error("binary vector container: {0}")]
    Container(FormatError),

    /// Element index outside the assembled length
    #[error("element index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Refused to start under a parallel launcher
    #[error("uniprocessor tool: refusing to run with a world size of {world_size}")]
    Parallel { world_size: usize },

    /// Underlying file I/O failure
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
