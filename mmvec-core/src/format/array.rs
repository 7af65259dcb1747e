//! Array size header for dense Matrix Market files
//!
//! After the banner and any comment lines, a dense file carries one line
//! with two positive integers: the row and column counts.

use crate::error::{FormatError, Result};
use crate::validation::parse_dimension;

/// Dimensions declared by the array size line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArraySize {
    /// Declared row count M
    pub rows: u64,
    /// Declared column count N
    pub cols: u64,
}

impl ArraySize {
    /// Parse a size line of the form "M N".
    ///
    /// Both counts must be positive; trailing tokens are rejected so a
    /// coordinate size line ("M N nnz") cannot slip through.
    pub fn parse(line: &str) -> Result<Self> {
        let mut tokens = line.split_whitespace();

        let rows = parse_dimension(tokens.next().ok_or(FormatError::InvalidSizeLine)?)?;
        let cols = parse_dimension(tokens.next().ok_or(FormatError::InvalidSizeLine)?)?;

        if tokens.next().is_some() {
            return Err(FormatError::InvalidSizeLine);
        }

        Ok(Self { rows, cols })
    }

    /// True when the declared shape is a column vector
    pub const fn is_vector(&self) -> bool {
        self.cols == 1
    }

    /// Total number of stored entries, checked against overflow
    pub fn element_count(&self) -> Result<u64> {
        self.rows
            .checked_mul(self.cols)
            .ok_or(FormatError::DimensionOverflow)
    }
}

/// Comment predicate for lines between the banner and the size line
pub fn is_comment(line: &str) -> bool {
    line.starts_with('%')
}
