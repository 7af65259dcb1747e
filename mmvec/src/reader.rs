//! Streaming reader for Matrix Market array files

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use mmvec_core::{is_comment, parse_real, ArraySize, FormatError, Typecode};
use tracing::info;

use crate::error::{Error, Result};

/// A dense vector parsed from a Matrix Market array file
#[derive(Debug, Clone, PartialEq)]
pub struct MarketVector {
    /// Banner typecode declared by the file
    pub typecode: Typecode,
    /// Declared row count M
    pub rows: usize,
    /// Declared column count, always 1 after validation
    pub cols: usize,
    /// The values, in file order
    pub values: Vec<f64>,
}

/// Read a dense vector from an open Matrix Market array stream.
///
/// Parses the banner, skips comment and blank lines, parses the size
/// line, then reads exactly `rows` whitespace-separated scalar tokens.
/// The file must declare a real or integer general array, and its column
/// count must be 1: a general M-by-N array is rejected rather than
/// silently flattened into a vector of length M.
///
/// Data past the last expected value is ignored.
pub fn read_market_vector<R: BufRead>(input: R) -> Result<MarketVector> {
    let mut lines = input.lines();
    let mut line_no = 1usize;

    let banner_line = lines
        .next()
        .transpose()?
        .ok_or(Error::Parse {
            line: line_no,
            source: FormatError::InvalidBanner,
        })?;
    let typecode = Typecode::parse(&banner_line).map_err(|source| Error::Parse {
        line: line_no,
        source,
    })?;
    if !typecode.is_array() || !typecode.has_scalar_values() || !typecode.is_general() {
        return Err(Error::Parse {
            line: line_no,
            source: FormatError::UnsupportedTypecode,
        });
    }

    // first non-comment, non-blank line after the banner is the size line
    let size = loop {
        line_no += 1;
        let line = lines.next().transpose()?.ok_or(Error::Parse {
            line: line_no,
            source: FormatError::InvalidSizeLine,
        })?;
        let trimmed = line.trim();
        if trimmed.is_empty() || is_comment(trimmed) {
            continue;
        }
        break ArraySize::parse(trimmed).map_err(|source| Error::Parse {
            line: line_no,
            source,
        })?;
    };

    if !size.is_vector() {
        return Err(Error::Parse {
            line: line_no,
            source: FormatError::NotAColumnVector,
        });
    }
    let rows = usize::try_from(size.rows).map_err(|_| Error::Parse {
        line: line_no,
        source: FormatError::DimensionOverflow,
    })?;

    info!(banner = %typecode, rows, cols = size.cols, "parsed Matrix Market header");

    let mut values = Vec::with_capacity(rows);
    'data: while values.len() < rows {
        line_no += 1;
        let Some(line) = lines.next().transpose()? else {
            return Err(Error::Truncated {
                index: values.len(),
                expected: rows,
            });
        };
        for token in line.split_whitespace() {
            if values.len() == rows {
                break 'data;
            }
            let value = parse_real(token).map_err(|source| Error::Parse {
                line: line_no,
                source,
            })?;
            values.push(value);
        }
    }

    info!(count = values.len(), "reading vector completed");

    Ok(MarketVector {
        typecode,
        rows,
        cols: size.cols as usize,
        values,
    })
}

/// Open `path` and read a dense vector from it.
pub fn read_market_vector_path<P: AsRef<Path>>(path: P) -> Result<MarketVector> {
    let file = File::open(path)?;
    read_market_vector(BufReader::new(file))
}
