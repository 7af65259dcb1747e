//! Binary dense-vector container I/O
//!
//! Serializes an assembled [`Vector`] into the PETSc-compatible binary
//! layout defined in `mmvec-core`, and reads it back for verification.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use mmvec_core::{decode_scalar, encode_values, VecBinHeader};
use tracing::info;

use crate::error::{Error, Result};
use crate::vector::{Vector, VectorBuilder};

/// Serialize `vector` into `sink` and flush.
///
/// The output is the container header followed by every element in the
/// on-disk byte order.
pub fn write_vector<W: Write>(vector: &Vector, mut sink: W) -> Result<()> {
    let header = VecBinHeader::for_len(vector.len()).map_err(Error::Container)?;
    sink.write_all(&header.to_bytes_array())?;
    sink.write_all(&encode_values(vector.as_slice()))?;
    sink.flush()?;
    Ok(())
}

/// Create or truncate `path` and write `vector` to it.
pub fn write_vector_path<P: AsRef<Path>>(vector: &Vector, path: P) -> Result<()> {
    let file = File::create(path)?;
    write_vector(vector, BufWriter::new(file))?;
    info!(count = vector.len(), "writing vector completed");
    Ok(())
}

/// Read a vector back from the container layout.
///
/// Validates the classid and count, then decodes every element. A stream
/// shorter than the declared count is an I/O error.
pub fn read_vector<R: Read>(mut input: R) -> Result<Vector> {
    let mut header_bytes = [0u8; VecBinHeader::SIZE];
    input.read_exact(&mut header_bytes)?;
    let header = VecBinHeader::from_bytes(&header_bytes).map_err(Error::Container)?;

    let rows = header.rows as usize;
    let mut builder = VectorBuilder::with_len(rows);
    let mut scalar = [0u8; 8];
    for index in 0..rows {
        input.read_exact(&mut scalar)?;
        builder.set(index, decode_scalar(scalar))?;
    }

    Ok(builder.assemble())
}

/// Open `path` and read a vector from it.
pub fn read_vector_path<P: AsRef<Path>>(path: P) -> Result<Vector> {
    let file = File::open(path)?;
    read_vector(BufReader::new(file))
}
