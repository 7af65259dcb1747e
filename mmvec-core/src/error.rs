//! Error types for format parsing and serialization

/// Errors produced by the pure format layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// First line is not a recognizable Matrix Market banner
    InvalidBanner,
    /// Banner parsed but names a file kind the converter does not handle
    UnsupportedTypecode,
    /// Size line is not two positive integers
    InvalidSizeLine,
    /// Declared column count is not 1
    NotAColumnVector,
    /// A data token is not a finite decimal floating-point literal
    InvalidValue,
    /// A dimension or count does not fit the target integer type
    DimensionOverflow,
    /// Binary container header is malformed
    InvalidHeader,
    /// Binary container header tags an object other than a dense vector
    UnsupportedClassId,
    /// Buffer too short for the requested decode
    InsufficientBuffer,
}

impl core::fmt::Display for FormatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            FormatError::InvalidBanner => "not a Matrix Market banner",
            FormatError::UnsupportedTypecode => "not a real general dense array",
            FormatError::InvalidSizeLine => "size line is not two positive integers",
            FormatError::NotAColumnVector => "declared column count is not 1",
            FormatError::InvalidValue => "not a finite floating-point literal",
            FormatError::DimensionOverflow => "dimension overflows the supported range",
            FormatError::InvalidHeader => "invalid vector container header",
            FormatError::UnsupportedClassId => "container object is not a dense vector",
            FormatError::InsufficientBuffer => "insufficient buffer space",
        };
        write!(f, "{msg}")
    }
}

impl core::error::Error for FormatError {}

/// Result type for format operations
pub type Result<T> = core::result::Result<T, FormatError>;
