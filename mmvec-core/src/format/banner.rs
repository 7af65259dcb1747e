//! Matrix Market banner typecodes
//!
//! The first line of a Matrix Market file declares what the rest of the
//! file contains: `%%MatrixMarket <object> <format> <field> <symmetry>`.
//! The tag is matched exactly; the four tokens are case-insensitive.

use crate::error::{FormatError, Result};

/// Tag expected at the start of the banner line
pub const BANNER_TAG: &str = "%%MatrixMarket";

/// Object kind declared by the banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Object {
    /// The only object kind the format defines
    Matrix,
}

impl Object {
    /// Parse a banner token, case-insensitively
    pub fn from_token(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("matrix") {
            Some(Object::Matrix)
        } else {
            None
        }
    }

    /// Canonical lowercase spelling
    pub const fn as_str(self) -> &'static str {
        match self {
            Object::Matrix => "matrix",
        }
    }
}

/// Storage format declared by the banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StorageFormat {
    /// Dense: one value per entry, no indices
    Array,
    /// Sparse: row/column indices with each value
    Coordinate,
}

impl StorageFormat {
    /// Parse a banner token, case-insensitively
    pub fn from_token(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("array") {
            Some(StorageFormat::Array)
        } else if token.eq_ignore_ascii_case("coordinate") {
            Some(StorageFormat::Coordinate)
        } else {
            None
        }
    }

    /// Canonical lowercase spelling
    pub const fn as_str(self) -> &'static str {
        match self {
            StorageFormat::Array => "array",
            StorageFormat::Coordinate => "coordinate",
        }
    }
}

/// Value field declared by the banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Field {
    Real,
    Integer,
    Complex,
    Pattern,
}

impl Field {
    /// Parse a banner token, case-insensitively
    pub fn from_token(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("real") {
            Some(Field::Real)
        } else if token.eq_ignore_ascii_case("integer") {
            Some(Field::Integer)
        } else if token.eq_ignore_ascii_case("complex") {
            Some(Field::Complex)
        } else if token.eq_ignore_ascii_case("pattern") {
            Some(Field::Pattern)
        } else {
            None
        }
    }

    /// Canonical lowercase spelling
    pub const fn as_str(self) -> &'static str {
        match self {
            Field::Real => "real",
            Field::Integer => "integer",
            Field::Complex => "complex",
            Field::Pattern => "pattern",
        }
    }
}

/// Symmetry declared by the banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Symmetry {
    General,
    Symmetric,
    SkewSymmetric,
    Hermitian,
}

impl Symmetry {
    /// Parse a banner token, case-insensitively
    pub fn from_token(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("general") {
            Some(Symmetry::General)
        } else if token.eq_ignore_ascii_case("symmetric") {
            Some(Symmetry::Symmetric)
        } else if token.eq_ignore_ascii_case("skew-symmetric") {
            Some(Symmetry::SkewSymmetric)
        } else if token.eq_ignore_ascii_case("hermitian") {
            Some(Symmetry::Hermitian)
        } else {
            None
        }
    }

    /// Canonical lowercase spelling
    pub const fn as_str(self) -> &'static str {
        match self {
            Symmetry::General => "general",
            Symmetry::Symmetric => "symmetric",
            Symmetry::SkewSymmetric => "skew-symmetric",
            Symmetry::Hermitian => "hermitian",
        }
    }
}

/// Parsed banner line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Typecode {
    pub object: Object,
    pub format: StorageFormat,
    pub field: Field,
    pub symmetry: Symmetry,
}

impl Typecode {
    /// Parse the banner line of a Matrix Market file.
    ///
    /// Tokens past the fourth are ignored, matching the reference parser
    /// for the format.
    pub fn parse(line: &str) -> Result<Self> {
        let mut tokens = line.split_whitespace();

        let tag = tokens.next().ok_or(FormatError::InvalidBanner)?;
        if tag != BANNER_TAG {
            return Err(FormatError::InvalidBanner);
        }

        let object = tokens
            .next()
            .and_then(Object::from_token)
            .ok_or(FormatError::InvalidBanner)?;
        let format = tokens
            .next()
            .and_then(StorageFormat::from_token)
            .ok_or(FormatError::InvalidBanner)?;
        let field = tokens
            .next()
            .and_then(Field::from_token)
            .ok_or(FormatError::InvalidBanner)?;
        let symmetry = tokens
            .next()
            .and_then(Symmetry::from_token)
            .ok_or(FormatError::InvalidBanner)?;

        Ok(Self {
            object,
            format,
            field,
            symmetry,
        })
    }

    /// True for the dense storage format
    pub const fn is_array(&self) -> bool {
        matches!(self.format, StorageFormat::Array)
    }

    /// True when each entry is a single scalar token
    pub const fn has_scalar_values(&self) -> bool {
        matches!(self.field, Field::Real | Field::Integer)
    }

    /// True when no symmetry folding applies
    pub const fn is_general(&self) -> bool {
        matches!(self.symmetry, Symmetry::General)
    }
}

impl core::fmt::Display for Typecode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{BANNER_TAG} {} {} {} {}",
            self.object.as_str(),
            self.format.as_str(),
            self.field.as_str(),
            self.symmetry.as_str()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_array_banner() {
        let typecode = Typecode::parse("%%MatrixMarket matrix array real general").unwrap();
        assert_eq!(typecode.object, Object::Matrix);
        assert_eq!(typecode.format, StorageFormat::Array);
        assert_eq!(typecode.field, Field::Real);
        assert_eq!(typecode.symmetry, Symmetry::General);
        assert!(typecode.is_array());
        assert!(typecode.has_scalar_values());
        assert!(typecode.is_general());
    }

    #[test]
    fn test_parse_is_case_insensitive_after_tag() {
        let typecode = Typecode::parse("%%MatrixMarket MATRIX Array Real GENERAL").unwrap();
        assert_eq!(typecode.format, StorageFormat::Array);

        // the tag itself is matched exactly
        assert_eq!(
            Typecode::parse("%%matrixmarket matrix array real general"),
            Err(FormatError::InvalidBanner)
        );
    }

    #[test]
    fn test_parse_coordinate_banner() {
        let typecode =
            Typecode::parse("%%MatrixMarket matrix coordinate integer symmetric").unwrap();
        assert_eq!(typecode.format, StorageFormat::Coordinate);
        assert_eq!(typecode.field, Field::Integer);
        assert_eq!(typecode.symmetry, Symmetry::Symmetric);
        assert!(!typecode.is_array());
        assert!(!typecode.is_general());
    }

    #[test]
    fn test_parse_rejects_malformed_banners() {
        assert_eq!(Typecode::parse(""), Err(FormatError::InvalidBanner));
        assert_eq!(Typecode::parse("3 1"), Err(FormatError::InvalidBanner));
        assert_eq!(
            Typecode::parse("%%MatrixMarket matrix array real"),
            Err(FormatError::InvalidBanner)
        );
        assert_eq!(
            Typecode::parse("%%MatrixMarket tensor array real general"),
            Err(FormatError::InvalidBanner)
        );
        assert_eq!(
            Typecode::parse("%%MatrixMarket matrix dense real general"),
            Err(FormatError::InvalidBanner)
        );
        assert_eq!(
            Typecode::parse("%%MatrixMarket matrix array quaternion general"),
            Err(FormatError::InvalidBanner)
        );
    }

    #[test]
    fn test_display_round_trip() {
        use std::string::ToString;

        let line = "%%MatrixMarket matrix array real general";
        let typecode = Typecode::parse(line).unwrap();
        assert_eq!(typecode.to_string(), line);

        // canonical spelling comes back regardless of input case
        let typecode =
            Typecode::parse("%%MatrixMarket matrix coordinate COMPLEX Hermitian").unwrap();
        assert_eq!(
            typecode.to_string(),
            "%%MatrixMarket matrix coordinate complex hermitian"
        );
    }
}
