//! Error handling for Panelbore
//!
//! Provides typed error types for all layers of the workspace:
//! - Validation errors (hole construction, panel bounds)
//! - Transform errors (orientation requests)
//! - Decode errors (MPR interchange parsing)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Validation error type
///
/// Represents errors raised while constructing holes or inserting them
/// into a panel. Validation failures are always fatal to the hole being
/// created; there are no partially-constructed holes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Hole diameter must be strictly positive
    #[error("Hole diameter must be positive, got {diameter}")]
    NonPositiveDiameter {
        /// The rejected diameter in millimetres.
        diameter: f64,
    },

    /// Hole depth must not be negative (0 means a through hole)
    #[error("Hole depth must not be negative, got {depth}")]
    NegativeDepth {
        /// The rejected depth in millimetres.
        depth: f64,
    },

    /// Hole position lies outside the panel plane
    #[error("Hole at ({x}, {y}) lies outside the {length_x} x {width_y} panel")]
    OutOfBounds {
        /// The hole X coordinate.
        x: f64,
        /// The hole Y coordinate.
        y: f64,
        /// The panel length along X.
        length_x: f64,
        /// The panel width along Y.
        width_y: f64,
    },
}

/// Transform error type
///
/// Represents rejected orientation requests. Raw rotation values are
/// validated at the API boundary and never silently coerced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// Rotation is not one of the four supported quarter turns
    #[error("Rotation must be 0, 90, 180 or 270 degrees, got {degrees}")]
    InvalidRotation {
        /// The rejected rotation in degrees.
        degrees: u32,
    },
}

/// Decode error type
///
/// Represents errors raised while decoding MPR interchange text into a
/// panel. In lenient mode a malformed hole block is skipped and counted
/// instead of aborting the decode.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// None of the three dimension directives were found
    #[error("No panel dimension directives (_BSX/_BSY/_BSZ) found")]
    MissingDimensions,

    /// A recognized hole block is missing a required attribute
    #[error("Hole block {block_index} is missing a required attribute or holds an invalid value")]
    MalformedHole {
        /// Zero-based index of the offending directive block.
        block_index: usize,
    },
}

/// Main error type for Panelbore
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Validation error
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Transform error
    #[error(transparent)]
    Transform(#[from] TransformError),

    /// Decode error
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a validation error
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// Check if this is a transform error
    pub fn is_transform_error(&self) -> bool {
        matches!(self, Error::Transform(_))
    }

    /// Check if this is a decode error
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Error::Decode(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
