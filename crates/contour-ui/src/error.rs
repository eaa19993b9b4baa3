use std::fmt;

use contour_lang::ParseError;

/// Why a shape description could not be turned into drawable shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// The text is not valid shape-language syntax.
    Parse(ParseError),
    /// Syntax is fine but the function name is not a known shape.
    UnknownShape { name: String },
    /// A numeric argument did not hold a usable number.
    InvalidNumber { shape: String, key: String, value: String },
    /// A colour argument was neither `none` nor a recognized colour.
    InvalidColor { shape: String, key: String, value: String },
    /// Path data produced no drawable segments.
    InvalidPath { data: String, reason: String },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::Parse(e) => e.fmt(f),
            ShapeError::UnknownShape { name } => write!(f, "unknown shape {:?}", name),
            ShapeError::InvalidNumber { shape, key, value } => {
                write!(f, "{}(): {} expects a number, got {:?}", shape, key, value)
            }
            ShapeError::InvalidColor { shape, key, value } => {
                write!(f, "{}(): {} expects a colour or \"none\", got {:?}", shape, key, value)
            }
            ShapeError::InvalidPath { data, reason } => {
                write!(f, "path(): invalid data {:?}: {}", data, reason)
            }
        }
    }
}

impl std::error::Error for ShapeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShapeError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseError> for ShapeError {
    fn from(e: ParseError) -> Self {
        ShapeError::Parse(e)
    }
}

/// Error from widget property plumbing.
#[derive(Debug, Clone, PartialEq)]
pub enum PropError {
    /// The widget has no property with this name.
    NotFound(String),
    /// The property exists but takes a different value type.
    TypeMismatch { name: String, expected: &'static str },
    /// The property was stored but its content is not a valid shape description.
    InvalidValue(ShapeError),
}

impl fmt::Display for PropError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropError::NotFound(name) => write!(f, "no property named {:?}", name),
            PropError::TypeMismatch { name, expected } => {
                write!(f, "property {:?} expects a {} value", name, expected)
            }
            PropError::InvalidValue(e) => write!(f, "invalid shape value: {}", e),
        }
    }
}

impl std::error::Error for PropError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PropError::InvalidValue(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ShapeError> for PropError {
    fn from(e: ShapeError) -> Self {
        PropError::InvalidValue(e)
    }
}
