use core::fmt;

use crate::ValueType;

/// A slot inside a container that an accessor looked at.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Location {
    /// An object member.
    Key(String),
    /// An array element.
    Index(usize),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Key(key) => write!(f, "key \"{key}\""),
            Location::Index(idx) => write!(f, "index {idx}"),
        }
    }
}

impl From<&str> for Location {
    fn from(value: &str) -> Self {
        Location::Key(value.to_string())
    }
}

impl From<String> for Location {
    fn from(value: String) -> Self {
        Location::Key(value)
    }
}

impl From<usize> for Location {
    fn from(value: usize) -> Self {
        Location::Index(value)
    }
}

/// Failure of a strict accessor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The node (or the primitive payload) has a different kind than requested.
    #[error("expected {expected}, found {actual}{}", At(.location))]
    TypeMismatch {
        expected: &'static str,
        actual: ValueType,
        location: Option<Location>,
    },
    /// Strict container lookup on a missing key or an out-of-bounds index.
    #[error("{location} not found")]
    NotFound { location: Location },
    /// Numeric extraction from a primitive that does not hold a suitable number.
    #[error("`{content}` is not a valid {target}")]
    NumberFormat {
        content: String,
        target: &'static str,
    },
}

impl Error {
    pub(crate) fn type_mismatch(expected: &'static str, actual: ValueType) -> Self {
        tracing::trace!(expected, %actual, "type mismatch");
        Error::TypeMismatch {
            expected,
            actual,
            location: None,
        }
    }

    pub(crate) fn not_found(location: impl Into<Location>) -> Self {
        let location = location.into();
        tracing::trace!(%location, "lookup miss");
        Error::NotFound { location }
    }

    pub(crate) fn number_format(content: &str, target: &'static str) -> Self {
        tracing::trace!(content, target, "number format");
        Error::NumberFormat {
            content: content.to_string(),
            target,
        }
    }

    /// Attach the container slot the failing value was read from.
    ///
    /// Only `TypeMismatch` carries a location of its own; other errors are returned unchanged.
    #[must_use]
    pub(crate) fn at(self, slot: impl Into<Location>) -> Self {
        match self {
            Error::TypeMismatch {
                expected,
                actual,
                location: None,
            } => Error::TypeMismatch {
                expected,
                actual,
                location: Some(slot.into()),
            },
            other => other,
        }
    }

    /// Whether this is a `NotFound` failure.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// Whether this is a `TypeMismatch` failure.
    #[must_use]
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Error::TypeMismatch { .. })
    }

    /// Whether this is a `NumberFormat` failure.
    #[must_use]
    pub fn is_number_format(&self) -> bool {
        matches!(self, Error::NumberFormat { .. })
    }
}

struct At<'a>(&'a Option<Location>);

impl fmt::Display for At<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(location) => write!(f, " at {location}"),
            None => Ok(()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
