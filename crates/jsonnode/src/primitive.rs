use std::hash::{Hash, Hasher};

use crate::{error::Result, Error, Literal, Number, ValueType, NULL};

/// Borrowed view of a leaf node: either the null singleton or a [`Literal`].
///
/// Equality and hashing follow value equality, like [`Node`](crate::Node).
#[derive(Debug, Copy, Clone)]
pub enum Primitive<'a> {
    Null,
    Literal(&'a Literal),
}

impl<'a> Primitive<'a> {
    #[must_use]
    pub fn value_type(&self) -> ValueType {
        match self {
            Primitive::Null => ValueType::Null,
            Primitive::Literal(literal) => literal.value_type(),
        }
    }

    /// Textual content; `null` for the null primitive.
    #[must_use]
    pub fn content(&self) -> &'a str {
        match self {
            Primitive::Null => "null",
            Primitive::Literal(literal) => literal.content(),
        }
    }

    /// Content of a non-null primitive.
    #[must_use]
    pub fn content_or_null(&self) -> Option<&'a str> {
        match self {
            Primitive::Null => None,
            Primitive::Literal(literal) => Some(literal.content()),
        }
    }

    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Primitive::Literal(literal) if literal.is_string())
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Primitive::Null)
    }

    #[must_use]
    pub fn as_literal(&self) -> Option<&'a Literal> {
        match self {
            Primitive::Null => None,
            Primitive::Literal(literal) => Some(literal),
        }
    }

    #[must_use]
    pub fn as_null(&self) -> Option<&'static crate::Node> {
        self.try_as_null().ok()
    }

    /// # Errors
    ///
    /// `TypeMismatch` if the primitive is not null.
    pub fn try_as_null(&self) -> Result<&'static crate::Node> {
        match self {
            Primitive::Null => Ok(&NULL),
            Primitive::Literal(literal) => Err(Error::type_mismatch("null", literal.value_type())),
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        self.try_as_bool().ok()
    }

    /// # Errors
    ///
    /// `TypeMismatch` if the primitive is not a boolean.
    pub fn try_as_bool(&self) -> Result<bool> {
        match self {
            Primitive::Null => Err(Error::type_mismatch("boolean", ValueType::Null)),
            Primitive::Literal(literal) => literal.try_as_bool(),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&'a str> {
        self.try_as_str().ok()
    }

    /// # Errors
    ///
    /// `TypeMismatch` if the primitive is not a string.
    pub fn try_as_str(&self) -> Result<&'a str> {
        match self {
            Primitive::Null => Err(Error::type_mismatch("string", ValueType::Null)),
            Primitive::Literal(literal) => literal.try_as_str(),
        }
    }

    #[must_use]
    pub fn as_number(&self) -> Option<Number> {
        self.try_as_number().ok()
    }

    /// # Errors
    ///
    /// `NumberFormat` if the primitive is not a number.
    pub fn try_as_number(&self) -> Result<Number> {
        match self {
            Primitive::Null => Err(Error::number_format("null", "number")),
            Primitive::Literal(literal) => literal.try_as_number(),
        }
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        self.try_as_f64().ok()
    }

    /// # Errors
    ///
    /// `NumberFormat` if the primitive is not a number.
    pub fn try_as_f64(&self) -> Result<f64> {
        match self {
            Primitive::Null => Err(Error::number_format("null", "f64")),
            Primitive::Literal(literal) => literal.try_as_f64(),
        }
    }

    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        self.try_as_i64().ok()
    }

    /// # Errors
    ///
    /// `NumberFormat` if the primitive is not an integer number that fits into `i64`.
    pub fn try_as_i64(&self) -> Result<i64> {
        match self {
            Primitive::Null => Err(Error::number_format("null", "i64")),
            Primitive::Literal(literal) => literal.try_as_i64(),
        }
    }

    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        self.try_as_u64().ok()
    }

    /// # Errors
    ///
    /// `NumberFormat` if the primitive is not a non-negative integer number that fits into `u64`.
    pub fn try_as_u64(&self) -> Result<u64> {
        match self {
            Primitive::Null => Err(Error::number_format("null", "u64")),
            Primitive::Literal(literal) => literal.try_as_u64(),
        }
    }

    #[must_use]
    pub fn eq_lexical(&self, other: &Primitive<'_>) -> bool {
        match (self, other) {
            (Primitive::Null, Primitive::Null) => true,
            (Primitive::Literal(a), Primitive::Literal(b)) => a.eq_lexical(b),
            _ => false,
        }
    }
}

impl PartialEq for Primitive<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Primitive::Null, Primitive::Null) => true,
            (Primitive::Literal(a), Primitive::Literal(b)) => a.value_eq(b),
            _ => false,
        }
    }
}

impl Eq for Primitive<'_> {}

impl Hash for Primitive<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Primitive::Null => ValueType::Null.hash(state),
            Primitive::Literal(literal) => literal.value_hash(state),
        }
    }
}
