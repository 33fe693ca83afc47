use std::hash::{Hash, Hasher};

use crate::{error::Result, Error, Number, ValueType};

#[derive(Debug, Copy, Clone)]
enum Payload {
    Bool(bool),
    Number(Number),
    // The string itself lives in `content`
    String,
}

/// Native value held by a [`Literal`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Scalar<'a> {
    Bool(bool),
    Number(Number),
    String(&'a str),
}

/// A non-null JSON primitive: its native value together with its textual content.
///
/// Both parts are fixed at construction. For strings the content is the unquoted string;
/// for booleans and numbers it is the text that is rendered.
///
/// `Literal`'s own `PartialEq` and `Hash` compare `(is_string, content)`, so `1` and `1.0`
/// are different literals. Comparing the same literals as [`Node`](crate::Node)s uses value
/// equality instead, where they are equal.
#[derive(Debug, Clone)]
pub struct Literal {
    payload: Payload,
    content: Box<str>,
}

impl Literal {
    #[must_use]
    pub fn bool(value: bool) -> Literal {
        Literal {
            payload: Payload::Bool(value),
            content: if value { "true" } else { "false" }.into(),
        }
    }

    #[must_use]
    pub fn string(value: impl Into<Box<str>>) -> Literal {
        Literal {
            payload: Payload::String,
            content: value.into(),
        }
    }

    /// A number literal whose content is the canonical rendering of `value`.
    ///
    /// `None` for a `NaN` or infinite float, which has no JSON text.
    #[must_use]
    pub fn number(value: impl Into<Number>) -> Option<Literal> {
        let value = value.into();
        value.is_finite().then(|| Literal::canonical(value))
    }

    /// A number literal from a float; `None` for `NaN` and infinities.
    #[must_use]
    pub fn from_f64(value: f64) -> Option<Literal> {
        Number::from_f64(value).map(Literal::canonical)
    }

    fn canonical(value: Number) -> Literal {
        Literal {
            payload: Payload::Number(value),
            content: value.to_string().into_boxed_str(),
        }
    }

    /// A number literal that keeps the exact source text it was read from.
    ///
    /// `content` must be a valid JSON number denoting `value`, e.g. `1.0` or `1e2` for
    /// `Number::Float(1.0)` and `Number::Float(100.0)`. It is rendered verbatim.
    #[must_use]
    pub fn number_with_content(value: Number, content: impl Into<Box<str>>) -> Literal {
        Literal {
            payload: Payload::Number(value),
            content: content.into(),
        }
    }

    /// Textual content: the unquoted string, `true`/`false`, or the number's text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self.payload, Payload::String)
    }

    #[must_use]
    pub fn value(&self) -> Scalar<'_> {
        match self.payload {
            Payload::Bool(b) => Scalar::Bool(b),
            Payload::Number(n) => Scalar::Number(n),
            Payload::String => Scalar::String(&self.content),
        }
    }

    #[must_use]
    pub fn value_type(&self) -> ValueType {
        match self.payload {
            Payload::Bool(_) => ValueType::Boolean,
            Payload::Number(_) => ValueType::Number,
            Payload::String => ValueType::String,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        self.try_as_bool().ok()
    }

    /// # Errors
    ///
    /// `TypeMismatch` if the literal is not a boolean.
    pub fn try_as_bool(&self) -> Result<bool> {
        match self.payload {
            Payload::Bool(b) => Ok(b),
            _ => Err(Error::type_mismatch("boolean", self.value_type())),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.try_as_str().ok()
    }

    /// # Errors
    ///
    /// `TypeMismatch` if the literal is not a string.
    pub fn try_as_str(&self) -> Result<&str> {
        match self.payload {
            Payload::String => Ok(&self.content),
            _ => Err(Error::type_mismatch("string", self.value_type())),
        }
    }

    #[must_use]
    pub fn as_number(&self) -> Option<Number> {
        self.try_as_number().ok()
    }

    /// # Errors
    ///
    /// `NumberFormat` if the literal is not a number.
    pub fn try_as_number(&self) -> Result<Number> {
        self.extract("number", Some)
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        self.try_as_f64().ok()
    }

    /// # Errors
    ///
    /// `NumberFormat` if the literal is not a number.
    pub fn try_as_f64(&self) -> Result<f64> {
        self.extract("f64", |n| Some(n.as_f64()))
    }

    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        self.try_as_i64().ok()
    }

    /// # Errors
    ///
    /// `NumberFormat` if the literal is not an integer number that fits into `i64`.
    pub fn try_as_i64(&self) -> Result<i64> {
        self.extract("i64", |n| n.as_i64())
    }

    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        self.try_as_u64().ok()
    }

    /// # Errors
    ///
    /// `NumberFormat` if the literal is not a non-negative integer number that fits into `u64`.
    pub fn try_as_u64(&self) -> Result<u64> {
        self.extract("u64", |n| n.as_u64())
    }

    fn extract<T>(
        &self,
        target: &'static str,
        convert: impl FnOnce(Number) -> Option<T>,
    ) -> Result<T> {
        let value = match self.payload {
            Payload::Number(n) => convert(n),
            Payload::Bool(_) | Payload::String => None,
        };
        value.ok_or_else(|| Error::number_format(&self.content, target))
    }

    /// Value equality: numbers by mathematical value, everything else by exact value.
    #[must_use]
    pub fn value_eq(&self, other: &Literal) -> bool {
        match (self.payload, other.payload) {
            (Payload::Bool(a), Payload::Bool(b)) => a == b,
            (Payload::Number(a), Payload::Number(b)) => a == b,
            (Payload::String, Payload::String) => self.content == other.content,
            _ => false,
        }
    }

    /// Lexical equality: numbers by their textual content, everything else by value.
    #[must_use]
    pub fn eq_lexical(&self, other: &Literal) -> bool {
        match (self.payload, other.payload) {
            (Payload::Number(_), Payload::Number(_)) => self.content == other.content,
            _ => self.value_eq(other),
        }
    }

    /// Feed the hash that agrees with [`Literal::value_eq`].
    pub fn value_hash<H: Hasher>(&self, state: &mut H) {
        self.value_type().hash(state);
        match self.payload {
            Payload::Bool(b) => b.hash(state),
            Payload::Number(n) => n.hash(state),
            Payload::String => self.content.hash(state),
        }
    }
}

impl PartialEq for Literal {
    fn eq(&self, other: &Self) -> bool {
        self.is_string() == other.is_string() && self.content == other.content
    }
}

impl Eq for Literal {}

impl Hash for Literal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.is_string().hash(state);
        self.content.hash(state);
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::bool(value)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::string(value)
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::string(value)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Literal {
                fn from(value: $ty) -> Self {
                    Literal::canonical(Number::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(u64, i64, u32, i32);
