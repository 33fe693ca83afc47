use core::fmt;
use std::hash::{Hash, Hasher};

use crate::{error::Result, Array, Error, Literal, Number, Object, Primitive};

/// The single null node. Every null accessor hands out a reference to it.
pub static NULL: Node = Node::Null;

/// Kind of a JSON value, derived from a node's shape and, for primitives, its payload.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ValueType {
    Null,
    Object,
    Array,
    String,
    Number,
    Boolean,
}

impl ValueType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ValueType::Null => "null",
            ValueType::Object => "object",
            ValueType::Array => "array",
            ValueType::String => "string",
            ValueType::Number => "number",
            ValueType::Boolean => "boolean",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable JSON value.
///
/// `PartialEq`, `Eq` and `Hash` implement value equality: numbers compare by mathematical
/// value (`1 == 1.0`) and objects ignore key order. [`Node::eq_lexical`] additionally tells
/// apart numbers written differently.
#[derive(Debug, Clone, Default)]
pub enum Node {
    #[default]
    Null,
    Primitive(Literal),
    Object(Object),
    Array(Array),
}

const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Node>();
};

impl Node {
    /// A number node from a float; `None` for `NaN` and infinities.
    #[must_use]
    pub fn from_f64(value: f64) -> Option<Node> {
        Literal::from_f64(value).map(Node::Primitive)
    }

    #[must_use]
    pub fn value_type(&self) -> ValueType {
        match self {
            Node::Null => ValueType::Null,
            Node::Primitive(literal) => literal.value_type(),
            Node::Object(_) => ValueType::Object,
            Node::Array(_) => ValueType::Array,
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    /// Whether this is a leaf, including null.
    #[must_use]
    pub fn is_primitive(&self) -> bool {
        matches!(self, Node::Null | Node::Primitive(_))
    }

    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Node::Object(_))
    }

    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Node::Array(_))
    }

    #[must_use]
    pub fn as_primitive(&self) -> Option<Primitive<'_>> {
        self.try_as_primitive().ok()
    }

    /// # Errors
    ///
    /// `TypeMismatch` if the node is an object or an array.
    pub fn try_as_primitive(&self) -> Result<Primitive<'_>> {
        match self {
            Node::Null => Ok(Primitive::Null),
            Node::Primitive(literal) => Ok(Primitive::Literal(literal)),
            Node::Object(_) | Node::Array(_) => {
                Err(Error::type_mismatch("primitive", self.value_type()))
            }
        }
    }

    #[must_use]
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Node::Primitive(literal) => Some(literal),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_object(&self) -> Option<&Object> {
        self.try_as_object().ok()
    }

    /// # Errors
    ///
    /// `TypeMismatch` if the node is not an object.
    pub fn try_as_object(&self) -> Result<&Object> {
        match self {
            Node::Object(object) => Ok(object),
            _ => Err(Error::type_mismatch("object", self.value_type())),
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        self.try_as_array().ok()
    }

    /// # Errors
    ///
    /// `TypeMismatch` if the node is not an array.
    pub fn try_as_array(&self) -> Result<&Array> {
        match self {
            Node::Array(array) => Ok(array),
            _ => Err(Error::type_mismatch("array", self.value_type())),
        }
    }

    /// The shared [`NULL`] instance, if this node is null.
    #[must_use]
    pub fn as_null(&self) -> Option<&'static Node> {
        self.try_as_null().ok()
    }

    /// # Errors
    ///
    /// `TypeMismatch` if the node is not null.
    pub fn try_as_null(&self) -> Result<&'static Node> {
        match self {
            Node::Null => Ok(&NULL),
            _ => Err(Error::type_mismatch("null", self.value_type())),
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        self.as_primitive()?.as_bool()
    }

    /// # Errors
    ///
    /// `TypeMismatch` if the node is not a boolean.
    pub fn try_as_bool(&self) -> Result<bool> {
        self.try_as_primitive()?.try_as_bool()
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.as_primitive()?.as_str()
    }

    /// # Errors
    ///
    /// `TypeMismatch` if the node is not a string.
    pub fn try_as_str(&self) -> Result<&str> {
        self.try_as_primitive()?.try_as_str()
    }

    #[must_use]
    pub fn as_number(&self) -> Option<Number> {
        self.as_primitive()?.as_number()
    }

    /// # Errors
    ///
    /// `TypeMismatch` for containers, `NumberFormat` for primitives that are not numbers.
    pub fn try_as_number(&self) -> Result<Number> {
        self.try_as_primitive()?.try_as_number()
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        self.as_primitive()?.as_f64()
    }

    /// # Errors
    ///
    /// `TypeMismatch` for containers, `NumberFormat` for primitives that are not numbers.
    pub fn try_as_f64(&self) -> Result<f64> {
        self.try_as_primitive()?.try_as_f64()
    }

    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        self.as_primitive()?.as_i64()
    }

    /// # Errors
    ///
    /// `TypeMismatch` for containers, `NumberFormat` for primitives that are not integer
    /// numbers fitting into `i64`.
    pub fn try_as_i64(&self) -> Result<i64> {
        self.try_as_primitive()?.try_as_i64()
    }

    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        self.as_primitive()?.as_u64()
    }

    /// # Errors
    ///
    /// `TypeMismatch` for containers, `NumberFormat` for primitives that are not non-negative
    /// integer numbers fitting into `u64`.
    pub fn try_as_u64(&self) -> Result<u64> {
        self.try_as_primitive()?.try_as_u64()
    }

    /// Lexical equality: like `==`, except that numbers are compared by their textual content.
    ///
    /// `1` and `1.0` are equal values but lexically different.
    #[must_use]
    pub fn eq_lexical(&self, other: &Node) -> bool {
        match (self, other) {
            (Node::Null, Node::Null) => true,
            (Node::Primitive(a), Node::Primitive(b)) => a.eq_lexical(b),
            (Node::Object(a), Node::Object(b)) => a.eq_lexical(b),
            (Node::Array(a), Node::Array(b)) => {
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(a, b)| a.eq_lexical(b))
            }
            _ => false,
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Node::Null, Node::Null) => true,
            (Node::Primitive(a), Node::Primitive(b)) => a.value_eq(b),
            (Node::Object(a), Node::Object(b)) => a == b,
            (Node::Array(a), Node::Array(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Node::Null => ValueType::Null.hash(state),
            Node::Primitive(literal) => literal.value_hash(state),
            Node::Object(object) => {
                ValueType::Object.hash(state);
                object.hash(state);
            }
            Node::Array(array) => {
                ValueType::Array.hash(state);
                array.hash(state);
            }
        }
    }
}

impl From<Literal> for Node {
    fn from(value: Literal) -> Self {
        Node::Primitive(value)
    }
}

impl From<Object> for Node {
    fn from(value: Object) -> Self {
        Node::Object(value)
    }
}

impl From<Array> for Node {
    fn from(value: Array) -> Self {
        Node::Array(value)
    }
}

impl From<Vec<Node>> for Node {
    fn from(value: Vec<Node>) -> Self {
        Node::Array(Array::from(value))
    }
}

/// Non-finite floats become `Null`, like `From<f64>`.
impl From<Number> for Node {
    fn from(value: Number) -> Self {
        Literal::number(value).map_or(Node::Null, Node::Primitive)
    }
}

/// Non-finite floats become `Null`, as they have no JSON representation.
impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Node::from_f64(value).unwrap_or(Node::Null)
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(value: Option<T>) -> Self {
        value.map_or(Node::Null, Into::into)
    }
}

macro_rules! impl_from_literal {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Node {
                fn from(value: $ty) -> Self {
                    Node::Primitive(Literal::from(value))
                }
            }
        )*
    };
}

impl_from_literal!(bool, &str, String, u64, i64, u32, i32);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jsonnode;
    use ahash::AHashSet;
    use test_case::test_case;

    fn float(content: &str) -> Node {
        let value: f64 = content.parse().expect("Valid float");
        Node::Primitive(Literal::number_with_content(Number::Float(value), content))
    }

    #[test_case(Node::Null, ValueType::Null)]
    #[test_case(Node::from(true), ValueType::Boolean)]
    #[test_case(Node::from(1u64), ValueType::Number)]
    #[test_case(Node::from("1"), ValueType::String)]
    #[test_case(jsonnode!([]), ValueType::Array)]
    #[test_case(jsonnode!({}), ValueType::Object)]
    fn value_type(node: Node, expected: ValueType) {
        assert_eq!(node.value_type(), expected);
    }

    #[test]
    fn null_is_a_singleton() {
        let first = jsonnode!(null);
        let second = Node::from(None::<bool>);
        let a = first.try_as_null().expect("Null");
        let b = second.try_as_null().expect("Null");
        assert!(std::ptr::eq(a, b));
        assert!(std::ptr::eq(a, &NULL));
        assert!(std::ptr::eq(
            Node::Null.as_primitive().and_then(|p| p.as_null()).expect("Null"),
            &NULL
        ));
    }

    #[test]
    fn null_is_a_primitive() {
        let primitive = Node::Null.try_as_primitive().expect("Primitive");
        assert!(primitive.is_null());
        assert!(Node::Null.is_primitive());
    }

    #[test_case(jsonnode!({}), "primitive", ValueType::Object)]
    #[test_case(jsonnode!([1]), "primitive", ValueType::Array)]
    fn containers_are_not_primitives(node: Node, expected: &'static str, actual: ValueType) {
        assert!(node.as_primitive().is_none());
        assert_eq!(
            node.try_as_primitive().map(|_| ()),
            Err(Error::TypeMismatch {
                expected,
                actual,
                location: None,
            })
        );
    }

    #[test]
    fn narrowing_mismatches() {
        let node = Node::from("text");
        assert!(node.try_as_object().unwrap_err().is_type_mismatch());
        assert!(node.try_as_array().unwrap_err().is_type_mismatch());
        assert!(node.try_as_null().unwrap_err().is_type_mismatch());
        assert!(node.as_object().is_none());
        assert!(node.as_array().is_none());
        assert!(node.as_null().is_none());
    }

    #[test]
    fn scalar_extraction() {
        assert_eq!(Node::from(true).try_as_bool(), Ok(true));
        assert_eq!(Node::from("s").try_as_str(), Ok("s"));
        assert_eq!(Node::from(-3i64).try_as_i64(), Ok(-3));
        assert_eq!(Node::from(3u32).try_as_u64(), Ok(3));
        assert_eq!(Node::from(0.5).try_as_f64(), Ok(0.5));
        // wrong payload kind inside a primitive
        assert!(Node::from("3").try_as_i64().unwrap_err().is_number_format());
        assert!(Node::Null.try_as_f64().unwrap_err().is_number_format());
        assert!(Node::from(1u64).try_as_bool().unwrap_err().is_type_mismatch());
        // wrong node shape
        assert!(jsonnode!([1]).try_as_i64().unwrap_err().is_type_mismatch());
        assert_eq!(jsonnode!({}).as_f64(), None);
    }

    #[test]
    fn value_and_lexical_equality() {
        let integer = Node::from(1u64);
        let fractional = float("1.0");
        let string = Node::from("1");
        assert_eq!(integer, fractional);
        assert!(!integer.eq_lexical(&fractional));
        assert_ne!(string, integer);
        assert!(!string.eq_lexical(&integer));
        assert!(integer.eq_lexical(&Node::from(1i32)));
    }

    #[test]
    fn value_equal_nodes_share_set_slots() {
        let mut set = AHashSet::new();
        set.insert(Node::from(1u64));
        assert!(!set.insert(float("1.0")));
        assert!(!set.insert(float("1e0")));
        assert!(set.insert(Node::from("1")));
        assert!(set.insert(jsonnode!({"a": 1})));
        assert!(!set.insert(jsonnode!({"a": (float("1.0"))})));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn lexical_equality_recurses() {
        let left = jsonnode!({"a": [1, (float("2.0"))], "b": null});
        let right = jsonnode!({"b": null, "a": [1, 2]});
        assert_eq!(left, right);
        assert!(!left.eq_lexical(&right));
        assert!(left.eq_lexical(&left.clone()));
    }

    #[test]
    fn arrays_are_order_sensitive() {
        assert_ne!(jsonnode!([1, 2]), jsonnode!([2, 1]));
        assert_ne!(jsonnode!([1]), jsonnode!([1, 1]));
    }

    #[test]
    fn non_finite_floats() {
        assert!(Node::from_f64(f64::NAN).is_none());
        assert_eq!(Node::from(f64::INFINITY), Node::Null);
    }

    #[test_case(Number::Float(f64::NAN))]
    #[test_case(Number::Float(f64::INFINITY))]
    #[test_case(Number::Float(f64::NEG_INFINITY))]
    fn non_finite_numbers_become_null(number: Number) {
        let node = Node::from(number);
        assert!(node.is_null());
        assert_eq!(node.to_string(), "null");
        assert_eq!(node, node.clone());
    }

    #[test]
    fn strict_number_access() {
        assert_eq!(Node::from(7u64).try_as_number(), Ok(Number::PositiveInteger(7)));
        assert_eq!(Node::from(0.5).as_number(), Some(Number::Float(0.5)));
        assert_eq!(
            Node::from("7").try_as_number(),
            Err(Error::NumberFormat {
                content: "7".to_string(),
                target: "number",
            })
        );
        assert!(Node::Null.try_as_number().unwrap_err().is_number_format());
        assert_eq!(
            jsonnode!([7]).try_as_number(),
            Err(Error::TypeMismatch {
                expected: "primitive",
                actual: ValueType::Array,
                location: None,
            })
        );
        assert_eq!(jsonnode!({}).as_number(), None);
    }

    #[test]
    fn shared_across_threads() {
        let tree = std::sync::Arc::new(jsonnode!({"a": [true, null]}));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let tree = std::sync::Arc::clone(&tree);
                std::thread::spawn(move || tree.to_string())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().expect("Thread panicked"), r#"{"a":[true,null]}"#);
        }
    }
}
