use core::str::FromStr;

use serde_json::Value;

use crate::{Array, Literal, Node, Number, Object, Scalar};

mod value;

impl From<serde_json::Number> for Literal {
    fn from(number: serde_json::Number) -> Self {
        super::number_from_text(number.to_string())
    }
}

impl From<&serde_json::Number> for Literal {
    fn from(number: &serde_json::Number) -> Self {
        super::number_from_text(number.to_string())
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Node::Null,
            Value::Bool(b) => Node::from(b),
            Value::Number(number) => Node::Primitive(number.into()),
            Value::String(s) => Node::from(s),
            Value::Array(elements) => {
                Node::Array(elements.into_iter().map(Node::from).collect::<Array>())
            }
            Value::Object(members) => Node::Object(
                members
                    .into_iter()
                    .map(|(key, value)| (key, Node::from(value)))
                    .collect::<Object>(),
            ),
        }
    }
}

impl From<&Value> for Node {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Node::Null,
            Value::Bool(b) => Node::from(*b),
            Value::Number(number) => Node::Primitive(number.into()),
            Value::String(s) => Node::from(s.as_str()),
            Value::Array(elements) => {
                Node::Array(elements.iter().map(Node::from).collect::<Array>())
            }
            Value::Object(members) => Node::Object(
                members
                    .iter()
                    .map(|(key, value)| (key.as_str(), Node::from(value)))
                    .collect::<Object>(),
            ),
        }
    }
}

impl From<&Node> for Value {
    fn from(node: &Node) -> Self {
        match node {
            Node::Null => Value::Null,
            Node::Primitive(literal) => match literal.value() {
                Scalar::Bool(b) => Value::Bool(b),
                Scalar::String(s) => Value::String(s.to_owned()),
                Scalar::Number(number) => {
                    json_number(literal.content(), number).map_or(Value::Null, Value::Number)
                }
            },
            Node::Object(object) => Value::Object(
                object
                    .iter()
                    .map(|(key, value)| (key.clone(), Value::from(value)))
                    .collect(),
            ),
            Node::Array(array) => Value::Array(array.iter().map(Value::from).collect()),
        }
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        Value::from(&node)
    }
}

/// Prefer the literal's own text so `1.0` stays a float; fall back to the native value.
/// Non-finite floats have no JSON form.
fn json_number(content: &str, value: Number) -> Option<serde_json::Number> {
    if let Ok(number) = content.parse::<serde_json::Number>() {
        return Some(number);
    }
    match value {
        Number::PositiveInteger(u) => Some(u.into()),
        Number::NegativeInteger(i) => Some(i.into()),
        Number::Float(f) => serde_json::Number::from_f64(f),
    }
}

/// Parse JSON text into a tree, keeping member order.
impl FromStr for Node {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use crate::{jsonnode, Literal, Node, Number};
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(json!(null), jsonnode!(null); "null")]
    #[test_case(json!(true), jsonnode!(true); "bool")]
    #[test_case(json!(42u64), jsonnode!(42); "positive number")]
    #[test_case(json!(-42), jsonnode!((-42)); "negative number")]
    #[test_case(json!(2.5), jsonnode!(2.5); "float number")]
    #[test_case(json!("hello"), jsonnode!("hello"); "string")]
    #[test_case(json!([1, 2, 3]), jsonnode!([1, 2, 3]); "array")]
    #[test_case(json!({"a": 1, "b": "test", "c": true}), jsonnode!({"c": true, "a": 1, "b": "test"}); "object")]
    fn from_value(value: Value, expected: Node) {
        assert_eq!(Node::from(&value), expected);
        assert_eq!(Node::from(value), expected);
    }

    #[test]
    fn from_value_keeps_float_content() {
        let node = Node::from(json!([1, 1.0]));
        assert_eq!(node.to_string(), "[1,1.0]");
        assert_eq!(node.try_pointer("/1").and_then(Node::try_as_i64).ok(), None);
    }

    #[test]
    fn into_value() {
        let node = jsonnode!({"a": 1, "b": [true, null, "s", (-2), 0.5]});
        assert_eq!(
            Value::from(&node),
            json!({"a": 1, "b": [true, null, "s", -2, 0.5]})
        );
    }

    #[test]
    fn into_value_prefers_content() {
        let node = Node::Primitive(Literal::number_with_content(Number::Float(1.0), "1.0"));
        assert_eq!(Value::from(node).to_string(), "1.0");
    }

    #[cfg(not(feature = "arbitrary-precision"))]
    #[test]
    fn into_value_non_finite() {
        let node = Node::Primitive(Literal::number_with_content(
            Number::Float(f64::INFINITY),
            "1e400",
        ));
        assert_eq!(Value::from(&node), Value::Null);
    }

    #[test]
    fn from_str() {
        let node: Node = r#"{"z": [1, 2.5], "a": "x"}"#.parse().expect("Valid JSON");
        assert_eq!(node.to_string(), r#"{"z":[1,2.5],"a":"x"}"#);
        assert!("{".parse::<Node>().is_err());
    }
}
