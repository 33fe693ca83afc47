use core::fmt;

use ::serde::{
    de::{self, MapAccess, SeqAccess, Visitor},
    ser::{SerializeMap, SerializeSeq},
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::{Array, Literal, Node, Number, Object, Scalar};

#[cfg(feature = "arbitrary-precision")]
const NUMBER_TOKEN: &str = "$serde_json::private::Number";

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Number::PositiveInteger(u) => serializer.serialize_u64(u),
            Number::NegativeInteger(i) => serializer.serialize_i64(i),
            Number::Float(f) => serializer.serialize_f64(f),
        }
    }
}

impl Serialize for Literal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.value() {
            Scalar::Bool(b) => serializer.serialize_bool(b),
            Scalar::Number(n) => n.serialize(serializer),
            Scalar::String(s) => serializer.serialize_str(s),
        }
    }
}

impl Serialize for Object {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Serialize for Array {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Null => serializer.serialize_unit(),
            Node::Primitive(literal) => literal.serialize(serializer),
            Node::Object(object) => object.serialize(serializer),
            Node::Array(array) => array.serialize(serializer),
        }
    }
}

struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = Node;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("any valid JSON value")
    }

    fn visit_bool<E>(self, value: bool) -> Result<Node, E> {
        Ok(Node::from(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Node, E> {
        Ok(Node::from(value))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Node, E> {
        Ok(Node::from(value))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Node, E> {
        Node::from_f64(value)
            .ok_or_else(|| E::invalid_value(de::Unexpected::Float(value), &"a finite number"))
    }

    fn visit_str<E>(self, value: &str) -> Result<Node, E> {
        Ok(Node::from(value))
    }

    fn visit_string<E>(self, value: String) -> Result<Node, E> {
        Ok(Node::from(value))
    }

    fn visit_none<E>(self) -> Result<Node, E> {
        Ok(Node::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Node, D::Error> {
        Deserialize::deserialize(deserializer)
    }

    fn visit_unit<E>(self) -> Result<Node, E> {
        Ok(Node::Null)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Node, A::Error> {
        let mut elements = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(Node::Array(Array::new(elements)))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Node, A::Error> {
        let Some(first) = map.next_key::<String>()? else {
            return Ok(Node::Object(Object::default()));
        };
        #[cfg(feature = "arbitrary-precision")]
        if first == NUMBER_TOKEN {
            let content: String = map.next_value()?;
            return Ok(Node::Primitive(super::number_from_text(content)));
        }
        let mut members = crate::Map::default();
        members.insert(first, map.next_value()?);
        while let Some((key, value)) = map.next_entry()? {
            members.insert(key, value);
        }
        Ok(Node::Object(Object::new(members)))
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Node, D::Error> {
        deserializer.deserialize_any(NodeVisitor)
    }
}

#[cfg(test)]
mod tests {
    use crate::{jsonnode, Literal, Node, Number};
    use serde_json::json;
    use test_case::test_case;

    #[test_case(jsonnode!(null), json!(null))]
    #[test_case(jsonnode!({"a": 1, "b": [true, null, "s", (-2), 0.5]}), json!({"a": 1, "b": [true, null, "s", -2, 0.5]}))]
    #[test_case(jsonnode!([]), json!([]))]
    fn serialize(node: Node, expected: serde_json::Value) {
        assert_eq!(serde_json::to_value(&node).expect("Serializable"), expected);
    }

    #[test]
    fn serialize_keeps_member_order() {
        let node = jsonnode!({"z": 1, "a": 2});
        assert_eq!(
            serde_json::to_string(&node).expect("Serializable"),
            r#"{"z":1,"a":2}"#
        );
    }

    #[test]
    fn serialize_uses_the_native_value() {
        let node = Node::Primitive(Literal::number_with_content(Number::Float(100.0), "1e2"));
        assert_eq!(serde_json::to_string(&node).expect("Serializable"), "100.0");
    }

    #[test]
    fn deserialize() {
        let node: Node =
            serde_json::from_str(r#"{"b": [1, 1.0, "x"], "a": null}"#).expect("Valid JSON");
        assert_eq!(node, jsonnode!({"a": null, "b": [1, 1, "x"]}));
        assert_eq!(node.to_string(), r#"{"b":[1,1.0,"x"],"a":null}"#);
        let b = node.pointer("/b").expect("Exists");
        assert!(!b.eq_lexical(&jsonnode!([1, 1, "x"])));
    }

    #[test]
    fn deserialize_duplicate_keys() {
        let node: Node = serde_json::from_str(r#"{"a": 1, "b": 2, "a": 3}"#).expect("Valid JSON");
        assert_eq!(node.to_string(), r#"{"a":3,"b":2}"#);
    }
}
