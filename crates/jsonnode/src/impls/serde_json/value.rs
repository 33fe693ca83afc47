use serde_json::Value;

use crate::{Literal, Node, Number, Scalar};

impl PartialEq<Value> for Node {
    fn eq(&self, other: &Value) -> bool {
        eq(other, self)
    }
}

impl PartialEq<Node> for Value {
    fn eq(&self, other: &Node) -> bool {
        eq(self, other)
    }
}

/// Value equality, as between two nodes: numbers compare mathematically and member order
/// is ignored.
fn eq(lhs: &Value, rhs: &Node) -> bool {
    match (lhs, rhs) {
        (Value::Null, Node::Null) => true,
        (Value::Bool(_) | Value::Number(_) | Value::String(_), Node::Primitive(literal)) => {
            eq_literal(lhs, literal)
        }
        (Value::Array(l), Node::Array(r)) => {
            l.len() == r.len() && l.iter().zip(r.iter()).all(|(l, r)| eq(l, r))
        }
        (Value::Object(l), Node::Object(r)) => {
            l.len() == r.len()
                && l.iter()
                    .all(|(key, lv)| r.get(key).is_some_and(|rv| eq(lv, rv)))
        }
        _ => false,
    }
}

fn eq_literal(lhs: &Value, rhs: &Literal) -> bool {
    match (lhs, rhs.value()) {
        (Value::Bool(l), Scalar::Bool(r)) => *l == r,
        (Value::String(l), Scalar::String(r)) => l == r,
        (Value::Number(l), Scalar::Number(r)) => compare_number(l, r),
        _ => false,
    }
}

#[inline]
fn compare_number(lhs: &serde_json::Number, rhs: Number) -> bool {
    if let Some(u) = lhs.as_u64() {
        Number::PositiveInteger(u) == rhs
    } else if let Some(i) = lhs.as_i64() {
        Number::NegativeInteger(i) == rhs
    } else {
        lhs.as_f64().is_some_and(|f| Number::Float(f) == rhs)
    }
}
