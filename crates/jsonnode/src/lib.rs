//! # jsonnode
//!
//! An immutable JSON document tree.
//!
//! A [`Node`] is one of four shapes: [`Node::Null`], a [`Literal`] primitive (boolean, number
//! or string), an [`Object`] or an [`Array`]. Trees are built bottom-up and never modified
//! afterwards, so they can be shared freely between threads.
//!
//! - **Typed access.** Every accessor comes in a strict form (`try_as_object`, `try_get`,
//!   `try_get_array`, ...) returning an [`Error`] that tells apart a missing key or index
//!   (`NotFound`), a value of the wrong shape (`TypeMismatch`) and a primitive with the wrong
//!   payload for a numeric read (`NumberFormat`), and an optional form (`as_object`, `get`,
//!   `get_array`, ...) returning `None` instead.
//! - **Equality.** `==` is value equality: `1` equals `1.0` and object member order is
//!   ignored. [`Node::eq_lexical`] compares numbers by their text instead. `Hash` agrees
//!   with `==`.
//! - **Rendering.** `Display` produces compact JSON that parses back into an equal tree.
//!
//! ```
//! use jsonnode::{jsonnode, Node};
//!
//! let node = jsonnode!({"a": 1, "b": [true, null]});
//! let object = node.as_object().expect("Object");
//!
//! assert_eq!(object.try_get_primitive("a").and_then(|a| a.try_as_i64()), Ok(1));
//! assert!(object.get_array("b").is_some_and(|b| b[1].as_null().is_some()));
//! assert!(object.try_get_primitive("c").unwrap_err().is_not_found());
//! assert!(object.try_get_array("a").unwrap_err().is_type_mismatch());
//! assert_eq!(node.to_string(), r#"{"a":1,"b":[true,null]}"#);
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize` and `Deserialize` for the tree types.
//! - `serde_json`: conversions from and to `serde_json::Value`, and `FromStr` for `Node`. Implies `serde`.
//! - `arbitrary-precision`: keep `serde_json`'s lossless text of parsed numbers (`1.00` stays
//!   `1.00`; exponents arrive normalized, so `1E2` becomes `1e+2`).
mod array;
mod error;
mod impls;
mod literal;
mod macros;
mod node;
mod number;
mod object;
mod pointer;
mod primitive;
mod render;

pub use array::Array;
pub use error::{Error, Location, Result};
pub use literal::{Literal, Scalar};
pub use node::{Node, ValueType, NULL};
pub use number::Number;
pub use object::{Map, Object};
pub use primitive::Primitive;
