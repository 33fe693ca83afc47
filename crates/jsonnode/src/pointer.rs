//! JSON Pointer (RFC 6901) lookups.
use std::borrow::Cow;

use crate::{error::Result, Error, Node};

impl Node {
    /// Look up a value by JSON Pointer, e.g. `/b/1`. The empty pointer is the node itself.
    #[must_use]
    pub fn pointer(&self, pointer: &str) -> Option<&Node> {
        self.try_pointer(pointer).ok()
    }

    /// Strict form of [`Node::pointer`].
    ///
    /// # Errors
    ///
    /// `NotFound` for a missing key, an out-of-bounds or malformed array index, or a pointer
    /// that does not start with `/`. `TypeMismatch` when a segment needs to descend into
    /// a primitive.
    pub fn try_pointer(&self, pointer: &str) -> Result<&Node> {
        if pointer.is_empty() {
            return Ok(self);
        }
        let Some(pointer) = pointer.strip_prefix('/') else {
            return Err(Error::not_found(pointer));
        };
        let mut target = self;
        for token in pointer.split('/').map(unescape_segment) {
            target = match target {
                Node::Object(object) => object.try_get(&token)?,
                Node::Array(array) => match parse_index(&token) {
                    Some(index) => array.try_get(index)?,
                    None => return Err(Error::not_found(token.into_owned())),
                },
                Node::Null | Node::Primitive(_) => {
                    return Err(Error::type_mismatch("object or array", target.value_type())
                        .at(token.into_owned()));
                }
            };
        }
        Ok(target)
    }
}

/// Decode `~1` into `/` and `~0` into `~`.
fn unescape_segment(segment: &str) -> Cow<'_, str> {
    if segment.contains('~') {
        Cow::Owned(segment.replace("~1", "/").replace("~0", "~"))
    } else {
        Cow::Borrowed(segment)
    }
}

/// Array index per RFC 6901: digits only, no leading zeros.
fn parse_index(token: &str) -> Option<usize> {
    if token.is_empty()
        || (token.len() > 1 && token.starts_with('0'))
        || !token.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    token.parse().ok()
}
