use std::hash::{BuildHasher, Hash, Hasher};

use ahash::RandomState;
use indexmap::IndexMap;

use crate::{error::Result, Array, Error, Node, Primitive};

pub type Map = IndexMap<String, Node, RandomState>;

/// An ordered JSON object.
///
/// Iteration and rendering follow insertion order, equality does not.
#[derive(Debug, Clone, Default)]
pub struct Object(Map);

impl Object {
    /// Wrap an already built map. It is never modified afterwards.
    #[must_use]
    pub fn new(map: Map) -> Self {
        Object(map)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.0.get(key)
    }

    /// # Errors
    ///
    /// `NotFound` if there is no such key.
    pub fn try_get(&self, key: &str) -> Result<&Node> {
        self.0.get(key).ok_or_else(|| Error::not_found(key))
    }

    #[must_use]
    pub fn get_primitive(&self, key: &str) -> Option<Primitive<'_>> {
        self.get(key)?.as_primitive()
    }

    /// # Errors
    ///
    /// `NotFound` if there is no such key, `TypeMismatch` if the value is not a primitive.
    pub fn try_get_primitive(&self, key: &str) -> Result<Primitive<'_>> {
        self.try_get(key)?
            .try_as_primitive()
            .map_err(|error| error.at(key))
    }

    #[must_use]
    pub fn get_object(&self, key: &str) -> Option<&Object> {
        self.get(key)?.as_object()
    }

    /// # Errors
    ///
    /// `NotFound` if there is no such key, `TypeMismatch` if the value is not an object.
    pub fn try_get_object(&self, key: &str) -> Result<&Object> {
        self.try_get(key)?
            .try_as_object()
            .map_err(|error| error.at(key))
    }

    #[must_use]
    pub fn get_array(&self, key: &str) -> Option<&Array> {
        self.get(key)?.as_array()
    }

    /// # Errors
    ///
    /// `NotFound` if there is no such key, `TypeMismatch` if the value is not an array.
    pub fn try_get_array(&self, key: &str) -> Result<&Array> {
        self.try_get(key)?
            .try_as_array()
            .map_err(|error| error.at(key))
    }

    #[must_use]
    pub fn get_null(&self, key: &str) -> Option<&'static Node> {
        self.get(key)?.as_null()
    }

    /// # Errors
    ///
    /// `NotFound` if there is no such key, `TypeMismatch` if the value is not null.
    pub fn try_get_null(&self, key: &str) -> Result<&'static Node> {
        self.try_get(key)?
            .try_as_null()
            .map_err(|error| error.at(key))
    }

    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.0.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl ExactSizeIterator<Item = &Node> + '_ {
        self.0.values()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Node> {
        self.0.iter()
    }

    /// Lexical equality of members, regardless of their order.
    #[must_use]
    pub fn eq_lexical(&self, other: &Object) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key).is_some_and(|v| value.eq_lexical(v)))
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key).is_some_and(|v| value == v))
    }
}

impl Eq for Object {}

/// Fixed seeds, so that member hashes do not depend on the map's own hasher.
fn member_hasher() -> RandomState {
    RandomState::with_seeds(
        0x243f_6a88_85a3_08d3,
        0x1319_8a2e_0370_7344,
        0xa409_3822_299f_31d0,
        0x082e_fa98_ec4e_6c89,
    )
}

impl Hash for Object {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Order independent: members are hashed separately and summed
        let hasher = member_hasher();
        let members = self
            .iter()
            .map(|member| BuildHasher::hash_one(&hasher, member))
            .fold(0u64, u64::wrapping_add);
        state.write_usize(self.len());
        state.write_u64(members);
    }
}

impl From<Map> for Object {
    fn from(value: Map) -> Self {
        Object(value)
    }
}

impl<K: Into<String>> FromIterator<(K, Node)> for Object {
    /// Later duplicates replace the value of the first occurrence and keep its position.
    fn from_iter<T: IntoIterator<Item = (K, Node)>>(iter: T) -> Self {
        Object(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl IntoIterator for Object {
    type Item = (String, Node);
    type IntoIter = indexmap::map::IntoIter<String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = (&'a String, &'a Node);
    type IntoIter = indexmap::map::Iter<'a, String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
