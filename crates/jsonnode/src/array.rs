use std::ops::Deref;

use crate::{error::Result, Error, Node, Object, Primitive};

/// An ordered JSON array. Dereferences to a read-only slice of its elements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Array(Vec<Node>);

impl Array {
    /// Wrap an already built vector. It is never modified afterwards.
    #[must_use]
    pub fn new(elements: Vec<Node>) -> Self {
        Array(elements)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Node> {
        self.0.get(index)
    }

    /// # Errors
    ///
    /// `NotFound` if `index` is out of bounds.
    pub fn try_get(&self, index: usize) -> Result<&Node> {
        self.0.get(index).ok_or_else(|| Error::not_found(index))
    }

    #[must_use]
    pub fn get_primitive(&self, index: usize) -> Option<Primitive<'_>> {
        self.get(index)?.as_primitive()
    }

    /// # Errors
    ///
    /// `NotFound` if `index` is out of bounds, `TypeMismatch` if the element is not a primitive.
    pub fn try_get_primitive(&self, index: usize) -> Result<Primitive<'_>> {
        self.try_get(index)?
            .try_as_primitive()
            .map_err(|error| error.at(index))
    }

    #[must_use]
    pub fn get_object(&self, index: usize) -> Option<&Object> {
        self.get(index)?.as_object()
    }

    /// # Errors
    ///
    /// `NotFound` if `index` is out of bounds, `TypeMismatch` if the element is not an object.
    pub fn try_get_object(&self, index: usize) -> Result<&Object> {
        self.try_get(index)?
            .try_as_object()
            .map_err(|error| error.at(index))
    }

    #[must_use]
    pub fn get_array(&self, index: usize) -> Option<&Array> {
        self.get(index)?.as_array()
    }

    /// # Errors
    ///
    /// `NotFound` if `index` is out of bounds, `TypeMismatch` if the element is not an array.
    pub fn try_get_array(&self, index: usize) -> Result<&Array> {
        self.try_get(index)?
            .try_as_array()
            .map_err(|error| error.at(index))
    }

    #[must_use]
    pub fn get_null(&self, index: usize) -> Option<&'static Node> {
        self.get(index)?.as_null()
    }

    /// # Errors
    ///
    /// `NotFound` if `index` is out of bounds, `TypeMismatch` if the element is not null.
    pub fn try_get_null(&self, index: usize) -> Result<&'static Node> {
        self.try_get(index)?
            .try_as_null()
            .map_err(|error| error.at(index))
    }
}

impl Deref for Array {
    type Target = [Node];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Node>> for Array {
    fn from(value: Vec<Node>) -> Self {
        Array(value)
    }
}

impl FromIterator<Node> for Array {
    fn from_iter<T: IntoIterator<Item = Node>>(iter: T) -> Self {
        Array(iter.into_iter().collect())
    }
}

impl IntoIterator for Array {
    type Item = Node;
    type IntoIter = std::vec::IntoIter<Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
