use crate::{Kind, Tag, Value};

#[cfg(not(feature = "preserve-order"))]
mod map {
    pub(crate) type Map = std::collections::BTreeMap<String, crate::Tag>;
    pub(crate) type Values<'a> = std::collections::btree_map::Values<'a, String, crate::Tag>;
    pub(crate) type IntoValues = std::collections::btree_map::IntoValues<String, crate::Tag>;

    pub(crate) fn remove(map: &mut Map, name: &str) -> Option<crate::Tag> {
        map.remove(name)
    }
}

#[cfg(feature = "preserve-order")]
mod map {
    pub(crate) type Map = indexmap::IndexMap<String, crate::Tag>;
    pub(crate) type Values<'a> = indexmap::map::Values<'a, String, crate::Tag>;
    pub(crate) type IntoValues = indexmap::map::IntoValues<String, crate::Tag>;

    pub(crate) fn remove(map: &mut Map, name: &str) -> Option<crate::Tag> {
        map.shift_remove(name)
    }
}

/// An NBT Compound: a collection of tags keyed by their own names.
///
/// Names are unique among the children. Inserting a tag whose name is
/// already present replaces the old tag. Iteration order is sorted by name,
/// or insertion order with the `preserve-order` feature.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Compound {
    children: map::Map,
}

impl Compound {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Insert a tag under its own name, returning the tag it displaced.
    pub fn insert(&mut self, tag: Tag) -> Option<Tag> {
        self.children.insert(tag.name().to_owned(), tag)
    }

    pub fn get(&self, name: &str) -> Option<&Tag> {
        self.children.get(name)
    }

    /// Mutable access to a child's value. The name stays as it is.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.children.get_mut(name).map(Tag::value_mut)
    }

    /// The value of the child called `name`, if it exists and is of `kind`.
    pub fn find(&self, name: &str, kind: Kind) -> Option<&Value> {
        self.get(name)
            .map(Tag::value)
            .filter(|value| value.kind() == kind)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.children.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Tag> {
        map::remove(&mut self.children, name)
    }

    pub fn iter(&self) -> map::Values<'_> {
        self.children.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.children.keys().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a Compound {
    type Item = &'a Tag;
    type IntoIter = map::Values<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.values()
    }
}

impl IntoIterator for Compound {
    type Item = Tag;
    type IntoIter = map::IntoValues;

    fn into_iter(self) -> Self::IntoIter {
        self.children.into_values()
    }
}

impl Extend<Tag> for Compound {
    fn extend<I: IntoIterator<Item = Tag>>(&mut self, iter: I) {
        for tag in iter {
            self.insert(tag);
        }
    }
}

impl FromIterator<Tag> for Compound {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        let mut compound = Compound::new();
        compound.extend(iter);
        compound
    }
}
