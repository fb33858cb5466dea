use crate::{Kind, Value};

/// An NBT List: a declared element kind and the elements themselves.
///
/// Elements are unnamed. The list does not stop you pushing a value of the
/// wrong kind; instead mismatching elements are left out when the list is
/// written (see [`List::purged`]). Use [`List::try_push`] to reject them up
/// front instead.
///
/// An empty list may declare [`Kind::End`], which is how the format spells
/// "empty list of unknown type". Such a list never writes any elements.
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    of: Kind,
    elements: Vec<Value>,
}

impl List {
    pub fn new(of: Kind) -> Self {
        Self {
            of,
            elements: Vec::new(),
        }
    }

    pub fn with_elements(of: Kind, elements: Vec<Value>) -> Self {
        Self { of, elements }
    }

    /// The declared kind of the elements.
    pub fn of(&self) -> Kind {
        self.of
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.elements.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.elements.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.elements.iter()
    }

    pub fn push(&mut self, value: impl Into<Value>) {
        self.elements.push(value.into());
    }

    /// Push only if the value matches the declared kind, otherwise hand the
    /// value back.
    pub fn try_push(&mut self, value: impl Into<Value>) -> Result<(), Value> {
        let value = value.into();
        if value.kind() != self.of {
            return Err(value);
        }
        self.elements.push(value);
        Ok(())
    }

    /// Insert at `index`, shifting later elements. Panics if `index > len`.
    pub fn insert(&mut self, index: usize, value: impl Into<Value>) {
        self.elements.insert(index, value.into());
    }

    /// Remove the element at `index`. Panics if out of bounds.
    pub fn remove(&mut self, index: usize) -> Value {
        self.elements.remove(index)
    }

    /// Whether every element has the declared kind.
    pub fn is_homogeneous(&self) -> bool {
        self.elements.iter().all(|v| v.kind() == self.of)
    }

    /// The elements that would be written: those whose kind matches the
    /// declared kind, in order. The list itself is left untouched.
    pub fn purged(&self) -> impl Iterator<Item = &Value> + '_ {
        let of = self.of;
        self.elements.iter().filter(move |v| v.kind() == of)
    }

    /// Drop every element whose kind does not match the declared kind.
    /// Returns how many were dropped.
    pub fn purge(&mut self) -> usize {
        let before = self.elements.len();
        let of = self.of;
        self.elements.retain(|v| v.kind() == of);
        before - self.elements.len()
    }
}

/// An empty list of unknown type.
impl Default for List {
    fn default() -> Self {
        Self::new(Kind::End)
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl IntoIterator for List {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}
