use crate::model::Tag;
use std::slice;

/// Named children in insertion order. Names are not deduplicated.
#[derive(PartialEq, Clone, Default, Debug)]
pub struct Compound {
    entries: Vec<(String, Tag)>,
}

impl Compound {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, tag: impl Into<Tag>) {
        self.entries.push((name.into(), tag.into()));
    }

    /// Builder form of [`Self::push`].
    pub fn with(mut self, name: impl Into<String>, tag: impl Into<Tag>) -> Self {
        self.push(name, tag);
        self
    }

    /// First entry stored under `name`.
    pub fn get(&self, name: &str) -> Option<&Tag> {
        self.entries
            .iter()
            .find_map(|(n, t)| if n == name { Some(t) } else { None })
    }

    pub fn iter(&self) -> slice::Iter<'_, (String, Tag)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<String>, T: Into<Tag>> FromIterator<(N, T)> for Compound {
    fn from_iter<I: IntoIterator<Item = (N, T)>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|(n, t)| (n.into(), t.into()))
            .collect();
        Self { entries }
    }
}

impl<'a> IntoIterator for &'a Compound {
    type Item = &'a (String, Tag);
    type IntoIter = slice::Iter<'a, (String, Tag)>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
