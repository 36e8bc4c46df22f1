use crate::error::{NbtError, NbtResult};
use crate::model::{Tag, TagType};
use std::slice;

/// A homogeneous sequence of tags.
///
/// Every element has the declared `elem_type`; this is checked whenever an
/// element enters the list, so code walking a `TagList` never re-checks it.
/// An empty list keeps its declared element type.
#[derive(PartialEq, Clone, Debug)]
pub struct TagList {
    elem_type: TagType,
    elems: Vec<Tag>,
}

impl TagList {
    pub fn new(elem_type: TagType, elems: Vec<Tag>) -> NbtResult<Self> {
        let mut list = Self::empty(elem_type);
        list.elems.reserve(elems.len());
        for elem in elems {
            list.push(elem)?;
        }
        Ok(list)
    }

    pub fn empty(elem_type: TagType) -> Self {
        Self {
            elem_type,
            elems: vec![],
        }
    }

    pub fn push(&mut self, elem: impl Into<Tag>) -> NbtResult<()> {
        let elem = elem.into();
        let found = elem.tag_type();
        // End has no payload, so only an empty list may declare it.
        if found != self.elem_type || found == TagType::End {
            return Err(NbtError::HeterogeneousList {
                expected: self.elem_type,
                found,
            });
        }
        self.elems.push(elem);
        Ok(())
    }

    pub fn elem_type(&self) -> TagType {
        self.elem_type
    }

    pub fn elems(&self) -> &[Tag] {
        &self.elems
    }

    pub fn iter(&self) -> slice::Iter<'_, Tag> {
        self.elems.iter()
    }

    pub fn len(&self) -> usize {
        self.elems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }
}

/// Infers the element type from the first element. An empty vec becomes an empty list of End.
impl TryFrom<Vec<Tag>> for TagList {
    type Error = NbtError;
    fn try_from(elems: Vec<Tag>) -> NbtResult<Self> {
        let elem_type = elems.first().map_or(TagType::End, Tag::tag_type);
        Self::new(elem_type, elems)
    }
}

impl<'a> IntoIterator for &'a TagList {
    type Item = &'a Tag;
    type IntoIter = slice::Iter<'a, Tag>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
