use crate::error::{NbtError, NbtResult};
use crate::model::Tag;
use derive_more::{Deref, Display, From};
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

/// The raw tag-type id, as it appears on the wire.
#[derive(From, Deref, PartialEq, Eq, Clone, Copy, Debug)]
pub struct TagTypeInt(u8);
impl From<TagType> for TagTypeInt {
    fn from(tag_type: TagType) -> Self {
        Self(tag_type as u8)
    }
}

/// Discriminants are the wire ids, so they are spelled out rather than left to the compiler.
#[repr(u8)]
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, FromPrimitive, Display, Debug)]
pub enum TagType {
    End = 0,
    Byte = 1,
    Short = 2,
    Int = 3,
    Long = 4,
    Float = 5,
    Double = 6,
    ByteArray = 7,
    String = 8,
    List = 9,
    Compound = 10,
    IntArray = 11,
    LongArray = 12,
}
impl TryFrom<TagTypeInt> for TagType {
    type Error = NbtError;
    fn try_from(int: TagTypeInt) -> NbtResult<Self> {
        TagType::from_u8(int.0).ok_or(NbtError::UnknownTagType(int.0))
    }
}
impl TryFrom<u8> for TagType {
    type Error = NbtError;
    fn try_from(int: u8) -> NbtResult<Self> {
        Self::try_from(TagTypeInt(int))
    }
}
impl From<&Tag> for TagType {
    fn from(tag: &Tag) -> Self {
        match tag {
            Tag::End => TagType::End,
            Tag::Byte(_) => TagType::Byte,
            Tag::Short(_) => TagType::Short,
            Tag::Int(_) => TagType::Int,
            Tag::Long(_) => TagType::Long,
            Tag::Float(_) => TagType::Float,
            Tag::Double(_) => TagType::Double,
            Tag::ByteArray(_) => TagType::ByteArray,
            Tag::String(_) => TagType::String,
            Tag::List(_) => TagType::List,
            Tag::Compound(_) => TagType::Compound,
            Tag::IntArray(_) => TagType::IntArray,
            Tag::LongArray(_) => TagType::LongArray,
        }
    }
}
