use crate::model::{Compound, TagList, TagType};

#[derive(PartialEq, Clone, Debug)]
pub enum Tag {
    End,
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    String(String),
    List(TagList),
    Compound(Compound),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}
impl Tag {
    pub fn tag_type(&self) -> TagType {
        TagType::from(self)
    }
}

macro_rules! impl_from_for_tag {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Tag {
                fn from(v: $ty) -> Self {
                    Tag::$variant(v)
                }
            }
        )*
    };
}
impl_from_for_tag! {
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    Vec<i8> => ByteArray,
    String => String,
    TagList => List,
    Compound => Compound,
    Vec<i32> => IntArray,
    Vec<i64> => LongArray,
}
impl From<&str> for Tag {
    fn from(s: &str) -> Self {
        Tag::String(String::from(s))
    }
}

/// A tag together with the name it is stored under.
///
/// A whole document is one `NamedTag`, conventionally wrapping a [`Compound`].
#[derive(PartialEq, Clone, Debug)]
pub struct NamedTag {
    pub name: String,
    pub tag: Tag,
}
impl NamedTag {
    pub fn new(name: impl Into<String>, tag: impl Into<Tag>) -> Self {
        Self {
            name: name.into(),
            tag: tag.into(),
        }
    }
}

pub type Document = NamedTag;
