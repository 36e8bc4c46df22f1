use nbt_types::validation::{BoundedStr, ElemCount};
use nbt_types::{NbtResult, TagType};
use std::mem;

/// Consumer of the event stream produced by [`crate::serialize`].
///
/// `name` is `None` exactly for list elements, which carry neither a tag type nor a name
/// on the wire. Every other event is a named field, the document root included.
///
/// Any error returned is terminal for the current serialization call; the driver
/// makes no further calls on this sink. The sink tracks its own position in the
/// output, the driver does not.
pub trait Sink {
    fn begin_compound(&mut self, name: Option<BoundedStr<'_>>) -> NbtResult<()>;
    fn end_compound(&mut self) -> NbtResult<()>;

    fn begin_list(
        &mut self,
        name: Option<BoundedStr<'_>>,
        elem_type: TagType,
        len: ElemCount,
    ) -> NbtResult<()>;
    fn end_list(&mut self) -> NbtResult<()>;

    fn write_scalar(&mut self, name: Option<BoundedStr<'_>>, scalar: Scalar) -> NbtResult<()>;
    fn write_string(&mut self, name: Option<BoundedStr<'_>>, value: BoundedStr<'_>)
        -> NbtResult<()>;
    fn write_array(
        &mut self,
        name: Option<BoundedStr<'_>>,
        array: ArrayRef<'_>,
        len: ElemCount,
    ) -> NbtResult<()>;

    /// Scratch buffer owned by the sink, reused across payloads that are packed before writing.
    fn scratch(&mut self) -> Option<&mut Vec<u8>> {
        None
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn begin_compound(&mut self, name: Option<BoundedStr<'_>>) -> NbtResult<()> {
        (**self).begin_compound(name)
    }
    fn end_compound(&mut self) -> NbtResult<()> {
        (**self).end_compound()
    }
    fn begin_list(
        &mut self,
        name: Option<BoundedStr<'_>>,
        elem_type: TagType,
        len: ElemCount,
    ) -> NbtResult<()> {
        (**self).begin_list(name, elem_type, len)
    }
    fn end_list(&mut self) -> NbtResult<()> {
        (**self).end_list()
    }
    fn write_scalar(&mut self, name: Option<BoundedStr<'_>>, scalar: Scalar) -> NbtResult<()> {
        (**self).write_scalar(name, scalar)
    }
    fn write_string(
        &mut self,
        name: Option<BoundedStr<'_>>,
        value: BoundedStr<'_>,
    ) -> NbtResult<()> {
        (**self).write_string(name, value)
    }
    fn write_array(
        &mut self,
        name: Option<BoundedStr<'_>>,
        array: ArrayRef<'_>,
        len: ElemCount,
    ) -> NbtResult<()> {
        (**self).write_array(name, array, len)
    }
    fn scratch(&mut self) -> Option<&mut Vec<u8>> {
        (**self).scratch()
    }
}

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum Scalar {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
}
impl Scalar {
    pub fn tag_type(self) -> TagType {
        match self {
            Self::Byte(_) => TagType::Byte,
            Self::Short(_) => TagType::Short,
            Self::Int(_) => TagType::Int,
            Self::Long(_) => TagType::Long,
            Self::Float(_) => TagType::Float,
            Self::Double(_) => TagType::Double,
        }
    }

    pub fn width(self) -> usize {
        match self {
            Self::Byte(v) => mem::size_of_val(&v),
            Self::Short(v) => mem::size_of_val(&v),
            Self::Int(v) => mem::size_of_val(&v),
            Self::Long(v) => mem::size_of_val(&v),
            Self::Float(v) => mem::size_of_val(&v),
            Self::Double(v) => mem::size_of_val(&v),
        }
    }

    pub fn pack_be(self, buf: &mut Vec<u8>) {
        match self {
            Self::Byte(v) => buf.extend_from_slice(&v.to_be_bytes()),
            Self::Short(v) => buf.extend_from_slice(&v.to_be_bytes()),
            Self::Int(v) => buf.extend_from_slice(&v.to_be_bytes()),
            Self::Long(v) => buf.extend_from_slice(&v.to_be_bytes()),
            Self::Float(v) => buf.extend_from_slice(&v.to_be_bytes()),
            Self::Double(v) => buf.extend_from_slice(&v.to_be_bytes()),
        }
    }
}

/// Borrowed payload of one of the three array tags.
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum ArrayRef<'a> {
    Byte(&'a [i8]),
    Int(&'a [i32]),
    Long(&'a [i64]),
}
impl<'a> ArrayRef<'a> {
    pub fn tag_type(self) -> TagType {
        match self {
            Self::Byte(_) => TagType::ByteArray,
            Self::Int(_) => TagType::IntArray,
            Self::Long(_) => TagType::LongArray,
        }
    }

    /// Bytes taken by the elements, without the count prefix.
    pub fn body_len(self) -> usize {
        match self {
            Self::Byte(a) => mem::size_of_val(a),
            Self::Int(a) => mem::size_of_val(a),
            Self::Long(a) => mem::size_of_val(a),
        }
    }

    pub fn pack_be(self, buf: &mut Vec<u8>) {
        buf.reserve(self.body_len());
        match self {
            Self::Byte(a) => buf.extend(a.iter().flat_map(|v| v.to_be_bytes())),
            Self::Int(a) => buf.extend(a.iter().flat_map(|v| v.to_be_bytes())),
            Self::Long(a) => buf.extend(a.iter().flat_map(|v| v.to_be_bytes())),
        }
    }
}
