use crate::framing::Framing;
use crate::sink::{ArrayRef, Scalar, Sink};
use nbt_types::validation::{BoundedStr, ElemCount};
use nbt_types::{NbtError, NbtResult, TagType, TagTypeInt};
use std::mem;

const TAG_TYPE_LEN: usize = mem::size_of::<TagTypeInt>();
const ELEM_COUNT_LEN: usize = mem::size_of::<ElemCount>();

/// Measures the encoding of an event stream without producing it.
#[derive(Default, Debug)]
pub struct LenSink {
    len: usize,
    framing: Framing,
}

impl LenSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn finish(self) -> NbtResult<usize> {
        if !self.framing.is_complete() {
            return Err(NbtError::misuse("measured an incomplete document"));
        }
        tracing::debug!(len = self.len, "len sink finished");
        Ok(self.len)
    }

    fn add_header(&mut self, tag_type: TagType, name: Option<BoundedStr<'_>>) -> NbtResult<()> {
        self.framing.enter(name.is_some(), tag_type)?;
        if let Some(name) = name {
            self.len += TAG_TYPE_LEN + name.len().encoded_len();
        }
        Ok(())
    }
}

impl Sink for LenSink {
    fn begin_compound(&mut self, name: Option<BoundedStr<'_>>) -> NbtResult<()> {
        self.add_header(TagType::Compound, name)?;
        self.framing.open_compound();
        Ok(())
    }

    fn end_compound(&mut self) -> NbtResult<()> {
        self.framing.close_compound()?;
        self.len += TAG_TYPE_LEN;
        Ok(())
    }

    fn begin_list(
        &mut self,
        name: Option<BoundedStr<'_>>,
        elem_type: TagType,
        len: ElemCount,
    ) -> NbtResult<()> {
        self.add_header(TagType::List, name)?;
        self.len += TAG_TYPE_LEN + ELEM_COUNT_LEN;
        self.framing.open_list(elem_type, *len);
        Ok(())
    }

    fn end_list(&mut self) -> NbtResult<()> {
        self.framing.close_list()
    }

    fn write_scalar(&mut self, name: Option<BoundedStr<'_>>, scalar: Scalar) -> NbtResult<()> {
        self.add_header(scalar.tag_type(), name)?;
        self.len += scalar.width();
        Ok(())
    }

    fn write_string(
        &mut self,
        name: Option<BoundedStr<'_>>,
        value: BoundedStr<'_>,
    ) -> NbtResult<()> {
        self.add_header(TagType::String, name)?;
        self.len += value.len().encoded_len();
        Ok(())
    }

    fn write_array(
        &mut self,
        name: Option<BoundedStr<'_>>,
        array: ArrayRef<'_>,
        _len: ElemCount,
    ) -> NbtResult<()> {
        self.add_header(array.tag_type(), name)?;
        self.len += ELEM_COUNT_LEN + array.body_len();
        Ok(())
    }
}
