use crate::config::StreamSinkConfig;
use crate::framing::Framing;
use crate::sink::{ArrayRef, Scalar, Sink};
use derive_more::Deref;
use nbt_types::validation::{BoundedStr, ElemCount};
use nbt_types::{NbtError, NbtResult, TagType, TagTypeInt};
use std::io::{BufWriter, Write};
use std::mem;

#[derive(Deref, PartialEq, Eq, Clone, Copy, Debug)]
pub struct WriteLen(usize);

/// A [`Sink`] that encodes events straight into a byte destination.
///
/// Bytes pass through a `BufWriter`; nothing is flushed to `W` until the buffer
/// fills or [`Self::finish`] is called.
pub struct StreamSink<W: Write> {
    w: BufWriter<W>,
    w_len: usize,
    framing: Framing,
    scratch: Vec<u8>,
}

impl<W: Write> StreamSink<W> {
    pub fn new(w: W) -> Self {
        Self::with_config(w, &StreamSinkConfig::default())
    }

    pub fn with_config(w: W, conf: &StreamSinkConfig) -> Self {
        Self {
            w: BufWriter::with_capacity(conf.buf_capacity, w),
            w_len: 0,
            framing: Framing::new(),
            scratch: vec![],
        }
    }

    /// Bytes accepted so far, whether or not they reached `W` yet.
    pub fn w_len(&self) -> WriteLen {
        WriteLen(self.w_len)
    }

    /// Checks the document is complete, flushes, and hands back the destination.
    pub fn finish(self) -> NbtResult<W> {
        if !self.framing.is_complete() {
            return Err(NbtError::misuse(format!(
                "finished with an incomplete document, {} frames open",
                self.framing.depth()
            )));
        }
        tracing::debug!(w_len = self.w_len, "stream sink finished");
        let w = self.w.into_inner().map_err(|e| NbtError::from(e.into_error()))?;
        Ok(w)
    }

    fn put(&mut self, buf: &[u8]) -> NbtResult<()> {
        self.w.write_all(buf)?;
        self.w_len += buf.len();
        Ok(())
    }

    fn put_str(&mut self, s: BoundedStr<'_>) -> NbtResult<()> {
        self.put(&s.len().to_be_bytes())?;
        self.put(s.as_bytes())
    }

    /// Admits the field, then writes `tag_type` and name unless it is a list element.
    fn put_header(&mut self, tag_type: TagType, name: Option<BoundedStr<'_>>) -> NbtResult<()> {
        self.framing.enter(name.is_some(), tag_type)?;
        if let Some(name) = name {
            self.put(&TagTypeInt::from(tag_type).to_be_bytes())?;
            self.put_str(name)?;
        }
        Ok(())
    }

    fn put_packed(&mut self, pack: impl FnOnce(&mut Vec<u8>)) -> NbtResult<()> {
        let mut scratch = mem::take(&mut self.scratch);
        scratch.clear();
        pack(&mut scratch);
        let res = self.put(&scratch);
        self.scratch = scratch;
        res
    }
}

impl<W: Write> Sink for StreamSink<W> {
    fn begin_compound(&mut self, name: Option<BoundedStr<'_>>) -> NbtResult<()> {
        self.put_header(TagType::Compound, name)?;
        self.framing.open_compound();
        Ok(())
    }

    fn end_compound(&mut self) -> NbtResult<()> {
        self.framing.close_compound()?;
        self.put(&TagTypeInt::from(TagType::End).to_be_bytes())
    }

    fn begin_list(
        &mut self,
        name: Option<BoundedStr<'_>>,
        elem_type: TagType,
        len: ElemCount,
    ) -> NbtResult<()> {
        self.put_header(TagType::List, name)?;
        self.put(&TagTypeInt::from(elem_type).to_be_bytes())?;
        self.put(&len.to_be_bytes())?;
        self.framing.open_list(elem_type, *len);
        Ok(())
    }

    fn end_list(&mut self) -> NbtResult<()> {
        self.framing.close_list()
    }

    fn write_scalar(&mut self, name: Option<BoundedStr<'_>>, scalar: Scalar) -> NbtResult<()> {
        self.put_header(scalar.tag_type(), name)?;
        self.put_packed(|buf| scalar.pack_be(buf))
    }

    fn write_string(
        &mut self,
        name: Option<BoundedStr<'_>>,
        value: BoundedStr<'_>,
    ) -> NbtResult<()> {
        self.put_header(TagType::String, name)?;
        self.put_str(value)
    }

    fn write_array(
        &mut self,
        name: Option<BoundedStr<'_>>,
        array: ArrayRef<'_>,
        len: ElemCount,
    ) -> NbtResult<()> {
        self.put_header(array.tag_type(), name)?;
        self.put(&len.to_be_bytes())?;
        self.put_packed(|buf| array.pack_be(buf))
    }

    fn scratch(&mut self) -> Option<&mut Vec<u8>> {
        Some(&mut self.scratch)
    }
}
