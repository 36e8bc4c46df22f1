use crate::config::StreamSinkConfig;
use crate::len_sink::LenSink;
use crate::sink::{ArrayRef, Scalar, Sink};
use crate::stream_sink::StreamSink;
use nbt_types::validation::{BoundedStr, ElemCount};
use nbt_types::{Compound, NamedTag, NbtError, NbtResult, Tag, TagList};
use std::io::Write;

/// Walks `doc` once, in document order, pushing every field into `sink`.
///
/// Each name and string is length-checked right before its field is handed to the sink,
/// so a rejected field leaves no bytes of its own behind. Whatever the sink accepted
/// before a failure stays there; callers discard it.
pub fn serialize<S: Sink>(doc: &NamedTag, mut sink: S) -> NbtResult<()> {
    tracing::debug!(root = %doc.name, tag_type = %doc.tag.tag_type(), "serializing");
    let res = BoundedStr::new(&doc.name)
        .and_then(|name| ser_field(Some(name), &doc.tag, &mut sink));
    tracing::debug!(root = %doc.name, ok = res.is_ok(), "serialized");
    res
}

fn ser_field<S: Sink>(name: Option<BoundedStr<'_>>, tag: &Tag, sink: &mut S) -> NbtResult<()> {
    match tag {
        Tag::End => Err(NbtError::misuse("End tag used as a field value")),
        Tag::Byte(v) => sink.write_scalar(name, Scalar::Byte(*v)),
        Tag::Short(v) => sink.write_scalar(name, Scalar::Short(*v)),
        Tag::Int(v) => sink.write_scalar(name, Scalar::Int(*v)),
        Tag::Long(v) => sink.write_scalar(name, Scalar::Long(*v)),
        Tag::Float(v) => sink.write_scalar(name, Scalar::Float(*v)),
        Tag::Double(v) => sink.write_scalar(name, Scalar::Double(*v)),
        Tag::String(s) => {
            let s = BoundedStr::new(s)?;
            sink.write_string(name, s)
        }
        Tag::ByteArray(a) => sink.write_array(name, ArrayRef::Byte(a), ElemCount::of(a)?),
        Tag::IntArray(a) => sink.write_array(name, ArrayRef::Int(a), ElemCount::of(a)?),
        Tag::LongArray(a) => sink.write_array(name, ArrayRef::Long(a), ElemCount::of(a)?),
        Tag::List(list) => ser_list(name, list, sink),
        Tag::Compound(compound) => ser_compound(name, compound, sink),
    }
}

fn ser_list<S: Sink>(name: Option<BoundedStr<'_>>, list: &TagList, sink: &mut S) -> NbtResult<()> {
    let len = ElemCount::of(list.elems())?;
    sink.begin_list(name, list.elem_type(), len)?;
    for elem in list {
        ser_field(None, elem, sink)?;
    }
    sink.end_list()
}

fn ser_compound<S: Sink>(
    name: Option<BoundedStr<'_>>,
    compound: &Compound,
    sink: &mut S,
) -> NbtResult<()> {
    sink.begin_compound(name)?;
    for (child_name, child) in compound {
        let child_name = BoundedStr::new(child_name)?;
        ser_field(Some(child_name), child, sink)?;
    }
    sink.end_compound()
}

/// Encodes `doc` into `w` and returns `w` once everything is flushed.
pub fn to_writer<W: Write>(doc: &NamedTag, w: W) -> NbtResult<W> {
    to_writer_with_config(doc, w, &StreamSinkConfig::default())
}

pub fn to_writer_with_config<W: Write>(
    doc: &NamedTag,
    w: W,
    conf: &StreamSinkConfig,
) -> NbtResult<W> {
    let mut sink = StreamSink::with_config(w, conf);
    serialize(doc, &mut sink)?;
    sink.finish()
}

pub fn to_bytes(doc: &NamedTag) -> NbtResult<Vec<u8>> {
    to_writer(doc, vec![])
}

/// Exact byte length `to_bytes` would produce, computed without encoding.
pub fn encoded_len(doc: &NamedTag) -> NbtResult<usize> {
    let mut sink = LenSink::new();
    serialize(doc, &mut sink)?;
    sink.finish()
}
