use nbt_engine::{ArrayRef, Scalar, Sink};
use nbt_types::validation::{BoundedStr, ElemCount};
use nbt_types::{NbtError, NbtResult, TagType};
use std::io;

#[derive(PartialEq, Clone, Debug)]
pub enum Event {
    BeginCompound(Option<String>),
    EndCompound,
    BeginList(Option<String>, TagType, u32),
    EndList,
    Scalar(Option<String>, Scalar),
    Str(Option<String>, String),
    Array(Option<String>, OwnedArray),
}

#[derive(PartialEq, Clone, Debug)]
pub enum OwnedArray {
    Byte(Vec<i8>),
    Int(Vec<i32>),
    Long(Vec<i64>),
}
impl OwnedArray {
    pub fn as_array_ref(&self) -> ArrayRef<'_> {
        match self {
            Self::Byte(a) => ArrayRef::Byte(a),
            Self::Int(a) => ArrayRef::Int(a),
            Self::Long(a) => ArrayRef::Long(a),
        }
    }
}
impl From<ArrayRef<'_>> for OwnedArray {
    fn from(array: ArrayRef<'_>) -> Self {
        match array {
            ArrayRef::Byte(a) => Self::Byte(a.to_vec()),
            ArrayRef::Int(a) => Self::Int(a.to_vec()),
            ArrayRef::Long(a) => Self::Long(a.to_vec()),
        }
    }
}

/// Records every event. Optionally refuses the event at index `fail_at`, and every one after it.
#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<Event>,
    pub calls: usize,
    pub fail_at: Option<usize>,
}

impl RecordingSink {
    pub fn failing_at(fail_at: usize) -> Self {
        Self {
            fail_at: Some(fail_at),
            ..Self::default()
        }
    }

    fn record(&mut self, event: Event) -> NbtResult<()> {
        let i = self.calls;
        self.calls += 1;
        if self.fail_at.map_or(false, |fail_at| i >= fail_at) {
            return Err(NbtError::sink(io::Error::new(
                io::ErrorKind::Other,
                format!("refused event {i}"),
            )));
        }
        self.events.push(event);
        Ok(())
    }
}

fn owned(name: Option<BoundedStr<'_>>) -> Option<String> {
    name.map(|n| String::from(n.as_str()))
}

impl Sink for RecordingSink {
    fn begin_compound(&mut self, name: Option<BoundedStr<'_>>) -> NbtResult<()> {
        self.record(Event::BeginCompound(owned(name)))
    }
    fn end_compound(&mut self) -> NbtResult<()> {
        self.record(Event::EndCompound)
    }
    fn begin_list(
        &mut self,
        name: Option<BoundedStr<'_>>,
        elem_type: TagType,
        len: ElemCount,
    ) -> NbtResult<()> {
        self.record(Event::BeginList(owned(name), elem_type, *len))
    }
    fn end_list(&mut self) -> NbtResult<()> {
        self.record(Event::EndList)
    }
    fn write_scalar(&mut self, name: Option<BoundedStr<'_>>, scalar: Scalar) -> NbtResult<()> {
        self.record(Event::Scalar(owned(name), scalar))
    }
    fn write_string(
        &mut self,
        name: Option<BoundedStr<'_>>,
        value: BoundedStr<'_>,
    ) -> NbtResult<()> {
        self.record(Event::Str(owned(name), String::from(value.as_str())))
    }
    fn write_array(
        &mut self,
        name: Option<BoundedStr<'_>>,
        array: ArrayRef<'_>,
        _len: ElemCount,
    ) -> NbtResult<()> {
        self.record(Event::Array(owned(name), OwnedArray::from(array)))
    }
}

/// Accepts `budget` bytes, then fails every write.
pub struct FailingWriter {
    pub budget: usize,
    pub written: Vec<u8>,
}

impl io::Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.budget == 0 {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "budget exhausted"));
        }
        let n = buf.len().min(self.budget);
        self.written.extend_from_slice(&buf[..n]);
        self.budget -= n;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
