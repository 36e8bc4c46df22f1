//! Length checks applied to each field right before it is emitted.
//!
//! The types here can only be obtained through a successful check, so a sink
//! that receives one may write its length prefix without re-checking.

use crate::error::{LenField, NbtError, NbtResult};
use derive_more::Deref;
use std::mem;

/// Byte length of a name or string payload, as written in its `u16` prefix.
#[derive(Deref, PartialEq, Eq, Clone, Copy, Debug)]
pub struct StrLen(u16);
impl StrLen {
    pub const MAX: usize = u16::MAX as usize;

    pub fn from_str_bytes(buf: &[u8]) -> NbtResult<Self> {
        match u16::try_from(buf.len()) {
            Ok(len) => Ok(Self(len)),
            Err(_) => {
                tracing::warn!(len = buf.len(), "string too long to encode");
                Err(NbtError::FormatOverflow {
                    field: LenField::Str,
                    len: buf.len(),
                    max: Self::MAX,
                })
            }
        }
    }

    /// Bytes taken by the prefix plus the string itself.
    pub fn encoded_len(self) -> usize {
        mem::size_of::<u16>() + self.0 as usize
    }
}

/// Element count of an array or list, as written in its `u32` prefix.
#[derive(Deref, PartialEq, Eq, Clone, Copy, Debug)]
pub struct ElemCount(u32);
impl ElemCount {
    pub const MAX: usize = u32::MAX as usize;

    pub fn of<T>(elems: &[T]) -> NbtResult<Self> {
        match u32::try_from(elems.len()) {
            Ok(ct) => Ok(Self(ct)),
            Err(_) => {
                tracing::warn!(len = elems.len(), "too many elements to encode");
                Err(NbtError::FormatOverflow {
                    field: LenField::Count,
                    len: elems.len(),
                    max: Self::MAX,
                })
            }
        }
    }
}
impl From<u32> for ElemCount {
    fn from(ct: u32) -> Self {
        Self(ct)
    }
}

/// A name or string payload whose byte length fits the `u16` prefix.
#[derive(Clone, Copy, Debug)]
pub struct BoundedStr<'a> {
    s: &'a str,
    len: StrLen,
}
impl<'a> BoundedStr<'a> {
    pub fn new(s: &'a str) -> NbtResult<Self> {
        let len = StrLen::from_str_bytes(s.as_bytes())?;
        Ok(Self { s, len })
    }

    pub fn as_str(&self) -> &'a str {
        self.s
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.s.as_bytes()
    }

    pub fn len(&self) -> StrLen {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        *self.len == 0
    }
}
