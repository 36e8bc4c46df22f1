use crate::model::TagType;
use derive_more::Display;
use std::error::Error as StdError;
use std::io;
use thiserror::Error;

pub type NbtResult<T> = Result<T, NbtError>;

/// Which fixed-width length field a value failed to fit into.
#[derive(PartialEq, Eq, Clone, Copy, Display, Debug)]
pub enum LenField {
    /// The u16 byte length in front of names and string payloads.
    #[display(fmt = "string length")]
    Str,
    /// The u32 element count in front of arrays and lists.
    #[display(fmt = "element count")]
    Count,
}

#[derive(Error, Debug)]
pub enum NbtError {
    #[error("{field} {len} exceeds the encodable maximum {max}")]
    FormatOverflow {
        field: LenField,
        len: usize,
        max: usize,
    },

    #[error("sink failure: {0}")]
    SinkFailure(#[source] Box<dyn StdError + Send + Sync>),

    #[error("structural misuse: {0}")]
    StructuralMisuse(String),

    #[error("list of {expected} cannot hold a {found}")]
    HeterogeneousList { expected: TagType, found: TagType },

    #[error("unknown tag type id {0}")]
    UnknownTagType(u8),
}

impl NbtError {
    /// Wraps any error a sink's destination reports.
    pub fn sink<E>(e: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync>>,
    {
        Self::SinkFailure(e.into())
    }

    pub fn misuse(reason: impl Into<String>) -> Self {
        Self::StructuralMisuse(reason.into())
    }
}

impl From<io::Error> for NbtError {
    fn from(e: io::Error) -> Self {
        Self::SinkFailure(Box::new(e))
    }
}
