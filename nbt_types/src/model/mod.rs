//! # Serialization format
//!
//! The value types are [`Tag`], [`TagList`], [`Compound`] and [`NamedTag`].
//!
//! The below pseudocode depicts their serialized representations.
//! All integers and floats are big-endian.
//!
//! Every named tag starts with `tag_type`, encoded in `u8`, followed by its name.
//! Names and string payloads share one encoding: a `u16` byte length, then UTF-8 bytes.
//!
//! Scalars have fixed body lengths; these lengths are not encoded.
//! Arrays and lists carry a `u32` element count.
//!
//! A `Tag::List` is homogeneous, so its elements are written as bare payloads,
//! with neither `tag_type` nor name.
//! A `Tag::Compound` nests other named tags, including possibly other compounds,
//! and is terminated by an `End` tag.
//!
//! ```text
//! struct NamedTag::Int {
//!     tag_type:       u8,             // 3
//!     name_len:       u16,
//!     name:           [u8; name_len],
//!     body:           [u8; 4],
//! }
//!
//! struct NamedTag::String {
//!     tag_type:       u8,             // 8
//!     name_len:       u16,
//!     name:           [u8; name_len],
//!     str_len:        u16,
//!     str:            [u8; str_len],
//! }
//!
//! struct NamedTag::IntArray {
//!     tag_type:       u8,             // 11
//!     name_len:       u16,
//!     name:           [u8; name_len],
//!     elems_count:    u32,
//!     elems:          [[u8; 4]; elems_count],
//! }
//!
//! struct NamedTag::List {
//!     tag_type:       u8,             // 9
//!     name_len:       u16,
//!     name:           [u8; name_len],
//!     elem_type:      u8,
//!     elems_count:    u32,
//!     elem_0:         body of elem_type,
//!     elem_1:         body of elem_type,
//!     ...
//! }
//!
//! struct NamedTag::Compound {
//!     tag_type:       u8,             // 10
//!     name_len:       u16,
//!     name:           [u8; name_len],
//!     child_0:        NamedTag::*,
//!     child_1:        NamedTag::*,
//!     ...
//!     end:            u8,             // 0
//! }
//! ```

mod compound;
mod list;
mod tag;
mod tag_type;

pub use compound::*;
pub use list::*;
pub use tag::*;
pub use tag_type::*;
