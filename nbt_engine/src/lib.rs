//! Push-style NBT encoder.
//!
//! [`serialize`] walks a [`nbt_types::NamedTag`] and drives any [`Sink`].
//! [`StreamSink`] encodes to an `io::Write`; [`LenSink`] only measures.

pub mod config;
mod driver;
mod framing;
mod len_sink;
mod sink;
mod stream_sink;

pub use config::StreamSinkConfig;
pub use driver::*;
pub use framing::*;
pub use len_sink::*;
pub use sink::*;
pub use stream_sink::*;
