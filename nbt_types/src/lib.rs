//! Value types of the NBT format, and the length checks that guard their encoding.
//!
//! See [`model`] for the wire layout.

mod error;
pub mod model;
pub mod validation;

pub use error::*;
pub use model::*;
