//! Spaces
//!
//! A Space is the topic bucket every profile lives in. It has no behavior of
//! its own; profiles hold a shared handle to the Space they are scoped to.

pub mod space;
pub mod types;

pub use space::Space;
pub use types::SpaceId;
