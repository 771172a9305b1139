//! Test utilities and helpers for Letterbox
//!
//! Common fixtures and assertion helpers shared by the unit tests.

pub mod assertions;
pub mod fixtures;

pub use assertions::*;
pub use fixtures::*;
