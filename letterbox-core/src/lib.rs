//! Letterbox core
//!
//! Domain model for a pseudonymous discussion platform: accounts with
//! per-space profiles, letters asking for discussion, the private
//! conversations they open, and the replies inside them.
//!
//! Storage, authentication, transport and the moderation workflow live
//! outside this crate. They build entities from the identifiers and
//! timestamps they own, gate access through [`core_policy`], and react to
//! the events raised by [`core_moderation`].

pub mod config;
pub mod core_discussion;
pub mod core_identity;
pub mod core_moderation;
pub mod core_policy;
pub mod core_space;
pub mod logging;
pub mod metrics;

#[cfg(test)]
pub mod test_utils;

pub use logging::{init_logging, LogLevel};
