//! Moderation hooks
//!
//! The moderation workflow itself lives outside this crate. What lives here
//! is the boundary it subscribes to:
//!
//! - [`ModerationService`] bans/unbans accounts and labels replies, emitting
//!   a [`ModerationEvent`] for every state change
//! - [`EventBroadcaster`] fans those events out to subscribers
//! - [`consequence_of`] maps each [`Label`](crate::core_discussion::Label)
//!   to the follow-up collaborators are expected to take

pub mod broadcaster;
pub mod consequence;
pub mod events;
pub mod service;

pub use broadcaster::EventBroadcaster;
pub use consequence::{consequence_of, ModerationAction};
pub use events::ModerationEvent;
pub use service::ModerationService;
