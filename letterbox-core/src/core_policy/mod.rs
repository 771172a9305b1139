//! Authorization
//!
//! The domain model exposes mechanisms without checking who calls them. This
//! module is the capability-check seam: an [`Authorizer`] answers
//! `authorize(actor, action, target)`, and a [`Guard`] wraps each protected
//! operation with that check.

pub mod authorizer;
pub mod guard;

pub use authorizer::{Action, Actor, Authorizer, ParticipantPolicy, Target};
pub use guard::Guard;

use thiserror::Error;

/// Authorization errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("Permission denied: {actor} cannot {action}")]
    Unauthorized { actor: Actor, action: Action },
}
