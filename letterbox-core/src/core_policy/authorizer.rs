//! Capability checks

use crate::core_discussion::Conversation;
use crate::core_identity::{Account, AccountId, ProfileId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Who is asking
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Actor {
    /// An authenticated account acting as itself
    Account(AccountId),
    /// An account acting through one of its profiles
    Profile(ProfileId),
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Actor::Account(id) => write!(f, "account:{}", id),
            Actor::Profile(id) => write!(f, "profile:{}", id),
        }
    }
}

/// Protected operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    ViewProfiles,
    RequestPublication,
    RescindPublicationRequest,
    AcceptPublication,
    RescindPublicationAcceptance,
    SendReply,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::ViewProfiles => "view_profiles",
            Action::RequestPublication => "request_publication",
            Action::RescindPublicationRequest => "rescind_publication_request",
            Action::AcceptPublication => "accept_publication",
            Action::RescindPublicationAcceptance => "rescind_publication_acceptance",
            Action::SendReply => "send_reply",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What the action applies to
#[derive(Debug, Clone, Copy)]
pub enum Target<'a> {
    Account(&'a Account),
    Conversation(&'a Conversation),
}

/// Decides whether `actor` may perform `action` on `target`
pub trait Authorizer {
    fn authorize(&self, actor: &Actor, action: Action, target: Target<'_>) -> bool;
}

impl<F> Authorizer for F
where
    F: Fn(&Actor, Action, Target<'_>) -> bool,
{
    fn authorize(&self, actor: &Actor, action: Action, target: Target<'_>) -> bool {
        self(actor, action, target)
    }
}

/// Default rules for the discussion model
///
/// - only the owning account sees its list of profiles
/// - only the letter's author requests or withdraws publication
/// - only the responder accepts or withdraws acceptance
/// - only those two profiles reply in the conversation
///
/// Any other combination of actor, action and target is denied.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParticipantPolicy;

impl Authorizer for ParticipantPolicy {
    fn authorize(&self, actor: &Actor, action: Action, target: Target<'_>) -> bool {
        match (actor, action, target) {
            (Actor::Account(id), Action::ViewProfiles, Target::Account(account)) => {
                id == account.id()
            }
            (
                Actor::Profile(id),
                Action::RequestPublication | Action::RescindPublicationRequest,
                Target::Conversation(conversation),
            ) => id == &conversation.letter().author.id,
            (
                Actor::Profile(id),
                Action::AcceptPublication | Action::RescindPublicationAcceptance,
                Target::Conversation(conversation),
            ) => id == &conversation.responder().id,
            (Actor::Profile(id), Action::SendReply, Target::Conversation(conversation)) => {
                id == &conversation.letter().author.id || id == &conversation.responder().id
            }
            _ => false,
        }
    }
}
