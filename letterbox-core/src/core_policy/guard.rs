//! Authorization-checked wrappers around the protected operations

use super::authorizer::{Action, Actor, Authorizer, ParticipantPolicy, Target};
use super::PolicyError;
use crate::core_discussion::{Conversation, Reply, ReplyId, Timestamp};
use crate::core_identity::{Account, Profile};
use crate::metrics;
use std::sync::Arc;
use tracing::warn;

/// Runs protected operations only after the [`Authorizer`] allows them
///
/// The domain types expose their mechanisms unconditionally; the guard is
/// where access policy is applied before delegating to them.
#[derive(Debug, Clone, Default)]
pub struct Guard<A: Authorizer = ParticipantPolicy> {
    authorizer: A,
}

impl<A: Authorizer> Guard<A> {
    pub fn new(authorizer: A) -> Self {
        Self { authorizer }
    }

    pub fn authorizer(&self) -> &A {
        &self.authorizer
    }

    fn check(&self, actor: &Actor, action: Action, target: Target<'_>) -> Result<(), PolicyError> {
        if self.authorizer.authorize(actor, action, target) {
            return Ok(());
        }

        warn!(%actor, %action, "Authorization denied");
        metrics::record_counter(metrics::POLICY_DENIED, 1);
        Err(PolicyError::Unauthorized {
            actor: actor.clone(),
            action,
        })
    }

    /// The account's profiles, if `actor` may see them
    pub fn view_profiles<'a>(
        &self,
        actor: &Actor,
        account: &'a Account,
    ) -> Result<&'a [Arc<Profile>], PolicyError> {
        self.check(actor, Action::ViewProfiles, Target::Account(account))?;
        Ok(account.profiles())
    }

    pub fn request_publication(
        &self,
        actor: &Actor,
        conversation: &Conversation,
    ) -> Result<(), PolicyError> {
        self.check(
            actor,
            Action::RequestPublication,
            Target::Conversation(conversation),
        )?;
        conversation.request_publication();
        Ok(())
    }

    pub fn rescind_publication_request(
        &self,
        actor: &Actor,
        conversation: &Conversation,
    ) -> Result<(), PolicyError> {
        self.check(
            actor,
            Action::RescindPublicationRequest,
            Target::Conversation(conversation),
        )?;
        conversation.rescind_publication_request();
        Ok(())
    }

    pub fn accept_publication(
        &self,
        actor: &Actor,
        conversation: &Conversation,
    ) -> Result<(), PolicyError> {
        self.check(
            actor,
            Action::AcceptPublication,
            Target::Conversation(conversation),
        )?;
        conversation.accept_publication();
        Ok(())
    }

    pub fn rescind_publication_acceptance(
        &self,
        actor: &Actor,
        conversation: &Conversation,
    ) -> Result<(), PolicyError> {
        self.check(
            actor,
            Action::RescindPublicationAcceptance,
            Target::Conversation(conversation),
        )?;
        conversation.rescind_publication_acceptance();
        Ok(())
    }

    /// Send a reply as `responder`
    ///
    /// The acting profile is the one the reply is attributed to, so a
    /// participant cannot post under someone else's name.
    pub fn send_reply(
        &self,
        conversation: &Arc<Conversation>,
        responder: Arc<Profile>,
        response: impl Into<String>,
        reply_id: ReplyId,
        reply_sent_at: Timestamp,
    ) -> Result<Reply, PolicyError> {
        let actor = Actor::Profile(responder.id.clone());
        self.check(
            &actor,
            Action::SendReply,
            Target::Conversation(conversation),
        )?;
        Ok(conversation.send_reply(responder, response, reply_id, reply_sent_at))
    }
}
