//! Moderation entry points that raise events

use super::broadcaster::EventBroadcaster;
use super::consequence::{consequence_of, ModerationAction};
use super::events::ModerationEvent;
use crate::core_discussion::{Label, Reply, ReplyError, Timestamp};
use crate::core_identity::Account;
use crate::metrics;
use tracing::info;

/// Applies bans and labels, then tells subscribers about it
///
/// The domain types are mutated exactly as their own methods would; this
/// service only adds event emission and metrics on top.
#[derive(Clone, Default)]
pub struct ModerationService {
    events: EventBroadcaster,
}

impl ModerationService {
    pub fn new(events: EventBroadcaster) -> Self {
        Self { events }
    }

    /// Broadcaster subscribers attach to
    pub fn events(&self) -> &EventBroadcaster {
        &self.events
    }

    /// Ban `account`; emits [`ModerationEvent::AccountBanned`] on a transition
    pub fn ban(&self, account: &mut Account) -> bool {
        if !account.ban() {
            return false;
        }

        info!(account = %account.id(), "Account banned");
        metrics::record_counter(metrics::ACCOUNTS_BANNED, 1);
        self.events.emit(ModerationEvent::AccountBanned {
            account_id: account.id().clone(),
            at: Timestamp::now(),
        });
        true
    }

    /// Unban `account`; emits [`ModerationEvent::AccountUnbanned`] on a transition
    pub fn unban(&self, account: &mut Account) -> bool {
        if !account.unban() {
            return false;
        }

        info!(account = %account.id(), "Account unbanned");
        metrics::record_counter(metrics::ACCOUNTS_UNBANNED, 1);
        self.events.emit(ModerationEvent::AccountUnbanned {
            account_id: account.id().clone(),
            at: Timestamp::now(),
        });
        true
    }

    /// Label `reply` and announce the consequence
    ///
    /// A reply that is already labeled keeps its label, the error is
    /// returned and no event is emitted.
    pub fn label_reply(
        &self,
        reply: &mut Reply,
        label: Label,
    ) -> Result<ModerationAction, ReplyError> {
        if let Err(e) = reply.set_label(label) {
            metrics::record_counter(metrics::LABELS_REJECTED, 1);
            return Err(e);
        }

        let consequence = consequence_of(label);
        info!(
            reply = %reply.id(),
            author = %reply.author().id,
            %label,
            ?consequence,
            "Reply labeled"
        );
        metrics::record_counter(metrics::REPLIES_LABELED, 1);

        self.events.emit(ModerationEvent::ReplyLabeled {
            reply_id: reply.id().clone(),
            conversation_id: reply.conversation().id().clone(),
            author_id: reply.author().id.clone(),
            label,
            consequence,
            at: Timestamp::now(),
        });
        Ok(consequence)
    }
}
