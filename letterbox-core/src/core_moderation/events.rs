//! Moderation Events
//!
//! Events raised by the core for the moderation and notification layers.

use super::consequence::ModerationAction;
use crate::core_discussion::{ConversationId, Label, ReplyId, Timestamp};
use crate::core_identity::{AccountId, ProfileId};
use serde::{Deserialize, Serialize};

/// Moderation event type
///
/// Only state changes produce events: banning a banned account, or a
/// rejected label assignment, emits nothing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ModerationEvent {
    /// An account went from unbanned to banned
    AccountBanned { account_id: AccountId, at: Timestamp },

    /// An account went from banned to unbanned
    AccountUnbanned { account_id: AccountId, at: Timestamp },

    /// A reply received its label
    ReplyLabeled {
        reply_id: ReplyId,
        conversation_id: ConversationId,
        author_id: ProfileId,
        label: Label,
        consequence: ModerationAction,
        at: Timestamp,
    },
}

impl ModerationEvent {
    /// When the event happened
    pub fn at(&self) -> Timestamp {
        match self {
            ModerationEvent::AccountBanned { at, .. } => *at,
            ModerationEvent::AccountUnbanned { at, .. } => *at,
            ModerationEvent::ReplyLabeled { at, .. } => *at,
        }
    }

    /// Get the event type name (for logging/metrics)
    pub fn event_type(&self) -> &'static str {
        match self {
            ModerationEvent::AccountBanned { .. } => "account_banned",
            ModerationEvent::AccountUnbanned { .. } => "account_unbanned",
            ModerationEvent::ReplyLabeled { .. } => "reply_labeled",
        }
    }

    /// Whether the event asks someone to look at an account
    pub fn needs_review(&self) -> bool {
        matches!(
            self,
            ModerationEvent::ReplyLabeled {
                consequence: ModerationAction::ReviewAccount,
                ..
            }
        )
    }
}
