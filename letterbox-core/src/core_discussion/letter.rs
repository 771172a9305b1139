//! Letters: open requests for discussion

use super::conversation::Conversation;
use super::types::{ConversationId, LetterId, Timestamp};
use crate::core_identity::Profile;
use crate::metrics;
use std::sync::Arc;
use tracing::debug;

/// A Letter is an authored request for discussion, open to any responder
///
/// Every reply to a letter opens a separate [`Conversation`] between the
/// author and that responder.
#[derive(Debug, Clone)]
pub struct Letter {
    /// Unique identifier
    pub id: LetterId,

    /// Body of the request
    pub content: String,

    /// Profile that wrote the letter
    pub author: Arc<Profile>,
}

impl Letter {
    pub fn new(id: LetterId, content: impl Into<String>, author: Arc<Profile>) -> Self {
        Letter {
            id,
            content: content.into(),
            author,
        }
    }

    /// Open a conversation between this letter's author and `responder`
    ///
    /// Any profile may respond. Restricting who may then talk inside the
    /// conversation is done by [`crate::core_policy`].
    pub fn start_new_conversation(
        self: &Arc<Self>,
        conversation_id: ConversationId,
        responder: Arc<Profile>,
    ) -> Arc<Conversation> {
        debug!(
            letter = %self.id,
            conversation = %conversation_id,
            responder = %responder.id,
            "Starting conversation"
        );
        metrics::record_counter(metrics::CONVERSATIONS_STARTED, 1);

        Arc::new(Conversation::new(
            conversation_id,
            Timestamp::now(),
            Arc::clone(self),
            responder,
        ))
    }
}
