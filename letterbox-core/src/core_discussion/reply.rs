//! Replies within a conversation

use super::conversation::Conversation;
use super::errors::ReplyError;
use super::label::Label;
use super::types::{ReplyId, Timestamp};
use crate::core_identity::Profile;
use std::sync::Arc;
use tracing::{debug, warn};

/// A single message in a [`Conversation`]
///
/// Content and attribution are fixed at creation. The reaction can be
/// rewritten freely; the label can be set once and never changed.
#[derive(Debug)]
pub struct Reply {
    id: ReplyId,
    conversation: Arc<Conversation>,
    author: Arc<Profile>,
    content: String,

    /// When the author sent the reply
    sent_at: Timestamp,

    /// When the reply entered the system
    created_at: Timestamp,

    reaction: Option<String>,
    label: Option<Label>,
}

impl Reply {
    /// Build an unlabeled reply
    ///
    /// New replies normally come from [`Conversation::send_reply`]; this
    /// constructor is for callers rebuilding one from storage.
    pub fn new(
        id: ReplyId,
        conversation: Arc<Conversation>,
        author: Arc<Profile>,
        content: impl Into<String>,
        sent_at: Timestamp,
        created_at: Timestamp,
    ) -> Self {
        Reply {
            id,
            conversation,
            author,
            content: content.into(),
            sent_at,
            created_at,
            reaction: None,
            label: None,
        }
    }

    pub fn id(&self) -> &ReplyId {
        &self.id
    }

    pub fn conversation(&self) -> &Arc<Conversation> {
        &self.conversation
    }

    pub fn author(&self) -> &Arc<Profile> {
        &self.author
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn sent_at(&self) -> Timestamp {
        self.sent_at
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn reaction(&self) -> Option<&str> {
        self.reaction.as_deref()
    }

    /// Replace the reaction; last write wins
    pub fn set_reaction(&mut self, reaction: impl Into<String>) {
        self.reaction = Some(reaction.into());
    }

    pub fn clear_reaction(&mut self) {
        self.reaction = None;
    }

    pub fn label(&self) -> Option<Label> {
        self.label
    }

    /// Attach a label to this reply
    ///
    /// A reply is labeled at most once. Any later attempt, with the same
    /// label or a different one, fails with [`ReplyError::LabelAlreadySet`]
    /// and leaves the stored label untouched.
    pub fn set_label(&mut self, label: Label) -> Result<(), ReplyError> {
        if let Some(current) = self.label {
            warn!(
                reply = %self.id,
                %current,
                attempted = %label,
                "Rejected label reassignment"
            );
            return Err(ReplyError::LabelAlreadySet {
                reply: self.id.clone(),
                current,
                attempted: label,
            });
        }

        self.label = Some(label);
        debug!(reply = %self.id, %label, "Reply labeled");
        Ok(())
    }
}
