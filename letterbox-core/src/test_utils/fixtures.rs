//! Test fixtures for creating common test objects
//!
//! Provides builder patterns and factory functions for creating test data.

use crate::core_discussion::{
    Conversation, ConversationId, Letter, LetterId, Reply, ReplyId, Timestamp,
};
use crate::core_identity::{Profile, ProfileId};
use crate::core_space::{Space, SpaceId};
use std::sync::Arc;

/// A shared space for fixtures that don't care which space they're in
pub fn test_space() -> Arc<Space> {
    Arc::new(Space::new(SpaceId::new("test-space"), "Test Space"))
}

/// Builder for creating test profiles
pub struct TestProfileBuilder {
    id: ProfileId,
    space: Option<Arc<Space>>,
}

impl TestProfileBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: ProfileId::new(id),
            space: None,
        }
    }

    pub fn with_space(mut self, space: Arc<Space>) -> Self {
        self.space = Some(space);
        self
    }

    pub fn build(self) -> Arc<Profile> {
        Arc::new(Profile::new(
            self.id,
            self.space.unwrap_or_else(test_space),
        ))
    }
}

/// Builder for creating test letters
pub struct TestLetterBuilder {
    id: LetterId,
    content: String,
    author: Option<Arc<Profile>>,
}

impl TestLetterBuilder {
    pub fn new() -> Self {
        Self {
            id: LetterId::new("letter-1"),
            content: "Would anyone like to talk about tide pools?".to_string(),
            author: None,
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = LetterId::new(id);
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_author(mut self, author: Arc<Profile>) -> Self {
        self.author = Some(author);
        self
    }

    pub fn build(self) -> Arc<Letter> {
        let author = self
            .author
            .unwrap_or_else(|| TestProfileBuilder::new("author").build());
        Arc::new(Letter::new(self.id, self.content, author))
    }
}

impl Default for TestLetterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A fresh conversation between profile "author" and profile "responder"
pub fn sample_conversation() -> Arc<Conversation> {
    TestLetterBuilder::new().build().start_new_conversation(
        ConversationId::new("conversation-1"),
        TestProfileBuilder::new("responder").build(),
    )
}

/// An unlabeled reply from the responder of [`sample_conversation`]
pub fn sample_reply() -> Reply {
    let conversation = sample_conversation();
    let responder = Arc::clone(conversation.responder());
    conversation.send_reply(
        responder,
        "Tide pools are wonderful.",
        ReplyId::new("reply-1"),
        Timestamp::from_millis(1_700_000_000_000),
    )
}
