//! Conversations and the publication consent state machine
//!
//! A conversation is private to the letter's author and one responder until
//! both of them agree to publish it:
//!
//! ```text
//!                     accepted = false     accepted = true
//!   requested = false   Private              Accepted
//!   requested = true    Requested            Public
//! ```
//!
//! The author moves between rows (`request_publication`,
//! `rescind_publication_request`), the responder between columns
//! (`accept_publication`, `rescind_publication_acceptance`).
//! The two flags are independent; `is_public` is always derived from both
//! and is never stored. Either side may withdraw at any time, which
//! immediately un-publishes the conversation.

use super::letter::Letter;
use super::reply::Reply;
use super::types::{ConversationId, ReplyId, Timestamp};
use crate::core_identity::Profile;
use crate::metrics;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;

/// One of the four combinations of the two consent flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicationState {
    /// Neither side has consented
    Private,
    /// The author asked to publish, the responder has not agreed
    Requested,
    /// The responder agreed ahead of any request
    Accepted,
    /// Both sides consent
    Public,
}

impl PublicationState {
    pub fn from_flags(requested: bool, accepted: bool) -> Self {
        match (requested, accepted) {
            (false, false) => PublicationState::Private,
            (true, false) => PublicationState::Requested,
            (false, true) => PublicationState::Accepted,
            (true, true) => PublicationState::Public,
        }
    }

    pub fn is_public(&self) -> bool {
        matches!(self, PublicationState::Public)
    }
}

impl fmt::Display for PublicationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PublicationState::Private => "private",
            PublicationState::Requested => "requested",
            PublicationState::Accepted => "accepted",
            PublicationState::Public => "public",
        };
        write!(f, "{}", s)
    }
}

/// The exchange between a letter's author and one responder
///
/// Replies keep a shared handle to their conversation, so the consent
/// flags are atomics mutated through `&self`. Callers are still expected to
/// serialize mutations of a single conversation.
#[derive(Debug)]
pub struct Conversation {
    id: ConversationId,
    created_at: Timestamp,
    letter: Arc<Letter>,
    responder: Arc<Profile>,

    /// Set by the letter's author
    publication_requested: AtomicBool,

    /// Set by the responder
    publication_accepted: AtomicBool,
}

impl Conversation {
    /// Build a private conversation
    ///
    /// New conversations normally come from
    /// [`Letter::start_new_conversation`]; this constructor is for callers
    /// rebuilding one from storage.
    pub fn new(
        id: ConversationId,
        created_at: Timestamp,
        letter: Arc<Letter>,
        responder: Arc<Profile>,
    ) -> Self {
        Conversation {
            id,
            created_at,
            letter,
            responder,
            publication_requested: AtomicBool::new(false),
            publication_accepted: AtomicBool::new(false),
        }
    }

    pub fn id(&self) -> &ConversationId {
        &self.id
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn letter(&self) -> &Arc<Letter> {
        &self.letter
    }

    pub fn responder(&self) -> &Arc<Profile> {
        &self.responder
    }

    pub fn is_publication_requested(&self) -> bool {
        self.publication_requested.load(Ordering::Acquire)
    }

    pub fn is_publication_accepted(&self) -> bool {
        self.publication_accepted.load(Ordering::Acquire)
    }

    /// True iff publication is both requested and accepted
    pub fn is_public(&self) -> bool {
        self.publication_state().is_public()
    }

    pub fn publication_state(&self) -> PublicationState {
        PublicationState::from_flags(
            self.is_publication_requested(),
            self.is_publication_accepted(),
        )
    }

    /// Author-side consent to publish
    pub fn request_publication(&self) {
        self.set_flag(&self.publication_requested, true, "request_publication");
    }

    /// Withdraw the author's consent; un-publishes a public conversation
    pub fn rescind_publication_request(&self) {
        self.set_flag(
            &self.publication_requested,
            false,
            "rescind_publication_request",
        );
    }

    /// Responder-side consent to publish
    pub fn accept_publication(&self) {
        self.set_flag(&self.publication_accepted, true, "accept_publication");
    }

    /// Withdraw the responder's consent; un-publishes a public conversation
    pub fn rescind_publication_acceptance(&self) {
        self.set_flag(
            &self.publication_accepted,
            false,
            "rescind_publication_acceptance",
        );
    }

    fn set_flag(&self, flag: &AtomicBool, value: bool, transition: &'static str) {
        let before = self.publication_state();
        let previous = flag.swap(value, Ordering::AcqRel);
        if previous == value {
            return;
        }

        metrics::record_counter(metrics::PUBLICATION_TRANSITIONS, 1);
        debug!(
            conversation = %self.id,
            transition,
            from = %before,
            to = %self.publication_state(),
            "Publication state changed"
        );
    }

    /// Post a reply into this conversation
    ///
    /// `reply_sent_at` is when the author sent it and may predate
    /// `created_at`, e.g. for a reply composed offline. Whether `responder`
    /// is actually a participant is not checked here; see
    /// [`crate::core_policy::Guard::send_reply`].
    pub fn send_reply(
        self: &Arc<Self>,
        responder: Arc<Profile>,
        response: impl Into<String>,
        reply_id: ReplyId,
        reply_sent_at: Timestamp,
    ) -> Reply {
        debug!(
            conversation = %self.id,
            reply = %reply_id,
            author = %responder.id,
            "Sending reply"
        );
        metrics::record_counter(metrics::REPLIES_SENT, 1);

        Reply::new(
            reply_id,
            Arc::clone(self),
            responder,
            response,
            reply_sent_at,
            Timestamp::now(),
        )
    }
}
