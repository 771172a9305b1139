//! Letters, conversations and replies
//!
//! ## Flow
//!
//! 1. A profile writes a [`Letter`], an open request for discussion.
//! 2. Each responder gets a private [`Conversation`] with the author via
//!    [`Letter::start_new_conversation`].
//! 3. Participants exchange [`Reply`] messages via
//!    [`Conversation::send_reply`].
//! 4. Replies can carry a free-form reaction and, at most once, a [`Label`].
//!
//! A conversation only becomes public when the author has requested
//! publication *and* the responder has accepted it. Either of them can
//! withdraw at any point.
//!
//! Back-references (reply → conversation → letter → author) are `Arc`
//! handles; no entity owns the lifecycle of what it points to.

pub mod conversation;
pub mod errors;
pub mod label;
pub mod letter;
pub mod reply;
pub mod types;

pub use conversation::{Conversation, PublicationState};
pub use errors::ReplyError;
pub use label::{Label, UnknownLabel};
pub use letter::Letter;
pub use reply::Reply;
pub use types::{ConversationId, LetterId, ReplyId, Timestamp};
