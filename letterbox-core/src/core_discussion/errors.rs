//! Error types for the discussion model

use super::label::Label;
use super::types::ReplyId;
use thiserror::Error;

/// Errors raised by reply operations
///
/// Everything else in the discussion model is total; the only invalid state
/// transition is labeling a reply twice.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReplyError {
    #[error("Reply {reply} is already labeled {current} (attempted {attempted})")]
    LabelAlreadySet {
        reply: ReplyId,
        current: Label,
        attempted: Label,
    },
}
