//! What each label means for the moderation layer

use crate::core_discussion::Label;
use serde::{Deserialize, Serialize};

/// Follow-up expected from collaborators once a reply is labeled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModerationAction {
    /// Feature the reply on the author's profile
    ShowOnProfile,
    /// Queue the author's account for review
    ReviewAccount,
    NoAction,
}

/// Map a label to its downstream consequence
pub fn consequence_of(label: Label) -> ModerationAction {
    match label {
        Label::Exemplary => ModerationAction::ShowOnProfile,
        Label::Helpful => ModerationAction::NoAction,
        Label::Malice => ModerationAction::ReviewAccount,
    }
}
