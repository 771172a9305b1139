//! Reply labels

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Quality tag attached to a reply
///
/// The set is closed. Anything that reacts to labels (profile display,
/// account review) matches on it exhaustively, so adding a variant is a
/// compile error everywhere a decision has to be made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// Shown on the author's profile
    Exemplary,
    Helpful,
    /// Triggers a review of the author's account
    Malice,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Exemplary => "exemplary",
            Label::Helpful => "helpful",
            Label::Malice => "malice",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing an unknown label name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown label: {0}")]
pub struct UnknownLabel(pub String);

impl FromStr for Label {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "exemplary" => Ok(Label::Exemplary),
            "helpful" => Ok(Label::Helpful),
            "malice" => Ok(Label::Malice),
            _ => Err(UnknownLabel(s.to_string())),
        }
    }
}
