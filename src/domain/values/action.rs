use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Trading-log action tag. The sheet is hand-maintained, so anything outside
/// the known set is carried through as a free-text tag rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Buy,
    Sell,
    Note,
    Other(String),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Buy => write!(f, "buy"),
            Action::Sell => write!(f, "sell"),
            Action::Note => write!(f, "note"),
            Action::Other(tag) => write!(f, "{tag}"),
        }
    }
}

impl Action {
    /// Total: any tag parses, unknown ones ride along as `Other`.
    pub fn parse(s: &str) -> Self {
        let tag = s.trim();
        match tag.to_lowercase().as_str() {
            "buy" => Action::Buy,
            "sell" => Action::Sell,
            "note" => Action::Note,
            _ => Action::Other(tag.to_string()),
        }
    }

    pub fn is_sell(&self) -> bool {
        matches!(self, Action::Sell)
    }
}

impl FromStr for Action {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Action::parse(s))
    }
}
