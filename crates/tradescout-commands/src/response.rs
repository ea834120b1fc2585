//! What a command hands back to the requester.

use serde::{Deserialize, Serialize};
use tradescout_types::TradescoutError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Response {
    /// A titled, categorized panel. Only a successful want-to-sell query
    /// opens one.
    Panel {
        title: String,
        category: String,
        body: String,
    },
    /// A plain message line (or block) for the requester.
    Message(String),
}

impl Response {
    #[must_use]
    pub fn message(text: impl Into<String>) -> Self {
        Self::Message(text.into())
    }
}

impl std::fmt::Display for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Panel {
                title,
                category,
                body,
            } => write!(f, "[{category}] {title}\n\n{body}"),
            Self::Message(text) => f.write_str(text),
        }
    }
}

/// A response plus whether the world was changed producing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub response: Response,
    pub world_changed: bool,
}

impl Reply {
    #[must_use]
    pub fn unchanged(response: Response) -> Self {
        Self {
            response,
            world_changed: false,
        }
    }
}

/// The single line shown to the requester for an error.
#[must_use]
pub fn error_message(err: &TradescoutError) -> String {
    match err {
        TradescoutError::ItemNotFound { name } => format!("Can't find the item {name}"),
        TradescoutError::NoEligibleSeller => {
            "Could not find any store that is turned on and you are authorized as customer!".into()
        }
        TradescoutError::NoMatchingOffer { item } => {
            format!("No store found that is currently buying {item}")
        }
        TradescoutError::OperationCancelled { operation } => format!("{operation} cancelled!"),
        TradescoutError::NoOwnedEntities { kind } if kind == "exchange" => {
            "No owned exchange found.".into()
        }
        TradescoutError::NoOwnedEntities { kind } => format!("No owned {kind} found"),
        other => other.to_string(),
    }
}
