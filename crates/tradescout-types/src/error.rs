//! Error types for TradeScout.
//!
//! All errors use the `TS_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Want-to-sell query outcomes
//! - 2xx: Bulk copy errors
//! - 3xx: Command surface errors
//! - 9xx: General / internal errors
//!
//! 1xx and 2xx variants are domain outcomes: terminal for the current
//! command, reported once to the requester, never treated as a system fault.

use thiserror::Error;

use crate::{ExchangeId, SellerId};

/// Central error enum for all TradeScout operations.
#[derive(Debug, Error)]
pub enum TradescoutError {
    // =================================================================
    // Query Outcomes (1xx)
    // =================================================================
    /// No visible item has this display name (case-insensitive).
    #[error("TS_ERR_100: Item not found: {name}")]
    ItemNotFound { name: String },

    /// No seller is both active and open to the requester.
    #[error("TS_ERR_101: No active seller grants consumer access")]
    NoEligibleSeller,

    /// Every eligible seller lacks an offer for the item or hit its limit.
    #[error("TS_ERR_102: No seller is currently buying {item}")]
    NoMatchingOffer { item: String },

    // =================================================================
    // Bulk Copy Errors (2xx)
    // =================================================================
    /// The requester declined the destructive-action confirmation.
    #[error("TS_ERR_200: {operation} cancelled by requester")]
    OperationCancelled { operation: String },

    /// The requester manages no entity of this kind.
    #[error("TS_ERR_201: No owned {kind} found")]
    NoOwnedEntities { kind: String },

    /// The requester lacks the access level required on an entity.
    #[error("TS_ERR_202: Unauthorized: {reason}")]
    Unauthorized { reason: String },

    /// The referenced seller does not exist in the world.
    #[error("TS_ERR_203: Seller not found: {0}")]
    SellerNotFound(SellerId),

    /// The referenced exchange does not exist in the world.
    #[error("TS_ERR_204: Exchange not found: {0}")]
    ExchangeNotFound(ExchangeId),

    // =================================================================
    // Command Errors (3xx)
    // =================================================================
    /// The command name is not recognised.
    #[error("TS_ERR_300: Unknown command: {0}")]
    UnknownCommand(String),

    /// A command argument is missing or malformed.
    #[error("TS_ERR_301: Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Unrecoverable internal error.
    #[error("TS_ERR_900: Internal error: {0}")]
    Internal(String),

    /// Serialization / deserialization error.
    #[error("TS_ERR_901: Serialization error: {0}")]
    Serialization(String),

    /// Configuration error (invalid config file, bad values, etc.).
    #[error("TS_ERR_902: Configuration error: {0}")]
    Configuration(String),

    /// I/O error (world snapshot, config file).
    #[error("TS_ERR_903: I/O error: {0}")]
    Io(String),
}

impl TradescoutError {
    /// Whether this error is a normal domain outcome to be shown to the
    /// requester as a status line, as opposed to an infrastructure failure.
    #[must_use]
    pub fn is_user_facing(&self) -> bool {
        !matches!(
            self,
            Self::Internal(_) | Self::Serialization(_) | Self::Configuration(_) | Self::Io(_)
        )
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, TradescoutError>;

impl From<std::io::Error> for TradescoutError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TradescoutError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for TradescoutError {
    fn from(err: toml::de::Error) -> Self {
        Self::Configuration(err.to_string())
    }
}
