//! Result shape shared by both copy operations.

use serde::{Deserialize, Serialize};
use tradescout_types::CopyReceipt;

use crate::listing::ListingEntry;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CopyOutcome {
    /// The selection was missing or invalid; nothing was touched.
    Listing(Vec<ListingEntry>),
    /// The target's configuration was replaced.
    Copied(CopyReceipt),
}

impl CopyOutcome {
    #[must_use]
    pub fn receipt(&self) -> Option<&CopyReceipt> {
        match self {
            Self::Copied(receipt) => Some(receipt),
            Self::Listing(_) => None,
        }
    }

    #[must_use]
    pub fn is_copied(&self) -> bool {
        matches!(self, Self::Copied(_))
    }
}
