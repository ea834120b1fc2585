//! Item catalog entries.

use serde::{Deserialize, Serialize};

use crate::ItemTypeId;

/// An item type as known to the catalog.
///
/// Immutable for the duration of a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemTypeId,
    /// Name shown to players; resolved case-insensitively.
    pub display_name: String,
    /// Default maximum quantity a single stock slot can hold.
    pub max_stack: u32,
    /// Hidden items are never resolvable by name.
    #[serde(default)]
    pub hidden: bool,
}

impl Item {
    #[must_use]
    pub fn new(id: ItemTypeId, display_name: impl Into<String>, max_stack: u32) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            max_stack,
            hidden: false,
        }
    }

    /// Lower-cased display name used as the resolver key.
    #[must_use]
    pub fn lookup_key(&self) -> String {
        self.display_name.to_lowercase()
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display_name)
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl Item {
    pub fn dummy(id: u32, display_name: &str) -> Self {
        Self::new(ItemTypeId(id), display_name, 100)
    }
}
