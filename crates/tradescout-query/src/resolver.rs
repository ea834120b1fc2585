//! Item resolution: free-text name → catalog item.
//!
//! Exact, case-insensitive match on the display name. Hidden items are never
//! resolvable. There is no fuzzy or prefix matching.

use std::collections::HashMap;

use tradescout_types::{Item, MarketView, Result, TradescoutError};

/// Lookup table from lower-cased display name to item.
#[derive(Debug)]
pub struct ItemResolver<'a> {
    by_name: HashMap<String, &'a Item>,
}

impl<'a> ItemResolver<'a> {
    /// Build the table over every non-hidden item. When two items share a
    /// lower-cased name, the first one enumerated wins.
    pub fn new(items: impl IntoIterator<Item = &'a Item>) -> Self {
        let mut by_name = HashMap::new();
        for item in items.into_iter().filter(|i| !i.hidden) {
            by_name.entry(item.lookup_key()).or_insert(item);
        }
        Self { by_name }
    }

    pub fn from_world<W: MarketView>(world: &'a W) -> Self {
        Self::new(world.items())
    }

    /// Resolve `name` to an item.
    ///
    /// # Errors
    /// [`TradescoutError::ItemNotFound`] when no visible item has that name.
    pub fn resolve(&self, name: &str) -> Result<&'a Item> {
        self.by_name
            .get(&name.to_lowercase())
            .copied()
            .ok_or_else(|| TradescoutError::ItemNotFound {
                name: name.to_string(),
            })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
