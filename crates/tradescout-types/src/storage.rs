//! Physical stock storage of a seller.
//!
//! A seller owns one or more compartments, each a fixed set of slots. A slot
//! holds at most one item type. Only [`CompartmentKind::AuthorizationGated`]
//! compartments (the ones customers deliver into) count toward sellable
//! capacity.

use serde::{Deserialize, Serialize};

use crate::{Item, ItemTypeId};

/// Whether a compartment faces customers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompartmentKind {
    /// Externally facing storage, gated by the store's authorization.
    AuthorizationGated,
    /// Internal or staging storage; never receives sold goods.
    Internal,
}

/// A single stock slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockSlot {
    /// Item type held, or `None` for an empty slot.
    pub item: Option<ItemTypeId>,
    pub quantity: u32,
}

impl StockSlot {
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            item: None,
            quantity: 0,
        }
    }

    #[must_use]
    pub const fn holding(item: ItemTypeId, quantity: u32) -> Self {
        Self {
            item: Some(item),
            quantity,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.item.is_none()
    }
}

/// Per-item override of the slot cap within one compartment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackCap {
    pub item: ItemTypeId,
    pub cap: u32,
}

/// A set of stock slots with shared acceptance rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageCompartment {
    pub kind: CompartmentKind,
    pub slots: Vec<StockSlot>,
    /// Compartment-wide ceiling applied on top of the item's own stack size.
    #[serde(default)]
    pub stack_limit: Option<u32>,
    /// Per-item caps that replace every other rule for that item.
    #[serde(default)]
    pub stack_caps: Vec<StackCap>,
    /// If set, only these item types are accepted at all.
    #[serde(default)]
    pub accepts: Option<Vec<ItemTypeId>>,
}

impl StorageCompartment {
    /// A compartment of `slot_count` empty slots with no extra restrictions.
    #[must_use]
    pub fn new(kind: CompartmentKind, slot_count: usize) -> Self {
        Self {
            kind,
            slots: vec![StockSlot::empty(); slot_count],
            stack_limit: None,
            stack_caps: Vec::new(),
            accepts: None,
        }
    }

    #[must_use]
    pub fn is_authorization_gated(&self) -> bool {
        self.kind == CompartmentKind::AuthorizationGated
    }

    /// Maximum quantity of `item` a single slot of this compartment accepts.
    #[must_use]
    pub fn max_accepted(&self, item: &Item) -> u32 {
        if let Some(accepted) = &self.accepts {
            if !accepted.contains(&item.id) {
                return 0;
            }
        }
        if let Some(cap) = self.stack_caps.iter().find(|c| c.item == item.id) {
            return cap.cap;
        }
        match self.stack_limit {
            Some(limit) => limit.min(item.max_stack),
            None => item.max_stack,
        }
    }

    /// Place `quantity` of `item` into the slot at `index`.
    ///
    /// Returns `false` if the index is out of range.
    pub fn put(&mut self, index: usize, item: ItemTypeId, quantity: u32) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) => {
                *slot = StockSlot::holding(item, quantity);
                true
            }
            None => false,
        }
    }

    /// Builder-style variant of [`Self::put`]; out-of-range indices are ignored.
    #[must_use]
    pub fn with_stock(mut self, index: usize, item: ItemTypeId, quantity: u32) -> Self {
        self.put(index, item, quantity);
        self
    }

    #[must_use]
    pub fn with_stack_limit(mut self, limit: u32) -> Self {
        self.stack_limit = Some(limit);
        self
    }

    #[must_use]
    pub fn with_stack_cap(mut self, item: ItemTypeId, cap: u32) -> Self {
        self.stack_caps.push(StackCap { item, cap });
        self
    }

    #[must_use]
    pub fn accepting(mut self, items: Vec<ItemTypeId>) -> Self {
        self.accepts = Some(items);
        self
    }
}
