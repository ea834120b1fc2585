//! # tradescout-copy
//!
//! **Confirmation-gated bulk copy** of store offers and exchange tables.
//!
//! ## Flow
//!
//! Both operations follow the same steps:
//! 1. List the entities the requester may manage, sorted by name
//! 2. Answer an invalid selection with that listing
//! 3. Ask the [`Confirmer`]; a decline is terminal and mutates nothing
//! 4. Re-check full access on the target
//! 5. Build the full replacement and swap it in through the
//!    [`MarketRegistry`](tradescout_types::MarketRegistry) in one assignment
//! 6. Return a [`CopyReceipt`](tradescout_types::CopyReceipt) with counts

pub mod confirm;
pub mod exchange_copy;
pub mod listing;
pub mod outcome;
pub mod store_copy;

pub use confirm::{Confirmer, FixedAnswer};
pub use exchange_copy::{COPY_EXCHANGE, copy_exchange};
pub use listing::{ListingEntry, Selection, listing, manageable_exchanges, owned_sellers};
pub use outcome::CopyOutcome;
pub use store_copy::{COPY_STORE, copy_store};
