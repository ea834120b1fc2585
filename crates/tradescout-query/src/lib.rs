//! # tradescout-query
//!
//! **Read-only want-to-sell query.**
//!
//! Given an item name and a requesting player, finds every store that would
//! buy that item right now, how many units each would take, and at what
//! price, grouped by currency. It has:
//!
//! - **No side effects**: only shared borrows of the world
//! - **Injected authorization**: the [`Authorizer`](tradescout_types::Authorizer) decides access
//! - **Finite quantities**: the unlimited sentinel is applied in [`budget`]
//! - **Deterministic output**: same world in, same report out

pub mod aggregator;
pub mod budget;
pub mod capacity;
pub mod determinism;
pub mod directory;
pub mod report;
pub mod resolver;
pub mod selector;

pub use aggregator::SellQuery;
pub use budget::affordable_quantity;
pub use capacity::{StockCapacity, stock_capacity};
pub use determinism::{compute_report_digest, report_digest_hex, verify_report_digest};
pub use directory::eligible_sellers;
pub use report::{CurrencySection, SellLine, SellReport};
pub use resolver::ItemResolver;
pub use selector::best_buy_offer;
