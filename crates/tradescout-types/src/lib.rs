//! # tradescout-types
//!
//! Shared types, errors, and configuration for **TradeScout**.
//!
//! This crate is the leaf dependency of the workspace: every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`UserId`], [`SellerId`], [`ExchangeId`], [`ItemTypeId`]
//! - **Catalog**: [`Item`]
//! - **Money**: [`Currency`], [`CurrencyKind`], [`Holding`], [`BankAccount`]
//! - **Storage**: [`StorageCompartment`], [`StockSlot`], [`CompartmentKind`]
//! - **Offers**: [`TradeOffer`], [`OfferCategory`], [`StoreConfig`], [`OfferSide`]
//! - **Entities**: [`Seller`], [`Exchange`], [`ExchangeConfig`]
//! - **Access**: [`AccessLevel`], [`AccessList`], [`Authorizer`], [`AccessListAuthorizer`]
//! - **World**: [`MarketView`], [`MarketRegistry`], [`World`]
//! - **Receipts**: [`CopyReceipt`], [`CopyKind`], [`CopyCounts`]
//! - **Configuration**: [`QueryConfig`], [`CommandConfig`]
//! - **Errors**: [`TradescoutError`] with `TS_ERR_` prefix codes
//! - **Constants**: defaults and limits

pub mod access;
pub mod config;
pub mod constants;
pub mod currency;
pub mod error;
pub mod exchange;
pub mod ids;
pub mod item;
pub mod offer;
pub mod receipt;
pub mod seller;
pub mod storage;
pub mod world;

// Re-export all primary types at crate root for ergonomic imports:
//   use tradescout_types::{Seller, TradeOffer, World, ...};

pub use access::*;
pub use config::*;
pub use currency::*;
pub use error::*;
pub use exchange::*;
pub use ids::*;
pub use item::*;
pub use offer::*;
pub use receipt::*;
pub use seller::*;
pub use storage::*;
pub use world::*;

// Constants are accessed via `tradescout_types::constants::FOO`
// (not re-exported to avoid name collisions).
