//! # tradescout-commands
//!
//! **Text command surface** for TradeScout.
//!
//! ## Flow
//!
//! ```text
//! "/dt wts Wheat" → parse_command() → CommandHandler::handle()
//!     → SellQuery / copy_store / copy_exchange → Response
//! ```
//!
//! Every outcome, including every error, becomes exactly one [`Response`]:
//! a panel for a successful want-to-sell query, a message otherwise.

pub mod command;
pub mod handler;
pub mod response;

pub use command::{Command, parse_command, parse_command_with_prefix};
pub use handler::CommandHandler;
pub use response::{Reply, Response, error_message};
