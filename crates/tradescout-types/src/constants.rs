//! System-wide constants for TradeScout.

/// Quantity reported when a constraint is effectively unlimited
/// (no offer limit, or funds that never run out).
pub const DEFAULT_UNLIMITED_SENTINEL: u64 = 999;

/// Panel category used when opening a want-to-sell report.
pub const DEFAULT_PANEL_CATEGORY: &str = "Trades";

/// Command prefix accepted in front of sub-commands (`dt wts Wheat`).
pub const DEFAULT_COMMAND_PREFIX: &str = "dt";

/// Environment variable overriding the unlimited sentinel.
pub const ENV_UNLIMITED_SENTINEL: &str = "TRADESCOUT_UNLIMITED_SENTINEL";

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tool name.
pub const TOOL_NAME: &str = "TradeScout";
