//! Usage tracking over the bounded TTL ledger
//!
//! Components:
//! - Command Outcome Tracker: per-environment shell command success counts
//! - Tool Usage Tracker: per-(provider, tool) success/failure records
//!
//! Both trackers are fire-and-forget from the caller's perspective: a
//! recording call never fails and never blocks the primary action.

pub mod commands;
pub mod tools;

pub use commands::{CommandOutcomeTracker, CommandStats};
pub use tools::{ToolKey, ToolUsageRecord, ToolUsageStats, ToolUsageSummary, ToolUsageTracker};
