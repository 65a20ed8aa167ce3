//! toolscout - Usage-Aware Suggestion Engine
//!
//! A bounded-memory learning layer that helps a terminal agent choose the
//! right shell command and the right external tool for a task without
//! inflating the prompt context.
//!
//! # Architecture
//!
//! - **Ledger**: capped, time-expiring key-value store under both trackers
//! - **Platform**: environment detection + command compatibility verdicts
//! - **Classify**: coarse task categories + keyword extraction
//! - **Tracking**: command and tool outcome ledgers
//! - **Ranking**: deterministic relevance scoring and shortlisting
//! - **Advisor**: the facade hosts interact with

pub mod errors;
pub mod ledger;
pub mod platform;
pub mod classify;
pub mod tracking;
pub mod ranking;
pub mod telemetry;
pub mod config;
pub mod advisor;

// Re-export commonly used types
pub use errors::{Result, ToolscoutError};

pub use advisor::UsageAdvisor;
pub use classify::{classify_task, TaskCategory, TaskContext};
pub use config::Config;
pub use ledger::BoundedTtlLedger;
pub use platform::{
    classify_compatibility, CompatibilityVerdict, EnvironmentDescriptor, OsFamily, ShellKind,
};
pub use ranking::{
    RankedTool, RelevanceRanker, Shortlist, ToolDescriptor, SCHEMA_SCORE_THRESHOLD,
};
pub use tracking::{CommandOutcomeTracker, CommandStats, ToolUsageStats, ToolUsageTracker};
