//! Command Outcome Tracker: proven-command learning per environment
//!
//! Counts successful command heads keyed by environment family. Failures
//! are never recorded; the caller decides what counts as success before
//! calling in. Absence of a record means no data, not failure.

use std::time::Duration;

use crate::ledger::BoundedTtlLedger;
use crate::platform::EnvironmentDescriptor;

/// Maximum number of tracked commands
const COMMAND_CAPACITY: usize = 50;

/// Retention window for a command record
const COMMAND_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Per-record success count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CommandRecord {
    success_count: u32,
}

/// Snapshot of tracked command usage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandStats {
    /// Distinct commands tracked for the current environment
    pub total: usize,
    /// Top commands formatted as "token (Nx)", best first
    pub top: Vec<String>,
    /// Environment family label
    pub environment: String,
}

/// Tracks command successes per environment family
#[derive(Debug)]
pub struct CommandOutcomeTracker {
    env: EnvironmentDescriptor,
    ledger: BoundedTtlLedger<String, CommandRecord>,
}

impl CommandOutcomeTracker {
    /// Create a tracker with the default capacity and retention window
    pub fn new(env: EnvironmentDescriptor) -> Self {
        Self::with_limits(env, COMMAND_CAPACITY, COMMAND_TTL)
    }

    /// Create a tracker with explicit limits
    pub fn with_limits(env: EnvironmentDescriptor, capacity: usize, ttl: Duration) -> Self {
        Self {
            env,
            ledger: BoundedTtlLedger::new(capacity, ttl),
        }
    }

    /// Record a successful command execution.
    ///
    /// Extracts the leading token and increments its record, creating it
    /// with count 1 if absent. Empty input is a no-op, never an error.
    pub fn record_success(&mut self, command_line: &str) {
        let token = match leading_token(command_line) {
            Some(t) => t,
            None => return,
        };
        let key = self.key_for(&token);

        if let Some(record) = self.ledger.get_mut(&key) {
            record.success_count = record.success_count.saturating_add(1);
            return;
        }
        self.ledger.set(key, CommandRecord { success_count: 1 });
    }

    /// Proven commands for the current environment, best first.
    ///
    /// Single occurrences are not considered a pattern and are excluded.
    pub fn top_successful(&mut self, limit: usize) -> Vec<String> {
        let mut pairs = self.current_counts();
        pairs.retain(|(_, count)| *count > 1);
        pairs.sort_by(|a, b| b.1.cmp(&a.1));
        pairs.into_iter().take(limit).map(|(token, _)| token).collect()
    }

    /// Usage snapshot: distinct tracked commands plus the top 5 with counts
    pub fn stats(&mut self) -> CommandStats {
        let mut pairs = self.current_counts();
        pairs.sort_by(|a, b| b.1.cmp(&a.1));

        CommandStats {
            total: pairs.len(),
            top: pairs
                .iter()
                .take(5)
                .map(|(token, count)| format!("{token} ({count}x)"))
                .collect(),
            environment: self.env.family_key().to_string(),
        }
    }

    /// (token, count) pairs for the current environment family
    fn current_counts(&mut self) -> Vec<(String, u32)> {
        let prefix = format!("{}:", self.env.family_key());
        let keys = self.ledger.keys();

        let mut pairs = Vec::with_capacity(keys.len());
        for key in keys {
            if let Some(token) = key.strip_prefix(&prefix) {
                let token = token.to_string();
                if let Some(record) = self.ledger.get(&key) {
                    pairs.push((token, record.success_count));
                }
            }
        }
        pairs
    }

    fn key_for(&self, token: &str) -> String {
        format!("{}:{}", self.env.family_key(), token)
    }
}

/// Lowercased leading token of a command line
fn leading_token(command_line: &str) -> Option<String> {
    command_line
        .split_whitespace()
        .next()
        .map(|t| t.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{OsFamily, ShellKind};

    fn tracker() -> CommandOutcomeTracker {
        CommandOutcomeTracker::new(EnvironmentDescriptor::new(
            OsFamily::Linux,
            ShellKind::Posix,
        ))
    }

    #[test]
    fn test_single_success_is_not_a_pattern() {
        let mut t = tracker();
        t.record_success("git status");

        assert!(t.top_successful(3).is_empty());
    }

    #[test]
    fn test_repeated_success_appears_in_top() {
        let mut t = tracker();
        t.record_success("git status");
        t.record_success("git log --oneline");

        assert_eq!(t.top_successful(3), vec!["git".to_string()]);
    }

    #[test]
    fn test_top_sorted_by_count_descending() {
        let mut t = tracker();
        for _ in 0..4 {
            t.record_success("cargo build");
        }
        for _ in 0..2 {
            t.record_success("git status");
        }

        assert_eq!(
            t.top_successful(5),
            vec!["cargo".to_string(), "git".to_string()]
        );
    }

    #[test]
    fn test_top_respects_limit() {
        let mut t = tracker();
        for cmd in ["git a", "git b", "cargo a", "cargo b", "make a", "make b"] {
            t.record_success(cmd);
        }

        assert_eq!(t.top_successful(2).len(), 2);
    }

    #[test]
    fn test_empty_command_is_a_noop() {
        let mut t = tracker();
        t.record_success("");
        t.record_success("   ");

        assert_eq!(t.stats().total, 0);
    }

    #[test]
    fn test_token_lowercased_for_keying() {
        let mut t = tracker();
        t.record_success("Git status");
        t.record_success("git log");

        assert_eq!(t.top_successful(1), vec!["git".to_string()]);
    }

    #[test]
    fn test_stats_formatting() {
        let mut t = tracker();
        for _ in 0..3 {
            t.record_success("dir");
        }
        t.record_success("git status");

        let stats = t.stats();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.environment, "unix");
        // Single occurrences are included in stats, only top_successful filters
        assert_eq!(
            stats.top,
            vec!["dir (3x)".to_string(), "git (1x)".to_string()]
        );
    }

    #[test]
    fn test_capacity_eviction_drops_oldest_command() {
        let env = EnvironmentDescriptor::new(OsFamily::Linux, ShellKind::Posix);
        let mut t =
            CommandOutcomeTracker::with_limits(env, 2, Duration::from_secs(3600));
        t.record_success("first");
        t.record_success("second");
        t.record_success("third");

        let stats = t.stats();
        assert_eq!(stats.total, 2);
        assert!(!stats.top.iter().any(|s| s.starts_with("first ")));
    }
}
