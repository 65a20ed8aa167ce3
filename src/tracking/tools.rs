//! Tool Usage Tracker: per-(provider, tool) outcome records
//!
//! Records successes, failures, timing and the task categories a tool has
//! been seen working in. Counters are monotonically non-decreasing within
//! a record's lifetime; the record itself expires with its ledger entry.

use std::collections::HashSet;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::classify::{TaskCategory, TaskContext};
use crate::ledger::BoundedTtlLedger;

/// Maximum number of tracked (provider, tool) pairs
const TOOL_CAPACITY: usize = 200;

/// Retention window for a tool usage record
const TOOL_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Composite ledger key for a tool
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ToolKey {
    pub provider: String,
    pub tool: String,
}

impl ToolKey {
    pub fn new(provider: impl Into<String>, tool: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            tool: tool.into(),
        }
    }
}

/// Usage record for a single (provider, tool) pair
#[derive(Debug, Clone)]
pub struct ToolUsageRecord {
    /// Successful invocations
    pub success_count: u32,
    /// Failed invocations
    pub failure_count: u32,
    /// Last time the tool succeeded (creation time until then)
    pub last_used_at: DateTime<Utc>,
    /// Two-point running mean of observed latency
    pub average_latency: Option<Duration>,
    /// Task categories this tool has succeeded in
    pub observed_categories: HashSet<TaskCategory>,
}

impl ToolUsageRecord {
    fn new() -> Self {
        Self {
            success_count: 0,
            failure_count: 0,
            last_used_at: Utc::now(),
            average_latency: None,
            observed_categories: HashSet::new(),
        }
    }

    /// Success rate over all observations; 0.0 when nothing was observed
    pub fn success_rate(&self) -> f64 {
        let total = self.success_count + self.failure_count;
        if total == 0 {
            0.0
        } else {
            self.success_count as f64 / total as f64
        }
    }
}

/// Per-tool summary row for stats output
#[derive(Debug, Clone, PartialEq)]
pub struct ToolUsageSummary {
    pub provider: String,
    pub tool: String,
    pub success_rate: f64,
    pub total_calls: u32,
}

/// Snapshot of tracked tool usage
#[derive(Debug, Clone, PartialEq)]
pub struct ToolUsageStats {
    /// Tracked (provider, tool) pairs
    pub total: usize,
    /// Pairs with at least one success
    pub active: usize,
    /// Top pairs by success rate, best first, at most 10
    pub top: Vec<ToolUsageSummary>,
}

/// Tracks per-tool outcomes over the bounded TTL ledger
#[derive(Debug)]
pub struct ToolUsageTracker {
    ledger: BoundedTtlLedger<ToolKey, ToolUsageRecord>,
}

impl ToolUsageTracker {
    /// Create a tracker with the default capacity and retention window
    pub fn new() -> Self {
        Self::with_limits(TOOL_CAPACITY, TOOL_TTL)
    }

    /// Create a tracker with explicit limits
    pub fn with_limits(capacity: usize, ttl: Duration) -> Self {
        Self {
            ledger: BoundedTtlLedger::new(capacity, ttl),
        }
    }

    /// Record a successful tool invocation.
    ///
    /// Updates the success count, last-used time, the two-point latency
    /// mean when a latency is supplied, and the observed category set.
    pub fn record_success(
        &mut self,
        provider: &str,
        tool: &str,
        context: &TaskContext,
        latency: Option<Duration>,
    ) {
        let record = self.fetch_or_create(provider, tool);

        record.success_count = record.success_count.saturating_add(1);
        record.last_used_at = Utc::now();
        if let Some(sample) = latency {
            record.average_latency = Some(match record.average_latency {
                Some(old) => (old + sample) / 2,
                None => sample,
            });
        }
        record.observed_categories.insert(context.category);
    }

    /// Record a failed tool invocation; only the failure count moves
    pub fn record_failure(&mut self, provider: &str, tool: &str) {
        let record = self.fetch_or_create(provider, tool);
        record.failure_count = record.failure_count.saturating_add(1);
    }

    /// Read access for the relevance ranker
    pub fn get(&mut self, provider: &str, tool: &str) -> Option<&ToolUsageRecord> {
        let key = ToolKey::new(provider, tool);
        self.ledger.get(&key)
    }

    /// Usage snapshot: totals plus the top 10 pairs by success rate
    pub fn stats(&mut self) -> ToolUsageStats {
        let keys = self.ledger.keys();

        let mut rows = Vec::with_capacity(keys.len());
        let mut active = 0;
        for key in keys {
            if let Some(record) = self.ledger.get(&key) {
                if record.success_count > 0 {
                    active += 1;
                }
                rows.push(ToolUsageSummary {
                    provider: key.provider.clone(),
                    tool: key.tool.clone(),
                    success_rate: record.success_rate(),
                    total_calls: record.success_count + record.failure_count,
                });
            }
        }

        let total = rows.len();
        rows.sort_by(|a, b| {
            b.success_rate
                .partial_cmp(&a.success_rate)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        rows.truncate(10);

        ToolUsageStats {
            total,
            active,
            top: rows,
        }
    }

    fn fetch_or_create(&mut self, provider: &str, tool: &str) -> &mut ToolUsageRecord {
        let key = ToolKey::new(provider, tool);
        if self.ledger.get(&key).is_none() {
            self.ledger.set(key.clone(), ToolUsageRecord::new());
        }
        self.ledger
            .get_mut(&key)
            .expect("record was just inserted")
    }

    /// Test hook: mutable record access for backdating timestamps
    #[cfg(test)]
    pub(crate) fn record_mut(
        &mut self,
        provider: &str,
        tool: &str,
    ) -> Option<&mut ToolUsageRecord> {
        let key = ToolKey::new(provider, tool);
        self.ledger.get_mut(&key)
    }
}

impl Default for ToolUsageTracker {
    fn default() -> Self {
        Self::new()
    }
}
