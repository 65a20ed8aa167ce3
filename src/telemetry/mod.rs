//! Telemetry for the suggestion pipeline
//!
//! Collects events from classification, tracking and ranking. Recording is
//! fire-and-forget: it never fails and never blocks the primary operation.

use std::sync::{Arc, Mutex};
use std::time::Instant;

use crate::classify::TaskCategory;

/// Telemetry event types
#[derive(Debug, Clone)]
pub enum TelemetryEvent {
    /// A task description was classified
    TaskClassified {
        category: TaskCategory,
        keyword_count: usize,
        timestamp: Instant,
    },
    /// A command success was recorded into the ledger
    CommandRecorded {
        token: String,
        timestamp: Instant,
    },
    /// A command was flagged as incompatible with the environment
    IncompatibleCommand {
        token: String,
        suggestion: Option<String>,
        timestamp: Instant,
    },
    /// A tool outcome was recorded
    ToolOutcome {
        provider: String,
        tool: String,
        success: bool,
        timestamp: Instant,
    },
    /// A ranking pass produced a shortlist
    ShortlistBuilt {
        candidates: usize,
        selected: usize,
        timestamp: Instant,
    },
}

/// Telemetry statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TelemetryStats {
    pub tasks_classified: usize,
    pub commands_recorded: usize,
    pub incompatible_commands: usize,
    pub tool_successes: usize,
    pub tool_failures: usize,
    pub shortlists_built: usize,
}

/// Telemetry collector
#[derive(Clone)]
pub struct TelemetryCollector {
    events: Arc<Mutex<Vec<TelemetryEvent>>>,
    stats: Arc<Mutex<TelemetryStats>>,
    start_time: Instant,
}

impl TelemetryCollector {
    /// Create a new telemetry collector
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            stats: Arc::new(Mutex::new(TelemetryStats::default())),
            start_time: Instant::now(),
        }
    }

    /// Record an event
    pub fn record(&self, event: TelemetryEvent) {
        {
            let mut stats = self.stats.lock().unwrap();
            match &event {
                TelemetryEvent::TaskClassified { .. } => {
                    stats.tasks_classified += 1;
                }
                TelemetryEvent::CommandRecorded { .. } => {
                    stats.commands_recorded += 1;
                }
                TelemetryEvent::IncompatibleCommand { .. } => {
                    stats.incompatible_commands += 1;
                }
                TelemetryEvent::ToolOutcome { success, .. } => {
                    if *success {
                        stats.tool_successes += 1;
                    } else {
                        stats.tool_failures += 1;
                    }
                }
                TelemetryEvent::ShortlistBuilt { .. } => {
                    stats.shortlists_built += 1;
                }
            }
        }

        let mut events = self.events.lock().unwrap();
        events.push(event);
    }

    /// Get current statistics
    pub fn get_stats(&self) -> TelemetryStats {
        self.stats.lock().unwrap().clone()
    }

    /// Get elapsed time since start
    pub fn elapsed(&self) -> std::time::Duration {
        self.start_time.elapsed()
    }

    /// Get event count
    pub fn event_count(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    /// Get recent events (last n)
    pub fn recent_events(&self, n: usize) -> Vec<TelemetryEvent> {
        let events = self.events.lock().unwrap();
        let start = events.len().saturating_sub(n);
        events[start..].to_vec()
    }
}

impl Default for TelemetryCollector {
    fn default() -> Self {
        Self::new()
    }
}
