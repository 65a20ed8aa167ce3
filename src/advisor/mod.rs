//! Usage Advisor: the public face of the suggestion engine
//!
//! Owns the environment descriptor, both usage trackers, the relevance
//! ranker and the telemetry collector. Each ledger is an owned instance,
//! so hosts can run independent advisors (e.g. one per session) and tests
//! stay isolated. Recording operations are fire-and-forget: they never
//! fail and never block the command or tool invocation they describe.

use std::time::{Duration, Instant};

use crate::classify::{classify_task, TaskContext};
use crate::config::Config;
use crate::platform::{classify_compatibility, CompatibilityVerdict, EnvironmentDescriptor};
use crate::ranking::{RelevanceRanker, Shortlist, ToolDescriptor};
use crate::telemetry::{TelemetryCollector, TelemetryEvent};
use crate::tracking::{CommandOutcomeTracker, CommandStats, ToolUsageStats, ToolUsageTracker};

/// Suggestion engine facade
pub struct UsageAdvisor {
    env: EnvironmentDescriptor,
    commands: CommandOutcomeTracker,
    tools: ToolUsageTracker,
    ranker: RelevanceRanker,
    telemetry: TelemetryCollector,
}

impl UsageAdvisor {
    /// Create an advisor for an explicit environment and configuration
    pub fn new(env: EnvironmentDescriptor, config: &Config) -> Self {
        Self {
            env,
            commands: CommandOutcomeTracker::with_limits(
                env,
                config.ledger.command_capacity,
                config.ledger.command_ttl(),
            ),
            tools: ToolUsageTracker::with_limits(
                config.ledger.tool_capacity,
                config.ledger.tool_ttl(),
            ),
            ranker: RelevanceRanker::new().with_default_limit(config.ranking.shortlist_limit),
            telemetry: TelemetryCollector::new(),
        }
    }

    /// Create an advisor for the detected environment with default tunables
    pub fn with_defaults() -> Self {
        Self::new(EnvironmentDescriptor::detect(), &Config::default())
    }

    /// The environment this advisor partitions its learning by
    pub fn environment(&self) -> &EnvironmentDescriptor {
        &self.env
    }

    /// Telemetry handle for the host's observability surface
    pub fn telemetry(&self) -> &TelemetryCollector {
        &self.telemetry
    }

    // --- Platform / command operations ---

    /// Check a command against the current environment
    pub fn classify_compatibility(&self, command: &str) -> CompatibilityVerdict {
        let verdict = classify_compatibility(command, &self.env);
        if !verdict.compatible {
            if let Some(token) = command.split_whitespace().next() {
                self.telemetry.record(TelemetryEvent::IncompatibleCommand {
                    token: token.to_lowercase(),
                    suggestion: verdict.suggestion.clone(),
                    timestamp: Instant::now(),
                });
            }
        }
        verdict
    }

    /// Record a successful command execution
    pub fn record_command_success(&mut self, command: &str) {
        self.commands.record_success(command);
        if let Some(token) = command.split_whitespace().next() {
            self.telemetry.record(TelemetryEvent::CommandRecorded {
                token: token.to_lowercase(),
                timestamp: Instant::now(),
            });
        }
    }

    /// Proven commands for the current environment, best first
    pub fn top_successful_commands(&mut self, limit: usize) -> Vec<String> {
        self.commands.top_successful(limit)
    }

    /// Command usage snapshot
    pub fn command_stats(&mut self) -> CommandStats {
        self.commands.stats()
    }

    // --- Task / tool operations ---

    /// Classify a task description into a category + keyword context
    pub fn classify_task(&self, text: &str) -> TaskContext {
        let context = classify_task(text);
        self.telemetry.record(TelemetryEvent::TaskClassified {
            category: context.category,
            keyword_count: context.keywords.len(),
            timestamp: Instant::now(),
        });
        context
    }

    /// Record a successful tool invocation
    pub fn record_tool_success(
        &mut self,
        provider: &str,
        tool: &str,
        context: &TaskContext,
        latency: Option<Duration>,
    ) {
        self.tools.record_success(provider, tool, context, latency);
        self.telemetry.record(TelemetryEvent::ToolOutcome {
            provider: provider.to_string(),
            tool: tool.to_string(),
            success: true,
            timestamp: Instant::now(),
        });
    }

    /// Record a failed tool invocation
    pub fn record_tool_failure(&mut self, provider: &str, tool: &str) {
        self.tools.record_failure(provider, tool);
        self.telemetry.record(TelemetryEvent::ToolOutcome {
            provider: provider.to_string(),
            tool: tool.to_string(),
            success: false,
            timestamp: Instant::now(),
        });
    }

    /// Rank candidate tools for a task context
    pub fn rank_tools(
        &mut self,
        tools: &[ToolDescriptor],
        context: &TaskContext,
        limit: usize,
    ) -> Shortlist {
        let shortlist = self.ranker.rank(tools, context, &mut self.tools, limit);
        self.telemetry.record(TelemetryEvent::ShortlistBuilt {
            candidates: tools.len(),
            selected: shortlist.selected.len(),
            timestamp: Instant::now(),
        });
        shortlist
    }

    /// Rank with the configured default shortlist size
    pub fn rank_tools_default(
        &mut self,
        tools: &[ToolDescriptor],
        context: &TaskContext,
    ) -> Shortlist {
        self.rank_tools(tools, context, self.ranker.default_limit())
    }

    /// Tool usage snapshot
    pub fn tool_stats(&mut self) -> ToolUsageStats {
        self.tools.stats()
    }
}
