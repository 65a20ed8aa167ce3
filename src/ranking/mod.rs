//! Relevance Ranker: deterministic tool shortlisting
//!
//! Scores candidate tools against a task context and usage history with an
//! additive heuristic, then splits them into a scored shortlist and a
//! name-only residual so the host can attach full schemas selectively.

use chrono::{Duration as ChronoDuration, Utc};
use serde::{Deserialize, Serialize};

use crate::classify::TaskContext;
use crate::tracking::ToolUsageTracker;

/// Score above which a caller should attach the full input schema
pub const SCHEMA_SCORE_THRESHOLD: f64 = 5.0;

/// Default shortlist size
const DEFAULT_LIMIT: usize = 5;

/// Points per context keyword found in the tool's name + description
const KEYWORD_WEIGHT: f64 = 2.0;

/// Multiplier on the historical success rate
const SUCCESS_RATE_WEIGHT: f64 = 3.0;

/// Flat bonus when the tool has succeeded in the current task category
const CATEGORY_BONUS: f64 = 4.0;

/// Flat bonus when the tool was used within the recency window
const RECENCY_BONUS: f64 = 1.0;

/// Recency window in days
const RECENCY_WINDOW_DAYS: i64 = 7;

/// Read-only snapshot of a tool offered by the host registry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDescriptor {
    /// Provider the tool belongs to
    pub provider: String,
    /// Tool name within the provider
    pub name: String,
    /// Human description used for keyword matching
    pub description: String,
    /// Input schema (JSON Schema), attached selectively by the caller
    pub input_schema: Option<serde_json::Value>,
    /// Whether the tool is enabled for suggestion
    pub enabled: bool,
    /// Whether the provider is currently connected
    pub connected: bool,
}

/// A shortlisted tool with its relevance score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedTool {
    pub provider: String,
    pub tool: String,
    pub score: f64,
}

impl RankedTool {
    /// Whether the caller should attach the full input schema
    pub fn attach_schema(&self) -> bool {
        self.score > SCHEMA_SCORE_THRESHOLD
    }
}

/// Result of a ranking pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shortlist {
    /// Scored shortlist, best first
    pub selected: Vec<RankedTool>,
    /// Names of enabled, connected tools that did not make the shortlist
    pub other: Vec<String>,
}

/// Scores candidate tools against a task context and usage history
#[derive(Debug, Clone)]
pub struct RelevanceRanker {
    default_limit: usize,
}

impl RelevanceRanker {
    /// Create a ranker with the default shortlist size
    pub fn new() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
        }
    }

    /// Set the default shortlist size
    pub fn with_default_limit(mut self, limit: usize) -> Self {
        self.default_limit = limit;
        self
    }

    /// Default shortlist size used when the caller passes no limit
    pub fn default_limit(&self) -> usize {
        self.default_limit
    }

    /// Rank candidate tools for a task.
    ///
    /// Candidates are enabled tools of connected providers. Zero-score
    /// candidates are excluded entirely; the sort is stable so ties keep
    /// their enumeration order. Every candidate not selected is surfaced
    /// by name in the residual list.
    pub fn rank(
        &self,
        tools: &[ToolDescriptor],
        context: &TaskContext,
        usage: &mut ToolUsageTracker,
        limit: usize,
    ) -> Shortlist {
        let mut scored: Vec<RankedTool> = Vec::new();
        let mut candidates: Vec<&ToolDescriptor> = Vec::new();

        for tool in tools {
            if !tool.enabled || !tool.connected {
                continue;
            }
            candidates.push(tool);

            let score = self.score(tool, context, usage);
            if score > 0.0 {
                scored.push(RankedTool {
                    provider: tool.provider.clone(),
                    tool: tool.name.clone(),
                    score,
                });
            }
        }

        // Stable: ties keep enumeration order
        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored.truncate(limit);

        let other = candidates
            .iter()
            .filter(|t| {
                !scored
                    .iter()
                    .any(|s| s.provider == t.provider && s.tool == t.name)
            })
            .map(|t| t.name.clone())
            .collect();

        Shortlist {
            selected: scored,
            other,
        }
    }

    /// Additive relevance score for one candidate
    fn score(
        &self,
        tool: &ToolDescriptor,
        context: &TaskContext,
        usage: &mut ToolUsageTracker,
    ) -> f64 {
        let haystack = format!("{} {}", tool.name, tool.description).to_lowercase();

        let mut score = 0.0;
        for keyword in &context.keywords {
            if haystack.contains(keyword.as_str()) {
                score += KEYWORD_WEIGHT;
            }
        }

        if let Some(record) = usage.get(&tool.provider, &tool.name) {
            score += SUCCESS_RATE_WEIGHT * record.success_rate();
            if record.observed_categories.contains(&context.category) {
                score += CATEGORY_BONUS;
            }
            let recency_cutoff = Utc::now() - ChronoDuration::days(RECENCY_WINDOW_DAYS);
            if record.last_used_at > recency_cutoff {
                score += RECENCY_BONUS;
            }
        }

        score
    }
}

impl Default for RelevanceRanker {
    fn default() -> Self {
        Self::new()
    }
}
