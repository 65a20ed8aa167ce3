//! Task classification: coarse category + keyword extraction
//!
//! Heuristic keyword matcher, not NLP. Category groups are evaluated in a
//! fixed order and the first match wins; this order is part of the contract
//! and must not be reshuffled.

use serde::{Deserialize, Serialize};

/// Maximum number of keywords carried in a task context
const MAX_KEYWORDS: usize = 10;

/// Minimum token length kept during keyword extraction
const MIN_TOKEN_LEN: usize = 3;

/// Five-way task classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskCategory {
    FileOperation,
    WebRequest,
    DataProcessing,
    Automation,
    Other,
}

impl TaskCategory {
    /// Stable label for display and keying
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskCategory::FileOperation => "file_operation",
            TaskCategory::WebRequest => "web_request",
            TaskCategory::DataProcessing => "data_processing",
            TaskCategory::Automation => "automation",
            TaskCategory::Other => "other",
        }
    }
}

/// Ephemeral task context, computed per request and never stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskContext {
    pub category: TaskCategory,
    /// First-seen order, no duplicates, capped at 10
    pub keywords: Vec<String>,
}

/// Category trigger groups, evaluated in this order
const CATEGORY_TRIGGERS: &[(TaskCategory, &[&str])] = &[
    (
        TaskCategory::FileOperation,
        &["file", "read", "write", "directory", "folder"],
    ),
    (
        TaskCategory::WebRequest,
        &["api", "request", "fetch", "http", "curl", "download"],
    ),
    (
        TaskCategory::DataProcessing,
        &["data", "parse", "convert", "json", "csv", "xml"],
    ),
    (
        TaskCategory::Automation,
        &["automate", "script", "batch", "workflow", "schedule"],
    ),
];

/// Classify a free-text task description.
///
/// Empty or whitespace-only input yields `Other` with no keywords rather
/// than an error.
pub fn classify_task(text: &str) -> TaskContext {
    let lowered = text.to_lowercase();

    let mut category = TaskCategory::Other;
    let mut priority_words: Vec<&str> = Vec::new();

    for (candidate, triggers) in CATEGORY_TRIGGERS {
        let matched: Vec<&str> = triggers
            .iter()
            .filter(|t| lowered.contains(**t))
            .copied()
            .collect();
        if !matched.is_empty() {
            category = *candidate;
            priority_words = matched;
            break;
        }
    }

    let mut keywords: Vec<String> = Vec::with_capacity(MAX_KEYWORDS);
    for word in priority_words
        .into_iter()
        .map(str::to_string)
        .chain(extract_keywords(&lowered))
    {
        if keywords.len() >= MAX_KEYWORDS {
            break;
        }
        if !keywords.contains(&word) {
            keywords.push(word);
        }
    }

    TaskContext { category, keywords }
}

/// Extract candidate keywords from lowercased text
fn extract_keywords(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace()
        .filter(|word| word.len() > MIN_TOKEN_LEN)
        .filter(|word| !is_stopword(word))
        .map(|s| s.to_string())
}

/// Check if word is a stopword
fn is_stopword(word: &str) -> bool {
    matches!(
        word,
        "this" | "that" | "these" | "those" | "with" | "from" | "have" | "been" | "were"
            | "will" | "would" | "should" | "could" | "please" | "into" | "then" | "than"
            | "when" | "what" | "your" | "some" | "using"
    )
}
