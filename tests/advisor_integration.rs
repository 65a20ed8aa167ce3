//! Integration tests for the toolscout suggestion engine
//!
//! Exercises the full advisor flow through the public API: environment
//! compatibility, command learning, task classification and tool ranking.

use std::time::Duration;

use toolscout::{
    Config, EnvironmentDescriptor, OsFamily, ShellKind, ToolDescriptor, UsageAdvisor,
};

fn windows_advisor() -> UsageAdvisor {
    UsageAdvisor::new(
        EnvironmentDescriptor::new(OsFamily::Windows, ShellKind::Cmd),
        &Config::default(),
    )
}

fn linux_advisor() -> UsageAdvisor {
    UsageAdvisor::new(
        EnvironmentDescriptor::new(OsFamily::Linux, ShellKind::Posix),
        &Config::default(),
    )
}

fn descriptor(provider: &str, name: &str, description: &str) -> ToolDescriptor {
    ToolDescriptor {
        provider: provider.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        input_schema: Some(serde_json::json!({"type": "object"})),
        enabled: true,
        connected: true,
    }
}

#[test]
fn test_windows_command_learning_end_to_end() {
    let mut advisor = windows_advisor();

    // "dir" executes and succeeds three times
    for _ in 0..3 {
        advisor.record_command_success("dir");
    }

    assert_eq!(advisor.top_successful_commands(1), vec!["dir".to_string()]);

    // Learned state never bleeds into the static compatibility table
    let verdict = advisor.classify_compatibility("ls");
    assert!(!verdict.compatible);
    assert_eq!(verdict.suggestion.as_deref(), Some("dir"));
}

#[test]
fn test_compatibility_is_environment_sensitive() {
    let windows = windows_advisor();
    let linux = linux_advisor();

    assert!(!windows.classify_compatibility("ls -la").compatible);
    assert!(linux.classify_compatibility("ls -la").compatible);
    assert!(!linux.classify_compatibility("tasklist").compatible);
}

#[test]
fn test_single_command_success_is_not_reported() {
    let mut advisor = linux_advisor();
    advisor.record_command_success("git status");

    assert!(advisor.top_successful_commands(3).is_empty());

    advisor.record_command_success("git log");
    assert!(advisor
        .top_successful_commands(3)
        .contains(&"git".to_string()));
}

#[test]
fn test_command_stats_report_environment() {
    let mut advisor = windows_advisor();
    advisor.record_command_success("dir");
    advisor.record_command_success("dir");

    let stats = advisor.command_stats();
    assert_eq!(stats.environment, "windows");
    assert_eq!(stats.total, 1);
    assert_eq!(stats.top, vec!["dir (2x)".to_string()]);
}

#[test]
fn test_tool_ranking_prefers_history_in_category() {
    let mut advisor = linux_advisor();
    let tools = vec![
        descriptor("fs", "read_file", "Read contents of a file"),
        descriptor("fs", "write_file", "Write content to a file"),
        descriptor("web", "fetch_url", "Fetch content from a URL"),
    ];

    let context = advisor.classify_task("read the build config file");
    advisor.record_tool_success(
        "fs",
        "read_file",
        &context,
        Some(Duration::from_millis(12)),
    );

    let shortlist = advisor.rank_tools(&tools, &context, 5);

    assert_eq!(shortlist.selected[0].tool, "read_file");
    assert!(shortlist.selected[0].attach_schema());
    // Everything returned is strictly positive and descending
    for pair in shortlist.selected.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    for ranked in &shortlist.selected {
        assert!(ranked.score > 0.0);
    }
}

#[test]
fn test_unranked_tools_surface_in_residual() {
    let mut advisor = linux_advisor();
    let tools = vec![
        descriptor("fs", "read_file", "Read contents of a file"),
        descriptor("db", "run_query", "Execute a SQL statement"),
    ];

    let context = advisor.classify_task("read the changelog file");
    let shortlist = advisor.rank_tools(&tools, &context, 5);

    assert_eq!(shortlist.selected.len(), 1);
    assert_eq!(shortlist.other, vec!["run_query".to_string()]);
}

#[test]
fn test_tool_stats_idempotent() {
    let mut advisor = linux_advisor();
    let context = advisor.classify_task("parse the metrics csv");
    advisor.record_tool_success("data", "parse_csv", &context, None);
    advisor.record_tool_failure("data", "parse_xml");

    let first = advisor.tool_stats();
    let second = advisor.tool_stats();

    assert_eq!(first, second);
    assert_eq!(first.total, 2);
    assert_eq!(first.active, 1);
}

#[test]
fn test_advisors_are_isolated_instances() {
    let mut a = linux_advisor();
    let mut b = linux_advisor();

    a.record_command_success("cargo build");
    a.record_command_success("cargo test");

    assert_eq!(a.top_successful_commands(1), vec!["cargo".to_string()]);
    assert!(b.top_successful_commands(1).is_empty());
}

#[test]
fn test_malformed_input_degrades_to_defaults() {
    let mut advisor = linux_advisor();

    let verdict = advisor.classify_compatibility("   ");
    assert!(verdict.compatible);

    let context = advisor.classify_task("");
    assert_eq!(context.category, toolscout::TaskCategory::Other);
    assert!(context.keywords.is_empty());

    // Recording nothing is a no-op, not an error
    advisor.record_command_success("");
    assert_eq!(advisor.command_stats().total, 0);
}

#[test]
fn test_telemetry_tracks_the_whole_flow() {
    let mut advisor = windows_advisor();

    advisor.classify_compatibility("ls");
    advisor.record_command_success("dir");
    let context = advisor.classify_task("read a file");
    advisor.record_tool_success("fs", "read_file", &context, None);
    advisor.rank_tools(
        &[descriptor("fs", "read_file", "Read contents of a file")],
        &context,
        5,
    );

    let stats = advisor.telemetry().get_stats();
    assert_eq!(stats.incompatible_commands, 1);
    assert_eq!(stats.commands_recorded, 1);
    assert_eq!(stats.tasks_classified, 1);
    assert_eq!(stats.tool_successes, 1);
    assert_eq!(stats.shortlists_built, 1);
}
