//! Platform detection and command compatibility
//!
//! Maps a raw command line plus the current environment to a compatibility
//! verdict with a suggested substitute. The equivalence table is closed and
//! static, not learned.

use serde::{Deserialize, Serialize};

/// Coarse operating-system family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OsFamily {
    Windows,
    Mac,
    Linux,
}

impl OsFamily {
    /// Detect the family of the running process
    pub fn detect() -> Self {
        match std::env::consts::OS {
            "windows" => OsFamily::Windows,
            "macos" => OsFamily::Mac,
            _ => OsFamily::Linux,
        }
    }

    /// Whether this family uses the Windows command set
    pub fn is_windows(&self) -> bool {
        matches!(self, OsFamily::Windows)
    }

    /// Partition key for command learning: windows vs posix-like
    pub fn family_key(&self) -> &'static str {
        if self.is_windows() {
            "windows"
        } else {
            "unix"
        }
    }
}

/// Shell flavor of the host terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShellKind {
    Posix,
    Cmd,
    PowerShell,
}

impl ShellKind {
    /// Detect the shell kind from the environment
    pub fn detect(os: OsFamily) -> Self {
        if os.is_windows() {
            // PSModulePath is set inside PowerShell sessions
            if std::env::var_os("PSModulePath").is_some() {
                ShellKind::PowerShell
            } else {
                ShellKind::Cmd
            }
        } else {
            ShellKind::Posix
        }
    }
}

/// Immutable description of the host environment, derived once per process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentDescriptor {
    pub os: OsFamily,
    pub shell: ShellKind,
}

impl EnvironmentDescriptor {
    /// Build a descriptor for an explicit OS/shell pair
    pub fn new(os: OsFamily, shell: ShellKind) -> Self {
        Self { os, shell }
    }

    /// Detect the environment of the running process
    pub fn detect() -> Self {
        let os = OsFamily::detect();
        let shell = ShellKind::detect(os);
        Self { os, shell }
    }

    /// Partition key for command learning
    pub fn family_key(&self) -> &'static str {
        self.os.family_key()
    }
}

/// Verdict for a command against the current environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityVerdict {
    /// Whether the command is expected to run as written
    pub compatible: bool,
    /// Substitute to suggest when it is not
    pub suggestion: Option<String>,
}

impl CompatibilityVerdict {
    fn ok() -> Self {
        Self {
            compatible: true,
            suggestion: None,
        }
    }

    fn incompatible(suggestion: String) -> Self {
        Self {
            compatible: false,
            suggestion: Some(suggestion),
        }
    }
}

/// Unix command -> Windows equivalent, bidirectional
const EQUIVALENTS: &[(&str, &str)] = &[
    ("ls", "dir"),
    ("cat", "type"),
    ("cp", "copy"),
    ("mv", "move"),
    ("rm", "del"),
    ("grep", "findstr"),
    ("ps", "tasklist"),
    ("kill", "taskkill"),
    ("clear", "cls"),
    ("which", "where"),
];

/// Unix-only commands with no one-word Windows equivalent
const UNIX_ONLY: &[&str] = &["chmod", "chown", "ln", "df", "du", "touch", "sudo"];

/// Windows-only commands with no one-word Unix equivalent
const WINDOWS_ONLY: &[&str] = &["ipconfig", "wmic", "reg", "sfc"];

/// Classify a raw command line against an environment.
///
/// Pure function: extracts the leading token, lowercases it and checks it
/// against the other family's command set. Empty input and unknown tokens
/// are compatible; there is no error path.
pub fn classify_compatibility(
    command: &str,
    env: &EnvironmentDescriptor,
) -> CompatibilityVerdict {
    let token = match command.split_whitespace().next() {
        Some(t) => t.to_lowercase(),
        None => return CompatibilityVerdict::ok(),
    };

    if env.os.is_windows() {
        if let Some((_, win)) = EQUIVALENTS.iter().find(|(unix, _)| *unix == token) {
            return CompatibilityVerdict::incompatible((*win).to_string());
        }
        if UNIX_ONLY.contains(&token.as_str()) {
            return CompatibilityVerdict::incompatible(format!("equivalent for {token}"));
        }
    } else {
        if let Some((unix, _)) = EQUIVALENTS.iter().find(|(_, win)| *win == token) {
            return CompatibilityVerdict::incompatible((*unix).to_string());
        }
        if WINDOWS_ONLY.contains(&token.as_str()) {
            return CompatibilityVerdict::incompatible(format!("equivalent for {token}"));
        }
    }

    CompatibilityVerdict::ok()
}
