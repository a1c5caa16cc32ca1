//! Framework context shared with plugins and commands

/// Host context handed to every plugin at registration time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    program_name: String,
    version: String,
}

impl Session {
    /// Create a new session
    pub fn new(program_name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            program_name: program_name.into(),
            version: version.into(),
        }
    }

    /// Binary name used in usage lines, e.g. `cmdhost`
    pub fn program_name(&self) -> &str {
        &self.program_name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Usage-line name for one of this host's commands, e.g. `cmdhost config`
    pub fn command_bin_name(&self, command: &str) -> String {
        format!("{} {command}", self.program_name)
    }
}

/// Host-level options parsed before the command name.
///
/// Passed through to every command untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalArgs {
    /// `--debug`
    pub debug: bool,
    /// `--profile <NAME>`
    pub profile: Option<String>,
}
