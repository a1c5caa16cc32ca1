//! Global setup utilities for CLI initialization
//!
//! Provides setup routines for:
//! - Early flag parsing (`--debug`) before the command table exists
//! - Logging initialization with tracing

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Configuration for CLI setup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetupConfig {
    /// Whether `--debug` was given before the command name
    pub debug: bool,
}

/// Scan the global options ahead of full argument parsing.
///
/// Logging has to be configured before plugins register, which in turn has
/// to happen before the full parser can be built. Only tokens before the
/// command name are considered, so `--debug` after the command is left to
/// the command itself.
pub fn parse_early_flags(args: &[String]) -> SetupConfig {
    let mut config = SetupConfig::default();
    let mut tokens = args.iter().skip(1);
    while let Some(token) = tokens.next() {
        match token.as_str() {
            "--debug" => config.debug = true,
            "--profile" => {
                tokens.next();
            }
            flag if flag.starts_with('-') => {}
            _ => break,
        }
    }
    config
}

/// Default filter directive: `debug` with `--debug`, else the settings
/// value, else `warn`.
pub fn default_directive<'a>(config: &SetupConfig, settings_level: Option<&'a str>) -> &'a str {
    if config.debug {
        "debug"
    } else {
        settings_level.unwrap_or("warn")
    }
}

/// Initialize tracing subscriber for logging
///
/// `RUST_LOG` takes precedence over `directive`. Output goes to stderr so it
/// never mixes with command output.
pub fn init_tracing(directive: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directive))
        .map_err(|e| anyhow!("Invalid log filter '{directive}': {e}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize tracing subscriber: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tokens: &[&str]) -> Vec<String> {
        std::iter::once("cmdhost")
            .chain(tokens.iter().copied())
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn test_parse_early_flags_debug_before_command() {
        assert!(parse_early_flags(&args(&["--debug", "config", "foo"])).debug);
        assert!(parse_early_flags(&args(&["--profile", "dev", "--debug", "config"])).debug);
    }

    #[test]
    fn test_parse_early_flags_ignores_tokens_after_command() {
        assert!(!parse_early_flags(&args(&["config", "foo", "--debug"])).debug);
        assert!(!parse_early_flags(&args(&[])).debug);
    }

    #[test]
    fn test_parse_early_flags_profile_value_is_not_command() {
        let config = parse_early_flags(&args(&["--profile", "config", "--debug"]));
        assert!(config.debug);
    }

    #[test]
    fn test_default_directive() {
        let debug = SetupConfig { debug: true };
        let quiet = SetupConfig::default();
        assert_eq!(default_directive(&debug, Some("info")), "debug");
        assert_eq!(default_directive(&quiet, Some("info")), "info");
        assert_eq!(default_directive(&quiet, None), "warn");
    }
}
