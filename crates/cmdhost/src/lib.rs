//! cmdhost - command-line host whose commands come from plugins
//!
//! Startup order: settings, logging, plugin registration, then dispatch.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod extensions;
pub mod settings;

use std::io::Write;

use anyhow::Result;
use cmdhost_core::Session;

pub use settings::Settings;

/// Binary name used in usage lines
pub const PROGRAM_NAME: &str = "cmdhost";

/// Session describing this build of the host
pub fn session() -> Session {
    Session::new(PROGRAM_NAME, env!("CARGO_PKG_VERSION"))
}

/// Register the bundled plugins and run the command named in `args`.
///
/// `args` includes the binary name, as returned by `std::env::args`.
pub fn run(args: &[String], settings: &Settings, out: &mut dyn Write) -> Result<()> {
    let session = session();
    let registry = extensions::bundled_plugins().with_disabled(settings.disabled_plugins.clone());
    let table = registry.build_command_table(&session);
    cli::dispatch(&session, &table, args, out)
}
