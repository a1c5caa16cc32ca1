//! cmdhost-core - Host side of the cmdhost extension-point API
//!
//! This crate provides:
//! - The command table plugins register into
//! - The plugin registry and its registration order
//! - Per-command operation tables with argument parsing
//! - The help document renderer

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod error;
pub mod help;
pub mod operations;
pub mod plugin;
pub mod session;
pub mod table;

pub use error::{Error, Result};
pub use help::{render_help, HelpDocument, HelpSections, HelpTopic};
pub use operations::{Operation, OperationTable};
pub use plugin::{Plugin, PluginRegistry};
pub use session::{GlobalArgs, Session};
pub use table::{CommandTable, ExtensionCommand};
