//! Command table - top-level command name to handler mapping
//!
//! The host owns one table per process. Plugins add entries through
//! [`crate::Plugin::register`]; the host looks entries up once argument
//! parsing has picked a command name.

use std::collections::BTreeMap;
use std::fmt;
use std::io::Write;

use crate::{Error, GlobalArgs, Result};

/// Handler stored in the command table.
pub trait ExtensionCommand {
    /// Name the command is invoked by.
    fn name(&self) -> &str;

    /// One-line description shown in the host's command listing.
    fn about(&self) -> &str;

    /// Run the command with the tokens that followed its name.
    ///
    /// `args` is everything after the command name, unparsed.
    fn call(&self, args: &[String], globals: &GlobalArgs, out: &mut dyn Write) -> Result<()>;
}

/// Mapping from command name to handler.
#[derive(Default)]
pub struct CommandTable {
    entries: BTreeMap<String, Box<dyn ExtensionCommand>>,
}

impl CommandTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a handler under `name`.
    ///
    /// An existing entry with the same name is replaced and returned.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        command: Box<dyn ExtensionCommand>,
    ) -> Option<Box<dyn ExtensionCommand>> {
        let name = name.into();
        let previous = self.entries.insert(name.clone(), command);
        if previous.is_some() {
            tracing::debug!(command = %name, "Replaced existing command table entry");
        }
        previous
    }

    pub fn get(&self, name: &str) -> Option<&dyn ExtensionCommand> {
        self.entries.get(name).map(Box::as_ref)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered command names, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Registered handlers, sorted by name
    pub fn commands(&self) -> impl Iterator<Item = &dyn ExtensionCommand> {
        self.entries.values().map(Box::as_ref)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up `name` and call it with the remaining tokens.
    pub fn dispatch(
        &self,
        name: &str,
        args: &[String],
        globals: &GlobalArgs,
        out: &mut dyn Write,
    ) -> Result<()> {
        let command = self
            .get(name)
            .ok_or_else(|| Error::UnknownCommand(name.to_string()))?;
        tracing::debug!(command = %name, args = ?args, "Dispatching command");
        command.call(args, globals, out)
    }
}

impl fmt::Debug for CommandTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandTable")
            .field("commands", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}
