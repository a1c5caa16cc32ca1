//! Plugin registration
//!
//! Plugins contribute commands to the host's [`CommandTable`]. The registry
//! runs every enabled plugin's hook in registration order and hands back the
//! finished table, so registration always completes before dispatch starts.

use std::collections::BTreeSet;
use std::fmt;

use crate::{CommandTable, Session};

/// Extension point for adding commands to the host.
pub trait Plugin {
    /// Stable plugin name, matched against `disabled_plugins` in settings.
    fn name(&self) -> &str;

    /// Registration hook. Called once per build of the command table.
    fn register(&self, table: &mut CommandTable, session: &Session);
}

/// Ordered set of plugins plus the names the user disabled.
#[derive(Default)]
pub struct PluginRegistry {
    plugins: Vec<Box<dyn Plugin>>,
    disabled: BTreeSet<String>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip plugins with these names when building the command table.
    pub fn with_disabled(mut self, names: impl IntoIterator<Item = String>) -> Self {
        self.disabled.extend(names);
        self
    }

    /// Append a plugin. Hooks run in the order plugins were registered.
    pub fn register(&mut self, plugin: impl Plugin + 'static) -> &mut Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        !self.disabled.contains(name)
    }

    /// Run every enabled plugin's hook against `table`.
    pub fn populate(&self, table: &mut CommandTable, session: &Session) {
        for plugin in &self.plugins {
            if !self.is_enabled(plugin.name()) {
                tracing::info!(plugin = plugin.name(), "Plugin disabled by settings, skipping");
                continue;
            }
            tracing::debug!(plugin = plugin.name(), "Running plugin registration hook");
            plugin.register(table, session);
        }
    }

    /// Build a fresh command table from the enabled plugins.
    pub fn build_command_table(&self, session: &Session) -> CommandTable {
        let mut table = CommandTable::new();
        self.populate(&mut table, session);
        tracing::debug!(commands = table.len(), "Command table built");
        table
    }
}

impl fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginRegistry")
            .field(
                "plugins",
                &self.plugins.iter().map(|p| p.name()).collect::<Vec<_>>(),
            )
            .field("disabled", &self.disabled)
            .finish()
    }
}
