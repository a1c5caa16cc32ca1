//! Plugins bundled with the cmdhost binary
//!
//! # Adding a New Command
//!
//! 1. Create a module here with a type implementing `ExtensionCommand`
//! 2. Add a `Plugin` whose `register` hook inserts it into the command table
//! 3. Register the plugin in [`bundled_plugins`]

pub mod config;

use cmdhost_core::PluginRegistry;

pub use config::ConfigPlugin;

/// Registry holding every bundled plugin, in registration order.
pub fn bundled_plugins() -> PluginRegistry {
    let mut registry = PluginRegistry::new();
    registry.register(ConfigPlugin);
    registry
}
