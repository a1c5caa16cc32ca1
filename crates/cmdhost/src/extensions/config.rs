//! `config` command - adds a top-level command through the plugin hook
//!
//! ```text
//! cmdhost config help
//! cmdhost config foo
//! cmdhost config bar
//! ```

use std::io::Write;

use cmdhost_core::{
    render_help, CommandTable, ExtensionCommand, GlobalArgs, HelpDocument, HelpSections,
    HelpTopic, Operation, OperationTable, Plugin, Result, Session,
};
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

/// Key the command is registered under
pub const COMMAND_NAME: &str = "config";

/// Shown by `config help` and in the host's command listing
pub const DOCUMENTATION: &str = "Edit the cmdhost config file";

/// Sub-operations of `config`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum ConfigVerb {
    Foo,
    Bar,
    Help,
}

/// Plugin that contributes the `config` command.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn name(&self) -> &str {
        COMMAND_NAME
    }

    fn register(&self, table: &mut CommandTable, session: &Session) {
        add_command(table, session);
    }
}

/// Registration hook: insert the `config` command into `table`.
///
/// Calling it again replaces the previous entry.
pub fn add_command(table: &mut CommandTable, session: &Session) {
    table.insert(
        COMMAND_NAME,
        Box::new(ConfigCommand::new(COMMAND_NAME, session.clone())),
    );
}

#[derive(Debug, Clone)]
pub struct ConfigCommand {
    name: String,
    session: Session,
}

impl ConfigCommand {
    pub fn new(name: impl Into<String>, session: Session) -> Self {
        Self {
            name: name.into(),
            session,
        }
    }

    /// Fresh operation table for one invocation
    pub fn operations(&self) -> Result<OperationTable<ConfigVerb>> {
        OperationTable::from_entries(ConfigVerb::iter().map(|verb| (verb, self.operation(verb))))
    }

    fn operation(&self, verb: ConfigVerb) -> Operation {
        match verb {
            ConfigVerb::Foo => Box::new(|_: &[String], _: &GlobalArgs, out: &mut dyn Write| {
                do_foo(out)
            }),
            ConfigVerb::Bar => Box::new(|_: &[String], _: &GlobalArgs, out: &mut dyn Write| {
                do_bar(out)
            }),
            ConfigVerb::Help => {
                let topic = ConfigHelpTopic {
                    name: self.name.clone(),
                    documentation: DOCUMENTATION,
                };
                Box::new(move |_: &[String], _: &GlobalArgs, out: &mut dyn Write| {
                    let doc = render_help(&ConfigDocSections, &topic);
                    out.write_all(doc.as_str().as_bytes())?;
                    Ok(())
                })
            }
        }
    }
}

impl ExtensionCommand for ConfigCommand {
    fn name(&self) -> &str {
        &self.name
    }

    fn about(&self) -> &str {
        DOCUMENTATION
    }

    fn call(&self, args: &[String], globals: &GlobalArgs, out: &mut dyn Write) -> Result<()> {
        let operations = self.operations()?;
        operations.dispatch(
            &self.session.command_bin_name(&self.name),
            Some(ConfigVerb::Help),
            args,
            globals,
            out,
        )
    }
}

fn do_foo(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "do foo now")?;
    Ok(())
}

fn do_bar(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "do bar now")?;
    Ok(())
}

struct ConfigHelpTopic {
    name: String,
    documentation: &'static str,
}

impl HelpTopic for ConfigHelpTopic {
    fn name(&self) -> &str {
        &self.name
    }

    fn documentation(&self) -> &str {
        self.documentation
    }
}

/// Title is the command name; description is the documentation string.
struct ConfigDocSections;

impl HelpSections for ConfigDocSections {
    fn title(&self, topic: &dyn HelpTopic, doc: &mut HelpDocument) {
        doc.h1(topic.name());
    }

    fn description(&self, topic: &dyn HelpTopic, doc: &mut HelpDocument) {
        doc.h2("Description");
        doc.include_doc_string(topic.documentation());
    }
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;
    use cmdhost_core::Error;
    use proptest::prelude::*;

    use super::*;

    fn command() -> ConfigCommand {
        ConfigCommand::new(COMMAND_NAME, Session::new("cmdhost", "0.1.0"))
    }

    fn call(tokens: &[&str]) -> (Result<()>, String) {
        let args: Vec<String> = tokens.iter().map(ToString::to_string).collect();
        let mut out = Vec::new();
        let result = command().call(&args, &GlobalArgs::default(), &mut out);
        (result, String::from_utf8_lossy(&out).into_owned())
    }

    #[test]
    fn test_foo_prints_fixed_line() {
        let (result, out) = call(&["foo"]);
        assert!(result.is_ok());
        assert_eq!(out, "do foo now\n");
    }

    #[test]
    fn test_bar_prints_fixed_line() {
        let (result, out) = call(&["bar"]);
        assert!(result.is_ok());
        assert_eq!(out, "do bar now\n");
    }

    #[test]
    fn test_extra_tokens_are_passed_through() {
        let (result, out) = call(&["foo", "--region", "eu"]);
        assert!(result.is_ok());
        assert_eq!(out, "do foo now\n");
    }

    #[test]
    fn test_help_renders_title_and_description() {
        let (result, out) = call(&["help"]);
        assert!(result.is_ok());
        assert_eq!(
            out,
            "config\n======\n\nDescription\n-----------\n\nEdit the cmdhost config file\n\n"
        );
    }

    #[test]
    fn test_no_verb_falls_back_to_help() {
        let (result, out) = call(&[]);
        assert!(result.is_ok());
        assert!(out.starts_with("config\n======"));
        assert!(out.contains(DOCUMENTATION));
    }

    #[test]
    fn test_operation_table_covers_every_verb() -> Result<()> {
        let operations = command().operations()?;
        assert_eq!(operations.names(), vec!["foo", "bar", "help"]);
        Ok(())
    }

    #[test]
    fn test_add_command_twice_keeps_single_entry() {
        let session = Session::new("cmdhost", "0.1.0");
        let mut table = CommandTable::new();
        add_command(&mut table, &session);
        add_command(&mut table, &session);
        assert_eq!(table.len(), 1);
        assert!(table.contains(COMMAND_NAME));
    }

    #[test]
    fn test_plugin_registers_config_command() {
        let session = Session::new("cmdhost", "0.1.0");
        let mut table = CommandTable::new();
        ConfigPlugin.register(&mut table, &session);
        assert_eq!(
            table.get(COMMAND_NAME).map(|command| command.about()),
            Some(DOCUMENTATION)
        );
    }

    proptest! {
        #[test]
        fn prop_unknown_verb_fails_without_output(verb in "[a-z]{1,10}") {
            prop_assume!(!matches!(verb.as_str(), "foo" | "bar" | "help"));
            let (result, out) = call(&[verb.as_str()]);
            let exit_code = result.as_ref().err().map(Error::exit_code);
            let is_invalid_value = matches!(
                &result,
                Err(Error::Usage(e)) if e.kind() == ErrorKind::InvalidValue
            );
            prop_assert!(is_invalid_value);
            prop_assert_eq!(exit_code, Some(2));
            prop_assert!(out.is_empty());
        }
    }
}
