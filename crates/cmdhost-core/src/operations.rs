//! Operation tables - per-command verb dispatch
//!
//! A command with sub-operations (`cmdhost config foo`) declares its verbs
//! as a closed enum and maps each one to a handler. The table owns the
//! argument parser for the verb position, so an unknown verb is reported as
//! an ordinary clap usage error.

use std::collections::BTreeMap;
use std::fmt;
use std::io::Write;

use clap::builder::PossibleValuesParser;
use clap::{Arg, Command};

use crate::{Error, GlobalArgs, Result};

const OPERATION_ARG: &str = "operation";
const REMAINING_ARG: &str = "remaining";

/// Handler for one verb. Receives the tokens that followed the verb.
pub type Operation = Box<dyn Fn(&[String], &GlobalArgs, &mut dyn Write) -> Result<()>>;

/// Verb -> handler mapping, validated at construction.
pub struct OperationTable<V> {
    entries: BTreeMap<V, Operation>,
}

impl<V> OperationTable<V>
where
    V: Copy + Ord + Into<&'static str>,
{
    /// Build a table, rejecting verbs that appear more than once.
    pub fn from_entries(entries: impl IntoIterator<Item = (V, Operation)>) -> Result<Self> {
        let mut table = BTreeMap::new();
        for (verb, operation) in entries {
            if table.insert(verb, operation).is_some() {
                return Err(Error::DuplicateOperation(verb.into().to_string()));
            }
        }
        Ok(Self { entries: table })
    }

    /// Verb names in table order
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.keys().map(|verb| (*verb).into()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Argument parser for `<bin_name> [operation] [remaining...]`.
    ///
    /// With `default` set the operation may be omitted; otherwise it is required.
    pub fn parser(&self, bin_name: &str, default: Option<V>) -> Command {
        let operation = Arg::new(OPERATION_ARG)
            .value_parser(PossibleValuesParser::new(self.names()))
            .help("Operation to run");
        let operation = match default {
            Some(verb) => operation.default_value(Into::<&'static str>::into(verb)),
            None => operation.required(true),
        };

        Command::new(bin_name.to_string())
            .bin_name(bin_name.to_string())
            .no_binary_name(true)
            .disable_version_flag(true)
            .arg(operation)
            .arg(
                Arg::new(REMAINING_ARG)
                    .num_args(0..)
                    .trailing_var_arg(true)
                    .allow_hyphen_values(true)
                    .hide(true),
            )
    }

    /// Split `args` into the requested verb and the tokens after it.
    pub fn parse(
        &self,
        bin_name: &str,
        default: Option<V>,
        args: &[String],
    ) -> Result<(V, Vec<String>)> {
        let matches = self.parser(bin_name, default).try_get_matches_from(args)?;

        let requested = matches
            .get_one::<String>(OPERATION_ARG)
            .map(String::as_str)
            .unwrap_or_default();
        let verb = self
            .entries
            .keys()
            .copied()
            .find(|verb| Into::<&'static str>::into(*verb) == requested)
            .ok_or_else(|| Error::UnknownOperation(requested.to_string()))?;

        let remaining = matches
            .get_many::<String>(REMAINING_ARG)
            .map(|values| values.cloned().collect())
            .unwrap_or_default();

        Ok((verb, remaining))
    }

    /// Run the handler registered for `verb`.
    pub fn invoke(
        &self,
        verb: V,
        remaining: &[String],
        globals: &GlobalArgs,
        out: &mut dyn Write,
    ) -> Result<()> {
        let name: &'static str = verb.into();
        let operation = self
            .entries
            .get(&verb)
            .ok_or_else(|| Error::UnknownOperation(name.to_string()))?;
        tracing::debug!(operation = name, "Invoking operation");
        operation(remaining, globals, out)
    }

    /// Parse `args` and run the selected operation.
    pub fn dispatch(
        &self,
        bin_name: &str,
        default: Option<V>,
        args: &[String],
        globals: &GlobalArgs,
        out: &mut dyn Write,
    ) -> Result<()> {
        let (verb, remaining) = self.parse(bin_name, default, args)?;
        self.invoke(verb, &remaining, globals, out)
    }
}

impl<V> fmt::Debug for OperationTable<V>
where
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationTable")
            .field("operations", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}
