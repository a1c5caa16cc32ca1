//! Top-level argument parsing and command dispatch

pub mod error;
pub mod setup;

use std::fmt::Write as _;
use std::io::Write;

use anyhow::{Context, Result};
use clap::builder::PossibleValuesParser;
use clap::{Arg, ArgAction, ArgMatches, Command};
use cmdhost_core::{CommandTable, GlobalArgs, Session};

/// Build the host parser: global options, then a command from the table,
/// then everything else untouched.
pub fn build_cli(session: &Session, table: &CommandTable) -> Command {
    Command::new(session.program_name().to_string())
        .version(session.version().to_string())
        .about("Command-line host whose commands are contributed by plugins")
        .arg(
            Arg::new("debug")
                .long("debug")
                .action(ArgAction::SetTrue)
                .help("Enable debug logging"),
        )
        .arg(
            Arg::new("profile")
                .long("profile")
                .value_name("NAME")
                .help("Named profile passed to the command"),
        )
        .arg(
            Arg::new("command")
                .value_parser(PossibleValuesParser::new(
                    table.names().map(ToString::to_string),
                ))
                .required(true)
                .help("Command to run"),
        )
        .arg(
            Arg::new("args")
                .num_args(0..)
                .trailing_var_arg(true)
                .allow_hyphen_values(true)
                .help("Arguments for the command"),
        )
        .after_help(command_listing(table))
}

fn command_listing(table: &CommandTable) -> String {
    let mut listing = String::from("Commands:\n");
    for command in table.commands() {
        let _ = writeln!(listing, "  {:12} {}", command.name(), command.about());
    }
    listing
}

/// Host-level options from parsed matches
pub fn global_args(matches: &ArgMatches) -> GlobalArgs {
    GlobalArgs {
        debug: matches.get_flag("debug"),
        profile: matches.get_one::<String>("profile").cloned(),
    }
}

/// Parse `args` (including the binary name) and run the selected command.
pub fn dispatch(
    session: &Session,
    table: &CommandTable,
    args: &[String],
    out: &mut dyn Write,
) -> Result<()> {
    let matches = build_cli(session, table)
        .try_get_matches_from(args)
        .map_err(cmdhost_core::Error::from)?;

    let globals = global_args(&matches);
    let command = matches
        .get_one::<String>("command")
        .map(String::as_str)
        .unwrap_or_default();
    let remaining: Vec<String> = matches
        .get_many::<String>("args")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    tracing::debug!(command, profile = ?globals.profile, "Parsed global arguments");

    table
        .dispatch(command, &remaining, &globals, out)
        .with_context(|| format!("'{command}' command failed"))
}
