//! cmdhost CLI
//!
//! Binary name: `cmdhost`

use std::process;

use anyhow::Result;
use cmdhost::cli::{error, setup};

fn try_main(args: &[String]) -> Result<()> {
    let early = setup::parse_early_flags(args);
    let settings = cmdhost::settings::load_settings()?;
    setup::init_tracing(setup::default_directive(
        &early,
        settings.log_level.as_deref(),
    ))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    cmdhost::run(args, &settings, &mut out)
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if let Err(err) = try_main(&args) {
        if let Some(usage) = error::usage_error(&err) {
            // clap renders help/version to stdout and usage errors to stderr
            let _ = usage.print();
        } else {
            #[allow(clippy::print_stderr)]
            {
                eprintln!("Error: {}", error::format_error(&err));
            }
        }

        #[allow(clippy::exit)]
        process::exit(error::get_exit_code(&err));
    }
}
