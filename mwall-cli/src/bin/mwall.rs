//! Set desktop wallpapers on one, some, or all attached monitors.

use std::ffi::OsString;
use std::io;
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use mwall_core::{platform, resolve, session, usage};

#[derive(Parser)]
#[command(
    name = "mwall",
    version,
    about = "Set desktop wallpapers per monitor",
    after_help = usage::USAGE
)]
struct Args {
    /// Log monitor enumeration and platform calls to stderr
    #[arg(short, long)]
    verbose: bool,

    /// `<monitor> <image>`, `/A <image>` or `/M <image|N>...`
    #[arg(
        value_name = "ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    tokens: Vec<OsString>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();

    let mode = resolve::resolve(&args.tokens);
    log::debug!("resolved {mode:?}");

    match session::execute(
        &mode,
        platform::init_subsystem,
        platform::acquire_service,
        &mut io::stdout(),
    ) {
        Ok(outcome) => {
            if let session::Outcome::ServiceUnavailable(e) = &outcome {
                eprintln!("{e}");
            }
            ExitCode::from(outcome.exit_code())
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
