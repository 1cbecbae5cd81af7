// SPDX-License-Identifier: MPL-2.0
use iced_lightbox::config;
use iced_lightbox::error::{Error, Result};
use iced_lightbox::replay::{self, Trace};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: iced_lightbox [--config PATH] [--verbose] TRACE.toml";

struct Flags {
    config_path: Option<PathBuf>,
    verbose: bool,
    trace_path: PathBuf,
}

fn parse_flags() -> std::result::Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        verbose: args.contains(["-v", "--verbose"]),
        config_path: args.opt_value_from_str("--config")?,
        trace_path: args.free_from_str()?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        return Err(pico_args::Error::ArgumentParsingFailed {
            cause: format!("unexpected arguments: {rest:?}"),
        });
    }
    Ok(Some(flags))
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn replay_trace(flags: &Flags) -> Result<()> {
    let config = match &flags.config_path {
        Some(path) => config::load_from_path(path)?,
        None => config::load()?,
    };
    let trace = Trace::load(&flags.trace_path)?;

    for step in replay::run(&trace, &config).await? {
        println!("{step}");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{err}\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };
    init_logging(flags.verbose);

    match replay_trace(&flags).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err @ Error::Replay(_)) => {
            eprintln!("{err}");
            ExitCode::from(2)
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
