use clap::Parser;
use pubxml::cli::{self, Args};
use pubxml::logging;
use std::env;
use std::process::ExitCode;

fn try_main(args: Args) -> pubxml::Result<()> {
    let workspace = env::current_dir()?;
    let config = args.command.load_config(&workspace)?;
    let guard = logging::init(&config.logging)?;
    tracing::debug!(
        console = %guard.console_output(),
        level = guard.level(),
        "logging initialized"
    );
    cli::run(args, &config)
}

fn main() -> ExitCode {
    match try_main(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
