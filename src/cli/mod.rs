pub mod args;
pub mod commands;

pub use args::{CompileArgs, ListArgs};
use crate::core::config::{ConfigLoader, PubxmlConfig};
use clap::{Parser, Subcommand};
use std::path::Path;

const HELP_TEMPLATE: &str = "\
{name} {version}\n\
{about-with-newline}\n\
USAGE:\n    {usage}\n\
\nOPTIONS:\n{options}\n\
COMMANDS:\n{subcommands}\n";

#[derive(Parser, Debug)]
#[command(name = "pubxml")]
#[command(version = crate::VERSION)]
#[command(about = "Compile CI post-build publisher actions into Jenkins plugin XML")]
#[command(help_template = HELP_TEMPLATE)]
#[command(
    after_long_help = "Typical flow: list the available actions, then compile a job document to XML."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(
        about = "Compile a job document into job XML",
        long_about = "Compile reads a YAML job document, resolves every publisher action against the built-in registry and renders one <project> document per job.",
        after_help = "Examples:\n    pubxml compile jobs.yaml\n    pubxml compile jobs.yaml --output-dir out/"
    )]
    Compile(CompileArgs),
    #[command(
        about = "List the registered publisher actions",
        long_about = "List prints every action name the compiler accepts, one per line, sorted.",
        after_help = "Example:\n    pubxml list"
    )]
    List(ListArgs),
}

impl Command {
    /// Resolve configuration for this command: an explicit `--config` file
    /// must exist, otherwise `pubxml.toml` in `workspace` is optional.
    pub fn load_config(&self, workspace: &Path) -> crate::Result<PubxmlConfig> {
        let config = match self {
            Command::Compile(CompileArgs {
                config: Some(path), ..
            }) => ConfigLoader::load_explicit(path)?,
            _ => ConfigLoader::load_from_workspace(workspace)?,
        };
        Ok(config)
    }
}

pub fn run(args: Args, config: &PubxmlConfig) -> crate::Result<()> {
    match args.command {
        Command::Compile(compile_args) => commands::compile(compile_args, config),
        Command::List(list_args) => commands::list(list_args),
    }
}
