use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct CompileArgs {
    /// YAML job document holding one or more `job:` items
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Write one <job-name>.xml per job here instead of printing to stdout
    #[arg(long, short = 'o', value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Read settings from this file instead of ./pubxml.toml
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {}
