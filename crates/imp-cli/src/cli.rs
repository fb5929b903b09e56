use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "imp",
    about = "Validate, score and report Infant Motor Profile evaluations",
    version
)]
pub struct Cli {
    /// Load the item catalog from a JSON file instead of the built-in IMP catalog
    #[arg(long, global = true, env = "IMP_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Log output format (written to stderr)
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check a submission and report the first problem found
    Validate(ValidateArgs),
    /// Validate, score and interpret a submission
    Score(ScoreArgs),
    /// List the catalog items by section
    Catalog(CatalogArgs),
    /// Render the blank evaluation form
    Form,
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Submission JSON file, or `-` for stdin
    pub input: PathBuf,

    /// Report every problem instead of stopping at the first
    #[arg(long)]
    pub all: bool,
}

#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Submission JSON file, or `-` for stdin
    pub input: PathBuf,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Postmenstrual age in weeks; overrides the submission's `age_weeks`
    #[arg(long)]
    pub age_weeks: Option<u32>,
}

#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Dump the catalog in its JSON schema form
    #[arg(long)]
    pub json: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Report,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}
