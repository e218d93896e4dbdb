pub mod expire;
pub mod handler;
pub mod render;


pub use expire::ExpireArgs;

use clap::{Parser, Subcommand, ValueEnum};

/// Table maintenance action CLI
#[derive(Parser)]
#[command(
    name = "paimon-action",
    version,
    about = "Build validated table maintenance action requests from command-line flags"
)]
pub struct Cli {
    /// How to print the built request
    #[arg(long, value_enum, default_value = "text", env = "PAIMON_ACTION_OUTPUT")]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List available actions
    List,

    /// Expire snapshots of a table under a retention policy
    Expire(ExpireArgs),

    /// Any other name is reported as an unsupported action
    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
