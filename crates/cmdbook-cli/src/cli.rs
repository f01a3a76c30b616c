use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "cmdbook",
    about = "cmdbook — a catalog of command-line snippets",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Catalog file used by the local subcommands and `serve`; when passed,
    /// it also overrides the data path from `serve --config`
    /// [default: cmdbook.json]
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Add a command to the catalog
    Add(AddArgs),
    /// List all commands
    List(ListArgs),
    /// Show a single command
    Get(GetArgs),
    /// Replace a command's fields
    Update(UpdateArgs),
    /// Remove a command
    Rm(RmArgs),
    /// Start the catalog HTTP server
    Serve(ServeArgs),
}

#[derive(Args)]
pub struct AddArgs {
    /// What the command does
    #[arg(long)]
    pub how_to: String,
    /// Platform the command applies to
    #[arg(long)]
    pub platform: String,
    /// The command line itself
    pub command_line: String,
}

#[derive(Args)]
pub struct ListArgs {}

#[derive(Args)]
pub struct GetArgs {
    pub id: u64,
}

#[derive(Args)]
pub struct UpdateArgs {
    pub id: u64,
    /// What the command does
    #[arg(long)]
    pub how_to: String,
    /// Platform the command applies to
    #[arg(long)]
    pub platform: String,
    /// The command line itself
    pub command_line: String,
}

#[derive(Args)]
pub struct RmArgs {
    pub id: u64,
}

#[derive(Args)]
pub struct ServeArgs {
    /// Address to listen on; overrides the config file
    #[arg(long)]
    pub bind: Option<String>,
    /// Load server settings from a TOML file
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Serve from a fresh in-memory catalog instead of the data file
    #[arg(long)]
    pub ephemeral: bool,
}
