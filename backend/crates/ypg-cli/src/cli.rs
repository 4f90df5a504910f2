use crate::commands::Commands;

use clap::Parser;

/// Directory under the config dir holding the CLI's local session copy.
pub const CLI_STORAGE_DIR: &str = "cli-session";

#[derive(Parser)]
#[command(name = "ypg")]
#[command(about = "YPG portal command-line client")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server URL (defaults to client.server_url from config.toml)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
