use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum PortfolioCommands {
    /// List your portfolio items, newest first
    List,

    /// Upload a file to your portfolio
    Upload {
        /// File to upload
        file: PathBuf,

        #[arg(long)]
        title: String,

        #[arg(long)]
        description: Option<String>,
    },
}
