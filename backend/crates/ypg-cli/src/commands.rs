use crate::{
    admin_commands::AdminCommands, portfolio_commands::PortfolioCommands,
    session_commands::SessionCommands,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in, register, and manage the current session
    Session {
        #[command(subcommand)]
        action: SessionCommands,
    },

    /// Explore active career paths (students)
    Careers {
        /// Category: cooking, hotel, bakery, events
        #[arg(long)]
        category: Option<String>,

        /// Case-insensitive text over title and description
        #[arg(long)]
        search: Option<String>,
    },

    /// Portfolio operations (students)
    Portfolio {
        #[command(subcommand)]
        action: PortfolioCommands,
    },

    /// Administration (admins)
    Admin {
        #[command(subcommand)]
        action: AdminCommands,
    },
}
