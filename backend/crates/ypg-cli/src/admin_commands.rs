use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum AdminCommands {
    /// Dashboard statistics
    Stats,

    /// User management
    Users {
        #[command(subcommand)]
        action: UserCommands,
    },

    /// Career path content
    Careers {
        #[command(subcommand)]
        action: ContentCommands,
    },

    /// Assignment content
    Assignments {
        #[command(subcommand)]
        action: AssignmentCommands,
    },

    /// Export a CSV report
    Export {
        /// students, portfolios, activity, colleges
        kind: String,

        /// Start date (YYYY-MM-DD, inclusive)
        #[arg(long)]
        start: String,

        /// End date (YYYY-MM-DD, inclusive)
        #[arg(long)]
        end: String,

        /// Write to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum UserCommands {
    /// List members
    List {
        #[arg(long)]
        search: Option<String>,

        #[arg(long)]
        college: Option<String>,

        /// active or pending
        #[arg(long)]
        status: Option<String>,
    },

    /// Create a member (starts unverified)
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        college: String,

        #[arg(long)]
        interest: String,
    },

    /// Delete a member
    Delete { id: String },
}

#[derive(Subcommand)]
pub enum ContentCommands {
    /// List all career paths, including inactive ones
    List,

    Create {
        #[arg(long)]
        title: String,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        category: Option<String>,
    },

    /// Flip the active flag
    Toggle { id: String },

    Delete { id: String },
}

#[derive(Subcommand)]
pub enum AssignmentCommands {
    List,

    Create {
        #[arg(long)]
        title: String,

        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due_date: String,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        category: Option<String>,
    },

    /// Flip the active flag
    Toggle { id: String },

    Delete { id: String },
}
