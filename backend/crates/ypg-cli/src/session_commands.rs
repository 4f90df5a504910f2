use clap::Subcommand;

#[derive(Subcommand)]
pub enum SessionCommands {
    /// Show the server's current identity
    Show,

    /// Show the identity remembered locally, without contacting the server
    Local,

    /// Sign in with email and password
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Sign out
    Logout,

    /// Register a new student account
    Register {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        /// College id (harlow, westminster, southend, colchester) or free text
        #[arg(long)]
        college: String,

        /// Interest id (chef, baker, hotel, hospitality, events) or free text
        #[arg(long)]
        interest: String,
    },

    /// Confirm the email address with the token from the verification link
    VerifyEmail {
        token: String,
    },

    /// Mark onboarding as complete
    CompleteOnboarding,

    /// Request a password reset link
    ForgotPassword {
        #[arg(long)]
        email: String,
    },
}
