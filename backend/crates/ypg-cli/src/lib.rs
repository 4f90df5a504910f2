//! ypg-cli library
//!
//! Exports the HTTP client and the command-line definitions for the `ypg` binary.

pub mod admin_commands;
pub mod cli;
pub mod client;
pub mod commands;
pub mod portfolio_commands;
pub mod session_commands;

#[cfg(test)]
mod tests;

pub use cli::{CLI_STORAGE_DIR, Cli};
pub use client::{CliClientResult, Client, ClientError};
pub use commands::Commands;
