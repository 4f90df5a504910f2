//! ypg - YPG portal CLI
//!
//! A command-line client for the portal's REST API.
//!
//! # Examples
//!
//! ```bash
//! # Sign in as the demo student
//! ypg session login --email student@example.com --password student123
//!
//! # Explore cooking careers
//! ypg careers --category cooking --pretty
//!
//! # Export the student list
//! ypg admin export students --start 2023-05-01 --end 2023-05-31 --output students.csv
//! ```

use ypg_cli::{
    CLI_STORAGE_DIR, Cli, CliClientResult, Client, Commands,
    admin_commands::{AdminCommands, AssignmentCommands, ContentCommands, UserCommands},
    portfolio_commands::PortfolioCommands,
    session_commands::SessionCommands,
};
use ypg_config::Config;
use ypg_session::FileStorage;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use serde_json::Value;

enum Output {
    Json(Value),
    Text(String),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Server URL: explicit flag > config file > default
    let server_url = cli
        .server
        .clone()
        .unwrap_or_else(|| config.client.server_url.clone());

    let storage = match Config::config_dir()
        .map(|dir| dir.join(CLI_STORAGE_DIR))
        .map_err(|e| e.to_string())
        .and_then(|dir| FileStorage::open(dir).map_err(|e| e.to_string()))
    {
        Ok(storage) => storage,
        Err(e) => {
            eprintln!("Error opening local session storage: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let client = Client::new(&server_url, Arc::new(storage));

    match run(&client, cli.command).await {
        Ok(Output::Text(text)) => {
            print!("{}", text);
            ExitCode::SUCCESS
        }
        Ok(Output::Json(value)) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Some(redirect) = e.redirect() {
                eprintln!();
                eprintln!("Local session cleared. Sign in again ({}):", redirect);
                eprintln!("  ypg session login --email <email> --password <password>");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &Client, command: Commands) -> CliClientResult<Output> {
    let value = match command {
        Commands::Session { action } => match action {
            SessionCommands::Show => client.get_session().await?,
            SessionCommands::Local => serde_json::json!({ "user": client.local_identity()? }),
            SessionCommands::Login { email, password } => client.login(&email, &password).await?,
            SessionCommands::Logout => client.logout().await?,
            SessionCommands::Register {
                name,
                email,
                password,
                college,
                interest,
            } => {
                client
                    .register(&name, &email, &password, &college, &interest)
                    .await?
            }
            SessionCommands::VerifyEmail { token } => client.verify_email(&token).await?,
            SessionCommands::CompleteOnboarding => client.complete_onboarding().await?,
            SessionCommands::ForgotPassword { email } => client.forgot_password(&email).await?,
        },

        Commands::Careers { category, search } => {
            client
                .list_careers(category.as_deref(), search.as_deref())
                .await?
        }

        Commands::Portfolio { action } => match action {
            PortfolioCommands::List => client.list_portfolio().await?,
            PortfolioCommands::Upload {
                file,
                title,
                description,
            } => {
                client
                    .upload_portfolio(&file, &title, description.as_deref())
                    .await?
            }
        },

        Commands::Admin { action } => match action {
            AdminCommands::Stats => client.get_stats().await?,
            AdminCommands::Users { action } => match action {
                UserCommands::List {
                    search,
                    college,
                    status,
                } => {
                    client
                        .list_users(search.as_deref(), college.as_deref(), status.as_deref())
                        .await?
                }
                UserCommands::Create {
                    name,
                    email,
                    college,
                    interest,
                } => {
                    client
                        .create_user(&name, &email, &college, &interest)
                        .await?
                }
                UserCommands::Delete { id } => client.delete_user(&id).await?,
            },
            AdminCommands::Careers { action } => match action {
                ContentCommands::List => client.list_all_careers().await?,
                ContentCommands::Create {
                    title,
                    description,
                    category,
                } => {
                    client
                        .create_career(&title, description.as_deref(), category.as_deref())
                        .await?
                }
                ContentCommands::Toggle { id } => client.toggle_career(&id).await?,
                ContentCommands::Delete { id } => client.delete_career(&id).await?,
            },
            AdminCommands::Assignments { action } => match action {
                AssignmentCommands::List => client.list_assignments().await?,
                AssignmentCommands::Create {
                    title,
                    due_date,
                    description,
                    category,
                } => {
                    client
                        .create_assignment(
                            &title,
                            &due_date,
                            description.as_deref(),
                            category.as_deref(),
                        )
                        .await?
                }
                AssignmentCommands::Toggle { id } => client.toggle_assignment(&id).await?,
                AssignmentCommands::Delete { id } => client.delete_assignment(&id).await?,
            },
            AdminCommands::Export {
                kind,
                start,
                end,
                output,
            } => {
                let csv = client.export(&kind, &start, &end).await?;
                return match output {
                    Some(path) => {
                        tokio::fs::write(&path, csv.as_bytes())
                            .await
                            .map_err(|e| ypg_cli::ClientError::file(path.display().to_string(), e))?;
                        Ok(Output::Json(serde_json::json!({
                            "written": path.display().to_string(),
                            "bytes": csv.len(),
                        })))
                    }
                    None => Ok(Output::Text(csv)),
                };
            }
        },
    };

    Ok(Output::Json(value))
}
