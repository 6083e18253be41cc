//! user-console
//!
//! Command-line front-end for the user service.
//!
//! ```text
//! user-console list
//! user-console create --first-name Ada --last-name Lovelace \
//!     --email ada@example.com --password analytical --wait
//! user-console delete <id>
//! user-console status <operation-id>
//! ```

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;

use user_console::api::OperationId;
use user_console::config::{load_config, ConsoleConfig};
use user_console::console::{Notification, Notifier, PollEnd, PollOutcome};
use user_console::model::{Field, UserId};
use user_console::observability::init_logging;
use user_console::state::UsersState;
use user_console::{HttpUsersApi, UserConsole, UsersApi};

#[derive(Parser)]
#[command(name = "user-console")]
#[command(about = "Manage users of the user service", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Base URL of the user service (overrides the config file)
    #[arg(short, long)]
    url: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all users
    List,
    /// Create a user
    Create {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Wait for the operation to settle before exiting
        #[arg(long)]
        wait: bool,
    },
    /// Delete a user and wait for the operation to settle
    Delete { id: String },
    /// Query the status of an operation once
    Status { operation_id: String },
}

type CliResult = Result<(), Box<dyn std::error::Error>>;

#[tokio::main]
async fn main() -> CliResult {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ConsoleConfig::default(),
    };
    if let Some(url) = cli.url {
        config.api.base_url = url;
    }

    let level = match cli.verbose {
        0 => config.observability.log_level.as_str(),
        1 => "debug",
        _ => "trace",
    };
    init_logging(level);

    let api = Arc::new(HttpUsersApi::new(&config.api)?);
    tracing::debug!(base_url = %api.base_url(), "Configuration loaded");

    let (notifier, mut notifications) = Notifier::channel();
    let console = UserConsole::new(Arc::clone(&api), &config, notifier);

    let result = run(cli.command, &console, &api).await;
    print_notifications(&mut notifications);
    result
}

async fn run(
    command: Commands,
    console: &UserConsole<HttpUsersApi>,
    api: &HttpUsersApi,
) -> CliResult {
    match command {
        Commands::List => {
            console.start().await;
            print_users(&console.snapshot().await);
        }
        Commands::Create {
            first_name,
            last_name,
            email,
            password,
            wait,
        } => {
            let values = [
                (Field::FirstName, first_name),
                (Field::LastName, last_name),
                (Field::Email, email),
                (Field::Password, password),
            ];
            for (field, value) in values {
                console.edit(field, value).await;
                console.blur(field).await;
            }

            let state = console.snapshot().await;
            let errors: Vec<String> = Field::ALL
                .iter()
                .filter_map(|&field| state.field_error(field))
                .collect();
            if !errors.is_empty() {
                for error in &errors {
                    eprintln!("{}", error);
                }
                return Err("refusing to submit an invalid user".into());
            }

            let outcome = console.create_user().await?;
            println!("Operation {}", outcome.operation_id);
            if wait {
                let poll = outcome.poll.await?;
                print_poll(&poll);
            }
        }
        Commands::Delete { id } => {
            let poll = console.delete_user(&UserId::from(id)).await?;
            print_poll(&poll);
        }
        Commands::Status { operation_id } => {
            let status = api
                .check_status(&OperationId::from(operation_id.as_str()))
                .await?;
            println!("{}", status);
        }
    }
    Ok(())
}

fn print_users(state: &UsersState) {
    let users = match &state.users {
        Some(users) if !users.is_empty() => users,
        _ => {
            println!("No users available");
            return;
        }
    };

    println!("{:<38} {:<20} {:<20} {}", "ID", "First Name", "Last Name", "Email");
    for row in users {
        println!(
            "{:<38} {:<20} {:<20} {}",
            row.user.id, row.user.first_name, row.user.last_name, row.user.email
        );
    }
}

fn print_poll(poll: &PollOutcome) {
    match &poll.end {
        PollEnd::Settled(status) => println!("Status: {} after {} check(s)", status, poll.checks),
        PollEnd::QueryFailed => println!("Status unavailable after {} check(s)", poll.checks),
        PollEnd::GaveUp => println!("Still processing after {} check(s)", poll.checks),
    }
}

fn print_notifications(rx: &mut UnboundedReceiver<Notification>) {
    while let Ok(notification) = rx.try_recv() {
        println!("{}", notification);
    }
}
