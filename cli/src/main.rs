//! `triage-cli`: terminal operator client for the inbox triage backend.

mod api;
mod error;
mod operator;
mod render;
mod session;

use std::time::Duration;

use clap::{Parser, Subcommand};
use triage::Command as ShellCommand;

use crate::api::HttpQueueApi;
use crate::error::CliError;
use crate::operator::Operator;
use crate::session::FileSessionStore;

#[derive(Parser, Debug)]
#[command(name = "triage-cli", about = "Inbox triage operator CLI")]
struct Cli {
    #[arg(long, env = "TRIAGE_BACKEND_URL", default_value = "http://127.0.0.1:8000")]
    backend_url: String,

    #[arg(long, env = "TRIAGE_SESSION_FILE", default_value = ".triage-session.json")]
    session_file: String,

    #[arg(long, env = "TRIAGE_REQUEST_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Exchange credentials for a session and store it.
    Login {
        #[arg(long, env = "TRIAGE_USERNAME")]
        username: String,
        #[arg(long, env = "TRIAGE_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// End the session and forget it locally.
    Logout,
    /// Verify the stored session and print the operator name.
    Whoami,
    /// Print the queue snapshot and current card.
    State,
    /// Poll the queue and reprint it until Ctrl-C.
    Watch {
        #[arg(long, env = "TRIAGE_POLL_SECS", default_value_t = 5)]
        poll_secs: u64,
    },
    /// Assign the current card. The first id is the owner, the rest co-owners.
    Assign {
        #[arg(required = true)]
        ids: Vec<i64>,
        #[arg(long)]
        comment: Option<String>,
    },
    /// Skip the current card.
    Skip,
    /// Undo the last action.
    Undo,
    /// List the current card's attachments and how each would be shown.
    Files {
        /// Mark this tab as active.
        #[arg(long, default_value_t = 0)]
        tab: usize,
    },
    /// List the local employee roster.
    Employees,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let api = HttpQueueApi::new(&cli.backend_url, Duration::from_secs(cli.timeout_secs.max(1)))?;
    let store = FileSessionStore::new(&cli.session_file);
    let mut op = Operator::new(api, store, triage::roster::default_roster());
    let base = cli.backend_url.trim_end_matches('/').to_owned();

    match cli.command {
        Command::Login { username, password } => {
            let name = op.login(&username, &password).await?;
            println!("logged in as {name}");
        }
        Command::Logout => {
            op.logout().await?;
            println!("logged out");
        }
        Command::Whoami => println!("{}", op.restore().await?),
        Command::Employees => print!("{}", render::employees_view(op.roster())),
        Command::State => {
            op.restore().await?;
            op.load_public_url().await;
            op.refresh().await?;
            print!("{}", render::state_view(op.shell(), &base, op.token()));
        }
        Command::Watch { poll_secs } => run_watch(&mut op, &base, poll_secs).await?,
        Command::Assign { ids, comment } => {
            op.restore().await?;
            op.refresh().await?;
            op.assign(&ids, comment.as_deref()).await?;
            let names = triage::roster::names_for(op.roster(), &ids).join(", ");
            println!("assigned to {names}");
            print!("{}", render::state_view(op.shell(), &base, op.token()));
        }
        Command::Skip => run_action(&mut op, ShellCommand::Skip, "skipped", &base).await?,
        Command::Undo => run_action(&mut op, ShellCommand::Undo, "undone", &base).await?,
        Command::Files { tab } => {
            op.restore().await?;
            op.load_public_url().await;
            op.refresh().await?;
            print_files(&op, tab, &base);
        }
    }
    Ok(())
}

type HttpOperator = Operator<HttpQueueApi, FileSessionStore>;

async fn run_action(op: &mut HttpOperator, command: ShellCommand, done: &str, base: &str) -> Result<(), CliError> {
    op.restore().await?;
    op.refresh().await?;
    op.run(command).await?;
    println!("{done}");
    print!("{}", render::state_view(op.shell(), base, op.token()));
    Ok(())
}

fn print_files(op: &HttpOperator, tab: usize, base: &str) {
    let Some(card) = op.shell().current_card().cloned() else {
        println!("The queue is empty.");
        return;
    };
    let mut shell = op.shell().clone();
    if !shell.select_tab(tab) {
        tracing::warn!(tab, files = card.files.len(), "tab out of range; showing first file");
    }
    let ctx = triage::ViewerContext { api_base: base, token: op.token(), public_base: shell.public_base.as_deref() };
    print!("{}", render::files_block(&card, shell.active_tab(), &ctx));
}

async fn run_watch(op: &mut HttpOperator, base: &str, poll_secs: u64) -> Result<(), CliError> {
    op.restore().await?;
    op.load_public_url().await;

    let mut interval = tokio::time::interval(Duration::from_secs(poll_secs.max(1)));
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    loop {
        tokio::select! {
            _ = interval.tick() => {}
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("watch stopped");
                return Ok(());
            }
        }
        let refreshed = op.refresh().await.map(|_| ());
        match refreshed {
            Ok(()) => print!("\x1b[2J\x1b[H{}", render::state_view(op.shell(), base, op.token())),
            Err(CliError::SessionExpired) => return Err(CliError::SessionExpired),
            Err(e) => tracing::warn!(error = %e, "poll failed"),
        }
    }
}
