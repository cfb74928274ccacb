//! twinvoice CLI: the main entry point.
//!
//! Commands:
//! - `init`        Create config and data directories
//! - `status`      Show config and readiness
//! - `answer`      Record or clear interview answers
//! - `account`     Set name, bio and tone
//! - `connections` Manage people you can speak as or about
//! - `select`      Choose speaker and target for a session
//! - `profile`     Show the compiled profile summary
//! - `prompt`      Show the full compiled instructions
//! - `correct`     Record how you would really have answered
//! - `memory`      Manage memory facts
//! - `ask`         Ask your twin a question

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(
    name = "twinvoice",
    about = "twinvoice: a digital version of you, built by you",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Override the data directory
    #[arg(long, global = true, env = "TWINVOICE_DATA_DIR")]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create config and data directories
    Init,

    /// Show config and readiness
    Status {
        /// Also call the endpoint to verify the key
        #[arg(long)]
        check: bool,
    },

    /// Record or clear interview answers
    Answer {
        #[command(subcommand)]
        action: AnswerAction,
    },

    /// Set your account details
    Account {
        #[command(subcommand)]
        action: AccountAction,
    },

    /// Manage connections
    Connections {
        #[command(subcommand)]
        action: ConnectionAction,
    },

    /// Choose who speaks and who the question is about
    Select {
        /// `self` or a connection id
        #[arg(long, default_value = "self")]
        speaker: String,

        /// `self` or a connection id
        #[arg(long, default_value = "self")]
        target: String,

        #[arg(long, default_value = "default")]
        session: String,
    },

    /// Show the compiled profile summary
    Profile,

    /// Show the full compiled instructions for a session
    Prompt {
        #[arg(long, default_value = "default")]
        session: String,
    },

    /// Record a correction
    Correct {
        #[arg(long)]
        question: String,

        /// What you would really have said
        #[arg(long)]
        corrected: String,

        /// What the model said
        #[arg(long)]
        prior: Option<String>,
    },

    /// Manage memory facts
    Memory {
        #[command(subcommand)]
        action: MemoryAction,
    },

    /// Ask a question
    Ask {
        question: Option<String>,

        #[arg(long, default_value = "default")]
        session: String,
    },
}

#[derive(Subcommand)]
enum AnswerAction {
    /// Set one answer; an empty value removes it
    Set { id: String, value: String },
    /// List stored answers
    List,
    /// Remove all answers
    Clear {
        #[arg(long)]
        confirm: bool,
    },
}

#[derive(Subcommand)]
enum AccountAction {
    Set {
        #[arg(long)]
        name: String,
        #[arg(long)]
        bio: Option<String>,
        /// Warm, Calm, Direct, Strict or Funny
        #[arg(long)]
        tone: Option<String>,
    },
    Show,
}

#[derive(Subcommand)]
enum ConnectionAction {
    Add {
        name: String,
        /// father, mother, partner, friend, sibling, child or other
        #[arg(long, default_value = "other")]
        role: String,
        #[arg(long)]
        invite_code: Option<String>,
    },
    Remove {
        id: String,
    },
    List,
}

#[derive(Subcommand)]
enum MemoryAction {
    Add {
        fact: String,
        #[arg(long)]
        tag: Option<String>,
    },
    List,
    Edit {
        id: String,
        #[arg(long)]
        fact: Option<String>,
        #[arg(long)]
        tag: Option<String>,
    },
    Delete {
        id: String,
    },
    Clear {
        #[arg(long)]
        confirm: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    if let Commands::Init = cli.command {
        return commands::init::run(cli.data_dir).await;
    }

    let ws = commands::Workspace::open(cli.data_dir)?;

    match cli.command {
        Commands::Init => {}
        Commands::Status { check } => commands::status::run(&ws, check).await?,
        Commands::Answer { action } => match action {
            AnswerAction::Set { id, value } => commands::answers::set(&ws, &id, &value).await?,
            AnswerAction::List => commands::answers::list(&ws).await?,
            AnswerAction::Clear { confirm } => commands::answers::clear(&ws, confirm).await?,
        },
        Commands::Account { action } => match action {
            AccountAction::Set { name, bio, tone } => {
                commands::account::set(&ws, &name, bio.as_deref(), tone.as_deref()).await?
            }
            AccountAction::Show => commands::account::show(&ws).await?,
        },
        Commands::Connections { action } => match action {
            ConnectionAction::Add {
                name,
                role,
                invite_code,
            } => commands::connections::add(&ws, &name, &role, invite_code.as_deref()).await?,
            ConnectionAction::Remove { id } => commands::connections::remove(&ws, &id).await?,
            ConnectionAction::List => commands::connections::list(&ws).await?,
        },
        Commands::Select {
            speaker,
            target,
            session,
        } => commands::select::run(&ws, &speaker, &target, &session).await?,
        Commands::Profile => commands::profile::run(&ws).await?,
        Commands::Prompt { session } => commands::prompt::run(&ws, &session).await?,
        Commands::Correct {
            question,
            corrected,
            prior,
        } => commands::correct::run(&ws, &question, &corrected, prior).await?,
        Commands::Memory { action } => match action {
            MemoryAction::Add { fact, tag } => {
                commands::memory::add(&ws, &fact, tag.as_deref()).await?
            }
            MemoryAction::List => commands::memory::list(&ws).await?,
            MemoryAction::Edit { id, fact, tag } => {
                commands::memory::edit(&ws, &id, fact.as_deref(), tag.as_deref()).await?
            }
            MemoryAction::Delete { id } => commands::memory::delete(&ws, &id).await?,
            MemoryAction::Clear { confirm } => commands::memory::clear(&ws, confirm).await?,
        },
        Commands::Ask { question, session } => {
            commands::ask::run(&ws, question.as_deref(), &session).await?
        }
    }

    Ok(())
}
