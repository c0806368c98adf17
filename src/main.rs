//! # Pura Search CLI (`pura`)
//!
//! Manage educational articles about Balinese Hindu temples and run the
//! smart search over them.
//!
//! ## Usage
//!
//! ```bash
//! pura --config ./config/pura.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `pura init` | Create the SQLite database and schema |
//! | `pura content add` | Create an article |
//! | `pura content list` | List articles |
//! | `pura content get <id>` | Print one article |
//! | `pura content update <id>` | Partially update an article |
//! | `pura content delete <id>` | Delete an article |
//! | `pura search "<query>"` | Ranked keyword search |
//! | `pura serve` | Start the JSON HTTP server |

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use pura_search_core::models::Category;
use pura_search::{config, content, logging, migrate, search, server};

/// Pura Search CLI: educational content and keyword relevance search for
/// Balinese Hindu temples.
#[derive(Parser)]
#[command(
    name = "pura",
    about = "Pura Search: educational content and smart search for Balinese Hindu temples",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./config/pura.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the database schema. Safe to run more than once.
    Init,

    /// Manage educational articles.
    Content {
        #[command(subcommand)]
        action: ContentAction,
    },

    /// Search articles by keyword relevance.
    ///
    /// Title matches weigh more than body matches; the full query phrase
    /// earns a bonus in either field.
    Search {
        /// The search query string.
        query: String,

        /// Only search this category (history, culture, traditions,
        /// festivals, architecture, ceremonies, philosophy, general).
        #[arg(long)]
        category: Option<String>,

        /// Print the raw JSON response.
        #[arg(long)]
        json: bool,
    },

    /// Start the JSON HTTP server on `[server].bind`.
    Serve,
}

#[derive(Subcommand)]
enum ContentAction {
    /// Create an article.
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        category: Category,
        #[arg(long)]
        content: String,
    },
    /// List articles, newest first.
    List {
        #[arg(long)]
        category: Option<Category>,
    },
    /// Print one article.
    Get { id: i64 },
    /// Update the given fields of an article.
    Update {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        category: Option<Category>,
        #[arg(long)]
        content: Option<String>,
    },
    /// Delete an article.
    Delete { id: i64 },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg = config::load_config(&cli.config)?;
    logging::init(&cfg.logging);

    match cli.command {
        Commands::Init => {
            migrate::run_migrations(&cfg).await?;
            println!("Database initialized successfully.");
        }
        Commands::Content { action } => match action {
            ContentAction::Add {
                title,
                category,
                content,
            } => {
                content::run_add(&cfg, title, category, content).await?;
            }
            ContentAction::List { category } => {
                content::run_list(&cfg, category).await?;
            }
            ContentAction::Get { id } => {
                content::run_get(&cfg, id).await?;
            }
            ContentAction::Update {
                id,
                title,
                category,
                content,
            } => {
                content::run_update(&cfg, id, title, category, content).await?;
            }
            ContentAction::Delete { id } => {
                content::run_delete(&cfg, id).await?;
            }
        },
        Commands::Search {
            query,
            category,
            json,
        } => {
            search::run_search(&cfg, &query, category, json).await?;
        }
        Commands::Serve => {
            server::run_server(&cfg).await?;
        }
    }

    Ok(())
}
