//! CLI administration tool for alias-shortener.
//!
//! Provides commands for managing aliases, viewing statistics,
//! and checking the database without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Store a URL under a generated alias
//! cargo run --bin admin -- link create https://example.com
//!
//! # Store a URL under a chosen alias
//! cargo run --bin admin -- link create https://example.com --alias docs
//!
//! # Show where an alias points
//! cargo run --bin admin -- link resolve docs
//!
//! # Delete an alias
//! cargo run --bin admin -- link delete docs
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `STORAGE_PATH`: SQLite database location
//! - `ALIAS_LENGTH`, `ALIAS_MAX_ATTEMPTS`: policy for generated aliases

use alias_shortener::api::dto::save::SaveRequest;
use alias_shortener::application::services::ShorteningService;
use alias_shortener::config::{AliasConfig, DatabaseConfig};
use alias_shortener::domain::entities::Alias;
use alias_shortener::error::StoreError;
use alias_shortener::infrastructure::persistence::{SqliteAliasStore, open_pool};
use alias_shortener::utils::alias_generator::RandomAliasGenerator;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;
use validator::Validate;

type AdminService = ShorteningService<SqliteAliasStore, RandomAliasGenerator>;

/// CLI tool for managing alias-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage aliases
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Alias management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Store a URL under an alias
    Create {
        /// Destination URL
        url: String,

        /// Alias to use (generated if omitted)
        #[arg(short, long)]
        alias: Option<String>,
    },

    /// Show the destination of an alias
    Resolve { alias: String },

    /// Delete an alias
    Delete {
        alias: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database = DatabaseConfig::from_env();
    database.validate()?;

    let aliases = AliasConfig::from_env();
    aliases.validate()?;

    let pool = open_pool(&database).await?;
    let store = Arc::new(SqliteAliasStore::new(Arc::new(pool.clone())));

    let result = match cli.command {
        Commands::Link { action } => handle_link_action(action, store, &aliases).await,
        Commands::Stats => handle_stats(&store).await,
        Commands::Db { action } => handle_db_action(action, &store).await,
    };

    pool.close().await;
    result
}

/// Dispatches alias management commands.
async fn handle_link_action(
    action: LinkAction,
    store: Arc<SqliteAliasStore>,
    aliases: &AliasConfig,
) -> Result<()> {
    let service = ShorteningService::new(
        store.clone(),
        Arc::new(RandomAliasGenerator::new()),
        aliases.alias_policy(),
    );

    match action {
        LinkAction::Create { url, alias } => create_link(&service, url, alias).await,
        LinkAction::Resolve { alias } => resolve_link(&store, alias).await,
        LinkAction::Delete { alias, yes } => delete_link(&service, alias, yes).await,
    }
}

/// Validates the input with the same rules as `POST /url`, then stores it.
async fn create_link(service: &AdminService, url: String, alias: Option<String>) -> Result<()> {
    println!("{}", "🔗 Create Alias".bright_blue().bold());
    println!();

    let request = SaveRequest::new(url, alias);
    request.validate().context("Invalid link")?;

    let url = request.url;
    match service.shorten(&url, request.alias.map(Alias::new)).await {
        Ok(shortened) => {
            println!("{}", "✅ Alias created".green().bold());
            println!("  Alias: {}", shortened.alias.as_str().bright_yellow().bold());
            println!("  URL:   {}", url.cyan());
            println!("  ID:    {}", shortened.id.to_string().bright_black());
            println!();
            Ok(())
        }
        Err(StoreError::DuplicateAlias(alias)) => {
            anyhow::bail!("Alias already exists: {}", alias)
        }
        Err(e) => Err(anyhow::anyhow!("Failed to create alias: {}", e)),
    }
}

/// Shows the destination and row id of an alias.
async fn resolve_link(store: &SqliteAliasStore, alias: String) -> Result<()> {
    match store.find(&Alias::new(alias.clone())).await {
        Ok(record) => {
            println!(
                "  {} → {}  {}",
                alias.cyan(),
                record.destination_url.bright_white(),
                format!("(id {})", record.id).bright_black()
            );
            Ok(())
        }
        Err(StoreError::NotFound(_)) => anyhow::bail!("Alias not found: {}", alias),
        Err(e) => Err(anyhow::anyhow!("Database error: {}", e)),
    }
}

/// Deletes an alias after confirmation (default: No).
async fn delete_link(service: &AdminService, alias: String, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Delete Alias".bright_blue().bold());
    println!();

    let alias = Alias::new(alias);

    let url = match service.resolve(&alias).await {
        Ok(url) => url,
        Err(StoreError::NotFound(_)) => anyhow::bail!("Alias not found: {}", alias),
        Err(e) => return Err(anyhow::anyhow!("Database error: {}", e)),
    };

    println!("  Alias: {}", alias.as_str().cyan());
    println!("  URL:   {}", url.bright_white());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this alias? It cannot be restored.")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    match service.delete(&alias).await {
        Ok(()) => {
            println!();
            println!("{}", "✅ Alias deleted".green().bold());
            println!();
            Ok(())
        }
        Err(StoreError::NotFound(_)) => {
            println!("{}", "⚠️  Alias was already deleted".yellow());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Failed to delete alias: {}", e)),
    }
}

/// Displays the number of stored aliases.
async fn handle_stats(store: &SqliteAliasStore) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let count = store
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    println!("  Aliases: {}", count.to_string().bright_green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, store: &SqliteAliasStore) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            store
                .ping()
                .await
                .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
    }

    Ok(())
}
