//! CLI administration tool for article-api.
//!
//! Inspects and maintains the article store without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List articles, latest publish date first
//! cargo run --bin admin -- article list
//!
//! # Delete an article
//! cargo run --bin admin -- article delete 42
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
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `RUST_LOG` (optional): log filter for diagnostics on stderr (default: `warn`)

use article_api::application::services::ArticleService;
use article_api::domain::repositories::ArticleRepository;
use article_api::infrastructure::persistence::PgArticleRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// CLI tool for managing article-api.
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
    /// Manage articles
    Article {
        #[command(subcommand)]
        action: ArticleAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Article management subcommands.
#[derive(Subcommand)]
enum ArticleAction {
    /// List all articles
    List,

    /// Permanently delete an article
    Delete {
        /// Article ID
        id: i64,

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

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Article { action } => handle_article_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Sends service logs, including the cause behind a failed command, to stderr.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn log_filter(raw: Option<&str>) -> EnvFilter {
    raw.and_then(|raw| EnvFilter::try_new(raw).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn repository(pool: &PgPool) -> Arc<dyn ArticleRepository> {
    Arc::new(PgArticleRepository::new(Arc::new(pool.clone())))
}

/// Dispatches article management commands.
async fn handle_article_action(action: ArticleAction, pool: &PgPool) -> Result<()> {
    let repo = repository(pool);
    let service = ArticleService::new(repo.clone());

    match action {
        ArticleAction::List => list_articles(&service).await?,
        ArticleAction::Delete { id, yes } => {
            delete_article(repo.as_ref(), &service, id, yes).await?
        }
    }

    Ok(())
}

/// Prints every article as a table.
///
/// # Output Format
///
/// ```text
/// Articles
///
///   ID    Published    Title
///   ─────────────────────────────────────────────
///   2     2024-01-02   Second
///   1     2024-01-01   First
/// ```
async fn list_articles(service: &ArticleService<dyn ArticleRepository>) -> Result<()> {
    println!("{}", "Articles".bright_blue().bold());
    println!();

    let articles = match service.list_articles().await {
        Ok(articles) => articles,
        Err(article_api::AppError::NotFound { .. }) => {
            println!("{}", "  No articles found".yellow());
            return Ok(());
        }
        Err(e) => anyhow::bail!("Failed to list articles: {}", e),
    };

    println!(
        "  {:<5} {:<12} {}",
        "ID".bright_white().bold(),
        "Published".bright_white().bold(),
        "Title".bright_white().bold()
    );
    println!("  {}", "─".repeat(60).bright_black());

    for article in &articles {
        println!(
            "  {:<5} {:<12} {}",
            article.id.to_string().bright_black(),
            article.publish_date.to_string(),
            article.title.cyan()
        );
    }

    println!();
    println!(
        "  Total: {}",
        articles.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Deletes an article after showing it and asking for confirmation.
async fn delete_article(
    repo: &dyn ArticleRepository,
    service: &ArticleService<dyn ArticleRepository>,
    id: i64,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "Delete Article".bright_blue().bold());
    println!();

    let Some(article) = repo
        .find_by_id(id)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
    else {
        println!("{}", format!("  Article {id} not found").yellow());
        return Ok(());
    };

    println!("  ID:        {}", article.id.to_string().bright_black());
    println!("  Title:     {}", article.title.cyan());
    println!("  Published: {}", article.publish_date);
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this article permanently?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_article(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete article: {}", e))?;

    println!();
    println!("{}", "Article deleted".green().bold());
    println!();

    Ok(())
}

/// Displays the number of stored articles.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let count = ArticleService::new(repository(pool))
        .count_articles()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count articles: {}", e))?;

    println!("  Articles: {}", count.to_string().bright_green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
