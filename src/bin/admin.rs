//! CLI administration tool for link-page.
//!
//! Provides commands for inspecting and maintaining links, viewing click
//! statistics, and checking the database without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List all links in display order
//! cargo run --bin admin -- links list
//!
//! # Delete a link
//! cargo run --bin admin -- links delete 42
//!
//! # Reset a link's click counter
//! cargo run --bin admin -- links reset-clicks 42 --yes
//!
//! # View statistics, optionally for links created in a date range
//! cargo run --bin admin -- stats --from 2024-01-01 --to 2024-01-31
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`, or `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`

use link_page::api::dto::stats::StatsQuery;
use link_page::application::services::{LinkService, StatsService};
use link_page::config::Config;
use link_page::domain::entities::{Link, LinkPatch};
use link_page::infrastructure::persistence::{PgLinkRepository, PgStatsRepository};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing link-page.
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
    /// Manage links
    Links {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show click statistics
    Stats {
        /// Only count links created at or after this ISO-8601 time (plain dates are midnight UTC)
        #[arg(long)]
        from: Option<String>,

        /// Only count links created at or before this ISO-8601 time (plain dates are midnight UTC)
        #[arg(long)]
        to: Option<String>,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// List all links
    List,

    /// Permanently delete a link
    Delete {
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Set a link's click counter back to zero
    ResetClicks {
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

    let cli = Cli::parse();

    let database_url = Config::load_database_url()?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Links { action } => handle_link_action(action, &pool).await?,
        Commands::Stats { from, to } => handle_stats(&pool, from, to).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgLinkRepository::new(Arc::new(pool.clone())));
    let service = LinkService::new(repo);

    match action {
        LinkAction::List => list_links(&service).await?,
        LinkAction::Delete { id, yes } => delete_link(&service, id, yes).await?,
        LinkAction::ResetClicks { id, yes } => reset_clicks(&service, id, yes).await?,
    }

    Ok(())
}

/// Lists all links in display order.
///
/// # Output Format
///
/// ```text
/// 🔗 Links
///
///   ID   Order  Name                 Clicks    URL
///   ──────────────────────────────────────────────────────────────
///   1    0      GitHub               3         https://github.com/alice
/// ```
async fn list_links(service: &LinkService<PgLinkRepository>) -> Result<()> {
    println!("{}", "🔗 Links".bright_blue().bold());
    println!();

    let links = service.list_links().await.context("Failed to list links")?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(());
    }

    println!(
        "  {:<4} {:<6} {:<20} {:<9} {}",
        "ID".bright_white().bold(),
        "Order".bright_white().bold(),
        "Name".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &links {
        println!(
            "  {:<4} {:<6} {:<20} {:<9} {}",
            link.id.to_string().bright_black(),
            link.order.to_string(),
            link.name.cyan(),
            link.clicks.to_string().bright_green(),
            link.url.bright_black()
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

fn print_link(link: &Link) {
    println!("  Link:   {}", link.name.cyan());
    println!("  ID:     {}", link.id.to_string().bright_black());
    println!("  URL:    {}", link.url.bright_black());
    println!("  Clicks: {}", link.clicks.to_string().bright_green());
    println!();
}

fn confirm(prompt: &str, skip: bool) -> Result<bool> {
    if skip {
        return Ok(true);
    }

    Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
}

/// Deletes a link after confirmation. Deletion is permanent.
async fn delete_link(service: &LinkService<PgLinkRepository>, id: i64, yes: bool) -> Result<()> {
    println!("{}", "🗑  Delete Link".bright_blue().bold());
    println!();

    let link = service.get_link(id).await.context("Link not found")?;
    print_link(&link);

    if !confirm("Delete this link permanently?", yes)? {
        println!("{}", "❌ Cancelled".red());
        return Ok(());
    }

    service
        .delete_link(id)
        .await
        .context("Failed to delete link")?;

    println!("{}", "✅ Link deleted".green().bold());
    println!();

    Ok(())
}

/// Resets a link's click counter to zero after confirmation.
async fn reset_clicks(service: &LinkService<PgLinkRepository>, id: i64, yes: bool) -> Result<()> {
    println!("{}", "♻️  Reset Clicks".bright_blue().bold());
    println!();

    let link = service.get_link(id).await.context("Link not found")?;
    print_link(&link);

    if !confirm("Reset the click counter to 0?", yes)? {
        println!("{}", "❌ Cancelled".red());
        return Ok(());
    }

    let patch = LinkPatch {
        clicks: Some(0),
        ..Default::default()
    };
    service
        .update_link(id, patch)
        .await
        .context("Failed to reset clicks")?;

    println!("{}", "✅ Click counter reset".green().bold());
    println!();

    Ok(())
}

/// Displays click statistics.
///
/// Shows the total and a per-link breakdown. The date filter applies only
/// when both `--from` and `--to` are given.
async fn handle_stats(pool: &PgPool, from: Option<String>, to: Option<String>) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let window = StatsQuery {
        start_date: from,
        end_date: to,
    }
    .window()
    .context("Invalid date range")?;

    let repo = Arc::new(PgStatsRepository::new(Arc::new(pool.clone())));
    let summary = StatsService::new(repo)
        .get_stats(window)
        .await
        .context("Failed to load statistics")?;

    if let Some(window) = window {
        println!(
            "  Created between {} and {}",
            window.start.format("%Y-%m-%d %H:%M").to_string().bright_white(),
            window.end.format("%Y-%m-%d %H:%M").to_string().bright_white()
        );
        println!();
    }

    for link in &summary.links {
        println!(
            "  {:<20} {}",
            link.name.cyan(),
            link.clicks.to_string().bright_green()
        );
    }

    if !summary.links.is_empty() {
        println!("  {}", "─".repeat(30).bright_black());
    }

    println!(
        "  {:<20} {}",
        "Total clicks".bright_white().bold(),
        summary.total_clicks.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;
            let links: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Links:      {}", links.to_string().bright_green());
            println!();
        }
    }

    Ok(())
}
