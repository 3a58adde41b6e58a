//! Portfolio renderer binary.
//!
//! # Usage
//!
//! ```bash
//! # Serve the portfolio (default)
//! portfolio-render
//! portfolio-render serve
//!
//! # Render the page once and write it to a file
//! portfolio-render render --output portfolio.html
//! ```
//!
//! Configuration comes from environment variables, optionally loaded from a
//! `.env` file. See [`portfolio_render::config`].

use portfolio_render::application::PortfolioLoader;
use portfolio_render::config::{self, Config};
use portfolio_render::domain::repositories::PortfolioRepository;
use portfolio_render::infrastructure::api::HttpPortfolioRepository;
use portfolio_render::server;
use portfolio_render::web::handlers::build_page;

use anyhow::{Context, Result};
use askama::Template;
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Server-side renderer for a personal portfolio.
#[derive(Parser)]
#[command(name = "portfolio-render")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the portfolio over HTTP (default)
    Serve,

    /// Run one load pass and write the rendered page to a file
    Render {
        /// Destination file
        #[arg(short, long, default_value = "portfolio.html")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    init_tracing(&config)?;
    config.print_summary();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => server::run(config).await,
        Commands::Render { output } => render_to_file(config, output).await,
    }
}

/// Installs the global tracing subscriber.
fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("Invalid RUST_LOG filter '{}'", config.log_level))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = if config.log_format == "json" {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))
}

/// Renders the portfolio once and writes it to `output`.
async fn render_to_file(config: Config, output: PathBuf) -> Result<()> {
    let repository: Arc<dyn PortfolioRepository> = Arc::new(
        HttpPortfolioRepository::from_config(&config).context("Failed to build HTTP client")?,
    );
    let loader = PortfolioLoader::from_config(repository, &config);

    println!("{}", "Rendering portfolio...".bold());
    println!("  API: {}", config.api_base_url.cyan());

    let html = build_page(&loader)
        .await?
        .render()
        .context("Failed to render page")?;

    std::fs::write(&output, &html)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "{} Wrote {} ({} bytes)",
        "✓".green().bold(),
        output.display().to_string().yellow(),
        html.len()
    );

    Ok(())
}
