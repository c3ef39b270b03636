//! CLI Module for snix-launcher
//! Parses the launcher's arguments, runs the fetch → join → filter pipeline
//! and writes the result either as Alfred JSON or as a readable listing.

pub mod print;

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use crate::api::{Dataset, SnippetClient};
use crate::config::Config;
use crate::enrich::enrich_snippets;
use crate::launcher::{Feedback, build_items};
use crate::search::{Query, filter_items};

#[derive(Debug, Parser)]
#[command(
    name = "snix-launcher",
    version,
    about = "Search massCode snippets from Alfred"
)]
pub struct Cli {
    /// Launcher query. Prefix with `f ` to search folders or `t ` to search tags.
    #[arg(allow_hyphen_values = true)]
    pub query: Option<String>,

    /// Config file (defaults to <config dir>/snix-launcher/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// massCode API root, overrides the config file and environment
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Alfred)]
    pub format: OutputFormat,

    /// Log pipeline details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Alfred Script Filter JSON
    Alfred,
    /// Colored listing for terminals
    Text,
}

impl Cli {
    /// Config file, then environment, then `--base-url`.
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = Config::load(self.config.as_deref())
            .context("Failed to load configuration")?
            .with_env_overrides(|key| std::env::var(key).ok());

        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        Ok(config)
    }
}

/// Runs one launcher query end to end.
pub async fn execute(cli: Cli) -> Result<()> {
    let config = cli.resolve_config()?;
    let query = Query::parse(cli.query.as_deref().unwrap_or_default());
    tracing::debug!(mode = ?query.mode, text = %query.text, base_url = %config.base_url, "running query");

    let client = SnippetClient::new(&config)?;
    let dataset = client
        .fetch_all()
        .await
        .context("Failed to load snippets from massCode")?;

    let feedback = build_feedback(&dataset, &query, &config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Alfred => feedback
            .write_json(&mut out)
            .context("Failed to write launcher feedback")?,
        OutputFormat::Text => {
            print::configure_color(out.is_terminal());
            print::print_items(&mut out, &feedback, &query).context("Failed to write listing")?
        }
    }
    out.flush().context("Failed to flush stdout")?;

    Ok(())
}

/// Join, build items and filter. No I/O.
pub fn build_feedback(dataset: &Dataset, query: &Query, config: &Config) -> Result<Feedback> {
    let enriched = enrich_snippets(&dataset.snippets, &dataset.tags, &dataset.folders)
        .context("Failed to resolve snippet folders")?;
    let items = build_items(&enriched, query.mode, config);

    Ok(Feedback {
        items: filter_items(items, &query.text),
    })
}
