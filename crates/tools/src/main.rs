use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use content::{CachedSource, CmsConfig, ContentKind, FallbackPolicy, LocationRecord, fallback};
use journey::TourConfig;
use tools::HttpSource;
use tools::commands::{backfill_json, fetch_kind, load_site, render_tour_text, tour_frames};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "portfolio", version, about = "Portfolio content tooling")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fill in platform, video id and thumbnail on media items that predate them.
    Backfill {
        /// JSON array of media items.
        input: PathBuf,
        /// Write here instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Walk the journey tour and print every frame sent to the globe.
    Tour {
        /// JSON array of journey points.
        #[arg(required_unless_present = "fallback")]
        journey: Option<PathBuf>,
        /// Use the built-in journey instead of a file.
        #[arg(long, conflicts_with = "journey")]
        fallback: bool,
        /// Tour settings (JSON); missing fields take defaults.
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Fetch one content kind from the CMS and print the decoded records.
    Fetch {
        kind: ContentKind,
        #[command(flatten)]
        cms: CmsArgs,
    },
    /// Load the whole page content, applying fallbacks the way the site does.
    Site {
        #[command(flatten)]
        cms: CmsArgs,
    },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Debug, Args)]
struct CmsArgs {
    #[arg(long, env = "PORTFOLIO_CMS_SPACE")]
    space: Option<String>,
    #[arg(long, env = "PORTFOLIO_CMS_TOKEN", hide_env_values = true)]
    token: Option<String>,
    #[arg(long, env = "PORTFOLIO_CMS_ENVIRONMENT")]
    environment: Option<String>,
    #[arg(long, env = "PORTFOLIO_CMS_HOST")]
    host: Option<String>,
    /// Leave sections empty instead of using built-in content.
    #[arg(long)]
    no_fallback: bool,
}

impl CmsArgs {
    fn into_config(self) -> Result<CmsConfig> {
        let mut config = CmsConfig::from_env()?;
        if self.space.is_some() {
            config.space_id = self.space;
        }
        if self.token.is_some() {
            config.access_token = self.token;
        }
        if let Some(environment) = self.environment {
            config.environment = environment;
        }
        if let Some(host) = self.host {
            config.host = host;
        }
        if self.no_fallback {
            config.fallback = FallbackPolicy::Empty;
        }
        Ok(config)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Cli::parse()).await {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Backfill { input, out } => {
            let raw = fs::read_to_string(&input).with_context(|| format!("read {input:?}"))?;
            let (records, report) = backfill_json(&raw)?;
            for change in &report.changes {
                tracing::info!(
                    id = %change.id,
                    field = ?change.field,
                    value = %change.value,
                    "filled"
                );
            }
            for id in &report.unrecognized {
                tracing::warn!(%id, "no known platform for url");
            }
            tracing::info!(
                records = records.len(),
                changes = report.changes.len(),
                "backfill done"
            );
            let payload = serde_json::to_string_pretty(&records)?;
            emit(out, &payload)
        }
        Command::Tour {
            journey,
            fallback: use_fallback,
            config,
            format,
        } => {
            let records: Vec<LocationRecord> = match journey {
                Some(path) if !use_fallback => read_json(&path)?,
                _ => fallback::journey_points(),
            };
            let config: TourConfig = match config {
                Some(path) => read_json(&path)?,
                None => TourConfig::default(),
            };
            let frames = tour_frames(records, config)?;
            let payload = match format {
                Format::Text => render_tour_text(&frames),
                Format::Json => serde_json::to_string_pretty(&frames)?,
            };
            emit(None, &payload)
        }
        Command::Fetch { kind, cms } => {
            let source = HttpSource::new(cms.into_config()?)?;
            let value = fetch_kind(&source, kind).await?;
            emit(None, &serde_json::to_string_pretty(&value)?)
        }
        Command::Site { cms } => {
            let config = cms.into_config()?;
            if !config.is_remote_configured() {
                tracing::warn!("CMS credentials not set; every section will use its fallback");
            }
            let policy = config.fallback;
            let ttl = config.cache_ttl_secs;
            let source = CachedSource::new(HttpSource::new(config)?, ttl);
            let value = load_site(&source, policy).await?;
            emit(None, &serde_json::to_string_pretty(&value)?)
        }
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path).with_context(|| format!("read {path:?}"))?;
    serde_json::from_str(&raw).with_context(|| format!("parse {path:?}"))
}

fn emit(out: Option<PathBuf>, payload: &str) -> Result<()> {
    match out {
        Some(path) => fs::write(&path, payload).with_context(|| format!("write {path:?}")),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(payload.as_bytes())?;
            if !payload.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
            Ok(())
        }
    }
}
