//! CLI command definitions, routing, and tracing setup.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use gendercite_citations::{AuthorClient, CitationClient};
use gendercite_core::pipeline::{ProgressReporter, RunConfig, RunSummary};
use gendercite_gender::{Detector, GenderApiClient, GenderResolver};
use gendercite_shared::{AppConfig, init_config, load_api_key, load_config, load_config_from};
use gendercite_storage::{NameCache, ResultsTable};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// gendercite — citation-gender dataset collection.
#[derive(Parser)]
#[command(
    name = "gendercite",
    version,
    about = "Collect citing works for a set of seed DOIs and enrich them with guessed author genders.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Collect citations for the configured seeds and enrich the dataset.
    Run {
        /// Config file path (defaults to ~/.gendercite/gendercite.toml).
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Results table path, overriding the config value.
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Name cache path, overriding the config value.
        #[arg(long)]
        cache: Option<PathBuf>,

        /// API key file path, overriding the config value.
        #[arg(long)]
        key_file: Option<PathBuf>,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "gendercite=info",
        1 => "gendercite=debug",
        _ => "gendercite=trace",
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Run {
            config,
            out,
            cache,
            key_file,
        } => cmd_run(config, out, cache, key_file).await,
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init().await,
            ConfigAction::Show => cmd_config_show().await,
        },
    }
}

// ---------------------------------------------------------------------------
// run
// ---------------------------------------------------------------------------

async fn cmd_run(
    config_path: Option<PathBuf>,
    out: Option<PathBuf>,
    cache_path: Option<PathBuf>,
    key_file: Option<PathBuf>,
) -> Result<()> {
    let config = match config_path {
        Some(path) => load_config_from(&path)?,
        None => load_config()?,
    };

    let data_file = out.unwrap_or_else(|| PathBuf::from(&config.defaults.data_file));
    let cache_file = cache_path.unwrap_or_else(|| PathBuf::from(&config.defaults.name_cache));
    let key_file = key_file.unwrap_or_else(|| PathBuf::from(&config.defaults.api_key_file));

    // A missing key file disables the service fallback, nothing more.
    let service = match load_api_key(&key_file) {
        Some(key) => Some(GenderApiClient::new(config.endpoints.gender.as_str(), key)?),
        None => None,
    };

    let citations = CitationClient::new(config.endpoints.citations.as_str())?;
    let authors = AuthorClient::new(config.endpoints.works.as_str())?;
    let resolver = GenderResolver::new(Detector::new(), service);

    let mut cache = NameCache::load(&cache_file)?;
    let mut table = ResultsTable::load(&data_file)?;

    info!(
        seeds = config.seeds.len(),
        prior_rows = table.len(),
        cached_names = cache.len(),
        "starting collection run"
    );

    let run_config = RunConfig {
        seeds: config.seeds.clone(),
        data_file: data_file.clone(),
    };

    let reporter = CliProgress::new();
    let summary = gendercite_core::pipeline::run(
        &run_config,
        &citations,
        &authors,
        &resolver,
        &mut table,
        &mut cache,
        &reporter,
    )
    .await?;

    // Print summary
    println!();
    println!("  Collection run complete!");
    println!("  Citing works:   {} new rows", summary.first_hop_rows);
    println!("  References:     {} new rows", summary.second_hop_rows);
    println!("  Table total:    {} rows", summary.total_rows);
    println!("  Cached names:   {}", cache.len());
    println!("  Data:           {}", data_file.display());
    println!("  Time:           {:.1}s", summary.elapsed.as_secs_f64());
    println!();

    Ok(())
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// CLI progress reporter using an indicatif spinner with overwriting
/// status lines.
struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap()
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { spinner }
    }
}

impl ProgressReporter for CliProgress {
    fn phase(&self, name: &str) {
        self.spinner.set_message(name.to_string());
    }

    fn item(&self, current: usize, total: usize, detail: &str) {
        self.spinner
            .set_message(format!("DOI [{current}/{total}] {detail}"));
    }

    fn done(&self, _summary: &RunSummary) {
        self.spinner.finish_and_clear();
    }
}

// ---------------------------------------------------------------------------
// config
// ---------------------------------------------------------------------------

async fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

async fn cmd_config_show() -> Result<()> {
    let config: AppConfig = load_config()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}
