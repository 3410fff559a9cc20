mod cli_messages;
mod config;
mod consts;
mod data;
mod environment;
mod events;
mod export;
mod loading;
mod logging;
mod search;
mod session;
mod table;
mod ui;

use crate::config::{Config, get_config_path};
use crate::consts::cli_consts::table::DEFAULT_PAGE_SIZE;
use crate::data::fixtures::CAMPAIGN_TABLE;
use crate::environment::Environment;
use crate::session::{StartOptions, run_tui_mode, setup_session};
use crate::table::CampaignTable;
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the analytics dashboard in the terminal
    Start {
        /// Use the narrow layout with five rows per page.
        #[arg(long)]
        compact: bool,

        /// Disable background colors
        #[arg(long)]
        no_background_color: bool,

        /// Probability (0 to 1) that a simulated chart refresh fails.
        #[arg(long, value_name = "RATE", default_value_t = 0.0)]
        refresh_failure_rate: f64,

        /// Config file to read instead of ~/.analytics-dashboard/config.json
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
    },
    /// Write the campaign table to a dated CSV file without opening the UI
    Export {
        /// Only export campaigns whose name or status contains this text.
        #[arg(long, value_name = "QUERY")]
        query: Option<String>,

        /// Directory to write the CSV into; defaults to the configured export directory.
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// Config file to read instead of ~/.analytics-dashboard/config.json
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
    },
    /// Write a config file with default settings
    InitConfig {
        /// Where to write the file instead of ~/.analytics-dashboard/config.json
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let environment = Environment::from_env();
    let args = Args::parse();
    match args.command {
        Command::Start {
            compact,
            no_background_color,
            refresh_failure_rate,
            config,
        } => {
            let config_path = resolve_config_path(config)?;
            let config = load_config(&config_path)?;
            let options = StartOptions {
                compact,
                no_background_color,
                refresh_failure_rate,
            };
            let session = setup_session(config, environment, options)?;
            run_tui_mode(session).await
        }
        Command::Export {
            query,
            output_dir,
            config,
        } => {
            let config = load_config(&resolve_config_path(config)?)?;
            let output_dir = output_dir.unwrap_or_else(|| config.export_dir.clone());
            export_campaigns(query.as_deref().unwrap_or(""), &output_dir)
        }
        Command::InitConfig { config } => {
            let config_path = resolve_config_path(config)?;
            if config_path.exists() {
                print_cmd_warn!("Overwriting existing config", "{}", config_path.display());
            }
            Config::default().save(&config_path)?;
            print_cmd_success!("Config written", "{}", config_path.display());
            Ok(())
        }
    }
}

fn resolve_config_path(path: Option<PathBuf>) -> Result<PathBuf, std::io::Error> {
    match path {
        Some(path) => Ok(path),
        None => get_config_path(),
    }
}

/// Load the config file (or defaults when it is missing) and apply env overrides.
fn load_config(path: &Path) -> Result<Config, Box<dyn Error>> {
    match Config::load_or_default(path) {
        Ok(config) => Ok(config.with_env_overrides()),
        Err(e) => {
            print_cmd_error!(
                "Failed to load config",
                &format!("{}: {}", path.display(), e)
            );
            Err(e.into())
        }
    }
}

fn export_campaigns(query: &str, output_dir: &Path) -> Result<(), Box<dyn Error>> {
    let mut table = CampaignTable::new(CAMPAIGN_TABLE, DEFAULT_PAGE_SIZE);
    table.set_query(query);
    let rows = table.filtered();
    if !query.is_empty() {
        print_cmd_info!("Filtering campaigns", "{} of {} match {:?}", rows.len(), CAMPAIGN_TABLE.len(), query);
    }

    let today = chrono::Local::now().date_naive();
    match export::export_to_dir(output_dir, today, &rows) {
        Ok(path) => {
            print_cmd_success!("Exported campaigns", "{} rows to {}", rows.len(), path.display());
            Ok(())
        }
        Err(e) => {
            print_cmd_error!("Export failed", &e.to_string());
            Err(e.into())
        }
    }
}
