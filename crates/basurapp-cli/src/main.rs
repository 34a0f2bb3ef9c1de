mod agenda;
mod geocode;
mod prefs;

use basurapp_core::LngLat;
use basurapp_store::{FileBackend, PreferenceStore};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::agenda::{AgendaCommands, NotificationCommands};
use crate::prefs::{AddressCommands, PrefsCommands};

#[derive(Debug, Parser)]
#[command(name = "basurapp")]
#[command(about = "Address validation and preferences for the collection-tracking app")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate a free-text address against the Santander coverage area
    Geocode {
        address: String,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Resolve "lng,lat" to a display name
    Reverse {
        #[arg(allow_hyphen_values = true)]
        coordinates: LngLat,
    },
    /// Print the normalized form of an address
    Normalize { address: String },
    /// Manage the saved collection address
    Address {
        #[command(subcommand)]
        command: AddressCommands,
    },
    /// Inspect or edit stored preferences
    Prefs {
        #[command(subcommand)]
        command: PrefsCommands,
    },
    /// Manage the personal agenda
    Agenda {
        #[command(subcommand)]
        command: AgendaCommands,
    },
    /// Manage stored notifications
    Notifications {
        #[command(subcommand)]
        command: NotificationCommands,
    },
}

/// Output for commands that run before configuration is loaded, so a bad
/// environment cannot break them.
fn config_free_output(command: &Commands) -> Option<String> {
    match command {
        Commands::Normalize { address } => Some(basurapp_geocoding::normalize_address(address)),
        _ => None,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(output) = config_free_output(&cli.command) {
        println!("{output}");
        return Ok(());
    }

    let config = basurapp_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(
        env = %config.env,
        data_dir = %config.data_dir.display(),
        provider_key = config.geocoder.api_key.is_some(),
        "configuration loaded"
    );

    let store = || PreferenceStore::new(FileBackend::new(&config.data_dir));

    match cli.command {
        Commands::Geocode { address, json } => geocode::run_geocode(&config, &address, json).await,
        Commands::Reverse { coordinates } => geocode::run_reverse(&config, coordinates).await,
        Commands::Normalize { .. } => Ok(()),
        Commands::Address { command } => prefs::run_address(&config, &store(), command).await,
        Commands::Prefs { command } => prefs::run_prefs(&store(), command),
        Commands::Agenda { command } => agenda::run_agenda(&store(), command),
        Commands::Notifications { command } => agenda::run_notifications(&store(), command),
    }
}
