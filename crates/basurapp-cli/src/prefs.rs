//! Address and preference command handlers.

use basurapp_core::AppConfig;
use basurapp_geocoding::Geocoder;
use basurapp_store::{KeyValueBackend, PreferenceStore, StoreError};
use clap::{ArgAction, Subcommand};

use crate::geocode::{build_geocoder, format_result};

#[derive(Debug, Subcommand)]
pub enum AddressCommands {
    /// Show the saved address
    Show,
    /// Validate an address and save it when accepted
    Set { address: String },
    /// Remove the saved address
    Clear,
}

#[derive(Debug, Subcommand)]
pub enum PrefsCommands {
    /// Print the stored preference document as JSON
    Show,
    /// Delete the stored preference document (the saved address is kept)
    Clear,
    /// Store the account email and display name
    User {
        email: String,
        #[arg(long)]
        name: Option<String>,
    },
    /// Turn collection notifications on or off
    Notify {
        #[arg(action = ArgAction::Set)]
        enabled: bool,
    },
}

/// Read paths degrade to defaults when storage is unavailable; the failure
/// is logged rather than surfaced.
pub(crate) fn or_default_logged<T: Default>(result: Result<T, StoreError>, what: &str) -> T {
    result.unwrap_or_else(|error| {
        tracing::warn!(%error, what, "preference store unavailable, using defaults");
        T::default()
    })
}

pub(crate) async fn run_address<B: KeyValueBackend>(
    config: &AppConfig,
    store: &PreferenceStore<B>,
    command: AddressCommands,
) -> anyhow::Result<()> {
    match command {
        AddressCommands::Show => {
            match or_default_logged(store.user_address(), "user address") {
                Some(address) => println!("{address}"),
                None => println!("no address saved"),
            }
            Ok(())
        }
        AddressCommands::Set { address } => {
            let geocoder = build_geocoder(config)?;
            let result = geocoder.geocode(&address).await;
            print!("{}", format_result(&result));
            if !result.is_valid {
                anyhow::bail!("address was not accepted; nothing saved");
            }
            store.save_user_address(&result.formatted_address)?;
            tracing::info!(address = %result.formatted_address, "saved user address");
            Ok(())
        }
        AddressCommands::Clear => {
            store.clear_user_address()?;
            tracing::info!("cleared user address");
            Ok(())
        }
    }
}

pub(crate) fn run_prefs<B: KeyValueBackend>(
    store: &PreferenceStore<B>,
    command: PrefsCommands,
) -> anyhow::Result<()> {
    match command {
        PrefsCommands::Show => {
            let data = or_default_logged(store.data(), "preference document");
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
        PrefsCommands::Clear => {
            store.clear_data()?;
            tracing::info!("cleared preference document");
        }
        PrefsCommands::User { email, name } => {
            store.save_user_data(&email, name.as_deref())?;
            tracing::info!(%email, "saved user data");
        }
        PrefsCommands::Notify { enabled } => {
            store.save_notification_setting(enabled)?;
            tracing::info!(enabled, "saved notification setting");
        }
    }
    Ok(())
}
