use crate::app_config::{AppConfig, Environment, GeocoderSettings};
use crate::geo::LngLat;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a plain
/// `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("BASURAPP_ENV", "development"))?;
    let log_level = or_default("BASURAPP_LOG_LEVEL", "info");

    let api_key = lookup("MAPTILER_API_KEY")
        .ok()
        .filter(|k| !k.trim().is_empty());
    let base_url = or_default("BASURAPP_GEOCODER_BASE_URL", "https://api.maptiler.com/");
    let timeout_secs = parse_u64("BASURAPP_GEOCODER_TIMEOUT_SECS", "15")?;
    let user_agent = or_default(
        "BASURAPP_GEOCODER_USER_AGENT",
        "basurapp/0.1 (address-validation)",
    );
    let result_limit = parse_u32("BASURAPP_GEOCODER_RESULT_LIMIT", "15")?;
    if result_limit == 0 {
        return Err(invalid(
            "BASURAPP_GEOCODER_RESULT_LIMIT",
            "must be at least 1".to_string(),
        ));
    }
    let proximity = or_default("BASURAPP_GEOCODER_PROXIMITY", "-73.1198,7.1193")
        .parse::<LngLat>()
        .map_err(|e| invalid("BASURAPP_GEOCODER_PROXIMITY", e.to_string()))?;

    let data_dir = PathBuf::from(or_default("BASURAPP_DATA_DIR", "./.basurapp"));
    let reference_path = lookup("BASURAPP_REFERENCE_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    Ok(AppConfig {
        env,
        log_level,
        geocoder: GeocoderSettings {
            api_key,
            base_url,
            timeout_secs,
            user_agent,
            result_limit,
            proximity,
        },
        data_dir,
        reference_path,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "BASURAPP_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
