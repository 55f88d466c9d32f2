use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
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
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can drive it with a
/// plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let optional = |var: &str| -> Option<String> {
        lookup(var).ok().filter(|v| !v.trim().is_empty())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("WAYFARE_ENV", "development"));
    let log_level = or_default("WAYFARE_LOG_LEVEL", "info");
    let data_dir = PathBuf::from(or_default("WAYFARE_DATA_DIR", "./.wayfare"));
    let destinations_path = optional("WAYFARE_DESTINATIONS_PATH").map(PathBuf::from);

    // Checked when a client is built, so local-only commands still run.
    let api_base_url = or_default("WAYFARE_API_BASE_URL", "http://127.0.0.1:8000/api/v1");
    let api_key = optional("WAYFARE_API_KEY");
    let api_timeout_secs = parse_u64("WAYFARE_API_TIMEOUT_SECS", "30")?;
    let api_user_agent = or_default("WAYFARE_API_USER_AGENT", "wayfare/0.1 (trip-planner)");
    let api_max_retries = parse_u32("WAYFARE_API_MAX_RETRIES", "2")?;
    let api_retry_backoff_base_ms = parse_u64("WAYFARE_API_RETRY_BACKOFF_BASE_MS", "500")?;

    let synth_seed = optional("WAYFARE_SYNTH_SEED")
        .map(|raw| {
            raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
                var: "WAYFARE_SYNTH_SEED".to_string(),
                reason: e.to_string(),
            })
        })
        .transpose()?;

    Ok(AppConfig {
        env,
        log_level,
        data_dir,
        destinations_path,
        api_base_url,
        api_key,
        api_timeout_secs,
        api_user_agent,
        api_max_retries,
        api_retry_backoff_base_ms,
        synth_seed,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
