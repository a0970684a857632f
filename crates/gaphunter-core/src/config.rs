use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

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
/// Decoupled from the real environment so it can be tested with a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    // Empty values count as unset so `GEMINI_API_KEY=` in a .env file does not
    // masquerade as a credential.
    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let or_default = |var: &str, default: &str| -> String {
        optional(var).unwrap_or_else(|| default.to_string())
    };

    let bind_addr = {
        let var = "GAPHUNTER_BIND_ADDR";
        or_default(var, "0.0.0.0:3000")
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })?
    };

    let gemini_timeout_secs = {
        let var = "GAPHUNTER_GEMINI_TIMEOUT_SECS";
        match optional(var) {
            None => None,
            Some(raw) => {
                let secs = raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
                    var: var.to_string(),
                    reason: e.to_string(),
                })?;
                if secs == 0 {
                    return Err(ConfigError::InvalidEnvVar {
                        var: var.to_string(),
                        reason: "timeout must be greater than zero".to_string(),
                    });
                }
                Some(secs)
            }
        }
    };

    let env = parse_environment(&or_default("GAPHUNTER_ENV", "development"));
    let log_level = or_default("GAPHUNTER_LOG_LEVEL", "info");
    let gemini_api_key = optional("GEMINI_API_KEY").or_else(|| optional("API_KEY"));
    let gemini_model = or_default("GAPHUNTER_GEMINI_MODEL", DEFAULT_GEMINI_MODEL);
    let gemini_base_url = or_default("GAPHUNTER_GEMINI_BASE_URL", DEFAULT_GEMINI_BASE_URL);
    let demo_path = optional("GAPHUNTER_DEMO_PATH").map(PathBuf::from);

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        gemini_api_key,
        gemini_model,
        gemini_base_url,
        gemini_timeout_secs,
        demo_path,
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
