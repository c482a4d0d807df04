//! Startup configuration and log setup

use account_shared::config::{AppConfig, LoggingConfig};
use tracing_subscriber::EnvFilter;

/// Load `.env` (if present) and build the application configuration
pub fn load() -> AppConfig {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Failed to read .env file: {}", e);
        }
    }
    AppConfig::from_env()
}

/// Install the global tracing subscriber
///
/// `RUST_LOG` wins over the configured level when set.
pub fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);

    let result = if logging.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if let Err(e) = result {
        eprintln!("Tracing subscriber already installed: {}", e);
    }
}

/// Refuse to run production with the built-in refresh secret
///
/// Other environments only get a warning.
pub fn ensure_refresh_secret(config: &AppConfig) -> anyhow::Result<()> {
    if !config.jwt.is_using_default_secret() {
        return Ok(());
    }

    if config.environment.is_production() {
        anyhow::bail!("REFRESH_SECRET must be set in production");
    }

    tracing::warn!("REFRESH_SECRET is not set, using the development secret");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use account_shared::config::Environment;

    #[test]
    fn test_default_secret_rejected_in_production() {
        let config = AppConfig {
            environment: Environment::Production,
            ..AppConfig::default()
        };
        let err = ensure_refresh_secret(&config).unwrap_err();
        assert!(err.to_string().contains("REFRESH_SECRET"));
    }

    #[test]
    fn test_default_secret_allowed_in_development() {
        let config = AppConfig {
            environment: Environment::Development,
            ..AppConfig::default()
        };
        assert!(ensure_refresh_secret(&config).is_ok());
    }

    #[test]
    fn test_configured_secret_accepted_in_production() {
        let mut config = AppConfig {
            environment: Environment::Production,
            ..AppConfig::default()
        };
        config.jwt.refresh_secret = "a-real-secret-from-the-environment".to_string();
        assert!(ensure_refresh_secret(&config).is_ok());
    }
}
