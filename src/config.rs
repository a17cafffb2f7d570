use std::env;
use std::str::FromStr;
use validator::Validate;

use crate::errors::AppError;

const DEFAULT_DATABASE_URL: &str = "sqlite:database.db";
const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone, Validate)]
pub struct AppConfig {
    #[validate(length(min = 1), custom = "validate_sqlite_url")]
    pub database_url: String,
    #[validate(length(min = 1))]
    pub bind_address: String,
    #[validate(range(min = 1))]
    pub port: u16,
    #[validate(range(min = 1, max = 64))]
    pub max_connections: u32,
}

fn validate_sqlite_url(url: &str) -> Result<(), validator::ValidationError> {
    if !url.starts_with("sqlite:") {
        return Err(validator::ValidationError::new("DATABASE_URL must start with 'sqlite:'"));
    }
    Ok(())
}

impl AppConfig {
    /// Reads the configuration from the environment. Call `dotenv()` first
    /// if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = AppConfig {
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            bind_address: lookup("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            port: parse_var(&lookup, "PORT", DEFAULT_PORT)?,
            max_connections: parse_var(&lookup, "DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
        };

        config
            .validate()
            .map_err(|err| AppError::ConfigError(err.to_string()))?;
        Ok(config)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T, AppError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::ConfigError(format!("{} has an invalid value: {}", key, raw))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, AppError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config.database_url, "sqlite:database.db");
        assert_eq!(config.bind_address, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.max_connections, 5);
    }

    #[test]
    fn values_are_read_from_environment() {
        let config = load(&[
            ("DATABASE_URL", "sqlite:/tmp/staff.db"),
            ("BIND_ADDRESS", "0.0.0.0"),
            ("PORT", "5000"),
            ("DATABASE_MAX_CONNECTIONS", "2"),
        ])
        .unwrap();
        assert_eq!(config.database_url, "sqlite:/tmp/staff.db");
        assert_eq!(config.bind_address, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert_eq!(config.max_connections, 2);
    }

    #[test]
    fn unparseable_port_is_rejected() {
        let err = load(&[("PORT", "http")]).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }

    #[test]
    fn zero_port_fails_validation() {
        assert!(matches!(load(&[("PORT", "0")]), Err(AppError::ConfigError(_))));
    }

    #[test]
    fn connection_limit_is_bounded() {
        assert!(load(&[("DATABASE_MAX_CONNECTIONS", "0")]).is_err());
        assert!(load(&[("DATABASE_MAX_CONNECTIONS", "65")]).is_err());
        assert!(load(&[("DATABASE_MAX_CONNECTIONS", "64")]).is_ok());
    }

    #[test]
    fn non_sqlite_url_is_rejected() {
        assert!(load(&[("DATABASE_URL", "postgres://localhost/db")]).is_err());
        assert!(load(&[("DATABASE_URL", "")]).is_err());
    }
}
