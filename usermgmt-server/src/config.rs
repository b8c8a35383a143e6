//! Database configuration loaded from the environment
//!
//! Every key must be present. `DB_PASSWORD` may be empty, in which case no
//! password is sent.

use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgSslMode};

/// Environment keys read by [`DbConfig::from_env`], in load order.
pub const REQUIRED_KEYS: [&str; 6] = [
    "DB_HOST",
    "DB_PORT",
    "DB_USER",
    "DB_PASSWORD",
    "DB_NAME",
    "DB_SSLMODE",
];

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {key}")]
    Missing { key: &'static str },

    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Database connection settings
#[derive(Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub host: String,
    pub port: String,
    pub user: String,
    pub password: String,
    pub name: String,
    pub sslmode: String,
}

impl std::fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .field("sslmode", &self.sslmode)
            .finish()
    }
}

impl DbConfig {
    /// Load from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary key lookup. Fails on the first absent key.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &'static str| lookup(key).ok_or(ConfigError::Missing { key });

        Ok(Self {
            host: get("DB_HOST")?,
            port: get("DB_PORT")?,
            user: get("DB_USER")?,
            password: get("DB_PASSWORD")?,
            name: get("DB_NAME")?,
            sslmode: get("DB_SSLMODE")?,
        })
    }

    /// Build sqlx connect options.
    ///
    /// # Errors
    ///
    /// `ConfigError::Invalid` if the port isn't a `u16` or the sslmode isn't
    /// one Postgres understands (`disable`, `allow`, `prefer`, `require`,
    /// `verify-ca`, `verify-full`).
    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        let port = self.port.parse::<u16>().map_err(|e| ConfigError::Invalid {
            key: "DB_PORT",
            reason: e.to_string(),
        })?;

        let ssl_mode = PgSslMode::from_str(&self.sslmode).map_err(|e| ConfigError::Invalid {
            key: "DB_SSLMODE",
            reason: e.to_string(),
        })?;

        let options = PgConnectOptions::new()
            .host(&self.host)
            .port(port)
            .username(&self.user)
            .database(&self.name)
            .ssl_mode(ssl_mode);

        if self.password.is_empty() {
            Ok(options)
        } else {
            Ok(options.password(&self.password))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn full_env() -> HashMap<&'static str, String> {
        [
            ("DB_HOST", "db.internal"),
            ("DB_PORT", "5433"),
            ("DB_USER", "app"),
            ("DB_PASSWORD", "secret"),
            ("DB_NAME", "users"),
            ("DB_SSLMODE", "disable"),
        ]
        .into_iter()
        .map(|(k, v)| (k, v.to_owned()))
        .collect()
    }

    #[test]
    fn loads_all_keys() {
        let env = full_env();
        let config = DbConfig::from_lookup(|k| env.get(k).cloned()).unwrap();
        assert_eq!(config.host, "db.internal");
        assert_eq!(config.port, "5433");
        assert_eq!(config.name, "users");
    }

    #[test]
    fn each_missing_key_is_reported() {
        for key in REQUIRED_KEYS {
            let mut env = full_env();
            env.remove(key);

            let err = DbConfig::from_lookup(|k| env.get(k).cloned()).unwrap_err();
            assert!(
                matches!(err, ConfigError::Missing { key: missing } if missing == key),
                "expected {key} to be reported missing, got {err}"
            );
        }
    }

    #[test]
    fn empty_password_is_allowed() {
        let mut env = full_env();
        env.insert("DB_PASSWORD", String::new());

        let config = DbConfig::from_lookup(|k| env.get(k).cloned()).unwrap();
        let options = config.connect_options().unwrap();
        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 5433);
        assert_eq!(options.get_username(), "app");
        assert_eq!(options.get_database(), Some("users"));
    }

    #[test]
    fn rejects_bad_port() {
        let mut env = full_env();
        env.insert("DB_PORT", "not-a-port".into());

        let config = DbConfig::from_lookup(|k| env.get(k).cloned()).unwrap();
        let err = config.connect_options().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "DB_PORT", .. }));
    }

    #[test]
    fn rejects_unknown_sslmode() {
        let mut env = full_env();
        env.insert("DB_SSLMODE", "sometimes".into());

        let config = DbConfig::from_lookup(|k| env.get(k).cloned()).unwrap();
        let err = config.connect_options().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "DB_SSLMODE", .. }));
    }

    #[test]
    fn debug_redacts_password() {
        let env = full_env();
        let config = DbConfig::from_lookup(|k| env.get(k).cloned()).unwrap();
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("secret"));
    }
}
