//! Configuration loading from the process environment.

use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid {expected}: '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Admin authentication settings; present only when an admin password is configured.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthSettings {
    pub admin_password: String,
    pub jwt_secret: String,
    /// Whether `jwt_secret` was generated for this process (tokens die with it).
    pub ephemeral_secret: bool,
    pub token_ttl: chrono::Duration,
}

impl core::fmt::Debug for AuthSettings {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AuthSettings")
            .field("ephemeral_secret", &self.ephemeral_secret)
            .field("token_ttl", &self.token_ttl)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Postgres URL; `None` selects the in-memory store.
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    /// `None` disables admin auth entirely.
    pub auth: Option<AuthSettings>,
    pub request_timeout: Duration,
}

const DEFAULT_BIND: &str = "0.0.0.0:3000";
/// Thirty days.
const MAX_TOKEN_TTL_MINUTES: i64 = 43_200;

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source (tests pass a map).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let mut bind_addr: SocketAddr = parse(
            "HOTEL_BIND_ADDR",
            "socket address",
            get("HOTEL_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND.to_string()),
        )?;
        if let Some(port) = get("PORT") {
            bind_addr.set_port(parse("PORT", "port number", port)?);
        }

        let db_max_connections = match get("HOTEL_DB_MAX_CONNECTIONS") {
            Some(v) => parse("HOTEL_DB_MAX_CONNECTIONS", "connection count", v)?,
            None => 10,
        };

        let request_timeout = match get("HOTEL_REQUEST_TIMEOUT_SECS") {
            Some(v) => Duration::from_secs(parse("HOTEL_REQUEST_TIMEOUT_SECS", "number of seconds", v)?),
            None => Duration::from_secs(30),
        };

        let auth = match get("HOTEL_ADMIN_PASSWORD") {
            None => None,
            Some(admin_password) => {
                let token_ttl = match get("HOTEL_TOKEN_TTL_MINUTES") {
                    Some(v) => parse_token_ttl(v)?,
                    None => chrono::Duration::minutes(480),
                };
                let (jwt_secret, ephemeral_secret) = match get("HOTEL_JWT_SECRET") {
                    Some(secret) => (secret, false),
                    None => (uuid::Uuid::new_v4().simple().to_string(), true),
                };
                Some(AuthSettings {
                    admin_password,
                    jwt_secret,
                    ephemeral_secret,
                    token_ttl,
                })
            }
        };

        Ok(Self {
            bind_addr,
            database_url: get("DATABASE_URL"),
            db_max_connections,
            auth,
            request_timeout,
        })
    }
}

fn parse<T: core::str::FromStr>(var: &'static str, expected: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::Invalid { var, expected, value })
}

/// Token lifetime in minutes, between one minute and thirty days.
fn parse_token_ttl(value: String) -> Result<chrono::Duration, ConfigError> {
    const VAR: &str = "HOTEL_TOKEN_TTL_MINUTES";
    const EXPECTED: &str = "number of minutes between 1 and 43200";

    let minutes: i64 = parse(VAR, EXPECTED, value.clone())?;
    (1..=MAX_TOKEN_TTL_MINUTES)
        .contains(&minutes)
        .then(|| chrono::Duration::try_minutes(minutes))
        .flatten()
        .ok_or(ConfigError::Invalid {
            var: VAR,
            expected: EXPECTED,
            value,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let map: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        AppConfig::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn defaults_select_in_memory_and_open_auth() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.bind_addr, "0.0.0.0:3000".parse().unwrap());
        assert_eq!(cfg.database_url, None);
        assert_eq!(cfg.db_max_connections, 10);
        assert_eq!(cfg.auth, None);
        assert_eq!(cfg.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn port_overrides_bind_port() {
        let cfg = config(&[("HOTEL_BIND_ADDR", "127.0.0.1:8000"), ("PORT", "9090")]).unwrap();
        assert_eq!(cfg.bind_addr, "127.0.0.1:9090".parse().unwrap());
    }

    #[test]
    fn admin_password_enables_auth_with_generated_secret() {
        let cfg = config(&[("HOTEL_ADMIN_PASSWORD", "letmein")]).unwrap();
        let auth = cfg.auth.unwrap();
        assert_eq!(auth.admin_password, "letmein");
        assert!(auth.ephemeral_secret);
        assert_eq!(auth.jwt_secret.len(), 32);
        assert_eq!(auth.token_ttl, chrono::Duration::minutes(480));
    }

    #[test]
    fn explicit_secret_and_ttl() {
        let cfg = config(&[
            ("HOTEL_ADMIN_PASSWORD", "letmein"),
            ("HOTEL_JWT_SECRET", "shh"),
            ("HOTEL_TOKEN_TTL_MINUTES", "15"),
        ])
        .unwrap();
        let auth = cfg.auth.unwrap();
        assert_eq!(auth.jwt_secret, "shh");
        assert!(!auth.ephemeral_secret);
        assert_eq!(auth.token_ttl, chrono::Duration::minutes(15));
    }

    #[test]
    fn blank_values_count_as_unset() {
        let cfg = config(&[("DATABASE_URL", "  "), ("HOTEL_ADMIN_PASSWORD", "")]).unwrap();
        assert_eq!(cfg.database_url, None);
        assert_eq!(cfg.auth, None);
    }

    #[test]
    fn invalid_numbers_are_reported() {
        let err = config(&[("HOTEL_DB_MAX_CONNECTIONS", "many")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                var: "HOTEL_DB_MAX_CONNECTIONS",
                expected: "connection count",
                value: "many".to_string(),
            }
        );
        assert!(config(&[("HOTEL_BIND_ADDR", "nowhere")]).is_err());
    }

    #[test]
    fn token_ttl_must_be_within_range() {
        for bad in ["0", "-5", "43201", "9223372036854775807", "soon"] {
            let err = config(&[("HOTEL_ADMIN_PASSWORD", "letmein"), ("HOTEL_TOKEN_TTL_MINUTES", bad)])
                .unwrap_err();
            assert!(
                matches!(err, ConfigError::Invalid { var: "HOTEL_TOKEN_TTL_MINUTES", .. }),
                "{bad}: {err:?}"
            );
        }

        let cfg = config(&[("HOTEL_ADMIN_PASSWORD", "letmein"), ("HOTEL_TOKEN_TTL_MINUTES", "43200")])
            .unwrap();
        assert_eq!(cfg.auth.unwrap().token_ttl, chrono::Duration::days(30));
    }
}
