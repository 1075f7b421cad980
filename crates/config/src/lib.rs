use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

const DEFAULT_CONFIG_FILES: &[&str] = &[
    "roster.toml",
    "config/roster.toml",
    "crates/config/roster.toml",
    "../roster.toml",
    "../config/roster.toml",
    "../crates/config/roster.toml",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub http: HttpConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            http: HttpConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    pub address: String,
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".to_string(),
            port: 7070,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://roster.db".to_string(),
            max_connections: 10,
        }
    }
}

/// JWT parameters for the bearer-authentication gate.
///
/// `secret` has no default: a process without a signing key must refuse to
/// start rather than serve with a guessable one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub secret: Option<String>,
    #[serde(default = "AuthConfig::default_issuer")]
    pub issuer: String,
    #[serde(default = "AuthConfig::default_audience")]
    pub audience: String,
    #[serde(default = "AuthConfig::default_token_ttl")]
    pub token_ttl_seconds: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            secret: None,
            issuer: Self::default_issuer(),
            audience: Self::default_audience(),
            token_ttl_seconds: Self::default_token_ttl(),
        }
    }
}

impl AuthConfig {
    fn default_issuer() -> String {
        "roster".to_string()
    }

    fn default_audience() -> String {
        "roster-clients".to_string()
    }

    const fn default_token_ttl() -> u64 {
        86_400
    }
}

/// Load the application configuration by combining defaults, files, and environment overrides.
///
/// Fails when no JWT signing key is configured: that is a startup-fatal
/// condition, never a per-request one.
pub fn load() -> anyhow::Result<AppConfig> {
    let defaults = AppConfig::default();

    let mut builder = config::Config::builder();
    builder = builder
        .set_default("http.address", defaults.http.address.clone())
        .unwrap()
        .set_default("http.port", i64::from(defaults.http.port))
        .unwrap()
        .set_default("database.url", defaults.database.url.clone())
        .unwrap()
        .set_default(
            "database.max_connections",
            i64::from(defaults.database.max_connections),
        )
        .unwrap()
        .set_default("auth.issuer", defaults.auth.issuer.clone())
        .unwrap()
        .set_default("auth.audience", defaults.auth.audience.clone())
        .unwrap()
        .set_default(
            "auth.token_ttl_seconds",
            i64::try_from(defaults.auth.token_ttl_seconds).unwrap_or(i64::MAX),
        )
        .unwrap();

    let environment_overrides = config::Environment::with_prefix("ROSTER")
        .prefix_separator("__")
        .separator("__");

    let mut config_file_attached = false;

    if let Ok(path) = std::env::var("ROSTER_CONFIG") {
        builder = builder.add_source(config::File::from(PathBuf::from(&path)));
        config_file_attached = true;
        debug!(path, "loading configuration via ROSTER_CONFIG");
    } else if let Ok(cwd) = std::env::current_dir() {
        let fallback = DEFAULT_CONFIG_FILES
            .iter()
            .map(|candidate| cwd.join(candidate))
            .find(|path| path.exists());

        if let Some(path) = fallback {
            debug!(path = %path.display(), "loading configuration file");
            builder = builder.add_source(config::File::from(path));
            config_file_attached = true;
        }
    }

    if !config_file_attached {
        debug!("no configuration file found, relying on defaults and environment overrides");
    }

    builder = builder.add_source(environment_overrides);

    let cfg = builder.build().context("unable to build configuration")?;

    let config = cfg
        .try_deserialize::<AppConfig>()
        .context("invalid configuration")?;

    if config
        .auth
        .secret
        .as_deref()
        .map_or(true, |secret| secret.trim().is_empty())
    {
        anyhow::bail!(
            "jwt signing key is not configured (set auth.secret or ROSTER__AUTH__SECRET)"
        );
    }

    debug!(
        address = %config.http.address,
        port = config.http.port,
        database = %config.database.url,
        "loaded backend configuration"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var("ROSTER_CONFIG");
        std::env::remove_var("ROSTER__AUTH__SECRET");
        std::env::remove_var("ROSTER__HTTP__PORT");
    }

    #[test]
    #[serial]
    fn load_fails_without_signing_key() {
        clear_env();

        let error = load().expect_err("missing signing key must be fatal");
        assert!(error.to_string().contains("signing key"));
    }

    #[test]
    #[serial]
    fn load_accepts_environment_overrides() {
        clear_env();
        std::env::set_var("ROSTER__AUTH__SECRET", "env-secret");
        std::env::set_var("ROSTER__HTTP__PORT", "9090");

        let config = load().expect("configuration should load");
        assert_eq!(config.auth.secret.as_deref(), Some("env-secret"));
        assert_eq!(config.http.port, 9090);
        assert_eq!(config.auth.issuer, "roster");
        assert_eq!(config.auth.audience, "roster-clients");

        clear_env();
    }

    #[test]
    #[serial]
    fn load_rejects_blank_signing_key() {
        clear_env();
        std::env::set_var("ROSTER__AUTH__SECRET", "   ");

        let error = load().expect_err("blank signing key must be fatal");
        assert!(error.to_string().contains("signing key"));

        clear_env();
    }
}
