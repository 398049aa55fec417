//! Configuration: API key, endpoint, model, database path and run options.
//!
//! **Interaction**: Used by `main` to build the gateway and the sink.
//! Loads from environment and CLI args via `Config::from_env_and_args`.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use content_graph::{GatewayConfig, DEFAULT_API_BASE, DEFAULT_MODEL, DEFAULT_TIMEOUT};

pub const DEFAULT_DB_PATH: &str = "data/content.db";
pub const DEFAULT_TIMEOUT_SECS: u64 = DEFAULT_TIMEOUT.as_secs();

/// CLI overrides. `None` falls back to the environment, then to the defaults.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub api_base: Option<String>,
    pub model: Option<String>,
    pub db_path: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
    pub dry_run: bool,
}

#[derive(Clone, Debug)]
pub struct Config {
    /// Empty only in dry-run mode.
    pub api_key: String,
    pub api_base: String,
    pub model: String,
    pub db_path: PathBuf,
    pub timeout: Duration,
    pub dry_run: bool,
}

impl Config {
    /// Resolves config from the process environment and CLI overrides. Caller should run
    /// `dotenv::dotenv().ok()` before this.
    pub fn from_env_and_args(overrides: Overrides) -> Result<Self> {
        Self::resolve(|key| std::env::var(key).ok(), overrides)
    }

    /// Same as `from_env_and_args` with an explicit variable lookup.
    pub fn resolve(lookup: impl Fn(&str) -> Option<String>, overrides: Overrides) -> Result<Self> {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_key = if overrides.dry_run {
            var("GROQ_API_KEY").unwrap_or_default()
        } else {
            lookup("GROQ_API_KEY")
                .context("GROQ_API_KEY not set (put it in .env or environment)")?;
            var("GROQ_API_KEY").context(
                "GROQ_API_KEY is empty (check .env: no spaces, whole key on one line)",
            )?
        };

        let api_base = overrides
            .api_base
            .or_else(|| var("GROQ_API_BASE"))
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let model = overrides
            .model
            .or_else(|| var("GROQ_MODEL"))
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let db_path = overrides
            .db_path
            .or_else(|| var("CONTENT_DB_PATH").map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH));
        let timeout_secs = overrides.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            anyhow::bail!("timeout must be at least one second");
        }

        Ok(Self {
            api_key,
            api_base,
            model,
            db_path,
            timeout: Duration::from_secs(timeout_secs),
            dry_run: overrides.dry_run,
        })
    }

    pub fn gateway_config(&self) -> GatewayConfig {
        GatewayConfig::new(self.api_key.clone())
            .with_base_url(self.api_base.clone())
            .with_model(self.model.clone())
            .with_timeout(self.timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let cfg = Config::resolve(env(&[("GROQ_API_KEY", " gsk-test ")]), Overrides::default())
            .unwrap();
        assert_eq!(cfg.api_key, "gsk-test");
        assert_eq!(cfg.api_base, DEFAULT_API_BASE);
        assert_eq!(cfg.model, DEFAULT_MODEL);
        assert_eq!(cfg.db_path, PathBuf::from(DEFAULT_DB_PATH));
        assert_eq!(cfg.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert!(!cfg.dry_run);
    }

    #[test]
    fn missing_or_blank_key_is_an_error() {
        let missing = Config::resolve(env(&[]), Overrides::default()).unwrap_err();
        assert!(missing.to_string().contains("not set"));
        let blank = Config::resolve(env(&[("GROQ_API_KEY", "  ")]), Overrides::default())
            .unwrap_err();
        assert!(blank.to_string().contains("empty"));
    }

    #[test]
    fn dry_run_needs_no_key() {
        let cfg = Config::resolve(
            env(&[]),
            Overrides {
                dry_run: true,
                ..Overrides::default()
            },
        )
        .unwrap();
        assert!(cfg.api_key.is_empty());
        assert!(cfg.dry_run);
    }

    #[test]
    fn cli_overrides_beat_environment() {
        let cfg = Config::resolve(
            env(&[
                ("GROQ_API_KEY", "k"),
                ("GROQ_MODEL", "env-model"),
                ("GROQ_API_BASE", "http://env"),
                ("CONTENT_DB_PATH", "/tmp/env.db"),
            ]),
            Overrides {
                model: Some("cli-model".into()),
                timeout_secs: Some(5),
                ..Overrides::default()
            },
        )
        .unwrap();
        assert_eq!(cfg.model, "cli-model");
        assert_eq!(cfg.api_base, "http://env");
        assert_eq!(cfg.db_path, PathBuf::from("/tmp/env.db"));
        assert_eq!(cfg.timeout, Duration::from_secs(5));
    }

    #[test]
    fn blank_environment_values_fall_back_to_defaults() {
        let cfg = Config::resolve(
            env(&[
                ("GROQ_API_KEY", "k"),
                ("GROQ_API_BASE", "  "),
                ("GROQ_MODEL", ""),
                ("CONTENT_DB_PATH", " "),
            ]),
            Overrides::default(),
        )
        .unwrap();
        assert_eq!(cfg.api_base, DEFAULT_API_BASE);
        assert_eq!(cfg.gateway_config().base_url, DEFAULT_API_BASE);
        assert_eq!(cfg.model, DEFAULT_MODEL);
        assert_eq!(cfg.db_path, PathBuf::from(DEFAULT_DB_PATH));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = Config::resolve(
            env(&[("GROQ_API_KEY", "k")]),
            Overrides {
                timeout_secs: Some(0),
                ..Overrides::default()
            },
        );
        assert!(err.is_err());
    }

    #[test]
    fn gateway_config_carries_resolved_values() {
        let cfg = Config::resolve(
            env(&[("GROQ_API_KEY", "k"), ("GROQ_API_BASE", "http://local/v1/")]),
            Overrides::default(),
        )
        .unwrap();
        let gw = cfg.gateway_config();
        assert_eq!(gw.api_key, "k");
        assert_eq!(gw.base_url, "http://local/v1");
        assert_eq!(gw.model, DEFAULT_MODEL);
    }
}
