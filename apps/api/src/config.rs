use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Context, Result};

/// Application configuration loaded from environment variables.
/// Every setting has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Max records assembled concurrently within one batch request.
    pub batch_concurrency: usize,
    /// Max records accepted in one batch request.
    pub batch_max_records: usize,
    /// Per-record assembly timeout within a batch.
    pub assembly_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            batch_concurrency: 3,
            batch_max_records: 25,
            assembly_timeout: Duration::from_millis(5000),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        let batch_concurrency = parse_setting(
            "BATCH_CONCURRENCY",
            env("BATCH_CONCURRENCY"),
            defaults.batch_concurrency,
        )?;
        if batch_concurrency == 0 {
            bail!("BATCH_CONCURRENCY must be at least 1");
        }

        Ok(Config {
            port: parse_setting("PORT", env("PORT"), defaults.port)?,
            rust_log: env("RUST_LOG").unwrap_or(defaults.rust_log),
            batch_concurrency,
            batch_max_records: parse_setting(
                "BATCH_MAX_RECORDS",
                env("BATCH_MAX_RECORDS"),
                defaults.batch_max_records,
            )?,
            assembly_timeout: Duration::from_millis(parse_setting(
                "ASSEMBLY_TIMEOUT_MS",
                env("ASSEMBLY_TIMEOUT_MS"),
                5000u64,
            )?),
        })
    }
}

fn env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Parses `raw` if set, otherwise returns `default`.
fn parse_setting<T>(key: &str, raw: Option<String>, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("{e}"))
            .with_context(|| format!("{key} must be a valid value, got '{value}'")),
    }
}
