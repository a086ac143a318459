//! Config loading with graceful fallback.
//!
//! `load` reports every failure; `load_or_default` logs it and returns the
//! built-in defaults so rendering can always proceed.

use memento_core::Config;

use crate::error::{ConfigError, Result};
use crate::source::ConfigSource;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// TOML for `*.toml`, JSON otherwise.
    pub fn detect(source: &ConfigSource) -> Self {
        match source.file_name() {
            Some(name) if name.to_ascii_lowercase().ends_with(".toml") => ConfigFormat::Toml,
            _ => ConfigFormat::Json,
        }
    }
}

pub fn parse_config(text: &str, format: ConfigFormat) -> Result<Config> {
    let config = match format {
        ConfigFormat::Json => Config::from_json(text)?,
        ConfigFormat::Toml => toml::from_str(text)?,
    };
    Ok(config)
}

/// Reject configs the renderer cannot use. Malformed special-day patterns
/// only warn: they can never match, but they do not break anything.
pub fn validate(config: &Config) -> Result<()> {
    config
        .person
        .birthdate()
        .map_err(|e| ConfigError::InvalidData(format!("person.birthdate: {e}")))?;

    if config.person.expected_lifespan == 0 {
        return Err(ConfigError::InvalidData(
            "person.expectedLifespan must be positive".to_string(),
        ));
    }
    config
        .person
        .total_weeks()
        .map_err(|e| ConfigError::InvalidData(format!("person.expectedLifespan: {e}")))?;

    for day in &config.special_days {
        if !is_month_day(&day.date) {
            tracing::warn!(
                "special day '{}' has date '{}', expected MM-DD; it will never match",
                day.title,
                day.date
            );
        }
    }
    Ok(())
}

fn is_month_day(pattern: &str) -> bool {
    let Some((month, day)) = pattern.trim().split_once('-') else {
        return false;
    };
    let two_digits = |s: &str| s.len() == 2 && s.bytes().all(|b| b.is_ascii_digit());
    if !two_digits(month) || !two_digits(day) {
        return false;
    }
    match (month.parse::<usize>(), day.parse::<u32>()) {
        (Ok(month @ 1..=12), Ok(day)) => (1..=DAYS_IN_MONTH[month - 1]).contains(&day),
        _ => false,
    }
}

/// Longest month lengths; Feb 29 still matches in leap years.
const DAYS_IN_MONTH: [u32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

async fn fetch_text(source: &ConfigSource) -> Result<String> {
    match source {
        ConfigSource::File(path) => Ok(tokio::fs::read_to_string(path).await?),
        ConfigSource::Url(url) => {
            let response = reqwest::get(url.as_str()).await?.error_for_status()?;
            Ok(response.text().await?)
        }
    }
}

/// Read, parse and validate the config at `source`.
pub async fn load(source: &ConfigSource) -> Result<Config> {
    let text = fetch_text(source).await?;
    let config = parse_config(&text, ConfigFormat::detect(source))?;
    validate(&config)?;
    tracing::debug!(
        "config from {source}: birthdate={}, lifespan={}, special_days={}",
        config.person.birthdate,
        config.person.expected_lifespan,
        config.special_days.len()
    );
    Ok(config)
}

/// Like [`load`], but any failure falls back to defaults.
pub async fn load_or_default(source: &ConfigSource) -> Config {
    match load(source).await {
        Ok(config) => {
            tracing::info!("loaded config from {source}");
            config
        }
        Err(e) => {
            tracing::warn!("config {source} unavailable ({e}), using defaults");
            Config::default()
        }
    }
}
