use std::convert::Infallible;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Config location used when none is given.
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Where the config document comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Url(String),
}

impl ConfigSource {
    /// `http://` and `https://` locations are fetched; anything else is a path.
    pub fn parse(location: &str) -> Self {
        let trimmed = location.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            ConfigSource::Url(trimmed.to_string())
        } else {
            ConfigSource::File(PathBuf::from(trimmed))
        }
    }

    /// File name portion used for format detection.
    pub fn file_name(&self) -> Option<&str> {
        match self {
            ConfigSource::File(path) => path.file_name().and_then(|n| n.to_str()),
            ConfigSource::Url(url) => {
                let path = url.split(['?', '#']).next().unwrap_or(url);
                path.rsplit('/').next().filter(|s| !s.is_empty())
            }
        }
    }

    pub fn as_path(&self) -> Option<&Path> {
        match self {
            ConfigSource::File(path) => Some(path),
            ConfigSource::Url(_) => None,
        }
    }
}

impl Default for ConfigSource {
    fn default() -> Self {
        ConfigSource::File(PathBuf::from(DEFAULT_CONFIG_PATH))
    }
}

impl FromStr for ConfigSource {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Url(url) => f.write_str(url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kinds() {
        assert_eq!(
            ConfigSource::parse("config.json"),
            ConfigSource::File(PathBuf::from("config.json"))
        );
        assert_eq!(
            ConfigSource::parse("HTTPS://example.com/c.json"),
            ConfigSource::Url("HTTPS://example.com/c.json".to_string())
        );
        assert!(matches!(
            ConfigSource::parse("/etc/memento/config.toml"),
            ConfigSource::File(_)
        ));
    }

    #[test]
    fn test_file_name() {
        assert_eq!(
            ConfigSource::parse("dir/memento.toml").file_name(),
            Some("memento.toml")
        );
        assert_eq!(
            ConfigSource::parse("http://host/cfg/config.toml?v=2").file_name(),
            Some("config.toml")
        );
        assert_eq!(ConfigSource::parse("http://host/").file_name(), None);
    }

    #[test]
    fn test_default_is_config_json() {
        assert_eq!(ConfigSource::default().to_string(), "config.json");
        assert!(ConfigSource::default().as_path().is_some());
    }
}
