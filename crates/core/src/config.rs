//! `marketplace.toml` loading.
//!
//! Every key is optional. Unknown keys are reported with a `warn!` and, when
//! one is close enough, a suggestion for the intended key.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "marketplace.toml";

/// Listing API used when neither the config file nor the CLI names one.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

const KNOWN_CONFIG_KEYS: &[&str] =
    &["api_base_url", "port", "bind_all", "dist_dir", "request_timeout_secs"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("{key} in {} must be {expected}", path.display())]
    Type {
        path: PathBuf,
        key: &'static str,
        expected: &'static str,
    },
}

/// Server and client settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketplaceConfig {
    pub api_base_url: String,
    pub port: u16,
    pub bind_all: bool,
    pub dist_dir: PathBuf,
    pub request_timeout_secs: u64,
}

impl Default for MarketplaceConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE.to_string(),
            port: 3000,
            bind_all: false,
            dist_dir: PathBuf::from("dist"),
            request_timeout_secs: 10,
        }
    }
}

impl MarketplaceConfig {
    /// Load `path`, or `marketplace.toml` in the working directory when no
    /// path is given. A missing default file yields defaults; a missing
    /// explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::from_file(p),
            None => {
                let p = Path::new(CONFIG_FILE);
                if p.exists() {
                    Self::from_file(p)
                } else {
                    debug!("No {CONFIG_FILE}, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content, path)
    }

    fn from_toml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let table = content.parse::<toml::Table>().map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        let type_err = |key: &'static str, expected: &'static str| ConfigError::Type {
            path: path.to_path_buf(),
            key,
            expected,
        };

        for key in table.keys() {
            if KNOWN_CONFIG_KEYS.contains(&key.as_str()) {
                continue;
            }
            match closest_key(key) {
                Some(suggestion) => warn!(
                    key = key.as_str(),
                    suggestion,
                    "Unknown key in {CONFIG_FILE} — did you mean '{suggestion}'?"
                ),
                None => warn!(
                    key = key.as_str(),
                    "Unknown key in {CONFIG_FILE} (known keys: {})",
                    KNOWN_CONFIG_KEYS.join(", ")
                ),
            }
        }

        let mut config = Self::default();

        if let Some(v) = table.get("api_base_url") {
            let url = v.as_str().ok_or_else(|| type_err("api_base_url", "a string"))?;
            config.api_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(v) = table.get("port") {
            config.port = v
                .as_integer()
                .and_then(|n| u16::try_from(n).ok())
                .ok_or_else(|| type_err("port", "an integer in 0..=65535"))?;
        }
        if let Some(v) = table.get("bind_all") {
            config.bind_all = v.as_bool().ok_or_else(|| type_err("bind_all", "a boolean"))?;
        }
        if let Some(v) = table.get("dist_dir") {
            let dir = v.as_str().ok_or_else(|| type_err("dist_dir", "a string"))?;
            config.dist_dir = PathBuf::from(dir);
        }
        if let Some(v) = table.get("request_timeout_secs") {
            config.request_timeout_secs = v
                .as_integer()
                .and_then(|n| u64::try_from(n).ok())
                .filter(|&n| n > 0)
                .ok_or_else(|| type_err("request_timeout_secs", "a positive integer"))?;
        }

        Ok(config)
    }
}

/// Known key within edit distance 3 of `key`.
fn closest_key(key: &str) -> Option<&'static str> {
    KNOWN_CONFIG_KEYS
        .iter()
        .map(|k| (*k, edit_distance(key, k)))
        .min_by_key(|&(_, d)| d)
        .filter(|&(_, d)| d <= 3)
        .map(|(k, _)| k)
}

/// Levenshtein edit distance.
fn edit_distance(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(body: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(body.as_bytes()).unwrap();
        f
    }

    #[test]
    fn missing_keys_keep_defaults() {
        let f = write_config("port = 8080\n");
        let config = MarketplaceConfig::from_file(f.path()).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE);
        assert_eq!(config.request_timeout_secs, 10);
    }

    #[test]
    fn all_keys_parse() {
        let f = write_config(
            r#"
api_base_url = "https://api.example.com/v1/"
port = 4000
bind_all = true
dist_dir = "web/dist"
request_timeout_secs = 3
"#,
        );
        let config = MarketplaceConfig::from_file(f.path()).unwrap();
        assert_eq!(
            config,
            MarketplaceConfig {
                api_base_url: "https://api.example.com/v1".into(),
                port: 4000,
                bind_all: true,
                dist_dir: PathBuf::from("web/dist"),
                request_timeout_secs: 3,
            }
        );
    }

    #[test]
    fn wrong_type_is_an_error() {
        let f = write_config("port = \"eighty\"\n");
        let err = MarketplaceConfig::from_file(f.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Type { key: "port", .. }), "{err}");
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let err = MarketplaceConfig::load(Some(Path::new("/nonexistent/marketplace.toml")))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn unknown_key_is_not_fatal() {
        let f = write_config("prot = 1\napi_base_url = \"http://x\"\n");
        let config = MarketplaceConfig::from_file(f.path()).unwrap();
        assert_eq!(config.api_base_url, "http://x");
    }

    #[test]
    fn suggestions_for_typos() {
        assert_eq!(closest_key("prot"), Some("port"));
        assert_eq!(closest_key("bind_al"), Some("bind_all"));
        assert_eq!(closest_key("completely_unrelated"), None);
        assert_eq!(edit_distance("kitten", "sitting"), 3);
    }
}
