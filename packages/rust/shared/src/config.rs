//! Application configuration for gendercite.
//!
//! User config lives at `~/.gendercite/gendercite.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GenderciteError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "gendercite.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".gendercite";

// ---------------------------------------------------------------------------
// Config structs (matching gendercite.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Output and cache file paths.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// External service base URLs.
    #[serde(default)]
    pub endpoints: EndpointsConfig,

    /// Seed works whose citation graphs are collected.
    #[serde(default = "default_seeds")]
    pub seeds: Vec<Seed>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: DefaultsConfig::default(),
            endpoints: EndpointsConfig::default(),
            seeds: default_seeds(),
        }
    }
}

/// `[defaults]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Results table (CSV) path.
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Name→gender cache (JSON) path.
    #[serde(default = "default_name_cache")]
    pub name_cache: String,

    /// Plain-text file holding the gender-service API key. Optional: a
    /// missing file disables the service fallback, it is not an error.
    #[serde(default = "default_api_key_file")]
    pub api_key_file: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            name_cache: default_name_cache(),
            api_key_file: default_api_key_file(),
        }
    }
}

fn default_data_file() -> String {
    "data/citing_papers.csv".into()
}
fn default_name_cache() -> String {
    "data/name_cache.json".into()
}
fn default_api_key_file() -> String {
    "gender_api_key.txt".into()
}

/// `[endpoints]` section. Overridable so tests can point at mock servers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointsConfig {
    /// Citation index (OpenCitations COCI) base URL.
    #[serde(default = "default_citations_url")]
    pub citations: String,

    /// Bibliographic metadata (Crossref) base URL.
    #[serde(default = "default_works_url")]
    pub works: String,

    /// Gender inference service base URL.
    #[serde(default = "default_gender_url")]
    pub gender: String,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            citations: default_citations_url(),
            works: default_works_url(),
            gender: default_gender_url(),
        }
    }
}

fn default_citations_url() -> String {
    "https://opencitations.net/index/coci/api/v1".into()
}
fn default_works_url() -> String {
    "https://api.crossref.org".into()
}
fn default_gender_url() -> String {
    "https://gender-api.com".into()
}

/// `[[seeds]]` entry — one named work whose citing papers are collected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seed {
    /// Short entity name used in provenance tags (e.g. "paper").
    pub entity: String,
    /// The work's DOI.
    pub doi: String,
}

/// The default seed trio: the published paper, its preprint, and the
/// archived code artifact.
fn default_seeds() -> Vec<Seed> {
    vec![
        Seed {
            entity: "paper".into(),
            doi: "10.1038/s41593-020-0658-y".into(),
        },
        Seed {
            entity: "preprint".into(),
            doi: "10.1101/2020.01.03.894378".into(),
        },
        Seed {
            entity: "code".into(),
            doi: "10.5281/zenodo.3672109".into(),
        },
    ]
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.gendercite/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| GenderciteError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.gendercite/gendercite.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| GenderciteError::io(path, e))?;

    toml::from_str(&content).map_err(|e| {
        GenderciteError::config(format!("failed to parse {}: {e}", path.display()))
    })
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| GenderciteError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| GenderciteError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| GenderciteError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}

/// Read the gender-service API key from the configured file.
///
/// A missing file is a normal startup condition: the service fallback is
/// disabled for the run and a notice is logged.
pub fn load_api_key(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let key = content.trim().to_string();
            if key.is_empty() {
                tracing::info!(?path, "API key file is empty, gender service disabled");
                None
            } else {
                Some(key)
            }
        }
        Err(_) => {
            tracing::info!(?path, "no API key file found, gender service disabled");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize default config");
        assert!(toml_str.contains("data_file"));
        assert!(toml_str.contains("opencitations.net"));
    }

    #[test]
    fn config_roundtrip() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize");
        let parsed: AppConfig = toml::from_str(&toml_str).expect("deserialize");
        assert_eq!(parsed.seeds.len(), 3);
        assert_eq!(parsed.endpoints.works, "https://api.crossref.org");
    }

    #[test]
    fn default_seed_trio() {
        let config = AppConfig::default();
        let entities: Vec<&str> = config.seeds.iter().map(|s| s.entity.as_str()).collect();
        assert_eq!(entities, vec!["paper", "preprint", "code"]);
        assert_eq!(config.seeds[0].doi, "10.1038/s41593-020-0658-y");
    }

    #[test]
    fn config_with_custom_seeds() {
        let toml_str = r#"
[defaults]
data_file = "/tmp/out.csv"

[[seeds]]
entity = "paper"
doi = "10.1234/example"
"#;
        let config: AppConfig = toml::from_str(toml_str).expect("parse");
        assert_eq!(config.seeds.len(), 1);
        assert_eq!(config.seeds[0].doi, "10.1234/example");
        assert_eq!(config.defaults.data_file, "/tmp/out.csv");
    }

    #[test]
    fn missing_api_key_file_is_none() {
        let path = std::env::temp_dir().join("gendercite-no-such-key-file.txt");
        assert!(load_api_key(&path).is_none());
    }

    #[test]
    fn api_key_file_is_trimmed() {
        let path = std::env::temp_dir().join("gendercite-key-test.txt");
        std::fs::write(&path, "abc123\n").unwrap();
        assert_eq!(load_api_key(&path).as_deref(), Some("abc123"));
        let _ = std::fs::remove_file(&path);
    }
}
