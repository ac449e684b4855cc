//! Configuration management for wordlens.
//!
//! Settings come from an optional `wordlens.toml` next to the working
//! directory, with every field defaulting sensibly; CLI flags and
//! environment variables override at the command layer.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Default language/script selector passed to the OCR engine.
pub const DEFAULT_LANGUAGES: &str = "chi_sim";

/// Default request body cap for uploads (16 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

const CONFIG_FILENAME: &str = "wordlens.toml";

/// Service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Bind host for the web server.
    pub host: String,
    /// Bind port for the web server.
    pub port: u16,
    /// Directory uploaded originals are stored under.
    pub upload_dir: PathBuf,
    /// Language/script selector for the OCR engine (`-l`).
    pub languages: String,
    /// Maximum accepted upload size in bytes.
    pub max_upload_bytes: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5001,
            upload_dir: PathBuf::from("uploads"),
            languages: DEFAULT_LANGUAGES.to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl Settings {
    /// Create the upload directory if it does not exist yet.
    pub fn ensure_upload_dir(&self) -> anyhow::Result<()> {
        std::fs::create_dir_all(&self.upload_dir).with_context(|| {
            format!(
                "failed to create upload directory {}",
                self.upload_dir.display()
            )
        })
    }
}

/// Load settings from an explicit config file, or from
/// `wordlens.toml` in the working directory when present, or
/// defaults otherwise.
///
/// An explicitly named file must exist and parse; the implicit one is
/// optional.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    match path {
        Some(path) => read_settings(path),
        None => {
            let implicit = Path::new(CONFIG_FILENAME);
            if implicit.exists() {
                read_settings(implicit)
            } else {
                Ok(Settings::default())
            }
        }
    }
}

fn read_settings(path: &Path) -> anyhow::Result<Settings> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("invalid config file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_sane() {
        let settings = Settings::default();
        assert_eq!(settings.port, 5001);
        assert_eq!(settings.languages, DEFAULT_LANGUAGES);
        assert_eq!(settings.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);
    }

    #[test]
    fn partial_config_file_fills_in_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port = 8080\nlanguages = \"eng\"").unwrap();

        let settings = load_settings(Some(file.path())).unwrap();
        assert_eq!(settings.port, 8080);
        assert_eq!(settings.languages, "eng");
        assert_eq!(settings.host, "127.0.0.1");
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        assert!(load_settings(Some(Path::new("/nonexistent/wordlens.toml"))).is_err());
    }
}
