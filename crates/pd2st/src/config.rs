use crate::prelude::{eprintln, *};
use serde::Deserialize;
use std::path::Path;

/// Shape of the secrets file. Other entries are ignored.
#[derive(Debug, Default, Deserialize)]
struct Secrets {
    api_key: Option<String>,
}

/// Values resolved once at process start and shared by every request.
#[derive(Clone)]
pub struct Settings {
    pub api_key: Option<String>,
    pub base_url: String,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Settings {
    /// Resolve the API key from the command line or environment, falling back to the secrets file.
    pub fn load(global: &crate::Global) -> Result<Self> {
        let api_key = match global.api_key.clone().filter(|key| !key.trim().is_empty()) {
            Some(key) => Some(key),
            None => read_secrets(&global.secrets)?,
        };

        if global.verbose {
            eprintln!("Base URL: {}", global.base_url);
            eprintln!(
                "API key: {}",
                if api_key.is_some() { "configured" } else { "missing" }
            );
        }

        Ok(Self {
            api_key,
            base_url: global.base_url.clone(),
        })
    }
}

/// Parse the `api_key` entry out of a TOML secrets document.
pub fn parse_secrets(text: &str) -> Result<Option<String>, toml::de::Error> {
    let secrets: Secrets = toml::from_str(text)?;
    Ok(secrets.api_key.filter(|key| !key.trim().is_empty()))
}

/// Read the secrets file. A file that does not exist simply yields no key.
pub fn read_secrets(path: &Path) -> Result<Option<String>> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("No secrets file at {}", path.display());
            return Ok(None);
        }
        Err(e) => {
            return Err(Error::Secrets {
                path: path.display().to_string(),
                message: e.to_string(),
            }
            .into())
        }
    };

    parse_secrets(&text).map_err(|e| {
        Error::Secrets {
            path: path.display().to_string(),
            message: e.to_string(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn global(api_key: Option<&str>, secrets: &Path) -> crate::Global {
        crate::Global {
            secrets: secrets.to_path_buf(),
            api_key: api_key.map(str::to_string),
            base_url: pd2st_core::convert::chat::BASE_URL.to_string(),
            verbose: false,
        }
    }

    #[test]
    fn test_parse_secrets_with_key() {
        let key = parse_secrets("api_key = \"gsk_abc\"\n").unwrap();
        assert_eq!(key.as_deref(), Some("gsk_abc"));
    }

    #[test]
    fn test_parse_secrets_ignores_other_entries() {
        let key = parse_secrets("other = 1\n\n[section]\nname = \"x\"\n").unwrap();
        assert_eq!(key, None);
    }

    #[test]
    fn test_parse_secrets_blank_key_is_absent() {
        assert_eq!(parse_secrets("api_key = \"  \"").unwrap(), None);
    }

    #[test]
    fn test_parse_secrets_rejects_invalid_toml() {
        assert!(parse_secrets("api_key = ").is_err());
    }

    #[test]
    fn test_missing_secrets_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let key = read_secrets(&dir.path().join("secrets.toml")).unwrap();
        assert_eq!(key, None);
    }

    #[test]
    fn test_read_secrets_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_key = \"from-file\"").unwrap();

        assert_eq!(
            read_secrets(file.path()).unwrap().as_deref(),
            Some("from-file")
        );
    }

    #[test]
    fn test_malformed_secrets_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_key = [").unwrap();

        let err = read_secrets(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read secrets file"));
    }

    #[test]
    fn test_flag_wins_over_secrets_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_key = \"from-file\"").unwrap();

        let settings = Settings::load(&global(Some("from-flag"), file.path())).unwrap();
        assert_eq!(settings.api_key.as_deref(), Some("from-flag"));
    }

    #[test]
    fn test_secrets_file_used_without_flag() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_key = \"from-file\"").unwrap();

        let settings = Settings::load(&global(None, file.path())).unwrap();
        assert_eq!(settings.api_key.as_deref(), Some("from-file"));
    }

    #[test]
    fn test_debug_redacts_key() {
        let settings = Settings {
            api_key: Some("gsk_secret".to_string()),
            base_url: "http://localhost".to_string(),
        };

        let debug = format!("{settings:?}");
        assert!(!debug.contains("gsk_secret"));
        assert!(debug.contains("<redacted>"));
    }
}
