//! Reading recipe documents from disk or stdin.
//!
//! The format is picked from the file extension: `.toml` is TOML, anything
//! else (and stdin, `-`) is JSON. Both are parsed into the core's
//! loosely-typed [`Value`]; whether the top level is a mapping is the core's
//! call, not ours.

use std::io::Read as _;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use recipebox_core::domain::Value;

use crate::error::{CliError, CliResult};

/// Path that means "read stdin".
pub const STDIN_PATH: &str = "-";

/// Supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Toml,
}

impl DocumentFormat {
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Toml => "TOML",
        }
    }

    pub fn parse(self, path: &Path, text: &str) -> CliResult<Value> {
        let parsed: Result<Value, Box<dyn std::error::Error + Send + Sync>> = match self {
            Self::Json => serde_json::from_str(text).map_err(Into::into),
            Self::Toml => toml::from_str(text).map_err(Into::into),
        };
        parsed.map_err(|source| CliError::DocumentParse {
            path: path.to_path_buf(),
            format: self.as_str(),
            source,
        })
    }
}

/// Load and parse a recipe document.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load(path: &Path) -> CliResult<Value> {
    let format = DocumentFormat::for_path(path);
    let text = read_text(path)?;
    debug!(bytes = text.len(), format = format.as_str(), "Read recipe document");
    format.parse(path, &text)
}

fn read_text(path: &Path) -> CliResult<String> {
    if path.as_os_str() == STDIN_PATH {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| CliError::IoError {
                message: "Failed to read recipe from stdin".into(),
                source: e,
            })?;
        return Ok(buf);
    }

    if !path.exists() {
        return Err(CliError::DocumentNotFound {
            path: PathBuf::from(path),
        });
    }

    std::fs::read_to_string(path).map_err(|e| CliError::IoError {
        message: format!("Failed to read '{}'", path.display()),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn format_from_extension() {
        assert_eq!(DocumentFormat::for_path(Path::new("cake.toml")), DocumentFormat::Toml);
        assert_eq!(DocumentFormat::for_path(Path::new("CAKE.TOML")), DocumentFormat::Toml);
        assert_eq!(DocumentFormat::for_path(Path::new("cake.json")), DocumentFormat::Json);
        assert_eq!(DocumentFormat::for_path(Path::new("cake")), DocumentFormat::Json);
        assert_eq!(DocumentFormat::for_path(Path::new("-")), DocumentFormat::Json);
    }

    #[test]
    fn parses_toml_into_value() {
        let text = "name = \"Cake\"\nIngredients = [\"Flour\", \"Sugar\"]\n\"Cooking Time\" = 75\n";
        let value = DocumentFormat::Toml.parse(Path::new("cake.toml"), text).unwrap();
        let map = value.as_map().unwrap();
        assert_eq!(map.get("Cooking Time"), Some(&Value::Number(75.0)));
        assert_eq!(map.get("name"), Some(&Value::from("Cake")));
    }

    #[test]
    fn bad_json_is_parse_error() {
        let err = DocumentFormat::Json
            .parse(Path::new("cake.json"), "{\"name\": ")
            .unwrap_err();
        assert!(matches!(err, CliError::DocumentParse { format: "JSON", .. }));
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, CliError::DocumentNotFound { .. }));
    }

    #[test]
    fn loads_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"name": "Toast", "Cooking Time": 4}}"#).unwrap();
        let value = load(file.path()).unwrap();
        assert_eq!(
            value.as_map().unwrap().get("Cooking Time"),
            Some(&Value::Number(4.0))
        );
    }
}
