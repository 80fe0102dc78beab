//! Reading a hierarchy snapshot from disk.
//!
//! The format is picked from the file extension:
//!
//! | Extension        | Format |
//! |------------------|--------|
//! | `.json` / none   | JSON   |
//! | `.toml`          | TOML   |

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::MenuHierarchy;

/// Menu loading errors
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("IO error when reading menu `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid JSON in menu `{0}`")]
    Json(PathBuf, #[source] serde_json::Error),

    #[error("invalid TOML in menu `{0}`")]
    Toml(PathBuf, #[source] toml::de::Error),

    #[error("unsupported menu format `.{ext}` for `{path}` (expected .json or .toml)")]
    UnsupportedFormat { path: PathBuf, ext: String },
}

/// Menu file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuFormat {
    Json,
    Toml,
}

impl MenuFormat {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, MenuError> {
        match path.extension().and_then(|e| e.to_str()) {
            None => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            Some(ext) => Err(MenuError::UnsupportedFormat {
                path: path.to_path_buf(),
                ext: ext.to_string(),
            }),
        }
    }
}

/// Load a menu hierarchy from a file.
pub fn load(path: &Path) -> Result<MenuHierarchy, MenuError> {
    let format = MenuFormat::from_path(path)?;
    let content =
        fs::read_to_string(path).map_err(|err| MenuError::Io(path.to_path_buf(), err))?;
    parse(&content, format).map_err(|err| match err {
        ParseError::Json(e) => MenuError::Json(path.to_path_buf(), e),
        ParseError::Toml(e) => MenuError::Toml(path.to_path_buf(), e),
    })
}

/// Parse errors before a file path is attached.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

/// Parse a hierarchy from a string in the given format.
pub fn parse(content: &str, format: MenuFormat) -> Result<MenuHierarchy, ParseError> {
    match format {
        MenuFormat::Json => Ok(serde_json::from_str(content)?),
        MenuFormat::Toml => Ok(toml::from_str(content)?),
    }
}
