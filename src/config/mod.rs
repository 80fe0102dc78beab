//! Configuration management for `navcrumb.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section    # [menu], [breadcrumb], [host]
//! ├── error      # ConfigError, ConfigDiagnostics
//! ├── handle     # Global config handle (arc-swap)
//! ├── util       # Config file discovery
//! └── mod.rs     # NavcrumbConfig (this file)
//! ```
//!
//! A config file is optional. Without one, the built-in hierarchy is used
//! with no truncation and no host overrides.

mod error;
mod handle;
mod section;
mod util;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError};
pub use handle::{Reload, cfg, init_config, reload_config};
pub use section::{BreadcrumbSection, HostSection, MenuSection, OverrideEntry};
pub use util::{find_config_file, find_config_file_from};

use util::resolve_against;

use crate::{
    cli::Cli,
    host::StaticHost,
    log,
    menu::{self, MenuError, MenuHierarchy},
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

/// File name searched for when `--config` is not given.
pub const DEFAULT_CONFIG_NAME: &str = "navcrumb.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing navcrumb.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NavcrumbConfig {
    /// CLI arguments reference (internal use only)
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file; empty when running on defaults
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Directory relative paths are resolved against
    #[serde(skip)]
    pub root: PathBuf,

    /// Hierarchy source
    #[serde(default)]
    pub menu: MenuSection,

    /// Trail shaping
    #[serde(default)]
    pub breadcrumb: BreadcrumbSection,

    /// Static host overrides
    #[serde(default)]
    pub host: HostSection,
}

impl NavcrumbConfig {
    /// Load configuration for a CLI invocation.
    ///
    /// An explicit `--config` must exist. Otherwise `navcrumb.toml` is
    /// searched upward from cwd, and its absence means defaults.
    pub fn load(cli: &'static Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match &cli.config {
            Some(explicit) => {
                let path = resolve_against(&cwd, explicit);
                if !path.exists() {
                    return Err(ConfigError::NotFound(path).into());
                }
                Self::from_path(&path)?
            }
            None => match find_config_file(Path::new(DEFAULT_CONFIG_NAME)) {
                Some(path) => Self::from_path(&path)?,
                None => Self::defaults_at(&cwd),
            },
        };

        config.cli = Some(cli);
        config.apply_cli_options(cli, &cwd);
        config.validate()?;
        Ok(config)
    }

    /// Default configuration rooted at `root`, not backed by a file.
    pub fn defaults_at(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            ..Self::default()
        }
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    ///
    /// Relative paths inside the file resolve against its directory.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        let root = path.parent().map(Path::to_path_buf).unwrap_or_default();
        config.config_path = path.to_path_buf();
        config.set_root(&root);
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Set the root and resolve relative paths against it.
    fn set_root(&mut self, root: &Path) {
        self.root = root.to_path_buf();
        if let Some(source) = &self.menu.source {
            self.menu.source = Some(resolve_against(root, source));
        }
    }

    /// Apply command-line overrides. `--menu` is relative to cwd, not root.
    fn apply_cli_options(&mut self, cli: &Cli, cwd: &Path) {
        if let Some(menu) = &cli.menu {
            self.menu.source = Some(resolve_against(cwd, menu));
        }
        if cli.no_host {
            self.host.enable = false;
        }
    }

    /// Validate configuration, collecting every problem before failing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        if let Some(source) = &self.menu.source {
            if !source.exists() {
                diag.error_with_hint(
                    "menu.source",
                    format!("menu file `{}` does not exist", source.display()),
                    "remove `source` to use the built-in menu",
                );
            } else if let Err(e) = menu::MenuFormat::from_path(source) {
                diag.error("menu.source", e.to_string());
            }
        }

        for (i, entry) in self.host.overrides.iter().enumerate() {
            if entry.path.trim().is_empty() {
                diag.error(format!("host.overrides[{i}].path"), "path must not be empty");
            }
            if entry.trail.is_empty() {
                diag.error_with_hint(
                    format!("host.overrides[{i}].trail"),
                    "override trail is empty",
                    "an empty override never applies; remove the entry",
                );
            }
        }

        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    /// Whether this config was read from a file.
    pub fn has_file(&self) -> bool {
        !self.config_path.as_os_str().is_empty()
    }

    /// Resolved hierarchy source, if one is configured.
    pub fn menu_source(&self) -> Option<&Path> {
        self.menu.source.as_deref()
    }

    /// Load the configured hierarchy, or the built-in one.
    pub fn load_menu(&self) -> Result<Arc<MenuHierarchy>, MenuError> {
        match self.menu_source() {
            Some(path) => menu::load(path).map(Arc::new),
            None => Ok(Arc::new(MenuHierarchy::default_set())),
        }
    }

    /// Static host publishing `menu` and the configured overrides.
    ///
    /// `None` when the host is disabled.
    pub fn static_host(&self, menu: Arc<MenuHierarchy>) -> Option<StaticHost> {
        if !self.host.enable {
            return None;
        }
        let host = self
            .host
            .overrides
            .iter()
            .fold(StaticHost::new().with_menu(menu), |host, entry| {
                host.with_override(&entry.path, entry.trail.clone())
            });
        Some(host)
    }

    /// Files whose changes require a reload: the config and the menu.
    pub fn watched_files(&self) -> Vec<PathBuf> {
        let mut files = Vec::with_capacity(2);
        if self.has_file() {
            files.push(self.config_path.clone());
        }
        if let Some(source) = self.menu_source() {
            files.push(source.to_path_buf());
        }
        files
    }
}

// ============================================================================
// tests
// ============================================================================
