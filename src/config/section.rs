//! Configuration sections of `navcrumb.toml`.
//!
//! | Section        | Purpose                                   |
//! |----------------|-------------------------------------------|
//! | `[menu]`       | Where the hierarchy snapshot comes from   |
//! | `[breadcrumb]` | Trail shaping (truncation)                |
//! | `[host]`       | Static host: override trails per path     |

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::breadcrumb::BreadcrumbSegment;

/// `[menu]` section
///
/// ```toml
/// [menu]
/// source = "menu.json"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuSection {
    /// Hierarchy file (`.json` or `.toml`), relative to the config file.
    /// Absent means the built-in default hierarchy.
    pub source: Option<PathBuf>,
}

/// `[breadcrumb]` section
///
/// ```toml
/// [breadcrumb]
/// max_segments = 2
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BreadcrumbSection {
    /// Keep only the last N crumbs. `0` keeps the whole trail.
    pub max_segments: usize,
}

/// `[host]` section
///
/// ```toml
/// [[host.overrides]]
/// path = "/campaigns/2024"
/// trail = [
///     { label = "Campanhas", path = "/campaigns" },
///     { label = "2024", path = "/campaigns/2024" },
/// ]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HostSection {
    /// Whether the static host is consulted at all.
    pub enable: bool,

    /// Trails returned verbatim for their path.
    pub overrides: Vec<OverrideEntry>,
}

impl Default for HostSection {
    fn default() -> Self {
        Self {
            enable: true,
            overrides: Vec::new(),
        }
    }
}

/// One host override
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverrideEntry {
    pub path: String,
    pub trail: Vec<BreadcrumbSegment>,
}
