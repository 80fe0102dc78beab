//! Breadcrumb resolution.
//!
//! Maps a location to the trail of its navigational ancestors by walking the
//! menu hierarchy. Resolution is a pure function of `(path, hierarchy)`:
//! nothing is cached, logged, or mutated.
//!
//! # Example
//!
//! ```
//! use navcrumb::breadcrumb::resolve;
//! use navcrumb::menu::MenuHierarchy;
//!
//! let menu = MenuHierarchy::default_set();
//! let trail = resolve("/records/digital-channels/mobile-banking/accesses", &menu, Some(2));
//! assert_eq!(trail.len(), 2);
//! assert_eq!(trail[1].label, "Acessos");
//! ```

mod label;
mod strategy;
mod trail;


pub use label::humanize;
pub use strategy::Strategy;
pub use trail::{SEPARATOR, render_colored, render_plain, truncate_last};

use serde::{Deserialize, Serialize};

use crate::core::NavPath;
use crate::menu::MenuHierarchy;

/// One crumb: what to show, and where clicking it goes
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BreadcrumbSegment {
    pub label: String,
    pub path: String,
}

impl BreadcrumbSegment {
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }
}

/// A resolved trail together with the strategy that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub trail: Vec<BreadcrumbSegment>,
    pub strategy: Strategy,
}

/// Resolve `path` against `menu`.
///
/// `max_segments` keeps only the last N crumbs; `None` or `Some(0)` keeps all.
pub fn resolve(
    path: &str,
    menu: &MenuHierarchy,
    max_segments: Option<usize>,
) -> Vec<BreadcrumbSegment> {
    resolve_detailed(&NavPath::new(path), menu, max_segments).trail
}

/// Like [`resolve`], on an already normalized path, reporting the winning strategy.
pub fn resolve_detailed(
    path: &NavPath,
    menu: &MenuHierarchy,
    max_segments: Option<usize>,
) -> Resolution {
    let (strategy, trail) = Strategy::ORDER
        .iter()
        .find_map(|&strategy| strategy.apply(path, menu).map(|trail| (strategy, trail)))
        // Segments never declines
        .unwrap_or((Strategy::Segments, Vec::new()));

    Resolution {
        trail: truncate_last(trail, max_segments.unwrap_or(0)),
        strategy,
    }
}
