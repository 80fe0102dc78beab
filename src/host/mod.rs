//! Host navigation seam.
//!
//! A shell application may expose navigation services to embedded views.
//! Every capability besides `navigate_to` is optional: a host that does not
//! implement one, or fails while answering, is treated exactly like a host
//! that has nothing to say, and local resolution takes over.
//!
//! ```text
//! NavigationContext
//!   ├── menu:        host.menu_data()   → Some(menu) | default set
//!   ├── breadcrumbs: host.breadcrumbs() → non-empty override | resolve()
//!   └── follow:      host.navigate_to() for non-final crumbs
//! ```

mod context;
mod static_host;

pub use context::{NavigationContext, TrailSource};
pub use static_host::StaticHost;

use std::sync::Arc;

use thiserror::Error;

use crate::breadcrumb::BreadcrumbSegment;
use crate::menu::MenuHierarchy;

/// Errors raised by a host implementation
#[derive(Debug, Error)]
pub enum HostError {
    #[error("host navigation is unavailable: {0}")]
    Unavailable(String),

    #[error("host `{method}` failed: {message}")]
    Failed {
        method: &'static str,
        message: String,
    },
}

/// Navigation services provided by the embedding shell.
pub trait HostNavigation: Send + Sync {
    /// Navigate the shell to `path`.
    fn navigate_to(&self, path: &str) -> Result<(), HostError>;

    /// The shell's current menu snapshot, if it publishes one.
    fn menu_data(&self) -> Result<Option<Arc<MenuHierarchy>>, HostError> {
        Ok(None)
    }

    /// A precomputed trail for `path` (or the shell's current location when
    /// `None`), if the shell wants to override local resolution.
    fn breadcrumbs(&self, _path: Option<&str>) -> Result<Option<Vec<BreadcrumbSegment>>, HostError> {
        Ok(None)
    }
}
