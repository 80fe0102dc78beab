//! A host backed by configuration instead of a live shell.
//!
//! Serves per-path override trails and a fixed menu snapshot, and records
//! navigation requests instead of performing them.

use std::sync::Arc;

use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::breadcrumb::BreadcrumbSegment;
use crate::core::NavPath;
use crate::log;
use crate::menu::MenuHierarchy;

use super::{HostError, HostNavigation};

#[derive(Debug, Default)]
pub struct StaticHost {
    menu: Option<Arc<MenuHierarchy>>,
    /// Normalized path → override trail
    overrides: FxHashMap<NavPath, Vec<BreadcrumbSegment>>,
    /// Location the shell is "at", used when `breadcrumbs(None)` is asked
    current: Mutex<Option<NavPath>>,
    history: Mutex<Vec<String>>,
}

impl StaticHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a menu snapshot through `menu_data`.
    pub fn with_menu(mut self, menu: Arc<MenuHierarchy>) -> Self {
        self.menu = Some(menu);
        self
    }

    /// Register an override trail. Later registrations for the same
    /// normalized path replace earlier ones.
    pub fn with_override(mut self, path: &str, trail: Vec<BreadcrumbSegment>) -> Self {
        self.overrides.insert(NavPath::new(path), trail);
        self
    }

    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }

    /// Paths passed to `navigate_to`, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.history.lock().clone()
    }
}

impl HostNavigation for StaticHost {
    fn navigate_to(&self, path: &str) -> Result<(), HostError> {
        let target = NavPath::new(path);
        log!("navigate"; "{}", target);
        self.history.lock().push(target.to_string());
        *self.current.lock() = Some(target);
        Ok(())
    }

    fn menu_data(&self) -> Result<Option<Arc<MenuHierarchy>>, HostError> {
        Ok(self.menu.clone())
    }

    fn breadcrumbs(&self, path: Option<&str>) -> Result<Option<Vec<BreadcrumbSegment>>, HostError> {
        let key = match path {
            Some(path) => NavPath::new(path),
            None => match self.current.lock().clone() {
                Some(current) => current,
                None => return Ok(None),
            },
        };
        Ok(self.overrides.get(&key).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::NavigationContext;

    fn campaign_trail() -> Vec<BreadcrumbSegment> {
        vec![
            BreadcrumbSegment::new("Campanhas", "/campaigns"),
            BreadcrumbSegment::new("2024", "/campaigns/2024"),
        ]
    }

    #[test]
    fn test_override_lookup_is_normalized() {
        let host = StaticHost::new().with_override("campaigns/2024/", campaign_trail());
        assert_eq!(
            host.breadcrumbs(Some("/campaigns/2024")).unwrap(),
            Some(campaign_trail())
        );
        assert_eq!(host.breadcrumbs(Some("/campaigns")).unwrap(), None);
    }

    #[test]
    fn test_current_location_follows_navigation() {
        let host = StaticHost::new().with_override("/campaigns/2024", campaign_trail());
        assert_eq!(host.breadcrumbs(None).unwrap(), None);

        host.navigate_to("/campaigns/2024/").unwrap();
        assert_eq!(host.breadcrumbs(None).unwrap(), Some(campaign_trail()));
        assert_eq!(host.history(), ["/campaigns/2024"]);
    }

    #[test]
    fn test_context_uses_published_menu_and_overrides() {
        let host = StaticHost::new()
            .with_menu(Arc::new(MenuHierarchy::default()))
            .with_override("/campaigns/2024", campaign_trail());
        let ctx = NavigationContext::new(Some(&host));

        assert!(ctx.menu().is_empty());
        assert_eq!(ctx.breadcrumbs("/campaigns/2024"), campaign_trail());
        // No override, empty menu: plain segments
        assert_eq!(ctx.breadcrumbs("/records")[0].label, "Records");
    }

    #[test]
    fn test_without_menu_context_uses_default() {
        let host = StaticHost::new();
        let ctx = NavigationContext::new(Some(&host));
        assert_eq!(ctx.breadcrumbs("/records")[0].label, "Registos");
    }
}
