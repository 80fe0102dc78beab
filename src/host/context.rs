//! Breadcrumb computation within one navigation context.

use std::sync::Arc;

use crate::breadcrumb::{BreadcrumbSegment, Resolution, Strategy, resolve_detailed};
use crate::core::NavPath;
use crate::debug;
use crate::menu::MenuHierarchy;

use super::HostNavigation;

/// Where a trail came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailSource {
    /// Supplied verbatim by the host.
    Host,
    /// Resolved locally with the given strategy.
    Local(Strategy),
}

/// Hierarchy snapshot plus an optional host, passed around explicitly.
///
/// The menu is fixed when the context is built; rebuild the context to pick
/// up a new snapshot.
pub struct NavigationContext<'h> {
    host: Option<&'h dyn HostNavigation>,
    menu: Arc<MenuHierarchy>,
    max_segments: Option<usize>,
}

impl<'h> NavigationContext<'h> {
    /// Build a context, taking the menu from the host when it publishes one.
    pub fn new(host: Option<&'h dyn HostNavigation>) -> Self {
        let menu = host
            .and_then(|host| match host.menu_data() {
                Ok(menu) => menu,
                Err(e) => {
                    debug!("host"; "menu data unavailable: {}", e);
                    None
                }
            })
            .unwrap_or_else(|| Arc::new(MenuHierarchy::default_set()));

        Self {
            host,
            menu,
            max_segments: None,
        }
    }

    /// Build a context around an explicit menu, ignoring host menu data.
    pub fn with_menu(host: Option<&'h dyn HostNavigation>, menu: Arc<MenuHierarchy>) -> Self {
        Self {
            host,
            menu,
            max_segments: None,
        }
    }

    /// Truncate locally resolved trails to the last `max` crumbs (`0` = all).
    pub fn max_segments(mut self, max: usize) -> Self {
        self.max_segments = (max > 0).then_some(max);
        self
    }

    pub fn menu(&self) -> &MenuHierarchy {
        &self.menu
    }

    pub fn has_host(&self) -> bool {
        self.host.is_some()
    }

    /// Trail for `path`.
    pub fn breadcrumbs(&self, path: &str) -> Vec<BreadcrumbSegment> {
        self.breadcrumbs_with_source(path).0
    }

    /// Trail for `path`, plus where it came from.
    ///
    /// A non-empty host trail is returned as-is (no truncation). An empty
    /// trail, a missing capability or a host error all fall back to local
    /// resolution.
    pub fn breadcrumbs_with_source(&self, path: &str) -> (Vec<BreadcrumbSegment>, TrailSource) {
        if let Some(trail) = self.host_override(path) {
            return (trail, TrailSource::Host);
        }

        let Resolution { trail, strategy } =
            resolve_detailed(&NavPath::new(path), &self.menu, self.max_segments);
        (trail, TrailSource::Local(strategy))
    }

    fn host_override(&self, path: &str) -> Option<Vec<BreadcrumbSegment>> {
        let host = self.host?;
        match host.breadcrumbs(Some(path)) {
            Ok(Some(trail)) if !trail.is_empty() => Some(trail),
            Ok(_) => None,
            Err(e) => {
                debug!("host"; "breadcrumb override failed for {}: {}", path, e);
                None
            }
        }
    }

    /// Click crumb `index` of `trail`.
    ///
    /// Only ancestors navigate; the final crumb is the current location.
    /// Returns whether the host was asked to navigate.
    pub fn follow(&self, trail: &[BreadcrumbSegment], index: usize) -> anyhow::Result<bool> {
        let Some(host) = self.host else {
            return Ok(false);
        };
        if index + 1 >= trail.len() {
            return Ok(false);
        }
        host.navigate_to(&trail[index].path)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::HostError;
    use parking_lot::Mutex;

    /// Host with configurable behavior for each capability
    #[derive(Default)]
    struct FakeHost {
        menu: Option<MenuHierarchy>,
        trail: Option<Vec<BreadcrumbSegment>>,
        fail: bool,
        navigated: Mutex<Vec<String>>,
    }

    impl HostNavigation for FakeHost {
        fn navigate_to(&self, path: &str) -> Result<(), HostError> {
            if self.fail {
                return Err(HostError::Unavailable("detached".into()));
            }
            self.navigated.lock().push(path.to_string());
            Ok(())
        }

        fn menu_data(&self) -> Result<Option<Arc<MenuHierarchy>>, HostError> {
            if self.fail {
                return Err(HostError::Failed {
                    method: "menu_data",
                    message: "boom".into(),
                });
            }
            Ok(self.menu.clone().map(Arc::new))
        }

        fn breadcrumbs(
            &self,
            _path: Option<&str>,
        ) -> Result<Option<Vec<BreadcrumbSegment>>, HostError> {
            if self.fail {
                return Err(HostError::Failed {
                    method: "breadcrumbs",
                    message: "boom".into(),
                });
            }
            Ok(self.trail.clone())
        }
    }

    /// Host that only implements the required method
    struct MinimalHost;

    impl HostNavigation for MinimalHost {
        fn navigate_to(&self, _path: &str) -> Result<(), HostError> {
            Ok(())
        }
    }

    #[test]
    fn test_no_host_uses_default_menu() {
        let ctx = NavigationContext::new(None);
        assert_eq!(*ctx.menu(), MenuHierarchy::default_set());
        let (trail, source) = ctx.breadcrumbs_with_source("/");
        assert_eq!(trail, vec![BreadcrumbSegment::new("Início", "/")]);
        assert_eq!(source, TrailSource::Local(Strategy::Sidebar));
    }

    #[test]
    fn test_minimal_host_falls_back() {
        let host = MinimalHost;
        let ctx = NavigationContext::new(Some(&host));
        assert_eq!(*ctx.menu(), MenuHierarchy::default_set());
        assert_eq!(ctx.breadcrumbs("/records").len(), 1);
    }

    #[test]
    fn test_host_menu_is_used() {
        let host = FakeHost {
            menu: Some(MenuHierarchy::default()),
            ..Default::default()
        };
        let ctx = NavigationContext::new(Some(&host));
        assert!(ctx.menu().is_empty());
        assert!(ctx.breadcrumbs("/").is_empty());
    }

    #[test]
    fn test_host_override_is_verbatim() {
        let override_trail = vec![
            BreadcrumbSegment::new("A", "/a"),
            BreadcrumbSegment::new("B", "/a/b"),
            BreadcrumbSegment::new("C", "/a/b/c"),
        ];
        let host = FakeHost {
            trail: Some(override_trail.clone()),
            ..Default::default()
        };
        let ctx = NavigationContext::new(Some(&host)).max_segments(1);
        let (trail, source) = ctx.breadcrumbs_with_source("/anything");
        assert_eq!(trail, override_trail);
        assert_eq!(source, TrailSource::Host);
    }

    #[test]
    fn test_empty_host_override_falls_back() {
        let host = FakeHost {
            trail: Some(Vec::new()),
            ..Default::default()
        };
        let ctx = NavigationContext::new(Some(&host));
        let (trail, source) = ctx.breadcrumbs_with_source("/x/y");
        assert_eq!(trail.len(), 2);
        assert_eq!(source, TrailSource::Local(Strategy::Segments));
    }

    #[test]
    fn test_failing_host_falls_back() {
        let host = FakeHost {
            fail: true,
            trail: Some(vec![BreadcrumbSegment::new("never", "/")]),
            ..Default::default()
        };
        let ctx = NavigationContext::new(Some(&host));
        assert_eq!(*ctx.menu(), MenuHierarchy::default_set());
        assert_eq!(ctx.breadcrumbs("/records")[0].label, "Registos");
    }

    #[test]
    fn test_local_truncation() {
        let ctx = NavigationContext::new(None).max_segments(2);
        assert_eq!(ctx.breadcrumbs("/a/b/c").len(), 2);
        let ctx = NavigationContext::new(None).max_segments(0);
        assert_eq!(ctx.breadcrumbs("/a/b/c").len(), 3);
    }

    #[test]
    fn test_follow_only_ancestors() {
        let host = FakeHost::default();
        let ctx = NavigationContext::new(Some(&host));
        let trail = ctx.breadcrumbs("/a/b/c");

        assert!(ctx.follow(&trail, 0).unwrap());
        assert!(ctx.follow(&trail, 1).unwrap());
        assert!(!ctx.follow(&trail, 2).unwrap());
        assert!(!ctx.follow(&trail, 9).unwrap());
        assert_eq!(*host.navigated.lock(), ["/a", "/a/b"]);
    }

    #[test]
    fn test_follow_without_host() {
        let ctx = NavigationContext::new(None);
        let trail = ctx.breadcrumbs("/a/b");
        assert!(!ctx.follow(&trail, 0).unwrap());
    }

    #[test]
    fn test_follow_propagates_host_error() {
        let host = FakeHost {
            fail: true,
            ..Default::default()
        };
        let ctx = NavigationContext::with_menu(Some(&host), Arc::new(MenuHierarchy::default()));
        let trail = ctx.breadcrumbs("/a/b");
        assert!(ctx.follow(&trail, 0).is_err());
    }
}
