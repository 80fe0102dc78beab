//! Menu hierarchy entities.
//!
//! ```text
//! SidebarItem ─┬─ MenuItem ─┬─ SubmenuItem ─┬─ SubmenuLinkItem
//!   (level 1)  │  (level 2) │   (level 3)   │   (level 4, leaf)
//! ```
//!
//! Children point at their parent by id. A parent id that does not resolve
//! inside the same snapshot is not an error; lookups simply return `None`.

use serde::{Deserialize, Serialize};

use crate::core::NavPath;

/// Top-level navigation destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarItem {
    /// Unique id. `""` is the root/home entry.
    pub id: String,
    pub label: String,
    /// Explicit path. When absent the item lives at `/{id}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl SidebarItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            path: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Effective path: `path`, or `/{id}` when absent.
    pub fn effective_path(&self) -> NavPath {
        match &self.path {
            Some(path) => NavPath::new(path),
            None => NavPath::root().join(&self.id),
        }
    }

    /// Whether this sidebar entry is addressed by `path`.
    ///
    /// Matches on the explicit path, on `/{id}` when no path is set, and
    /// the root entry (`id == ""`) always answers for `/`.
    pub fn is_addressed_by(&self, path: &NavPath) -> bool {
        match &self.path {
            Some(own) if path.matches(own) => true,
            None if NavPath::root().join(&self.id) == *path => true,
            _ => self.id.is_empty() && path.is_root(),
        }
    }
}

/// Second-level entry, owned by one sidebar item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub label: String,
    #[serde(alias = "parent_sidebar_id")]
    pub parent_sidebar_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl MenuItem {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        parent_sidebar_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            parent_sidebar_id: parent_sidebar_id.into(),
            path: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

/// Third-level grouping node. Not navigable on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmenuItem {
    pub id: String,
    pub label: String,
    #[serde(alias = "parent_menu_id")]
    pub parent_menu_id: String,
}

impl SubmenuItem {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        parent_menu_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            parent_menu_id: parent_menu_id.into(),
        }
    }
}

/// Fourth-level leaf. Its `path` is the exact-match key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmenuLinkItem {
    pub id: String,
    pub label: String,
    pub path: String,
    #[serde(alias = "parent_submenu_id")]
    pub parent_submenu_id: String,
}

impl SubmenuLinkItem {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        path: impl Into<String>,
        parent_submenu_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            path: path.into(),
            parent_submenu_id: parent_submenu_id.into(),
        }
    }
}

/// A full, read-only menu snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MenuHierarchy {
    #[serde(alias = "sidebar_items")]
    pub sidebar_items: Vec<SidebarItem>,
    #[serde(alias = "menu_items")]
    pub menu_items: Vec<MenuItem>,
    #[serde(alias = "submenu_items")]
    pub submenu_items: Vec<SubmenuItem>,
    #[serde(alias = "submenu_links")]
    pub submenu_links: Vec<SubmenuLinkItem>,
}

impl MenuHierarchy {
    /// Sidebar item by id (first match wins).
    pub fn sidebar(&self, id: &str) -> Option<&SidebarItem> {
        self.sidebar_items.iter().find(|item| item.id == id)
    }

    /// Menu item by id (first match wins).
    pub fn menu(&self, id: &str) -> Option<&MenuItem> {
        self.menu_items.iter().find(|item| item.id == id)
    }

    /// Submenu item by id (first match wins).
    pub fn submenu(&self, id: &str) -> Option<&SubmenuItem> {
        self.submenu_items.iter().find(|item| item.id == id)
    }

    /// Submenu link whose path equals `path` after normalization.
    pub fn link_at(&self, path: &NavPath) -> Option<&SubmenuLinkItem> {
        self.submenu_links.iter().find(|link| path.matches(&link.path))
    }

    /// Menu item whose explicit path equals `path` after normalization.
    pub fn menu_at(&self, path: &NavPath) -> Option<&MenuItem> {
        self.menu_items
            .iter()
            .find(|menu| menu.path.as_deref().is_some_and(|own| path.matches(own)))
    }

    /// First sidebar item addressed by `path`.
    pub fn sidebar_at(&self, path: &NavPath) -> Option<&SidebarItem> {
        self.sidebar_items
            .iter()
            .find(|item| item.is_addressed_by(path))
    }

    /// Effective path of a menu item.
    ///
    /// The explicit path when set, otherwise the parent sidebar's path plus
    /// the menu id. A dangling sidebar id derives from `/`.
    pub fn menu_path(&self, menu: &MenuItem) -> NavPath {
        if let Some(own) = &menu.path {
            return NavPath::new(own);
        }
        self.sidebar(&menu.parent_sidebar_id)
            .map(SidebarItem::effective_path)
            .unwrap_or_else(NavPath::root)
            .join(&menu.id)
    }

    /// Menus under a sidebar, in declaration order.
    pub fn menus_of<'a>(&'a self, sidebar_id: &str) -> impl Iterator<Item = &'a MenuItem> {
        self.menu_items
            .iter()
            .filter(move |menu| menu.parent_sidebar_id == sidebar_id)
    }

    /// Submenus under a menu, in declaration order.
    pub fn submenus_of<'a>(&'a self, menu_id: &str) -> impl Iterator<Item = &'a SubmenuItem> {
        self.submenu_items
            .iter()
            .filter(move |submenu| submenu.parent_menu_id == menu_id)
    }

    /// Links under a submenu, in declaration order.
    pub fn links_of<'a>(&'a self, submenu_id: &str) -> impl Iterator<Item = &'a SubmenuLinkItem> {
        self.submenu_links
            .iter()
            .filter(move |link| link.parent_submenu_id == submenu_id)
    }

    /// Total entries across all four levels.
    pub fn len(&self) -> usize {
        self.sidebar_items.len()
            + self.menu_items.len()
            + self.submenu_items.len()
            + self.submenu_links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
