//! Match strategies, tried in priority order.
//!
//! | Strategy      | Matches on                          | Trail                         |
//! |---------------|-------------------------------------|-------------------------------|
//! | `SubmenuLink` | exact link path                     | sidebar, menu, submenu, link  |
//! | `Menu`        | exact explicit menu path            | sidebar, menu                 |
//! | `Sidebar`     | sidebar path, `/{id}`, or root      | sidebar                       |
//! | `Segments`    | always                              | one crumb per path segment    |
//!
//! Ancestors are resolved bottom-up by parent id. The first id that does not
//! resolve ends the chain there; levels above it are dropped, never skipped.

use crate::core::NavPath;
use crate::menu::MenuHierarchy;

use super::{BreadcrumbSegment, humanize};

/// A way of turning a path into a trail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    SubmenuLink,
    Menu,
    Sidebar,
    Segments,
}

impl Strategy {
    /// Evaluation order. The first strategy that yields a trail wins.
    pub const ORDER: [Strategy; 4] = [
        Strategy::SubmenuLink,
        Strategy::Menu,
        Strategy::Sidebar,
        Strategy::Segments,
    ];

    /// Try this strategy. `None` means "no match, try the next one".
    pub fn apply(self, path: &NavPath, menu: &MenuHierarchy) -> Option<Vec<BreadcrumbSegment>> {
        match self {
            Self::SubmenuLink => submenu_link(path, menu),
            Self::Menu => menu_entry(path, menu),
            Self::Sidebar => sidebar_entry(path, menu),
            Self::Segments => Some(segments(path)),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::SubmenuLink => "submenu-link",
            Self::Menu => "menu",
            Self::Sidebar => "sidebar",
            Self::Segments => "segments",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn submenu_link(path: &NavPath, menu: &MenuHierarchy) -> Option<Vec<BreadcrumbSegment>> {
    let link = menu.link_at(path)?;

    // Collected leaf-first, reversed at the end
    let mut trail = vec![BreadcrumbSegment::new(&link.label, path.clone())];

    let Some(submenu) = menu.submenu(&link.parent_submenu_id) else {
        return Some(trail);
    };
    // Submenus have no path of their own; point at the link's parent path
    trail.push(BreadcrumbSegment::new(&submenu.label, path.parent()));

    if let Some(parent) = menu.menu(&submenu.parent_menu_id) {
        trail.push(BreadcrumbSegment::new(&parent.label, menu.menu_path(parent)));

        if let Some(sidebar) = menu.sidebar(&parent.parent_sidebar_id) {
            trail.push(BreadcrumbSegment::new(&sidebar.label, sidebar.effective_path()));
        }
    }

    trail.reverse();
    Some(trail)
}

fn menu_entry(path: &NavPath, menu: &MenuHierarchy) -> Option<Vec<BreadcrumbSegment>> {
    let entry = menu.menu_at(path)?;

    let mut trail = Vec::with_capacity(2);
    if let Some(sidebar) = menu.sidebar(&entry.parent_sidebar_id) {
        trail.push(BreadcrumbSegment::new(&sidebar.label, sidebar.effective_path()));
    }
    trail.push(BreadcrumbSegment::new(&entry.label, path.clone()));
    Some(trail)
}

fn sidebar_entry(path: &NavPath, menu: &MenuHierarchy) -> Option<Vec<BreadcrumbSegment>> {
    let item = menu.sidebar_at(path)?;
    Some(vec![BreadcrumbSegment::new(&item.label, path.clone())])
}

fn segments(path: &NavPath) -> Vec<BreadcrumbSegment> {
    let mut current = NavPath::root();
    path.segments()
        .map(|segment| {
            current = current.join(segment);
            BreadcrumbSegment::new(humanize(segment), current.clone())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::{MenuItem, SidebarItem, SubmenuItem, SubmenuLinkItem};

    fn labels(trail: &[BreadcrumbSegment]) -> Vec<&str> {
        trail.iter().map(|s| s.label.as_str()).collect()
    }

    fn paths(trail: &[BreadcrumbSegment]) -> Vec<&str> {
        trail.iter().map(|s| s.path.as_str()).collect()
    }

    #[test]
    fn test_order_is_most_specific_first() {
        assert_eq!(Strategy::ORDER[0], Strategy::SubmenuLink);
        assert_eq!(Strategy::ORDER[3], Strategy::Segments);
    }

    #[test]
    fn test_segments_always_matches() {
        let menu = MenuHierarchy::default();
        assert_eq!(Strategy::Segments.apply(&NavPath::root(), &menu), Some(vec![]));

        let trail = Strategy::Segments
            .apply(&NavPath::new("/a-b/c_d"), &menu)
            .unwrap();
        assert_eq!(labels(&trail), ["A b", "C d"]);
        assert_eq!(paths(&trail), ["/a-b", "/a-b/c_d"]);
    }

    #[test]
    fn test_link_with_dangling_submenu_keeps_only_link() {
        let menu = MenuHierarchy {
            submenu_links: vec![SubmenuLinkItem::new("l", "Link", "/x/y", "missing")],
            ..Default::default()
        };
        let trail = Strategy::SubmenuLink.apply(&NavPath::new("/x/y"), &menu).unwrap();
        assert_eq!(labels(&trail), ["Link"]);
    }

    #[test]
    fn test_link_with_dangling_menu_stops_at_submenu() {
        let menu = MenuHierarchy {
            submenu_items: vec![SubmenuItem::new("s", "Group", "missing")],
            submenu_links: vec![SubmenuLinkItem::new("l", "Link", "/x/y", "s")],
            ..Default::default()
        };
        let trail = Strategy::SubmenuLink.apply(&NavPath::new("/x/y"), &menu).unwrap();
        assert_eq!(labels(&trail), ["Group", "Link"]);
        assert_eq!(paths(&trail), ["/x", "/x/y"]);
    }

    #[test]
    fn test_link_with_dangling_sidebar_derives_menu_from_root() {
        let menu = MenuHierarchy {
            menu_items: vec![MenuItem::new("m", "Menu", "missing")],
            submenu_items: vec![SubmenuItem::new("s", "Group", "m")],
            submenu_links: vec![SubmenuLinkItem::new("l", "Link", "/x/y", "s")],
            ..Default::default()
        };
        let trail = Strategy::SubmenuLink.apply(&NavPath::new("/x/y"), &menu).unwrap();
        assert_eq!(labels(&trail), ["Menu", "Group", "Link"]);
        assert_eq!(paths(&trail), ["/m", "/x", "/x/y"]);
    }

    #[test]
    fn test_link_uses_explicit_menu_path() {
        let menu = MenuHierarchy {
            sidebar_items: vec![SidebarItem::new("records", "Registos")],
            menu_items: vec![MenuItem::new("m", "Menu", "records").with_path("/records/m-own")],
            submenu_items: vec![SubmenuItem::new("s", "Group", "m")],
            submenu_links: vec![SubmenuLinkItem::new("l", "Link", "/records/m-own/g/l", "s")],
        };
        let trail = Strategy::SubmenuLink
            .apply(&NavPath::new("/records/m-own/g/l"), &menu)
            .unwrap();
        assert_eq!(
            paths(&trail),
            ["/records", "/records/m-own", "/records/m-own/g", "/records/m-own/g/l"]
        );
    }

    #[test]
    fn test_menu_under_root_sidebar_has_no_double_slash() {
        let menu = MenuHierarchy {
            sidebar_items: vec![SidebarItem::new("", "Início")],
            menu_items: vec![MenuItem::new("m", "Menu", "")],
            submenu_items: vec![SubmenuItem::new("s", "Group", "m")],
            submenu_links: vec![SubmenuLinkItem::new("l", "Link", "/l", "s")],
        };
        let trail = Strategy::SubmenuLink.apply(&NavPath::new("/l"), &menu).unwrap();
        assert_eq!(paths(&trail), ["/", "/m", "/", "/l"]);
    }

    #[test]
    fn test_menu_strategy() {
        let menu = MenuHierarchy {
            sidebar_items: vec![SidebarItem::new("records", "Registos")],
            menu_items: vec![MenuItem::new("cards", "Cartões", "records").with_path("/records/cards")],
            ..Default::default()
        };
        let trail = Strategy::Menu.apply(&NavPath::new("/records/cards/"), &menu).unwrap();
        assert_eq!(labels(&trail), ["Registos", "Cartões"]);
        assert_eq!(paths(&trail), ["/records", "/records/cards"]);

        assert!(Strategy::Menu.apply(&NavPath::new("/records"), &menu).is_none());
    }

    #[test]
    fn test_menu_strategy_dangling_sidebar() {
        let menu = MenuHierarchy {
            menu_items: vec![MenuItem::new("cards", "Cartões", "gone").with_path("/cards")],
            ..Default::default()
        };
        let trail = Strategy::Menu.apply(&NavPath::new("/cards"), &menu).unwrap();
        assert_eq!(labels(&trail), ["Cartões"]);
    }

    #[test]
    fn test_sidebar_strategy() {
        let menu = MenuHierarchy {
            sidebar_items: vec![
                SidebarItem::new("", "Início"),
                SidebarItem::new("records", "Registos"),
                SidebarItem::new("reports", "Relatórios").with_path("/r"),
            ],
            ..Default::default()
        };
        let at = |p: &str| Strategy::Sidebar.apply(&NavPath::new(p), &menu);

        assert_eq!(labels(&at("/").unwrap()), ["Início"]);
        assert_eq!(labels(&at("/records").unwrap()), ["Registos"]);
        assert_eq!(labels(&at("/r").unwrap()), ["Relatórios"]);
        assert!(at("/reports").is_none());
        assert!(at("/records/x").is_none());
    }
}
