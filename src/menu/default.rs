//! Built-in hierarchy used when no host or menu file supplies one.

use super::{MenuHierarchy, MenuItem, SidebarItem, SubmenuItem, SubmenuLinkItem};

impl MenuHierarchy {
    /// The fallback menu: home, records, and one fully linked branch.
    ///
    /// Note that the link path does not share the menu's id segment
    /// (`digital-channels` vs `canais-digitais`); the resolver must not
    /// assume the two are related.
    pub fn default_set() -> Self {
        Self {
            sidebar_items: vec![
                SidebarItem::new("", "Início").with_path("/"),
                SidebarItem::new("records", "Registos"),
            ],
            menu_items: vec![MenuItem::new("canais-digitais", "Canais Digitais", "records")],
            submenu_items: vec![SubmenuItem::new(
                "mobile-banking-submenu",
                "Mobile Banking (IZI/SMART IZI)",
                "canais-digitais",
            )],
            submenu_links: vec![SubmenuLinkItem::new(
                "acessos",
                "Acessos",
                "/records/digital-channels/mobile-banking/accesses",
                "mobile-banking-submenu",
            )],
        }
    }
}
