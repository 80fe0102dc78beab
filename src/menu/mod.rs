//! Navigation menu hierarchy.
//!
//! # Module Structure
//!
//! ```text
//! menu/
//! ├── model      # SidebarItem, MenuItem, SubmenuItem, SubmenuLinkItem, MenuHierarchy
//! ├── default    # Built-in fallback hierarchy
//! └── load       # JSON/TOML menu files
//! ```

mod default;
mod load;
mod model;

pub use load::{MenuError, MenuFormat, ParseError, load, parse};
pub use model::{MenuHierarchy, MenuItem, SidebarItem, SubmenuItem, SubmenuLinkItem};
