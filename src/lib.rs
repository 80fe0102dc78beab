//! Navcrumb - breadcrumb resolution for hierarchical navigation menus.
//!
//! A menu is a four-level hierarchy (sidebar → menu → submenu → link).
//! Given a path, [`breadcrumb::resolve`] returns the trail of crumbs leading
//! to it, falling back to the path's own segments when nothing in the menu
//! matches. A host application can override both the menu and individual
//! trails through [`host::HostNavigation`].

pub mod breadcrumb;
pub mod cli;
pub mod config;
pub mod core;
pub mod host;
pub mod logger;
pub mod menu;
pub mod utils;

pub use breadcrumb::{BreadcrumbSegment, resolve};
pub use crate::core::NavPath;
pub use host::{HostNavigation, NavigationContext};
pub use menu::MenuHierarchy;
