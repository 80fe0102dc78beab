//! Common utilities shared across CLI commands.

use std::io::{self, BufRead};
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::config::NavcrumbConfig;
use crate::core::NavPath;
use crate::debug;
use crate::host::{HostNavigation, NavigationContext, StaticHost};
use crate::menu::MenuHierarchy;
use crate::utils::plural_count;

/// Collect paths from arguments; a lone `-` reads one path per stdin line.
pub fn collect_paths(args: &[String]) -> Result<Vec<NavPath>> {
    let raw: Vec<String> = if args.len() == 1 && args[0] == "-" {
        read_paths_from_stdin()?
    } else {
        args.to_vec()
    };
    Ok(raw.iter().map(|p| NavPath::from_browser(p)).collect())
}

/// Read non-empty lines from stdin.
fn read_paths_from_stdin() -> Result<Vec<String>> {
    let stdin = io::stdin();
    let mut paths = Vec::new();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read paths from stdin")?;
        let line = line.trim();
        if !line.is_empty() {
            paths.push(line.to_string());
        }
    }
    Ok(paths)
}

/// Load the configured menu, attaching the config context to errors.
pub fn load_menu(config: &NavcrumbConfig) -> Result<Arc<MenuHierarchy>> {
    let menu = config.load_menu().context("failed to load menu hierarchy")?;
    match config.menu_source() {
        Some(source) => {
            debug!("menu"; "loaded {} from {}", plural_count(menu.len(), "item"), source.display())
        }
        None => debug!("menu"; "using built-in menu"),
    }
    Ok(menu)
}

/// Context over `menu`, consulting `host` when present.
pub fn build_context<'h>(
    menu: Arc<MenuHierarchy>,
    host: Option<&'h StaticHost>,
    max_segments: usize,
) -> NavigationContext<'h> {
    let ctx = match host {
        // The static host publishes the same menu, so it is read back through it
        Some(host) => NavigationContext::new(Some(host as &dyn HostNavigation)),
        None => NavigationContext::with_menu(None, menu),
    };
    ctx.max_segments(max_segments)
}
