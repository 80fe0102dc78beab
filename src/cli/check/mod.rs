//! Menu hierarchy check command.
//!
//! | Finding                                   | Severity |
//! |-------------------------------------------|----------|
//! | parent id that does not resolve           | error    |
//! | duplicate id within a level               | warning  |
//! | duplicate link / menu path                | warning  |
//! | stored path not in normalized form        | warning  |
//! | submenu without links                     | warning  |
//! | empty label                               | warning  |

mod report;

pub use report::{CheckReport, Finding, Severity};

use anyhow::{Result, bail};
use rustc_hash::{FxHashMap, FxHashSet};

use super::args::CheckArgs;
use super::common::load_menu;
use crate::config::NavcrumbConfig;
use crate::core::NavPath;
use crate::log;
use crate::menu::MenuHierarchy;
use crate::utils::plural_count;

/// Execute check command
pub fn run_check(args: &CheckArgs, config: &NavcrumbConfig) -> Result<()> {
    let menu = load_menu(config)?;
    log!("check"; "checking {}", plural_count(menu.len(), "item"));

    let report = check_hierarchy(&menu);
    report.print();
    if !report.is_clean() {
        eprintln!();
    }
    log!("check"; "{}", report);

    if report.error_count() > 0 && !args.warn_only {
        bail!("menu check failed");
    }
    Ok(())
}

/// Inspect a hierarchy for broken references and ambiguities.
pub fn check_hierarchy(menu: &MenuHierarchy) -> CheckReport {
    let mut report = CheckReport::default();

    check_sidebars(menu, &mut report);
    check_menus(menu, &mut report);
    check_submenus(menu, &mut report);
    check_links(menu, &mut report);

    report
}

fn check_sidebars(menu: &MenuHierarchy, report: &mut CheckReport) {
    let mut ids = FxHashSet::default();
    for item in &menu.sidebar_items {
        let target = display_id(&item.id);
        if !ids.insert(item.id.as_str()) {
            report.warn("sidebar", &target, "duplicate id, shadowed by an earlier entry");
        }
        check_label(report, "sidebar", &target, &item.label);
        if let Some(path) = &item.path {
            check_normalized(report, "sidebar", &target, path);
        }
    }
}

fn check_menus(menu: &MenuHierarchy, report: &mut CheckReport) {
    let mut ids = FxHashSet::default();
    let mut paths: FxHashMap<NavPath, &str> = FxHashMap::default();

    for item in &menu.menu_items {
        if !ids.insert(item.id.as_str()) {
            report.warn("menu", &item.id, "duplicate id, shadowed by an earlier entry");
        }
        check_label(report, "menu", &item.id, &item.label);
        if menu.sidebar(&item.parent_sidebar_id).is_none() {
            report.error(
                "menu",
                &item.id,
                format!("parent sidebar `{}` not found", item.parent_sidebar_id),
            );
        }
        if let Some(path) = &item.path {
            check_normalized(report, "menu", &item.id, path);
            if let Some(first) = paths.get(&NavPath::new(path)) {
                report.warn(
                    "menu",
                    &item.id,
                    format!("path `{path}` already used by `{first}`, never matched"),
                );
            } else {
                paths.insert(NavPath::new(path), &item.id);
            }
        }
    }
}

fn check_submenus(menu: &MenuHierarchy, report: &mut CheckReport) {
    let mut ids = FxHashSet::default();
    for item in &menu.submenu_items {
        if !ids.insert(item.id.as_str()) {
            report.warn("submenu", &item.id, "duplicate id, shadowed by an earlier entry");
        }
        check_label(report, "submenu", &item.id, &item.label);
        if menu.menu(&item.parent_menu_id).is_none() {
            report.error(
                "submenu",
                &item.id,
                format!("parent menu `{}` not found", item.parent_menu_id),
            );
        }
        if menu.links_of(&item.id).next().is_none() {
            report.warn("submenu", &item.id, "has no links, never shown in a trail");
        }
    }
}

fn check_links(menu: &MenuHierarchy, report: &mut CheckReport) {
    let mut paths: FxHashMap<NavPath, &str> = FxHashMap::default();
    for link in &menu.submenu_links {
        check_label(report, "link", &link.id, &link.label);
        check_normalized(report, "link", &link.id, &link.path);
        if menu.submenu(&link.parent_submenu_id).is_none() {
            report.error(
                "link",
                &link.id,
                format!("parent submenu `{}` not found", link.parent_submenu_id),
            );
        }

        let key = NavPath::new(&link.path);
        if let Some(first) = paths.get(&key) {
            report.warn(
                "link",
                &link.id,
                format!("path `{}` already used by `{first}`, never matched", link.path),
            );
        } else {
            paths.insert(key, &link.id);
        }
    }
}

fn check_label(report: &mut CheckReport, level: &'static str, target: &str, label: &str) {
    if label.trim().is_empty() {
        report.warn(level, target, "empty label");
    }
}

fn check_normalized(report: &mut CheckReport, level: &'static str, target: &str, path: &str) {
    let normalized = NavPath::new(path);
    if normalized.as_str() != path {
        report.warn(
            level,
            target,
            format!("path `{path}` is matched as `{normalized}`"),
        );
    }
}

/// The root sidebar has an empty id; show it as `""`.
fn display_id(id: &str) -> String {
    if id.is_empty() {
        "\"\"".to_string()
    } else {
        id.to_string()
    }
}
