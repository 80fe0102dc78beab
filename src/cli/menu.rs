//! Menu command: show the hierarchy as a tree or dump it as JSON.

use std::fmt::Write as _;

use anyhow::Result;
use owo_colors::OwoColorize;
use rustc_hash::FxHashSet;

use super::args::MenuArgs;
use super::common::load_menu;
use crate::config::NavcrumbConfig;
use crate::core::NavPath;
use crate::log;
use crate::menu::MenuHierarchy;
use crate::utils::plural_count;

/// Execute menu command
pub fn run_menu(args: &MenuArgs, config: &NavcrumbConfig) -> Result<()> {
    let menu = load_menu(config)?;

    if args.json {
        let formatted = if args.pretty {
            serde_json::to_string_pretty(&*menu)?
        } else {
            serde_json::to_string(&*menu)?
        };
        println!("{formatted}");
        return Ok(());
    }

    print!("{}", render_tree(&menu));
    log!("menu"; "{}", plural_count(menu.len(), "item"));
    Ok(())
}

/// Render the hierarchy as an indented tree.
///
/// Entries whose parent does not resolve are listed under `(detached)`.
pub fn render_tree(menu: &MenuHierarchy) -> String {
    let mut out = String::new();
    let mut seen = Seen::default();

    for sidebar in &menu.sidebar_items {
        line(&mut out, "", &sidebar.label, Some(&sidebar.effective_path()));
        let menus: Vec<_> = menu.menus_of(&sidebar.id).collect();
        for (i, item) in menus.iter().enumerate() {
            seen.menus.insert(&item.id);
            let last = i + 1 == menus.len();
            let (branch, indent) = branch_glyphs(last);
            line(&mut out, branch, &item.label, Some(&menu.menu_path(item)));
            render_submenus(&mut out, menu, &item.id, indent, &mut seen);
        }
    }

    render_detached(&mut out, menu, &seen);
    out
}

#[derive(Default)]
struct Seen<'a> {
    menus: FxHashSet<&'a str>,
    submenus: FxHashSet<&'a str>,
    /// Indices into `submenu_links`
    links: FxHashSet<usize>,
}

fn render_submenus<'a>(
    out: &mut String,
    menu: &'a MenuHierarchy,
    menu_id: &str,
    indent: &str,
    seen: &mut Seen<'a>,
) {
    let submenus: Vec<_> = menu.submenus_of(menu_id).collect();
    for (i, submenu) in submenus.iter().enumerate() {
        seen.submenus.insert(&submenu.id);
        let (branch, child_indent) = branch_glyphs(i + 1 == submenus.len());
        line(out, &format!("{indent}{branch}"), &submenu.label, None);

        let links: Vec<_> = menu
            .submenu_links
            .iter()
            .enumerate()
            .filter(|(_, link)| link.parent_submenu_id == submenu.id)
            .collect();
        for (j, (index, link)) in links.iter().enumerate() {
            seen.links.insert(*index);
            let (branch, _) = branch_glyphs(j + 1 == links.len());
            line(
                out,
                &format!("{indent}{child_indent}{branch}"),
                &link.label,
                Some(&NavPath::new(&link.path)),
            );
        }
    }
}

fn render_detached(out: &mut String, menu: &MenuHierarchy, seen: &Seen<'_>) {
    let menus: Vec<_> = menu
        .menu_items
        .iter()
        .filter(|m| !seen.menus.contains(m.id.as_str()))
        .collect();
    let submenus: Vec<_> = menu
        .submenu_items
        .iter()
        .filter(|s| !seen.submenus.contains(s.id.as_str()))
        .collect();
    let links: Vec<_> = menu
        .submenu_links
        .iter()
        .enumerate()
        .filter(|(i, _)| !seen.links.contains(i))
        .map(|(_, link)| link)
        .collect();

    if menus.is_empty() && submenus.is_empty() && links.is_empty() {
        return;
    }

    let _ = writeln!(out, "{}", "(detached)".dimmed());
    for item in menus {
        line(out, "·  ", &item.label, Some(&menu.menu_path(item)));
    }
    for submenu in submenus {
        line(out, "·  ", &submenu.label, None);
    }
    for link in links {
        line(out, "·  ", &link.label, Some(&NavPath::new(&link.path)));
    }
}

/// Branch glyph and the indent its children use.
fn branch_glyphs(last: bool) -> (&'static str, &'static str) {
    if last { ("└─ ", "   ") } else { ("├─ ", "│  ") }
}

fn line(out: &mut String, prefix: &str, label: &str, path: Option<&NavPath>) {
    let _ = match path {
        Some(path) => writeln!(out, "{prefix}{label}  {}", path.as_str().cyan()),
        None => writeln!(out, "{prefix}{label}"),
    };
}
