//! Resolve command implementation.

use std::io::Write;

use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;

use super::args::ResolveArgs;
use super::common::{build_context, collect_paths, load_menu};
use crate::breadcrumb::{BreadcrumbSegment, render_colored};
use crate::config::NavcrumbConfig;
use crate::core::NavPath;
use crate::host::{NavigationContext, TrailSource};
use crate::log;

/// One resolved path, as emitted by `--json`
#[derive(Debug, Serialize)]
pub struct ResolveRecord {
    pub path: String,
    pub source: String,
    pub trail: Vec<BreadcrumbSegment>,
}

impl ResolveRecord {
    fn new(path: &NavPath, trail: Vec<BreadcrumbSegment>, source: TrailSource) -> Self {
        Self {
            path: path.to_string(),
            source: source_name(source),
            trail,
        }
    }
}

/// Short name for where a trail came from.
pub fn source_name(source: TrailSource) -> String {
    match source {
        TrailSource::Host => "host".to_string(),
        TrailSource::Local(strategy) => strategy.name().to_string(),
    }
}

/// Execute resolve command
pub fn run_resolve(args: &ResolveArgs, config: &NavcrumbConfig) -> Result<()> {
    let paths = collect_paths(&args.paths)?;
    if paths.is_empty() {
        log!("resolve"; "no paths given");
        return Ok(());
    }

    let menu = load_menu(config)?;
    let host = config.static_host(menu.clone());
    let max = args.max.unwrap_or(config.breadcrumb.max_segments);
    let ctx = build_context(menu, host.as_ref(), max);

    let records = resolve_all(&ctx, &paths);

    if let Some(index) = args.follow {
        follow_all(&ctx, &records, index)?;
    }

    if args.json {
        print_json(&records, args.pretty)
    } else {
        print_text(&records, args.explain);
        Ok(())
    }
}

/// Resolve every path within one context.
pub fn resolve_all(ctx: &NavigationContext<'_>, paths: &[NavPath]) -> Vec<ResolveRecord> {
    paths
        .iter()
        .map(|path| {
            let (trail, source) = ctx.breadcrumbs_with_source(path.as_str());
            ResolveRecord::new(path, trail, source)
        })
        .collect()
}

fn follow_all(ctx: &NavigationContext<'_>, records: &[ResolveRecord], index: usize) -> Result<()> {
    if !ctx.has_host() {
        log!("navigate"; "no host available, nothing to follow");
        return Ok(());
    }
    for record in records {
        if !ctx.follow(&record.trail, index)? {
            log!("navigate"; "crumb {} of {} is not navigable", index, record.path);
        }
    }
    Ok(())
}

fn print_json(records: &[ResolveRecord], pretty: bool) -> Result<()> {
    let formatted = if pretty {
        serde_json::to_string_pretty(records)?
    } else {
        serde_json::to_string(records)?
    };
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{formatted}")?;
    Ok(())
}

fn print_text(records: &[ResolveRecord], explain: bool) {
    let with_paths = crate::logger::is_verbose();
    for record in records {
        if explain {
            log!("resolve"; "{} via {}", record.path, record.source);
        }
        if record.trail.is_empty() {
            println!("{}", "(empty trail)".dimmed());
        } else {
            println!("{}", render_colored(&record.trail, with_paths));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::StaticHost;
    use crate::menu::MenuHierarchy;
    use std::sync::Arc;

    #[test]
    fn test_resolve_all_sources() {
        let menu = Arc::new(MenuHierarchy::default_set());
        let host = StaticHost::new()
            .with_menu(Arc::clone(&menu))
            .with_override("/campaigns", vec![BreadcrumbSegment::new("Campanhas", "/campaigns")]);
        let ctx = build_context(menu, Some(&host), 0);

        let paths = [
            NavPath::new("/"),
            NavPath::new("/records/digital-channels/mobile-banking/accesses"),
            NavPath::new("/campaigns"),
            NavPath::new("/unknown/route"),
        ];
        let records = resolve_all(&ctx, &paths);
        let sources: Vec<_> = records.iter().map(|r| r.source.as_str()).collect();
        assert_eq!(sources, ["sidebar", "submenu-link", "host", "segments"]);
        assert_eq!(records[1].trail.len(), 4);
    }

    #[test]
    fn test_record_json_shape() {
        let record = ResolveRecord::new(
            &NavPath::new("/records"),
            vec![BreadcrumbSegment::new("Registos", "/records")],
            TrailSource::Local(crate::breadcrumb::Strategy::Sidebar),
        );
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"path":"/records","source":"sidebar","trail":[{"label":"Registos","path":"/records"}]}"#
        );
    }

    #[test]
    fn test_follow_records_navigation() {
        let menu = Arc::new(MenuHierarchy::default_set());
        let host = StaticHost::new().with_menu(Arc::clone(&menu));
        let ctx = build_context(menu, Some(&host), 0);

        let records = resolve_all(&ctx, &[NavPath::new("/a/b/c")]);
        follow_all(&ctx, &records, 1).unwrap();
        follow_all(&ctx, &records, 2).unwrap();
        assert_eq!(host.history(), ["/a/b"]);
    }
}
