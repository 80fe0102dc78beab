//! Watch command implementation.
//!
//! Keeps the trails for a fixed set of paths on screen and recomputes them
//! whenever the config or the menu file changes.
//!
//! ```text
//! notify → is_relevant → Debouncer (pure timing) → reload config → load menu → render
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::{Duration, Instant};

use anyhow::Result;
use notify::{EventKind, RecursiveMode, Watcher};
use owo_colors::OwoColorize;

use super::args::WatchArgs;
use super::common::{build_context, collect_paths};
use super::resolve::{ResolveRecord, resolve_all};
use crate::breadcrumb::render_colored;
use crate::config::{Reload, cfg, reload_config};
use crate::core::{NavPath, is_shutdown};
use crate::logger::{status_error, status_success, status_unchanged};
use crate::utils::{hash, plural_count};
use crate::{debug, log};

/// Quiet period after the last event before reloading
const DEBOUNCE_MS: u64 = 300;
/// How often the loop wakes up to check debounce and shutdown
const POLL_MS: u64 = 100;

/// Execute watch command
pub fn run_watch(args: &WatchArgs) -> Result<()> {
    let paths = collect_paths(&args.paths)?;
    let mut session = WatchSession::new(paths, args.max);
    session.refresh();

    let mut dirs = watch_dirs(&cfg().watched_files());
    if dirs.is_empty() {
        log!("watch"; "no config or menu file to watch");
        return Ok(());
    }

    let (tx, rx) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(move |res| {
        let _ = tx.send(res);
    })?;
    // Directories, not files: editors often replace a file instead of writing it
    for dir in &dirs {
        watcher.watch(dir, RecursiveMode::NonRecursive)?;
    }
    log!("watch"; "watching {}", plural_count(cfg().watched_files().len(), "file"));

    let mut debouncer = Debouncer::default();
    while !is_shutdown() {
        match rx.recv_timeout(Duration::from_millis(POLL_MS)) {
            Ok(Ok(event)) => {
                if is_relevant(&event, &cfg().watched_files()) {
                    debug!("watch"; "{:?} {:?}", event.kind, event.paths);
                    debouncer.touch();
                }
            }
            Ok(Err(e)) => log!("watch"; "notify error: {}", e),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }

        if debouncer.ready() {
            session.reload();

            // A config change may point the menu somewhere else
            let new_dirs = watch_dirs(&cfg().watched_files());
            if new_dirs != dirs {
                for dir in &dirs {
                    let _ = watcher.unwatch(dir);
                }
                for dir in &new_dirs {
                    watcher.watch(dir, RecursiveMode::NonRecursive)?;
                }
                dirs = new_dirs;
            }
        }
    }

    log!("watch"; "stopped");
    Ok(())
}

/// Paths being displayed, and what was shown last
struct WatchSession {
    paths: Vec<NavPath>,
    max: Option<usize>,
    last_output: Option<String>,
    /// Content hash of each watched file at the last render
    file_hashes: Vec<Option<u64>>,
}

impl WatchSession {
    fn new(paths: Vec<NavPath>, max: Option<usize>) -> Self {
        Self {
            paths,
            max,
            last_output: None,
            file_hashes: Vec::new(),
        }
    }

    /// Reload config (if its content changed), then re-render.
    fn reload(&mut self) {
        // Editors often touch files without changing them
        if self.last_output.is_some() && current_hashes() == self.file_hashes {
            debug!("watch"; "watched files unchanged");
            return;
        }

        match reload_config() {
            Ok(Reload::Applied) => debug!("watch"; "config reloaded"),
            Ok(Reload::Unchanged | Reload::NoFile) => {}
            Err(e) => {
                status_error("config reload failed", &format!("{e:#}"));
                self.last_output = None;
                return;
            }
        }
        self.refresh();
    }

    /// Load the menu from the current config and show the trails.
    fn refresh(&mut self) {
        let config = cfg();
        self.file_hashes = current_hashes();
        let menu = match config.load_menu() {
            Ok(menu) => menu,
            Err(e) => {
                status_error("menu load failed", &format!("{:#}", anyhow::Error::from(e)));
                self.last_output = None;
                return;
            }
        };

        let host = config.static_host(Arc::clone(&menu));
        let max = self.max.unwrap_or(config.breadcrumb.max_segments);
        let ctx = build_context(menu, host.as_ref(), max);
        let output = render_block(&resolve_all(&ctx, &self.paths));

        if self.last_output.as_deref() == Some(output.as_str()) {
            status_unchanged(&output);
        } else {
            status_success(&output);
            self.last_output = Some(output);
        }
    }
}

/// Hashes of the currently watched files, in `watched_files` order.
fn current_hashes() -> Vec<Option<u64>> {
    let files = cfg().watched_files();
    files.iter().map(|file| hash::compute_file(file)).collect()
}

/// One line per path: the path, then its trail.
fn render_block(records: &[ResolveRecord]) -> String {
    records
        .iter()
        .map(|record| {
            let trail = if record.trail.is_empty() {
                "(empty trail)".dimmed().to_string()
            } else {
                render_colored(&record.trail, false)
            };
            format!("{}  {}", record.path.cyan(), trail)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parent directories of `files`, deduplicated.
fn watch_dirs(files: &[PathBuf]) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = files
        .iter()
        .filter_map(|file| file.parent())
        .filter(|dir| dir.exists())
        .map(Path::to_path_buf)
        .collect();
    dirs.sort();
    dirs.dedup();
    dirs
}

/// Whether a notify event touches one of the watched files.
fn is_relevant(event: &notify::Event, files: &[PathBuf]) -> bool {
    let content_change = match event.kind {
        EventKind::Create(_) | EventKind::Remove(_) => true,
        // Metadata-only changes (mtime/chmod) are noise
        EventKind::Modify(modify) => !matches!(modify, notify::event::ModifyKind::Metadata(_)),
        _ => false,
    };
    content_change
        && event
            .paths
            .iter()
            .any(|changed| files.iter().any(|file| same_file(changed, file)))
}

/// Compare by file name and canonical parent; the file itself may be gone.
fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    if a.file_name() != b.file_name() {
        return false;
    }
    match (a.parent(), b.parent()) {
        (Some(pa), Some(pb)) => match (pa.canonicalize(), pb.canonicalize()) {
            (Ok(ca), Ok(cb)) => ca == cb,
            _ => false,
        },
        _ => false,
    }
}

/// Pure timing: fires once the event stream has been quiet long enough.
#[derive(Debug, Default)]
struct Debouncer {
    last_event: Option<Instant>,
}

impl Debouncer {
    fn touch(&mut self) {
        self.last_event = Some(Instant::now());
    }

    /// True once per burst, `DEBOUNCE_MS` after its last event.
    fn ready(&mut self) -> bool {
        match self.last_event {
            Some(at) if at.elapsed() >= Duration::from_millis(DEBOUNCE_MS) => {
                self.last_event = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breadcrumb::BreadcrumbSegment;
    use notify::event::{AccessKind, CreateKind, DataChange, MetadataKind, ModifyKind};

    fn event(kind: EventKind, path: &Path) -> notify::Event {
        notify::Event::new(kind).add_path(path.to_path_buf())
    }

    #[test]
    fn test_debouncer_fires_once_after_quiet_period() {
        let mut debouncer = Debouncer::default();
        assert!(!debouncer.ready());

        debouncer.touch();
        assert!(!debouncer.ready());

        debouncer.last_event = Instant::now().checked_sub(Duration::from_millis(DEBOUNCE_MS + 50));
        assert!(debouncer.ready());
        assert!(!debouncer.ready());
    }

    #[test]
    fn test_is_relevant_filters_kind_and_path() {
        let dir = tempfile::tempdir().unwrap();
        let menu = dir.path().join("menu.json");
        let other = dir.path().join("notes.txt");
        let files = vec![menu.clone()];

        let modify = EventKind::Modify(ModifyKind::Data(DataChange::Content));
        assert!(is_relevant(&event(modify, &menu), &files));
        assert!(is_relevant(&event(EventKind::Create(CreateKind::File), &menu), &files));
        assert!(!is_relevant(&event(modify, &other), &files));
        assert!(!is_relevant(
            &event(EventKind::Modify(ModifyKind::Metadata(MetadataKind::WriteTime)), &menu),
            &files
        ));
        assert!(!is_relevant(&event(EventKind::Access(AccessKind::Any), &menu), &files));
    }

    #[test]
    fn test_same_file_through_dot_segment() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        let direct = dir.path().join("menu.json");
        let indirect = dir.path().join("sub").join("..").join("menu.json");
        assert!(same_file(&direct, &indirect));
        assert!(!same_file(&direct, &dir.path().join("other.json")));
    }

    #[test]
    fn test_watch_dirs_dedup() {
        let dir = tempfile::tempdir().unwrap();
        let files = vec![
            dir.path().join("navcrumb.toml"),
            dir.path().join("menu.json"),
            PathBuf::from("/nonexistent-dir-for-navcrumb/menu.json"),
        ];
        assert_eq!(watch_dirs(&files), vec![dir.path().to_path_buf()]);
    }

    #[test]
    fn test_render_block_lines() {
        let records = vec![
            ResolveRecord {
                path: "/".into(),
                source: "sidebar".into(),
                trail: vec![BreadcrumbSegment::new("Início", "/")],
            },
            ResolveRecord {
                path: "/x".into(),
                source: "segments".into(),
                trail: Vec::new(),
            },
        ];
        let block = render_block(&records);
        assert_eq!(block.lines().count(), 2);
        assert!(block.contains("Início"));
        assert!(block.contains("(empty trail)"));
    }
}
