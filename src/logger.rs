//! Terminal logging.
//!
//! - `log!("module"; ...)` writes one line with a colored `[module]` tag
//! - `debug!("module"; ...)` does the same, only under `--verbose`
//! - [`StatusBlock`] is the self-overwriting block used by `watch`
//!
//! Everything here writes to stderr; stdout carries trails and JSON only.
//!
//! ```ignore
//! log!("menu"; "loaded {} entries", count);
//! debug!("resolve"; "{} matched via {}", path, strategy);
//! ```

use std::io::{Write, stderr};
use std::sync::LazyLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};
use owo_colors::OwoColorize;
use parking_lot::Mutex;

static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Enable or disable `debug!` output.
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Print `[module] message` to stderr.
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Like `log!`, but only with `--verbose`.
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

#[doc(hidden)]
pub fn log(module: &str, message: &str) {
    let tag = tag(module);
    let mut err = stderr().lock();
    writeln!(err, "{tag} {message}").ok();
    err.flush().ok();
}

/// `[module]`, colored by what kind of module it is.
fn tag(module: &str) -> String {
    let text = format!("[{module}]");
    match module.to_ascii_lowercase().as_str() {
        "navigate" => text.bright_blue().bold().to_string(),
        "watch" => text.bright_green().bold().to_string(),
        "error" | "warning" => text.bright_red().bold().to_string(),
        "hint" => text.bright_cyan().bold().to_string(),
        _ => text.bright_yellow().bold().to_string(),
    }
}

// ============================================================================
// watch status block
// ============================================================================

/// Kind of status shown by [`StatusBlock`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Fresh trails after a change.
    Updated,
    /// Reloaded, same trails as before.
    Unchanged,
    /// Reload or menu load failed.
    Failed,
}

/// A block of lines that replaces itself on every update.
///
/// ```ignore
/// let mut block = StatusBlock::new();
/// block.show(StatusKind::Updated, "/records  Início › Registos");
/// block.show(StatusKind::Failed, "menu load failed\ninvalid JSON in menu `menu.json`");
/// ```
#[derive(Debug, Default)]
pub struct StatusBlock {
    /// Height of what is currently on screen
    height: usize,
}

impl StatusBlock {
    pub const fn new() -> Self {
        Self { height: 0 }
    }

    /// Clear the previous block and print `body` with a timestamp.
    pub fn show(&mut self, kind: StatusKind, body: &str) {
        let mut err = stderr().lock();

        if self.height > 0 {
            let up = u16::try_from(self.height).unwrap_or(u16::MAX);
            execute!(err, cursor::MoveUp(up), Clear(ClearType::FromCursorDown)).ok();
        }

        let stamp = format!("[{}]", clock()).dimmed().to_string();
        let text = match kind {
            StatusKind::Updated => format!("{stamp} {} {body}", "✓".green()),
            StatusKind::Unchanged => format!("{stamp} {}", body.dimmed()),
            StatusKind::Failed => format!("{stamp} {} {body}", "✗".red()),
        };
        writeln!(err, "{text}").ok();
        err.flush().ok();

        self.height = height(body);
    }
}

/// Terminal lines taken by `body` (plus none for the stamp, same line).
fn height(body: &str) -> usize {
    body.lines().count().max(1)
}

/// UTC wall clock as `HH:MM:SS`.
fn clock() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs());
    format!(
        "{:02}:{:02}:{:02}",
        secs / 3600 % 24,
        secs / 60 % 60,
        secs % 60
    )
}

static STATUS: LazyLock<Mutex<StatusBlock>> = LazyLock::new(|| Mutex::new(StatusBlock::new()));

pub fn status_success(body: &str) {
    STATUS.lock().show(StatusKind::Updated, body);
}

pub fn status_unchanged(body: &str) {
    STATUS.lock().show(StatusKind::Unchanged, body);
}

/// Show `summary`, with `detail` on the following lines when present.
pub fn status_error(summary: &str, detail: &str) {
    let body = if detail.is_empty() {
        summary.to_string()
    } else {
        format!("{summary}\n{detail}")
    };
    STATUS.lock().show(StatusKind::Failed, &body);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_starts_empty() {
        assert_eq!(StatusBlock::new().height, 0);
    }

    #[test]
    fn test_height() {
        assert_eq!(height("Início › Registos"), 1);
        assert_eq!(height("/a  A\n/b  B"), 2);
        assert_eq!(height("failed\nline one\nline two"), 3);
        assert_eq!(height(""), 1);
    }

    #[test]
    fn test_verbose_flag() {
        set_verbose(true);
        assert!(is_verbose());
        set_verbose(false);
        assert!(!is_verbose());
    }

    #[test]
    fn test_clock_format() {
        let t = clock();
        assert_eq!(t.len(), 8);
        assert_eq!(&t[2..3], ":");
        assert_eq!(&t[5..6], ":");
    }

    #[test]
    fn test_tag_keeps_module_name() {
        assert!(tag("navigate").contains("[navigate]"));
        assert!(tag("Menu").contains("[Menu]"));
    }
}
