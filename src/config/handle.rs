//! Process-wide config snapshot.
//!
//! Readers take an `Arc` snapshot through [`cfg`]; watch mode swaps in a new
//! one with [`reload_config`]. Swaps are skipped while the file content hash
//! stays the same.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, LazyLock};

use anyhow::Result;
use arc_swap::ArcSwap;

use crate::config::NavcrumbConfig;
use crate::utils::hash;

static CONFIG: LazyLock<ArcSwap<NavcrumbConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(NavcrumbConfig::default()));

/// Content hash of the loaded config file (`0` = none yet).
static CONFIG_HASH: AtomicU64 = AtomicU64::new(0);

/// Outcome of a reload attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reload {
    /// A new config was parsed, validated and installed.
    Applied,
    /// The file content hash matches the installed config.
    Unchanged,
    /// Running on defaults, or the file vanished: nothing to reload from.
    NoFile,
}

/// Current config snapshot.
#[inline]
pub fn cfg() -> Arc<NavcrumbConfig> {
    CONFIG.load_full()
}

/// Install the initial config and remember its file hash.
pub fn init_config(config: NavcrumbConfig) -> Arc<NavcrumbConfig> {
    let file_hash = config
        .has_file()
        .then(|| hash::compute_file(&config.config_path))
        .flatten()
        .unwrap_or(0);
    CONFIG_HASH.store(file_hash, Ordering::Relaxed);

    let config = Arc::new(config);
    CONFIG.store(Arc::clone(&config));
    config
}

/// Re-read the config file if its content changed.
///
/// On error the installed config is kept.
pub fn reload_config() -> Result<Reload> {
    let current = cfg();
    let Some(cli) = current.cli else {
        return Ok(Reload::NoFile);
    };
    if !current.has_file() {
        return Ok(Reload::NoFile);
    }
    let Some(file_hash) = hash::compute_file(&current.config_path) else {
        return Ok(Reload::NoFile);
    };
    if file_hash == CONFIG_HASH.load(Ordering::Relaxed) {
        return Ok(Reload::Unchanged);
    }

    let fresh = NavcrumbConfig::load(cli)?;
    CONFIG.store(Arc::new(fresh));
    CONFIG_HASH.store(file_hash, Ordering::Relaxed);
    Ok(Reload::Applied)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_and_reload_without_cli() {
        let installed = init_config(NavcrumbConfig::default());
        assert!(Arc::ptr_eq(&installed, &cfg()));
        // No CLI attached: nothing to reload from
        assert_eq!(reload_config().unwrap(), Reload::NoFile);
    }
}
