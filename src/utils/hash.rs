//! Content hashing for change detection.
//!
//! Uses `rustc_hash::FxHasher`: fast and deterministic, good enough to tell
//! whether a config or menu file really changed between two watch events.

use rustc_hash::FxHasher;
use std::hash::Hasher;

/// Compute 64-bit hash from byte data.
#[inline]
pub fn compute<T: AsRef<[u8]> + ?Sized>(data: &T) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write(data.as_ref());
    hasher.finish()
}

/// Hash a file's content, `None` if it cannot be read.
pub fn compute_file(path: &std::path::Path) -> Option<u64> {
    std::fs::read(path).ok().map(|bytes| compute(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_deterministic() {
        assert_eq!(compute("menu"), compute("menu"));
        assert_ne!(compute("menu"), compute("menu "));
    }

    #[test]
    fn test_compute_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("menu.json");
        assert_eq!(compute_file(&path), None);
        std::fs::write(&path, "{}").unwrap();
        assert_eq!(compute_file(&path), Some(compute("{}")));
    }
}
