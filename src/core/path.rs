//! Navigation path type.
//!
//! Every path that reaches the resolver goes through [`NavPath::new`]:
//! - trimmed of surrounding whitespace
//! - always starts with `/`
//! - never ends with `/` (except the root itself)
//! - empty input collapses to `/`

use std::borrow::Borrow;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Normalized navigation path
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NavPath(Arc<str>);

impl NavPath {
    /// Normalize a raw path string.
    ///
    /// ```
    /// use navcrumb::core::NavPath;
    /// assert_eq!(NavPath::new("  records/ ").as_str(), "/records");
    /// assert_eq!(NavPath::new("///").as_str(), "/");
    /// assert_eq!(NavPath::new("").as_str(), "/");
    /// ```
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim().trim_end_matches('/');

        if trimmed.is_empty() {
            return Self::root();
        }

        if trimmed.starts_with('/') {
            Self(Arc::from(trimmed))
        } else {
            Self(Arc::from(format!("/{trimmed}")))
        }
    }

    /// The root path `/`.
    pub fn root() -> Self {
        Self(Arc::from("/"))
    }

    /// Create from a browser location.
    ///
    /// Accepts absolute URLs (`https://host/a/b`) as well as bare paths,
    /// strips query string and fragment, and percent-decodes the result.
    pub fn from_browser(location: &str) -> Self {
        use percent_encoding::percent_decode_str;

        let location = location.trim();
        let path = match url::Url::parse(location) {
            Ok(parsed) if parsed.has_host() => parsed.path().to_string(),
            _ => location
                .split(['?', '#'])
                .next()
                .unwrap_or(location)
                .to_string(),
        };

        let decoded = percent_decode_str(&path)
            .decode_utf8()
            .map(|s| s.into_owned())
            .unwrap_or(path);

        Self::new(&decoded)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this is the root path.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.as_ref() == "/"
    }

    /// Iterate non-empty segments in order.
    ///
    /// `/records//digital-channels` yields `records`, `digital-channels`.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty())
    }

    /// Path with the last segment removed.
    ///
    /// `/a/b/c` -> `/a/b`, `/a` -> `/`, `/` -> `/`
    pub fn parent(&self) -> Self {
        match self.0.rfind('/') {
            Some(0) | None => Self::root(),
            Some(idx) => Self::new(&self.0[..idx]),
        }
    }

    /// Append a child segment.
    ///
    /// `/records` + `menu` -> `/records/menu`, `/` + `menu` -> `/menu`
    pub fn join(&self, segment: &str) -> Self {
        let segment = segment.trim_matches('/');
        if segment.is_empty() {
            return self.clone();
        }
        if self.is_root() {
            Self::new(segment)
        } else {
            Self(Arc::from(format!("{}/{segment}", self.0)))
        }
    }

    /// Compare against a raw (possibly unnormalized) path.
    #[inline]
    pub fn matches(&self, raw: &str) -> bool {
        Self::new(raw) == *self
    }
}

impl Default for NavPath {
    fn default() -> Self {
        Self::root()
    }
}

impl std::fmt::Display for NavPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NavPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for NavPath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NavPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NavPath {
    fn from(s: String) -> Self {
        Self::new(&s)
    }
}

impl From<NavPath> for String {
    fn from(p: NavPath) -> Self {
        p.0.to_string()
    }
}

impl Serialize for NavPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for NavPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::new(&raw))
    }
}
