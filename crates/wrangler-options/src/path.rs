//! Normalized path handling and lexical path resolution
//!
//! Every path produced by the resolver goes through [`NormalizedPath`]. Paths
//! are stored with forward slashes and lexically cleaned (`.` and `..` folded,
//! repeated separators collapsed). Nothing here touches the filesystem.

use serde::Serialize;
use std::path::{Path, PathBuf};

/// A path normalized to use forward slashes internally.
///
/// Provides consistent path handling across platforms by normalizing
/// all paths to forward slashes, whatever separator the input used.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NormalizedPath {
    /// Internal representation always uses forward slashes
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    ///
    /// Converts backslashes to forward slashes and cleans the result.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        Self {
            inner: clean(&path_str.replace('\\', "/")),
        }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Whether this path is rooted (`/…` or a drive prefix such as `C:/…`).
    pub fn is_absolute(&self) -> bool {
        !root_prefix(&self.inner).is_empty()
    }

    /// Join this path with a segment.
    ///
    /// Unlike [`resolve`](Self::resolve), an absolute segment is appended
    /// rather than replacing this path.
    pub fn join(&self, segment: &str) -> Self {
        Self::new(format!("{}/{}", self.inner, segment))
    }

    /// Resolve `segments` against this path, left to right.
    ///
    /// Empty segments are skipped, an absolute segment replaces everything
    /// accumulated before it, and relative segments are appended. The result
    /// is cleaned, so `resolve(["a", "../b"])` lands on `<self>/b`.
    ///
    /// # Example
    ///
    /// ```
    /// use wrangler_options::NormalizedPath;
    ///
    /// let base = NormalizedPath::new("/work/site");
    /// assert_eq!(base.resolve(["dist", "index.js"]).as_str(), "/work/site/dist/index.js");
    /// assert_eq!(base.resolve(["", "worker/script.js"]).as_str(), "/work/site/worker/script.js");
    /// assert_eq!(base.resolve(["/opt/out", "main.mjs"]).as_str(), "/opt/out/main.mjs");
    /// ```
    pub fn resolve<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Self {
        let mut resolved = self.inner.clone();
        for segment in segments {
            let segment = segment.replace('\\', "/");
            if segment.is_empty() {
                continue;
            }
            if root_prefix(&segment).is_empty() {
                resolved.push('/');
                resolved.push_str(&segment);
            } else {
                resolved = segment;
            }
        }
        Self {
            inner: clean(&resolved),
        }
    }

    /// Get the parent directory.
    pub fn parent(&self) -> Option<Self> {
        let prefix = root_prefix(&self.inner);
        let body = &self.inner[prefix.len()..];
        if body.is_empty() || body == "." {
            return None;
        }
        let parent = match body.rfind('/') {
            Some(idx) => format!("{}{}", prefix, &body[..idx]),
            None if prefix.is_empty() => ".".to_string(),
            None => prefix.to_string(),
        };
        Some(Self { inner: parent })
    }
}

/// The root of a normalized path string: `/`, `C:/`, or empty when relative.
fn root_prefix(path: &str) -> &str {
    let bytes = path.as_bytes();
    if bytes.first() == Some(&b'/') {
        &path[..1]
    } else if bytes.len() >= 3 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' && bytes[2] == b'/'
    {
        &path[..3]
    } else {
        ""
    }
}

/// Lexically clean a forward-slash path.
///
/// `..` never climbs above the root of an absolute path. A relative path
/// keeps its leading `..` components and cleans to `.` when empty.
fn clean(path: &str) -> String {
    let prefix = root_prefix(path);
    let mut parts: Vec<&str> = Vec::new();

    for component in path[prefix.len()..].split('/') {
        match component {
            "" | "." => {}
            ".." => match parts.last() {
                Some(&last) if last != ".." => {
                    parts.pop();
                }
                _ if prefix.is_empty() => parts.push(".."),
                _ => {}
            },
            other => parts.push(other),
        }
    }

    let body = parts.join("/");
    match (prefix.is_empty(), body.is_empty()) {
        (true, true) => ".".to_string(),
        (true, false) => body,
        (false, _) => format!("{}{}", prefix, body),
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}
