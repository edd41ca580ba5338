//! Dotted paths into nested documents.
//!
//! A path is a sequence of mapping keys written as one string separated by
//! dots: `"user.profile.name"`. The Path/PathBuf types follow the same
//! borrowed/owned pattern as std::path::Path/PathBuf.
//!
//! # Components
//!
//! A path string is split on every dot, and every piece is a mapping key,
//! including empty ones: `"a..b"` is `a`, then the key `""`, then `b`, and
//! `"a."` ends at the key `""` inside `a`. Only the empty string itself has
//! no components; reading through it finds nothing and writing through it
//! is rejected.
//!
//! There is no index syntax. Every component is a mapping key, including
//! components that look like numbers.
//!
//! ```rust
//! use treekit::tree::{Path, PathBuf};
//!
//! let path = PathBuf::new().push("user").push("profile.name");
//! assert_eq!(path.as_str(), "user.profile.name");
//! assert_eq!(path.components().collect::<Vec<_>>(), vec!["user", "profile", "name"]);
//!
//! let borrowed: &Path = "a..b".as_ref();
//! assert_eq!(borrowed.components().collect::<Vec<_>>(), vec!["a", "", "b"]);
//! ```

use std::{borrow::Borrow, fmt, ops::Deref, str::FromStr};

/// Component separator used by [`Path`].
pub const SEPARATOR: char = '.';

/// An owned path for hierarchical document access.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PathBuf {
    inner: String,
}

/// A borrowed path for hierarchical document access.
///
/// `Path` is the borrowed counterpart to `PathBuf`, similar to how `&str`
/// relates to `String`. It is unsized and always used behind a reference.
#[derive(Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Path {
    inner: str,
}

impl PathBuf {
    /// Creates a new empty path.
    pub fn new() -> Self {
        Self {
            inner: String::new(),
        }
    }

    /// Adds a path to the end of this path.
    ///
    /// Dots inside `path` introduce further components. Pushing onto an
    /// empty path replaces it, so pushing `""` there leaves it empty;
    /// pushing `""` onto a non-empty path appends an empty key.
    pub fn push(mut self, path: impl AsRef<str>) -> Self {
        let path = path.as_ref();
        if !self.inner.is_empty() {
            self.inner.push(SEPARATOR);
        }
        self.inner.push_str(path);
        self
    }

    /// Joins this path with another path.
    pub fn join(self, other: impl AsRef<Path>) -> Self {
        self.push(other.as_ref().as_str())
    }

    /// Returns the parent path, or `None` if this path has one component or none.
    ///
    /// The parent of `".b"` is the empty path, since a single empty key has
    /// no string form of its own.
    pub fn parent(&self) -> Option<PathBuf> {
        self.inner.rfind(SEPARATOR).map(|last_dot| PathBuf {
            inner: self.inner[..last_dot].to_string(),
        })
    }
}

impl Path {
    /// Wraps a string as a path without copying.
    pub fn new(s: &str) -> &Path {
        // SAFETY: Path is repr(transparent) over str
        unsafe { &*(s as *const str as *const Path) }
    }

    /// Returns an iterator over the path components, empty keys included.
    pub fn components(&self) -> impl Iterator<Item = &str> {
        let mut components = self.inner.split(SEPARATOR);
        if self.inner.is_empty() {
            components.next();
        }
        components
    }

    /// Returns the number of components in the path.
    pub fn len(&self) -> usize {
        self.components().count()
    }

    /// Returns `true` if the path has no components.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the last component of the path, or `None` if empty.
    pub fn last(&self) -> Option<&str> {
        self.components().last()
    }

    /// Returns the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Converts this `Path` to an owned `PathBuf`.
    pub fn to_path_buf(&self) -> PathBuf {
        PathBuf {
            inner: self.inner.to_string(),
        }
    }
}

impl Deref for PathBuf {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        Path::new(&self.inner)
    }
}

impl AsRef<Path> for PathBuf {
    fn as_ref(&self) -> &Path {
        self
    }
}

impl AsRef<Path> for Path {
    fn as_ref(&self) -> &Path {
        self
    }
}

impl AsRef<Path> for str {
    fn as_ref(&self) -> &Path {
        Path::new(self)
    }
}

impl AsRef<Path> for String {
    fn as_ref(&self) -> &Path {
        Path::new(self)
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl AsRef<str> for PathBuf {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl Borrow<Path> for PathBuf {
    fn borrow(&self) -> &Path {
        self
    }
}

impl ToOwned for Path {
    type Owned = PathBuf;

    fn to_owned(&self) -> PathBuf {
        self.to_path_buf()
    }
}

impl FromStr for PathBuf {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl From<&str> for PathBuf {
    fn from(s: &str) -> Self {
        Self {
            inner: s.to_string(),
        }
    }
}

impl From<String> for PathBuf {
    fn from(inner: String) -> Self {
        Self { inner }
    }
}

impl fmt::Display for PathBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&**self, f)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "(empty path)")
        } else {
            write!(f, "{}", &self.inner)
        }
    }
}

/// Constructs a path.
///
/// - `path!()` - Empty path (PathBuf)
/// - `path!("user.profile.name")` - Single literal (`&'static Path`, no allocation)
/// - `path!(base, "profile", key)` - Components joined into a `PathBuf`
///
/// ```rust
/// use treekit::path;
///
/// let literal = path!("user.profile.name");
/// assert_eq!(literal.len(), 3);
///
/// let id = 7;
/// let built = path!("users", id, "name");
/// assert_eq!(built.as_str(), "users.7.name");
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::tree::PathBuf::new()
    };

    ($single:literal) => {
        $crate::tree::Path::new($single)
    };

    ($first:expr $(, $rest:expr)* $(,)?) => {{
        let path = $crate::tree::PathBuf::new().push($first.to_string());
        $(
            let path = path.push($rest.to_string());
        )*
        path
    }};
}
