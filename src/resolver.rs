//! Image-reference resolution against a preloaded image catalog.

use std::collections::HashMap;
use std::io;
use std::path::Path;

/// Numeric handle for a loadable image resource.
pub type ImageHandle = u32;

/// Resolves a declared image name to a loadable resource handle.
///
/// The parser calls [`resolve`](ImageResolver::resolve) with the normalized
/// reference (whitespace trimmed, `@drawable/` prefix and `.gif` suffix
/// stripped). Returning `None` marks the reference as unresolved: the
/// enclosing exercise is dropped from the parse result and the raw
/// reference text is recorded instead.
///
/// Implemented for [`ImageCatalog`], for [`AcceptAll`], and for any
/// `Fn(&str) -> Option<ImageHandle>` closure.
pub trait ImageResolver {
    fn resolve(&self, name: &str) -> Option<ImageHandle>;
}

impl<F> ImageResolver for F
where
    F: Fn(&str) -> Option<ImageHandle>,
{
    fn resolve(&self, name: &str) -> Option<ImageHandle> {
        self(name)
    }
}

/// Resolver that accepts every reference.
///
/// Useful for inspection tooling where no image catalog is available and
/// the textual content of the catalog is all that matters.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl ImageResolver for AcceptAll {
    fn resolve(&self, _name: &str) -> Option<ImageHandle> {
        Some(1)
    }
}

/// Map-backed resolver over `(name, handle)` pairs.
#[derive(Debug, Clone, Default)]
pub struct ImageCatalog {
    handles: HashMap<String, ImageHandle>,
}

impl ImageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an image under `name`.
    pub fn insert(&mut self, name: impl Into<String>, handle: ImageHandle) {
        self.handles.insert(name.into(), handle);
    }

    /// Build a catalog from an iterator of names, assigning handles
    /// `1..=n` in iteration order.
    ///
    /// # Example
    ///
    /// ```
    /// use gymcat::{ImageCatalog, ImageResolver};
    ///
    /// let images = ImageCatalog::from_names(["squat", "plank"]);
    /// assert_eq!(images.resolve("plank"), Some(2));
    /// assert_eq!(images.resolve("deadlift"), None);
    /// ```
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut catalog = Self::new();
        for (i, name) in names.into_iter().enumerate() {
            catalog.insert(name, (i + 1) as ImageHandle);
        }
        catalog
    }

    /// Build a catalog from the `.gif` files in a directory.
    ///
    /// File stems become entry names; handles are assigned in sorted stem
    /// order so they are stable across runs. Non-gif entries and
    /// subdirectories are ignored.
    pub fn from_gif_dir(dir: impl AsRef<Path>) -> io::Result<Self> {
        let mut stems: Vec<String> = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            let is_gif = path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("gif"));
            if path.is_file()
                && is_gif
                && let Some(stem) = path.file_stem()
            {
                stems.push(stem.to_string_lossy().into_owned());
            }
        }
        stems.sort();
        Ok(Self::from_names(stems))
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

impl ImageResolver for ImageCatalog {
    fn resolve(&self, name: &str) -> Option<ImageHandle> {
        self.handles.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_names_assigns_sequential_handles() {
        let images = ImageCatalog::from_names(["a", "b", "c"]);
        assert_eq!(images.resolve("a"), Some(1));
        assert_eq!(images.resolve("c"), Some(3));
        assert_eq!(images.resolve("d"), None);
        assert_eq!(images.len(), 3);
    }

    #[test]
    fn test_closure_resolver() {
        let resolver = |name: &str| if name == "squat" { Some(7) } else { None };
        assert_eq!(resolver.resolve("squat"), Some(7));
        assert_eq!(resolver.resolve("plank"), None);
    }

    #[test]
    fn test_accept_all() {
        assert!(AcceptAll.resolve("anything").is_some());
    }
}
