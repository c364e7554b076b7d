//! Asset presence index.
//!
//! The resolver only ever asks one question of the asset store: does an
//! image with this logical path exist? `ImageLookup` is that question as a
//! trait; `AssetIndex` answers it from a one-time recursive scan of an
//! asset directory.

use std::collections::HashSet;
use std::path::Path;

use walkdir::WalkDir;

/// File extensions treated as images during a scan.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// The existence predicate consumed by the resolver.
///
/// Implementations must be pure queries: the resolver caches results under
/// the assumption that an answer never changes for the lifetime of a theme
/// table.
pub trait ImageLookup {
    /// Whether an image exists for the given logical path.
    fn image_exists(&self, path: &str) -> bool;
}

/// A set of logical image paths built by scanning a directory tree.
///
/// Logical paths are relative to the scan root, `/`-separated, with the
/// image extension stripped: `assets/TileSets/Default/Hexagon.png` indexes
/// as `TileSets/Default/Hexagon`.
#[derive(Debug, Clone, Default)]
pub struct AssetIndex {
    paths: HashSet<String>,
}

impl AssetIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index by recursively scanning a directory for image files.
    ///
    /// A nonexistent root yields an empty index rather than an error.
    pub fn scan(root: &Path) -> Self {
        let mut index = Self::new();

        if !root.exists() {
            return index;
        }

        for entry in WalkDir::new(root)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();

            if path.is_dir() {
                continue;
            }

            if !is_image(path) {
                continue;
            }

            if let Some(logical) = logical_path(root, path) {
                index.paths.insert(logical);
            }
        }

        index
    }

    /// Build an index from pre-computed logical paths (tests, embedding).
    pub fn from_paths(paths: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    /// Add a single logical path.
    pub fn insert(&mut self, path: impl Into<String>) {
        self.paths.insert(path.into());
    }

    /// Number of indexed images.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Check if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Iterate over indexed logical paths.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }
}

impl ImageLookup for AssetIndex {
    fn image_exists(&self, path: &str) -> bool {
        self.paths.contains(path)
    }
}

/// Check whether a file path has an image extension.
fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| IMAGE_EXTENSIONS.iter().any(|i| e.eq_ignore_ascii_case(i)))
}

/// Convert a file path under `root` to a logical image path.
fn logical_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let stem = relative.with_extension("");

    let parts: Vec<&str> = stem
        .components()
        .filter_map(|c| c.as_os_str().to_str())
        .collect();

    if parts.is_empty() {
        return None;
    }

    Some(parts.join("/"))
}
