//! Memoization caches owned by a theme table.
//!
//! Both caches are append-only: entries are never evicted or recomputed.
//! They are reclaimed in bulk when the owning table is dropped on a theme
//! switch, so growth is bounded by the lifetime of one active theme.

use std::collections::HashMap;

/// Separator between fields of a resolution key.
const KEY_SEPARATOR: &str = "|";

/// Memoizes pairwise string concatenation to intern repeated path fragments.
///
/// Joining `["Units/", "Warrior", "-Greek"]` caches the boundary
/// `("Units/", "Warrior")` once; a later join of `["Units/", "Warrior"]`
/// reuses it instead of concatenating again.
#[derive(Debug, Default)]
pub struct ConcatCache {
    /// prefix -> next fragment -> joined result.
    entries: HashMap<String, HashMap<String, String>>,
}

impl ConcatCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Join fragments left to right, memoizing each (prefix, fragment) pair.
    ///
    /// The result is exactly the naive concatenation of all fragments in
    /// order.
    pub fn concat(&mut self, fragments: &[&str]) -> String {
        let mut acc = String::new();

        for &fragment in fragments {
            if acc.is_empty() {
                acc.push_str(fragment);
                continue;
            }

            if let Some(hit) = self.entries.get(&acc).and_then(|m| m.get(fragment)) {
                acc = hit.clone();
            } else {
                let joined = format!("{acc}{fragment}");
                self.entries
                    .entry(acc)
                    .or_default()
                    .insert(fragment.to_string(), joined.clone());
                acc = joined;
            }
        }

        acc
    }

    /// Number of cached boundary pairs.
    pub fn len(&self) -> usize {
        self.entries.values().map(|m| m.len()).sum()
    }

    /// Check if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Map from a composite resolution key to a final resolved path.
///
/// A cached empty string is a cached "no image found"; either way the probe
/// sequence behind the entry never runs again for that key.
#[derive(Debug, Default)]
pub struct ResolvedCache {
    entries: HashMap<String, String>,
}

impl ResolvedCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a resolution key from its discriminating fields.
    pub fn key(parts: &[&str]) -> String {
        parts.join(KEY_SEPARATOR)
    }

    /// Look up a previously resolved path.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Store a resolved path. The first value for a key wins; later writes
    /// for the same key are ignored.
    pub fn put(&mut self, key: String, path: String) {
        self.entries.entry(key).or_insert(path);
    }

    /// Number of resolved entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been resolved yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_concat_matches_naive_join() {
        let mut cache = ConcatCache::new();

        assert_eq!(cache.concat(&[]), "");
        assert_eq!(cache.concat(&["Hexagon"]), "Hexagon");
        assert_eq!(
            cache.concat(&["TileSets/", "Default/", "Hexagon"]),
            "TileSets/Default/Hexagon"
        );
        assert_eq!(
            cache.concat(&["Units/", "Warrior", "-", "Greek"]),
            "Units/Warrior-Greek"
        );
    }

    #[test]
    fn test_concat_shared_prefix_cached_once() {
        let mut cache = ConcatCache::new();

        cache.concat(&["Units/", "Warrior"]);
        let after_first = cache.len();
        assert_eq!(after_first, 1);

        // Shares the ("Units/", "Warrior") boundary; only the new boundary
        // ("Units/Warrior", "-Greek") is inserted.
        cache.concat(&["Units/", "Warrior", "-Greek"]);
        assert_eq!(cache.len(), after_first + 1);

        // Fully cached; no new insertions.
        cache.concat(&["Units/", "Warrior", "-Greek"]);
        assert_eq!(cache.len(), after_first + 1);
    }

    #[test]
    fn test_concat_same_pair_same_result() {
        let mut cache = ConcatCache::new();

        let a = cache.concat(&["Borders/", "Edge"]);
        let b = cache.concat(&["Borders/", "Edge"]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_concat_empty_leading_fragment() {
        let mut cache = ConcatCache::new();

        // An empty accumulator adopts the next fragment without caching.
        assert_eq!(cache.concat(&["", "Hexagon"]), "Hexagon");
        assert!(cache.is_empty());
    }

    #[test]
    fn test_resolved_key_is_field_separated() {
        let key = ResolvedCache::key(&["Warrior", "Classical era", "Greek"]);
        assert_eq!(key, "Warrior|Classical era|Greek");
    }

    #[test]
    fn test_resolved_get_put() {
        let mut cache = ResolvedCache::new();
        let key = ResolvedCache::key(&["Warrior", "Classical era", "Greek"]);

        assert_eq!(cache.get(&key), None);

        cache.put(key.clone(), "Units/Warrior-Greek".to_string());
        assert_eq!(cache.get(&key), Some("Units/Warrior-Greek"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_resolved_first_write_wins() {
        let mut cache = ResolvedCache::new();

        cache.put("k".to_string(), "first".to_string());
        cache.put("k".to_string(), "second".to_string());

        assert_eq!(cache.get("k"), Some("first"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_resolved_empty_string_is_an_entry() {
        let mut cache = ResolvedCache::new();

        cache.put("missing".to_string(), String::new());
        assert_eq!(cache.get("missing"), Some(""));
    }
}
