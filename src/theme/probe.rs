//! Ordered image probes.
//!
//! A probe is a fixed precedence of candidate paths tried against the asset
//! store; candidates are produced lazily and evaluation stops at the first
//! one that exists. Both resolution policies here are wrapped by the
//! per-table resolved cache, so a given (entity, era, style) combination
//! probes the asset store at most once per table.

use super::{ResolvedCache, ThemePaths};
use crate::types::{CivProfile, UnitProfile};

/// Separator between a base path and its era/style qualifiers.
const TAG_SEPARATOR: &str = "-";

impl ThemePaths {
    /// Resolve the image path for a unit owned by a civilization.
    ///
    /// Probes, in order: era+style qualified (walking eras down from the
    /// owner's current era), era qualified, style qualified, the bare base
    /// path, and the replaced unit's bare base path. A miss on the whole
    /// sequence retries against the fallback table; an exhausted chain
    /// yields the empty string, which the renderer treats as "draw
    /// nothing".
    pub fn unit_image_path(&self, unit: &UnitProfile, owner: &CivProfile) -> String {
        let style = owner.style();
        let key = ResolvedCache::key(&[&unit.name, &owner.era, style]);

        if let Some(hit) = self.resolved.borrow().get(&key) {
            return hit.to_string();
        }

        let path = self
            .probe_unit_image(unit, owner)
            .unwrap_or_else(|| match self.fallback() {
                Some(fb) => fb.unit_image_path(unit, owner),
                None => String::new(),
            });

        self.resolved.borrow_mut().put(key, path.clone());
        path
    }

    /// Resolve the image path for a tile owned by a civilization, given the
    /// unowned base path.
    ///
    /// Probes era+style, era, and style qualified variants; if none exist
    /// the unqualified base path comes back unchanged, so an owned tile can
    /// always be drawn.
    pub fn owned_tile_image_path(&self, base_path: &str, owner: &CivProfile) -> String {
        let style = owner.style();
        let key = ResolvedCache::key(&[base_path, &owner.era, style]);

        if let Some(hit) = self.resolved.borrow().get(&key) {
            return hit.to_string();
        }

        let path = self
            .probe_qualified(base_path, &owner.era, style)
            .unwrap_or_else(|| base_path.to_string());

        self.resolved.borrow_mut().put(key, path.clone());
        path
    }

    fn probe_unit_image(&self, unit: &UnitProfile, owner: &CivProfile) -> Option<String> {
        let base = self.build_path(&[&self.units_root, &unit.name]);
        let style = owner.style();

        if let Some(found) = self.probe_qualified(&base, &owner.era, style) {
            return Some(found);
        }

        if self.image_exists(&base) {
            return Some(base);
        }

        if let Some(replaces) = unit.replaces.as_deref() {
            let replaced = self.build_path(&[&self.units_root, replaces]);
            if self.image_exists(&replaced) {
                return Some(replaced);
            }
        }

        None
    }

    /// The shared qualified-variant probe: era+style with a descending era
    /// walk, then era only, then style only.
    fn probe_qualified(&self, base: &str, era: &str, style: &str) -> Option<String> {
        let era_and_style = self
            .ctx
            .eras
            .down_from(era)
            .map(|e| self.build_path(&[base, TAG_SEPARATOR, e, TAG_SEPARATOR, style]));
        if let Some(found) = self.first_existing(era_and_style) {
            return Some(found);
        }

        let era_only = self
            .ctx
            .eras
            .down_from(era)
            .map(|e| self.build_path(&[base, TAG_SEPARATOR, e]));
        if let Some(found) = self.first_existing(era_only) {
            return Some(found);
        }

        let styled = self.build_path(&[base, TAG_SEPARATOR, style]);
        if self.image_exists(&styled) {
            return Some(styled);
        }

        None
    }

    /// Short-circuiting probe primitive: candidates are produced lazily and
    /// evaluation stops at the first path the asset store knows.
    fn first_existing(&self, candidates: impl IntoIterator<Item = String>) -> Option<String> {
        candidates.into_iter().find(|path| self.image_exists(path))
    }
}
