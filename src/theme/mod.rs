//! Theme string tables and the fallback chain.
//!
//! A [`ThemePaths`] table owns every string the renderer needs for one
//! visual theme: eagerly derived base locations, lazily computed
//! fallback-aware fields, and the memoization caches that keep repeated
//! lookups from rebuilding the same strings or re-probing the asset store.
//!
//! Tables form a chain: a theme whose config names a fallback theme lazily
//! constructs a table for it with one less remaining depth. The strictly
//! decreasing depth bounds the chain at `depth + 1` tables even when theme
//! configs reference each other in a cycle.
//!
//! Everything here is single-threaded by design: caches use interior
//! mutability owned by one table and are mutated only from the calling
//! (render) thread. Callers that ever share a table across threads must
//! add their own mutual exclusion around it.

mod cache;
mod probe;

pub use cache::{ConcatCache, ResolvedCache};

use std::cell::{OnceCell, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::config::ThemeRegistry;
use crate::index::ImageLookup;
use crate::types::{EraList, RoadKind};

/// Default number of fallback hops a table chain may take.
pub const DEFAULT_FALLBACK_DEPTH: u8 = 1;

/// The external collaborators a theme table resolves against: the theme
/// config store, the asset existence predicate, and the era ordering.
///
/// Cheap to clone; every table in a fallback chain shares the same context.
#[derive(Clone)]
pub struct ThemeContext {
    pub themes: Arc<ThemeRegistry>,
    pub assets: Arc<dyn ImageLookup>,
    pub eras: Arc<EraList>,
}

impl ThemeContext {
    pub fn new(
        themes: ThemeRegistry,
        assets: impl ImageLookup + 'static,
        eras: EraList,
    ) -> Self {
        Self {
            themes: Arc::new(themes),
            assets: Arc::new(assets),
            eras: Arc::new(eras),
        }
    }
}

/// One theme's resolved path namespace.
///
/// Created when a theme becomes active (or when a fallback table is first
/// needed) and discarded wholesale on a theme switch; there is no targeted
/// cache invalidation.
pub struct ThemePaths {
    theme: String,
    depth: u8,
    ctx: ThemeContext,

    /// `TileSets/<theme>/`
    pub tileset_root: String,
    /// `TileSets/<theme>/Units/`
    pub units_root: String,
    /// `TileSets/<theme>/Borders/`
    pub borders_root: String,
    /// `TileSets/<theme>/CityOverlay`
    pub city_overlay: String,
    /// `TileSets/<theme>/NaturalWonderOverlay`
    pub natural_wonder_overlay: String,

    road_overlays: HashMap<RoadKind, String>,

    fallback_name: Option<String>,
    fallback: OnceCell<Option<Box<ThemePaths>>>,

    concat: RefCell<ConcatCache>,
    resolved: RefCell<ResolvedCache>,

    hexagon: OnceCell<String>,
    crosshatch_hexagon: OnceCell<String>,
    crosshair: OnceCell<String>,
    highlight: OnceCell<String>,
    river_bottom: OnceCell<String>,
    river_bottom_left: OnceCell<String>,
    river_bottom_right: OnceCell<String>,
}

impl ThemePaths {
    /// Create a table for `theme` with the default fallback depth.
    pub fn new(theme: &str, ctx: ThemeContext) -> Self {
        Self::with_depth(theme, DEFAULT_FALLBACK_DEPTH, ctx)
    }

    /// Create a table for `theme` allowing at most `depth` fallback hops.
    pub fn with_depth(theme: &str, depth: u8, ctx: ThemeContext) -> Self {
        let config = ctx.themes.lookup(theme);

        let tileset_root = format!("TileSets/{}/", theme);
        let units_root = format!("{}Units/", tileset_root);
        let borders_root = format!("{}Borders/", tileset_root);
        let city_overlay = format!("{}CityOverlay", tileset_root);
        let natural_wonder_overlay = format!("{}NaturalWonderOverlay", tileset_root);

        let road_overlays = RoadKind::ALL
            .iter()
            .filter(|kind| kind.is_drawn())
            .map(|&kind| (kind, format!("{}{}", tileset_root, kind.name())))
            .collect();

        Self {
            theme: theme.to_string(),
            depth,
            ctx,
            tileset_root,
            units_root,
            borders_root,
            city_overlay,
            natural_wonder_overlay,
            road_overlays,
            fallback_name: config.fallback,
            fallback: OnceCell::new(),
            concat: RefCell::new(ConcatCache::new()),
            resolved: RefCell::new(ResolvedCache::new()),
            hexagon: OnceCell::new(),
            crosshatch_hexagon: OnceCell::new(),
            crosshair: OnceCell::new(),
            highlight: OnceCell::new(),
            river_bottom: OnceCell::new(),
            river_bottom_left: OnceCell::new(),
            river_bottom_right: OnceCell::new(),
        }
    }

    /// The theme this table belongs to.
    pub fn theme(&self) -> &str {
        &self.theme
    }

    /// The fallback table, constructed on first access.
    ///
    /// `None` when the theme config names no fallback or the remaining
    /// depth is exhausted.
    pub fn fallback(&self) -> Option<&ThemePaths> {
        self.fallback
            .get_or_init(|| {
                if self.depth == 0 {
                    return None;
                }
                let name = self.fallback_name.as_deref()?;
                Some(Box::new(ThemePaths::with_depth(
                    name,
                    self.depth - 1,
                    self.ctx.clone(),
                )))
            })
            .as_deref()
    }

    /// Whether the asset store has an image for `path`.
    pub fn image_exists(&self, path: &str) -> bool {
        self.ctx.assets.image_exists(path)
    }

    /// Resolve a candidate path against the fallback chain.
    ///
    /// Without a fallback table the candidate is returned unconditionally,
    /// even when the asset is missing; masking a missing image is the
    /// renderer's job. With a fallback table, a missing candidate is
    /// replaced by applying `alternate` to that table.
    pub fn or_fallback<F>(&self, candidate: String, alternate: F) -> String
    where
        F: FnOnce(&ThemePaths) -> String,
    {
        match self.fallback() {
            None => candidate,
            Some(fb) => {
                if self.image_exists(&candidate) {
                    candidate
                } else {
                    alternate(fb)
                }
            }
        }
    }

    /// Convenience form of [`Self::or_fallback`] for paths whose shape is
    /// identical across themes: one producer computes the local candidate
    /// and, reapplied against the fallback table, the alternate.
    pub fn themed_or_fallback(&self, producer: fn(&ThemePaths) -> String) -> String {
        self.or_fallback(producer(self), |fb| fb.themed_or_fallback(producer))
    }

    /// Join path fragments through the concatenation cache.
    pub fn build_path(&self, fragments: &[&str]) -> String {
        self.concat.borrow_mut().concat(fragments)
    }

    /// Image path for an unowned base terrain tile.
    pub fn tile_path(&self, base_terrain: &str) -> String {
        self.build_path(&[&self.tileset_root, base_terrain])
    }

    /// Overlay image path for a base terrain.
    pub fn base_terrain_overlay_path(&self, base_terrain: &str) -> String {
        self.build_path(&[&self.tileset_root, base_terrain, "Overlay"])
    }

    /// Overlay image path for a terrain feature.
    pub fn terrain_feature_overlay_path(&self, feature: &str) -> String {
        self.build_path(&[&self.tileset_root, feature, "Overlay"])
    }

    /// Border image path for a border shape and side.
    pub fn border_path(&self, shape: &str, inner_or_outer: &str) -> String {
        self.build_path(&[&self.borders_root, shape, inner_or_outer])
    }

    /// Overlay image path for a road kind, `None` for undrawn kinds.
    pub fn road_overlay(&self, kind: RoadKind) -> Option<&str> {
        self.road_overlays.get(&kind).map(String::as_str)
    }

    /// The hexagon tile image, fallback-aware, computed once.
    pub fn hexagon(&self) -> &str {
        self.hexagon
            .get_or_init(|| self.themed_or_fallback(|t| t.build_path(&[&t.tileset_root, "Hexagon"])))
    }

    /// The crosshatch hexagon tile image, fallback-aware, computed once.
    pub fn crosshatch_hexagon(&self) -> &str {
        self.crosshatch_hexagon.get_or_init(|| {
            self.themed_or_fallback(|t| t.build_path(&[&t.tileset_root, "CrosshatchHexagon"]))
        })
    }

    /// The crosshair image, fallback-aware, computed once.
    pub fn crosshair(&self) -> &str {
        self.crosshair
            .get_or_init(|| self.themed_or_fallback(|t| t.build_path(&[&t.tileset_root, "Crosshair"])))
    }

    /// The tile highlight image, fallback-aware, computed once.
    pub fn highlight(&self) -> &str {
        self.highlight
            .get_or_init(|| self.themed_or_fallback(|t| t.build_path(&[&t.tileset_root, "Highlight"])))
    }

    /// The bottom river edge image, fallback-aware, computed once.
    pub fn river_bottom(&self) -> &str {
        self.river_bottom.get_or_init(|| {
            self.themed_or_fallback(|t| t.build_path(&[&t.tileset_root, "River-Bottom"]))
        })
    }

    /// The bottom-left river edge image, fallback-aware, computed once.
    pub fn river_bottom_left(&self) -> &str {
        self.river_bottom_left.get_or_init(|| {
            self.themed_or_fallback(|t| t.build_path(&[&t.tileset_root, "River-BottomLeft"]))
        })
    }

    /// The bottom-right river edge image, fallback-aware, computed once.
    pub fn river_bottom_right(&self) -> &str {
        self.river_bottom_right.get_or_init(|| {
            self.themed_or_fallback(|t| t.build_path(&[&t.tileset_root, "River-BottomRight"]))
        })
    }
}

impl fmt::Debug for ThemePaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemePaths")
            .field("theme", &self.theme)
            .field("depth", &self.depth)
            .field("fallback", &self.fallback_name)
            .finish_non_exhaustive()
    }
}
