//! tilepath - Themed tile and unit image path resolver
//!
//! A library for resolving logical asset identifiers (units, terrain
//! features, owned tiles, qualified by era and style) into concrete
//! image-path strings against a chain of visual themes, each of which may
//! delegate missing assets to a fallback theme.

pub mod cli;
pub mod config;
pub mod error;
pub mod index;
pub mod output;
pub mod theme;
pub mod types;
pub mod validation;

pub use config::{ThemeConfig, ThemeRegistry, THEMES_FILENAME};
pub use error::{Result, TilepathError};
pub use index::{AssetIndex, ImageLookup};
pub use theme::{ConcatCache, ResolvedCache, ThemeContext, ThemePaths, DEFAULT_FALLBACK_DEPTH};
pub use types::{CivProfile, EraList, RoadKind, UnitProfile};
pub use validation::{validate_themes, Diagnostic, Severity, ValidationResult};
