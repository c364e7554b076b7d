//! Validation checks for theme configurations.
//!
//! Each check takes the theme registry (and, where needed, the asset
//! lookup) and returns a `ValidationResult`. Checks never fail hard: a
//! broken config still resolves at runtime, these exist to catch authoring
//! mistakes before players see placeholder art.

use std::collections::HashSet;

use crate::config::ThemeRegistry;
use crate::index::ImageLookup;

use super::warning::{Diagnostic, ValidationResult};

/// Core asset whose absence across a whole fallback chain is an error.
const REQUIRED_ASSETS: &[&str] = &["Hexagon"];

/// Assets the renderer can live without but themes usually provide.
const EXPECTED_ASSETS: &[&str] = &[
    "CrosshatchHexagon",
    "Crosshair",
    "Highlight",
    "River-Bottom",
    "River-BottomLeft",
    "River-BottomRight",
];

/// Check that every configured fallback names a registered theme.
pub fn check_fallback_refs(themes: &ThemeRegistry) -> ValidationResult {
    let mut result = ValidationResult::new();

    for name in themes.names() {
        let config = themes.lookup(name);
        if let Some(fallback) = &config.fallback {
            if !themes.contains(fallback) {
                result.push(
                    Diagnostic::warning(
                        "tilepath::validate::unknown-fallback",
                        format!(
                            "Theme '{}' falls back to unregistered theme '{}'",
                            name, fallback
                        ),
                    )
                    .with_help(
                        "Unregistered themes resolve to an empty config; \
                         register the fallback or remove it",
                    ),
                );
            }
        }
    }

    result
}

/// Check for cycles in the fallback graph.
///
/// Table construction terminates regardless (the depth counter bounds the
/// chain), but a cycle is almost always an authoring mistake.
pub fn check_fallback_cycles(themes: &ThemeRegistry) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut reported: HashSet<Vec<String>> = HashSet::new();

    for start in themes.names() {
        let mut path: Vec<String> = Vec::new();
        let mut current = start.to_string();

        loop {
            if let Some(pos) = path.iter().position(|t| t == &current) {
                let cycle = &path[pos..];

                // Report each cycle once, regardless of entry point.
                let mut signature = cycle.to_vec();
                signature.sort();

                if reported.insert(signature) {
                    let mut display = cycle.to_vec();
                    display.push(cycle[0].clone());
                    result.push(
                        Diagnostic::warning(
                            "tilepath::validate::fallback-cycle",
                            format!("Fallback cycle: {}", display.join(" -> ")),
                        )
                        .with_help(
                            "Cyclic fallbacks terminate at the depth limit but \
                             never add art; break the cycle",
                        ),
                    );
                }
                break;
            }

            path.push(current.clone());

            match themes.lookup(&current).fallback {
                Some(next) if themes.contains(&next) => current = next,
                _ => break,
            }
        }
    }

    result
}

/// Check that each theme's fallback chain provides the core assets.
pub fn check_core_assets(themes: &ThemeRegistry, assets: &dyn ImageLookup) -> ValidationResult {
    let mut result = ValidationResult::new();

    for name in themes.names() {
        for asset in REQUIRED_ASSETS {
            if !chain_has_asset(themes, assets, name, asset) {
                result.push(
                    Diagnostic::error(
                        "tilepath::validate::missing-asset",
                        format!(
                            "Theme '{}' has no '{}' image anywhere in its fallback chain",
                            name, asset
                        ),
                    )
                    .with_help(format!(
                        "Add TileSets/{}/{} or configure a fallback theme that has one",
                        name, asset
                    )),
                );
            }
        }

        for asset in EXPECTED_ASSETS {
            if !chain_has_asset(themes, assets, name, asset) {
                result.push(Diagnostic::warning(
                    "tilepath::validate::missing-asset",
                    format!(
                        "Theme '{}' has no '{}' image anywhere in its fallback chain",
                        name, asset
                    ),
                ));
            }
        }
    }

    result
}

/// Walk a theme's fallback chain (cycle-safe) looking for a theme-root asset.
fn chain_has_asset(
    themes: &ThemeRegistry,
    assets: &dyn ImageLookup,
    start: &str,
    asset: &str,
) -> bool {
    let mut visited: HashSet<String> = HashSet::new();
    let mut current = start.to_string();

    loop {
        if assets.image_exists(&format!("TileSets/{}/{}", current, asset)) {
            return true;
        }

        if !visited.insert(current.clone()) {
            return false;
        }

        match themes.lookup(&current).fallback {
            Some(next) => current = next,
            None => return false,
        }
    }
}
