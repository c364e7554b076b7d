//! Validation system for theme configurations.
//!
//! Runs a suite of checks against a theme registry and an asset index and
//! reports errors and warnings. Used by `tilepath validate`.

mod checks;
mod warning;

pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::config::ThemeRegistry;
use crate::index::ImageLookup;

/// Run all validation checks against the theme registry.
pub fn validate_themes(themes: &ThemeRegistry, assets: &dyn ImageLookup) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_fallback_refs(themes));
    result.merge(checks::check_fallback_cycles(themes));
    result.merge(checks::check_core_assets(themes, assets));

    result
}

/// Print diagnostics to stderr.
pub fn print_diagnostics(result: &ValidationResult) {
    for d in result.iter() {
        let severity = match d.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        eprintln!("  {}[{}]: {}", severity, d.code, d.message);
        if let Some(help) = &d.help {
            eprintln!("    help: {}", help);
        }
    }

    let errors = result.error_count();
    let warnings = result.warning_count();

    if errors > 0 {
        eprintln!(
            "Validation failed: {} error(s), {} warning(s)",
            errors, warnings
        );
    } else if warnings > 0 {
        eprintln!("Validation passed ({} warning(s))", warnings);
    } else {
        eprintln!("Validation passed.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ThemeConfig, ThemeRegistry};
    use crate::index::AssetIndex;

    fn full_theme(name: &str) -> Vec<String> {
        [
            "Hexagon",
            "CrosshatchHexagon",
            "Crosshair",
            "Highlight",
            "River-Bottom",
            "River-BottomLeft",
            "River-BottomRight",
        ]
        .iter()
        .map(|asset| format!("TileSets/{}/{}", name, asset))
        .collect()
    }

    #[test]
    fn test_validate_empty_registry() {
        let themes = ThemeRegistry::new();
        let assets = AssetIndex::new();

        let result = validate_themes(&themes, &assets);
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_complete_theme() {
        let mut themes = ThemeRegistry::new();
        themes.insert("Default", ThemeConfig::default());

        let assets = AssetIndex::from_paths(full_theme("Default"));

        let result = validate_themes(&themes, &assets);
        assert!(result.is_ok());
    }

    #[test]
    fn test_missing_hexagon_is_error() {
        let mut themes = ThemeRegistry::new();
        themes.insert("Default", ThemeConfig::default());

        let result = validate_themes(&themes, &AssetIndex::new());
        assert!(result.has_errors());
    }

    #[test]
    fn test_hexagon_via_fallback_is_ok() {
        let mut themes = ThemeRegistry::new();
        themes.insert("HighRes", ThemeConfig::with_fallback("Default"));
        themes.insert("Default", ThemeConfig::default());

        let mut paths = full_theme("Default");
        paths.extend(full_theme("HighRes").into_iter().filter(|p| !p.ends_with("/Hexagon")));
        let assets = AssetIndex::from_paths(paths);

        let result = validate_themes(&themes, &assets);
        assert!(!result.has_errors());
    }

    #[test]
    fn test_unknown_fallback_warns() {
        let mut themes = ThemeRegistry::new();
        themes.insert("Default", ThemeConfig::with_fallback("Ghost"));

        let assets = AssetIndex::from_paths(full_theme("Default"));

        let result = validate_themes(&themes, &assets);
        assert!(result.has_warnings());
        assert!(result
            .iter()
            .any(|d| d.code == "tilepath::validate::unknown-fallback"));
    }

    #[test]
    fn test_fallback_cycle_warns_once() {
        let mut themes = ThemeRegistry::new();
        themes.insert("A", ThemeConfig::with_fallback("B"));
        themes.insert("B", ThemeConfig::with_fallback("A"));

        let mut paths = full_theme("A");
        paths.extend(full_theme("B"));
        let assets = AssetIndex::from_paths(paths);

        let result = validate_themes(&themes, &assets);
        let cycles = result
            .iter()
            .filter(|d| d.code == "tilepath::validate::fallback-cycle")
            .count();
        assert_eq!(cycles, 1);
    }

    #[test]
    fn test_missing_expected_asset_warns() {
        let mut themes = ThemeRegistry::new();
        themes.insert("Default", ThemeConfig::default());

        let assets = AssetIndex::from_paths(["TileSets/Default/Hexagon"]);

        let result = validate_themes(&themes, &assets);
        assert!(!result.has_errors());
        assert!(result.has_warnings());
    }
}
