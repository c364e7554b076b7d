//! Validate command implementation.
//!
//! Loads theme configs, scans the asset directory, and runs the validation
//! checks without resolving anything.

use std::path::PathBuf;

use clap::Args;

use crate::config::{ThemeRegistry, THEMES_FILENAME};
use crate::error::{Result, TilepathError};
use crate::index::AssetIndex;
use crate::output::{display_path, plural, Printer};
use crate::validation::{print_diagnostics, validate_themes};

/// Validate theme configurations against the asset directory
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Asset directory to scan for images
    #[arg(long, default_value = ".")]
    pub assets: PathBuf,

    /// Theme configuration file (default: <assets>/themes.yaml)
    #[arg(long)]
    pub themes: Option<PathBuf>,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    let themes_path = args
        .themes
        .unwrap_or_else(|| args.assets.join(THEMES_FILENAME));
    let themes = ThemeRegistry::load(&themes_path)?;

    printer.status("Scanning", &display_path(&args.assets));
    let index = AssetIndex::scan(&args.assets);
    printer.info("Indexed", &plural(index.len(), "image", "images"));

    printer.status(
        "Validating",
        &plural(themes.len(), "theme", "themes"),
    );
    let result = validate_themes(&themes, &index);
    print_diagnostics(&result);

    if result.has_errors() {
        return Err(TilepathError::Validation {
            message: format!("{} validation error(s)", result.error_count()),
            help: Some("Fix the errors above and try again".to_string()),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_validate_complete_theme_passes() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("TileSets/Default");
        fs::create_dir_all(&root).unwrap();
        for asset in [
            "Hexagon",
            "CrosshatchHexagon",
            "Crosshair",
            "Highlight",
            "River-Bottom",
            "River-BottomLeft",
            "River-BottomRight",
        ] {
            fs::write(root.join(format!("{}.png", asset)), "").unwrap();
        }
        fs::write(dir.path().join(THEMES_FILENAME), "Default: {}\n").unwrap();

        let args = ValidateArgs {
            assets: dir.path().to_path_buf(),
            themes: None,
        };

        assert!(run(args, &Printer::new()).is_ok());
    }

    #[test]
    fn test_validate_missing_hexagon_fails() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("TileSets/Default")).unwrap();
        fs::write(dir.path().join(THEMES_FILENAME), "Default: {}\n").unwrap();

        let args = ValidateArgs {
            assets: dir.path().to_path_buf(),
            themes: None,
        };

        assert!(run(args, &Printer::new()).is_err());
    }

    #[test]
    fn test_validate_missing_config_errors() {
        let dir = tempdir().unwrap();

        let args = ValidateArgs {
            assets: dir.path().to_path_buf(),
            themes: None,
        };

        assert!(run(args, &Printer::new()).is_err());
    }
}
