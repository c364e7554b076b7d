//! Init command implementation.
//!
//! Generates a `themes.yaml` from discovered tileset directories.

use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::config::THEMES_FILENAME;
use crate::error::{Result, TilepathError};
use crate::output::{display_path, plural, Printer};

/// Initialize a themes.yaml from discovered tileset directories
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Asset directory to scan (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing themes.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let config_path = args.path.join(THEMES_FILENAME);

    // Check for existing config
    if config_path.exists() && !args.force {
        return Err(TilepathError::Validation {
            message: format!("{} already exists", THEMES_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    printer.status("Scanning", &display_path(&args.path));
    let themes = discover_themes(&args.path)?;

    // Build YAML manually for clean formatting
    let mut yaml = String::new();
    for theme in &themes {
        yaml.push_str(&format!("{}: {{}}\n", theme));
    }

    fs::write(&config_path, &yaml).map_err(|e| TilepathError::Io {
        path: config_path.clone(),
        message: format!("Failed to write theme config: {}", e),
    })?;

    if !themes.is_empty() {
        let names: Vec<&str> = themes.iter().map(|s| s.as_str()).collect();
        printer.info("Discovered", &names.join(", "));
    }

    printer.success(
        "Created",
        &format!(
            "{} ({} found)",
            THEMES_FILENAME,
            plural(themes.len(), "theme", "themes")
        ),
    );

    Ok(())
}

/// Find theme names from `TileSets/<name>` directories under the root.
fn discover_themes(root: &std::path::Path) -> Result<BTreeSet<String>> {
    let mut themes = BTreeSet::new();
    let tilesets = root.join("TileSets");

    if !tilesets.is_dir() {
        return Ok(themes);
    }

    for entry in fs::read_dir(&tilesets).map_err(|e| TilepathError::Io {
        path: tilesets.clone(),
        message: format!("Failed to read tileset directory: {}", e),
    })? {
        let entry = entry.map_err(|e| TilepathError::Io {
            path: tilesets.clone(),
            message: e.to_string(),
        })?;

        if entry.path().is_dir() {
            if let Some(name) = entry.file_name().to_str() {
                themes.insert(name.to_string());
            }
        }
    }

    Ok(themes)
}
