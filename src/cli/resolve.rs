//! Resolve command implementation.
//!
//! Scans an asset directory, loads theme configs, and resolves a single
//! unit or owned-tile image path. The resolved path goes to stdout; status
//! goes to stderr.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use serde::Serialize;

use crate::config::{ThemeRegistry, THEMES_FILENAME};
use crate::error::{Result, TilepathError};
use crate::index::AssetIndex;
use crate::output::{display_path, plural, Printer};
use crate::theme::{ThemeContext, ThemePaths, DEFAULT_FALLBACK_DEPTH};
use crate::types::{CivProfile, EraList, UnitProfile};

/// Resolve a unit or owned-tile image path
#[derive(Args, Debug)]
pub struct ResolveArgs {
    #[command(subcommand)]
    pub target: ResolveTarget,
}

#[derive(Subcommand, Debug)]
pub enum ResolveTarget {
    /// Resolve a unit image
    Unit(UnitArgs),

    /// Resolve an owned-tile image
    Tile(TileArgs),
}

/// Options shared by both resolve targets.
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Asset directory to scan for images
    #[arg(long, default_value = ".")]
    pub assets: PathBuf,

    /// Theme configuration file (default: <assets>/themes.yaml if present)
    #[arg(long)]
    pub themes: Option<PathBuf>,

    /// Active theme name
    #[arg(long, default_value = "Default")]
    pub theme: String,

    /// Maximum fallback hops
    #[arg(long, default_value_t = DEFAULT_FALLBACK_DEPTH)]
    pub depth: u8,

    /// Era names in chronological order, comma separated
    #[arg(long, value_delimiter = ',')]
    pub eras: Vec<String>,

    /// Emit machine-readable JSON on stdout
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct UnitArgs {
    /// Unit template name
    pub name: String,

    /// Owning civilization's faction name
    #[arg(long)]
    pub civ: String,

    /// Owning civilization's current era
    #[arg(long)]
    pub era: String,

    /// Owning civilization's visual style (default: faction name)
    #[arg(long)]
    pub style: Option<String>,

    /// Unit template this unit replaces
    #[arg(long)]
    pub replaces: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Args, Debug)]
pub struct TileArgs {
    /// Unqualified base image path (e.g. TileSets/Default/Grassland)
    pub base: String,

    /// Owning civilization's faction name
    #[arg(long)]
    pub civ: String,

    /// Owning civilization's current era
    #[arg(long)]
    pub era: String,

    /// Owning civilization's visual style (default: faction name)
    #[arg(long)]
    pub style: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Machine-readable resolution report.
#[derive(Serialize, Debug)]
struct Resolution<'a> {
    theme: &'a str,
    kind: &'a str,
    name: &'a str,
    era: &'a str,
    style: &'a str,
    path: &'a str,
    found: bool,
}

pub fn run(args: ResolveArgs, printer: &Printer) -> Result<()> {
    match args.target {
        ResolveTarget::Unit(args) => run_unit(args, printer),
        ResolveTarget::Tile(args) => run_tile(args, printer),
    }
}

fn run_unit(args: UnitArgs, printer: &Printer) -> Result<()> {
    let table = build_table(&args.common, printer)?;

    let unit = match &args.replaces {
        Some(replaces) => UnitProfile::new(&args.name).replacing(replaces),
        None => UnitProfile::new(&args.name),
    };
    let owner = match &args.style {
        Some(style) => CivProfile::new(&args.civ, &args.era).with_style(style),
        None => CivProfile::new(&args.civ, &args.era),
    };

    let path = table.unit_image_path(&unit, &owner);
    let found = !path.is_empty() && table.image_exists(&path);

    if args.common.json {
        let report = Resolution {
            theme: table.theme(),
            kind: "unit",
            name: &args.name,
            era: &args.era,
            style: owner.style(),
            path: &path,
            found,
        };
        println!("{}", encode_report(&report)?);
        return Ok(());
    }

    if path.is_empty() {
        return Err(TilepathError::Resolve {
            message: format!("No image found for unit '{}'", args.name),
            help: Some(
                "Check the unit name, or add a bare base image the probe can land on".to_string(),
            ),
        });
    }

    printer.success("Resolved", &format!("{} -> {}", args.name, printer.cyan(&path)));
    println!("{}", path);
    Ok(())
}

fn run_tile(args: TileArgs, printer: &Printer) -> Result<()> {
    let table = build_table(&args.common, printer)?;

    let owner = match &args.style {
        Some(style) => CivProfile::new(&args.civ, &args.era).with_style(style),
        None => CivProfile::new(&args.civ, &args.era),
    };

    let path = table.owned_tile_image_path(&args.base, &owner);
    let found = table.image_exists(&path);

    if args.common.json {
        let report = Resolution {
            theme: table.theme(),
            kind: "tile",
            name: &args.base,
            era: &args.era,
            style: owner.style(),
            path: &path,
            found,
        };
        println!("{}", encode_report(&report)?);
        return Ok(());
    }

    printer.success("Resolved", &format!("{} -> {}", args.base, printer.cyan(&path)));
    println!("{}", path);
    Ok(())
}

fn encode_report(report: &Resolution<'_>) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(|e| TilepathError::Resolve {
        message: format!("Failed to serialize resolution report: {}", e),
        help: None,
    })
}

/// Scan assets, load theme configs, and build the active theme table.
fn build_table(common: &CommonArgs, printer: &Printer) -> Result<ThemePaths> {
    printer.status("Scanning", &display_path(&common.assets));
    let index = AssetIndex::scan(&common.assets);
    printer.info(
        "Indexed",
        &plural(index.len(), "image", "images"),
    );

    let themes = load_themes(common)?;
    let eras = EraList::new(common.eras.iter().cloned());

    let ctx = ThemeContext::new(themes, index, eras);
    Ok(ThemePaths::with_depth(&common.theme, common.depth, ctx))
}

/// Load the theme registry from an explicit path, the conventional file
/// next to the assets, or fall back to an empty registry.
fn load_themes(common: &CommonArgs) -> Result<ThemeRegistry> {
    if let Some(path) = &common.themes {
        return ThemeRegistry::load(path);
    }

    let conventional = common.assets.join(THEMES_FILENAME);
    if conventional.exists() {
        return ThemeRegistry::load(&conventional);
    }

    Ok(ThemeRegistry::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_json_shape() {
        let report = Resolution {
            theme: "Default",
            kind: "unit",
            name: "Warrior",
            era: "Classical era",
            style: "Greek",
            path: "TileSets/Default/Units/Warrior-Greek",
            found: true,
        };

        insta::assert_snapshot!(serde_json::to_string_pretty(&report).unwrap(), @r###"
        {
          "theme": "Default",
          "kind": "unit",
          "name": "Warrior",
          "era": "Classical era",
          "style": "Greek",
          "path": "TileSets/Default/Units/Warrior-Greek",
          "found": true
        }
        "###);
    }

    #[test]
    fn test_load_themes_defaults_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let common = CommonArgs {
            assets: dir.path().to_path_buf(),
            themes: None,
            theme: "Default".to_string(),
            depth: 1,
            eras: vec![],
            json: false,
        };

        let themes = load_themes(&common).unwrap();
        assert!(themes.is_empty());
    }

    #[test]
    fn test_load_themes_conventional_file() {
        use std::fs;

        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(THEMES_FILENAME),
            "HighRes:\n  fallback: Default\n",
        )
        .unwrap();

        let common = CommonArgs {
            assets: dir.path().to_path_buf(),
            themes: None,
            theme: "HighRes".to_string(),
            depth: 1,
            eras: vec![],
            json: false,
        };

        let themes = load_themes(&common).unwrap();
        assert_eq!(
            themes.lookup("HighRes").fallback.as_deref(),
            Some("Default")
        );
    }

    #[test]
    fn test_end_to_end_unit_resolution() {
        use std::fs;

        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("TileSets/Default/Units")).unwrap();
        fs::write(
            dir.path().join("TileSets/Default/Units/Warrior-Greek.png"),
            "",
        )
        .unwrap();

        let common = CommonArgs {
            assets: dir.path().to_path_buf(),
            themes: None,
            theme: "Default".to_string(),
            depth: 1,
            eras: vec!["Ancient era".to_string(), "Classical era".to_string()],
            json: false,
        };

        let table = build_table(&common, &Printer::new()).unwrap();
        let unit = UnitProfile::new("Warrior");
        let owner = CivProfile::new("Greece", "Classical era").with_style("Greek");

        assert_eq!(
            table.unit_image_path(&unit, &owner),
            "TileSets/Default/Units/Warrior-Greek"
        );
    }
}
