//! Themes command implementation.
//!
//! Loads the theme configuration and prints each theme with its fallback
//! chain.

use std::collections::HashSet;
use std::path::PathBuf;

use clap::Args;

use crate::config::{ThemeRegistry, THEMES_FILENAME};
use crate::error::Result;
use crate::output::Printer;

/// List configured themes and their fallback chains
#[derive(Args, Debug)]
pub struct ThemesArgs {
    /// Theme configuration file
    #[arg(default_value = THEMES_FILENAME)]
    pub themes: PathBuf,
}

pub fn run(args: ThemesArgs, printer: &Printer) -> Result<()> {
    let themes = ThemeRegistry::load(&args.themes)?;

    let mut names: Vec<&str> = themes.names().collect();
    names.sort();

    for name in names {
        let chain = fallback_chain(&themes, name);
        if chain.len() == 1 {
            printer.info("theme", name);
        } else {
            let arrow = format!(" {} ", printer.dim("->"));
            printer.info("theme", &chain.join(arrow.as_str()));
        }
    }

    Ok(())
}

/// The fallback chain starting at `name`, cycle-safe.
fn fallback_chain(themes: &ThemeRegistry, name: &str) -> Vec<String> {
    let mut chain = Vec::new();
    let mut visited = HashSet::new();
    let mut current = name.to_string();

    loop {
        if !visited.insert(current.clone()) {
            break;
        }
        chain.push(current.clone());

        match themes.lookup(&current).fallback {
            Some(next) => current = next,
            None => break,
        }
    }

    chain
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeConfig;

    #[test]
    fn test_fallback_chain() {
        let mut themes = ThemeRegistry::new();
        themes.insert("HighRes", ThemeConfig::with_fallback("Default"));
        themes.insert("Default", ThemeConfig::with_fallback("Classic"));
        themes.insert("Classic", ThemeConfig::default());

        assert_eq!(
            fallback_chain(&themes, "HighRes"),
            vec!["HighRes", "Default", "Classic"]
        );
        assert_eq!(fallback_chain(&themes, "Classic"), vec!["Classic"]);
    }

    #[test]
    fn test_fallback_chain_stops_on_cycle() {
        let mut themes = ThemeRegistry::new();
        themes.insert("A", ThemeConfig::with_fallback("B"));
        themes.insert("B", ThemeConfig::with_fallback("A"));

        assert_eq!(fallback_chain(&themes, "A"), vec!["A", "B"]);
    }
}
