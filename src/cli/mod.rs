pub mod completions;
pub mod init;
pub mod resolve;
pub mod themes;
pub mod validate;

use clap::{Parser, Subcommand};

/// tilepath - Themed tile and unit image path resolver
#[derive(Parser, Debug)]
#[command(name = "tilepath")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a unit or owned-tile image path against an asset directory
    Resolve(resolve::ResolveArgs),

    /// List configured themes and their fallback chains
    Themes(themes::ThemesArgs),

    /// Validate theme configurations against the asset directory
    Validate(validate::ValidateArgs),

    /// Initialize a themes.yaml from discovered tileset directories
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
