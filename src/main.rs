use clap::Parser;
use miette::Result;
use tilepath::cli::{Cli, Commands};
use tilepath::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Resolve(args) => tilepath::cli::resolve::run(args, &printer)?,
        Commands::Themes(args) => tilepath::cli::themes::run(args, &printer)?,
        Commands::Validate(args) => tilepath::cli::validate::run(args, &printer)?,
        Commands::Init(args) => tilepath::cli::init::run(args, &printer)?,
        Commands::Completions(args) => tilepath::cli::completions::run(args)?,
    }

    Ok(())
}
