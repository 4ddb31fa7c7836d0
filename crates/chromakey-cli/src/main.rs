//! chromakey - sticker sheet tools
//!
//! Thin front end over the `chromakey` library: parses arguments, installs
//! the logger and maps each subcommand onto one library call.

mod args;

use anyhow::{Context, Result};
use args::{Cli, Commands};
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .init();

    match &cli.command {
        Commands::Split(args) => {
            let options = args.to_options()?;
            let report = chromakey::split_sheet(&args.sheet, &args.output_dir, &options)
                .with_context(|| format!("failed to split {}", args.sheet.display()))?;
            log::info!(
                "wrote {} stickers to {}",
                report.written.len(),
                args.output_dir.display()
            );
        }
        Commands::Recolor(args) => {
            chromakey::recolor_file(&args.input, &args.output, &args.to_options())
                .with_context(|| format!("failed to recolor {}", args.input.display()))?;
        }
        Commands::Fit(args) => {
            chromakey::fit_file(&args.input, &args.output, &args.to_options())
                .with_context(|| format!("failed to fit {}", args.input.display()))?;
        }
        Commands::MainTab { dir } => {
            chromakey::make_main_and_tab(dir)
                .with_context(|| format!("failed to build listing images in {}", dir.display()))?;
        }
        Commands::FixEven { dir } => {
            let report = chromakey::fix_even_dir(dir)?;
            if !report.failures.is_empty() {
                log::warn!("{} files could not be processed", report.failures.len());
            }
        }
    }

    Ok(())
}
