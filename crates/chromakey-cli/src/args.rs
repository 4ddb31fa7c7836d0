//! Command-line interface definitions.

use chromakey::color::{RecolorOptions, ToleranceConfig};
use chromakey::sheet::{GridSpec, SheetOptions};
use chromakey::transform::CanvasOptions;
use chromakey::{MatteOptions, Rgb, Rgba};
use clap::{Args, Parser, Subcommand, ValueHint};
use std::path::PathBuf;

/// Turn chroma-key artwork sheets into transparent stickers
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Log debug details (overridden by RUST_LOG)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Default log filter for the chosen verbosity
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Slice a sheet into transparent NN.png stickers
    Split(SplitArgs),

    /// Recolor the background connected to the image border
    Recolor(RecolorArgs),

    /// Fit an image into a canvas, keeping its aspect ratio
    Fit(FitArgs),

    /// Build main.png (240x240) and tab.png (96x74) from 01.png and 02.png
    MainTab {
        /// Directory holding 01.png and 02.png
        #[arg(default_value = "main-tab", value_hint = ValueHint::DirPath)]
        dir: PathBuf,
    },

    /// Crop every odd-sized PNG under a directory to even dimensions
    FixEven {
        /// Directory to scan recursively
        #[arg(value_hint = ValueHint::DirPath)]
        dir: PathBuf,
    },
}

#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Sheet image
    #[arg(default_value = "1.png", value_hint = ValueHint::FilePath)]
    pub sheet: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "output_stamps", value_hint = ValueHint::DirPath)]
    pub output_dir: PathBuf,

    /// Number outputs after a first sheet (13.png onward for a 3x4 grid)
    #[arg(long, conflicts_with = "start_index")]
    pub second: bool,

    /// Index of the first output file
    #[arg(long, default_value_t = 1)]
    pub start_index: u32,

    /// Grid rows
    #[arg(long, default_value_t = 3)]
    pub rows: u32,

    /// Grid columns
    #[arg(long, default_value_t = 4)]
    pub cols: u32,

    /// Expected chroma-key color
    #[arg(long, default_value = "#0ED728")]
    pub key: Rgb,

    /// Distance at or below which a pixel becomes transparent
    #[arg(long, default_value_t = 35)]
    pub color_tolerance: u8,

    /// Distance up to which alpha fades in
    #[arg(long, default_value_t = 45)]
    pub fade_tolerance: u8,

    /// Distance bound for removing the rim next to transparent pixels
    #[arg(long, default_value_t = 90)]
    pub edge_threshold: u8,

    /// Outline width in pixels (0 disables it)
    #[arg(long, default_value_t = 2)]
    pub thickness: u32,

    /// Outline color
    #[arg(long, default_value = "#FFFFFF")]
    pub outline_color: Rgb,
}

impl SplitArgs {
    /// Build validated sheet options
    pub fn to_options(&self) -> chromakey::Result<SheetOptions> {
        let tolerance = ToleranceConfig::new(self.color_tolerance, self.fade_tolerance)?;
        let matte = MatteOptions::default()
            .with_background_hint(self.key)
            .with_tolerance(tolerance)
            .with_edge_cleanup_threshold(self.edge_threshold)
            .with_outline_thickness(self.thickness)
            .with_outline_color(self.outline_color.with_alpha(255));
        let options = SheetOptions::default()
            .with_grid(GridSpec::new(self.rows, self.cols)?)
            .with_matte(matte);
        Ok(if self.second {
            options.second_sheet()
        } else {
            options.with_start_index(self.start_index)
        })
    }
}

#[derive(Args, Debug)]
pub struct RecolorArgs {
    /// Input PNG
    #[arg(value_hint = ValueHint::FilePath)]
    pub input: PathBuf,

    /// Output PNG
    #[arg(value_hint = ValueHint::FilePath)]
    pub output: PathBuf,

    /// Background color to replace
    #[arg(long, default_value = "#FFFFFF")]
    pub from_color: Rgb,

    /// Replacement color
    #[arg(long, default_value = "#0ED728")]
    pub to_color: Rgb,

    /// Per-channel tolerance around the source color
    #[arg(long, default_value_t = 20)]
    pub tolerance: u8,
}

impl RecolorArgs {
    pub fn to_options(&self) -> RecolorOptions {
        RecolorOptions::default()
            .with_from(self.from_color)
            .with_to(self.to_color)
            .with_tolerance(self.tolerance)
    }
}

#[derive(Args, Debug)]
pub struct FitArgs {
    /// Input PNG
    #[arg(value_hint = ValueHint::FilePath)]
    pub input: PathBuf,

    /// Output PNG
    #[arg(value_hint = ValueHint::FilePath)]
    pub output: PathBuf,

    /// Canvas width
    #[arg(long, default_value_t = 240)]
    pub width: u32,

    /// Canvas height
    #[arg(long, default_value_t = 240)]
    pub height: u32,

    /// Canvas color, #RRGGBB or #RRGGBBAA (transparent when omitted)
    #[arg(long)]
    pub background: Option<Rgba>,
}

impl FitArgs {
    pub fn to_options(&self) -> CanvasOptions {
        CanvasOptions::default()
            .with_size(self.width, self.height)
            .with_background(self.background.unwrap_or(Rgba::TRANSPARENT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_split_defaults() {
        let cli = Cli::parse_from(["chromakey", "split"]);
        let Commands::Split(args) = cli.command else {
            panic!("expected split");
        };
        let options = args.to_options().unwrap();
        assert_eq!(options, SheetOptions::default());
        assert_eq!(args.output_dir, PathBuf::from("output_stamps"));
    }

    #[test]
    fn test_split_second_sheet() {
        let cli = Cli::parse_from(["chromakey", "split", "2.png", "--second"]);
        let Commands::Split(args) = cli.command else {
            panic!("expected split");
        };
        assert_eq!(args.to_options().unwrap().start_index, 13);
    }

    #[test]
    fn test_split_rejects_empty_fade_band() {
        let cli = Cli::parse_from([
            "chromakey",
            "split",
            "--color-tolerance",
            "50",
            "--fade-tolerance",
            "50",
        ]);
        let Commands::Split(args) = cli.command else {
            panic!("expected split");
        };
        assert!(args.to_options().is_err());
    }

    #[test]
    fn test_bad_color_rejected_by_parser() {
        assert!(Cli::try_parse_from(["chromakey", "recolor", "a.png", "b.png", "--to-color", "0ED728"]).is_err());
    }

    #[test]
    fn test_fit_background() {
        let cli = Cli::parse_from(["chromakey", "fit", "a.png", "b.png", "--background", "#FFFFFF80"]);
        let Commands::Fit(args) = cli.command else {
            panic!("expected fit");
        };
        assert_eq!(args.to_options().background, Rgba::new(255, 255, 255, 128));

        let cli = Cli::parse_from(["chromakey", "fit", "a.png", "b.png"]);
        let Commands::Fit(args) = cli.command else {
            panic!("expected fit");
        };
        assert_eq!(args.to_options().background, Rgba::TRANSPARENT);
        assert_eq!(args.to_options().width, 240);
    }
}
