//! Command-line interface for the composite and interlace commands

use crate::algorithm::executor::{CompositeOptions, Compositor};
use crate::algorithm::loader::ImageSpec;
use crate::io::configuration::SizeLimits;
use crate::io::error::{CompositeError, Result};
use crate::io::image::FileCodec;
use crate::io::progress::ProgressManager;
use crate::math::dimension::TilingPolicy;
use crate::spatial::buffer::Direction;
use clap::{Args, Parser, Subcommand};
use log::debug;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "interweave")]
#[command(
    author,
    version,
    about = "Create composites by alternating rows or columns from 2 to 6 images",
    after_help = "Inputs may be the words 'white' or 'black' instead of a path to use a solid \
                  placeholder.\nWith --tile-mode lcm both width and height are tiled to their \
                  least common multiple, whichever --mode is chosen.\n\nExamples:\n  \
                  interweave composite a.png b.png --output out.png --mode rows\n  \
                  interweave composite a.png white b.png -o out.png --stride 1 2 1\n  \
                  interweave interlace a.png b.png out.png --mode columns"
)]
/// Command-line arguments for the compositing tool
pub struct Cli {
    /// Operation to run
    #[command(subcommand)]
    pub command: Command,

    /// Suppress progress and success output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log pipeline details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available operations
#[derive(Subcommand)]
pub enum Command {
    /// Interleave rows or columns of 2 to 6 images into a larger output
    Composite(CompositeArgs),
    /// Interlace two images into an output of the same size
    Interlace(InterlaceArgs),
}

/// Arguments of the `composite` command
#[derive(Args)]
pub struct CompositeArgs {
    /// Input image paths (2-6); 'white' or 'black' for solid placeholders
    #[arg(value_name = "IMAGES", required = true, num_args = 1..)]
    pub images: Vec<String>,

    /// Output image path
    #[arg(short, long)]
    pub output: PathBuf,

    /// Alternation mode
    #[arg(short, long, value_enum, default_value_t = Direction::Rows)]
    pub mode: Direction,

    /// Tiling mode for inputs of differing size
    #[arg(short, long, value_enum, default_value_t = TilingPolicy::Max)]
    pub tile_mode: TilingPolicy,

    /// Rows or columns to take from each image per cycle, e.g. --stride 1 2 1
    #[arg(short, long, num_args = 1..)]
    pub stride: Option<Vec<usize>>,
}

/// Arguments of the `interlace` command
#[derive(Args)]
pub struct InterlaceArgs {
    /// First input; supplies the even rows or columns
    pub image1: String,

    /// Second input; supplies the odd rows or columns
    pub image2: String,

    /// Output image path
    pub output: PathBuf,

    /// Alternation mode
    #[arg(short, long, value_enum, default_value_t = Direction::Rows)]
    pub mode: Direction,

    /// Tiling mode for inputs of differing size
    #[arg(short, long, value_enum, default_value_t = TilingPolicy::Max)]
    pub tile_mode: TilingPolicy,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

impl CompositeArgs {
    /// Parsed inputs in argument order
    pub fn specs(&self) -> Vec<ImageSpec> {
        self.images
            .iter()
            .map(String::as_str)
            .map(ImageSpec::from)
            .collect()
    }

    /// Compositing options carried by the arguments
    pub fn options(&self) -> CompositeOptions {
        CompositeOptions {
            direction: self.mode,
            policy: self.tile_mode,
            stride: self.stride.clone(),
        }
    }
}

/// Install the stderr logger; `RUST_LOG` overrides the level chosen here
pub fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    // A second initialisation (tests, embedding) keeps the first logger
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init();
}

/// User-facing message for a failed run
pub fn failure_message(error: &CompositeError) -> String {
    match error {
        CompositeError::FileNotFound { .. } => format!("✗ Error: File not found - {error}"),
        _ => format!("✗ Error: {error}"),
    }
}

/// Runs the parsed command with progress reporting
pub struct CommandProcessor {
    cli: Cli,
    compositor: Compositor<FileCodec>,
    progress_manager: ProgressManager,
}

impl CommandProcessor {
    /// Create a processor with the default size limits
    pub fn new(cli: Cli) -> Self {
        Self::with_limits(cli, SizeLimits::default())
    }

    /// Create a processor with explicit size limits
    pub fn with_limits(cli: Cli, limits: SizeLimits) -> Self {
        let progress_manager = if cli.should_show_progress() {
            ProgressManager::new()
        } else {
            ProgressManager::hidden()
        };

        Self {
            cli,
            compositor: Compositor::new(FileCodec, limits),
            progress_manager,
        }
    }

    /// Run the command; the output file is written only on success
    ///
    /// # Errors
    ///
    /// Returns the first validation, decoding, compositing, or write error
    pub fn process(&mut self) -> Result<()> {
        let result = match &self.cli.command {
            Command::Composite(args) => {
                let specs = args.specs();
                let options = args.options();
                debug!(
                    "composite of {} inputs by {} under {} tiling",
                    specs.len(),
                    options.direction,
                    options.policy
                );
                self.compositor
                    .composite_to_file(&specs, &options, &args.output, &mut self.progress_manager)
                    .map(|()| args.output.as_path())
            }
            Command::Interlace(args) => {
                debug!(
                    "interlace of {} and {} by {} under {} tiling",
                    args.image1, args.image2, args.mode, args.tile_mode
                );
                self.compositor
                    .interlace_to_file(
                        &ImageSpec::parse(&args.image1),
                        &ImageSpec::parse(&args.image2),
                        args.mode,
                        args.tile_mode,
                        &args.output,
                        &mut self.progress_manager,
                    )
                    .map(|()| args.output.as_path())
            }
        };

        self.progress_manager.finish();
        debug!("{} stages completed", self.progress_manager.completed());

        self.report_success(result?);
        Ok(())
    }

    // Allow print for the success confirmation
    #[allow(clippy::print_stdout)]
    fn report_success(&self, output: &Path) {
        if self.cli.quiet {
            return;
        }
        let label = match self.cli.command {
            Command::Composite(_) => "Composite",
            Command::Interlace(_) => "Interlace",
        };
        println!("✓ {label} created successfully: {}", output.display());
    }
}
