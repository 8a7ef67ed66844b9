//! Tests for command-line parsing and command execution

#[cfg(test)]
mod tests {
    use crate::solid;
    use clap::Parser;
    use interweave::CompositeError;
    use interweave::algorithm::loader::ImageSpec;
    use interweave::io::cli::{Cli, Command, CommandProcessor, failure_message, init_logging};
    use interweave::io::configuration::SizeLimits;
    use interweave::io::image::{FileCodec, ImageCodec};
    use interweave::math::dimension::TilingPolicy;
    use interweave::spatial::Direction;
    use interweave::spatial::solid::SolidColor;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn temp_dir() -> TempDir {
        TempDir::new().unwrap_or_else(|e| unreachable!("temp dir failed: {e}"))
    }

    fn write_png(dir: &Path, name: &str, width: usize, height: usize, rgb: [u8; 3]) -> String {
        let path = dir.join(name);
        assert!(FileCodec.encode(&solid(width, height, rgb), &path).is_ok());
        path.to_string_lossy().to_string()
    }

    // Tests composite parsing with only the required arguments
    // Verified by changing the default mode
    #[test]
    fn test_composite_minimal_args() {
        let cli = Cli::parse_from(["interweave", "composite", "a.png", "b.png", "--output", "o.png"]);

        assert!(!cli.quiet);
        assert!(cli.should_show_progress());
        let Command::Composite(args) = cli.command else {
            unreachable!("Expected composite command");
        };
        assert_eq!(args.images, vec!["a.png", "b.png"]);
        assert_eq!(args.output, PathBuf::from("o.png"));
        assert_eq!(args.mode, Direction::Rows);
        assert_eq!(args.tile_mode, TilingPolicy::Max);
        assert!(args.stride.is_none());
    }

    // Tests composite parsing with every option and a placeholder
    // Verified by dropping the stride values after the first
    #[test]
    fn test_composite_all_args() {
        let cli = Cli::parse_from([
            "interweave",
            "composite",
            "a.png",
            "WHITE",
            "b.png",
            "-o",
            "o.png",
            "--mode",
            "columns",
            "--tile-mode",
            "lcm",
            "--stride",
            "1",
            "2",
            "1",
            "--quiet",
        ]);

        assert!(cli.quiet);
        let Command::Composite(args) = cli.command else {
            unreachable!("Expected composite command");
        };
        assert_eq!(args.stride, Some(vec![1, 2, 1]));

        let options = args.options();
        assert_eq!(options.direction, Direction::Columns);
        assert_eq!(options.policy, TilingPolicy::Lcm);

        let specs = args.specs();
        assert_eq!(specs.get(1), Some(&ImageSpec::SolidColor(SolidColor::White)));
        assert_eq!(specs.len(), 3);
    }

    // Tests interlace takes three positionals plus options
    // Verified by reordering the positional arguments
    #[test]
    fn test_interlace_args() {
        let cli = Cli::parse_from([
            "interweave",
            "interlace",
            "a.png",
            "black",
            "out.png",
            "-m",
            "columns",
        ]);

        let Command::Interlace(args) = cli.command else {
            unreachable!("Expected interlace command");
        };
        assert_eq!(args.image1, "a.png");
        assert_eq!(args.image2, "black");
        assert_eq!(args.output, PathBuf::from("out.png"));
        assert_eq!(args.mode, Direction::Columns);
        assert_eq!(args.tile_mode, TilingPolicy::Max);
    }

    // Tests invalid modes and a missing output are parse errors
    // Verified by making the output optional
    #[test]
    fn test_invalid_arguments_rejected() {
        assert!(
            Cli::try_parse_from(["interweave", "composite", "a", "b", "-o", "o", "-m", "diag"])
                .is_err()
        );
        assert!(Cli::try_parse_from(["interweave", "composite", "a", "b"]).is_err());
        assert!(Cli::try_parse_from(["interweave"]).is_err());
    }

    // Tests missing files get the file-not-found prefix
    // Verified by using the generic prefix for every error
    #[test]
    fn test_failure_message() {
        let missing = CompositeError::FileNotFound {
            path: PathBuf::from("gone.png"),
        };
        let too_many = CompositeError::TooManyImages { count: 7, max: 6 };

        assert!(failure_message(&missing).starts_with("✗ Error: File not found - "));
        assert!(failure_message(&missing).contains("gone.png"));
        assert_eq!(
            failure_message(&too_many),
            "✗ Error: A maximum of 6 images can be interleaved, got 7"
        );
    }

    // Tests a composite run writes an output of doubled height
    // Verified by writing the first input unchanged
    #[test]
    fn test_processor_composite_writes_output() {
        init_logging(false);
        let dir = temp_dir();
        let a = write_png(dir.path(), "a.png", 2, 2, [10, 10, 10]);
        let b = write_png(dir.path(), "b.png", 2, 2, [200, 200, 200]);
        let out = dir.path().join("out.png");
        let out_arg = out.to_string_lossy().to_string();

        let cli = Cli::parse_from([
            "interweave",
            "--quiet",
            "composite",
            a.as_str(),
            b.as_str(),
            "--output",
            out_arg.as_str(),
        ]);
        assert!(CommandProcessor::new(cli).process().is_ok());

        let decoded = FileCodec
            .decode(&out)
            .unwrap_or_else(|e| unreachable!("decode failed: {e}"));
        assert_eq!((decoded.width, decoded.height), (2, 4));
        assert_eq!(decoded.pixels.get((0, 0, 0)).copied(), Some(10));
        assert_eq!(decoded.pixels.get((1, 0, 0)).copied(), Some(200));
    }

    // Tests an interlace run keeps the input size
    // Verified by routing interlace through the interleaver
    #[test]
    fn test_processor_interlace_writes_output() {
        let dir = temp_dir();
        let a = write_png(dir.path(), "a.png", 3, 2, [255, 0, 0]);
        let out = dir.path().join("interlaced.png");
        let out_arg = out.to_string_lossy().to_string();

        let cli = Cli::parse_from([
            "interweave",
            "interlace",
            a.as_str(),
            "black",
            out_arg.as_str(),
            "--quiet",
        ]);
        assert!(CommandProcessor::new(cli).process().is_ok());

        let decoded = FileCodec
            .decode(&out)
            .unwrap_or_else(|e| unreachable!("decode failed: {e}"));
        assert_eq!((decoded.width, decoded.height), (3, 2));
        assert_eq!(decoded.pixels.get((0, 0, 0)).copied(), Some(255));
        assert_eq!(decoded.pixels.get((1, 0, 0)).copied(), Some(0));
    }

    // Tests a failed run leaves no output behind
    // Verified by encoding an empty buffer on failure
    #[test]
    fn test_processor_failure_writes_nothing() {
        let dir = temp_dir();
        let a = write_png(dir.path(), "a.png", 2, 2, [1, 1, 1]);
        let missing = dir.path().join("missing.png").to_string_lossy().to_string();
        let out = dir.path().join("out.png");
        let out_arg = out.to_string_lossy().to_string();

        let cli = Cli::parse_from([
            "interweave",
            "-q",
            "composite",
            a.as_str(),
            missing.as_str(),
            "-o",
            out_arg.as_str(),
        ]);
        let result = CommandProcessor::new(cli).process();

        assert!(matches!(result, Err(CompositeError::FileNotFound { .. })));
        assert!(!out.exists());
    }

    // Tests injected limits reach the loader
    // Verified by ignoring the limits in the processor
    #[test]
    fn test_processor_with_limits() {
        let dir = temp_dir();
        let a = write_png(dir.path(), "a.png", 5, 5, [1, 1, 1]);
        let out_arg = dir.path().join("out.png").to_string_lossy().to_string();

        let cli = Cli::parse_from([
            "interweave",
            "-q",
            "composite",
            a.as_str(),
            "white",
            "-o",
            out_arg.as_str(),
        ]);
        let result = CommandProcessor::with_limits(cli, SizeLimits::new(4, 4)).process();

        assert!(matches!(result, Err(CompositeError::ImageTooLarge { .. })));
    }

    // Tests a stride too large for the output is refused without writing
    // Verified by sizing the output with wrapping arithmetic
    #[test]
    fn test_processor_rejects_oversized_stride() {
        let dir = temp_dir();
        let a = write_png(dir.path(), "a.png", 4, 4, [1, 1, 1]);
        let out = dir.path().join("out.png");
        let out_arg = out.to_string_lossy().to_string();
        let huge = (1_usize << (usize::BITS - 2)).to_string();

        let cli = Cli::parse_from([
            "interweave",
            "-q",
            "composite",
            a.as_str(),
            "white",
            "-o",
            out_arg.as_str(),
            "--stride",
            "1",
            huge.as_str(),
        ]);
        let result = CommandProcessor::new(cli).process();

        assert!(matches!(result, Err(CompositeError::Computation { .. })));
        assert!(!out.exists());
    }
}
