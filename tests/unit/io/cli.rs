//! Tests for command-line interface parsing

#[cfg(test)]
mod tests {
    use clap::Parser;
    use gridstitch::io::cli::Cli;
    use gridstitch::io::configuration::{
        DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH, DEFAULT_OUTPUT_PATH, DEFAULT_TILE_DIRECTORY,
        DEFAULT_TILE_EXTENSION,
    };
    use std::path::PathBuf;

    // Tests CLI parsing with only the required positional arguments
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let args = vec!["gridstitch", "reference.png", "pieces.json"];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.reference, PathBuf::from("reference.png"));
        assert_eq!(cli.manifest, PathBuf::from("pieces.json"));
        assert_eq!(cli.tiles, PathBuf::from(DEFAULT_TILE_DIRECTORY));
        assert_eq!(cli.extension, DEFAULT_TILE_EXTENSION);
        assert_eq!(cli.output, PathBuf::from(DEFAULT_OUTPUT_PATH));
        assert_eq!(cli.cell_width, DEFAULT_CELL_WIDTH);
        assert_eq!(cli.cell_height, DEFAULT_CELL_HEIGHT);
        assert_eq!(cli.threads, None);
        assert!(!cli.quiet);
    }

    // Tests CLI parsing with every argument supplied
    // Verified by removing individual argument definitions
    #[test]
    fn test_cli_parse_all_args() {
        let args = vec![
            "gridstitch",
            "ref.png",
            "manifest.json",
            "--tiles",
            "pieces",
            "--extension",
            "png",
            "--output",
            "result.png",
            "--cell-width",
            "16",
            "--cell-height",
            "9",
            "--threads",
            "4",
            "--quiet",
        ];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.tiles, PathBuf::from("pieces"));
        assert_eq!(cli.extension, "png");
        assert_eq!(cli.output, PathBuf::from("result.png"));
        assert_eq!(cli.cell_width, 16);
        assert_eq!(cli.cell_height, 9);
        assert_eq!(cli.threads, Some(4));
        assert!(cli.quiet);
    }

    // Tests short flag parsing (-t, -e, -o, -j, -q)
    // Verified by changing short flag definitions
    #[test]
    fn test_cli_short_flags() {
        let args = vec![
            "gridstitch",
            "ref.png",
            "manifest.json",
            "-t",
            "pieces",
            "-e",
            "png",
            "-o",
            "out.png",
            "-j",
            "2",
            "-q",
        ];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.tiles, PathBuf::from("pieces"));
        assert_eq!(cli.extension, "png");
        assert_eq!(cli.output, PathBuf::from("out.png"));
        assert_eq!(cli.threads, Some(2));
        assert!(cli.quiet);
    }

    // Tests progress display follows the --quiet flag
    // Verified by inverting the quiet flag logic
    #[test]
    fn test_should_show_progress() {
        let cli = Cli::parse_from(vec!["gridstitch", "ref.png", "manifest.json"]);
        assert!(cli.should_show_progress());

        let quiet = Cli::parse_from(vec!["gridstitch", "ref.png", "manifest.json", "--quiet"]);
        assert!(!quiet.should_show_progress());
    }
}
