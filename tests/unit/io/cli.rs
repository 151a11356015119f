//! Tests for command-line parsing and end-to-end search runs

#[cfg(test)]
mod tests {
    use clap::Parser;
    use gridreach::SearchError;
    use gridreach::algorithm::tolerance::AdmissionPolicy;
    use gridreach::io::cli::{Cli, SearchRunner};
    use gridreach::io::configuration::{
        CONTINUE_PROMPT, DEFAULT_CELL_SIZE, DEFAULT_DELIMITER, EXIT_PROMPT,
    };
    use gridreach::spatial::Coordinate;
    use std::io::{Cursor, Write};
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn csv_file(contents: &str) -> NamedTempFile {
        let mut file =
            NamedTempFile::new().unwrap_or_else(|e| unreachable!("temp file can be created: {e}"));
        file.write_all(contents.as_bytes())
            .unwrap_or_else(|e| unreachable!("temp file is writable: {e}"));
        file
    }

    fn run(args: &[&str], stdin: &str) -> (Result<usize, SearchError>, String) {
        let runner = SearchRunner::new(Cli::parse_from(args));
        let mut out = Vec::new();
        let mut input = Cursor::new(stdin.as_bytes().to_vec());
        let result = runner
            .run_with(&mut out, &mut input)
            .map(|region| region.len());
        (result, String::from_utf8_lossy(&out).into_owned())
    }

    // Tests CLI parsing with only the positional arguments
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program", "grid.csv", "3", "1", "3", "3"]);

        assert_eq!(cli.file, PathBuf::from("grid.csv"));
        assert_eq!(cli.x, "3");
        assert_eq!(cli.y, "1");
        assert_eq!(cli.upper_limit, "3");
        assert_eq!(cli.lower_limit, "3");
        assert_eq!(cli.policy, AdmissionPolicy::Relative);
        assert_eq!(cli.delimiter, ',');
        assert_eq!(cli.cell_size, DEFAULT_CELL_SIZE);
        assert!(cli.max_expansions.is_none());
        assert!(cli.png.is_none());
        assert!(!cli.quiet);
        assert!(!cli.interactive);
        assert!(cli.delimiter_byte().is_ok_and(|b| b == DEFAULT_DELIMITER));
    }

    // Tests the policy option goes through the case-insensitive name parser
    // Verified by matching policy names case-sensitively
    #[test]
    fn test_cli_parse_policy_names() {
        let cli = Cli::parse_from(["program", "grid.csv", "0", "0", "1", "1", "-p", "Anchored"]);
        assert_eq!(cli.policy, AdmissionPolicy::Anchored);

        let rejected =
            Cli::try_parse_from(["program", "grid.csv", "0", "0", "1", "1", "--policy", "fuzzy"]);
        assert!(rejected.is_err());
    }

    // Tests negative numbers are taken as positional values, not flags
    #[test]
    fn test_cli_parse_negative_numbers() {
        let cli = Cli::parse_from(["program", "grid.csv", "-1", "0", "2.5", "-0.5"]);
        assert_eq!(cli.x, "-1");
        assert_eq!(cli.lower_limit, "-0.5");
    }

    // Tests CLI parsing with all available options
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "grid.tsv",
            "0",
            "0",
            "1",
            "1",
            "--policy",
            "absolute",
            "--delimiter",
            ";",
            "--max-expansions",
            "10",
            "--png",
            "out.png",
            "--cell-size",
            "8",
            "--interactive",
            "--quiet",
        ]);

        assert_eq!(cli.policy, AdmissionPolicy::Absolute);
        assert_eq!(cli.delimiter, ';');
        assert_eq!(cli.max_expansions, Some(10));
        assert_eq!(cli.png, Some(PathBuf::from("out.png")));
        assert_eq!(cli.cell_size, 8);
        assert!(cli.interactive);
        assert!(cli.quiet);
        assert!(cli.delimiter_byte().is_ok_and(|b| b == b';'));
    }

    // Tests non-ASCII delimiters are rejected
    #[test]
    fn test_delimiter_must_be_ascii() {
        let cli = Cli::parse_from(["program", "grid.csv", "0", "0", "1", "1", "-d", "é"]);
        assert!(matches!(
            cli.delimiter_byte(),
            Err(SearchError::InvalidArgument { .. })
        ));
    }

    // Tests upper and lower limits land in the right band fields
    // Verified by swapping the limit arguments passed to the request parser
    #[test]
    fn test_request_maps_limits() {
        let cli = Cli::parse_from(["program", "grid.csv", "2", "1", "5", "0.5"]);
        let request = cli
            .request()
            .unwrap_or_else(|e| unreachable!("arguments are well formed: {e}"));
        assert_eq!((request.x, request.y), (2, 1));
        assert!((request.band.upper_limit - 5.0).abs() < f64::EPSILON);
        assert!((request.band.lower_limit - 0.5).abs() < f64::EPSILON);
    }

    // Tests invalid arguments are reported before the file is touched
    // Verified by loading the grid before parsing the request
    #[test]
    fn test_invalid_argument_precedes_io() {
        let (result, output) = run(
            &["program", "missing/grid.csv", "abc", "0", "1", "1"],
            "",
        );
        assert!(matches!(result, Err(SearchError::InvalidArgument { .. })));
        assert!(output.is_empty());
    }

    // Tests an out-of-bounds start is reported without printing views
    #[test]
    fn test_out_of_bounds_start() {
        let file = csv_file("0,1,2\n3,4,5\n6,7,8\n");
        let path = file.path().to_string_lossy().into_owned();
        let (result, output) = run(&["program", &path, "5", "0", "1", "1"], "");

        assert!(matches!(
            result,
            Err(SearchError::OutOfBounds { x: 5, width: 2, .. })
        ));
        assert!(output.is_empty());
    }

    // Tests quiet mode prints only the sorted coordinates
    #[test]
    fn test_quiet_run_lists_coordinates() {
        let file = csv_file("0,1\n1,0\n");
        let path = file.path().to_string_lossy().into_owned();
        let (result, output) = run(
            &["program", &path, "0", "0", "1", "0", "--policy", "absolute", "--quiet"],
            "",
        );

        assert!(result.is_ok_and(|len| len == 4));
        assert_eq!(output, "0,0\n1,0\n0,1\n1,1\n");
    }

    // Tests the default run prints all three views and a summary
    #[test]
    fn test_run_prints_views() {
        let file = csv_file("0,1\n1,0\n");
        let path = file.path().to_string_lossy().into_owned();
        let (result, output) = run(
            &["program", &path, "0", "0", "0", "0", "--policy", "absolute"],
            "",
        );

        assert!(result.is_ok_and(|len| len == 1));
        assert!(output.contains("Loaded data set"));
        assert!(output.contains("Target cell marked with X"));
        assert!(output.contains("Connected cells circumfixed by *"));
        assert!(output.contains("*0X*"));
        assert!(output.contains("1 connected cell from start (0, 0)"));
        assert!(!output.contains(CONTINUE_PROMPT));
    }

    // Tests interactive mode prompts between views and consumes input
    #[test]
    fn test_interactive_run_prompts() {
        let file = csv_file("0,1\n1,0\n");
        let path = file.path().to_string_lossy().into_owned();
        let (result, output) = run(
            &["program", &path, "1", "1", "1", "1", "--interactive"],
            "\n\n\n",
        );

        assert!(result.is_ok());
        assert_eq!(output.matches(CONTINUE_PROMPT).count(), 2);
        assert_eq!(output.matches(EXIT_PROMPT).count(), 1);
    }

    // Tests the PNG option writes an image next to the text output
    #[test]
    fn test_png_export() {
        let file = csv_file("0,1\n1,0\n");
        let path = file.path().to_string_lossy().into_owned();
        let dir = tempfile::tempdir().unwrap_or_else(|e| unreachable!("temp dir: {e}"));
        let png = dir.path().join("region.png");
        let png_arg = png.to_string_lossy().into_owned();

        let (result, _) = run(
            &["program", &path, "0", "0", "1", "1", "--quiet", "--png", &png_arg],
            "",
        );

        assert!(result.is_ok());
        assert!(png.exists());
    }

    // Tests the expansion budget flows through to the search
    #[test]
    fn test_max_expansions_option() {
        let file = csv_file("0,1,2,3,4\n");
        let path = file.path().to_string_lossy().into_owned();
        let runner = SearchRunner::new(Cli::parse_from([
            "program",
            path.as_str(),
            "0",
            "0",
            "1",
            "0",
            "--max-expansions",
            "2",
            "--quiet",
        ]));

        let mut out = Vec::new();
        let region = runner
            .run_with(&mut out, &mut Cursor::new(Vec::new()))
            .unwrap_or_else(|e| unreachable!("search succeeds: {e}"));
        assert!(!region.is_complete());
        assert_eq!(region.len(), 3);
        assert!(region.contains(Coordinate::new(2, 0)));
        assert_eq!(runner.cli().max_expansions, Some(2));
    }
}
