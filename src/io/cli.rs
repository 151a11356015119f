//! Command-line interface for searching a CSV grid from a start cell

use crate::algorithm::search::{ConnectedRegion, ConnectivitySearch, SearchRequest};
use crate::algorithm::tolerance::AdmissionPolicy;
use crate::io::configuration::{
    CONTINUE_PROMPT, DEFAULT_CELL_SIZE, DEFAULT_DELIMITER, EXIT_PROMPT,
};
use crate::io::error::{Result, SearchError, invalid_argument};
use crate::io::image::export_region_as_png;
use crate::io::loader::CsvLoader;
use crate::io::presenter::{GridPresenter, MarkStage};
use crate::spatial::Grid;
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gridreach")]
#[command(
    author,
    version,
    about = "Find the grid cells connected to a start cell within a tolerance band"
)]
/// Command-line arguments for the connected region search
pub struct Cli {
    /// CSV file of numbers to search
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Start column, counted from 0
    #[arg(value_name = "X", allow_negative_numbers = true)]
    pub x: String,

    /// Start row, counted from 0
    #[arg(value_name = "Y", allow_negative_numbers = true)]
    pub y: String,

    /// Upper limit of the tolerance band
    #[arg(value_name = "UPPER", allow_negative_numbers = true)]
    pub upper_limit: String,

    /// Lower limit of the tolerance band
    #[arg(value_name = "LOWER", allow_negative_numbers = true)]
    pub lower_limit: String,

    /// How the tolerance band is anchored: relative, anchored or absolute
    #[arg(short, long, value_name = "POLICY", default_value_t = AdmissionPolicy::Relative)]
    pub policy: AdmissionPolicy,

    /// Field delimiter of the input file
    #[arg(short, long, default_value_t = char::from(DEFAULT_DELIMITER))]
    pub delimiter: char,

    /// Stop after expanding this many cells
    #[arg(short, long, value_name = "N")]
    pub max_expansions: Option<usize>,

    /// Also write the marked grid as a PNG image
    #[arg(long, value_name = "PATH")]
    pub png: Option<PathBuf>,

    /// Pixels per cell in the PNG image
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: u32,

    /// Pause for Enter between the printed views
    #[arg(short, long)]
    pub interactive: bool,

    /// Print only the connected coordinates
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Field delimiter as a single byte
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the delimiter is not an ASCII character
    pub fn delimiter_byte(&self) -> Result<u8> {
        u8::try_from(self.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or_else(|| {
                invalid_argument("delimiter", &self.delimiter, &"must be a single ASCII character")
            })
    }

    /// Parse the positional start and limit arguments
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if an index is not an integer or a limit is
    /// not a number
    pub fn request(&self) -> Result<SearchRequest<f64>> {
        SearchRequest::parse(&self.x, &self.y, &self.lower_limit, &self.upper_limit)
    }
}

/// Runs one search from parsed arguments and presents the outcome
pub struct SearchRunner {
    cli: Cli,
}

impl SearchRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Arguments this runner was created with
    pub const fn cli(&self) -> &Cli {
        &self.cli
    }

    /// Run against the process's standard output and input
    ///
    /// # Errors
    ///
    /// See [`SearchRunner::run_with`]
    pub fn run(&self) -> Result<ConnectedRegion> {
        let stdout = std::io::stdout();
        let stdin = std::io::stdin();
        self.run_with(&mut stdout.lock(), &mut stdin.lock())
    }

    /// Validate arguments, load the grid, search, and write the views
    ///
    /// Argument validation happens before the file is read, so a malformed
    /// coordinate or limit never triggers any I/O.
    ///
    /// # Errors
    ///
    /// Returns an error if arguments are invalid, the file cannot be loaded,
    /// the start cell is out of bounds, or output cannot be written
    pub fn run_with<W: Write, R: BufRead>(
        &self,
        out: &mut W,
        input: &mut R,
    ) -> Result<ConnectedRegion> {
        let request = self.cli.request()?;
        let delimiter = self.cli.delimiter_byte()?;

        let grid: Grid<f64> = CsvLoader::new()
            .with_delimiter(delimiter)
            .load_path(&self.cli.file)?;

        let region = ConnectivitySearch::new(&grid)
            .with_policy(self.cli.policy)
            .with_max_expansions(self.cli.max_expansions)
            .run(&request)?;

        log::info!(
            "found {} connected cells from {} using the {} policy",
            region.len(),
            region.start(),
            self.cli.policy
        );

        self.present(&grid, &region, out, input)?;

        if let Some(png) = &self.cli.png {
            export_region_as_png(&grid, &region, self.cli.cell_size, png)?;
        }

        Ok(region)
    }

    fn present<W: Write, R: BufRead>(
        &self,
        grid: &Grid<f64>,
        region: &ConnectedRegion,
        out: &mut W,
        input: &mut R,
    ) -> Result<()> {
        let presenter = GridPresenter::new(grid, region);

        if self.cli.quiet {
            write!(out, "{}", presenter.coordinate_list()).map_err(output_error)?;
            return out.flush().map_err(output_error);
        }

        let last = MarkStage::ALL.len() - 1;
        for (index, stage) in MarkStage::ALL.into_iter().enumerate() {
            write!(out, "{}", presenter.render(stage)).map_err(output_error)?;
            writeln!(out, "{}", stage.caption()).map_err(output_error)?;

            if self.cli.interactive {
                let prompt = if index == last {
                    EXIT_PROMPT
                } else {
                    CONTINUE_PROMPT
                };
                writeln!(out, "{prompt}").map_err(output_error)?;
                out.flush().map_err(output_error)?;

                let mut line = String::new();
                input
                    .read_line(&mut line)
                    .map_err(|e| SearchError::FileSystem {
                        path: PathBuf::from("<stdin>"),
                        operation: "read prompt response",
                        source: e,
                    })?;
            }
        }

        writeln!(out, "{}", presenter.summary()).map_err(output_error)?;
        out.flush().map_err(output_error)
    }
}

fn output_error(source: std::io::Error) -> SearchError {
    SearchError::FileSystem {
        path: PathBuf::from("<stdout>"),
        operation: "write output",
        source,
    }
}
