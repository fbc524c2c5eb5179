//! Command-line interface for identicon generation
//!
//! Resolves the input name from an argument or the interactive prompt,
//! runs the transform pipeline once, and exports the result.

use crate::io::configuration::{DEFAULT_OUTPUT_DIR, OUTPUT_EXTENSION};
use crate::io::error::{IdenticonError, Result};
use crate::io::image::export_identicon_as_png;
use crate::io::prompt;
use crate::pipeline::executor;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "identikon")]
#[command(
    author,
    version,
    about = "Generate deterministic identicon images from names"
)]
/// Command-line arguments for the identicon generator
pub struct Cli {
    /// Name to derive the identicon from; prompts interactively when omitted
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Directory where generated images are written
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Suppress status output
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate even if the output file already exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }
}

/// Orchestrates one generation run from name resolution to export
pub struct NameProcessor {
    cli: Cli,
}

impl NameProcessor {
    /// Create a new processor with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Resolve the input name, run the pipeline, and export the image
    ///
    /// The output file is named deterministically from the input:
    /// `<output-dir>/<name>.png`. When the file already exists it is
    /// skipped unless `--no-skip` was given.
    ///
    /// # Errors
    ///
    /// Returns an error if the name argument is blank, the prompt fails,
    /// or rendering/export fails.
    pub fn process(&self) -> Result<()> {
        let name = self.resolve_name()?;
        let output_path = self.output_path(&name);

        if self.cli.skip_existing() && output_path.exists() {
            self.report(&format!(
                "Skipping: {} (output exists)",
                output_path.display()
            ));
            return Ok(());
        }

        let identicon = executor::generate(&name)?;
        export_identicon_as_png(&identicon, &output_path)?;

        self.report(&format!("{} has been created!", output_path.display()));
        Ok(())
    }

    fn resolve_name(&self) -> Result<String> {
        match &self.cli.name {
            Some(raw) => {
                let name = raw.trim();
                if name.is_empty() {
                    Err(IdenticonError::EmptyName)
                } else {
                    Ok(name.to_string())
                }
            }
            None => {
                let stdin = std::io::stdin();
                let mut input = stdin.lock();
                let mut output = std::io::stdout();
                prompt::read_name(&mut input, &mut output)
            }
        }
    }

    fn output_path(&self, name: &str) -> PathBuf {
        self.cli
            .output_dir
            .join(format!("{name}.{OUTPUT_EXTENSION}"))
    }

    // Allow print for user feedback on generation status
    #[allow(clippy::print_stderr)]
    fn report(&self, message: &str) {
        if !self.cli.quiet {
            eprintln!("{message}");
        }
    }
}
