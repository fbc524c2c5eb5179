//! CLI entry point for deterministic identicon generation

use clap::Parser;
use identikon::io::cli::{Cli, NameProcessor};

fn main() -> identikon::Result<()> {
    let cli = Cli::parse();
    let processor = NameProcessor::new(cli);
    processor.process()
}
