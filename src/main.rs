//! CLI entry point for dungeon layout generation

use clap::Parser;
use roomchain::io::cli::{Cli, FileProcessor};

fn main() -> roomchain::Result<()> {
    let cli = Cli::parse();

    // Target and location output only add noise for a single-crate tool
    let _ = simplelog::TermLogger::init(
        cli.log_level(),
        simplelog::ConfigBuilder::new()
            .set_target_level(simplelog::LevelFilter::Off)
            .set_location_level(simplelog::LevelFilter::Off)
            .build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );

    let mut processor = FileProcessor::new(cli);
    processor.process()
}
