//! Command-line interface for batch generation of layouts from catalog files

use crate::algorithm::controller::Generator;
use crate::io::catalog_file::load_catalog;
use crate::io::configuration::{
    CATALOG_EXTENSION, DEFAULT_ITERATION_THRESHOLD, DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_SIZE,
    DEFAULT_MIN_SIZE, DEFAULT_SEED, GenerationConfig, OUTPUT_EXTENSION, OUTPUT_SUFFIX,
};
use crate::io::error::{GenerationError, Result, file_system_error, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::io::renderer::JsonLinesRenderer;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "roomchain")]
#[command(
    author,
    version,
    about = "Generate dungeon layouts from room and hallway catalogs"
)]
/// Command-line arguments for the layout generation tool
pub struct Cli {
    /// Catalog JSON file or directory of catalogs to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Maximum number of rooms, start included
    #[arg(long, default_value_t = DEFAULT_MAX_SIZE)]
    pub max_size: usize,

    /// Minimum number of rooms in an accepted layout
    #[arg(long, default_value_t = DEFAULT_MIN_SIZE)]
    pub min_size: usize,

    /// Search-node budget per attempt before restarting
    #[arg(short = 't', long, default_value_t = DEFAULT_ITERATION_THRESHOLD)]
    pub threshold: usize,

    /// Attempts allowed per layout before abandoning
    #[arg(short, long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub attempts: usize,

    /// Wall-clock limit per layout in seconds
    #[arg(long, value_name = "SECONDS")]
    pub time_limit: Option<u64>,

    /// Layouts to generate per catalog
    #[arg(short, long, default_value_t = 1)]
    pub count: usize,

    /// Process catalogs even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log level selected by the verbosity flags
    pub const fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }

    /// Generation parameters from the command line
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are inconsistent or no layouts are requested
    pub fn generation_config(&self) -> Result<GenerationConfig> {
        if self.count == 0 {
            return Err(invalid_parameter(
                "count",
                &self.count,
                &"at least one layout is required",
            ));
        }
        let config = GenerationConfig::default()
            .with_size(self.min_size, self.max_size)
            .with_iteration_threshold(self.threshold)
            .with_max_attempts(self.attempts)
            .with_time_limit(self.time_limit.map(Duration::from_secs));
        config.validate()?;
        Ok(config)
    }
}

/// Orchestrates batch processing of catalog files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process catalogs according to CLI arguments
    ///
    /// Abandoned layouts are reported and skipped; configuration and file
    /// errors stop processing immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if the target, a catalog or the parameters are invalid,
    /// or if output cannot be written
    pub fn process(&mut self) -> Result<()> {
        let config = self.cli.generation_config()?;
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            self.process_file(file, config)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if Self::is_catalog(&self.cli.target) {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_parameter(
                    "target",
                    &self.cli.target.display(),
                    &"must be a .json catalog file",
                ))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            let entries = std::fs::read_dir(&self.cli.target)
                .map_err(|source| file_system_error(&self.cli.target, "list catalogs", source))?;
            for entry in entries {
                let path = entry?.path();
                if Self::is_catalog(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &self.cli.target.display(),
                &"must be a catalog file or directory",
            ))
        }
    }

    fn is_catalog(path: &Path) -> bool {
        path.extension().and_then(|s| s.to_str()) == Some(CATALOG_EXTENSION)
    }

    fn should_process_file(&self, catalog_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(catalog_path);
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", catalog_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, catalog_path: &Path, config: GenerationConfig) -> Result<()> {
        let output_path = Self::get_output_path(catalog_path);
        let catalog = load_catalog(catalog_path)?;

        let handle = self
            .progress_manager
            .as_mut()
            .map(|pm| pm.start_catalog(catalog_path, self.cli.count));

        let output = File::create(&output_path)
            .map_err(|source| file_system_error(&output_path, "create output", source))?;
        let renderer = JsonLinesRenderer::new(BufWriter::new(output));
        let rng = StdRng::seed_from_u64(self.cli.seed);
        let mut generator = Generator::new(catalog, config, rng, renderer)?;

        for index in 0..self.cli.count {
            match generator.regenerate() {
                Ok(layout) => {
                    log::info!(
                        "{}: layout {index} has {} rooms",
                        catalog_path.display(),
                        layout.room_count()
                    );
                    if let (Some(pm), Some(handle)) = (&self.progress_manager, handle) {
                        pm.layout_committed(handle, layout.attempts());
                    }
                }
                Err(error @ GenerationError::Abandoned { .. }) => {
                    log::warn!("{}: layout {index}: {error}", catalog_path.display());
                    if let (Some(pm), Some(handle)) = (&self.progress_manager, handle) {
                        pm.layout_abandoned(handle);
                    }
                }
                Err(error) => return Err(error),
            }
        }

        let renderer = generator.into_renderer();
        let written = renderer.written();
        renderer.into_inner()?;

        // An empty output would make later runs skip this catalog
        if written == 0 {
            std::fs::remove_file(&output_path)
                .map_err(|source| file_system_error(&output_path, "remove empty output", source))?;
        }

        if let (Some(pm), Some(handle)) = (&self.progress_manager, handle) {
            pm.complete_catalog(handle);
        }

        Ok(())
    }

    /// Output path for a catalog: `<stem>_layout.jsonl` beside it
    pub fn get_output_path(catalog_path: &Path) -> PathBuf {
        let stem = catalog_path.file_stem().unwrap_or_default();
        let output_name = format!(
            "{}{OUTPUT_SUFFIX}.{OUTPUT_EXTENSION}",
            stem.to_string_lossy()
        );

        if let Some(parent) = catalog_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
