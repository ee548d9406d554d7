//! Multi-catalog progress tracking with automatic batching for large sets

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

/// Coordinates progress display while catalogs are processed
///
/// Small batches get one bar per catalog counting committed layouts; large
/// batches additionally get a single bar counting finished catalogs, and only
/// the most recent catalogs keep a visible bar.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    catalog_bars: Vec<ProgressBar>,
    next_bar: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static LAYOUT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Catalogs: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            catalog_bars: Vec::new(),
            next_bar: 0,
        }
    }

    /// Initialize progress bars based on catalog count
    pub fn initialize(&mut self, catalog_count: usize) {
        // Switch to batch mode for large sets to avoid terminal spam
        if catalog_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(catalog_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..catalog_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let bar = ProgressBar::new(0);
            bar.set_style(LAYOUT_STYLE.clone());
            self.catalog_bars.push(self.multi_progress.add(bar));
        }
    }

    /// Reuse the oldest bar for a catalog about to produce `layouts` layouts
    ///
    /// Returns the handle to pass to the other update methods.
    pub fn start_catalog(&mut self, path: &Path, layouts: usize) -> usize {
        let handle = self.next_bar;
        self.next_bar = (self.next_bar + 1) % self.catalog_bars.len().max(1);

        if let Some(bar) = self.catalog_bars.get(handle) {
            let display_name = path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();
            bar.set_length(layouts as u64);
            bar.set_position(0);
            bar.set_prefix(display_name);
            bar.set_message(String::new());
        }
        handle
    }

    /// Report a committed layout and the attempts it took
    pub fn layout_committed(&self, handle: usize, attempts: usize) {
        if let Some(bar) = self.catalog_bars.get(handle) {
            bar.inc(1);
            bar.set_message(format!("({attempts} attempts)"));
        }
    }

    /// Report a regeneration that was abandoned
    pub fn layout_abandoned(&self, handle: usize) {
        if let Some(bar) = self.catalog_bars.get(handle) {
            bar.inc(1);
            bar.set_message("(abandoned)");
        }
    }

    /// Mark a catalog as completed and update batch progress
    pub fn complete_catalog(&self, handle: usize) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
        if let Some(bar) = self.catalog_bars.get(handle) {
            let name = bar.prefix();
            bar.set_prefix(format!("✓ {name}"));
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All catalogs processed");
        }
        let _ = self.multi_progress.clear();
    }
}
