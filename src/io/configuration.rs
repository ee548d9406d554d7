//! Generation constants and runtime configuration

use crate::io::error::{Result, invalid_parameter};
use std::time::Duration;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default upper bound on placed rooms, start included
pub const DEFAULT_MAX_SIZE: usize = 12;

/// Default lower bound on placed rooms in an accepted layout
pub const DEFAULT_MIN_SIZE: usize = 6;

/// Default search-node budget per attempt
pub const DEFAULT_ITERATION_THRESHOLD: usize = 10_000;

// Restarts are otherwise unbounded
/// Default number of attempts before abandoning
pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

// Grid bounds keeping coordinate arithmetic within i32
/// Largest magnitude allowed for a template-relative coordinate
pub const MAX_TEMPLATE_EXTENT: i32 = 1024;

/// Largest room count a layout may be configured for
///
/// Each placement moves at most `2 * MAX_TEMPLATE_EXTENT + 1` cells from the
/// previous room, so this many rooms stay far from `i32::MAX`.
pub const MAX_ROOMS: usize = 100_000;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_layout";
/// Extension of layout output files (one JSON document per line)
pub const OUTPUT_EXTENSION: &str = "jsonl";
/// Extension of catalog input files
pub const CATALOG_EXTENSION: &str = "json";

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

/// Bounds and budgets for one generation request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Upper bound on placed rooms, start included
    pub max_size: usize,
    /// Lower bound on placed rooms in an accepted layout
    pub min_size: usize,
    /// Search-node visits allowed per attempt before restarting
    pub iteration_threshold: usize,
    /// Attempts allowed before abandoning
    pub max_attempts: usize,
    /// Wall-clock limit checked between attempts
    pub time_limit: Option<Duration>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
            min_size: DEFAULT_MIN_SIZE,
            iteration_threshold: DEFAULT_ITERATION_THRESHOLD,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            time_limit: None,
        }
    }
}

impl GenerationConfig {
    /// Set room count bounds
    #[must_use]
    pub const fn with_size(mut self, min_size: usize, max_size: usize) -> Self {
        self.min_size = min_size;
        self.max_size = max_size;
        self
    }

    /// Set the per-attempt node budget
    #[must_use]
    pub const fn with_iteration_threshold(mut self, iteration_threshold: usize) -> Self {
        self.iteration_threshold = iteration_threshold;
        self
    }

    /// Set the attempt cap
    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Set the wall-clock limit
    #[must_use]
    pub const fn with_time_limit(mut self, time_limit: Option<Duration>) -> Self {
        self.time_limit = time_limit;
        self
    }

    /// Check the parameters are mutually consistent
    ///
    /// # Errors
    ///
    /// Returns an error if `max_size` or `max_attempts` is zero, if `max_size`
    /// exceeds [`MAX_ROOMS`], or if `min_size` exceeds `max_size`
    pub fn validate(&self) -> Result<()> {
        if self.max_size == 0 {
            return Err(invalid_parameter(
                "max_size",
                &self.max_size,
                &"must count at least the start room",
            ));
        }
        if self.max_size > MAX_ROOMS {
            return Err(invalid_parameter(
                "max_size",
                &self.max_size,
                &format!("must not exceed {MAX_ROOMS}"),
            ));
        }
        if self.min_size > self.max_size {
            return Err(invalid_parameter(
                "min_size",
                &self.min_size,
                &format!("must not exceed max_size ({})", self.max_size),
            ));
        }
        if self.max_attempts == 0 {
            return Err(invalid_parameter(
                "max_attempts",
                &self.max_attempts,
                &"at least one attempt is required",
            ));
        }
        Ok(())
    }
}
