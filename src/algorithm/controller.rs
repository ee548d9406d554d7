//! Generation attempts, budgeted restarts and committing layouts to a renderer

use crate::algorithm::layout::Layout;
use crate::algorithm::search::{SearchEngine, SearchOutcome};
use crate::algorithm::state::SearchState;
use crate::catalog::pools::Catalog;
use crate::io::configuration::GenerationConfig;
use crate::io::error::{AbandonReason, GenerationError, Result};
use crate::io::renderer::SceneRenderer;
use rand::Rng;
use std::sync::Arc;
use std::time::Instant;

/// Generate one layout, restarting with fresh draws whenever an attempt
/// exceeds its iteration budget
///
/// Restarts run in a loop capped by `max_attempts` and the optional time
/// limit. A search that explores its whole tree within budget without a valid
/// completion is not retried.
///
/// # Errors
///
/// Returns an error if the configuration is invalid,
/// [`GenerationError::Abandoned`] if no layout was produced, or
/// [`GenerationError::InvalidLayout`] if the accepted layout fails its self-check
pub fn generate<R: Rng + ?Sized>(
    catalog: &Catalog,
    config: &GenerationConfig,
    rng: &mut R,
) -> Result<Layout> {
    config.validate()?;

    let started = Instant::now();
    let mut iterations = 0;

    for attempt in 1..=config.max_attempts {
        let expired = config
            .time_limit
            .filter(|limit| attempt > 1 && started.elapsed() >= *limit);
        if let Some(limit) = expired {
            log::warn!("time limit of {limit:?} reached after {} attempts", attempt - 1);
            return Err(GenerationError::Abandoned {
                attempts: attempt - 1,
                iterations,
                reason: AbandonReason::TimeLimit,
            });
        }

        let mut state = SearchState::seeded(Arc::clone(catalog.start()));
        let mut engine = SearchEngine::new(catalog, config, &mut *rng);
        let outcome = engine.extend(&mut state);
        iterations += engine.iterations();

        match outcome {
            SearchOutcome::Success => {
                let layout = Layout::from_state(state, catalog, attempt, iterations)
                    .verified(catalog, config)
                    .inspect_err(|error| log::error!("{error}"))?;
                log::info!(
                    "accepted {} rooms after {attempt} attempts ({iterations} iterations)",
                    layout.room_count()
                );
                return Ok(layout);
            }
            SearchOutcome::BudgetExceeded => {
                log::debug!(
                    "attempt {attempt} exceeded {} iterations, restarting",
                    config.iteration_threshold
                );
            }
            SearchOutcome::NodeFailure => {
                log::warn!("search space exhausted on attempt {attempt}");
                return Err(GenerationError::Abandoned {
                    attempts: attempt,
                    iterations,
                    reason: AbandonReason::Exhausted,
                });
            }
        }
    }

    log::warn!("giving up after {} attempts", config.max_attempts);
    Err(GenerationError::Abandoned {
        attempts: config.max_attempts,
        iterations,
        reason: AbandonReason::AttemptLimit,
    })
}

/// Regenerates layouts on demand and commits each success to a renderer
///
/// The renderer only ever sees complete layouts: it is cleared and handed the
/// new placement list after generation succeeds, and left untouched when
/// generation fails.
pub struct Generator<R, S> {
    catalog: Catalog,
    config: GenerationConfig,
    rng: R,
    renderer: S,
    current: Option<Layout>,
}

impl<R: Rng, S: SceneRenderer> Generator<R, S> {
    /// Create a generator over a validated configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn new(catalog: Catalog, config: GenerationConfig, rng: R, renderer: S) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            catalog,
            config,
            rng,
            renderer,
            current: None,
        })
    }

    /// Generate a new layout and replace the rendered one with it
    ///
    /// # Errors
    ///
    /// Returns an error if generation is abandoned or the renderer fails
    pub fn regenerate(&mut self) -> Result<&Layout> {
        let layout = generate(&self.catalog, &self.config, &mut self.rng)?;
        self.renderer.clear()?;
        self.renderer.instantiate(&layout.records())?;
        Ok(self.current.insert(layout))
    }

    /// Most recently committed layout
    pub const fn current(&self) -> Option<&Layout> {
        self.current.as_ref()
    }

    /// Catalog layouts are drawn from
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Renderer receiving committed layouts
    pub const fn renderer(&self) -> &S {
        &self.renderer
    }

    /// Release the renderer
    pub fn into_renderer(self) -> S {
        self.renderer
    }
}
