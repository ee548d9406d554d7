//! Depth-first backtracking over unresolved doors
//!
//! Each node picks an unresolved door (most recent first), tries every
//! compatible candidate in random order, and recurses. A failing branch is
//! rolled back exactly, so a node that fails leaves the shared state as it
//! found it. Exceeding the per-attempt node budget aborts the whole attempt.

use crate::algorithm::candidates::{fits, shuffled_candidates};
use crate::algorithm::state::SearchState;
use crate::catalog::pools::Catalog;
use crate::io::configuration::GenerationConfig;
use crate::spatial::grid::Door;
use rand::Rng;
use std::sync::Arc;

/// Result of extending one search node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The state now holds an accepted layout
    Success,
    /// No completion below this node; the state is unchanged
    NodeFailure,
    /// The attempt ran out of node visits; the state is unchanged
    BudgetExceeded,
}

/// Backtracking search over one attempt
pub struct SearchEngine<'a, R: Rng + ?Sized> {
    catalog: &'a Catalog,
    config: &'a GenerationConfig,
    rng: &'a mut R,
    iterations: usize,
}

impl<'a, R: Rng + ?Sized> SearchEngine<'a, R> {
    /// Create an engine with a zeroed iteration counter
    pub const fn new(catalog: &'a Catalog, config: &'a GenerationConfig, rng: &'a mut R) -> Self {
        Self {
            catalog,
            config,
            rng,
            iterations: 0,
        }
    }

    /// Search nodes visited so far in this attempt
    pub const fn iterations(&self) -> usize {
        self.iterations
    }

    /// Extend the layout held in `state` until every door is resolved
    pub fn extend(&mut self, state: &mut SearchState) -> SearchOutcome {
        self.iterations += 1;
        if self.iterations > self.config.iteration_threshold {
            return SearchOutcome::BudgetExceeded;
        }

        let depth = state.depth();
        if depth > self.config.max_size {
            return SearchOutcome::NodeFailure;
        }

        if state.frontier().is_empty() {
            return if depth >= self.config.min_size {
                SearchOutcome::Success
            } else {
                SearchOutcome::NodeFailure
            };
        }

        for index in (0..state.frontier().len()).rev() {
            let Some(door) = state.frontier().get(index) else {
                continue;
            };
            match self.resolve(state, index, door) {
                SearchOutcome::NodeFailure => {}
                outcome => return outcome,
            }
        }

        SearchOutcome::NodeFailure
    }

    /// Try every candidate room behind `door`
    fn resolve(&mut self, state: &mut SearchState, index: usize, door: Door) -> SearchOutcome {
        let cell = door.target();
        if state.occupancy().contains(cell) {
            return SearchOutcome::NodeFailure;
        }

        let catalog = self.catalog;
        let pool = catalog.pool_for(state.depth() + 1, self.config.max_size);
        let candidates = shuffled_candidates(pool, door.direction, &mut *self.rng);

        for candidate in candidates {
            let (piece, connector) = candidate.place_at(cell);
            if !fits(state, &piece, connector) {
                continue;
            }

            let template = Arc::clone(piece.template());
            let Some(attachment) = state.attach(index, piece, connector) else {
                continue;
            };
            log::trace!("depth {}: placed '{}' behind {door}", state.depth(), template.id());

            match self.extend(state) {
                SearchOutcome::Success => return SearchOutcome::Success,
                SearchOutcome::NodeFailure => {
                    state.detach(attachment);
                    log::trace!("depth {}: backtracked from '{}'", state.depth(), template.id());
                }
                SearchOutcome::BudgetExceeded => {
                    state.detach(attachment);
                    return SearchOutcome::BudgetExceeded;
                }
            }
        }

        SearchOutcome::NodeFailure
    }
}
