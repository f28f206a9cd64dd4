use std::fmt::Display;

use derive_more::AddAssign;
use msa_types::Score;
use serde::Serialize;

/// Counters for one refinement run.
///
/// Summing stats of several runs with `+=` gives totals for all counters.
#[derive(Default, Clone, AddAssign, Debug, Serialize, PartialEq)]
pub struct AnnealStats {
    /// Maximum number of cycles for the initial temperature and cooling factor.
    pub cycle_bound: usize,
    /// Cycles actually run.
    pub cycles: usize,
    /// Moves with a strictly higher score.
    pub improvements: usize,
    /// Moves with an equal or lower score that passed the acceptance test.
    pub accepted_worse: usize,
    /// Moves that were reverted.
    pub rejected: usize,
    /// Consecutive cycles without a score change when the loop ended.
    pub stagnation: usize,
    pub final_temperature: f64,
    pub initial_score: Score,
    pub score: Score,
}

impl AnnealStats {
    pub fn accepted(&self) -> usize {
        self.improvements + self.accepted_worse
    }
}

impl Display for AnnealStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "cycles {:>4}/{:<4} accepted {:>4} (better {:>4}) rejected {:>4} stagnation {:>2} t {:>8.3} score {} -> {}",
            self.cycles,
            self.cycle_bound,
            self.accepted(),
            self.improvements,
            self.rejected,
            self.stagnation,
            self.final_temperature,
            self.initial_score,
            self.score,
        )
    }
}
