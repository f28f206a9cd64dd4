//! Refinement of a multiple alignment by simulated annealing.
//!
//! Each cycle removes a few random rows, strips their gaps, drops the columns
//! that became all-gap, and adds the rows back one by one with the profile
//! aligner. Worse alignments are kept with probability `exp(Δ/t)`, and
//! otherwise the cycle is reverted. The temperature `t` is multiplied by the
//! cooling factor after every cycle, and the loop ends once it drops to 1 or
//! the score has not changed for a number of cycles.
mod params;
mod stats;

pub use params::*;
pub use stats::*;

use log::{debug, info, trace};
use msa_base_algos::{progress_bar, NW};
use msa_types::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(Clone, Debug)]
pub struct Anneal<T> {
    pub nw: NW<T>,
    /// Normalized parameters.
    pub params: AnnealParams,
}

impl<T: SubstitutionTable> Anneal<T> {
    pub fn new(table: T, params: &AnnealParams) -> Self {
        let params = params.normalized();
        Self {
            nw: NW::new(table, params.gap_penalty),
            params,
        }
    }

    /// Refine using a generator seeded from the parameters.
    pub fn run(&self, alignment: Profile) -> Result<(Score, Profile, AnnealStats), MsaError> {
        let rng = &mut ChaCha8Rng::seed_from_u64(self.params.seed_or_random());
        self.refine(alignment, rng)
    }

    /// Returns the final score, the final alignment, and statistics of the run.
    ///
    /// An alignment with fewer than two rows is returned unchanged.
    pub fn refine<R: Rng>(
        &self,
        alignment: Profile,
        rng: &mut R,
    ) -> Result<(Score, Profile, AnnealStats), MsaError> {
        let scoring = &self.nw.scoring;
        let mut current = alignment;
        let mut score = scoring.total_alignment_score(&current)?;
        let mut t = self.params.temperature;
        let n = self.params.cycle_bound();

        let mut stats = AnnealStats {
            cycle_bound: n,
            final_temperature: t,
            initial_score: score,
            score,
            ..Default::default()
        };
        if current.row_count() < 2 {
            return Ok((score, current, stats));
        }

        let k = self.params.rows_to_realign(current.row_count());
        info!("Refining {} rows: {n} cycles, {k} rows per cycle", current.row_count());

        let bar = progress_bar(n as u64, "Iterating", self.params.progress);
        for cycle in 0..n {
            if stats.stagnation >= self.params.max_stagnation {
                debug!("Stagnated after {cycle} cycles");
                break;
            }
            stats.cycles += 1;

            let snapshot = current.clone();
            let (new_score, candidate) = self.realign(current, k, rng)?;

            if new_score == score {
                stats.stagnation += 1;
            } else {
                stats.stagnation = 0;
            }

            let accept = if new_score > score {
                stats.improvements += 1;
                true
            } else {
                let p = ((new_score - score) as f64 / t).exp();
                let accept = rng.gen::<f64>() <= p;
                trace!("Δ {} at t {t:.3}: p {p:.4} accept {accept}", new_score - score);
                if accept {
                    stats.accepted_worse += 1;
                } else {
                    stats.rejected += 1;
                }
                accept
            };

            if accept {
                current = candidate;
                score = new_score;
            } else {
                current = snapshot;
            }
            debug!(
                "Cycle {cycle:>4}: t {t:>8.3} candidate {new_score:>6} score {score:>6} stagnation {}",
                stats.stagnation
            );

            t *= self.params.cooling;
            bar.inc(1);
        }
        bar.finish_and_clear();

        stats.final_temperature = t;
        stats.score = score;
        info!("{stats}");
        Ok((score, current, stats))
    }

    /// Remove `k` random rows, strip their gaps, and add them back one by one.
    fn realign<R: Rng>(
        &self,
        mut alignment: Profile,
        k: usize,
        rng: &mut R,
    ) -> Result<(Score, Profile), MsaError> {
        let removed: Vec<Sequence> = (0..k)
            .map(|_| {
                let i = rng.gen_range(0..alignment.row_count());
                strip_gaps(&alignment.remove_row(i))
            })
            .collect();
        alignment.drop_gap_columns();

        let alignment = removed.into_iter().try_fold(alignment, |acc, seq| {
            let (_, mut merged, y) = self.nw.align(&acc, &Profile::from_seq(seq))?;
            merged.append(y)?;
            Ok::<_, MsaError>(merged)
        })?;
        let score = self.nw.scoring.total_alignment_score(&alignment)?;
        Ok((score, alignment))
    }
}

/// Refine `alignment` under `table` with the given parameters.
pub fn refine_alignment<T: SubstitutionTable>(
    alignment: Profile,
    table: T,
    params: &AnnealParams,
) -> Result<(Score, Profile, AnnealStats), MsaError> {
    Anneal::new(table, params).run(alignment)
}
