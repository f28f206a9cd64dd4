use clap::Args;
use log::info;
use msa_types::Score;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TEMPERATURE: f64 = 10.;
pub const DEFAULT_COOLING: f64 = 0.95;
pub const DEFAULT_GAP_PENALTY: Score = 8;
pub const DEFAULT_MAX_STAGNATION: usize = 7;

/// Flat parameters for the annealing refinement, usable from the CLI and from
/// json.
#[derive(Args, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[clap(next_help_heading = "Annealing")]
#[serde(deny_unknown_fields, default)]
pub struct AnnealParams {
    /// Initial temperature.
    #[clap(short = 't', long, default_value_t = DEFAULT_TEMPERATURE, display_order = 10)]
    pub temperature: f64,

    /// Factor the temperature is multiplied by after each cycle.
    ///
    /// Must be in (0, 1); other values fall back to 0.95.
    #[clap(short = 'm', long, default_value_t = DEFAULT_COOLING, display_order = 10)]
    pub cooling: f64,

    /// Fraction of the rows to realign each cycle.
    ///
    /// 0 realigns exactly one row. At least one row is always kept.
    #[clap(short = 'f', long, default_value_t = 0., display_order = 10)]
    pub realign_fraction: f64,

    /// Linear gap penalty. Negative values are sign-flipped.
    #[clap(
        short = 'd',
        long,
        default_value_t = DEFAULT_GAP_PENALTY,
        allow_hyphen_values = true,
        display_order = 10
    )]
    pub gap_penalty: Score,

    /// Stop after this many consecutive cycles without a score change.
    #[clap(long, default_value_t = DEFAULT_MAX_STAGNATION, hide_short_help = true)]
    pub max_stagnation: usize,

    /// Seed for row selection and acceptance draws. Random when not set.
    #[clap(long)]
    pub seed: Option<u64>,

    /// Show progress bars.
    #[clap(long)]
    pub progress: bool,
}

impl Default for AnnealParams {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            cooling: DEFAULT_COOLING,
            realign_fraction: 0.,
            gap_penalty: DEFAULT_GAP_PENALTY,
            max_stagnation: DEFAULT_MAX_STAGNATION,
            seed: None,
            progress: false,
        }
    }
}

impl AnnealParams {
    /// Replace invalid values by their documented fallbacks:
    /// - a cooling factor outside (0, 1) becomes 0.95,
    /// - a non-finite temperature becomes 10,
    /// - a negative or non-finite realign fraction becomes 0,
    /// - the gap penalty becomes its magnitude.
    pub fn normalized(&self) -> Self {
        let mut p = self.clone();
        if !(p.cooling > 0. && p.cooling < 1.) {
            p.cooling = DEFAULT_COOLING;
        }
        if !p.temperature.is_finite() {
            p.temperature = DEFAULT_TEMPERATURE;
        }
        if !(p.realign_fraction.is_finite() && p.realign_fraction > 0.) {
            p.realign_fraction = 0.;
        }
        p.gap_penalty = p.gap_penalty.saturating_abs();
        p
    }

    /// The number of cycles until the temperature drops to at most 1.
    ///
    /// Expects normalized parameters.
    pub fn cycle_bound(&self) -> usize {
        let mut t = self.temperature;
        let mut n = 0;
        while t > 1. {
            n += 1;
            t *= self.cooling;
        }
        n
    }

    /// The number of rows removed and realigned per cycle, for an alignment of
    /// `rows >= 2` rows.
    pub fn rows_to_realign(&self, rows: usize) -> usize {
        let k = if self.realign_fraction == 0. {
            1
        } else {
            (rows as f64 * self.realign_fraction).ceil() as usize
        };
        k.clamp(1, rows.saturating_sub(1).max(1))
    }

    /// The configured seed, or a fresh random one which is logged.
    pub fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            let seed = ChaCha8Rng::from_entropy().gen();
            info!("Seed: {seed}");
            seed
        })
    }
}
