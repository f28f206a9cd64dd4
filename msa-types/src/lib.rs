//! Types shared by the multiple sequence alignment crates: symbols, profiles,
//! scores, gap penalties and substitution matrices.
mod error;
mod profile;
pub mod substitution;

// Re-export types for convenience of `use msa_types::*;`.
pub use error::*;
pub use profile::*;
pub use substitution::*;

use serde::{Deserialize, Serialize};

/// One character of a sequence, or the `GAP` marker.
pub type Symbol = u8;

/// An owned sequence. Rows of a profile may contain gaps.
pub type Sequence = Vec<Symbol>;

/// A borrowed sequence.
pub type Seq<'a> = &'a [Symbol];

/// A sum-of-pairs score. Higher is better.
pub type Score = i64;

/// The reserved gap marker.
pub const GAP: Symbol = b'-';

#[inline]
pub fn is_gap(c: Symbol) -> bool {
    c == GAP
}

/// Copy of `seq` with all gap symbols removed.
pub fn strip_gaps(seq: Seq) -> Sequence {
    seq.iter().copied().filter(|&c| !is_gap(c)).collect()
}

pub fn seq_to_string(seq: Seq) -> String {
    String::from_utf8_lossy(seq).into_owned()
}

/// Linear gap penalty. Always stored as a non-negative magnitude: a negative
/// input is sign-flipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "Score", into = "Score")]
pub struct GapPenalty(Score);

impl GapPenalty {
    pub fn new(d: Score) -> Self {
        GapPenalty(d.saturating_abs())
    }

    pub fn get(self) -> Score {
        self.0
    }

    /// The penalty for one gap opposite each of `rows` symbols.
    pub fn for_rows(self, rows: usize) -> Score {
        self.0 * rows as Score
    }
}

impl Default for GapPenalty {
    fn default() -> Self {
        GapPenalty(8)
    }
}

impl From<Score> for GapPenalty {
    fn from(d: Score) -> Self {
        GapPenalty::new(d)
    }
}

impl From<GapPenalty> for Score {
    fn from(d: GapPenalty) -> Self {
        d.0
    }
}
