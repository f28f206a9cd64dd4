//! Sum-of-pairs scoring of columns and of complete alignments.
use itertools::Itertools;
use msa_types::*;

/// Sum-of-pairs scoring under a substitution table and a linear gap penalty.
///
/// A pair of symbols scores
/// - the substitution score when both are non-gap,
/// - minus the gap penalty when exactly one is a gap,
/// - zero when both are gaps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SumOfPairs<T> {
    /// The substitution table.
    pub table: T,
    /// The gap penalty, always non-negative.
    pub gap: GapPenalty,
}

impl<T: SubstitutionTable> SumOfPairs<T> {
    /// A negative `gap` is sign-flipped.
    pub fn new(table: T, gap: Score) -> Self {
        Self {
            table,
            gap: GapPenalty::new(gap),
        }
    }

    /// Substitution score of two non-gap symbols.
    pub fn pair_score(&self, a: Symbol, b: Symbol) -> Result<Score, MsaError> {
        self.table.pair_score(a, b)
    }

    #[inline]
    fn symbol_pair(&self, a: Symbol, b: Symbol) -> Result<Score, MsaError> {
        match (is_gap(a), is_gap(b)) {
            (true, true) => Ok(0),
            (true, false) | (false, true) => Ok(-self.gap.get()),
            (false, false) => self.pair_score(a, b),
        }
    }

    /// Sum over every row of `x` and every row of `y` of the score of
    /// `x[k][i]` against `y[l][j]`. Only cross terms are counted.
    pub fn column_cross_score(
        &self,
        x: &Profile,
        i: usize,
        y: &Profile,
        j: usize,
    ) -> Result<Score, MsaError> {
        let mut total = 0;
        for a in x.column(i) {
            for b in y.column(j) {
                total += self.symbol_pair(a, b)?;
            }
        }
        Ok(total)
    }

    /// Sum-of-pairs score of a complete alignment: all row pairs `j < k`, all
    /// columns.
    pub fn total_alignment_score(&self, alignment: &Profile) -> Result<Score, MsaError> {
        let mut total = 0;
        for i in 0..alignment.columns() {
            for (a, b) in alignment.column(i).tuple_combinations() {
                total += self.symbol_pair(a, b)?;
            }
        }
        Ok(total)
    }
}
