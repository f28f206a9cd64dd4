//! Generalized Needleman-Wunsch: the optimal merge of two profiles under
//! sum-of-pairs scoring with a linear gap penalty.
//!
//! Two single row profiles reduce exactly to classical pairwise
//! Needleman-Wunsch, so there is no separate pairwise aligner.
use std::fmt::Write;
use std::ops::{Index, IndexMut};

use crate::scoring::SumOfPairs;
use log::{log_enabled, trace, Level};
use msa_types::*;

/// The branch taken into a DP cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    /// Consume one column of both profiles.
    Diag,
    /// Consume one column of `x`; insert a gap column into `y`.
    Top,
    /// Consume one column of `y`; insert a gap column into `x`.
    Left,
}

impl Step {
    fn as_char(self) -> char {
        match self {
            Step::Diag => 'D',
            Step::Top => 'T',
            Step::Left => 'L',
        }
    }
}

/// Row-major `(n+1) x (m+1)` DP matrix.
struct Grid<T> {
    width: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    fn new(n: usize, m: usize, init: T) -> Self {
        Grid {
            width: m + 1,
            cells: vec![init; (n + 1) * (m + 1)],
        }
    }

    fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.width)
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;
    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.cells[i * self.width + j]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        &mut self.cells[i * self.width + j]
    }
}

/// Needleman-Wunsch aligner for profiles.
#[derive(Clone, Copy, Debug)]
pub struct NW<T> {
    /// The scoring scheme.
    pub scoring: SumOfPairs<T>,
}

impl<T: SubstitutionTable> NW<T> {
    pub fn new(table: T, gap: Score) -> Self {
        NW {
            scoring: SumOfPairs::new(table, gap),
        }
    }

    /// Compute one optimal merge of `x` and `y`.
    ///
    /// Returns the score of the merge and the rows of `x` and `y` with gap
    /// columns inserted, both with the same number of columns. The score counts
    /// only pairs with one row from `x` and one from `y`.
    ///
    /// Ties are broken diagonal, then top (gap in `y`), then left (gap in `x`).
    pub fn align(
        &self,
        x: &Profile,
        y: &Profile,
    ) -> Result<(Score, Profile, Profile), MsaError> {
        let (n, m) = (x.columns(), y.columns());
        // Every row of the other profile pays for the gap independently.
        let top_gap = self.scoring.gap.for_rows(y.row_count());
        let left_gap = self.scoring.gap.for_rows(x.row_count());

        let mut f = Grid::new(n, m, 0 as Score);
        let mut t = Grid::new(n, m, Step::Left);
        for j in 1..=m {
            f[(0, j)] = -(j as Score) * left_gap;
        }
        for i in 1..=n {
            f[(i, 0)] = -(i as Score) * top_gap;
            t[(i, 0)] = Step::Top;
            for j in 1..=m {
                let diag =
                    f[(i - 1, j - 1)] + self.scoring.column_cross_score(x, i - 1, y, j - 1)?;
                let top = f[(i - 1, j)] - top_gap;
                let left = f[(i, j - 1)] - left_gap;
                let (s, step) = if diag >= top && diag >= left {
                    (diag, Step::Diag)
                } else if top >= left {
                    (top, Step::Top)
                } else {
                    (left, Step::Left)
                };
                f[(i, j)] = s;
                t[(i, j)] = step;
            }
        }

        if log_enabled!(Level::Trace) {
            trace!("DP scores and traceback:\n{}", format_matrices(&f, &t));
        }

        let (xp, yp) = traceback(&t, x, y);
        Ok((f[(n, m)], xp, yp))
    }
}

/// Walk back from `(n, m)` to `(0, 0)`, building the gapped rows back to front.
fn traceback(t: &Grid<Step>, x: &Profile, y: &Profile) -> (Profile, Profile) {
    let (mut i, mut j) = (x.columns(), y.columns());
    let mut xp = vec![Sequence::with_capacity(i + j); x.row_count()];
    let mut yp = vec![Sequence::with_capacity(i + j); y.row_count()];
    while i + j > 0 {
        let step = t[(i, j)];
        match step {
            Step::Diag | Step::Top => {
                for (row, src) in xp.iter_mut().zip(x.rows()) {
                    row.push(src[i - 1]);
                }
            }
            Step::Left => xp.iter_mut().for_each(|row| row.push(GAP)),
        }
        match step {
            Step::Diag | Step::Left => {
                for (row, src) in yp.iter_mut().zip(y.rows()) {
                    row.push(src[j - 1]);
                }
            }
            Step::Top => yp.iter_mut().for_each(|row| row.push(GAP)),
        }
        match step {
            Step::Diag => {
                i -= 1;
                j -= 1;
            }
            Step::Top => i -= 1,
            Step::Left => j -= 1,
        }
    }
    for row in xp.iter_mut().chain(yp.iter_mut()) {
        row.reverse();
    }
    // Neither input is empty, so neither output is.
    (into_profile(xp), into_profile(yp))
}

fn into_profile(rows: Vec<Sequence>) -> Profile {
    match Profile::new(rows) {
        Ok(p) => p,
        Err(e) => unreachable!("Traceback produced an invalid profile: {e}"),
    }
}

fn format_matrices(f: &Grid<Score>, t: &Grid<Step>) -> String {
    let mut s = String::new();
    for row in f.rows() {
        for v in row {
            let _ = write!(s, "{v:>5},");
        }
        s.push('\n');
    }
    s.push('\n');
    for row in t.rows() {
        for v in row {
            let _ = write!(s, "{:>5},", v.as_char());
        }
        s.push('\n');
    }
    s
}

/// Align two profiles with a one-off aligner.
pub fn align_profiles<T: SubstitutionTable>(
    x: &Profile,
    y: &Profile,
    table: T,
    gap: Score,
) -> Result<(Score, Profile, Profile), MsaError> {
    NW::new(table, gap).align(x, y)
}
