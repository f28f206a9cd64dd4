use std::fmt;

use crate::*;

/// A group of mutually aligned rows.
///
/// A `Profile` always has at least one row and all rows have the same length,
/// the number of columns. A single row profile is a bare sequence, which is
/// what lets pairwise and profile alignment share one algorithm.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Profile {
    rows: Vec<Sequence>,
}

impl Profile {
    /// Build a profile, checking that it is non-empty and rectangular.
    pub fn new(rows: Vec<Sequence>) -> Result<Self, MsaError> {
        let Some(first) = rows.first() else {
            return Err(MsaError::EmptyProfile);
        };
        let expected = first.len();
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != expected) {
            return Err(MsaError::RaggedProfile {
                row,
                len: r.len(),
                expected,
            });
        }
        Ok(Profile { rows })
    }

    /// A single row profile.
    pub fn from_seq(seq: Sequence) -> Self {
        Profile { rows: vec![seq] }
    }

    pub fn rows(&self) -> &[Sequence] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Sequence> {
        self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.rows[0].len()
    }

    /// The symbols of column `i`, top to bottom.
    pub fn column(&self, i: usize) -> impl Iterator<Item = Symbol> + Clone + '_ {
        self.rows.iter().map(move |r| r[i])
    }

    pub fn is_gap_column(&self, i: usize) -> bool {
        self.column(i).all(is_gap)
    }

    /// Append a row with the same number of columns.
    pub fn push_row(&mut self, row: Sequence) -> Result<(), MsaError> {
        if row.len() != self.columns() {
            return Err(MsaError::RaggedProfile {
                row: self.rows.len(),
                len: row.len(),
                expected: self.columns(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Append all rows of `other`, which must have the same number of columns.
    pub fn append(&mut self, other: Profile) -> Result<(), MsaError> {
        for row in other.rows {
            self.push_row(row)?;
        }
        Ok(())
    }

    /// Remove and return row `i`. At least one row always remains.
    pub fn remove_row(&mut self, i: usize) -> Sequence {
        assert!(
            self.rows.len() > 1,
            "Cannot remove the last row of a profile."
        );
        self.rows.remove(i)
    }

    /// Delete every column consisting only of gaps. Returns the number of
    /// deleted columns.
    pub fn drop_gap_columns(&mut self) -> usize {
        let keep: Vec<bool> = (0..self.columns())
            .map(|i| !self.is_gap_column(i))
            .collect();
        let dropped = keep.iter().filter(|&&k| !k).count();
        if dropped > 0 {
            for row in &mut self.rows {
                let mut it = keep.iter();
                row.retain(|_| *it.next().unwrap_or(&true));
            }
        }
        dropped
    }
}

/// One row per line, symbols concatenated in column order.
impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{}", seq_to_string(row))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn profile(rows: &[&str]) -> Profile {
        Profile::new(rows.iter().map(|r| r.as_bytes().to_vec()).collect()).unwrap()
    }

    #[test]
    fn empty_profile_is_rejected() {
        assert!(matches!(Profile::new(vec![]), Err(MsaError::EmptyProfile)));
    }

    #[test]
    fn ragged_profile_is_rejected() {
        let r = Profile::new(vec![b"ACD".to_vec(), b"AC".to_vec()]);
        assert!(matches!(
            r,
            Err(MsaError::RaggedProfile {
                row: 1,
                len: 2,
                expected: 3
            })
        ));

        let mut p = profile(&["ACD"]);
        assert!(p.push_row(b"ACDE".to_vec()).is_err());
        assert_eq!(p.row_count(), 1);
    }

    #[test]
    fn drop_gap_columns() {
        let mut p = profile(&["A-C-", "A--D", "----"]);
        p.remove_row(2);
        assert_eq!(p.drop_gap_columns(), 1);
        assert_eq!(p, profile(&["AC-", "A-D"]));
        assert_eq!(p.drop_gap_columns(), 0);
    }

    #[test]
    #[should_panic]
    fn last_row_cannot_be_removed() {
        profile(&["AC"]).remove_row(0);
    }

    #[test]
    fn display() {
        assert_eq!(profile(&["A-C", "AGC"]).to_string(), "A-C\nAGC\n");
    }
}
