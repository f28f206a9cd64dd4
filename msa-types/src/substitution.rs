//! Named substitution matrices.
//!
//! BLOSUM50 is stored here; the other matrices are looked up in `bio::scores`.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::*;

/// Symbols of the protein alphabet, in the row order of the stored matrices.
pub const ALPHABET: &[u8; 24] = b"ARNDCQEGHILKMFPSTWYVBZX*";

const NO_INDEX: u8 = u8::MAX;

const fn build_index() -> [u8; 256] {
    let mut index = [NO_INDEX; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        index[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    index
}

static INDEX: [u8; 256] = build_index();

fn alphabet_index(c: Symbol) -> Option<usize> {
    match INDEX[c as usize] {
        NO_INDEX => None,
        i => Some(i as usize),
    }
}

/// Read-only, symmetric lookup from a pair of non-gap symbols to a score.
pub trait SubstitutionTable {
    /// The score of `a` against `b`, or `None` when either symbol is not in
    /// the alphabet.
    fn get(&self, a: Symbol, b: Symbol) -> Option<Score>;

    /// As `get`, but an unknown symbol is an error.
    fn pair_score(&self, a: Symbol, b: Symbol) -> Result<Score, MsaError> {
        self.get(a, b).ok_or_else(|| {
            let symbol = if self.get(a, a).is_none() { a } else { b };
            MsaError::UnknownSymbol {
                symbol: char::from(symbol),
            }
        })
    }

    /// Check that every non-gap symbol of `seq` is in the alphabet.
    fn validate(&self, seq: Seq) -> Result<(), MsaError> {
        match seq.iter().find(|&&c| !is_gap(c) && self.get(c, c).is_none()) {
            Some(&c) => Err(MsaError::UnknownSymbol {
                symbol: char::from(c),
            }),
            None => Ok(()),
        }
    }
}

impl<T: SubstitutionTable + ?Sized> SubstitutionTable for &T {
    fn get(&self, a: Symbol, b: Symbol) -> Option<Score> {
        (**self).get(a, b)
    }
}

/// The standard protein matrices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum SubstitutionMatrix {
    #[default]
    Blosum50,
    Blosum62,
    Pam40,
    Pam120,
    Pam200,
    Pam250,
}

impl SubstitutionTable for SubstitutionMatrix {
    fn get(&self, a: Symbol, b: Symbol) -> Option<Score> {
        let (ia, ib) = (alphabet_index(a)?, alphabet_index(b)?);
        let s = match self {
            SubstitutionMatrix::Blosum50 => BLOSUM50[ia][ib] as i32,
            SubstitutionMatrix::Blosum62 => bio::scores::blosum62(a, b),
            SubstitutionMatrix::Pam40 => bio::scores::pam40(a, b),
            SubstitutionMatrix::Pam120 => bio::scores::pam120(a, b),
            SubstitutionMatrix::Pam200 => bio::scores::pam200(a, b),
            SubstitutionMatrix::Pam250 => bio::scores::pam250(a, b),
        };
        Some(s as Score)
    }
}

impl SubstitutionMatrix {
    pub const ALL: [SubstitutionMatrix; 6] = [
        SubstitutionMatrix::Blosum50,
        SubstitutionMatrix::Blosum62,
        SubstitutionMatrix::Pam40,
        SubstitutionMatrix::Pam120,
        SubstitutionMatrix::Pam200,
        SubstitutionMatrix::Pam250,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SubstitutionMatrix::Blosum50 => "BLOSUM50",
            SubstitutionMatrix::Blosum62 => "BLOSUM62",
            SubstitutionMatrix::Pam40 => "PAM40",
            SubstitutionMatrix::Pam120 => "PAM120",
            SubstitutionMatrix::Pam200 => "PAM200",
            SubstitutionMatrix::Pam250 => "PAM250",
        }
    }
}

impl fmt::Display for SubstitutionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse a matrix name, ignoring case.
impl FromStr for SubstitutionMatrix {
    type Err = MsaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SubstitutionMatrix::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| MsaError::UnknownMatrix(s.to_string()))
    }
}

#[rustfmt::skip]
const BLOSUM50: [[i8; 24]; 24] = [
    //  A    R    N    D    C    Q    E    G    H    I    L    K    M    F    P    S    T    W    Y    V    B    Z    X    *
    [  5,  -2,  -1,  -2,  -1,  -1,  -1,   0,  -2,  -1,  -2,  -1,  -1,  -3,  -1,   1,   0,  -3,  -2,   0,  -2,  -1,  -1,  -5], // A
    [ -2,   7,  -1,  -2,  -4,   1,   0,  -3,   0,  -4,  -3,   3,  -2,  -3,  -3,  -1,  -1,  -3,  -1,  -3,  -1,   0,  -1,  -5], // R
    [ -1,  -1,   7,   2,  -2,   0,   0,   0,   1,  -3,  -4,   0,  -2,  -4,  -2,   1,   0,  -4,  -2,  -3,   4,   0,  -1,  -5], // N
    [ -2,  -2,   2,   8,  -4,   0,   2,  -1,  -1,  -4,  -4,  -1,  -4,  -5,  -1,   0,  -1,  -5,  -3,  -4,   5,   1,  -1,  -5], // D
    [ -1,  -4,  -2,  -4,  13,  -3,  -3,  -3,  -3,  -2,  -2,  -3,  -2,  -2,  -4,  -1,  -1,  -5,  -3,  -1,  -3,  -3,  -2,  -5], // C
    [ -1,   1,   0,   0,  -3,   7,   2,  -2,   1,  -3,  -2,   2,   0,  -4,  -1,   0,  -1,  -1,  -1,  -3,   0,   4,  -1,  -5], // Q
    [ -1,   0,   0,   2,  -3,   2,   6,  -3,   0,  -4,  -3,   1,  -2,  -3,  -1,  -1,  -1,  -3,  -2,  -3,   1,   5,  -1,  -5], // E
    [  0,  -3,   0,  -1,  -3,  -2,  -3,   8,  -2,  -4,  -4,  -2,  -3,  -4,  -2,   0,  -2,  -3,  -3,  -4,  -1,  -2,  -2,  -5], // G
    [ -2,   0,   1,  -1,  -3,   1,   0,  -2,  10,  -4,  -3,   0,  -1,  -1,  -2,  -1,  -2,  -3,   2,  -4,   0,   0,  -1,  -5], // H
    [ -1,  -4,  -3,  -4,  -2,  -3,  -4,  -4,  -4,   5,   2,  -3,   2,   0,  -3,  -3,  -1,  -3,  -1,   4,  -4,  -3,  -1,  -5], // I
    [ -2,  -3,  -4,  -4,  -2,  -2,  -3,  -4,  -3,   2,   5,  -3,   3,   1,  -4,  -3,  -1,  -2,  -1,   1,  -4,  -3,  -1,  -5], // L
    [ -1,   3,   0,  -1,  -3,   2,   1,  -2,   0,  -3,  -3,   6,  -2,  -4,  -1,   0,  -1,  -3,  -2,  -3,   0,   1,  -1,  -5], // K
    [ -1,  -2,  -2,  -4,  -2,   0,  -2,  -3,  -1,   2,   3,  -2,   7,   0,  -3,  -2,  -1,  -1,   0,   1,  -3,  -1,  -1,  -5], // M
    [ -3,  -3,  -4,  -5,  -2,  -4,  -3,  -4,  -1,   0,   1,  -4,   0,   8,  -4,  -3,  -2,   1,   4,  -1,  -4,  -4,  -2,  -5], // F
    [ -1,  -3,  -2,  -1,  -4,  -1,  -1,  -2,  -2,  -3,  -4,  -1,  -3,  -4,  10,  -1,  -1,  -4,  -3,  -3,  -2,  -1,  -2,  -5], // P
    [  1,  -1,   1,   0,  -1,   0,  -1,   0,  -1,  -3,  -3,   0,  -2,  -3,  -1,   5,   2,  -4,  -2,  -2,   0,   0,  -1,  -5], // S
    [  0,  -1,   0,  -1,  -1,  -1,  -1,  -2,  -2,  -1,  -1,  -1,  -1,  -2,  -1,   2,   5,  -3,  -2,   0,   0,  -1,   0,  -5], // T
    [ -3,  -3,  -4,  -5,  -5,  -1,  -3,  -3,  -3,  -3,  -2,  -3,  -1,   1,  -4,  -4,  -3,  15,   2,  -3,  -5,  -2,  -3,  -5], // W
    [ -2,  -1,  -2,  -3,  -3,  -1,  -2,  -3,   2,  -1,  -1,  -2,   0,   4,  -3,  -2,  -2,   2,   8,  -1,  -3,  -2,  -1,  -5], // Y
    [  0,  -3,  -3,  -4,  -1,  -3,  -3,  -4,  -4,   4,   1,  -3,   1,  -1,  -3,  -2,   0,  -3,  -1,   5,  -4,  -3,  -1,  -5], // V
    [ -2,  -1,   4,   5,  -3,   0,   1,  -1,   0,  -4,  -4,   0,  -3,  -4,  -2,   0,   0,  -5,  -3,  -4,   5,   2,  -1,  -5], // B
    [ -1,   0,   0,   1,  -3,   4,   5,  -2,   0,  -3,  -3,   1,  -1,  -4,  -1,   0,  -1,  -2,  -2,  -3,   2,   5,  -1,  -5], // Z
    [ -1,  -1,  -1,  -1,  -2,  -1,  -1,  -2,  -1,  -1,  -1,  -1,  -1,  -2,  -2,  -1,   0,  -3,  -1,  -1,  -1,  -1,  -1,  -5], // X
    [ -5,  -5,  -5,  -5,  -5,  -5,  -5,  -5,  -5,  -5,  -5,  -5,  -5,  -5,  -5,  -5,  -5,  -5,  -5,  -5,  -5,  -5,  -5,   1], // *
];

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn blosum50_is_symmetric() {
        for &a in ALPHABET {
            for &b in ALPHABET {
                assert_eq!(
                    SubstitutionMatrix::Blosum50.get(a, b),
                    SubstitutionMatrix::Blosum50.get(b, a)
                );
            }
        }
    }

    #[test]
    fn blosum50_values() {
        let m = SubstitutionMatrix::Blosum50;
        assert_eq!(m.get(b'W', b'W'), Some(15));
        assert_eq!(m.get(b'H', b'H'), Some(10));
        assert_eq!(m.get(b'A', b'P'), Some(-1));
        assert_eq!(m.get(b'E', b'A'), Some(-1));
        assert_eq!(m.get(b'*', b'*'), Some(1));
    }

    #[test]
    fn bio_matrices() {
        assert_eq!(SubstitutionMatrix::Blosum62.get(b'A', b'A'), Some(4));
        assert_eq!(SubstitutionMatrix::Blosum62.get(b'W', b'W'), Some(11));
        assert_eq!(SubstitutionMatrix::Pam250.get(b'W', b'W'), Some(17));
    }

    #[test]
    fn unknown_symbols() {
        let m = SubstitutionMatrix::Blosum50;
        assert_eq!(m.get(b'J', b'A'), None);
        assert_eq!(m.get(b'A', b'-'), None);
        assert!(matches!(
            m.pair_score(b'A', b'a'),
            Err(MsaError::UnknownSymbol { symbol: 'a' })
        ));
        assert!(m.validate(b"HEA-GAW").is_ok());
        assert!(matches!(
            m.validate(b"HEAOGAW"),
            Err(MsaError::UnknownSymbol { symbol: 'O' })
        ));
    }

    #[test]
    fn parse_names() {
        assert_eq!(
            "blosum62".parse::<SubstitutionMatrix>().unwrap(),
            SubstitutionMatrix::Blosum62
        );
        assert_eq!(
            "PAM40".parse::<SubstitutionMatrix>().unwrap(),
            SubstitutionMatrix::Pam40
        );
        assert!(matches!(
            "gonnet".parse::<SubstitutionMatrix>(),
            Err(MsaError::UnknownMatrix(_))
        ));
    }
}
