//! Test helpers shared by the alignment crates: fixed inputs, random protein
//! families, and a brute-force sum-of-pairs reference scorer.
use itertools::Itertools;
use rand::{seq::SliceRandom, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use msa_types::*;

/// The twenty standard amino acids.
pub const AMINO_ACIDS: &[u8; 20] = b"ARNDCQEGHILKMFPSTWYV";

/// Hand-picked inputs, including the textbook HEAGAWGHEE/PAWHEAE pair.
pub fn test_sequences() -> Vec<Seq<'static>> {
    vec![
        b"HEAGAWGHEE",
        b"PAWHEAE",
        b"HEAGAWGHE",
        b"GAWGHEE",
        b"MKTAYIAKQRQISFVKSHFSRQ",
        b"MKTAYIAKQRQISFVKSHF",
        b"MKVAYIAKQRQLSFVKSHFSRQLEERLGLIEVQ",
        b"W",
    ]
}

pub fn random_protein(rng: &mut impl Rng, len: usize) -> Sequence {
    (0..len)
        .map(|_| *AMINO_ACIDS.choose(rng).unwrap())
        .collect()
}

/// Apply substitutions, insertions and deletions, each at rate `e / 3`.
pub fn mutate(rng: &mut impl Rng, seq: Seq, e: f64) -> Sequence {
    let mut out = Sequence::with_capacity(seq.len() + 4);
    for &c in seq {
        let r: f64 = rng.gen();
        if r < e / 3. {
            out.push(*AMINO_ACIDS.choose(rng).unwrap());
        } else if r < 2. * e / 3. {
            out.push(c);
            out.push(*AMINO_ACIDS.choose(rng).unwrap());
        } else if r < e {
            // deletion
        } else {
            out.push(c);
        }
    }
    out
}

/// `count` mutated copies of one random ancestor of length `n`.
pub fn random_family(seed: u64, count: usize, n: usize, e: f64) -> Vec<Sequence> {
    let rng = &mut ChaCha8Rng::seed_from_u64(seed);
    let ancestor = random_protein(rng, n);
    (0..count).map(|_| mutate(rng, &ancestor, e)).collect()
}

/// Independent sum-of-pairs score: every unordered pair of rows, every column.
pub fn brute_force_score(rows: &[Sequence], table: &impl SubstitutionTable, gap: Score) -> Score {
    let gap = gap.saturating_abs();
    let mut total = 0;
    for (r, s) in rows.iter().tuple_combinations() {
        assert_eq!(r.len(), s.len());
        for (&a, &b) in r.iter().zip(s) {
            total += match (a == GAP, b == GAP) {
                (true, true) => 0,
                (false, false) => table.get(a, b).unwrap(),
                _ => -gap,
            };
        }
    }
    total
}

/// Every column has at least one non-gap symbol.
pub fn assert_no_gap_columns(p: &Profile) {
    for i in 0..p.columns() {
        assert!(!p.is_gap_column(i), "Column {i} only has gaps:\n{p}");
    }
}

/// The rows of `p` with gaps removed are a permutation of `sequences`.
pub fn assert_same_sequences(p: &Profile, sequences: &[Sequence]) {
    let got = p.rows().iter().map(|r| strip_gaps(r)).sorted().collect_vec();
    let want = sequences.iter().map(|s| strip_gaps(s)).sorted().collect_vec();
    assert_eq!(got, want, "Alignment does not contain the input sequences:\n{p}");
}
