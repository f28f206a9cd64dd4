use crate::*;
use msa_test::*;
use msa_types::*;
use rand::{seq::SliceRandom, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn profile(rows: &[&str]) -> Profile {
    Profile::new(rows.iter().map(|r| r.as_bytes().to_vec()).collect()).unwrap()
}

fn nw() -> NW<SubstitutionMatrix> {
    NW::new(SubstitutionMatrix::Blosum50, 8)
}

/// Random families of various sizes, as progressive alignments.
fn random_alignments() -> impl Iterator<Item = (Vec<Sequence>, Profile)> {
    [(1, 3, 10, 0.1), (2, 5, 30, 0.2), (3, 8, 20, 0.4), (4, 4, 60, 0.05)]
        .into_iter()
        .map(|(seed, count, n, e)| {
            let seqs = random_family(seed, count, n, e);
            let p = progressive_alignment(&nw(), seqs.clone(), false).unwrap();
            (seqs, p)
        })
}

#[test]
fn textbook_pairwise() {
    let (s, x, y) = nw()
        .align(&profile(&["HEAGAWGHEE"]), &profile(&["PAWHEAE"]))
        .unwrap();
    assert_eq!(s, 1);
    assert_eq!(x, profile(&["HEAGAWGHE-E"]));
    assert_eq!(y, profile(&["--P-AW-HEAE"]));
}

#[test]
fn textbook_pairwise_swapped() {
    let (s, x, y) = nw()
        .align(&profile(&["PAWHEAE"]), &profile(&["HEAGAWGHEE"]))
        .unwrap();
    assert_eq!(s, 1);
    assert_eq!(x, profile(&["--P-AW-HEAE"]));
    assert_eq!(y, profile(&["HEAGAWGHE-E"]));
}

#[test]
fn align_profiles_matches_nw() {
    let (x, y) = (profile(&["HEAGAWGHEE"]), profile(&["PAWHEAE"]));
    assert_eq!(
        align_profiles(&x, &y, SubstitutionMatrix::Blosum50, 8).unwrap(),
        nw().align(&x, &y).unwrap()
    );
}

#[test]
fn empty_sequence() {
    let (s, x, y) = nw()
        .align(&profile(&["HEAGAWGHEE"]), &Profile::from_seq(vec![]))
        .unwrap();
    assert_eq!(s, -80);
    assert_eq!(x, profile(&["HEAGAWGHEE"]));
    assert_eq!(y, profile(&["----------"]));

    let (s, x, y) = nw()
        .align(&Profile::from_seq(vec![]), &Profile::from_seq(vec![]))
        .unwrap();
    assert_eq!(s, 0);
    assert_eq!(x.columns(), 0);
    assert_eq!(y.columns(), 0);
}

#[test]
fn profile_against_sequence() {
    // The base row and column scale the gap penalty with the row count of the
    // other profile.
    let (s, x, y) = nw()
        .align(&profile(&["AW-HE", "AWGHE"]), &profile(&["PAWHEAE"]))
        .unwrap();
    assert_eq!(s, 16);
    assert_eq!(x, profile(&["-AW-H--E", "-AWGH--E"]));
    assert_eq!(y, profile(&["PAW-HEAE"]));
}

#[test]
fn negative_gap_penalty_is_flipped() {
    let (x, y) = (profile(&["HEAGAWGHEE"]), profile(&["PAWHEAE"]));
    assert_eq!(
        NW::new(SubstitutionMatrix::Blosum50, -8).align(&x, &y).unwrap(),
        nw().align(&x, &y).unwrap()
    );
}

#[test]
fn unknown_symbol_is_an_error() {
    let r = nw().align(&profile(&["AJ"]), &profile(&["AA"]));
    assert!(matches!(r, Err(MsaError::UnknownSymbol { symbol: 'J' })));
}

/// Cross score of two merged profiles, column by column.
fn merged_cross_score(xp: &Profile, yp: &Profile) -> Score {
    let scoring = nw().scoring;
    (0..xp.columns())
        .map(|i| scoring.column_cross_score(xp, i, yp, i).unwrap())
        .sum()
}

/// The amount by which a gap column undercharges: the recurrence pays
/// `d * rows(other)` once, while every non-gap row of the consumed column
/// pays it in the sum-of-pairs score.
fn gap_column_discount(xp: &Profile, yp: &Profile) -> Score {
    let d = nw().scoring.gap.get();
    let non_gap = |p: &Profile, i| p.column(i).filter(|&c| !is_gap(c)).count() as Score;
    (0..xp.columns())
        .map(|i| {
            let (nx, ny) = (non_gap(xp, i), non_gap(yp, i));
            if ny == 0 {
                d * yp.row_count() as Score * (nx - 1)
            } else if nx == 0 {
                d * xp.row_count() as Score * (ny - 1)
            } else {
                0
            }
        })
        .sum()
}

#[test]
fn merge_score_is_cross_score() {
    // Gap columns inserted into a profile add nothing to pairs inside it, so
    // the merged total is the two inner totals plus the cross score.
    let scoring = nw().scoring;
    for (seqs, _) in random_alignments() {
        let mid = seqs.len() / 2;
        let x = progressive_alignment(&nw(), seqs[..mid].to_vec(), false).unwrap();
        let y = progressive_alignment(&nw(), seqs[mid..].to_vec(), false).unwrap();
        let (s, xp, yp) = nw().align(&x, &y).unwrap();
        assert_eq!(xp.columns(), yp.columns());

        let cross = merged_cross_score(&xp, &yp);
        assert_eq!(s, cross + gap_column_discount(&xp, &yp));
        assert!(s >= cross);

        let inner = scoring.total_alignment_score(&x).unwrap()
            + scoring.total_alignment_score(&y).unwrap();
        let mut merged = xp;
        merged.append(yp).unwrap();
        assert_eq!(scoring.total_alignment_score(&merged).unwrap(), inner + cross);
        assert_no_gap_columns(&merged);
        assert_same_sequences(&merged, &seqs);
    }
}

#[test]
fn pairwise_score_is_cross_score() {
    // With one row on each side every gap column is charged exactly.
    let seqs = test_sequences();
    for (a, b) in seqs.iter().zip(seqs.iter().skip(1)) {
        let (s, xp, yp) = nw()
            .align(&Profile::from_seq(a.to_vec()), &Profile::from_seq(b.to_vec()))
            .unwrap();
        assert_eq!(s, merged_cross_score(&xp, &yp));
        assert_eq!(gap_column_discount(&xp, &yp), 0);
    }
}

#[test]
fn symmetric_score() {
    for (seqs, _) in random_alignments() {
        let mid = seqs.len() / 2;
        let x = progressive_alignment(&nw(), seqs[..mid].to_vec(), false).unwrap();
        let y = progressive_alignment(&nw(), seqs[mid..].to_vec(), false).unwrap();
        let (s1, x1, y1) = nw().align(&x, &y).unwrap();
        let (s2, y2, x2) = nw().align(&y, &x).unwrap();
        assert_eq!(s1, s2);
        assert_eq!(x1.row_count(), x2.row_count());
        assert_eq!(y1.row_count(), y2.row_count());
    }
}

#[test]
fn symmetric_pairwise_layout() {
    // Swapping two sequences mirrors the alignment exactly.
    let seqs = test_sequences();
    for (i, a) in seqs.iter().enumerate() {
        for b in &seqs[i + 1..] {
            let (a, b) = (Profile::from_seq(a.to_vec()), Profile::from_seq(b.to_vec()));
            let (s1, x1, y1) = nw().align(&a, &b).unwrap();
            let (s2, y2, x2) = nw().align(&b, &a).unwrap();
            assert_eq!(s1, s2);
            assert_eq!(x1.columns(), x2.columns());
            assert_eq!((x1, y1), (x2, y2));
        }
    }
}

#[test]
fn pairwise_golden() {
    for (a, b, score, xp, yp) in [
        ("HEAGAWGHEE", "HEAGAWGHE", 65, "HEAGAWGHEE", "HEAGAWGH-E"),
        ("HEAGAWGHEE", "GAWGHEE", 34, "HEAGAWGHEE", "---GAWGHEE"),
        ("PAWHEAE", "GAWGHEE", 24, "PAW-HEAE", "GAWGHE-E"),
        ("HEAGAWGHEE", "W", -57, "HEAGAWGHEE", "-----W----"),
        (
            "MKTAYIAKQRQISFVKSHFSRQ",
            "MKTAYIAKQRQISFVKSHF",
            96,
            "MKTAYIAKQRQISFVKSHFSRQ",
            "MKTAYIAKQRQISFVKSHF---",
        ),
    ] {
        let (s, x, y) = nw().align(&profile(&[a]), &profile(&[b])).unwrap();
        assert_eq!(s, score);
        assert_eq!(x, profile(&[xp]));
        assert_eq!(y, profile(&[yp]));
    }
}

#[test]
fn column_cross_score() {
    let scoring = nw().scoring;
    let x = profile(&["A-", "CW"]);
    let y = profile(&["A", "-"]);
    // A/A + A/- + C/A + C/-
    assert_eq!(scoring.column_cross_score(&x, 0, &y, 0).unwrap(), 5 - 8 - 1 - 8);
    // -/A + -/- + W/A + W/-
    assert_eq!(scoring.column_cross_score(&x, 1, &y, 0).unwrap(), -8 - 3 - 8);
}

#[test]
fn total_score() {
    let scoring = nw().scoring;
    assert_eq!(
        scoring
            .total_alignment_score(&profile(&["AC-", "A-C", "ACC"]))
            .unwrap(),
        9
    );
    assert_eq!(
        scoring
            .total_alignment_score(&profile(&["HEAGAWGHE-E", "--P-AW-HEAE"]))
            .unwrap(),
        1
    );
    // No pairs.
    assert_eq!(
        scoring.total_alignment_score(&profile(&["HEAGAWGHEE"])).unwrap(),
        0
    );
}

#[test]
fn total_score_matches_brute_force() {
    for matrix in SubstitutionMatrix::ALL {
        for gap in [8, -4, 0] {
            let scoring = SumOfPairs::new(matrix, gap);
            for (_, p) in random_alignments() {
                assert_eq!(
                    scoring.total_alignment_score(&p).unwrap(),
                    brute_force_score(p.rows(), &matrix, gap)
                );
            }
        }
    }
}

#[test]
fn total_score_is_permutation_invariant() {
    let scoring = nw().scoring;
    let rng = &mut ChaCha8Rng::seed_from_u64(31415);
    for (_, p) in random_alignments() {
        let s = scoring.total_alignment_score(&p).unwrap();
        for _ in 0..5 {
            let mut rows = p.clone().into_rows();
            rows.shuffle(rng);
            let q = Profile::new(rows).unwrap();
            assert_eq!(scoring.total_alignment_score(&q).unwrap(), s);
        }
    }
}

#[test]
fn pre_aligned_round_trip() {
    let rows = ["HEAGAWGHE-E", "--P-AW-HEAE", "HEAGAWGH--E", "---GAWGHE-E"]
        .map(|r| r.as_bytes().to_vec())
        .to_vec();
    let reference = brute_force_score(&rows, &SubstitutionMatrix::Blosum50, 8);
    let p = Profile::new(rows).unwrap();
    assert_eq!(nw().scoring.total_alignment_score(&p).unwrap(), reference);
    assert_eq!(reference, 117);
}

#[test]
fn progressive() {
    let seqs = test_sequences()[..4].iter().map(|s| s.to_vec()).collect();
    let p = progressive_alignment(&nw(), seqs, false).unwrap();
    assert_eq!(
        p,
        profile(&["HEAGAWGHE-E", "--P-AW-HEAE", "HEAGAWGH--E", "---GAWGHE-E"])
    );
    assert_eq!(nw().scoring.total_alignment_score(&p).unwrap(), 117);
}

#[test]
fn progressive_random() {
    let seqs = test_sequences().iter().map(|s| s.to_vec()).collect::<Vec<_>>();
    let p = progressive_alignment(&nw(), seqs.clone(), false).unwrap();
    assert_no_gap_columns(&p);
    assert_same_sequences(&p, &seqs);

    for (seqs, p) in random_alignments() {
        assert_eq!(p.row_count(), seqs.len());
        assert_no_gap_columns(&p);
        assert_same_sequences(&p, &seqs);
    }
}

#[test]
fn progressive_single_and_empty() {
    let p = progressive_alignment(&nw(), vec![b"PAWHEAE".to_vec()], false).unwrap();
    assert_eq!(p, profile(&["PAWHEAE"]));
    assert!(matches!(
        progressive_alignment(&nw(), vec![], false),
        Err(MsaError::EmptyProfile)
    ));
}
