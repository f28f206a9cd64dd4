use log::info;
use msa_types::*;

use crate::{progress_bar, NW};

/// Build an initial multiple alignment by adding the sequences one at a time,
/// in input order, to the profile of all sequences before them.
pub fn progressive_alignment<T: SubstitutionTable>(
    nw: &NW<T>,
    sequences: Vec<Sequence>,
    progress: bool,
) -> Result<Profile, MsaError> {
    let mut sequences = sequences.into_iter();
    let first = sequences.next().ok_or(MsaError::EmptyProfile)?;
    let bar = progress_bar(sequences.len() as u64, "Aligning", progress);

    let mut alignment = Profile::from_seq(first);
    for seq in sequences {
        let (_, mut merged, y) = nw.align(&alignment, &Profile::from_seq(seq))?;
        merged.append(y)?;
        alignment = merged;
        bar.inc(1);
    }
    bar.finish_and_clear();

    info!(
        "Initial alignment: {} rows, {} columns",
        alignment.row_count(),
        alignment.columns()
    );
    Ok(alignment)
}
