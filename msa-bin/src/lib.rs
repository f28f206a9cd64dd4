pub mod cli;
pub mod input;

use clap::CommandFactory;
use log::info;
use msa_anneal::{Anneal, AnnealStats};
use msa_base_algos::{progressive_alignment, NW};
use msa_types::*;
use serde::Serialize;

use cli::Cli;

/// The result of a run, as written to json.
#[derive(Serialize, Debug)]
pub struct Output {
    pub score: Score,
    pub initial_score: Score,
    pub alignment: Vec<String>,
    pub stats: AnnealStats,
}

/// The result of aligning two profiles.
#[derive(Serialize, Debug)]
pub struct ProfilesOutput {
    pub score: Score,
    pub x: Vec<String>,
    pub y: Vec<String>,
}

fn rows_to_strings(p: &Profile) -> Vec<String> {
    p.rows().iter().map(|r| seq_to_string(r)).collect()
}

/// The one-line usage, appended to input errors.
pub fn usage() -> String {
    Cli::command().render_usage().to_string()
}

/// Build the initial alignment, unless the input is already aligned, and
/// refine it.
pub fn align(args: &Cli, sequences: Vec<Sequence>) -> Result<Output, MsaError> {
    let table = args.matrix;
    for seq in &sequences {
        table.validate(seq)?;
    }
    info!("Aligning {} sequences using {table}", sequences.len());

    let anneal = Anneal::new(table, &args.anneal);
    let alignment = if args.aligned {
        Profile::new(sequences)?
    } else {
        progressive_alignment(&anneal.nw, sequences, args.anneal.progress)?
    };

    let (score, alignment, stats) = anneal.run(alignment)?;
    Ok(Output {
        score,
        initial_score: stats.initial_score,
        alignment: rows_to_strings(&alignment),
        stats,
    })
}

/// Merge two pre-aligned profiles with a single profile alignment.
pub fn align_pair(
    args: &Cli,
    x: Vec<Sequence>,
    y: Vec<Sequence>,
) -> Result<ProfilesOutput, MsaError> {
    let table = args.matrix;
    for seq in x.iter().chain(&y) {
        table.validate(seq)?;
    }
    let (x, y) = (Profile::new(x)?, Profile::new(y)?);
    info!(
        "Aligning profiles of {} and {} rows using {table}",
        x.row_count(),
        y.row_count()
    );

    let (score, x, y) = NW::new(table, args.anneal.gap_penalty).align(&x, &y)?;
    Ok(ProfilesOutput {
        score,
        x: rows_to_strings(&x),
        y: rows_to_strings(&y),
    })
}
