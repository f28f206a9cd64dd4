use clap::{value_parser, Parser};
use msa_anneal::AnnealParams;
use msa_types::SubstitutionMatrix;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser, Serialize, Deserialize, Debug)]
#[clap(name = "msa", author, about, disable_version_flag(true))]
pub struct Cli {
    /// A .txt file with the number of sequences on the first line and one
    /// sequence per line after it, or a Fasta file (.fa, .fasta, .fna).
    #[clap(value_parser = value_parser!(PathBuf), display_order = 1)]
    pub input: PathBuf,

    /// The input already contains an alignment.
    ///
    /// Skips building the initial alignment. All rows must have the same
    /// length, with `-` for gaps.
    #[clap(short = 'y', long, display_order = 1)]
    pub aligned: bool,

    /// The input holds two profiles, each as a count-prefixed block of rows.
    ///
    /// Aligns the two profiles against each other once, without refinement,
    /// and prints the score followed by both gapped profiles.
    #[clap(short = 'p', long, conflicts_with = "aligned", display_order = 1)]
    pub profiles: bool,

    /// Substitution matrix for pairs of residues.
    #[clap(long, value_enum, default_value_t, display_order = 2)]
    pub matrix: SubstitutionMatrix,

    /// Also write the score, alignment, and run statistics as json.
    #[clap(long, value_parser = value_parser!(PathBuf), display_order = 2)]
    pub json: Option<PathBuf>,

    #[clap(flatten)]
    pub anneal: AnnealParams,
}
