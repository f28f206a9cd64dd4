//! Reading the input sequences.
use bio::io::fasta;
use msa_types::*;
use std::{
    fs::File,
    io::{self, BufRead, BufReader, Read},
    path::Path,
};

/// Read sequences from a count-prefixed .txt file or a Fasta file, depending
/// on the extension. Residues are upper-cased.
pub fn read_sequences(path: &Path) -> Result<Vec<Sequence>, MsaError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    match ext {
        "txt" => parse_counted(BufReader::new(File::open(path)?)),
        "fa" | "fasta" | "fna" => read_fasta(File::open(path)?),
        ext => Err(MsaError::Parse(format!(
            "Unknown file extension {ext:?} of {}. Must be in {{txt,fa,fasta,fna}}.",
            path.display()
        ))),
    }
}

/// The first line holds the number of sequences, followed by one sequence per
/// line. Lines after the last sequence are ignored.
pub fn parse_counted(r: impl BufRead) -> Result<Vec<Sequence>, MsaError> {
    counted_block(&mut r.lines())
}

/// Two count-prefixed blocks, one after the other, each holding the rows of a
/// profile.
pub fn parse_profile_pair(r: impl BufRead) -> Result<(Vec<Sequence>, Vec<Sequence>), MsaError> {
    let mut lines = r.lines();
    let x = counted_block(&mut lines)?;
    let y = counted_block(&mut lines)?;
    Ok((x, y))
}

/// Read two profiles from a .txt file.
pub fn read_profile_pair(path: &Path) -> Result<(Vec<Sequence>, Vec<Sequence>), MsaError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("txt") => parse_profile_pair(BufReader::new(File::open(path)?)),
        _ => Err(MsaError::Parse(format!(
            "Profiles must be given as a .txt file, not {}.",
            path.display()
        ))),
    }
}

fn counted_block(
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<Vec<Sequence>, MsaError> {
    let header = lines
        .next()
        .transpose()?
        .ok_or_else(|| MsaError::Parse("Missing the number of sequences.".into()))?;
    let count: usize = header.trim().parse().map_err(|_| {
        MsaError::Parse(format!(
            "Expected the number of sequences, found {header:?}."
        ))
    })?;

    let mut sequences = Vec::with_capacity(count);
    for line in lines.take(count) {
        sequences.push(line?.trim_end().as_bytes().to_ascii_uppercase());
    }
    if sequences.len() < count {
        return Err(MsaError::Parse(format!(
            "Expected {count} sequences, found {}.",
            sequences.len()
        )));
    }
    Ok(sequences)
}

pub fn read_fasta(r: impl Read) -> Result<Vec<Sequence>, MsaError> {
    let mut sequences = vec![];
    for record in fasta::Reader::new(r).records() {
        sequences.push(record?.seq().to_ascii_uppercase());
    }
    Ok(sequences)
}
