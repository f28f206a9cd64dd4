use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use msa_bin::{
    align, align_pair,
    cli::Cli,
    input::{read_profile_pair, read_sequences},
    usage,
};
use serde::Serialize;
use std::{fs::File, io::BufWriter, path::Path};

fn main() -> Result<()> {
    env_logger::init();
    let args = Cli::parse();
    let read_error = || format!("Failed to read {}\n\n{}", args.input.display(), usage());

    if args.profiles {
        let (x, y) = read_profile_pair(&args.input).with_context(read_error)?;
        let output = align_pair(&args, x, y)?;
        println!("Score: {}\n", output.score);
        for row in &output.x {
            println!("{row}");
        }
        println!();
        for row in &output.y {
            println!("{row}");
        }
        if let Some(path) = &args.json {
            write_json(path, &output)?;
        }
        return Ok(());
    }

    let sequences = read_sequences(&args.input).with_context(read_error)?;
    info!("Read {} sequences from {}", sequences.len(), args.input.display());

    let output = align(&args, sequences)?;
    for row in &output.alignment {
        println!("{row}");
    }
    println!("Score: {}", output.score);

    if let Some(path) = &args.json {
        write_json(path, &output)?;
    }
    Ok(())
}

fn write_json(path: &Path, value: &impl Serialize) -> Result<()> {
    let f = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(f), value)?;
    Ok(())
}
