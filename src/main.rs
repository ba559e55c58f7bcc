//! h5compare - consensus and mutation tables for influenza alignments
//!
//! Splits a FASTA alignment into human and animal sequences by an accession
//! list, compares the consensus of both groups and reports differing
//! positions. Also counts synonymous and non-synonymous codon changes.

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};

use h5compare::{
    build_consensus, codon_alignment, column_frequencies, compare_cohorts, count_substitutions,
    read_accessions_from_file, read_alignment_from_file, write_fasta, Alignment, BindingSites,
    Position, Record, REPORT_HEADER,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the human and animal consensus sequences as FASTA
    Consensus {
        /// Aligned sequences in FASTA format
        #[arg(short = 'i', long = "alignment")]
        alignment: PathBuf,
        /// Accessions of human-derived sequences, one per line
        #[arg(short = 'a', long = "accessions")]
        accessions: Option<PathBuf>,
    },
    /// Print residue counts for every non-gap consensus position
    Frequencies {
        /// Aligned sequences in FASTA format
        #[arg(short = 'i', long = "alignment")]
        alignment: PathBuf,
    },
    /// Print the table of positions where the human and animal consensus differ
    Compare {
        /// Aligned sequences in FASTA format
        #[arg(short = 'i', long = "alignment")]
        alignment: PathBuf,
        /// Accessions of human-derived sequences, one per line
        #[arg(short = 'a', long = "accessions")]
        accessions: PathBuf,
        /// Comma separated binding site positions. Default: PB2 binding sites
        #[arg(short = 'b', long = "binding-sites")]
        binding_sites: Option<String>,
    },
    /// Count synonymous and non-synonymous codons against the first sequence
    Dnds {
        /// Aligned codon sequences in FASTA format
        #[arg(short = 'i', long = "alignment")]
        alignment: PathBuf,
    },
    /// Write ungapped, equal length, codon-complete sequences as FASTA
    Codons {
        /// Aligned nucleotide sequences in FASTA format
        #[arg(short = 'i', long = "alignment")]
        alignment: PathBuf,
        /// Output FASTA file
        #[arg(short = 'o', long = "output")]
        output: PathBuf,
    },
}

fn load_alignment(path: &Path) -> Result<Alignment> {
    read_alignment_from_file(path)
        .with_context(|| format!("Could not read alignment {}", path.display()))
}

fn load_accessions(path: Option<&Path>) -> Result<HashSet<String>> {
    match path {
        Some(path) => read_accessions_from_file(path)
            .with_context(|| format!("Could not read accession list {}", path.display())),
        None => Ok(HashSet::new()),
    }
}

fn parse_binding_sites(text: Option<&str>) -> Result<BindingSites> {
    match text {
        Some(text) => {
            let positions = Position::parse_many(text, ',')
                .with_context(|| format!("Invalid binding site list: {}", text))?;
            Ok(positions.into_iter().collect())
        }
        None => Ok(BindingSites::pb2()),
    }
}

fn consensus(alignment: &Path, accessions: Option<&Path>, out: &mut impl Write) -> Result<()> {
    let alignment = load_alignment(alignment)?;
    let members = load_accessions(accessions)?;
    let consensus = build_consensus(&alignment, &members);
    let mut records = Vec::new();
    match consensus.human {
        Some(seq) => records.push(Record::new("human_consensus", seq)),
        None => warn!("No human sequences, skipping human consensus"),
    }
    match consensus.animal {
        Some(seq) => records.push(Record::new("animal_consensus", seq)),
        None => warn!("No animal sequences, skipping animal consensus"),
    }
    write_fasta(out, &records)?;
    Ok(())
}

fn frequencies(alignment: &Path, out: &mut impl Write) -> Result<()> {
    let alignment = load_alignment(alignment)?;
    let table = column_frequencies(&alignment.sequences());
    for (position, column) in table.iter() {
        writeln!(out, "Position {}: {}", position, column)?;
    }
    Ok(())
}

fn compare(
    alignment: &Path,
    accessions: &Path,
    binding_sites: Option<&str>,
    out: &mut impl Write,
) -> Result<()> {
    let alignment = load_alignment(alignment)?;
    let members = load_accessions(Some(accessions))?;
    let binding_sites = parse_binding_sites(binding_sites)?;
    let records = compare_cohorts(&alignment, &members, &binding_sites)
        .context("Could not compare human and animal sequences")?;
    writeln!(out, "{}", REPORT_HEADER.join("\t"))?;
    for record in &records {
        writeln!(out, "{}", record.row().join("\t"))?;
    }
    info!("Reported {} differing positions", records.len());
    Ok(())
}

fn dnds(alignment: &Path, out: &mut impl Write) -> Result<()> {
    let alignment = load_alignment(alignment)?;
    let counts = count_substitutions(&alignment);
    writeln!(out, "Synonymous substitutions: {}", counts.synonymous)?;
    writeln!(out, "Non-synonymous substitutions: {}", counts.nonsynonymous())?;
    match (counts.ratio(), counts.selection()) {
        (Some(ratio), Some(selection)) => {
            writeln!(out, "dN/dS ratio: {:.2}", ratio)?;
            writeln!(out, "{}", selection)?;
        }
        _ => warn!("Synonymous substitutions = 0. Cannot compute dN/dS."),
    }
    Ok(())
}

fn codons(alignment: &Path, output: &Path) -> Result<()> {
    let alignment = load_alignment(alignment)?;
    let records = codon_alignment(&alignment);
    let file = File::create(output)
        .with_context(|| format!("Could not create {}", output.display()))?;
    write_fasta(file, &records)?;
    info!(
        "Wrote {} codon sequences to {}",
        records.len(),
        output.display()
    );
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match &cli.command {
        Command::Consensus {
            alignment,
            accessions,
        } => consensus(alignment, accessions.as_deref(), &mut out)?,
        Command::Frequencies { alignment } => frequencies(alignment, &mut out)?,
        Command::Compare {
            alignment,
            accessions,
            binding_sites,
        } => compare(alignment, accessions, binding_sites.as_deref(), &mut out)?,
        Command::Dnds { alignment } => dnds(alignment, &mut out)?,
        Command::Codons { alignment, output } => codons(alignment, output)?,
    }
    out.flush()?;
    Ok(())
}
