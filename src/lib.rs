mod accession;
mod alignment;
mod amino_acid;
mod consensus;
mod diff;
pub mod error;
mod frequency;
mod mutation;
mod position;
mod side_chain;
mod substitution;

use std::collections::HashSet;

use log::info;

pub use crate::accession::{parse_accession, read_accessions_from_file};
pub use crate::alignment::{
    read_alignment, read_alignment_from_file, write_fasta, Alignment, Record, GAP,
};
pub use crate::amino_acid::{lookup, translate, AminoAcid, STOP, UNKNOWN};
pub use crate::consensus::{
    build_consensus, cohort_frequencies, majority_consensus, Cohort, CohortConsensus,
};
pub use crate::diff::diff;
use crate::error::H5Error;
pub use crate::frequency::{column_frequencies, ColumnProfile, FrequencyTable};
pub use crate::mutation::{
    annotate, BindingSites, MutationRecord, MISSING_ANIMAL_FREQUENCY, MISSING_HUMAN_FREQUENCY,
    PB2_BINDING_SITES, REPORT_HEADER,
};
pub use crate::position::Position;
pub use crate::side_chain::SideChainClass;
pub use crate::substitution::{
    codon_alignment, count_substitutions, extract_codons, trim_to_shortest, Selection,
    SubstitutionCounts, SubstitutionType,
};

/// Build the mutation table of human versus animal sequences of one alignment
///
/// Records listed in `members` form the human cohort. Both consensus
/// sequences and both frequency tables are computed from the cohorts' own
/// sequences, so consensus index `i` and table position `i + 1` refer to the
/// same residue. Fails if a cohort is empty or if the two consensus
/// sequences end up with different lengths.
pub fn compare_cohorts(
    alignment: &Alignment,
    members: &HashSet<String>,
    binding_sites: &BindingSites,
) -> Result<Vec<MutationRecord>, H5Error> {
    let consensus = build_consensus(alignment, members);
    let human = consensus
        .get(Cohort::Human)
        .ok_or(H5Error::MissingConsensus(Cohort::Human))?;
    let animal = consensus
        .get(Cohort::Animal)
        .ok_or(H5Error::MissingConsensus(Cohort::Animal))?;
    let (human_table, animal_table) = cohort_frequencies(alignment, members);

    let indices = diff(human, animal)?;
    info!(
        "Consensus sequences of length {} differ at {} positions",
        human.len(),
        indices.len()
    );
    let records = annotate(
        human,
        animal,
        &human_table,
        &animal_table,
        &indices,
        binding_sites,
    )?;
    Ok(records)
}
