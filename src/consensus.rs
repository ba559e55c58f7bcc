use std::collections::HashSet;
use std::fmt;

use log::{info, warn};
use serde::Serialize;

use crate::alignment::Alignment;
use crate::frequency::{column_frequencies, FrequencyTable};

/// The two groups an alignment is split into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Cohort {
    /// Records listed in the accession list
    Human,
    /// Everything else
    Animal,
}

impl fmt::Display for Cohort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Human => "human",
                Self::Animal => "animal",
            }
        )
    }
}

/// Consensus sequences of both cohorts
///
/// `None` means that the cohort had no sequences, so no consensus exists.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CohortConsensus {
    pub human: Option<String>,
    pub animal: Option<String>,
}

impl CohortConsensus {
    pub fn get(&self, cohort: Cohort) -> Option<&str> {
        match cohort {
            Cohort::Human => self.human.as_deref(),
            Cohort::Animal => self.animal.as_deref(),
        }
    }
}

/// Majority consensus of aligned sequences in ungapped reference numbering
///
/// This is the consensus of `column_frequencies`: a column whose majority
/// residue is a gap contributes nothing, so `consensus[i]` is the majority
/// residue at position `i + 1` of the frequency table. Returns `None` for an
/// empty set of sequences.
pub fn majority_consensus(sequences: &[&str]) -> Option<String> {
    if sequences.is_empty() {
        None
    } else {
        Some(column_frequencies(sequences).consensus())
    }
}

/// Split the alignment by accession membership and build both consensus sequences
///
/// An empty `members` set is not an error: every record then belongs to the
/// animal cohort and the human consensus is `None`.
pub fn build_consensus(alignment: &Alignment, members: &HashSet<String>) -> CohortConsensus {
    let (human, animal) = alignment.partition(members);
    info!(
        "Split {} records into {} human and {} animal sequences",
        alignment.len(),
        human.len(),
        animal.len()
    );
    if human.is_empty() && !members.is_empty() {
        warn!("None of the {} listed accessions occur in the alignment", members.len());
    }
    CohortConsensus {
        human: majority_consensus(&human),
        animal: majority_consensus(&animal),
    }
}

/// Frequency tables of both cohorts, computed from each cohort's own sequences
pub fn cohort_frequencies(
    alignment: &Alignment,
    members: &HashSet<String>,
) -> (FrequencyTable, FrequencyTable) {
    let (human, animal) = alignment.partition(members);
    (column_frequencies(&human), column_frequencies(&animal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::Record;

    fn members(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    fn alignment() -> Alignment {
        Alignment::new(vec![
            Record::new("h1", "MER-IK"),
            Record::new("a1", "MEKAIK"),
            Record::new("h2", "MER-VK"),
            Record::new("a2", "MEKAIR"),
            Record::new("a3", "-EK-IR"),
        ])
        .unwrap()
    }

    #[test]
    fn test_build_consensus() {
        let consensus = build_consensus(&alignment(), &members(&["h1", "h2"]));
        // the gap column of the human cohort is removed, the tie I/V goes to I
        assert_eq!(consensus.human.as_deref(), Some("MERIK"));
        assert_eq!(consensus.animal.as_deref(), Some("MEKAIR"));
    }

    #[test]
    fn test_empty_membership() {
        let alignment = alignment();
        let consensus = build_consensus(&alignment, &HashSet::new());
        assert_eq!(consensus.human, None);
        assert_eq!(consensus.animal, majority_consensus(&alignment.sequences()));
        assert_eq!(consensus.get(Cohort::Animal), Some("MEKIK"));
    }

    #[test]
    fn test_all_members() {
        let consensus = build_consensus(&alignment(), &members(&["h1", "h2", "a1", "a2", "a3"]));
        assert!(consensus.human.is_some());
        assert_eq!(consensus.animal, None);
    }

    #[test]
    fn test_consensus_matches_frequency_table() {
        let alignment = alignment();
        let (human_table, animal_table) = cohort_frequencies(&alignment, &members(&["h1", "h2"]));
        assert_eq!(human_table.consensus(), "MERIK");
        assert_eq!(animal_table.consensus(), "MEKAIR");
    }

    #[test]
    fn test_single_cohort_round_trip() {
        let alignment = Alignment::new(vec![
            Record::new("h1", "AAA"),
            Record::new("h2", "AAA"),
            Record::new("a1", "GGG"),
            Record::new("a2", "GGG"),
        ])
        .unwrap();
        let consensus = build_consensus(&alignment, &members(&["h1", "h2"]));
        assert_eq!(consensus.human.as_deref(), Some("AAA"));
        assert_eq!(consensus.animal.as_deref(), Some("GGG"));
    }
}
