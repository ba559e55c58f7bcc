use std::fmt;

use log::{debug, info, warn};
use serde::Serialize;
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::alignment::{Alignment, Record, GAP};
use crate::amino_acid::{translate, STOP, UNKNOWN};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum SubstitutionType {
    Synonymous = 1,
    Missense = 2,
    Nonsense = 3,
    StopLoss = 4,
}

impl SubstitutionType {
    /// Classify the change from a reference amino acid to another one
    ///
    /// Both arguments are one-letter codes as returned by `translate`.
    pub fn classify(reference: char, other: char) -> Self {
        if reference == other {
            Self::Synonymous
        } else if reference == STOP {
            Self::StopLoss
        } else if other == STOP {
            Self::Nonsense
        } else {
            Self::Missense
        }
    }

    pub fn is_synonymous(&self) -> bool {
        *self == Self::Synonymous
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Synonymous => "synonymous",
            Self::Missense => "missense",
            Self::Nonsense => "nonsense",
            Self::StopLoss => "stop_loss",
        }
    }
}

impl fmt::Display for SubstitutionType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Direction of selection suggested by a dN/dS ratio
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub enum Selection {
    Positive,
    Purifying,
    Neutral,
}

impl Selection {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio > 1.0 {
            Self::Positive
        } else if ratio < 1.0 {
            Self::Purifying
        } else {
            Self::Neutral
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let string = match self {
            Self::Positive => "Positive selection",
            Self::Purifying => "Purifying selection",
            Self::Neutral => "Neutral evolution",
        };
        write!(f, "{}", string)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize)]
pub struct SubstitutionCounts {
    pub synonymous: usize,
    pub missense: usize,
    pub nonsense: usize,
    pub stop_loss: usize,
}

impl SubstitutionCounts {
    pub fn add(&mut self, substitution: SubstitutionType) {
        match substitution {
            SubstitutionType::Synonymous => self.synonymous += 1,
            SubstitutionType::Missense => self.missense += 1,
            SubstitutionType::Nonsense => self.nonsense += 1,
            SubstitutionType::StopLoss => self.stop_loss += 1,
        }
    }

    pub fn nonsynonymous(&self) -> usize {
        self.missense + self.nonsense + self.stop_loss
    }

    /// Non-synonymous over synonymous counts, `None` without synonymous counts
    pub fn ratio(&self) -> Option<f64> {
        if self.synonymous == 0 {
            None
        } else {
            Some(self.nonsynonymous() as f64 / self.synonymous as f64)
        }
    }

    pub fn selection(&self) -> Option<Selection> {
        self.ratio().map(Selection::from_ratio)
    }
}

/// Count synonymous and non-synonymous codons against the first record
///
/// The reference is cut into consecutive codons starting at offset 0, and
/// every other record is compared codon by codon at the same offsets. A
/// trailing incomplete codon is still compared; like any malformed codon it
/// translates to `X`. Identical amino acids (including two `X`) count as
/// synonymous.
pub fn count_substitutions(alignment: &Alignment) -> SubstitutionCounts {
    let mut counts = SubstitutionCounts::default();
    let records = alignment.records();
    let reference = match records.first() {
        Some(r) => r,
        None => return counts,
    };
    let width = alignment.width();
    let mut malformed = 0;
    for start in (0..width).step_by(3) {
        let stop = (start + 3).min(width);
        let reference_aa = translate(&reference.seq[start..stop]);
        if reference_aa == UNKNOWN {
            malformed += 1;
        }
        for record in &records[1..] {
            let aa = translate(&record.seq[start..stop]);
            counts.add(SubstitutionType::classify(reference_aa, aa));
        }
    }
    if malformed > 0 {
        warn!(
            "{} codons of reference {} do not translate and were counted as X",
            malformed, reference.id
        );
    }
    info!(
        "Compared {} records to {}: {} synonymous, {} non-synonymous",
        records.len() - 1,
        reference.id,
        counts.synonymous,
        counts.nonsynonymous()
    );
    counts
}

fn strip_gaps(seq: &str) -> String {
    seq.chars().filter(|&c| c != GAP).collect()
}

/// Split a sequence into complete codons, ignoring gaps
///
/// A trailing incomplete codon is dropped.
pub fn extract_codons(seq: &str) -> Vec<String> {
    let ungapped = strip_gaps(seq);
    ungapped
        .as_bytes()
        .chunks_exact(3)
        .map(|codon| codon.iter().map(|&b| b as char).collect())
        .collect()
}

/// Remove gaps and cut every sequence to the shortest ungapped length
pub fn trim_to_shortest(sequences: &[&str]) -> Vec<String> {
    let ungapped: Vec<String> = sequences.iter().map(|s| strip_gaps(s)).collect();
    let shortest = ungapped.iter().map(String::len).min().unwrap_or(0);
    debug!("Trimming {} sequences to {}", ungapped.len(), shortest);
    ungapped
        .into_iter()
        .map(|mut s| {
            s.truncate(shortest);
            s
        })
        .collect()
}

/// Ungapped, equal length, codon-complete copies of all records
pub fn codon_alignment(alignment: &Alignment) -> Vec<Record> {
    let trimmed = trim_to_shortest(&alignment.sequences());
    alignment
        .records()
        .iter()
        .zip(trimmed)
        .map(|(record, seq)| Record::new(record.id.clone(), extract_codons(&seq).concat()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alignment(seqs: &[&str]) -> Alignment {
        Alignment::new(
            seqs.iter()
                .enumerate()
                .map(|(i, s)| Record::new(format!("seq{}", i), *s))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_classify() {
        assert_eq!(SubstitutionType::classify('L', 'L'), SubstitutionType::Synonymous);
        assert_eq!(SubstitutionType::classify('L', 'M'), SubstitutionType::Missense);
        assert_eq!(SubstitutionType::classify('L', '*'), SubstitutionType::Nonsense);
        assert_eq!(SubstitutionType::classify('*', 'W'), SubstitutionType::StopLoss);
        assert_eq!(SubstitutionType::classify('X', 'X'), SubstitutionType::Synonymous);
        assert_eq!(SubstitutionType::classify('M', 'X'), SubstitutionType::Missense);
    }

    #[test]
    fn test_count_substitutions() {
        // CTT->CTC is silent, ATG->ATA is missense, TGG->TGA is nonsense
        let counts = count_substitutions(&alignment(&["CTTATGTGG", "CTCATATGA"]));
        assert_eq!(counts.synonymous, 1);
        assert_eq!(counts.missense, 1);
        assert_eq!(counts.nonsense, 1);
        assert_eq!(counts.nonsynonymous(), 2);
        assert_eq!(counts.ratio(), Some(2.0));
        assert_eq!(counts.selection(), Some(Selection::Positive));
    }

    #[test]
    fn test_malformed_codons_count_as_symbols() {
        // the gapped codon becomes X and differs from L
        let counts = count_substitutions(&alignment(&["CTTAAA", "C-TAAG"]));
        assert_eq!(counts.synonymous, 1);
        assert_eq!(counts.missense, 1);

        // trailing partial codon: X versus X is synonymous
        let counts = count_substitutions(&alignment(&["ATGCC", "ATGCA"]));
        assert_eq!(counts.synonymous, 2);
        assert_eq!(counts.nonsynonymous(), 0);
    }

    #[test]
    fn test_no_synonymous_substitutions() {
        let counts = count_substitutions(&alignment(&["ATG", "CTG"]));
        assert_eq!(counts.ratio(), None);
        assert_eq!(counts.selection(), None);
    }

    #[test]
    fn test_empty_alignment() {
        let counts = count_substitutions(&Alignment::default());
        assert_eq!(counts, SubstitutionCounts::default());
    }

    #[test]
    fn test_selection() {
        assert_eq!(Selection::from_ratio(0.5), Selection::Purifying);
        assert_eq!(Selection::from_ratio(1.0), Selection::Neutral);
        assert_eq!(Selection::from_ratio(1.5), Selection::Positive);
    }

    #[test]
    fn test_extract_codons() {
        assert_eq!(extract_codons("ATG-CCT-AA"), vec!["ATG", "CCT"]);
        assert_eq!(extract_codons("AT"), Vec::<String>::new());
    }

    #[test]
    fn test_codon_alignment() {
        let records = codon_alignment(&alignment(&["ATG-CCTAA", "ATGGCC---"]));
        // ungapped lengths are 8 and 6, so both are cut to 6
        assert_eq!(records[0].seq, "ATGCCT");
        assert_eq!(records[1].seq, "ATGGCC");
        assert_eq!(records[0].id, "seq0");
        assert_eq!(trim_to_shortest(&["A-CGT", "ACG"]), vec!["ACG", "ACG"]);
    }
}
