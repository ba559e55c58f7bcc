use std::collections::BTreeSet;
use std::iter::FromIterator;

use log::debug;
use serde::Serialize;

use crate::consensus::Cohort;
use crate::error::SequenceError;
use crate::frequency::FrequencyTable;
use crate::position::Position;
use crate::side_chain::SideChainClass;

/// PB2 residues known to take part in binding interactions
pub const PB2_BINDING_SITES: [usize; 35] = [
    28, 32, 35, 36, 37, 38, 40, 46, 49, 50, 51, 56, 57, 58, 60, 83, 85, 86, 88, 116, 117, 123,
    210, 323, 339, 355, 357, 361, 363, 376, 404, 406, 429, 431, 432,
];

/// Frequency reported when the animal table has no entry for a position
pub const MISSING_ANIMAL_FREQUENCY: f64 = 0.0;

/// Frequency reported when the human table has no entry for a position
pub const MISSING_HUMAN_FREQUENCY: f64 = 100.0;

/// Column names of a mutation table, in the order of `MutationRecord::row`
pub const REPORT_HEADER: [&str; 8] = [
    "Position",
    "Animal Residue",
    "User Residue",
    "Mutation",
    "Side Chain Change",
    "Binding Site?",
    "Animal Mutation Frequency",
    "User Mutation Frequency",
];

/// A set of one-based positions that make up a binding site
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingSites {
    positions: BTreeSet<Position>,
}

impl BindingSites {
    pub fn pb2() -> Self {
        PB2_BINDING_SITES
            .iter()
            .map(|&p| Position::from_index(p - 1))
            .collect()
    }

    pub fn contains(&self, position: Position) -> bool {
        self.positions.contains(&position)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl Default for BindingSites {
    fn default() -> Self {
        Self::pb2()
    }
}

impl FromIterator<Position> for BindingSites {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Self {
            positions: iter.into_iter().collect(),
        }
    }
}

/// One position at which the human and animal consensus sequences differ
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MutationRecord {
    pub position: Position,
    pub animal_residue: char,
    pub human_residue: char,
    pub animal_side_chain: SideChainClass,
    pub human_side_chain: SideChainClass,
    pub binding_site: bool,
    /// Share of the human residue among animal sequences, in percent
    pub animal_frequency: f64,
    /// Share of the human residue among human sequences, in percent
    pub human_frequency: f64,
}

impl MutationRecord {
    /// The change from the animal to the human residue, e.g. `I → M`
    pub fn mutation(&self) -> String {
        format!("{} → {}", self.animal_residue, self.human_residue)
    }

    pub fn side_chain_change(&self) -> String {
        format!("{} → {}", self.animal_side_chain, self.human_side_chain)
    }

    pub fn binding_site_label(&self) -> &'static str {
        if self.binding_site {
            "Yes"
        } else {
            "No"
        }
    }

    /// The record as table cells, matching `REPORT_HEADER`
    pub fn row(&self) -> [String; 8] {
        [
            self.position.to_string(),
            self.animal_residue.to_string(),
            self.human_residue.to_string(),
            self.mutation(),
            self.side_chain_change(),
            self.binding_site_label().to_string(),
            format!("{:.2}%", self.animal_frequency),
            format!("{:.2}%", self.human_frequency),
        ]
    }
}

fn residue_at(seq: &str, index: usize, cohort: Cohort) -> Result<char, SequenceError> {
    seq.as_bytes()
        .get(index)
        .map(|&b| b as char)
        .ok_or(SequenceError::IndexOutOfRange {
            cohort,
            index,
            length: seq.len(),
        })
}

/// Describe every differing position between two consensus sequences
///
/// `indices` are zero-based string indices as returned by `diff`. They are
/// reported as one-based positions, and the frequency tables are looked up
/// with that one-based position as well. Both frequencies give the share of
/// the human residue. A position missing from the animal table reports
/// `MISSING_ANIMAL_FREQUENCY`, one missing from the human table
/// `MISSING_HUMAN_FREQUENCY`.
pub fn annotate(
    human: &str,
    animal: &str,
    human_table: &FrequencyTable,
    animal_table: &FrequencyTable,
    indices: &[usize],
    binding_sites: &BindingSites,
) -> Result<Vec<MutationRecord>, SequenceError> {
    let mut result = Vec::with_capacity(indices.len());
    for &index in indices {
        let position = Position::from_index(index);
        let human_residue = residue_at(human, index, Cohort::Human)?;
        let animal_residue = residue_at(animal, index, Cohort::Animal)?;

        let animal_frequency = animal_table
            .get(position)
            .map_or(MISSING_ANIMAL_FREQUENCY, |column| {
                column.percentage(human_residue)
            });
        let human_frequency = human_table
            .get(position)
            .map_or(MISSING_HUMAN_FREQUENCY, |column| {
                column.percentage(human_residue)
            });

        debug!(
            "Position {}: {} -> {}",
            position, animal_residue, human_residue
        );
        result.push(MutationRecord {
            position,
            animal_residue,
            human_residue,
            animal_side_chain: SideChainClass::of(animal_residue),
            human_side_chain: SideChainClass::of(human_residue),
            binding_site: binding_sites.contains(position),
            animal_frequency,
            human_frequency,
        });
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::column_frequencies;

    fn pos(p: usize) -> Position {
        Position::new(p).unwrap()
    }

    #[test]
    fn test_pb2_binding_sites() {
        let sites = BindingSites::pb2();
        assert_eq!(sites.len(), 35);
        assert!(sites.contains(pos(28)));
        assert!(sites.contains(pos(339)));
        assert!(!sites.contains(pos(338)));
        assert!(!sites.contains(pos(1)));
    }

    #[test]
    fn test_every_position_differs() {
        let human_table = column_frequencies(&["AAA", "AAA"]);
        let animal_table = column_frequencies(&["GGG", "GGG", "GGG"]);
        let records = annotate(
            "AAA",
            "GGG",
            &human_table,
            &animal_table,
            &[0, 1, 2],
            &BindingSites::default(),
        )
        .unwrap();
        assert_eq!(records.len(), 3);
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.position.get(), i + 1);
            assert_eq!(record.mutation(), "G → A");
            assert_eq!(record.side_chain_change(), "Nonpolar → Nonpolar");
            assert_eq!(record.animal_frequency, 0.0);
            assert_eq!(record.human_frequency, 100.0);
        }
    }

    #[test]
    fn test_binding_site_flag_uses_reported_position() {
        let human = "MMK";
        let animal = "IIT";
        let sites: BindingSites = vec![pos(2)].into_iter().collect();
        let table = FrequencyTable::default();
        let records = annotate(human, animal, &table, &table, &[1, 2], &sites).unwrap();
        assert_eq!(records[0].position, pos(2));
        assert_eq!(records[0].binding_site_label(), "Yes");
        assert_eq!(records[1].position, pos(3));
        assert_eq!(records[1].binding_site_label(), "No");
    }

    #[test]
    fn test_frequencies() {
        // position 2 has I in most animal sequences and M in most human ones
        let animal_table = column_frequencies(&["MIK", "MIK", "MMK", "MIT"]);
        let human_table = column_frequencies(&["MMK", "MMK", "MIK", "MMK", "MMT"]);
        let records = annotate(
            &human_table.consensus(),
            &animal_table.consensus(),
            &human_table,
            &animal_table,
            &[1],
            &BindingSites::default(),
        )
        .unwrap();
        let record = &records[0];
        assert_eq!(record.human_residue, 'M');
        assert_eq!(record.animal_residue, 'I');
        assert_eq!(record.side_chain_change(), "Hydrophobic → Nonpolar");
        assert!((record.animal_frequency - 25.0).abs() < 1e-9);
        assert!((record.human_frequency - 80.0).abs() < 1e-9);
        assert_eq!(
            record.row(),
            [
                "2".to_string(),
                "I".to_string(),
                "M".to_string(),
                "I → M".to_string(),
                "Hydrophobic → Nonpolar".to_string(),
                "No".to_string(),
                "25.00%".to_string(),
                "80.00%".to_string(),
            ]
        );
    }

    #[test]
    fn test_missing_frequency_defaults() {
        let animal_table = column_frequencies(&["MI"]);
        let human_table = column_frequencies(&["MM"]);
        // index 4 is beyond both tables
        let records = annotate(
            "MMKRT",
            "MIKRV",
            &human_table,
            &animal_table,
            &[4],
            &BindingSites::default(),
        )
        .unwrap();
        assert_eq!(records[0].animal_frequency, MISSING_ANIMAL_FREQUENCY);
        assert_eq!(records[0].human_frequency, MISSING_HUMAN_FREQUENCY);
    }

    #[test]
    fn test_unknown_residue_and_index_out_of_range() {
        let table = FrequencyTable::default();
        let sites = BindingSites::default();
        let records = annotate("X", "-", &table, &table, &[0], &sites).unwrap();
        assert_eq!(records[0].side_chain_change(), "Gap → Unknown");

        let err = annotate("MK", "M", &table, &table, &[1], &sites).unwrap_err();
        assert_eq!(
            err,
            SequenceError::IndexOutOfRange {
                cohort: Cohort::Animal,
                index: 1,
                length: 1
            }
        );
    }
}
