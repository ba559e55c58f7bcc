use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

use indexmap::IndexMap;
use log::debug;

use crate::alignment::GAP;
use crate::position::Position;

/// Residue counts of a single alignment column
///
/// Residues are kept in the order in which they were first seen when
/// scanning the column from the first to the last sequence. That order
/// breaks ties when picking the majority residue.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnProfile {
    counts: IndexMap<char, usize>,
}

impl ColumnProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, residue: char) {
        *self.counts.entry(residue).or_insert(0) += 1;
    }

    pub fn count(&self, residue: char) -> usize {
        self.counts.get(&residue).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.counts.iter().map(|(&residue, &count)| (residue, count))
    }

    /// The most common residue, first-seen wins on ties
    pub fn majority(&self) -> Option<char> {
        let mut best: Option<(char, usize)> = None;
        for (&residue, &count) in &self.counts {
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((residue, count)),
            }
        }
        best.map(|(residue, _)| residue)
    }

    /// Share of `residue` in this column in percent
    ///
    /// An empty column counts as having a total of one.
    pub fn percentage(&self, residue: char) -> f64 {
        let total = self.total().max(1);
        self.count(residue) as f64 / total as f64 * 100.0
    }
}

impl fmt::Display for ColumnProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (residue, count) in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", residue, count)?;
            first = false;
        }
        Ok(())
    }
}

/// Residue counts per consensus position
///
/// Only columns whose majority residue is not a gap get a position, so the
/// positions follow the numbering of the ungapped consensus sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrequencyTable {
    columns: BTreeMap<Position, ColumnProfile>,
}

impl FrequencyTable {
    pub fn get(&self, position: Position) -> Option<&ColumnProfile> {
        self.columns.get(&position)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, Position, ColumnProfile> {
        self.columns.iter()
    }

    /// The majority residue of every position, in order
    pub fn consensus(&self) -> String {
        self.columns
            .values()
            .filter_map(ColumnProfile::majority)
            .collect()
    }
}

impl std::iter::FromIterator<ColumnProfile> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = ColumnProfile>>(iter: I) -> Self {
        let columns = iter
            .into_iter()
            .enumerate()
            .map(|(index, profile)| (Position::from_index(index), profile))
            .collect();
        Self { columns }
    }
}

/// Count the residues of every alignment column
///
/// The sequences are expected to be aligned (same length). A column whose
/// majority residue is a gap is dropped and does not advance the position
/// counter.
pub fn column_frequencies(sequences: &[&str]) -> FrequencyTable {
    let width = sequences.first().map_or(0, |s| s.len());
    let mut dropped = 0;
    let table: FrequencyTable = (0..width)
        .filter_map(|column| {
            let mut profile = ColumnProfile::new();
            for seq in sequences {
                if let Some(&b) = seq.as_bytes().get(column) {
                    profile.add(b as char);
                }
            }
            if profile.majority() == Some(GAP) {
                dropped += 1;
                None
            } else {
                Some(profile)
            }
        })
        .collect();
    debug!(
        "Reduced {} columns of {} sequences to {} positions ({} gap columns dropped)",
        width,
        sequences.len(),
        table.len(),
        dropped
    );
    table
}
