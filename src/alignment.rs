use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use bio::io::fasta;
use log::{debug, info};

use crate::error::{FileError, ParseError};

/// The gap symbol used in aligned sequences
pub const GAP: char = '-';

/// One aligned sequence and its identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: String,
    pub seq: String,
}

impl Record {
    pub fn new<I: Into<String>, S: Into<String>>(id: I, seq: S) -> Self {
        Self {
            id: id.into(),
            seq: seq.into(),
        }
    }

    /// Residue at a 0-based column
    pub fn residue(&self, column: usize) -> Option<char> {
        self.seq.as_bytes().get(column).map(|&b| b as char)
    }
}

/// A multiple sequence alignment
///
/// All records have the same length. This is checked when the alignment is
/// built, so code working with an `Alignment` can index any column of any
/// record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Alignment {
    records: Vec<Record>,
}

impl Alignment {
    pub fn new(records: Vec<Record>) -> Result<Self, ParseError> {
        if let Some(first) = records.first() {
            let width = first.seq.len();
            for (index, record) in records.iter().enumerate() {
                if !record.seq.is_ascii() {
                    return Err(ParseError::record(
                        record.id.clone(),
                        index,
                        "ASCII residue symbols",
                        record.seq.clone(),
                    ));
                }
                if record.seq.len() != width {
                    return Err(ParseError::record(
                        record.id.clone(),
                        index,
                        "all sequences to have the alignment width",
                        format!("{} instead of {}", record.seq.len(), width),
                    ));
                }
            }
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.records.first().map_or(0, |r| r.seq.len())
    }

    pub fn sequences(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.seq.as_str()).collect()
    }

    /// Split the sequences into those whose identifier is in `members` and the rest
    ///
    /// Record order is preserved within both groups.
    pub fn partition(&self, members: &HashSet<String>) -> (Vec<&str>, Vec<&str>) {
        let mut inside = Vec::new();
        let mut outside = Vec::new();
        for record in &self.records {
            if members.contains(&record.id) {
                debug!("{} is a member", record.id);
                inside.push(record.seq.as_str());
            } else {
                outside.push(record.seq.as_str());
            }
        }
        (inside, outside)
    }
}

/// Parse FASTA formatted alignment data from any reader
pub fn read_alignment<R: Read>(reader: R) -> Result<Alignment, FileError> {
    parse_records(reader, None::<&Path>)
}

/// Read a FASTA formatted alignment file
///
/// The file must contain at least one record and all sequences must have the
/// same length.
pub fn read_alignment_from_file<P: AsRef<Path>>(path: P) -> Result<Alignment, FileError> {
    let file = File::open(&path).map_err(|e| FileError::io(Some(&path), e))?;
    let alignment = parse_records(file, Some(&path))?;
    if alignment.is_empty() {
        return Err(FileError::parse(
            Some(&path),
            ParseError::file(
                path.as_ref().to_path_buf(),
                1,
                "at least one FASTA record",
                "no records".to_string(),
            ),
        ));
    }
    info!(
        "Read {} aligned sequences of width {} from {}",
        alignment.len(),
        alignment.width(),
        path.as_ref().display()
    );
    Ok(alignment)
}

fn parse_records<R: Read, P: AsRef<Path>>(
    reader: R,
    path: Option<P>,
) -> Result<Alignment, FileError> {
    let mut records = Vec::new();
    for (index, record_result) in fasta::Reader::new(reader).records().enumerate() {
        let record = record_result.map_err(|e| FileError::io(path.as_ref(), e))?;
        let seq = String::from_utf8(record.seq().to_vec()).map_err(|e| {
            FileError::parse(
                path.as_ref(),
                ParseError::record(
                    record.id().to_string(),
                    index,
                    "UTF-8 sequence data",
                    e.to_string(),
                ),
            )
        })?;
        records.push(Record::new(record.id(), seq));
    }
    Alignment::new(records).map_err(|e| FileError::parse(path.as_ref(), e))
}

/// Write records as FASTA
pub fn write_fasta<W: std::io::Write>(writer: W, records: &[Record]) -> std::io::Result<()> {
    let mut writer = fasta::Writer::new(writer);
    for record in records {
        writer.write(&record.id, None, record.seq.as_bytes())?;
    }
    writer.flush()
}
