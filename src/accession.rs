use std::collections::HashSet;
use std::path::Path;

use log::{debug, info};
use tabfile::Tabfile;

use crate::error::FileError;

/// Extract the accession from one line of an accession list
///
/// Lines may be bare identifiers or FASTA headers. Only the first
/// whitespace separated token counts, so `>OQ958044.1 A/chicken/...`
/// yields `OQ958044.1`.
pub fn parse_accession(line: &str) -> Option<&str> {
    let line = line.trim();
    let line = line.strip_prefix('>').unwrap_or(line);
    line.split_whitespace().next()
}

/// Read an accession list, one identifier per line
///
/// Blank lines and lines starting with `#` are skipped. An empty file
/// yields an empty set.
pub fn read_accessions_from_file<P: AsRef<Path>>(path: P) -> Result<HashSet<String>, FileError> {
    let mut result = HashSet::new();
    let tabfile = match Tabfile::open(&path) {
        Ok(tf) => tf.comment_character('#'),
        Err(e) => return Err(FileError::io(Some(&path), e)),
    };
    for record_result in tabfile {
        let record = match record_result {
            Ok(record) => record,
            Err(e) => return Err(FileError::io(Some(&path), e)),
        };
        if let Some(accession) = parse_accession(record.line()) {
            if !result.insert(accession.to_string()) {
                debug!(
                    "Duplicate accession {} on line {}",
                    accession,
                    record.line_number()
                );
            }
        }
    }
    info!(
        "Read {} accessions from {}",
        result.len(),
        path.as_ref().display()
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accession() {
        assert_eq!(parse_accession("PP755582.1"), Some("PP755582.1"));
        assert_eq!(parse_accession("  PP755582.1 \r"), Some("PP755582.1"));
        assert_eq!(
            parse_accession(">PP755582.1 A/Texas/37/2024"),
            Some("PP755582.1")
        );
        assert_eq!(parse_accession(""), None);
        assert_eq!(parse_accession("   "), None);
        assert_eq!(parse_accession(">"), None);
    }
}
