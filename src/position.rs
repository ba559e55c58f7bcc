use std::fmt;

use serde::Serialize;

use crate::error::ParseError;

/// A residue position in reference numbering
///
/// By convention, positions are one-based: the first residue of a consensus
/// sequence is position 1. Strings are indexed zero-based, so converting
/// between the two goes through `from_index` and `index` only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position(usize);

impl Position {
    pub fn new(position: usize) -> Result<Position, ParseError> {
        if position == 0 {
            Err(ParseError::somewhere(
                "one-based position",
                position.to_string(),
            ))
        } else {
            Ok(Position(position))
        }
    }

    /// Position of the residue at a zero-based string index
    pub fn from_index(index: usize) -> Position {
        Position(index + 1)
    }

    /// Zero-based string index of this position
    pub fn index(&self) -> usize {
        self.0 - 1
    }

    pub fn get(&self) -> usize {
        self.0
    }

    pub fn parse(text: &str) -> Result<Position, ParseError> {
        match text.trim().parse::<usize>() {
            Ok(value) => Position::new(value),
            Err(_) => Err(ParseError::somewhere("usize", text.to_string())),
        }
    }

    pub fn parse_many(text: &str, delimiter: char) -> Result<Vec<Position>, ParseError> {
        let mut result = Vec::new();
        if text.trim() != "" {
            for token in text.split(delimiter) {
                result.push(Position::parse(token)?)
            }
        }
        Ok(result)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
