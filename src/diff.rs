use crate::error::SequenceError;

/// Zero-based indices at which two sequences differ
///
/// Both sequences must have the same length; aligning or trimming them is up
/// to the caller.
pub fn diff(a: &str, b: &str) -> Result<Vec<usize>, SequenceError> {
    if a.len() != b.len() {
        return Err(SequenceError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(a
        .bytes()
        .zip(b.bytes())
        .enumerate()
        .filter(|(_, (x, y))| x != y)
        .map(|(i, _)| i)
        .collect())
}
