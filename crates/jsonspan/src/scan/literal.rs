use crate::ScanError;

/// Matches the literal `true` or `false` starting exactly at `start` and
/// returns the offset of its last byte.
pub fn boolean(buf: &[u8], start: usize) -> Result<usize, ScanError> {
    keyword(buf, start, b"true").or_else(|_| keyword(buf, start, b"false"))
}

/// Matches the literal `null` starting exactly at `start` and returns the
/// offset of its last byte.
pub fn null(buf: &[u8], start: usize) -> Result<usize, ScanError> {
    keyword(buf, start, b"null")
}

fn keyword(buf: &[u8], start: usize, word: &[u8]) -> Result<usize, ScanError> {
    if start >= buf.len() {
        return Err(ScanError::OffsetOutOfRange {
            offset: start,
            len: buf.len(),
        });
    }
    if buf[start..].starts_with(word) {
        Ok(start + word.len() - 1)
    } else {
        Err(ScanError::Mismatch(start))
    }
}
