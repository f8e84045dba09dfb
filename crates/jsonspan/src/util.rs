//! Low-level buffer helpers shared by the recognizers and the navigator.

/// Returns the offset of the first byte at or after `start` that is not
/// ASCII whitespace or a control character, or `None` if the buffer ends
/// first.
///
/// Everything at or below `0x20` is skipped; multi-byte UTF-8 sequences
/// (`>= 0x80`) are significant.
pub(crate) fn next_significant(buf: &[u8], start: usize) -> Option<usize> {
    buf.get(start..)?
        .iter()
        .position(|&b| b > b' ')
        .map(|found| start + found)
}
