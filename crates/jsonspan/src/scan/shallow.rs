use crate::ScanError;

/// Finds the extent of the object starting at `start` by depth-counting
/// `{` and `}` only, returning the offset of the matching `}`.
///
/// The interior is not validated and string contents are not recognized: a
/// brace quoted inside a member string corrupts the depth count. That is
/// the shallow-matching contract: finding a composite's extent is O(n) in
/// its length, and whoever later navigates into the value re-validates what
/// it touches.
pub fn object(buf: &[u8], start: usize) -> Result<usize, ScanError> {
    shallow(buf, start, b'{', b'}')
}

/// Finds the extent of the array starting at `start` by depth-counting `[`
/// and `]` only, returning the offset of the matching `]`.
///
/// Same contract and same string-blindness as [`object`].
pub fn array(buf: &[u8], start: usize) -> Result<usize, ScanError> {
    shallow(buf, start, b'[', b']')
}

fn shallow(buf: &[u8], start: usize, open: u8, close: u8) -> Result<usize, ScanError> {
    if start >= buf.len() {
        return Err(ScanError::OffsetOutOfRange {
            offset: start,
            len: buf.len(),
        });
    }
    if buf[start] != open {
        return Err(ScanError::Mismatch(start));
    }

    let mut depth = 0_usize;
    for (i, &byte) in buf.iter().enumerate().skip(start) {
        if byte == open {
            depth += 1;
        } else if byte == close {
            // Cannot underflow: the byte at `start` is `open`, and depth
            // zero returns before another close is seen.
            depth -= 1;
            if depth == 0 {
                return Ok(i);
            }
        }
    }
    // Unbalanced: the buffer ended at nonzero depth.
    Err(ScanError::Mismatch(start))
}
