use crate::ScanError;

/// Matches the JSON number starting at `start` and returns the offset of
/// its last byte.
///
/// The grammar is RFC 8259's exactly: optional `-`; an integer part that is
/// a single `0` or a nonzero digit followed by digits; an optional fraction
/// and an optional exponent. The two trailing subtleties matter:
///
/// - a `.` not followed by a digit is **not** consumed, so `9.e` matches
///   just `9`;
/// - an incomplete exponent marker (`8e`, `123E-`) is **not** consumed, so
///   the number ends before it.
pub fn number(buf: &[u8], start: usize) -> Result<usize, ScanError> {
    if start >= buf.len() {
        return Err(ScanError::OffsetOutOfRange {
            offset: start,
            len: buf.len(),
        });
    }

    let mut i = start;
    if buf[i] == b'-' {
        i += 1;
    }

    // Integer part: one zero, or a nonzero digit followed by any digits.
    match buf.get(i) {
        Some(b'0') => i += 1,
        Some(b'1'..=b'9') => {
            i += 1;
            while matches!(buf.get(i), Some(b'0'..=b'9')) {
                i += 1;
            }
        }
        _ => return Err(ScanError::Mismatch(start)),
    }

    // Fraction: the dot counts only when a digit follows it.
    if buf.get(i) == Some(&b'.') && matches!(buf.get(i + 1), Some(b'0'..=b'9')) {
        i += 2;
        while matches!(buf.get(i), Some(b'0'..=b'9')) {
            i += 1;
        }
    }

    // Exponent: the marker counts only when digits follow the optional sign.
    if matches!(buf.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(buf.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        if matches!(buf.get(j), Some(b'0'..=b'9')) {
            i = j + 1;
            while matches!(buf.get(i), Some(b'0'..=b'9')) {
                i += 1;
            }
        }
    }

    Ok(i - 1)
}
