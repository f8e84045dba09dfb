use crate::ScanError;

/// Matches the JSON string literal starting at `start` and returns the
/// offset of its closing quote.
///
/// Escapes follow RFC 8259: `\"` `\\` `\/` `\b` `\f` `\n` `\r` `\t`, and
/// `\u` followed by exactly four hexadecimal digits. A bare control
/// character inside the literal fails the match, as does running out of
/// buffer before the closing quote. The escaped text is validated but not
/// decoded; see [`crate::text::decode_string`] for that.
pub fn string(buf: &[u8], start: usize) -> Result<usize, ScanError> {
    if start >= buf.len() {
        return Err(ScanError::OffsetOutOfRange {
            offset: start,
            len: buf.len(),
        });
    }
    if buf[start] != b'"' {
        return Err(ScanError::Mismatch(start));
    }

    let mut i = start + 1;
    while i < buf.len() {
        match buf[i] {
            b'"' => return Ok(i),
            b'\\' => match buf.get(i + 1) {
                Some(b'"' | b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't') => i += 2,
                Some(b'u') => {
                    let hex = buf.get(i + 2..i + 6).ok_or(ScanError::Mismatch(i))?;
                    if !hex.iter().all(u8::is_ascii_hexdigit) {
                        return Err(ScanError::Mismatch(i));
                    }
                    i += 6;
                }
                _ => return Err(ScanError::Mismatch(i)),
            },
            byte if byte < 0x20 => return Err(ScanError::Mismatch(i)),
            _ => i += 1,
        }
    }
    // Unterminated: the buffer ended before the closing quote.
    Err(ScanError::Mismatch(start))
}
