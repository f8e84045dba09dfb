//! Bracketed path expressions: `["key"]` and `[N]` segments chained
//! against a document.
//!
//! A path is its own little buffer, scanned with the same recognizers used
//! on documents: a segment's extent comes from shallow bracket matching
//! over the *path* text, and its interior must be either a JSON string (an
//! object key) or a run of ASCII digits (an array index). Segments sit
//! back to back with no separators, e.g. `["contents"][0]["productID"]`.

use crate::{ScanError, ValueKind, ValueSpan, navigate, scan};

/// Parses the path segment starting at `start` in `path`.
///
/// Returns a span *over the path string*: for a key segment it covers the
/// quoted string literal (quotes included, kind `String`); for an index
/// segment it covers the digit run (kind `Number`). Anything else is a
/// mismatch, including an empty `[]`, a negative index, and an
/// unterminated bracket.
pub fn segment(path: &[u8], start: usize) -> Result<ValueSpan, ScanError> {
    let close = scan::array(path, start)?;
    if close < start + 2 {
        // `[]`: no segment content.
        return Err(ScanError::Mismatch(start));
    }
    let inner_start = start + 1;
    let inner_end = close - 1;

    match path[inner_start] {
        b'"' => {
            let end = scan::string(path, inner_start)?;
            if end == inner_end {
                Ok(ValueSpan::new(inner_start, end, ValueKind::String))
            } else {
                Err(ScanError::Mismatch(inner_start))
            }
        }
        b'0'..=b'9' => {
            if path[inner_start..=inner_end].iter().all(u8::is_ascii_digit) {
                Ok(ValueSpan::new(inner_start, inner_end, ValueKind::Number))
            } else {
                Err(ScanError::Mismatch(inner_start))
            }
        }
        _ => Err(ScanError::Mismatch(inner_start)),
    }
}

/// Resolves `path` against the document value starting at `root`.
///
/// Each segment re-roots the search at the value it selects: a `String`
/// segment does a key lookup (quotes stripped from the segment), a
/// `Number` segment an index lookup. Any failing segment (key not found,
/// index out of range, malformed segment text) aborts the whole
/// resolution; there is no partial result. An empty path resolves to the
/// classified value at `root` itself.
pub fn resolve(buf: &[u8], root: usize, path: &[u8]) -> Result<ValueSpan, ScanError> {
    let mut value = scan::value(buf, root)?;
    let mut root = root;
    let mut cursor = 0_usize;

    while cursor < path.len() {
        let seg = segment(path, cursor)?;
        value = match seg.kind {
            ValueKind::String => {
                let key = &path[seg.start + 1..seg.end];
                navigate::object_value_by_key(buf, root, key)?
            }
            ValueKind::Number => {
                let digits = &path[seg.start..=seg.end];
                let position = core::str::from_utf8(digits)
                    .ok()
                    .and_then(|digits| digits.parse::<usize>().ok())
                    .ok_or(ScanError::Mismatch(seg.start))?;
                navigate::array_value_by_position(buf, root, position)?
            }
            // Segments are only ever String or Number; anything else is a
            // contract violation and must fail rather than guess.
            _ => return Err(ScanError::Mismatch(seg.start)),
        };
        root = value.start;
        // Step past the closing quote/last digit, the `]`, and onto the
        // next `[`.
        cursor = seg.end + 2;
    }

    Ok(value)
}
