//! Linear navigation over a single object or array level.
//!
//! Both lookups first require a balanced bracket extent at the container
//! offset, then scan members sequentially, using the classifier to step
//! over each child value. Nothing is indexed or precomputed, and member
//! syntax past the match is never touched, so an unterminated container
//! always fails but a malformed sibling after the match goes undetected.

use crate::{ScanError, ValueKind, ValueSpan, scan, util};

/// One scanned `"key": value` object member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyValuePair {
    /// The key literal, quotes included (`kind` is always `String`).
    pub key: ValueSpan,
    /// The classified value.
    pub value: ValueSpan,
}

/// Scans one `"key" : value` member beginning at or after `start`.
///
/// Leading whitespace is skipped before the key, the `:`, and the value.
/// The key must be a string literal; the value is whatever the classifier
/// matches.
pub fn key_value_pair(buf: &[u8], start: usize) -> Result<KeyValuePair, ScanError> {
    if start >= buf.len() {
        return Err(ScanError::OffsetOutOfRange {
            offset: start,
            len: buf.len(),
        });
    }
    let key_start = util::next_significant(buf, start).ok_or(ScanError::Mismatch(start))?;
    let key_end = scan::string(buf, key_start)?;

    let colon = util::next_significant(buf, key_end + 1).ok_or(ScanError::Mismatch(key_end))?;
    if buf[colon] != b':' {
        return Err(ScanError::Mismatch(colon));
    }

    let value_start = util::next_significant(buf, colon + 1).ok_or(ScanError::Mismatch(colon))?;
    let value = scan::value(buf, value_start)?;

    Ok(KeyValuePair {
        key: ValueSpan::new(key_start, key_end, ValueKind::String),
        value,
    })
}

/// Finds the value of `key` in the object starting at `object_start`.
///
/// Members are scanned in order; each member's key is compared
/// byte-for-byte against `key` over the text between its quotes. No
/// unescaping happens on either side, so a key that needs escapes must be
/// given in its escaped spelling. The scan stops at the first match; a `}`
/// reached without one reports [`ScanError::NotFound`]. An object whose
/// braces never balance fails before any member is scanned.
pub fn object_value_by_key(
    buf: &[u8],
    object_start: usize,
    key: &[u8],
) -> Result<ValueSpan, ScanError> {
    scan::object(buf, object_start)?;

    let first =
        util::next_significant(buf, object_start + 1).ok_or(ScanError::Mismatch(object_start))?;
    if buf[first] == b'}' {
        return Err(ScanError::NotFound);
    }

    let mut cursor = first;
    loop {
        let pair = key_value_pair(buf, cursor)?;
        if &buf[pair.key.start + 1..pair.key.end] == key {
            return Ok(pair.value);
        }

        let next =
            util::next_significant(buf, pair.value.end + 1).ok_or(ScanError::Mismatch(cursor))?;
        match buf[next] {
            b',' => cursor = next + 1,
            b'}' => return Err(ScanError::NotFound),
            _ => return Err(ScanError::Mismatch(next)),
        }
    }
}

/// Finds the element at zero-based `position` in the array starting at
/// `array_start`.
///
/// Symmetric to [`object_value_by_key`]: elements are skipped one
/// classifier call at a time until the running counter reaches `position`;
/// a `]` reached first reports [`ScanError::NotFound`]. An array whose
/// brackets never balance fails before any element is scanned.
pub fn array_value_by_position(
    buf: &[u8],
    array_start: usize,
    position: usize,
) -> Result<ValueSpan, ScanError> {
    scan::array(buf, array_start)?;

    let first =
        util::next_significant(buf, array_start + 1).ok_or(ScanError::Mismatch(array_start))?;
    if buf[first] == b']' {
        return Err(ScanError::NotFound);
    }

    let mut cursor = first;
    let mut index = 0_usize;
    loop {
        let element_start =
            util::next_significant(buf, cursor).ok_or(ScanError::Mismatch(cursor))?;
        let value = scan::value(buf, element_start)?;
        if index == position {
            return Ok(value);
        }

        let next =
            util::next_significant(buf, value.end + 1).ok_or(ScanError::Mismatch(cursor))?;
        match buf[next] {
            b',' => {
                cursor = next + 1;
                index += 1;
            }
            b']' => return Err(ScanError::NotFound),
            _ => return Err(ScanError::Mismatch(next)),
        }
    }
}
