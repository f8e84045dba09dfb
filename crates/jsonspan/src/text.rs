//! Owned conversions out of the buffer: number parsing and string
//! unescaping.
//!
//! Everything else in the crate reports offsets; these two helpers are for
//! the moment a caller actually wants the value itself. Both recognize the
//! literal first (with the same recognizers the classifier uses) and then
//! convert only the matched extent, so trailing junk after the literal is
//! ignored rather than fatal.

use alloc::string::String;

use crate::{ScanError, scan};

/// Parses the JSON number starting at `start` as an `f64`.
///
/// The extent is whatever [`scan::number`] matches, so `10.5e00abc` parses
/// as `10.5` and `9.e99` as `9.0`.
pub fn number_to_f64(buf: &[u8], start: usize) -> Result<f64, ScanError> {
    let end = scan::number(buf, start)?;
    // The matched extent is all ASCII, and the JSON number grammar is a
    // subset of what f64's FromStr accepts.
    core::str::from_utf8(&buf[start..=end])
        .ok()
        .and_then(|text| text.parse().ok())
        .ok_or(ScanError::Mismatch(start))
}

/// Decodes the JSON string literal starting at `start` into its unescaped
/// text.
///
/// Handles the short escapes and `\uXXXX`, combining a high/low surrogate
/// escape pair into one scalar. An unpaired surrogate escape fails the
/// conversion, as does interior text that is not valid UTF-8.
pub fn decode_string(buf: &[u8], start: usize) -> Result<String, ScanError> {
    let end = scan::string(buf, start)?;
    let raw = &buf[start + 1..end];

    let mut out = String::with_capacity(raw.len());
    let mut i = 0_usize;
    while i < raw.len() {
        if raw[i] != b'\\' {
            // Copy one UTF-8 scalar through unchanged. The recognizer only
            // validated the byte range, not the encoding.
            let (ch, len) = bstr::decode_utf8(&raw[i..]);
            out.push(ch.ok_or(ScanError::Mismatch(start + 1 + i))?);
            i += len;
            continue;
        }

        // The recognizer already validated every escape's shape; `get`
        // keeps the bounds explicit all the same.
        let escape = *raw.get(i + 1).ok_or(ScanError::Mismatch(start + 1 + i))?;
        match escape {
            b'"' => out.push('"'),
            b'\\' => out.push('\\'),
            b'/' => out.push('/'),
            b'b' => out.push('\u{0008}'),
            b'f' => out.push('\u{000C}'),
            b'n' => out.push('\n'),
            b'r' => out.push('\r'),
            b't' => out.push('\t'),
            b'u' => {
                let unit = hex4(raw.get(i + 2..i + 6), start + 1 + i)?;
                if (0xD800..0xDC00).contains(&unit) {
                    // High surrogate: a low surrogate escape must follow.
                    if raw.get(i + 6..i + 8) != Some(b"\\u".as_slice()) {
                        return Err(ScanError::Mismatch(start + 1 + i));
                    }
                    let low = hex4(raw.get(i + 8..i + 12), start + 7 + i)?;
                    if !(0xDC00..0xE000).contains(&low) {
                        return Err(ScanError::Mismatch(start + 7 + i));
                    }
                    let scalar = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
                    out.push(char::from_u32(scalar).ok_or(ScanError::Mismatch(start + 1 + i))?);
                    i += 12;
                    continue;
                }
                if (0xDC00..0xE000).contains(&unit) {
                    // Low surrogate with no preceding high surrogate.
                    return Err(ScanError::Mismatch(start + 1 + i));
                }
                out.push(char::from_u32(unit).ok_or(ScanError::Mismatch(start + 1 + i))?);
                i += 6;
                continue;
            }
            _ => return Err(ScanError::Mismatch(start + 1 + i)),
        }
        i += 2;
    }

    Ok(out)
}

fn hex4(bytes: Option<&[u8]>, at: usize) -> Result<u32, ScanError> {
    let bytes = bytes.ok_or(ScanError::Mismatch(at))?;
    let mut scalar = 0_u32;
    for &byte in bytes {
        let digit = match byte {
            b'0'..=b'9' => byte - b'0',
            b'a'..=b'f' => byte - b'a' + 10,
            b'A'..=b'F' => byte - b'A' + 10,
            _ => return Err(ScanError::Mismatch(at)),
        };
        scalar = (scalar << 4) | u32::from(digit);
    }
    Ok(scalar)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(b"456", 456.0)]
    #[case(b"-123", -123.0)]
    #[case(b"0", 0.0)]
    #[case(b"-0", 0.0)]
    #[case(b"0.0", 0.0)]
    #[case(b"-10.123", -10.123)]
    #[case(b"10.5E+13", 10.5e13)]
    #[case(b"8.5E-2", 0.085)]
    #[case(b"-0e12", 0.0)]
    #[case(b"10.5e00abc", 10.5)] // extent stops before the junk
    #[case(b"9.e99", 9.0)] // "9", the dot is not consumed
    #[case(b"123E-", 123.0)]
    fn numbers_parse_over_their_matched_extent(#[case] input: &[u8], #[case] expected: f64) {
        let parsed = number_to_f64(input, 0).unwrap();
        assert!((parsed - expected).abs() < f64::EPSILON * expected.abs().max(1.0));
    }

    #[rstest]
    #[case(b"--123")]
    #[case(b"abc")]
    #[case(b".")]
    #[case(b"e")]
    #[case(b"")]
    fn non_numbers_fail_to_parse(#[case] input: &[u8]) {
        assert!(number_to_f64(input, 0).is_err());
    }

    #[test]
    fn plain_strings_decode_verbatim() {
        assert_eq!(decode_string(b"\"abc\"", 0).unwrap(), "abc");
        assert_eq!(decode_string(b"\"\"ab c\"", 0).unwrap(), "");
        assert_eq!(decode_string(b"\"/abc\"", 0).unwrap(), "/abc");
        assert_eq!(decode_string("\"héllo\"".as_bytes(), 0).unwrap(), "héllo");
    }

    #[test]
    fn short_escapes_decode() {
        assert_eq!(
            decode_string(b"\"\\\"\\\\\\/\\b\\f\\n\\r\\t\"", 0).unwrap(),
            "\"\\/\u{8}\u{c}\n\r\t"
        );
    }

    #[test]
    fn unicode_escapes_decode() {
        assert_eq!(decode_string(b"\"abc\\u1234\"", 0).unwrap(), "abc\u{1234}");
        assert_eq!(
            decode_string(b"\"abc\\u1A3456\"", 0).unwrap(),
            "abc\u{1A34}56"
        );
        assert_eq!(
            decode_string(b"\"abc\\u1234\\u1234abc\"", 0).unwrap(),
            "abc\u{1234}\u{1234}abc"
        );
    }

    #[test]
    fn surrogate_pairs_combine() {
        assert_eq!(
            decode_string(b"\"\\ud83d\\ude00\"", 0).unwrap(),
            "\u{1F600}"
        );
    }

    #[test]
    fn unpaired_surrogates_fail() {
        assert!(decode_string(b"\"\\ud800\"", 0).is_err()); // lone high
        assert!(decode_string(b"\"\\ude00\"", 0).is_err()); // lone low
        assert!(decode_string(b"\"\\ud83dabc\"", 0).is_err()); // high then text
    }

    #[test]
    fn malformed_literals_fail_before_decoding() {
        assert!(decode_string(b"abc", 0).is_err());
        assert!(decode_string(b"\"abc", 0).is_err());
        assert!(decode_string(b"\"abc\\u12s4\"", 0).is_err());
    }
}
