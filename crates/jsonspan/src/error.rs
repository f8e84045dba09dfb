use thiserror::Error;

/// Failure signal shared by every scanning, navigation, path-resolution,
/// and materialization operation.
///
/// Callers that only branch on `is_ok()` observe a single success/failure
/// outcome; the variants exist for diagnostics. In particular a completed
/// scan that never found the requested key ([`ScanError::NotFound`]) and a
/// malformed document aborting the scan mid-way ([`ScanError::Mismatch`])
/// are both plain failures to a caller; distinguishing them reliably would
/// require validating the whole container first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScanError {
    /// The start offset lies at or past the end of the buffer. Checked
    /// eagerly, before any scanning.
    #[error("offset {offset} out of range for buffer of {len} bytes")]
    OffsetOutOfRange {
        /// The offending start offset.
        offset: usize,
        /// Length of the buffer it was checked against.
        len: usize,
    },
    /// The text at the given offset does not match the expected grammar:
    /// wrong leading byte, malformed escape or number, unterminated string
    /// or bracket run, an unexpected separator, and so on.
    #[error("malformed JSON value at offset {0}")]
    Mismatch(usize),
    /// A well-formed container was scanned to completion without the
    /// requested key or position turning up.
    #[error("key or position not present in the scanned container")]
    NotFound,
}
