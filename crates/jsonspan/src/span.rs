use crate::ValueKind;

/// A JSON value's location within a buffer: start and **inclusive** end
/// byte offsets plus its classified kind.
///
/// A span never owns data and is only meaningful against the buffer it was
/// scanned from; [`ValueSpan::bytes`] re-borrows that buffer. Every span
/// produced by this crate satisfies `end >= start`, so a span always covers
/// at least one byte.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueSpan {
    /// Offset of the value's first byte.
    pub start: usize,
    /// Offset of the value's last byte, inclusive.
    pub end: usize,
    /// The classified type of the value.
    pub kind: ValueKind,
}

impl ValueSpan {
    pub(crate) const fn new(start: usize, end: usize, kind: ValueKind) -> Self {
        Self { start, end, kind }
    }

    /// Number of bytes covered; at least 1.
    #[must_use]
    #[allow(clippy::len_without_is_empty)] // spans are never empty
    pub const fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Re-borrows the covered bytes from `buf`.
    ///
    /// # Panics
    ///
    /// Panics if the span does not lie within `buf`, i.e. if it was scanned
    /// from a different buffer.
    #[must_use]
    pub fn bytes<'buf>(&self, buf: &'buf [u8]) -> &'buf [u8] {
        &buf[self.start..=self.end]
    }
}
