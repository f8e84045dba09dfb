//! Flattening one object or array level into an owned list of key/value
//! pairs.
//!
//! This is the only component that allocates: every other operation in the
//! crate hands out offsets into the caller's buffer. Decomposition copies
//! each member's text verbatim into a [`PairNode`], building a singly
//! linked [`PairList`] in source order. Values are stored as byte strings
//! ([`BString`]) because a shallow composite's interior may be arbitrary
//! bytes that were never validated.

use alloc::{boxed::Box, string::ToString};

use bstr::BString;

use crate::{ScanError, ValueKind, navigate, scan, util};

/// One materialized member of an object or array.
#[derive(Debug, PartialEq, Eq)]
pub struct PairNode {
    /// Owned key text: the member key without its quotes for objects, the
    /// decimal element position for arrays.
    pub key: BString,
    /// `String` for object members, `Number` for array positions.
    pub key_kind: ValueKind,
    /// Owned value text, copied verbatim from the buffer.
    pub value: BString,
    /// Classified kind of the value.
    pub value_kind: ValueKind,
    /// Next member in source order.
    pub next: Option<Box<PairNode>>,
}

/// An owned, insertion-ordered, singly linked list of materialized
/// members.
///
/// The list exclusively owns its chain: dropping it releases every node
/// and each node's key and value text. Teardown walks the chain
/// iteratively, so arbitrarily long lists cannot overflow the stack, and
/// dropping an empty list is a no-op.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PairList {
    head: Option<Box<PairNode>>,
    len: usize,
}

impl PairList {
    /// Number of members.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` for a list with no members.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The first member, if any.
    #[must_use]
    pub fn head(&self) -> Option<&PairNode> {
        self.head.as_deref()
    }

    /// Iterates the members in source order.
    #[must_use]
    pub fn iter(&self) -> Pairs<'_> {
        Pairs {
            next: self.head.as_deref(),
        }
    }
}

impl Drop for PairList {
    fn drop(&mut self) {
        // Unlink node by node; letting the boxes drop nested would recurse
        // once per member and can blow the stack on a long chain.
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

/// Borrowing iterator over a [`PairList`] in source order.
#[derive(Debug, Clone)]
pub struct Pairs<'list> {
    next: Option<&'list PairNode>,
}

impl<'list> Iterator for Pairs<'list> {
    type Item = &'list PairNode;

    fn next(&mut self) -> Option<&'list PairNode> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(node)
    }
}

impl<'list> IntoIterator for &'list PairList {
    type Item = &'list PairNode;
    type IntoIter = Pairs<'list>;

    fn into_iter(self) -> Pairs<'list> {
        self.iter()
    }
}

/// Flattens the object starting at `object_start` into an owned pair
/// list.
///
/// Scans exactly like a key lookup, but captures every member instead of
/// comparing keys: key text without quotes (kind `String`), value text
/// verbatim with the classifier's kind, in source order. A malformed
/// member aborts the whole decomposition; nodes already built are dropped
/// on the way out, so a failure never yields a partial list.
pub fn decompose_object(buf: &[u8], object_start: usize) -> Result<PairList, ScanError> {
    if object_start >= buf.len() {
        return Err(ScanError::OffsetOutOfRange {
            offset: object_start,
            len: buf.len(),
        });
    }
    if buf[object_start] != b'{' {
        return Err(ScanError::Mismatch(object_start));
    }

    let mut list = PairList::default();
    let first =
        util::next_significant(buf, object_start + 1).ok_or(ScanError::Mismatch(object_start))?;
    if buf[first] == b'}' {
        return Ok(list);
    }

    let mut len = 0_usize;
    let mut slot = &mut list.head;
    let mut cursor = first;
    loop {
        let pair = navigate::key_value_pair(buf, cursor)?;
        let node = slot.insert(Box::new(PairNode {
            key: BString::from(&buf[pair.key.start + 1..pair.key.end]),
            key_kind: ValueKind::String,
            value: BString::from(pair.value.bytes(buf)),
            value_kind: pair.value.kind,
            next: None,
        }));
        slot = &mut node.next;
        len += 1;

        let next =
            util::next_significant(buf, pair.value.end + 1).ok_or(ScanError::Mismatch(cursor))?;
        match buf[next] {
            b',' => cursor = next + 1,
            b'}' => break,
            _ => return Err(ScanError::Mismatch(next)),
        }
    }

    list.len = len;
    Ok(list)
}

/// Flattens the array starting at `array_start` into an owned pair list.
///
/// Symmetric to [`decompose_object`], with each key synthesized as the
/// decimal text of the element's zero-based position (kind `Number`).
pub fn decompose_array(buf: &[u8], array_start: usize) -> Result<PairList, ScanError> {
    if array_start >= buf.len() {
        return Err(ScanError::OffsetOutOfRange {
            offset: array_start,
            len: buf.len(),
        });
    }
    if buf[array_start] != b'[' {
        return Err(ScanError::Mismatch(array_start));
    }

    let mut list = PairList::default();
    let first =
        util::next_significant(buf, array_start + 1).ok_or(ScanError::Mismatch(array_start))?;
    if buf[first] == b']' {
        return Ok(list);
    }

    let mut len = 0_usize;
    let mut slot = &mut list.head;
    let mut cursor = first;
    loop {
        let element_start =
            util::next_significant(buf, cursor).ok_or(ScanError::Mismatch(cursor))?;
        let value = scan::value(buf, element_start)?;
        let node = slot.insert(Box::new(PairNode {
            key: BString::from(len.to_string()),
            key_kind: ValueKind::Number,
            value: BString::from(value.bytes(buf)),
            value_kind: value.kind,
            next: None,
        }));
        slot = &mut node.next;
        len += 1;

        let next =
            util::next_significant(buf, value.end + 1).ok_or(ScanError::Mismatch(cursor))?;
        match buf[next] {
            b',' => cursor = next + 1,
            b']' => break,
            _ => return Err(ScanError::Mismatch(next)),
        }
    }

    list.len = len;
    Ok(list)
}

/// Flattens whichever of object or array starts at `start`: the object
/// decomposition is tried first, then the array one.
pub fn decompose(buf: &[u8], start: usize) -> Result<PairList, ScanError> {
    decompose_object(buf, start).or_else(|_| decompose_array(buf, start))
}
