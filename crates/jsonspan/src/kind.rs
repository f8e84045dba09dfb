use core::fmt;

/// The six JSON value types.
///
/// A pure tag with no payload: the scanner reports *where* a value is and
/// which of these it matched, never its decoded content.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Object,
    Array,
    Number,
    String,
    Boolean,
    Null,
}

impl ValueKind {
    /// Human-readable label for diagnostics. Never used for control flow.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ValueKind::Object => "object",
            ValueKind::Array => "array",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Boolean => "boolean",
            ValueKind::Null => "null",
        }
    }

    /// Reconstructs a kind from an integer discriminant, in the fixed order
    /// `Object = 0` through `Null = 5`. Out-of-range values yield `None`.
    #[must_use]
    pub const fn from_raw(raw: i64) -> Option<ValueKind> {
        match raw {
            0 => Some(ValueKind::Object),
            1 => Some(ValueKind::Array),
            2 => Some(ValueKind::Number),
            3 => Some(ValueKind::String),
            4 => Some(ValueKind::Boolean),
            5 => Some(ValueKind::Null),
            _ => None,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Diagnostic label for a possibly-absent kind; absent maps to `"unknown"`.
#[must_use]
pub fn kind_label(kind: Option<ValueKind>) -> &'static str {
    match kind {
        Some(kind) => kind.as_str(),
        None => "unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_cover_every_kind() {
        let expected = ["object", "array", "number", "string", "boolean", "null"];
        for (raw, label) in expected.iter().enumerate() {
            #[allow(clippy::cast_possible_wrap)]
            let kind = ValueKind::from_raw(raw as i64).unwrap();
            assert_eq!(kind.as_str(), *label);
            assert_eq!(kind_label(Some(kind)), *label);
        }
    }

    #[test]
    fn out_of_range_discriminants_are_unknown() {
        assert_eq!(ValueKind::from_raw(-1), None);
        assert_eq!(ValueKind::from_raw(6), None);
        assert_eq!(kind_label(ValueKind::from_raw(7)), "unknown");
    }
}
