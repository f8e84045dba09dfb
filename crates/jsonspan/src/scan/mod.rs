//! Grammar recognizers and the fixed-order value classifier.
//!
//! Each recognizer takes `(buf, start)` and returns the **inclusive** end
//! offset of the value it matched at `start`, or an error. Recognizers
//! never allocate and never look past the matched extent; none of them
//! calls another; composition happens only through [`value`].

mod literal;
mod number;
mod shallow;
mod string;


pub use literal::{boolean, null};
pub use number::number;
pub use shallow::{array, object};
pub use string::string;

use crate::{ScanError, ValueKind, ValueSpan};

/// Classifies the JSON value starting at `start`.
///
/// Tries the string, number, boolean, null, shallow-object, and
/// shallow-array recognizers in that order and returns the first match as a
/// [`ValueSpan`]. The grammars are prefix-disjoint (`"` vs. digit/`-` vs.
/// `t`/`f` vs. `n` vs. `{` vs. `[`), so the order only pins down
/// determinism.
pub fn value(buf: &[u8], start: usize) -> Result<ValueSpan, ScanError> {
    if start >= buf.len() {
        return Err(ScanError::OffsetOutOfRange {
            offset: start,
            len: buf.len(),
        });
    }
    if let Ok(end) = string(buf, start) {
        return Ok(ValueSpan::new(start, end, ValueKind::String));
    }
    if let Ok(end) = number(buf, start) {
        return Ok(ValueSpan::new(start, end, ValueKind::Number));
    }
    if let Ok(end) = boolean(buf, start) {
        return Ok(ValueSpan::new(start, end, ValueKind::Boolean));
    }
    if let Ok(end) = null(buf, start) {
        return Ok(ValueSpan::new(start, end, ValueKind::Null));
    }
    if let Ok(end) = object(buf, start) {
        return Ok(ValueSpan::new(start, end, ValueKind::Object));
    }
    if let Ok(end) = array(buf, start) {
        return Ok(ValueSpan::new(start, end, ValueKind::Array));
    }
    Err(ScanError::Mismatch(start))
}
