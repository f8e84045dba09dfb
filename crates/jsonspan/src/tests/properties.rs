//! Property tests with `serde_json` as the oracle: anything it serializes,
//! the scanner must classify and flatten consistently.

use alloc::{
    string::{String, ToString},
    vec::Vec,
};

use quickcheck::{Arbitrary, Gen, QuickCheck};
use serde_json::{Map, Value};

use crate::{ValueKind, materialize, navigate, scan};

#[derive(Debug, Clone)]
struct ArbJson(Value);

#[derive(Debug, Clone)]
struct ArbObject(Map<String, Value>);

impl Arbitrary for ArbJson {
    fn arbitrary(g: &mut Gen) -> Self {
        let depth = usize::arbitrary(g) % 3;
        ArbJson(gen_value(g, depth))
    }
}

impl Arbitrary for ArbObject {
    fn arbitrary(g: &mut Gen) -> Self {
        ArbObject(gen_object(g, 2))
    }
}

fn gen_value(g: &mut Gen, depth: usize) -> Value {
    let pick = if depth == 0 {
        usize::arbitrary(g) % 4
    } else {
        usize::arbitrary(g) % 6
    };
    match pick {
        0 => Value::Null,
        1 => Value::Bool(bool::arbitrary(g)),
        2 => Value::from(i64::arbitrary(g)),
        3 => Value::String(gen_string(g)),
        4 => {
            let len = usize::arbitrary(g) % 4;
            Value::Array((0..len).map(|_| gen_value(g, depth - 1)).collect())
        }
        _ => Value::Object(gen_object(g, depth - 1)),
    }
}

fn gen_object(g: &mut Gen, depth: usize) -> Map<String, Value> {
    let len = usize::arbitrary(g) % 4;
    (0..len)
        .map(|_| (gen_key(g), gen_value(g, depth)))
        .collect()
}

// String contents exercise escapes and multi-byte text but never contain
// bracket characters: shallow extent matching is blind to string contents,
// so a brace inside a nested string would corrupt a composite's extent.
// That blindness is documented engine behavior, not something these
// properties probe.
fn gen_string(g: &mut Gen) -> String {
    let alphabet = [
        'a', 'Z', '0', ' ', '"', '\\', '/', '\n', '\t', '\u{8}', '\u{1}', 'é', '\u{1234}',
        '\u{1F600}',
    ];
    let len = usize::arbitrary(g) % 12;
    (0..len)
        .map(|_| *g.choose(&alphabet).unwrap_or(&'a'))
        .collect()
}

// Keys stay in a plain alphabet: lookup compares the escaped spelling
// byte-for-byte, and these never need escaping.
fn gen_key(g: &mut Gen) -> String {
    let alphabet: Vec<char> = ('a'..='z').chain('0'..='9').collect();
    let len = 1 + usize::arbitrary(g) % 8;
    (0..len)
        .map(|_| *g.choose(&alphabet).unwrap_or(&'a'))
        .collect()
}

fn kind_of(value: &Value) -> ValueKind {
    match value {
        Value::Null => ValueKind::Null,
        Value::Bool(_) => ValueKind::Boolean,
        Value::Number(_) => ValueKind::Number,
        Value::String(_) => ValueKind::String,
        Value::Array(_) => ValueKind::Array,
        Value::Object(_) => ValueKind::Object,
    }
}

/// Property: classifying at offset 0 covers the whole serialized text and
/// reports the serialized value's kind.
#[test]
fn classification_covers_any_serialized_value() {
    fn prop(doc: ArbJson) -> bool {
        let src = doc.0.to_string();
        let buf = src.as_bytes();
        match scan::value(buf, 0) {
            Ok(span) => span.start == 0 && span.end == buf.len() - 1 && span.kind == kind_of(&doc.0),
            Err(_) => false,
        }
    }

    QuickCheck::new().tests(1_000).quickcheck(prop as fn(ArbJson) -> bool);
}

/// Property: flattening an object agrees with the oracle's member order,
/// spelling, and kinds, and every flattened key can be looked up again on
/// the original buffer to the same text.
#[test]
fn decomposition_agrees_with_the_oracle() {
    fn prop(doc: ArbObject) -> bool {
        let src = Value::Object(doc.0.clone()).to_string();
        let buf = src.as_bytes();

        let Ok(list) = materialize::decompose_object(buf, 0) else {
            return false;
        };
        if list.len() != doc.0.len() {
            return false;
        }

        for (node, (key, member)) in list.iter().zip(doc.0.iter()) {
            if node.key.as_slice() != key.as_bytes() {
                return false;
            }
            if node.key_kind != ValueKind::String || node.value_kind != kind_of(member) {
                return false;
            }
            if node.value.as_slice() != member.to_string().as_bytes() {
                return false;
            }
            let Ok(span) = navigate::object_value_by_key(buf, 0, key.as_bytes()) else {
                return false;
            };
            if span.bytes(buf) != node.value.as_slice() {
                return false;
            }
        }
        true
    }

    QuickCheck::new().tests(500).quickcheck(prop as fn(ArbObject) -> bool);
}

/// Property: flattening an array numbers its elements 0..n in order.
#[test]
fn array_decomposition_numbers_elements_in_order() {
    fn prop(doc: ArbJson) -> bool {
        let Value::Array(elements) = &doc.0 else {
            return true; // only arrays are interesting here
        };
        let src = doc.0.to_string();
        let buf = src.as_bytes();

        let Ok(list) = materialize::decompose_array(buf, 0) else {
            return false;
        };
        if list.len() != elements.len() {
            return false;
        }
        for (position, (node, element)) in list.iter().zip(elements.iter()).enumerate() {
            if node.key.as_slice() != position.to_string().as_bytes() {
                return false;
            }
            if node.key_kind != ValueKind::Number || node.value_kind != kind_of(element) {
                return false;
            }
        }
        true
    }

    QuickCheck::new().tests(1_000).quickcheck(prop as fn(ArbJson) -> bool);
}
